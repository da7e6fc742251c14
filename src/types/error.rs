//! Error types for the teaching library
//!
//! Every fallible operation in the crate returns a [`LibraryError`].
//!
//! # Error Categories
//!
//! - **Account Errors**: Insufficient funds on withdrawal or transfer
//! - **Math Errors**: Negative square root argument, integer overflow
//! - **Argument Errors**: Command-line input the demo cannot use
//! - **I/O Errors**: Failures while writing demo output

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the library
///
/// None of these errors are retryable on their own: the caller has to change
/// its input (more funds, a smaller amount, a non-negative argument).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LibraryError {
    /// Withdrawal would drive the balance negative
    ///
    /// The account is left unchanged.
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the request
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Square root of a negative number was requested
    #[error("Negative argument: {value}")]
    NegativeArgument {
        /// The rejected argument
        value: f64,
    },

    /// Arithmetic overflowed
    ///
    /// Raised by integer addition and by balance updates that do not fit in
    /// a `Decimal`.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Command-line argument with an unusable value
    #[error("Invalid argument {argument}: {message}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: String,
        /// What is wrong with it
        message: String,
    },

    /// I/O error while writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LibraryError {
    fn from(error: std::io::Error) -> Self {
        LibraryError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LibraryError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        LibraryError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create a NegativeArgument error
    pub fn negative_argument(value: f64) -> Self {
        LibraryError::NegativeArgument { value }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LibraryError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(argument: &str, message: &str) -> Self {
        LibraryError::InvalidArgument {
            argument: argument.to_string(),
            message: message.to_string(),
        }
    }
}
