//! Teaching Library
//! # Overview
//!
//! A small library used to demonstrate unit-testing techniques: plain
//! assertions, error testing, fixtures and parameterized tests.
//!
//! # Architecture
//!
//! - [`types`] - Core data types:
//!   - [`types::account`] - Bank account with a non-negative balance
//!   - [`types::validator`] - Inclusive integer range checks
//!   - [`types::error`] - The crate-wide error type
//! - [`utils`] - Arithmetic and string helpers
//! - [`demo`] - The report printed by the binary
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - `tracing` subscriber setup for the binary
//!
//! # Accounts
//!
//! An account starts at zero and supports:
//!
//! - **Deposit**: Credit funds (the sign of the amount is not checked)
//! - **Withdraw**: Debit funds, rejected with `InsufficientFunds` if the balance is too low
//! - **Transfer**: Withdraw from one account, then deposit into another

// Module declarations
pub mod cli;
pub mod demo;
pub mod logging;
pub mod types;
pub mod utils;

pub use demo::DemoConfig;
pub use types::{Account, LibraryError, Validator};
pub use utils::{count_positives, is_positive, my_add, my_sqrt, to_upper};
