//! Types module
//!
//! Contains the core data structures of the library:
//! - `account`: The bank account and its balance operations
//! - `validator`: Inclusive integer range checks
//! - `error`: Error type shared by the whole crate

pub mod account;
pub mod error;
pub mod validator;

pub use account::Account;
pub use error::LibraryError;
pub use validator::Validator;
