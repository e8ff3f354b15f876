//! Storage layer for currencli
//!
//! Handles configuration resolution, the API key file and the favorites file.

use crate::error::StorageError;

pub mod config;
pub mod credentials;
pub mod favorites;

type Result<T> = std::result::Result<T, StorageError>;
