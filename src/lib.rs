pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Conversion logic and prompt capability
pub mod storage; // Configuration, API key and favorites persistence

/// Support modules (used across layers)
pub mod api; // ExchangeRate-API client
pub mod display; // Output styling and progress
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
