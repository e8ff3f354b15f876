use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("AuthError: {0}")]
    Auth(#[from] AuthError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ConversionError: {0}")]
    Conversion(#[from] ConversionError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid amount '{input}': expected a finite number")]
    InvalidAmount { input: String },
    #[error("Failed to read input: {0}")]
    InputRead(String),
    #[error("Failed to write output: {0}")]
    Output(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error fetching exchange rates: request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Error fetching exchange rates: HTTP {status} from {endpoint}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Error fetching exchange rates: failed to parse response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
    #[error("Error fetching exchange rates: provider returned '{error_type}'")]
    Provider { error_type: String },
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid API key. Please try again.")]
    InvalidApiKey,
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unable to convert from {from} to {to}")]
    Unconvertible { from: String, to: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Favorites file {path} is not valid JSON: {message}")]
    FavoritesParse { path: String, message: String },
    #[error("Failed to serialize favorites: {message}")]
    FavoritesSerialize { message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported operating system: {os}")]
    UnsupportedPlatform { os: String },
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("Configuration parse error in {path}: {message}")]
    ParseError { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Config(ConfigError::UnsupportedPlatform { .. }) => ErrorSeverity::Critical,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Auth(_) => ErrorSeverity::High,
            AppError::Api(api_error) => match api_error {
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Conversion(_) => ErrorSeverity::Medium,
            AppError::Cli(_) => ErrorSeverity::Low,
        }
    }

    /// Message shown to the user without the layer prefix.
    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Cli(e) => e.to_string(),
            AppError::Api(e) => e.to_string(),
            AppError::Config(e) => e.to_string(),
            AppError::Auth(e) => e.to_string(),
            AppError::Storage(e) => e.to_string(),
            AppError::Conversion(e) => e.to_string(),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Auth(AuthError::InvalidApiKey) => Some(
                "Delete ~/.exchange-rate-api.txt and run currencli again to enter a new key"
                    .to_string(),
            ),
            AppError::Api(ApiError::Transport { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Conversion(ConversionError::Unconvertible { .. }) => Some(
                "'currencli list' shows the currency codes available for a base currency"
                    .to_string(),
            ),
            AppError::Storage(StorageError::FavoritesParse { .. }) => {
                Some("Fix or remove favorites.json in the current directory".to_string())
            }
            _ => None,
        }
    }
}
