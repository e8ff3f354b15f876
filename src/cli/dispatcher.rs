use crate::api::client::RateSource;
use crate::cli::command_handlers::{FavoritesHandler, HandlerContext, RatesHandler, emit};
use crate::cli::main_types::{Cli, Commands};
use crate::core::input::InputProvider;
use crate::display::Palette;
use crate::error::{AppError, AuthError};
use crate::storage::config::AppConfig;
use crate::storage::credentials::CredentialStore;
use crate::storage::favorites::FavoritesStore;
use clap::CommandFactory;
use std::io::Write;

pub const PROMPT_API_KEY: &str = "Enter your ExchangeRate-API key:";

/// Owns every component for one invocation and runs the startup sequence:
/// acquire the API key, validate it, then dispatch a single command.
pub struct Dispatcher<R: RateSource> {
    rates: R,
    credentials: CredentialStore,
    favorites: FavoritesStore,
    palette: Palette,
    show_progress: bool,
}

impl<R: RateSource> Dispatcher<R> {
    pub fn new(config: &AppConfig, rates: R) -> Self {
        Self {
            rates,
            credentials: CredentialStore::new(config.credential_path.clone()),
            favorites: FavoritesStore::new(config.favorites_path.clone()),
            palette: Palette::plain(),
            show_progress: false,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Load the stored key, or prompt once and persist the answer.
    pub fn acquire_credential(
        &self,
        input: &mut dyn InputProvider,
        out: &mut dyn Write,
    ) -> Result<String, AppError> {
        if let Some(api_key) = self.credentials.load()? {
            tracing::debug!("Using API key from {}", self.credentials.path().display());
            return Ok(api_key);
        }

        tracing::debug!(
            "No API key at {}, prompting",
            self.credentials.path().display()
        );
        let api_key = input.prompt_secret(PROMPT_API_KEY)?;
        self.credentials.save(&api_key)?;
        emit(out, &self.palette.success("API key saved successfully."))?;
        Ok(api_key)
    }

    /// A rejected key is terminal; there is no re-prompt.
    pub async fn validate_credential(&self, api_key: &str) -> Result<(), AppError> {
        if self.rates.validate_credential(api_key).await {
            Ok(())
        } else {
            Err(AuthError::InvalidApiKey.into())
        }
    }

    pub async fn dispatch(
        &self,
        command: Commands,
        api_key: &str,
        input: &mut dyn InputProvider,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let ctx = HandlerContext {
            api_key,
            palette: self.palette,
            show_progress: self.show_progress,
        };
        tracing::debug!("Dispatching {:?}", command);

        match command {
            Commands::Convert => {
                RatesHandler::new()
                    .convert(&self.rates, &ctx, input, out)
                    .await
            }
            Commands::List => RatesHandler::new().list(&self.rates, &ctx, input, out).await,
            Commands::Save => FavoritesHandler::new(&self.favorites).save(self.palette, input, out),
            Commands::Favorites => FavoritesHandler::new(&self.favorites).show(self.palette, out),
        }
    }

    /// With no command the key is still acquired and validated before help
    /// is printed.
    pub async fn run(
        &self,
        command: Option<Commands>,
        input: &mut dyn InputProvider,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let api_key = self.acquire_credential(input, out)?;
        self.validate_credential(&api_key).await?;
        match command {
            Some(command) => self.dispatch(command, &api_key, input, out).await,
            None => emit(out, Cli::command().render_help().to_string().trim_end()),
        }
    }
}
