use crate::api::client::RateSource;
use crate::api::models::RateTable;
use crate::core::conversion::convert;
use crate::core::input::InputProvider;
use crate::display::{Palette, ProgressSpinner};
use crate::error::{AppError, CliError};
use crate::storage::favorites::{FavoritePair, FavoritesStore};
use crate::utils::validation::{normalize_currency_code, parse_amount};
use crate::utils::text::format_number;
use std::io::Write;

pub const PROMPT_AMOUNT: &str = "Enter amount:";
pub const PROMPT_FROM: &str = "From currency (e.g., USD):";
pub const PROMPT_TO: &str = "To currency (e.g., EUR):";
pub const PROMPT_BASE: &str = "Base currency (e.g., USD):";

/// Per-invocation state shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub api_key: &'a str,
    pub palette: Palette,
    pub show_progress: bool,
}

pub(crate) fn emit(out: &mut dyn Write, line: &str) -> Result<(), AppError> {
    writeln!(out, "{}", line).map_err(|e| AppError::Cli(CliError::Output(e.to_string())))
}

async fn fetch_with_progress<R: RateSource + ?Sized>(
    rates: &R,
    ctx: &HandlerContext<'_>,
    base_currency: &str,
) -> Result<RateTable, AppError> {
    let mut spinner = ProgressSpinner::start_if(
        ctx.show_progress,
        &format!("Fetching exchange rates for {}...", base_currency),
    );
    let result = rates.fetch_rates(ctx.api_key, base_currency).await;
    spinner.stop();
    Ok(result?)
}

#[derive(Default)]
pub struct RatesHandler;

impl RatesHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn convert<R: RateSource + ?Sized>(
        &self,
        rates: &R,
        ctx: &HandlerContext<'_>,
        input: &mut dyn InputProvider,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let amount = input.prompt(PROMPT_AMOUNT)?;
        let from = normalize_currency_code(&input.prompt(PROMPT_FROM)?);
        let to = normalize_currency_code(&input.prompt(PROMPT_TO)?);
        let amount = parse_amount(&amount)?;
        tracing::debug!("Converting {} {} to {}", amount, from, to);

        let table = fetch_with_progress(rates, ctx, &from).await?;
        let result = convert(amount, &table, &from, &to)?;

        let palette = ctx.palette;
        emit(
            out,
            &format!(
                "{} {} {}",
                palette.heading("Converted amount:"),
                palette.value(&format_number(result)),
                palette.heading(&to)
            ),
        )
    }

    pub async fn list<R: RateSource + ?Sized>(
        &self,
        rates: &R,
        ctx: &HandlerContext<'_>,
        input: &mut dyn InputProvider,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let base = normalize_currency_code(&input.prompt(PROMPT_BASE)?);
        let table = fetch_with_progress(rates, ctx, &base).await?;

        let palette = ctx.palette;
        emit(
            out,
            &palette.heading(&format!("Exchange rates for {}:", base)),
        )?;
        for (currency, rate) in &table {
            emit(
                out,
                &format!(
                    "{}: {}",
                    palette.code(currency),
                    palette.value(&format_number(*rate))
                ),
            )?;
        }
        Ok(())
    }
}

pub struct FavoritesHandler<'a> {
    store: &'a FavoritesStore,
}

impl<'a> FavoritesHandler<'a> {
    pub fn new(store: &'a FavoritesStore) -> Self {
        Self { store }
    }

    pub fn save(
        &self,
        palette: Palette,
        input: &mut dyn InputProvider,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let from = input.prompt(PROMPT_FROM)?;
        let to = input.prompt(PROMPT_TO)?;
        let pair = FavoritePair::new(&from, &to);

        let favorites = self.store.append(pair.clone())?;
        tracing::debug!(
            "{} now holds {} favorite pairs",
            self.store.path().display(),
            favorites.len()
        );

        emit(
            out,
            &palette.success(&format!(
                "Saved favorite pair: {} -> {}",
                pair.from_currency, pair.to_currency
            )),
        )
    }

    pub fn show(&self, palette: Palette, out: &mut dyn Write) -> Result<(), AppError> {
        let favorites = self.store.load()?;

        if favorites.is_empty() {
            return emit(out, &palette.notice("No favorite pairs saved."));
        }

        emit(out, &palette.heading("Favorite currency pairs:"))?;
        for pair in &favorites {
            emit(
                out,
                &format!(
                    "{} -> {}",
                    palette.code(&pair.from_currency),
                    palette.value(&pair.to_currency)
                ),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::api::client::RateSource;
    use crate::api::models::RateTable;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory rate source that records every base currency requested.
    pub struct StubRates {
        pub table: RateTable,
        pub valid_key: String,
        pub requested: Mutex<Vec<String>>,
    }

    impl StubRates {
        pub fn new(entries: &[(&str, f64)]) -> Self {
            Self {
                table: entries
                    .iter()
                    .map(|(code, rate)| (code.to_string(), *rate))
                    .collect(),
                valid_key: "abc123".to_string(),
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().expect("lock poisoned").clone()
        }
    }

    #[async_trait]
    impl RateSource for StubRates {
        async fn fetch_rates(
            &self,
            api_key: &str,
            base_currency: &str,
        ) -> Result<RateTable, ApiError> {
            self.requested
                .lock()
                .expect("lock poisoned")
                .push(base_currency.to_string());
            if api_key != self.valid_key {
                return Err(ApiError::Http {
                    status: 403,
                    endpoint: format!("/v6/***/latest/{}", base_currency),
                    message: "invalid-key".to_string(),
                });
            }
            Ok(self.table.clone())
        }

        async fn validate_credential(&self, api_key: &str) -> bool {
            api_key == self.valid_key
        }
    }
}
