use clap::Parser;
use currencli::AppError;
use currencli::api::client::ExchangeRateClient;
use currencli::cli::dispatcher::Dispatcher;
use currencli::cli::main_types::{Cli, Commands};
use currencli::core::input::TerminalInput;
use currencli::display::Palette;
use currencli::storage::config::{AppConfig, ConfigOverrides};
use currencli::utils::logging::init_logging;
use std::io;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = Palette::detect();
    let overrides = ConfigOverrides {
        config_dir: cli.config_dir,
        api_base_url: cli.api_url,
    };

    if let Err(err) = run(cli.command, overrides, palette).await {
        eprintln!(
            "{} {}",
            err.severity().emoji(),
            palette.error(&err.display_friendly())
        );
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

async fn run(
    command: Option<Commands>,
    overrides: ConfigOverrides,
    palette: Palette,
) -> Result<(), AppError> {
    let config = AppConfig::resolve(overrides)?;
    tracing::debug!("Resolved configuration: {:?}", config);

    let client = ExchangeRateClient::new(config.api_base_url.clone(), config.timeout_seconds)?;
    let dispatcher = Dispatcher::new(&config, client)
        .with_palette(palette)
        .with_progress(atty::is(atty::Stream::Stdout));

    let mut input = TerminalInput::new();
    let mut stdout = io::stdout();
    dispatcher.run(command, &mut input, &mut stdout).await
}
