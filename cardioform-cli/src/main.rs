mod logging;

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing::info;

use cardioform::{PredictorConfig, PredictorUI, SessionReport, UiOptions};

use crate::logging::{LogConfig, init_logging};

#[derive(Debug, Parser)]
#[command(
    name = "cardioform",
    version,
    about = "Collect clinical parameters and ask a prediction service about heart disease"
)]
struct Cli {
    /// Prediction endpoint (overrides the config file)
    #[arg(short = 'e', long = "endpoint", value_name = "URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds; 0 waits forever
    #[arg(short = 't', long = "timeout", value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file (.json, .yaml/.yml, .toml) with endpoint, timeout and defaults
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keymap file replacing the built-in bindings
    #[arg(long = "keymap", value_name = "PATH")]
    keymap: Option<PathBuf>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Hide the key help line in the footer
    #[arg(long = "no-help")]
    no_help: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file; logging is off without it
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Include field values in log output
    #[arg(long = "log-data")]
    log_data: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    init_logging(&log_config).wrap_err("failed to open log file")?;

    let config = load_config(&cli)?;
    let options = build_options(&cli)?;

    let mut ui = PredictorUI::new().with_config(config).with_options(options);
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }

    let report = ui.run().map_err(Report::msg)?;
    info!(attempts = report.attempts, "form closed");
    if let Some(summary) = render_summary(&report) {
        println!("{summary}");
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<PredictorConfig> {
    let mut config = match cli.config.as_ref() {
        Some(path) => PredictorConfig::from_path(path)
            .map_err(|err| eyre!("{err:#}"))
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => PredictorConfig::default(),
    };
    if let Some(endpoint) = cli.endpoint.as_ref() {
        config = config.with_endpoint(endpoint.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs);
    }
    Ok(config)
}

fn build_options(cli: &Cli) -> Result<UiOptions> {
    let mut options = UiOptions::default().with_help(!cli.no_help);
    if let Some(path) = cli.keymap.as_ref() {
        let source = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read keymap {}", path.display()))?;
        options = options
            .with_keymap_json(&source)
            .map_err(|err| eyre!("{err:#}"))
            .wrap_err_with(|| format!("invalid keymap {}", path.display()))?;
    }
    Ok(options)
}

/// Text printed once the terminal is restored; `None` when nothing was obtained.
fn render_summary(report: &SessionReport) -> Option<String> {
    if let Some(prediction) = report.prediction {
        return Some(format!("{}\n{}", prediction.headline(), prediction.advice()));
    }
    report
        .api_error
        .as_ref()
        .map(|message| format!("Error: {message}"))
}
