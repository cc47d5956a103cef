use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use seo_keyword_finder::config::toml_config::TomlConfig;
use seo_keyword_finder::core::view::{render, OutputFormat, View, LOADING_TEXT};
use seo_keyword_finder::utils::{logger, validation::Validate};
use seo_keyword_finder::{
    ApiKey, AppConfig, CliArgs, GeminiAdapter, KeywordError, KeywordProvider, QueryController,
    SubmitOutcome,
};
use std::io::{IsTerminal, Write};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const QUIT_COMMANDS: [&str; 3] = [":q", "quit", "exit"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    let adapter = match GeminiAdapter::new(config.clone()) {
        Ok(adapter) => adapter,
        Err(e) => exit_with(&e),
    };
    let controller = QueryController::new(adapter);

    match args.joined_query() {
        Some(query) => {
            let outcome = run_search(&controller, &query, &config).await?;
            if !matches!(outcome, SubmitOutcome::Completed { .. }) {
                std::process::exit(1);
            }
        }
        None => run_interactive(&controller, &config).await?,
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> seo_keyword_finder::Result<AppConfig> {
    let api_key = ApiKey::from_env()?;

    let file = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let config = AppConfig::resolve(api_key, file.as_ref(), args.overrides());
    config.validate()?;
    Ok(config)
}

fn exit_with(e: &KeywordError) -> ! {
    tracing::error!("❌ Startup failed: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn start_spinner(config: &AppConfig) -> Option<ProgressBar> {
    if config.format != OutputFormat::Table || !std::io::stderr().is_terminal() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(LOADING_TEXT);
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

async fn run_search<P: KeywordProvider>(
    controller: &QueryController<P>,
    query: &str,
    config: &AppConfig,
) -> anyhow::Result<SubmitOutcome> {
    let spinner = start_spinner(config);
    let outcome = controller.submit_query(query).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let state = controller.snapshot();
    let view = View::from_state(&state);
    let text = render(&view, config.format, config.color)?;
    match view {
        View::Error(_) => eprintln!("❌ {}", text),
        _ => println!("{}", text),
    }
    Ok(outcome)
}

async fn run_interactive<P: KeywordProvider>(
    controller: &QueryController<P>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    // Prompt and placeholder go to stderr, and only for a human at the keyboard.
    let attended = std::io::stdin().is_terminal();
    if attended {
        let state = controller.snapshot();
        eprintln!("{}", render(&View::from_state(&state), config.format, config.color)?);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if attended {
            eprint!("> ");
            std::io::stderr().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        run_search(controller, &line, config).await?;
    }

    tracing::debug!("Interactive session closed");
    Ok(())
}
