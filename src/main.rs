mod cli;

use cli::Args;
use portfolio_feed::adapters::outbound::console::StderrProgressReporter;
use portfolio_feed::adapters::outbound::metrics::RandomMetricsGenerator;
use portfolio_feed::adapters::outbound::network::{GitHubRepositoryClient, ResponseCache};
use portfolio_feed::application::dto::{FeedRequest, ProjectFeedState};
use portfolio_feed::application::factories::{FormatterFactory, PresenterFactory};
use portfolio_feed::application::provider::ProjectProvider;
use portfolio_feed::application::use_cases::LoadProjectsUseCase;
use portfolio_feed::config::{self, EnvOverrides};
use portfolio_feed::shared::error::ExitCode;
use portfolio_feed::shared::Result;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "portfolio_feed=warn";

#[tokio::main]
async fn main() {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let file_config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let config = config::resolve(&args.overrides(), &EnvOverrides::from_env(), file_config.as_ref())?;
    tracing::debug!(
        user = %config.username,
        api = %config.api_base_url,
        authenticated = config.token.is_some(),
        "resolved configuration"
    );

    // One cache per process, shared by every request the client makes
    let cache = Arc::new(ResponseCache::new(config.cache_ttl));
    let client = GitHubRepositoryClient::new(cache)?
        .with_base_url(config.api_base_url.as_str())
        .with_token(config.token.clone());

    let use_case = LoadProjectsUseCase::new(
        client,
        RandomMetricsGenerator::new(),
        StderrProgressReporter::new(),
    );
    let provider = ProjectProvider::spawn(use_case, FeedRequest::new(config.username.as_str()));

    let state = provider.settled_unless(tokio::signal::ctrl_c()).await?;

    eprintln!("{}", FormatterFactory::progress_message(config.format));
    let formatter = FormatterFactory::create(config.format);
    let rendered = formatter.format(&state)?;

    let presenter = PresenterFactory::create(args.output.into());
    presenter.present(&rendered)?;

    Ok(exit_code_for(&state))
}

fn exit_code_for(state: &ProjectFeedState) -> ExitCode {
    match state {
        ProjectFeedState::Loaded { .. } => ExitCode::Success,
        ProjectFeedState::Errored { .. } | ProjectFeedState::Loading => ExitCode::FeedUnavailable,
    }
}
