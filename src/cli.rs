use clap::Parser;
use portfolio_feed::application::dto::OutputFormat;
use portfolio_feed::config::CliOverrides;
use std::path::PathBuf;

/// Turn a developer's public GitHub repositories into portfolio project cards
#[derive(Parser, Debug)]
#[command(name = "portfolio-feed")]
#[command(version)]
#[command(about = "Turn a developer's public GitHub repositories into portfolio project cards", long_about = None)]
pub struct Args {
    /// GitHub account to showcase (env: GITHUB_USERNAME)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./portfolio-feed.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GitHub API base URL (env: GITHUB_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            username: self.username.clone(),
            format: self.format,
            api_base_url: self.api_url.clone(),
        }
    }
}
