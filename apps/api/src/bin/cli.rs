use anyhow::Result;
use clap::Parser;

use resumebot::cli::{self, CliArgs};
use resumebot::config::Config;
use resumebot::{build_assistant, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    // Config first so values from .env are visible to clap's env fallbacks.
    let mut config = Config::from_env()?;
    let args = CliArgs::parse();
    if let Some(path) = args.resume {
        config.resume_path = path;
    }

    // Logs go to stderr so they never interleave with answers; quiet by default.
    telemetry::init("warn");

    let assistant = build_assistant(&config)?;
    assistant.document().text().await?;

    cli::run(&assistant, args.width).await
}
