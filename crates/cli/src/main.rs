//! Example driver for the id resolution library.
//!
//! Usage: `termsvr [--leaderboard] [--list-matches] <algo name>`
//!
//! `--leaderboard` uses the fast paginated scan (the algo must be currently
//! ranked); without it the full id space is brute-forced, which can take a
//! while for old uploads.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use termsvr_core::{
    load_config, replay, validate_config, ApiClient, Config, HttpApiClient, IdResolver,
    SearchOutcome,
};

struct Args {
    name: String,
    leaderboard: bool,
    list_matches: bool,
}

fn parse_args() -> Result<Args> {
    let mut name = None;
    let mut leaderboard = false;
    let mut list_matches = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--leaderboard" => leaderboard = true,
            "--list-matches" => list_matches = true,
            other if other.starts_with("--") => bail!("unknown flag: {}", other),
            other => {
                if name.replace(other.to_string()).is_some() {
                    bail!("expected exactly one algo name");
                }
            }
        }
    }

    let Some(name) = name else {
        bail!("usage: termsvr [--leaderboard] [--list-matches] <algo name>");
    };

    Ok(Args {
        name,
        leaderboard,
        list_matches,
    })
}

fn load_config_or_default() -> Result<Config> {
    let config_path = std::env::var("TERMSVR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        Config::default()
    };

    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(found) => {
            if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<bool> {
    let args = parse_args()?;
    let config = load_config_or_default()?;

    let client: Arc<dyn ApiClient> =
        Arc::new(HttpApiClient::new(&config.api).context("Failed to create API client")?);
    let resolver = IdResolver::new(Arc::clone(&client), config.search.clone());

    let outcome = if args.leaderboard {
        resolver
            .search_leaderboard(&args.name)
            .await
            .context("Leaderboard search failed")?
    } else {
        resolver
            .search_id_space(&args.name)
            .await
            .context("Brute-force search failed")?
    };

    let id = match outcome {
        SearchOutcome::Found(id) => id,
        SearchOutcome::NotFound => {
            println!("{}: not found", args.name);
            return Ok(false);
        }
    };

    println!("{}: {}", args.name, id);

    if args.list_matches {
        let urls = replay::watch_urls(client.as_ref(), id)
            .await
            .context("Failed to list matches")?;
        for url in urls {
            println!("{}", url);
        }
    }

    Ok(true)
}
