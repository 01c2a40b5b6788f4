//! Default command - choose a repository and report pushed commits missing from it.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use pushlog_core::{Config, DEFAULT_CONFIG_FILE};
use pushlog_github::{Auth, GitHubClient};

use crate::commands::ScanArgs;
use crate::env::{self, EnvFile};
use crate::output;
use crate::prompt::Prompt;
use crate::services::{ScanRequest, ScanService};
use crate::settings::Settings;

/// Run the scan command.
pub fn run(args: &ScanArgs) -> Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let env_file = args
        .env_file
        .clone()
        .unwrap_or_else(|| config.general.env_file.clone());
    if env::load(&env_file) == EnvFile::Invalid {
        output::warn(&format!("Ignoring malformed env file {}", env_file.display()));
    }

    let settings = Settings::resolve(args, &config, |var| std::env::var(var).ok());
    let auth = Auth::from_env(&settings.token_env);
    // Fails here, before any request, when the token is missing.
    let client = GitHubClient::with_base_url(&auth, &settings.api_url)?;
    tracing::debug!(?client, "GitHub client ready");

    let request = ScanRequest {
        username: args.username.as_deref(),
        repository: args.repo.as_deref(),
    };

    // Keep stdout clean for the JSON document.
    let prompt_output: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompt = Prompt::new(io::stdin().lock(), prompt_output);

    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(ScanService::new(&client).run(&mut prompt, request))?;

    output::report(&report, args.json)?;

    Ok(())
}
