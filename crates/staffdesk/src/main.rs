mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;

use staffdesk_config::{Config, ConfigError};
use staffdesk_core::StaffDesk;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // A broken config file still gets logging; the error surfaces in `run`.
    let config = staffdesk_config::load_config();
    init_tracing(&cli.global, config.as_ref().ok());

    if let Err(err) = run(cli, config).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(global: &GlobalOpts, config: Option<&Config>) {
    let json = config.is_some_and(|c| c.logging.json);
    if global.verbose > 0 {
        staffdesk_config::init_logging(staffdesk_config::verbosity_level(global.verbose), json);
    } else {
        let level = config.map_or("warn", |c| c.logging.level.as_str());
        staffdesk_config::init_logging(level, json);
    }
}

async fn run(cli: Cli, config: Result<Config, ConfigError>) -> Result<(), CliError> {
    let mut config = config?;

    match cli.command {
        // Config commands never touch the API
        Command::Config(args) => commands::config_cmd::handle(args, &config, &cli.global),

        cmd => {
            apply_overrides(&mut config, &cli.global);
            let desk = StaffDesk::new(config.to_client_config()?)?;

            tracing::debug!(
                command = ?cmd,
                base_url = %desk.config().base_url,
                "dispatching command"
            );
            commands::dispatch(cmd, &desk, &cli.global).await
        }
    }
}

/// Command-line flags win over the file and the environment.
fn apply_overrides(config: &mut Config, global: &GlobalOpts) {
    if let Some(url) = &global.api_url {
        config.api.base_url.clone_from(url);
    }
    if let Some(secs) = global.timeout {
        config.api.timeout_secs = Some(secs);
    }
}
