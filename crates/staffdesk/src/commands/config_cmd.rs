//! Config subcommand handlers.

use staffdesk_config::{self as config, Config, ConfigError};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, current: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let out = match global.output {
                OutputFormat::Table | OutputFormat::Plain => {
                    toml::to_string_pretty(current).map_err(ConfigError::from)?
                }
                _ => output::render_single(
                    &global.output,
                    current,
                    |_| String::new(),
                    |_| String::new(),
                ),
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { url, force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let mut cfg = Config::default();
            if let Some(url) = url {
                cfg.api.base_url = url;
            }
            // Refuse to write a file that would fail on the next run.
            cfg.to_client_config()?;

            let written = config::save_config(&cfg)?;
            output::status(
                &format!("Wrote {}", written.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}
