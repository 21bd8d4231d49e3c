use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{inspect, serve};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Bike sharing analysis dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the datasets and start the web dashboard
    Serve {
        /// Directory containing day.csv and hour.csv
        #[arg(short, long, env = "DASHBOARD_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "DASHBOARD_BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Configuration file (defaults to ./dashboard.toml when present)
        #[arg(short, long, env = "DASHBOARD_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Load the datasets, report what was read and exit
    ///
    /// Fails the same way the server does on a missing file, a missing
    /// column or an unparseable value.
    Inspect {
        /// Directory containing day.csv and hour.csv
        #[arg(short, long, env = "DASHBOARD_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Configuration file (defaults to ./dashboard.toml when present)
        #[arg(short, long, env = "DASHBOARD_CONFIG")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_dir,
                bind_address,
                config,
            } => {
                let settings = Settings::load(config.as_deref())?.with_overrides(data_dir, bind_address);
                serve(settings).await?;
            }
            Commands::Inspect { data_dir, config } => {
                let settings = Settings::load(config.as_deref())?.with_overrides(data_dir, None);
                inspect(&settings)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_arguments() {
        let cli = Cli::try_parse_from([
            "bikeshare",
            "serve",
            "--data-dir",
            "/srv/bikes",
            "--bind-address",
            "127.0.0.1:8080",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                data_dir,
                bind_address,
                ..
            } => {
                assert_eq!(data_dir, Some(PathBuf::from("/srv/bikes")));
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:8080"));
            }
            Commands::Inspect { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn test_inspect_takes_no_bind_address() {
        assert!(Cli::try_parse_from(["bikeshare", "inspect", "--bind-address", "x"]).is_err());
    }
}
