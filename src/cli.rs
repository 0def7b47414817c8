use crate::config::Config;
use crate::error::ErrorClass;
use crate::services::{CampaignSource, HttpCampaignSource};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indoc::eprintdoc;
use std::path::PathBuf;

/// Browse the campaign listing in your terminal
#[derive(Parser, Debug)]
#[command(name = "campaign-browser", version, about = "Browse the campaign listing in your terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    /// Use this config file instead of ~/.config/campaign-browser/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Campaign listing URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log filter, e.g. "debug" or "campaign_browser=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Disable all colors
    #[arg(long, global = true)]
    pub no_colors: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the campaign list once and print it
    List {
        /// Show descriptions and image references
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the path of the config file in use
    ConfigPath,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Load the config file and apply command line overrides for this session
    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_path();
        let mut config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if self.no_colors || std::env::var_os("NO_COLOR").is_some() {
            config.theme = "nocolor".to_string();
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::List { verbose }) => self.cmd_list(verbose),
            Some(Commands::ConfigPath) => {
                println!("{}", self.config_path().display());
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn cmd_list(&self, verbose: bool) -> Result<()> {
        let config = self.load_config()?;
        let source = HttpCampaignSource::new(&config.endpoint, config.request_timeout())?;
        let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

        match runtime.block_on(source.fetch_campaigns()) {
            Ok(campaigns) => {
                if campaigns.is_empty() {
                    println!("No campaigns right now.");
                }
                for (i, campaign) in campaigns.iter().enumerate() {
                    println!("{:>3}. {}", i + 1, campaign.name);
                    if verbose {
                        println!("     {}", campaign.description);
                        println!("     image: {}", campaign.mood_image);
                    }
                }
                Ok(())
            }
            Err(error) => {
                if let Some(class) = ErrorClass::classify(&error) {
                    eprintdoc! {"
                        {message}

                        Check your connection and try again.
                        Endpoint: {endpoint}
                        ",
                        message = class.message(),
                        endpoint = config.endpoint,
                    };
                }
                Err(error).context("Failed to fetch campaigns")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["campaign-browser"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.endpoint.is_none());
        assert!(!cli.no_colors);
    }

    #[test]
    fn test_parse_list_with_global_flags() {
        let cli = Cli::try_parse_from([
            "campaign-browser",
            "list",
            "--verbose",
            "--endpoint",
            "https://example.test/campaigns",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::List { verbose: true })));
        assert_eq!(cli.endpoint.as_deref(), Some("https://example.test/campaigns"));
    }

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let cli = Cli::try_parse_from([
            "campaign-browser",
            "--endpoint",
            "https://example.test/feed",
            "--timeout",
            "3",
            "--no-colors",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.endpoint, "https://example.test/feed");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.theme, "nocolor");
    }
}
