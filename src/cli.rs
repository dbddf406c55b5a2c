use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Furniture storefront in the terminal.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/storefront/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Override listing.page_size
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Override carousel.deals_interval_ms
    #[arg(long, value_name = "MS")]
    pub deals_interval_ms: Option<u64>,

    /// Override carousel.trending_interval_ms
    #[arg(long, value_name = "MS")]
    pub trending_interval_ms: Option<u64>,

    /// Validate the configuration, print it as TOML and exit
    #[arg(long)]
    pub check_config: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(page_size) = self.page_size {
            config.listing.page_size = page_size;
        }
        if let Some(ms) = self.deals_interval_ms {
            config.carousel.deals_interval_ms = ms;
        }
        if let Some(ms) = self.trending_interval_ms {
            config.carousel.trending_interval_ms = ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_file_values() {
        let cli = Cli::parse_from(["storefront", "--page-size", "6", "--deals-interval-ms", "3000"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.listing.page_size, 6);
        assert_eq!(config.carousel.deals_interval_ms, 3000);
        assert_eq!(config.carousel.trending_interval_ms, 5000);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::parse_from(["storefront"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
        assert!(!cli.check_config);
    }
}
