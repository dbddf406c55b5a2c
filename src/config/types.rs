use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// How a manual navigation interacts with the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ManualNavigation {
    /// Timer keeps its schedule; the next tick may follow right after a manual move.
    #[default]
    KeepSchedule,
    /// Every manual move restarts the interval.
    RestartTimer,
}

/// Carousel auto-advance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Deals banner interval in milliseconds (default: 2000).
    #[serde(default = "default_deals_interval_ms")]
    pub deals_interval_ms: u64,
    /// Trending hero interval in milliseconds (default: 5000).
    #[serde(default = "default_trending_interval_ms")]
    pub trending_interval_ms: u64,
    #[serde(default)]
    pub manual_navigation: ManualNavigation,
}

/// Product grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Items revealed per "load more" (default: 4).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Where image references are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AssetsConfig {
    /// Directory image paths are resolved against. Unset means every
    /// image renders as its alt text.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file. Defaults to `storefront.log` in the local data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_deals_interval_ms() -> u64 {
    2000
}

fn default_trending_interval_ms() -> u64 {
    5000
}

fn default_page_size() -> usize {
    4
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            deals_interval_ms: default_deals_interval_ms(),
            trending_interval_ms: default_trending_interval_ms(),
            manual_navigation: ManualNavigation::default(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl CarouselConfig {
    pub fn deals_interval(&self) -> Duration {
        Duration::from_millis(self.deals_interval_ms)
    }

    pub fn trending_interval(&self) -> Duration {
        Duration::from_millis(self.trending_interval_ms)
    }
}
