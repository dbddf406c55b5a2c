//! Storefront front end: promotional carousels, paginated product grids and
//! account-preference flows, rendered in the terminal.

pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod preferences;
pub mod shutdown;
pub mod ui;
