//! Storefront content: carousel slides, deal items, image references and
//! navigation targets, plus the fixture data the storefront ships with.

mod fixtures;
mod image;
mod product;
mod route;
mod slide;

pub use fixtures::{daily_deals, deals_banners, trending_slides};
pub use image::{ImageDisplay, ImageRef};
pub use product::{format_inr, DealItem};
pub use route::Route;
pub use slide::{HeadingSegment, Slide};
