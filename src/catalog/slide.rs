use serde::{Deserialize, Serialize};

use crate::catalog::image::ImageRef;
use crate::catalog::route::Route;

/// One entry in a carousel's fixed display sequence.
///
/// A slide's position is its index in the owning sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    /// Small eyebrow text above the heading ("MEGA SALE", "Trending Now").
    pub label: String,
    pub heading: String,
    /// Phrase inside `heading` rendered with the accent style.
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Promo code inside `description` rendered with the accent style.
    #[serde(default)]
    pub promo_code: Option<String>,
    /// Formatted "starting from" price.
    #[serde(default)]
    pub price: Option<String>,
    pub image: ImageRef,
    pub cta_label: String,
    /// Background colour as `#rrggbb`.
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub target: Option<Route>,
}

/// A run of text that is either plain or accented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingSegment<'a> {
    Plain(&'a str),
    Accent(&'a str),
}

impl Slide {
    /// Heading split around the highlighted phrase.
    pub fn heading_segments(&self) -> Vec<HeadingSegment<'_>> {
        split_accent(&self.heading, self.highlight.as_deref())
    }

    /// Description split around the promo code.
    pub fn description_segments(&self) -> Vec<HeadingSegment<'_>> {
        split_accent(&self.description, self.promo_code.as_deref())
    }

    /// Parses `accent_color` into RGB components.
    pub fn accent_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.accent_color.as_deref()?.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

fn split_accent<'a>(text: &'a str, accent: Option<&str>) -> Vec<HeadingSegment<'a>> {
    let Some(accent) = accent.filter(|a| !a.is_empty()) else {
        return vec![HeadingSegment::Plain(text)];
    };
    let Some(start) = text.find(accent) else {
        return vec![HeadingSegment::Plain(text)];
    };
    let end = start + accent.len();
    let mut segments = Vec::with_capacity(3);
    if start > 0 {
        segments.push(HeadingSegment::Plain(&text[..start]));
    }
    segments.push(HeadingSegment::Accent(&text[start..end]));
    if end < text.len() {
        segments.push(HeadingSegment::Plain(&text[end..]));
    }
    segments
}
