use serde::{Deserialize, Serialize};

use crate::catalog::image::ImageRef;

/// A discounted product shown in the daily deals grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealItem {
    pub id: u32,
    pub name: String,
    pub image: ImageRef,
    /// Whole rupees.
    pub original_price: u32,
    /// Whole rupees.
    pub sale_price: u32,
    pub discount_percent: u8,
    pub rating: f32,
    pub review_count: u32,
    pub sold_count: u32,
}

impl DealItem {
    pub fn discount_label(&self) -> String {
        format!("{}% OFF", self.discount_percent)
    }

    pub fn original_price_label(&self) -> String {
        format_inr(self.original_price)
    }

    pub fn sale_price_label(&self) -> String {
        format_inr(self.sale_price)
    }
}

/// Formats whole rupees with Indian digit grouping: `₹7,999`, `₹1,24,999`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("₹{},{}", groups.join(","), last_three)
}
