//! Content the storefront ships with.

use crate::catalog::image::ImageRef;
use crate::catalog::product::DealItem;
use crate::catalog::route::Route;
use crate::catalog::slide::Slide;

const LIVING_ROOM: &str = "/images/Home/livingroom.jpg";
const STUDY_TABLE: &str = "/images/Home/studytable.jpg";
const FURNISHING: &str = "/images/Home/furnishing.jpg";

/// Slides of the best-deals banner carousel.
pub fn deals_banners() -> Vec<Slide> {
    vec![
        banner(
            1,
            "EXCLUSIVE OFFER",
            "Get 20% EXTRA OFF on your first purchase",
            "20% EXTRA OFF",
            "Use code SIXPINE20 at checkout",
            "SIXPINE20",
            LIVING_ROOM,
            "SHOP NOW",
        ),
        banner(
            2,
            "MEGA SALE",
            "Up to 50% OFF on Furniture",
            "50% OFF",
            "Limited time offer on selected items",
            "MEGA50",
            STUDY_TABLE,
            "GRAB DEALS",
        ),
        banner(
            3,
            "SPECIAL DEAL",
            "Buy 2 Get 1 FREE on Home Decor",
            "Buy 2 Get 1 FREE",
            "Use code B2G1FREE at checkout",
            "B2G1FREE",
            FURNISHING,
            "EXPLORE NOW",
        ),
    ]
}

/// Slides of the trending hero carousel.
pub fn trending_slides() -> Vec<Slide> {
    vec![
        hero(1, "Trending Now", "Bestsellers 2025", 1999, "#4A6FA5", FURNISHING),
        hero(2, "Most Popular", "Hot Items", 3499, "#6B4A8C", STUDY_TABLE),
        hero(3, "Fan Favorites", "Top Rated Collection", 5999, "#9E4A5A", LIVING_ROOM),
    ]
}

/// Items of the "Deals of the Day" grid.
pub fn daily_deals() -> Vec<DealItem> {
    vec![
        deal(1, "Modern Coffee Table", LIVING_ROOM, 7999, 3999, 50, 4.6, 384, 245),
        deal(2, "Ergonomic Office Chair", STUDY_TABLE, 12999, 6499, 50, 4.8, 529, 317),
        deal(3, "Wooden Bookshelf", FURNISHING, 9999, 5999, 40, 4.7, 236, 183),
        deal(4, "Modern Floor Lamp", STUDY_TABLE, 4999, 2499, 50, 4.5, 153, 97),
        deal(5, "Luxury Sofa Set", LIVING_ROOM, 24999, 14999, 40, 4.9, 642, 423),
        deal(6, "Dining Table Set", STUDY_TABLE, 18999, 10999, 42, 4.7, 318, 256),
        deal(7, "Wall Mirror", FURNISHING, 3999, 1999, 50, 4.4, 189, 134),
        deal(8, "Bed with Storage", LIVING_ROOM, 29999, 17999, 40, 4.8, 457, 298),
    ]
}

#[allow(clippy::too_many_arguments)]
fn banner(
    id: u32,
    label: &str,
    heading: &str,
    highlight: &str,
    description: &str,
    promo_code: &str,
    image: &str,
    cta: &str,
) -> Slide {
    Slide {
        id,
        label: label.to_string(),
        heading: heading.to_string(),
        highlight: Some(highlight.to_string()),
        description: description.to_string(),
        promo_code: Some(promo_code.to_string()),
        price: None,
        image: ImageRef::new(image, label),
        cta_label: cta.to_string(),
        accent_color: None,
        target: Some(Route::BestDeals),
    }
}

fn hero(id: u32, label: &str, heading: &str, price: u32, color: &str, image: &str) -> Slide {
    Slide {
        id,
        label: label.to_string(),
        heading: heading.to_string(),
        highlight: None,
        description: "Starting From".to_string(),
        promo_code: None,
        price: Some(crate::catalog::format_inr(price)),
        image: ImageRef::new(image, heading),
        cta_label: "SHOP NOW".to_string(),
        accent_color: Some(color.to_string()),
        target: Some(Route::Trending),
    }
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: u32,
    name: &str,
    image: &str,
    original_price: u32,
    sale_price: u32,
    discount_percent: u8,
    rating: f32,
    review_count: u32,
    sold_count: u32,
) -> DealItem {
    DealItem {
        id,
        name: name.to_string(),
        image: ImageRef::new(image, name),
        original_price,
        sale_price,
        discount_percent,
        rating,
        review_count,
        sold_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_expected_shape() {
        assert_eq!(deals_banners().len(), 3);
        assert_eq!(trending_slides().len(), 3);
        assert_eq!(daily_deals().len(), 8);
        assert_eq!(trending_slides()[0].price.as_deref(), Some("₹1,999"));
        assert_eq!(daily_deals()[4].sale_price_label(), "₹14,999");
    }

    #[test]
    fn slide_ids_follow_position() {
        for slides in [deals_banners(), trending_slides()] {
            for (position, slide) in slides.iter().enumerate() {
                assert_eq!(slide.id as usize, position + 1);
            }
        }
    }
}
