use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub deals_banner: Rect,
    pub trending_hero: Rect,
    pub daily_deals: Rect,
    pub footer: Rect,
}

const CAROUSEL_HEIGHT: u16 = 9;

pub fn regions(area: Rect) -> Regions {
    let [header, deals_banner, trending_hero, daily_deals, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(CAROUSEL_HEIGHT),
        Constraint::Length(CAROUSEL_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area);

    Regions {
        header,
        deals_banner,
        trending_hero,
        daily_deals,
        footer,
    }
}

/// A `width` x `height` box centred in `area`, shrunk to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_fits_inside_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_box(60, 12, area);
        assert_eq!(popup, Rect::new(0, 0, 20, 10));

        let popup = centered_box(10, 4, area);
        assert_eq!(popup, Rect::new(5, 3, 10, 4));
    }
}
