use std::path::Path;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::carousel::Carousel;
use crate::catalog::{HeadingSegment, ImageDisplay};
use crate::preferences::communication::CommunicationDialogState;
use crate::preferences::payment_form::{PaymentForm, PaymentFormField};
use crate::preferences::save::SaveState;
use crate::preferences::saved_cards::SavedCardsState;
use crate::ui::app::{App, Focus};
use crate::ui::events::CarouselId;
use crate::ui::layout::{centered_box, regions};
use crate::ui::theme::{BORDER, BRAND_ORANGE, ERROR, MUTED, PRICE, RATING, TEXT};

const POPUP_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let regions = regions(area);
    let assets_dir = app.assets_dir();

    render_header(frame, regions.header);
    render_carousel(
        frame,
        regions.deals_banner,
        app.carousel(CarouselId::DealsBanner),
        app.focus() == Focus::DealsBanner,
        assets_dir.as_deref(),
    );
    render_carousel(
        frame,
        regions.trending_hero,
        app.carousel(CarouselId::TrendingHero),
        app.focus() == Focus::TrendingHero,
        assets_dir.as_deref(),
    );
    render_daily_deals(frame, regions.daily_deals, app);
    render_footer(frame, regions.footer, app);

    if let Some(form) = app.payment_form().form() {
        render_payment_form(frame, area, form, app.payment_save());
    } else if app.communication().is_visible() {
        render_communication(frame, area, app.communication(), app.communication_save());
    } else if app.saved_cards().is_visible() {
        render_saved_cards(frame, area, app.saved_cards());
    }
}

fn section_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { BRAND_ORANGE } else { BORDER };
    Block::bordered()
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(color))
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " SIXPINE ",
            Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Furniture & Home Decor", Style::default().fg(TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(Block::bordered().border_style(Style::default().fg(BORDER))),
        area,
    );
}

fn render_carousel(
    frame: &mut Frame,
    area: Rect,
    carousel: &Carousel,
    focused: bool,
    assets_dir: Option<&Path>,
) {
    let slide = carousel.current_slide();
    let mut block = section_block(carousel.name(), focused);
    if let Some((r, g, b)) = slide.accent_rgb() {
        block = block.style(Style::default().bg(Color::Rgb(r, g, b)));
    }

    let plain = Style::default().fg(TEXT);
    let mut lines = vec![
        Line::from(Span::styled(slide.label.clone(), Style::default().fg(MUTED))),
        accented_line(slide.heading_segments(), plain.add_modifier(Modifier::BOLD)),
        accented_line(slide.description_segments(), plain),
    ];
    if let Some(price) = &slide.price {
        lines.push(Line::from(Span::styled(
            format!("{}*", price),
            Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
        )));
    }

    let image = match slide.image.resolve(assets_dir) {
        ImageDisplay::Available(path) => format!(
            "▣ {}",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        ),
        ImageDisplay::Missing { alt } => format!("[{}]", alt),
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("[ {} ]", slide.cta_label),
            Style::default().fg(TEXT).bg(BRAND_ORANGE),
        ),
        Span::raw("  "),
        Span::styled(image, Style::default().fg(MUTED)),
    ]));
    lines.push(indicator_line(carousel));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn accented_line(segments: Vec<HeadingSegment<'_>>, base: Style) -> Line<'static> {
    let accent = Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD);
    Line::from(
        segments
            .into_iter()
            .map(|segment| match segment {
                HeadingSegment::Plain(text) => Span::styled(text.to_string(), base),
                HeadingSegment::Accent(text) => Span::styled(text.to_string(), accent),
            })
            .collect::<Vec<_>>(),
    )
}

fn indicator_line(carousel: &Carousel) -> Line<'static> {
    let mut spans = vec![Span::styled("‹ ", Style::default().fg(MUTED))];
    for position in 0..carousel.len() {
        let (dot, color) = if position == carousel.current_index() {
            ("●", BRAND_ORANGE)
        } else {
            ("○", MUTED)
        };
        spans.push(Span::styled(format!("{} ", dot), Style::default().fg(color)));
    }
    spans.push(Span::styled("›", Style::default().fg(MUTED)));
    Line::from(spans).alignment(Alignment::Center)
}

fn render_daily_deals(frame: &mut Frame, area: Rect, app: &App) {
    let deals = app.daily_deals();
    let block = section_block("Deals of the Day", app.focus() == Focus::DailyDeals);

    if deals.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No deals today. Check back tomorrow!",
                Style::default().fg(MUTED),
            )))
            .block(block),
            area,
        );
        return;
    }

    let mut lines: Vec<Line> = deals
        .visible_items()
        .iter()
        .map(|deal| {
            Line::from(vec![
                Span::styled(format!(" {:<26}", deal.name), Style::default().fg(TEXT)),
                Span::styled(
                    format!("{:>10} ", deal.sale_price_label()),
                    Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    deal.original_price_label(),
                    Style::default().fg(MUTED).add_modifier(Modifier::CROSSED_OUT),
                ),
                Span::styled(
                    format!("  {:<8}", deal.discount_label()),
                    Style::default().fg(BRAND_ORANGE),
                ),
                Span::styled(
                    format!("★ {:.1} ({})", deal.rating, deal.review_count),
                    Style::default().fg(RATING),
                ),
                Span::styled(
                    format!("  {} sold", deal.sold_count),
                    Style::default().fg(MUTED),
                ),
            ])
        })
        .collect();

    let cursor = deals.cursor();
    let more = if deals.has_more() {
        format!(
            "Showing {} of {} · [m] Load more",
            cursor.visible(),
            cursor.total()
        )
    } else {
        format!("Showing all {} deals", cursor.total())
    };
    lines.push(Line::from(Span::styled(more, Style::default().fg(MUTED))).alignment(Alignment::Center));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = "Tab focus · ←/→ slide · 1-9 jump · Enter open · m more · p payment · s cards · c communication · F5 reload · q quit";
    let line = match app.status() {
        Some(status) => Line::from(vec![
            Span::styled(status.to_string(), Style::default().fg(BRAND_ORANGE)),
            Span::styled("  ·  ", Style::default().fg(MUTED)),
            Span::styled(hints, Style::default().fg(MUTED)),
        ]),
        None => Line::from(Span::styled(hints, Style::default().fg(MUTED))),
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::bordered().border_style(Style::default().fg(BORDER))),
        area,
    );
}

fn render_popup(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16 + 2;
    let popup = centered_box(POPUP_WIDTH, height, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(format!(" {} ", title))
                    .border_style(Style::default().fg(BRAND_ORANGE)),
            )
            .wrap(Wrap { trim: false }),
        popup,
    );
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(TEXT).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(TEXT)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
        Span::styled(format!("{:<18}", label), Style::default().fg(MUTED)),
        Span::styled(value, value_style),
    ])
}

fn render_payment_form(frame: &mut Frame, area: Rect, form: &PaymentForm, save: &SaveState) {
    let focused = |field: PaymentFormField| form.focused == field;
    let mut lines = vec![field_line(
        "Payment Method *",
        format!("‹ {} ›", form.method.label()),
        focused(PaymentFormField::Method),
    )];

    if form.focusable_fields().contains(&PaymentFormField::Card) {
        let value = if form.cards.is_empty() {
            "No saved cards available.".to_string()
        } else {
            form.selected_card()
                .map(|c| c.display_name())
                .unwrap_or_else(|| "Select a card".to_string())
        };
        lines.push(field_line("Select Card", value, focused(PaymentFormField::Card)));
    }

    let address = if form.addresses.is_empty() {
        "No addresses found. Please add an address first.".to_string()
    } else {
        form.selected_address()
            .map(|a| a.summary())
            .unwrap_or_else(|| "Select an address".to_string())
    };
    lines.push(field_line(
        "Shipping Address",
        address,
        focused(PaymentFormField::Address),
    ));
    lines.push(field_line(
        "Nickname",
        format!("{}_", form.nickname),
        focused(PaymentFormField::Nickname),
    ));
    lines.push(Line::default());
    lines.push(save_status_line(save, "Ctrl+R"));
    lines.push(Line::from(Span::styled(
        "Tab field · ←/→ change · Enter save · Ctrl+R retry · Esc close",
        Style::default().fg(MUTED),
    )));

    render_popup(frame, area, form.title(), lines);
}

fn render_saved_cards(frame: &mut Frame, area: Rect, state: &SavedCardsState) {
    let SavedCardsState::Visible { selected, .. } = state else {
        return;
    };

    let mut lines: Vec<Line<'static>> = if state.cards().is_empty() {
        vec![
            Line::from(Span::styled("No saved cards yet.", Style::default().fg(TEXT))),
            Line::from(Span::styled(
                "Cards are saved when you choose to keep them at checkout.",
                Style::default().fg(MUTED),
            )),
        ]
    } else {
        state
            .cards()
            .iter()
            .enumerate()
            .map(|(position, card)| {
                let mut line = field_line(
                    card.card.network.as_str(),
                    card.display_name(),
                    position == *selected,
                );
                if state.is_preferred(card) {
                    line.spans
                        .push(Span::styled(" (Preferred)", Style::default().fg(PRICE)));
                }
                if state.removing() == Some(card.token_id.as_str()) {
                    line.spans
                        .push(Span::styled(" removing…", Style::default().fg(BRAND_ORANGE)));
                }
                line
            })
            .collect()
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "↑/↓ move · e edit · d remove · Esc close",
        Style::default().fg(MUTED),
    )));

    render_popup(frame, area, "Your Saved Cards", lines);
}

/// `retry_key` names the key that resubmits in the dialog showing the line.
fn save_status_line(save: &SaveState, retry_key: &str) -> Line<'static> {
    match save {
        SaveState::Idle => Line::default(),
        SaveState::Saving { attempt } if *attempt > 1 => Line::from(Span::styled(
            format!("Saving… (attempt {})", attempt),
            Style::default().fg(BRAND_ORANGE),
        )),
        SaveState::Saving { .. } => {
            Line::from(Span::styled("Saving…", Style::default().fg(BRAND_ORANGE)))
        }
        SaveState::Saved => Line::from(Span::styled("Saved", Style::default().fg(PRICE))),
        SaveState::Failed {
            error, retryable, ..
        } => {
            let hint = if *retryable {
                format!(" ({} to retry)", retry_key)
            } else {
                String::new()
            };
            Line::from(Span::styled(
                format!("{}{}", error, hint),
                Style::default().fg(ERROR),
            ))
        }
    }
}

fn render_communication(
    frame: &mut Frame,
    area: Rect,
    state: &CommunicationDialogState,
    save: &SaveState,
) {
    let CommunicationDialogState::Visible {
        fields,
        focused,
        confirm_discard,
        ..
    } = state
    else {
        return;
    };

    let mut lines: Vec<Line<'static>> = fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let checkbox = if field.enabled { "[x]" } else { "[ ]" };
            field_line(
                checkbox,
                format!("{} — {}", field.label, field.description),
                position == *focused,
            )
        })
        .collect();
    lines.push(Line::default());
    if *confirm_discard {
        lines.push(Line::from(Span::styled(
            "Unsaved changes. Esc again to discard, Enter to save.",
            Style::default().fg(ERROR),
        )));
    } else {
        lines.push(save_status_line(save, "Enter"));
    }
    lines.push(Line::from(Span::styled(
        "↑/↓ move · Space toggle · Enter save · Esc close",
        Style::default().fg(MUTED),
    )));

    render_popup(frame, area, "Communication Preferences", lines);
}
