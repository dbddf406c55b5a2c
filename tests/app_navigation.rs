//! App wiring: key handling, carousel ticks, listing and preference flows.

mod common;

use std::time::Duration;

use common::*;
use crossterm::event::KeyCode;
use storefront::config::Config;
use storefront::preferences::communication::default_communication_preferences;
use storefront::preferences::save::SaveState;
use storefront::preferences::{PaymentMethod, PreferenceService, ServiceError};
use storefront::ui::app::Focus;
use storefront::ui::events::{AppEvent, CarouselId};
use storefront::ui::input::handle_key;
use storefront::ui::runtime::dispatch_event;

const WAIT: Duration = Duration::from_secs(2);

// -- Carousels ------------------------------------------------------------------

#[tokio::test]
async fn arrows_move_the_focused_carousel() {
    let mut t = make_app();
    handle_key(&mut t.app, press_key(KeyCode::Right));
    assert_eq!(t.app.carousel(CarouselId::DealsBanner).current_index(), 1);
    assert_eq!(t.app.carousel(CarouselId::TrendingHero).current_index(), 0);

    handle_key(&mut t.app, press_key(KeyCode::Tab));
    assert_eq!(t.app.focus(), Focus::TrendingHero);
    handle_key(&mut t.app, press_key(KeyCode::Left));
    assert_eq!(t.app.carousel(CarouselId::TrendingHero).current_index(), 2);
}

#[tokio::test]
async fn digit_keys_jump_and_report_bad_targets() {
    let mut t = make_app();
    handle_key(&mut t.app, press_key(KeyCode::Char('3')));
    assert_eq!(t.app.carousel(CarouselId::DealsBanner).current_index(), 2);
    assert_eq!(t.app.status(), None);

    handle_key(&mut t.app, press_key(KeyCode::Char('7')));
    assert_eq!(t.app.carousel(CarouselId::DealsBanner).current_index(), 2);
    assert!(t.app.status().unwrap().contains("out of range"));
}

#[tokio::test]
async fn enter_on_a_carousel_follows_its_call_to_action() {
    let mut t = make_app();
    handle_key(&mut t.app, press_key(KeyCode::Enter));
    let expected = t.app.carousel(CarouselId::DealsBanner).current_slide().cta_label.clone();
    assert!(t.app.status().unwrap().starts_with(&expected));
}

#[tokio::test(start_paused = true)]
async fn timer_ticks_advance_through_the_event_loop() {
    let mut t = make_app();
    t.app.start_carousels();

    let event = next_event(&t.events, Duration::from_millis(2100)).await;
    assert!(matches!(event, Some(AppEvent::CarouselTick {
            id: CarouselId::DealsBanner,
            epoch: 0
        })));
    dispatch_event(&mut t.app, event.unwrap());
    assert_eq!(t.app.carousel(CarouselId::DealsBanner).current_index(), 1);
    assert_eq!(t.app.carousel(CarouselId::TrendingHero).current_index(), 0);

    t.app.teardown();
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_both_carousels() {
    let mut t = make_app();
    t.app.start_carousels();
    t.app.teardown();

    tokio::time::sleep(Duration::from_secs(30)).await;
    while let Ok(event) = t.events.try_recv() {
        dispatch_event(&mut t.app, event);
    }
    assert_eq!(t.app.carousel(CarouselId::DealsBanner).current_index(), 0);
    assert_eq!(t.app.carousel(CarouselId::TrendingHero).current_index(), 0);
    assert!(t.app.carousel(CarouselId::DealsBanner).is_torn_down());
}

// -- Daily deals ----------------------------------------------------------------

#[tokio::test]
async fn load_more_reveals_the_second_page() {
    let mut t = make_app();
    assert_eq!(t.app.daily_deals().visible_items().len(), 4);

    handle_key(&mut t.app, press_key(KeyCode::Char('m')));
    assert_eq!(t.app.daily_deals().visible_items().len(), 8);
    assert!(!t.app.daily_deals().has_more());

    handle_key(&mut t.app, press_key(KeyCode::BackTab));
    assert_eq!(t.app.focus(), Focus::DailyDeals);
    handle_key(&mut t.app, press_key(KeyCode::Enter));
    assert_eq!(t.app.status(), Some("All deals are shown"));
}

#[tokio::test]
async fn reload_applies_new_page_size() {
    let (_dir, path) = temp_config("[listing]\npage_size = 2\n");
    let mut t = make_app_with(Config::load_from(&path).unwrap(), path.clone());
    assert_eq!(t.app.daily_deals().visible_items().len(), 2);

    std::fs::write(&path, "[listing]\npage_size = 3\n").unwrap();
    handle_key(&mut t.app, press_key(KeyCode::F(5)));
    assert_eq!(t.app.daily_deals().visible_items().len(), 3);
    assert_eq!(t.app.status(), Some("Configuration reloaded"));

    std::fs::write(&path, "[listing]\npage_size = 0\n").unwrap();
    handle_key(&mut t.app, press_key(KeyCode::F(5)));
    assert_eq!(t.app.daily_deals().visible_items().len(), 3);
    assert!(t.app.status().unwrap().contains("listing.page_size"));

    t.app.teardown();
}

// -- Payment preference ---------------------------------------------------------

async fn open_payment_form(t: &mut TestApp) {
    handle_key(&mut t.app, press_key(KeyCode::Char('p')));
    let event = next_event(&t.events, WAIT).await.expect("form data");
    assert!(matches!(event, AppEvent::PaymentFormLoaded(Ok(_))));
    dispatch_event(&mut t.app, event);
    assert!(t.app.payment_form().is_visible());
    assert!(t.app.has_overlay());
}

#[tokio::test]
async fn payment_preference_is_saved_and_form_closes() {
    let mut t = make_app();
    open_payment_form(&mut t).await;

    // Method -> Card -> Address, pick the first address.
    handle_key(&mut t.app, press_key(KeyCode::Tab));
    handle_key(&mut t.app, press_key(KeyCode::Tab));
    handle_key(&mut t.app, press_key(KeyCode::Right));
    handle_key(&mut t.app, press_key(KeyCode::Enter));
    assert!(t.app.payment_save().is_busy());

    let event = next_event(&t.events, WAIT).await.expect("save result");
    dispatch_event(&mut t.app, event);
    assert!(!t.app.payment_form().is_visible());
    assert_eq!(t.app.status(), Some("Payment preference saved"));

    let stored = t.service.payment_preference().await.unwrap();
    assert_eq!(stored.and_then(|p| p.preferred_address_id), Some(1));
}

#[tokio::test]
async fn failed_save_can_be_retried() {
    let mut t = make_app();
    open_payment_form(&mut t).await;

    t.service
        .fail_next(ServiceError::Unavailable("maintenance".to_string()));
    handle_key(&mut t.app, press_key(KeyCode::Enter));
    let event = next_event(&t.events, WAIT).await.expect("save result");
    dispatch_event(&mut t.app, event);
    assert!(t.app.payment_save().can_retry());
    assert!(t.app.payment_form().is_visible());

    handle_key(&mut t.app, ctrl_key('r'));
    assert_eq!(t.app.payment_save(), &SaveState::Saving { attempt: 2 });
    let event = next_event(&t.events, WAIT).await.expect("retry result");
    dispatch_event(&mut t.app, event);
    assert_eq!(t.app.status(), Some("Payment preference saved"));
}

#[tokio::test]
async fn escape_closes_payment_form_without_saving() {
    let mut t = make_app();
    open_payment_form(&mut t).await;
    handle_key(&mut t.app, press_key(KeyCode::Esc));
    assert!(!t.app.payment_form().is_visible());
    assert!(!t.app.should_quit());
    assert_eq!(t.service.payment_preference().await.unwrap(), None);
}

// -- Communication preferences --------------------------------------------------

#[tokio::test]
async fn communication_toggle_is_saved() {
    let mut t = make_app();
    handle_key(&mut t.app, press_key(KeyCode::Char('c')));
    let event = next_event(&t.events, WAIT).await.expect("preferences");
    dispatch_event(&mut t.app, event);
    assert!(t.app.communication().is_visible());

    let before = t.app.communication().fields()[0].enabled;
    handle_key(&mut t.app, press_key(KeyCode::Char(' ')));
    handle_key(&mut t.app, press_key(KeyCode::Enter));
    let event = next_event(&t.events, WAIT).await.expect("save result");
    dispatch_event(&mut t.app, event);

    assert!(!t.app.communication().is_visible());
    assert_eq!(t.app.status(), Some("Communication preferences saved"));
    assert_eq!(t.app.communication_save(), &SaveState::Saved);
    let stored = t.service.communication_preferences().await.unwrap();
    assert_eq!(stored[0].enabled, !before);
}

// -- Popups -------------------------------------------------------------------

#[tokio::test]
async fn second_popup_waits_for_the_first() {
    let mut t = make_app();
    handle_key(&mut t.app, press_key(KeyCode::Char('p')));
    handle_key(&mut t.app, press_key(KeyCode::Char('c')));
    assert!(t.app.is_loading_overlay());

    let event = next_event(&t.events, WAIT).await.expect("form data");
    assert!(matches!(event, AppEvent::PaymentFormLoaded(Ok(_))));
    dispatch_event(&mut t.app, event);
    assert!(next_event(&t.events, Duration::from_millis(100)).await.is_none());

    assert!(t.app.payment_form().is_visible());
    assert!(!t.app.communication().is_visible());
    assert!(!t.app.is_loading_overlay());

    handle_key(&mut t.app, press_key(KeyCode::Esc));
    handle_key(&mut t.app, press_key(KeyCode::Char('c')));
    let event = next_event(&t.events, WAIT).await.expect("preferences");
    dispatch_event(&mut t.app, event);
    assert!(t.app.communication().is_visible());
}

#[tokio::test]
async fn unrequested_load_result_is_dropped() {
    let mut t = make_app();
    open_payment_form(&mut t).await;

    dispatch_event(
        &mut t.app,
        AppEvent::CommunicationLoaded(Ok(default_communication_preferences())),
    );
    assert!(t.app.payment_form().is_visible());
    assert!(!t.app.communication().is_visible());
}

#[tokio::test]
async fn failed_load_frees_the_popup_slot() {
    let mut t = make_app();
    t.service
        .fail_next(ServiceError::Unavailable("maintenance".to_string()));
    handle_key(&mut t.app, press_key(KeyCode::Char('c')));
    let event = next_event(&t.events, WAIT).await.expect("load result");
    dispatch_event(&mut t.app, event);
    assert!(!t.app.has_overlay());
    assert!(t.app.status().is_some());

    open_payment_form(&mut t).await;
}

// -- Saved cards ----------------------------------------------------------------

async fn open_saved_cards(t: &mut TestApp) {
    handle_key(&mut t.app, press_key(KeyCode::Char('s')));
    let event = next_event(&t.events, WAIT).await.expect("saved cards");
    assert!(matches!(event, AppEvent::SavedCardsLoaded(Ok(_))));
    dispatch_event(&mut t.app, event);
    assert!(t.app.saved_cards().is_visible());
}

#[tokio::test]
async fn editing_a_saved_card_makes_it_preferred() {
    let mut t = make_app();
    open_saved_cards(&mut t).await;
    assert_eq!(t.app.saved_cards().cards().len(), 2);

    handle_key(&mut t.app, press_key(KeyCode::Down));
    handle_key(&mut t.app, press_key(KeyCode::Char('e')));
    assert!(!t.app.saved_cards().is_visible());

    let event = next_event(&t.events, WAIT).await.expect("form data");
    dispatch_event(&mut t.app, event);
    let form = t.app.payment_form().form().expect("form open");
    assert_eq!(form.title(), "Edit Payment Preference");
    assert_eq!(form.method, PaymentMethod::Card);
    assert_eq!(form.card_token_id.as_deref(), Some("token_rupay_1881"));

    handle_key(&mut t.app, press_key(KeyCode::Enter));
    let event = next_event(&t.events, WAIT).await.expect("save result");
    dispatch_event(&mut t.app, event);
    assert_eq!(t.app.status(), Some("Payment preference saved"));

    let stored = t.service.payment_preference().await.unwrap().unwrap();
    assert_eq!(stored.preferred_card_token_id.as_deref(), Some("token_rupay_1881"));

    open_saved_cards(&mut t).await;
    let rupay = &t.app.saved_cards().cards()[1];
    assert!(t.app.saved_cards().is_preferred(rupay));
}

#[tokio::test]
async fn removing_a_saved_card_updates_list_and_service() {
    let mut t = make_app();
    open_saved_cards(&mut t).await;

    handle_key(&mut t.app, press_key(KeyCode::Char('d')));
    assert_eq!(t.app.saved_cards().removing(), Some("token_visa_4242"));
    // A second remove waits for the first.
    handle_key(&mut t.app, press_key(KeyCode::Delete));

    let event = next_event(&t.events, WAIT).await.expect("remove result");
    assert!(matches!(event, AppEvent::CardRemoved { ref token_id, result: Ok(()) } if token_id == "token_visa_4242"));
    dispatch_event(&mut t.app, event);
    assert!(next_event(&t.events, Duration::from_millis(100)).await.is_none());

    assert_eq!(t.app.saved_cards().removing(), None);
    let remaining: Vec<_> = t.app.saved_cards().cards().iter().map(|c| c.token_id.as_str()).collect();
    assert_eq!(remaining, vec!["token_rupay_1881"]);
    assert_eq!(t.app.status(), Some("Card removed"));
    assert_eq!(t.service.saved_cards().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_removal_keeps_the_card() {
    let mut t = make_app();
    open_saved_cards(&mut t).await;

    t.service
        .fail_next(ServiceError::Unavailable("maintenance".to_string()));
    handle_key(&mut t.app, press_key(KeyCode::Char('d')));
    let event = next_event(&t.events, WAIT).await.expect("remove result");
    dispatch_event(&mut t.app, event);

    assert_eq!(t.app.saved_cards().cards().len(), 2);
    assert_eq!(t.app.saved_cards().removing(), None);
    assert!(t.app.status().is_some());

    handle_key(&mut t.app, press_key(KeyCode::Esc));
    assert!(!t.app.has_overlay());
}

// -- Quit -----------------------------------------------------------------------

#[tokio::test]
async fn quit_keys_and_shutdown_event() {
    let mut t = make_app();
    handle_key(&mut t.app, press_key(KeyCode::Char('q')));
    assert!(t.app.should_quit());

    let mut t = make_app();
    dispatch_event(&mut t.app, AppEvent::Shutdown);
    assert!(t.app.should_quit());

    let mut t = make_app();
    handle_key(&mut t.app, ctrl_key('c'));
    assert!(t.app.should_quit());
}
