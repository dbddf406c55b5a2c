//! Navigation rules of the rotating carousel.

use std::time::Duration;

use storefront::carousel::{Carousel, CarouselIntent, CarouselReducer, CarouselState};
use storefront::catalog::{deals_banners, trending_slides, Slide};
use storefront::error::NavigationError;
use storefront::ui::mvi::Reducer;

fn carousel(slides: Vec<Slide>) -> Carousel {
    Carousel::new("test", slides, Duration::from_millis(2000)).unwrap()
}

fn reduce_all(state: CarouselState, intents: &[CarouselIntent]) -> CarouselState {
    intents
        .iter()
        .cloned()
        .fold(state, CarouselReducer::reduce)
}

// -- Reducer ------------------------------------------------------------------

#[test]
fn advance_wraps_to_first_slide() {
    let state = reduce_all(
        CarouselState::new(3).unwrap(),
        &[CarouselIntent::Advance, CarouselIntent::Advance, CarouselIntent::Advance],
    );
    assert_eq!(state.index(), 0);
}

#[test]
fn retreat_from_first_slide_wraps_to_last() {
    let state = CarouselReducer::reduce(CarouselState::new(3).unwrap(), CarouselIntent::Retreat);
    assert_eq!(state.index(), 2);
}

#[test]
fn advance_then_retreat_returns_to_start_for_every_position() {
    for len in 1..=5 {
        for start in 0..len {
            let state = CarouselReducer::reduce(
                CarouselState::new(len).unwrap(),
                CarouselIntent::JumpTo { index: start },
            );
            let back = reduce_all(state, &[CarouselIntent::Advance, CarouselIntent::Retreat]);
            assert_eq!(back, state, "len {} start {}", len, start);
        }
    }
}

#[test]
fn len_advances_are_identity() {
    for len in 1..=5 {
        let start = CarouselReducer::reduce(
            CarouselState::new(len).unwrap(),
            CarouselIntent::JumpTo { index: len - 1 },
        );
        let ticks = vec![CarouselIntent::Tick; len];
        assert_eq!(reduce_all(start, &ticks), start);
    }
}

#[test]
fn k_advances_land_on_k_mod_len() {
    for len in 1..=4 {
        let start = CarouselState::new(len).unwrap();
        for k in 0..3 * len {
            let advances = vec![CarouselIntent::Advance; k];
            assert_eq!(reduce_all(start, &advances).index(), k % len, "len {} k {}", len, k);
        }
    }
}

#[test]
fn retreat_then_advance_returns_to_start_for_every_position() {
    for len in 1..=5 {
        for start in 0..len {
            let state = CarouselReducer::reduce(
                CarouselState::new(len).unwrap(),
                CarouselIntent::JumpTo { index: start },
            );
            let back = reduce_all(state, &[CarouselIntent::Retreat, CarouselIntent::Advance]);
            assert_eq!(back, state, "len {} start {}", len, start);
        }
    }
}

#[test]
fn single_slide_never_moves() {
    let state = reduce_all(
        CarouselState::new(1).unwrap(),
        &[
            CarouselIntent::Advance,
            CarouselIntent::Retreat,
            CarouselIntent::Tick,
        ],
    );
    assert_eq!(state.index(), 0);
}

#[test]
fn state_for_zero_slides_is_refused() {
    assert!(CarouselState::new(0).is_none());
}

// -- Carousel -----------------------------------------------------------------

#[test]
fn three_slide_walkthrough() {
    let mut carousel = carousel(deals_banners());
    assert_eq!(carousel.current_slide().promo_code.as_deref(), Some("SIXPINE20"));

    carousel.advance();
    assert_eq!(carousel.current_index(), 1);
    carousel.advance();
    carousel.advance();
    assert_eq!(carousel.current_index(), 0);

    carousel.retreat();
    assert_eq!(carousel.current_index(), 2);

    carousel.jump_to(1).unwrap();
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn jump_out_of_range_is_rejected_and_keeps_slide() {
    let mut carousel = carousel(trending_slides());
    carousel.advance();

    let err = carousel.jump_to(3).unwrap_err();
    assert_eq!(
        err,
        NavigationError::InvalidNavigationTarget { index: 3, len: 3 }
    );
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn jump_to_current_slide_is_allowed() {
    let mut carousel = carousel(trending_slides());
    assert!(carousel.jump_to(0).is_ok());
    assert_eq!(carousel.current_index(), 0);
}
