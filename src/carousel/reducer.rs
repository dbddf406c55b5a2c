use crate::carousel::intent::CarouselIntent;
use crate::carousel::state::CarouselState;
use crate::ui::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Tick | CarouselIntent::Advance => state.advanced(),
            CarouselIntent::Retreat => state.retreated(),
            CarouselIntent::JumpTo { index } => state.jumped(index),
        }
    }
}
