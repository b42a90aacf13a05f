//! Input dispatcher — routes typed device events to session handlers.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use canvas::input::InputEvent;

use crate::session::{Effect, GameSession};

pub fn dispatch(session: &mut GameSession, event: InputEvent) -> Vec<Effect> {
    match event {
        InputEvent::KeyDown { key, modifiers } => session.on_key_down(key, modifiers),
        InputEvent::KeyUp { key } => session.on_key_up(key),
        InputEvent::PointerDown(point) => session.on_pointer_down(point),
        InputEvent::PointerMove(point) => session.on_pointer_move(point),
        InputEvent::PointerUp(point) => session.on_pointer_up(point),
    }
}

/// Dispatch a batch of events in order, concatenating their effects.
pub fn dispatch_all(session: &mut GameSession, events: impl IntoIterator<Item = InputEvent>) -> Vec<Effect> {
    events.into_iter().flat_map(|event| dispatch(session, event)).collect()
}
