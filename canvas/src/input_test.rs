use super::*;

// =============================================================
// Key
// =============================================================

#[test]
fn keycodes_map_to_bound_keys() {
    assert_eq!(Key::from_key_code(37), Key::ArrowLeft);
    assert_eq!(Key::from_key_code(38), Key::ArrowUp);
    assert_eq!(Key::from_key_code(39), Key::ArrowRight);
    assert_eq!(Key::from_key_code(40), Key::ArrowDown);
    assert_eq!(Key::from_key_code(32), Key::Space);
}

#[test]
fn unbound_keycodes_are_other() {
    assert_eq!(Key::from_key_code(65), Key::Other(65));
    assert_eq!(Key::from_key_code(16), Key::Other(16));
}

#[test]
fn arrows_map_to_compass_directions() {
    assert_eq!(Key::ArrowUp.direction(), Some(Direction::North));
    assert_eq!(Key::ArrowDown.direction(), Some(Direction::South));
    assert_eq!(Key::ArrowLeft.direction(), Some(Direction::West));
    assert_eq!(Key::ArrowRight.direction(), Some(Direction::East));
}

#[test]
fn non_arrow_keys_have_no_direction() {
    assert_eq!(Key::Space.direction(), None);
    assert_eq!(Key::Other(90).direction(), None);
}

#[test]
fn arrow_inverts_direction() {
    for direction in Direction::CANDIDATE_ORDER {
        assert_eq!(Key::arrow(direction).direction(), Some(direction));
    }
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn shift_constructor_sets_only_shift() {
    let m = Modifiers::shift();
    assert!(m.shift);
    assert!(!m.ctrl && !m.alt && !m.meta);
}

// =============================================================
// InputEvent
// =============================================================

#[test]
fn input_events_compare_by_payload() {
    let a = InputEvent::PointerDown(Point::new(1.0, 2.0));
    assert_eq!(a, InputEvent::PointerDown(Point::new(1.0, 2.0)));
    assert_ne!(a, InputEvent::PointerUp(Point::new(1.0, 2.0)));
}
