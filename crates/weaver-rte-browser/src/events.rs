//! Browser event extraction.

use web_sys::KeyboardEvent;
use weaver_rte_core::{Key, KeyCombo, Modifiers};

/// Convert a DOM keyboard event into a platform-agnostic [`KeyCombo`].
pub fn key_combo_from_event(event: &KeyboardEvent) -> KeyCombo {
    KeyCombo::with_modifiers(Key::from_dom(&event.key()), modifiers_from_event(event))
}

pub fn modifiers_from_event(event: &KeyboardEvent) -> Modifiers {
    Modifiers {
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        shift: event.shift_key(),
        meta: event.meta_key(),
    }
}
