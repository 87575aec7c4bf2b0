//! Key label to frontend key-code mapping.

use std::borrow::Cow;

use crate::pages::Layer;

/// Action code of the "back to gamepad overlay" button.
pub const OSK_TOGGLE: &str = "osk_toggle";
/// Action code of the menu button.
pub const MENU_TOGGLE: &str = "menu_toggle";
/// Action code that switches to another overlay page (paired with a `_next_target` line).
pub const OVERLAY_NEXT: &str = "overlay_next";

/// Label shared by left-control on the primary layer and up-arrow in the fn arrow cluster.
pub const CARET: &str = "^";

const UP: &str = "retrok_up";

/// Rows from which a caret on the fn layer means up-arrow.
const ARROW_ROW_MIN: usize = 2;

static KEY_CODES: &[(&str, &str)] = &[
    ("1", "retrok_num1"),
    ("2", "retrok_num2"),
    ("3", "retrok_num3"),
    ("4", "retrok_num4"),
    ("5", "retrok_num5"),
    ("6", "retrok_num6"),
    ("7", "retrok_num7"),
    ("8", "retrok_num8"),
    ("9", "retrok_num9"),
    ("0", "retrok_num0"),
    ("Q", "retrok_q"),
    ("W", "retrok_w"),
    ("E", "retrok_e"),
    ("R", "retrok_r"),
    ("T", "retrok_t"),
    ("Y", "retrok_y"),
    ("U", "retrok_u"),
    ("I", "retrok_i"),
    ("O", "retrok_o"),
    ("P", "retrok_p"),
    ("A", "retrok_a"),
    ("S", "retrok_s"),
    ("D", "retrok_d"),
    ("F", "retrok_f"),
    ("G", "retrok_g"),
    ("H", "retrok_h"),
    ("J", "retrok_j"),
    ("K", "retrok_k"),
    ("L", "retrok_l"),
    ("Z", "retrok_z"),
    ("X", "retrok_x"),
    ("C", "retrok_c"),
    ("V", "retrok_v"),
    ("B", "retrok_b"),
    ("N", "retrok_n"),
    ("M", "retrok_m"),
    ("'", "retrok_quote"),
    (",", "retrok_comma"),
    (".", "retrok_period"),
    ("<x", "retrok_backspace"),
    ("Shift", "retrok_lshift"),
    ("fn", OVERLAY_NEXT),
    (CARET, "retrok_lctrl"),
    ("Space", "retrok_space"),
    ("Alt", "retrok_lalt"),
    ("Tab", "retrok_tab"),
    ("Return", "retrok_return"),
    ("ESC", "retrok_escape"),
    ("F1", "retrok_f1"),
    ("F2", "retrok_f2"),
    ("F3", "retrok_f3"),
    ("F4", "retrok_f4"),
    ("F5", "retrok_f5"),
    ("F6", "retrok_f6"),
    ("F7", "retrok_f7"),
    ("F8", "retrok_f8"),
    ("F9", "retrok_f9"),
    ("F10", "retrok_f10"),
    ("F11", "retrok_f11"),
    ("F12", "retrok_f12"),
    ("-", "retrok_minus"),
    ("=", "retrok_equals"),
    ("/", "retrok_slash"),
    ("[", "retrok_leftbracket"),
    ("]", "retrok_rightbracket"),
    (";", "retrok_semicolon"),
    ("~", "retrok_backquote"),
    (":", "retrok_colon"),
    ("?", "retrok_question"),
    ("!", "retrok_exclaim"),
    ("PgUp", "retrok_pageup"),
    ("Home", "retrok_home"),
    ("Ins", "retrok_insert"),
    ("End", "retrok_end"),
    ("PgDn", "retrok_pagedown"),
    ("<", "retrok_left"),
    ("v", "retrok_down"),
    (">", "retrok_right"),
    ("Del", "retrok_delete"),
];

/// Table lookup without any layer context.
pub fn lookup(label: &str) -> Option<&'static str> {
    KEY_CODES
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, code)| *code)
}

/// Resolve the code for a key placed at `row` of a grid on `layer`.
///
/// Labels missing from the table resolve to `unknown_<label>` so the gap shows up in the
/// generated cfg instead of aborting generation.
pub fn resolve(label: &str, layer: Layer, row: usize) -> Cow<'static, str> {
    if label == CARET && layer == Layer::Fn && row >= ARROW_ROW_MIN {
        return Cow::Borrowed(UP);
    }
    match lookup(label) {
        Some(code) => Cow::Borrowed(code),
        None => {
            tracing::warn!(label, "no key code for label");
            Cow::Owned(format!("unknown_{label}"))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/keycodes.rs"]
mod tests;
