use dial_core::{DialAction, Preset};

/// Keyboard shortcuts for the dial.
#[inline]
pub fn action_for_key(key: &str) -> Option<DialAction> {
    match key {
        "ArrowRight" | "ArrowUp" | "+" | "=" => Some(DialAction::Step(1)),
        "ArrowLeft" | "ArrowDown" | "-" | "_" => Some(DialAction::Step(-1)),
        "0" => Some(DialAction::Preset(Preset::Reset)),
        "9" => Some(DialAction::Preset(Preset::EbAlto)),
        "Escape" => Some(DialAction::ClearOverlay),
        _ => None,
    }
}
