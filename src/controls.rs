//! DOM controls around the canvas: slider, buttons and text readouts.

use crate::constants::*;
use crate::dom;
use crate::state::DialHandle;
use dial_core::{DialAction, DialConfig, IntervalSet, PitchDial, CHORDS, SCALES};
use web_sys as web;

/// Generate one toggle button per scale and chord, and hide the panels of
/// features this dial does not use.
pub fn build_overlay_buttons(document: &web::Document, config: &DialConfig) -> anyhow::Result<()> {
    dom::set_hidden(document, REFERENCE_PANEL_ID, !config.reference_selection);
    dom::set_hidden(document, OVERLAY_PANEL_ID, !config.interval_overlay);
    if !config.interval_overlay {
        return Ok(());
    }
    let groups: [(&str, &str, &[IntervalSet]); 2] =
        [(SCALE_BUTTONS_ID, "scale", SCALES), (CHORD_BUTTONS_ID, "chord", CHORDS)];
    for (container_id, verb, sets) in groups {
        let Some(container) = document.get_element_by_id(container_id) else {
            log::warn!("[controls] missing #{}; {} toggles not shown", container_id, verb);
            continue;
        };
        for set in sets {
            let button = document
                .create_element("button")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            button.set_text_content(Some(set.title));
            _ = button.set_attribute("type", "button");
            _ = button.set_attribute(ACTION_ATTRIBUTE, &format!("{} {}", verb, set.name));
            _ = button.set_attribute(OVERLAY_NAME_ATTRIBUTE, set.name);
            container
                .append_child(&button)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
    }
    Ok(())
}

/// Wire every element carrying a `data-action` attribute to its action.
pub fn wire_action_buttons(document: &web::Document, handle: &DialHandle) {
    let selector = format!("[{}]", ACTION_ATTRIBUTE);
    for el in dom::query_all(document, &selector) {
        let Some(text) = el.get_attribute(ACTION_ATTRIBUTE) else {
            continue;
        };
        match text.parse::<DialAction>() {
            Ok(action) => {
                let handle = handle.clone();
                dom::add_click_listener(&el, move || handle.dispatch(&action));
            }
            Err(e) => log::error!("[controls] {}", e),
        }
    }
}

pub fn wire_rotation_input(document: &web::Document, handle: &DialHandle) -> anyhow::Result<()> {
    let input: web::HtmlInputElement = dom::element_by_id(document, ROTATION_INPUT_ID)?;
    let handle = handle.clone();
    dom::add_input_listener(&input, move |value| match value.trim().parse::<i32>() {
        Ok(step) => handle.dispatch(&DialAction::SetRotation(step)),
        Err(_) => log::warn!("[controls] ignoring rotation value {:?}", value),
    });
    Ok(())
}

/// Push derived state into the DOM after a model change.
pub fn sync(document: &web::Document, dial: &PitchDial) {
    if let Ok(input) = dom::element_by_id::<web::HtmlInputElement>(document, ROTATION_INPUT_ID) {
        input.set_value(&dial.rotation().value().to_string());
    }
    let mapping = dial.mapping_text().unwrap_or_default();
    dom::set_text(document, MAPPING_TEXT_ID, &mapping);
    let overlay = dial.overlay_text().unwrap_or_default();
    dom::set_text(document, OVERLAY_TEXT_ID, &overlay);

    let active = dial.overlay_name();
    let selector = format!("[{}]", OVERLAY_NAME_ATTRIBUTE);
    for el in dom::query_all(document, &selector) {
        let on = el.get_attribute(OVERLAY_NAME_ATTRIBUTE).as_deref() == active;
        dom::set_class(&el, ACTIVE_CLASS, on);
        _ = el.set_attribute("aria-pressed", if on { "true" } else { "false" });
    }
}
