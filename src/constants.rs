// Page wiring and visual constants for the web frontend.
// Geometry lives in `dial_core::constants`.

// DOM ids
pub const DIAL_CANVAS_ID: &str = "dial";
pub const ROTATION_INPUT_ID: &str = "rotation";
pub const MAPPING_TEXT_ID: &str = "mapping-text";
pub const OVERLAY_TEXT_ID: &str = "overlay-text";
pub const SCALE_BUTTONS_ID: &str = "scale-buttons";
pub const CHORD_BUTTONS_ID: &str = "chord-buttons";
pub const REFERENCE_PANEL_ID: &str = "reference-panel";
pub const OVERLAY_PANEL_ID: &str = "overlay-panel";

// Attributes
pub const MODE_ATTRIBUTE: &str = "data-mode"; // on the canvas: transposer | shapes | combined
pub const ACTION_ATTRIBUTE: &str = "data-action"; // textual DialAction, e.g. "step -1"
pub const OVERLAY_NAME_ATTRIBUTE: &str = "data-overlay";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// Offline support
pub const SERVICE_WORKER_URL: &str = "./sw.js";

// Wedge fills
pub const NATURAL_FILL: &str = "#f5f1e8";
pub const ACCIDENTAL_FILL: &str = "#2c2c34";
pub const INNER_NATURAL_FILL: &str = "#dde8f3";
pub const INNER_ACCIDENTAL_FILL: &str = "#24303f";
pub const HIGHLIGHT_NATURAL_FILL: &str = "#f4c15d";
pub const HIGHLIGHT_ACCIDENTAL_FILL: &str = "#b9822a";

// Strokes
pub const WEDGE_STROKE: &str = "#6b6b73";
pub const WEDGE_STROKE_WIDTH: f64 = 1.5;
pub const SELECTED_STROKE: &str = "#e4572e";
pub const SELECTED_STROKE_WIDTH: f64 = 5.0;

// Labels
pub const LABEL_FONT: &str = "600 22px system-ui, sans-serif";
pub const INNER_LABEL_FONT: &str = "600 18px system-ui, sans-serif";
pub const LABEL_COLOR: &str = "#1e1e24";

// Background behind the dial
pub const BACKGROUND: &str = "#10141c";
