// Shared dial constants used by the model, the layout and the web frontend.

// Pitch-class circle
pub const PITCH_CLASS_COUNT: i32 = 12;
pub const STEP_DEGREES: f32 = 360.0 / PITCH_CLASS_COUNT as f32; // 30° per semitone
pub const STEP_RADIANS: f32 = std::f32::consts::TAU / PITCH_CLASS_COUNT as f32;

// Rotation presets
pub const PRESET_RESET_STEP: i32 = 0;
pub const PRESET_EB_ALTO_STEP: i32 = 9; // E♭ alto sax written -> concert
pub const DEFAULT_ROTATION_STEP: i32 = PRESET_EB_ALTO_STEP;

// Dial layout in view-box units
pub const VIEW_SIZE: f32 = 600.0;
pub const CENTER: [f32; 2] = [VIEW_SIZE / 2.0, VIEW_SIZE / 2.0];

pub const OUTER_RING_OUTER_RADIUS: f32 = 280.0;
pub const OUTER_RING_INNER_RADIUS: f32 = 190.0;
pub const INNER_RING_OUTER_RADIUS: f32 = 180.0;
pub const INNER_RING_INNER_RADIUS: f32 = 90.0;

// Pitch class 0 is centered at 12 o'clock
pub const TOP_ANGLE_DEGREES: f32 = -90.0;

// Labels sit slightly below the mid radius point, matching SVG baseline offsets
pub const LABEL_BASELINE_OFFSET: f32 = 7.0;
