pub mod action;
pub mod catalogue;
pub mod constants;
pub mod dial;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod pitch;
pub mod scene;

pub use action::*;
pub use catalogue::{IntervalSet, CHORDS, SCALES};
pub use constants::*;
pub use dial::*;
pub use error::DialError;
pub use gesture::*;
pub use layout::{hit_test, pointer_angle, Ring, Wedge};
pub use pitch::*;
pub use scene::*;
