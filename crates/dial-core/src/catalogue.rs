//! Fixed scale and chord catalogues.
//!
//! Intervals are semitone offsets from the root and may exceed 11 (e.g. 14 for
//! a ninth); they are reduced mod 12 when turned into pitch classes.

use crate::pitch::{PitchClass, PitchClassSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalSet {
    pub name: &'static str,
    pub title: &'static str,
    pub intervals: &'static [i32],
}

impl IntervalSet {
    const fn new(name: &'static str, title: &'static str, intervals: &'static [i32]) -> Self {
        Self {
            name,
            title,
            intervals,
        }
    }

    /// Pitch classes of this set rooted at `root`.
    pub fn pitch_classes(&self, root: PitchClass) -> PitchClassSet {
        PitchClassSet::from_intervals(root, self.intervals)
    }
}

pub const MAJOR_PENTATONIC: &[i32] = &[0, 2, 4, 7, 9];
pub const MINOR_PENTATONIC: &[i32] = &[0, 3, 5, 7, 10];

pub const SCALES: &[IntervalSet] = &[
    IntervalSet::new("major_pentatonic", "Major pentatonic", MAJOR_PENTATONIC),
    IntervalSet::new("minor_pentatonic", "Minor pentatonic", MINOR_PENTATONIC),
];

pub const CHORDS: &[IntervalSet] = &[
    // triads
    IntervalSet::new("major", "Maj", &[0, 4, 7]),
    IntervalSet::new("minor", "m", &[0, 3, 7]),
    IntervalSet::new("diminished", "dim", &[0, 3, 6]),
    IntervalSet::new("augmented", "aug", &[0, 4, 8]),
    IntervalSet::new("sus2", "sus2", &[0, 2, 7]),
    IntervalSet::new("sus4", "sus4", &[0, 5, 7]),
    // sixths and sevenths
    IntervalSet::new("major6", "6", &[0, 4, 7, 9]),
    IntervalSet::new("minor6", "m6", &[0, 3, 7, 9]),
    IntervalSet::new("dominant7", "7", &[0, 4, 7, 10]),
    IntervalSet::new("major7", "M7", &[0, 4, 7, 11]),
    IntervalSet::new("minor7", "m7", &[0, 3, 7, 10]),
    IntervalSet::new("minor_major7", "mM7", &[0, 3, 7, 11]),
    IntervalSet::new("half_diminished7", "m7♭5", &[0, 3, 6, 10]),
    IntervalSet::new("diminished7", "dim7", &[0, 3, 6, 9]),
    IntervalSet::new("augmented7", "aug7", &[0, 4, 8, 10]),
    IntervalSet::new("seven_sus4", "7sus4", &[0, 5, 7, 10]),
    // extensions
    IntervalSet::new("add9", "add9", &[0, 4, 7, 14]),
    IntervalSet::new("dominant9", "9", &[0, 4, 7, 10, 14]),
    IntervalSet::new("major9", "M9", &[0, 4, 7, 11, 14]),
    IntervalSet::new("minor9", "m9", &[0, 3, 7, 10, 14]),
    IntervalSet::new("dominant11", "11", &[0, 4, 7, 10, 14, 17]),
    IntervalSet::new("dominant13", "13", &[0, 4, 7, 10, 14, 17, 21]),
];

pub fn scale(name: &str) -> Option<&'static IntervalSet> {
    SCALES.iter().find(|s| s.name == name)
}

pub fn chord(name: &str) -> Option<&'static IntervalSet> {
    CHORDS.iter().find(|c| c.name == name)
}
