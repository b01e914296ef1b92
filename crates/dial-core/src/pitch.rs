use crate::constants::PITCH_CLASS_COUNT;
use std::fmt;

/// Full display names, indexed by pitch class starting at C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#/D♭", "D", "D#/E♭", "E", "F", "F#/G♭", "G", "G#/A♭", "A", "A#/B♭", "B",
];

/// Pitch classes drawn as "black keys".
pub const ACCIDENTALS: [u8; 5] = [1, 3, 6, 8, 10];

/// Wrap any integer step into [0, 12).
#[inline]
pub fn normalize(step: i32) -> PitchClass {
    PitchClass(step.rem_euclid(PITCH_CLASS_COUNT) as u8)
}

/// One of the twelve equal-tempered pitch classes, 0 = C.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Every pitch class in ascending order.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASS_COUNT as u8).map(PitchClass)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn value(self) -> i32 {
        i32::from(self.0)
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.index()]
    }

    /// Sharp spelling only ("C#/D♭" -> "C#").
    pub fn short_name(self) -> &'static str {
        let name = self.name();
        name.split('/').next().unwrap_or(name)
    }

    pub fn is_accidental(self) -> bool {
        ACCIDENTALS.contains(&self.0)
    }

    /// Move by a signed number of semitones, wrapping around the circle.
    #[inline]
    pub fn transpose(self, semitones: i32) -> PitchClass {
        normalize(self.value() + semitones)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of pitch classes packed into the low 12 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub const EMPTY: PitchClassSet = PitchClassSet(0);

    /// Reduce every interval mod 12 and add it to `root`.
    pub fn from_intervals(root: PitchClass, intervals: &[i32]) -> PitchClassSet {
        intervals
            .iter()
            .map(|&iv| root.transpose(iv))
            .collect()
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.0;
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.0) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchClassSet::EMPTY;
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_drop_flat_spelling() {
        assert_eq!(normalize(1).short_name(), "C#");
        assert_eq!(normalize(10).short_name(), "A#");
        assert_eq!(normalize(4).short_name(), "E");
    }

    #[test]
    fn set_bits_stay_within_twelve() {
        let set: PitchClassSet = (-30..30).map(normalize).collect();
        assert_eq!(set.len(), 12);
        assert_eq!(set.0, 0x0fff);
    }
}
