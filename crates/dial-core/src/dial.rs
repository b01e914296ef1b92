//! The pitch dial model.
//!
//! One `PitchDial` owns everything with musical meaning: the inner wheel's
//! rotation offset, the selected reference note on the outer ring and the
//! active scale or chord overlay. Renderers only read from it.

use crate::catalogue::{self, IntervalSet};
use crate::constants::{DEFAULT_ROTATION_STEP, PITCH_CLASS_COUNT, STEP_DEGREES};
use crate::error::{DialError, Result};
use crate::pitch::{normalize, PitchClass, PitchClassSet};
use std::fmt;

/// How the stored rotation maps onto the wheel's on-screen angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationConvention {
    /// Wheel turns by `+rotation × 30°`: the wheel shows the offset.
    #[default]
    Forward,
    /// Wheel turns by `−rotation × 30°`: labels stay oriented with the
    /// transposition applied.
    Compensate,
}

impl RotationConvention {
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            RotationConvention::Forward => 1,
            RotationConvention::Compensate => -1,
        }
    }

    /// On-screen wheel angle for a stored rotation.
    #[inline]
    pub fn wheel_degrees(self, rotation: PitchClass) -> f32 {
        (self.sign() * rotation.value()) as f32 * STEP_DEGREES
    }
}

/// Feature flags selecting which product variant a dial behaves as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialConfig {
    /// Outer-ring clicks select a reference note and produce mapping text.
    pub reference_selection: bool,
    /// Scale and chord toggles highlight a shape on the fixed ring.
    pub interval_overlay: bool,
    pub convention: RotationConvention,
    pub initial_rotation: i32,
}

impl DialConfig {
    /// Written/concert pitch converter.
    pub fn transposer() -> Self {
        Self {
            reference_selection: true,
            interval_overlay: false,
            convention: RotationConvention::Forward,
            initial_rotation: DEFAULT_ROTATION_STEP,
        }
    }

    /// Scale and chord shape viewer.
    pub fn shapes() -> Self {
        Self {
            reference_selection: false,
            interval_overlay: true,
            convention: RotationConvention::Compensate,
            initial_rotation: DEFAULT_ROTATION_STEP,
        }
    }

    /// Both features on one dial; mapping text needs the forward convention.
    pub fn combined() -> Self {
        Self {
            reference_selection: true,
            interval_overlay: true,
            convention: RotationConvention::Forward,
            initial_rotation: DEFAULT_ROTATION_STEP,
        }
    }

    /// Look up a preset by the name used in the page's `data-mode` attribute.
    pub fn from_mode_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "transposer" | "transpose" => Some(Self::transposer()),
            "shapes" | "scales" => Some(Self::shapes()),
            "combined" | "both" => Some(Self::combined()),
            _ => None,
        }
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self::transposer()
    }
}

/// Active scale or chord. Scale and chord never coexist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Overlay {
    #[default]
    None,
    Scale(&'static IntervalSet),
    Chord(&'static IntervalSet),
}

/// Written-to-sounding conversion for the selected reference note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mapping {
    pub selected: PitchClass,
    pub target: PitchClass,
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} selected: maps to {}", self.selected, self.target)
    }
}

#[derive(Clone, Debug)]
pub struct PitchDial {
    config: DialConfig,
    rotation: PitchClass,
    reference: Option<PitchClass>,
    overlay: Overlay,
}

impl PitchDial {
    pub fn new(config: DialConfig) -> Self {
        Self {
            config,
            rotation: normalize(config.initial_rotation),
            reference: config.reference_selection.then_some(PitchClass::C),
            overlay: Overlay::None,
        }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn rotation(&self) -> PitchClass {
        self.rotation
    }

    /// Returns true when the stored rotation changed.
    pub fn set_rotation(&mut self, step: i32) -> bool {
        let next = normalize(step);
        let changed = next != self.rotation;
        self.rotation = next;
        if changed {
            log::debug!("[dial] rotation -> {}", next.value());
        }
        changed
    }

    /// Any `delta` is accepted; it is reduced to one turn before adding.
    pub fn step_rotation(&mut self, delta: i32) -> bool {
        self.set_rotation(self.rotation.value() + delta.rem_euclid(PITCH_CLASS_COUNT))
    }

    /// Angle to apply to the inner wheel, per this dial's convention.
    pub fn wheel_degrees(&self) -> f32 {
        self.config.convention.wheel_degrees(self.rotation)
    }

    pub fn select_reference(&mut self, pc: PitchClass) -> bool {
        if !self.config.reference_selection {
            log::debug!("[dial] reference selection disabled; ignoring {}", pc);
            return false;
        }
        let changed = self.reference != Some(pc);
        self.reference = Some(pc);
        changed
    }

    pub fn reference(&self) -> Option<PitchClass> {
        self.reference
    }

    pub fn mapping(&self) -> Option<Mapping> {
        self.reference.map(|selected| Mapping {
            selected,
            target: normalize(selected.value() - self.rotation.value()),
        })
    }

    pub fn mapping_text(&self) -> Option<String> {
        self.mapping().map(|m| m.to_string())
    }

    pub fn active_scale(&self) -> Option<&'static IntervalSet> {
        match self.overlay {
            Overlay::Scale(s) => Some(s),
            _ => None,
        }
    }

    pub fn active_chord(&self) -> Option<&'static IntervalSet> {
        match self.overlay {
            Overlay::Chord(c) => Some(c),
            _ => None,
        }
    }

    /// Activate `name`, or clear it if it is already the active scale.
    /// Any active chord is replaced.
    pub fn toggle_scale(&mut self, name: &str) -> Result<bool> {
        if !self.config.interval_overlay {
            log::debug!("[dial] interval overlay disabled; ignoring scale {}", name);
            return Ok(false);
        }
        let scale = catalogue::scale(name).ok_or_else(|| DialError::UnknownScale(name.into()))?;
        self.overlay = match self.overlay {
            Overlay::Scale(active) if active.name == scale.name => Overlay::None,
            _ => Overlay::Scale(scale),
        };
        log::debug!("[dial] overlay -> {:?}", self.overlay_name());
        Ok(true)
    }

    /// Chord counterpart of [`PitchDial::toggle_scale`].
    pub fn toggle_chord(&mut self, name: &str) -> Result<bool> {
        if !self.config.interval_overlay {
            log::debug!("[dial] interval overlay disabled; ignoring chord {}", name);
            return Ok(false);
        }
        let chord = catalogue::chord(name).ok_or_else(|| DialError::UnknownChord(name.into()))?;
        self.overlay = match self.overlay {
            Overlay::Chord(active) if active.name == chord.name => Overlay::None,
            _ => Overlay::Chord(chord),
        };
        log::debug!("[dial] overlay -> {:?}", self.overlay_name());
        Ok(true)
    }

    pub fn clear_overlay(&mut self) -> bool {
        let changed = self.overlay != Overlay::None;
        self.overlay = Overlay::None;
        changed
    }

    fn active_set(&self) -> Option<&'static IntervalSet> {
        match self.overlay {
            Overlay::None => None,
            Overlay::Scale(s) | Overlay::Chord(s) => Some(s),
        }
    }

    pub fn overlay_name(&self) -> Option<&'static str> {
        self.active_set().map(|s| s.name)
    }

    /// Pitch classes to mark, rooted at the dial's top position.
    /// Independent of the rotation.
    pub fn highlight_set(&self) -> PitchClassSet {
        self.active_set()
            .map(|set| set.pitch_classes(PitchClass::C))
            .unwrap_or_default()
    }

    /// Inner-wheel pitch class currently lined up with an outer wedge.
    pub fn wheel_pitch_under(&self, outer: PitchClass) -> PitchClass {
        let sign = self.config.convention.sign();
        normalize(outer.value() - sign * self.rotation.value())
    }

    /// Notes of the active shape as read off the wheel, in interval order,
    /// with repeats from compound intervals dropped.
    pub fn overlay_notes(&self) -> Vec<PitchClass> {
        let Some(set) = self.active_set() else {
            return Vec::new();
        };
        let mut seen = PitchClassSet::EMPTY;
        let mut notes = Vec::with_capacity(set.intervals.len());
        for &iv in set.intervals {
            let pc = self.wheel_pitch_under(normalize(iv));
            if !seen.contains(pc) {
                seen.insert(pc);
                notes.push(pc);
            }
        }
        notes
    }

    /// e.g. "7 on G: G, B, D, F".
    pub fn overlay_text(&self) -> Option<String> {
        let set = self.active_set()?;
        let notes = self.overlay_notes();
        let names: Vec<&str> = notes.iter().map(|pc| pc.short_name()).collect();
        let root = notes.first().copied().unwrap_or(PitchClass::C);
        Some(format!("{} on {}: {}", set.title, root.short_name(), names.join(", ")))
    }
}

impl Default for PitchDial {
    fn default() -> Self {
        Self::new(DialConfig::default())
    }
}
