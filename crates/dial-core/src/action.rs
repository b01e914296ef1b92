//! User-level actions and the single update entry point.

use crate::constants::{PRESET_EB_ALTO_STEP, PRESET_RESET_STEP};
use crate::dial::PitchDial;
use crate::error::{DialError, Result};
use crate::pitch::{normalize, PitchClass};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Reset,
    EbAlto,
}

impl Preset {
    pub fn step(self) -> i32 {
        match self {
            Preset::Reset => PRESET_RESET_STEP,
            Preset::EbAlto => PRESET_EB_ALTO_STEP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialAction {
    SetRotation(i32),
    Step(i32),
    Preset(Preset),
    SelectReference(PitchClass),
    ToggleScale(String),
    ToggleChord(String),
    ClearOverlay,
}

fn invalid(input: &str, reason: &'static str) -> DialError {
    DialError::InvalidAction {
        input: input.to_string(),
        reason,
    }
}

fn parse_pitch_class(token: &str) -> Option<PitchClass> {
    if let Ok(n) = token.parse::<i32>() {
        return Some(normalize(n));
    }
    PitchClass::all().find(|pc| pc.short_name().eq_ignore_ascii_case(token))
}

impl FromStr for DialAction {
    type Err = DialError;

    /// `rotate 3`, `step -1`, `preset alto`, `select 4`, `select F#`,
    /// `scale major_pentatonic`, `chord dominant7`, `clear`.
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let verb = parts.next().ok_or_else(|| invalid(input, "empty"))?;
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(invalid(input, "too many arguments"));
        }
        let int_arg = || -> Result<i32> {
            arg.ok_or_else(|| invalid(input, "missing argument"))?
                .parse::<i32>()
                .map_err(|_| invalid(input, "expected an integer"))
        };
        let name_arg = || -> Result<String> {
            arg.map(str::to_string)
                .ok_or_else(|| invalid(input, "missing name"))
        };
        match verb.to_ascii_lowercase().as_str() {
            "rotate" | "set" => int_arg().map(DialAction::SetRotation),
            "step" => int_arg().map(DialAction::Step),
            "preset" => match arg.map(str::to_ascii_lowercase).as_deref() {
                Some("reset") | Some("0") => Ok(DialAction::Preset(Preset::Reset)),
                Some("alto") | Some("eb") | Some("eb-alto") => Ok(DialAction::Preset(Preset::EbAlto)),
                _ => Err(invalid(input, "unknown preset")),
            },
            "select" => arg
                .and_then(parse_pitch_class)
                .map(DialAction::SelectReference)
                .ok_or_else(|| invalid(input, "expected a pitch class")),
            "scale" => name_arg().map(DialAction::ToggleScale),
            "chord" => name_arg().map(DialAction::ToggleChord),
            "clear" => Ok(DialAction::ClearOverlay),
            _ => Err(invalid(input, "unknown verb")),
        }
    }
}

impl PitchDial {
    /// Apply one action. Returns whether the visible state changed.
    pub fn apply(&mut self, action: &DialAction) -> Result<bool> {
        Ok(match action {
            DialAction::SetRotation(step) => self.set_rotation(*step),
            DialAction::Step(delta) => self.step_rotation(*delta),
            DialAction::Preset(p) => self.set_rotation(p.step()),
            DialAction::SelectReference(pc) => self.select_reference(*pc),
            DialAction::ToggleScale(name) => self.toggle_scale(name)?,
            DialAction::ToggleChord(name) => self.toggle_chord(name)?,
            DialAction::ClearOverlay => self.clear_overlay(),
        })
    }
}
