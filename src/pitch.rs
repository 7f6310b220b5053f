//! MIDI note numbers and scientific pitch notation.
//!
//! Middle C is `C4` = MIDI 60, so MIDI 0 is `C-1` and 127 is `G9`. Song and
//! singer ranges are stored as MIDI numbers and shown in SPN.

use std::fmt;
use std::str::FromStr;

use crate::{NextTrackError, Result};

/// Highest valid MIDI note number.
pub const MIDI_MAX: u8 = 127;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Render a MIDI note number in SPN: 60 → `C4`, 61 → `C#4`.
pub fn midi_to_spn(midi: u8) -> Result<String> {
    if midi > MIDI_MAX {
        return Err(NextTrackError::InvalidInput(format!(
            "midi must be 0-{MIDI_MAX}, got {midi}"
        )));
    }
    let name = NOTE_NAMES[usize::from(midi % 12)];
    let octave = i32::from(midi / 12) - 1;
    Ok(format!("{name}{octave}"))
}

/// Parse an SPN string: `C4` → 60, `F#3` → 54, `Bb2` → 46.
///
/// Accepts `#`/`♯` and `b`/`♭` accidentals, a lowercase letter and
/// surrounding whitespace. Flats are read as their enharmonic sharps;
/// spellings without a sharp equivalent in the twelve names (`E#`, `Cb`)
/// are rejected.
pub fn spn_to_midi(spn: &str) -> Result<u8> {
    let invalid = || NextTrackError::InvalidInput(format!("invalid SPN string: {spn:?}"));

    let mut chars = spn.trim().chars().peekable();
    let letter = chars
        .next()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'A'..='G'))
        .ok_or_else(invalid)?
        .to_ascii_uppercase();

    let accidental = match chars.peek() {
        Some('#' | '♯') => Some('#'),
        Some('b' | '♭') => Some('b'),
        _ => None,
    };
    if accidental.is_some() {
        chars.next();
    }

    let octave_str: String = chars.collect();
    let octave = parse_octave(&octave_str).ok_or_else(invalid)?;

    let name = match accidental {
        Some('#') => format!("{letter}#"),
        Some(_) => flat_to_sharp(letter)
            .ok_or_else(|| NextTrackError::InvalidInput(format!("unsupported note name: {letter}b")))?
            .to_string(),
        None => letter.to_string(),
    };
    let index = NOTE_NAMES
        .iter()
        .position(|n| *n == name)
        .ok_or_else(|| NextTrackError::InvalidInput(format!("unsupported note name: {name}")))?;

    let midi = index as i32 + (octave + 1) * 12;
    u8::try_from(midi)
        .ok()
        .filter(|m| *m <= MIDI_MAX)
        .ok_or_else(|| NextTrackError::InvalidInput(format!("{spn:?} is outside the MIDI range")))
}

/// A single octave digit, optionally negative (`-1` through `9`).
fn parse_octave(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.len() != 1 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn flat_to_sharp(letter: char) -> Option<&'static str> {
    match letter {
        'D' => Some("C#"),
        'E' => Some("D#"),
        'G' => Some("F#"),
        'A' => Some("G#"),
        'B' => Some("A#"),
        _ => None,
    }
}

/// An inclusive range of MIDI notes a singer can comfortably reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocalRange {
    low: u8,
    high: u8,
}

impl VocalRange {
    pub fn new(low: u8, high: u8) -> Result<Self> {
        if high > MIDI_MAX {
            return Err(NextTrackError::InvalidInput(format!(
                "midi must be 0-{MIDI_MAX}, got {high}"
            )));
        }
        if low > high {
            return Err(NextTrackError::InvalidInput(format!(
                "range low ({low}) is above high ({high})"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn high(&self) -> u8 {
        self.high
    }

    /// Width of the range in semitones.
    pub fn span(&self) -> u8 {
        self.high - self.low
    }

    pub fn contains(&self, midi: u8) -> bool {
        (self.low..=self.high).contains(&midi)
    }

    /// Whether a song spanning `song_low..=song_high` sits entirely inside
    /// this range.
    pub fn fits(&self, song_low: u8, song_high: u8) -> bool {
        song_low <= song_high && self.contains(song_low) && self.contains(song_high)
    }
}

impl FromStr for VocalRange {
    type Err = NextTrackError;

    /// Parse `"A2-E4"` (either side may also be a bare MIDI number).
    fn from_str(s: &str) -> Result<Self> {
        // Split on the first '-' that follows a character, so "C-1-C4" parses.
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(i, c)| c == '-' && s[..i].trim_end().chars().last().is_some_and(|p| p.is_ascii_digit()))
            .map(|(i, _)| i)
            .ok_or_else(|| NextTrackError::InvalidInput(format!("invalid range: {s:?}")))?;

        let low = parse_note(&s[..split])?;
        let high = parse_note(&s[split + 1..])?;
        Self::new(low, high)
    }
}

fn parse_note(s: &str) -> Result<u8> {
    let s = s.trim();
    match s.parse::<u8>() {
        Ok(midi) if midi <= MIDI_MAX => Ok(midi),
        Ok(midi) => Err(NextTrackError::InvalidInput(format!(
            "midi must be 0-{MIDI_MAX}, got {midi}"
        ))),
        Err(_) => spn_to_midi(s),
    }
}

impl fmt::Display for VocalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Both ends are validated on construction.
        let low = midi_to_spn(self.low).map_err(|_| fmt::Error)?;
        let high = midi_to_spn(self.high).map_err(|_| fmt::Error)?;
        write!(f, "{low}-{high}")
    }
}
