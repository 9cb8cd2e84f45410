//! # Pitch Space
//!
//! The fixed 12-pitch-class chromatic universe in its two enharmonic spellings,
//! and the tonic membership tables that decide which spelling a tonic uses.
//!
//! ## Spelling Tables
//! ```text
//! index:  0  1  2  3  4  5  6  7  8  9  10 11
//! sharp:  A  A# B  C  C# D  D# E  F  F# G  G#
//! flat:   A  Bb B  C  Db D  Eb E  F  Gb G  Ab
//! ```
//! Index `i` names the same pitch class in both tables.
//!
//! ## Tonic Conventions
//! A tonic is written with an upper-case letter for the major convention (`C`,
//! `F#`, `Bb`) and a lower-case letter for the minor convention (`c`, `f#`,
//! `bb`). The spelling is sharp iff the tonic is listed in [`SHARP_TONES`],
//! otherwise flat. [`Tonic`] carries the convention explicitly so callers do
//! not have to rely on letter case.

use serde::Serialize;

use crate::error::ScaleError;

/// Sharp-spelled chromatic sequence starting at A
pub static SHARP_PITCHES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Flat-spelled chromatic sequence starting at A
pub static FLAT_PITCHES: [&str; 12] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// Tonic spellings that select the sharp sequence
pub static SHARP_TONES: [&str; 14] = [
    "A", "B", "C", "D", "E", "F#", "G", // major convention
    "a", "b", "c#", "d#", "e", "f#", "g#", // minor convention
];

/// Tonic spellings that select the flat sequence
pub static FLAT_TONES: [&str; 14] = [
    "Ab", "Bb", "Cb", "Db", "Eb", "F", "Gb", // major convention
    "ab", "bb", "c", "d", "eb", "f", "g", // minor convention
];

/// Which of the two chromatic sequences a computation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharp,
    Flat,
}

impl Spelling {
    pub fn pitches(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharp => &SHARP_PITCHES,
            Spelling::Flat => &FLAT_PITCHES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Spelling::Sharp => "sharp",
            Spelling::Flat => "flat",
        }
    }
}

/// Major (upper-case) or minor (lower-case) tonic convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    Major,
    Minor,
}

/// Check that `tonic` is one of the accepted spellings.
///
/// No normalization is applied: `"C"` and `"c"` are both accepted but select
/// different tables, while `"c#"` is accepted and `"C#"` is not.
///
/// # Example
/// ```
/// use modal_scales::{validate_tonic, ScaleError};
///
/// assert_eq!(validate_tonic("F#"), Ok("F#"));
/// assert!(matches!(validate_tonic("H"), Err(ScaleError::InvalidTonic(_))));
/// ```
pub fn validate_tonic(tonic: &str) -> Result<&str, ScaleError> {
    if SHARP_TONES.contains(&tonic) || FLAT_TONES.contains(&tonic) {
        Ok(tonic)
    } else {
        Err(ScaleError::InvalidTonic(tonic.to_string()))
    }
}

/// Pick the spelling sequence for an already validated tonic.
pub fn resolve_spelling(tonic: &str) -> Spelling {
    if SHARP_TONES.contains(&tonic) {
        Spelling::Sharp
    } else {
        Spelling::Flat
    }
}

/// Position of the tonic's capitalized name within the spelling sequence.
///
/// A tonic that passed validation but cannot be found is a table drift, not
/// bad input, and is reported as [`ScaleError::Inconsistent`].
pub fn tonic_index(tonic: &str, spelling: Spelling) -> Result<usize, ScaleError> {
    let name = capitalize(tonic);
    spelling
        .pitches()
        .iter()
        .position(|pitch| *pitch == name)
        .ok_or_else(|| ScaleError::Inconsistent {
            tonic: tonic.to_string(),
            spelling: spelling.as_str(),
        })
}

/// Upper-case the first character and lower-case the rest ("bb" -> "Bb").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Index of a capitalized pitch name in either spelling table
fn pitch_class(name: &str) -> Option<usize> {
    SHARP_PITCHES
        .iter()
        .position(|pitch| *pitch == name)
        .or_else(|| FLAT_PITCHES.iter().position(|pitch| *pitch == name))
}

fn convention_of(tonic: &str) -> Convention {
    if tonic.starts_with(|c: char| c.is_ascii_lowercase()) {
        Convention::Minor
    } else {
        Convention::Major
    }
}

/// A validated tonic with its convention and resolved spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tonic {
    name: &'static str,
    convention: Convention,
    spelling: Spelling,
}

impl Tonic {
    /// Parse a case-sensitive tonic spelling like `"Bb"` or `"f#"`.
    pub fn parse(s: &str) -> Result<Self, ScaleError> {
        let name = SHARP_TONES
            .iter()
            .chain(FLAT_TONES.iter())
            .find(|tone| **tone == s)
            .copied()
            .ok_or_else(|| ScaleError::InvalidTonic(s.to_string()))?;

        let convention = convention_of(name);

        Ok(Self {
            name,
            convention,
            spelling: resolve_spelling(name),
        })
    }

    /// Build a tonic from a pitch name and an explicit convention.
    ///
    /// The letter case of `pitch` is ignored; the convention alone decides it.
    /// A pitch whose spelling is not listed for the convention is respelled
    /// enharmonically (`Db` minor becomes `c#`, `A#` major becomes `Bb`).
    ///
    /// # Example
    /// ```
    /// use modal_scales::{Convention, Spelling, Tonic};
    ///
    /// let tonic = Tonic::new("F#", Convention::Minor)?;
    /// assert_eq!(tonic.as_str(), "f#");
    /// assert_eq!(tonic.spelling(), Spelling::Sharp);
    ///
    /// let tonic = Tonic::new("Db", Convention::Minor)?;
    /// assert_eq!(tonic.as_str(), "c#");
    /// # Ok::<(), modal_scales::ScaleError>(())
    /// ```
    pub fn new(pitch: &str, convention: Convention) -> Result<Self, ScaleError> {
        let major = capitalize(pitch.trim());
        let spelled = match convention {
            Convention::Major => major.clone(),
            Convention::Minor => {
                let mut chars = major.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        };
        if let Ok(tonic) = Self::parse(&spelled) {
            return Ok(tonic);
        }

        let class = pitch_class(&major).ok_or_else(|| ScaleError::InvalidTonic(pitch.to_string()))?;
        let name = SHARP_TONES
            .iter()
            .chain(FLAT_TONES.iter())
            .copied()
            .filter(|tone| convention_of(tone) == convention)
            .find(|tone| tonic_index(tone, resolve_spelling(tone)).ok() == Some(class))
            .ok_or_else(|| ScaleError::InvalidTonic(spelled.clone()))?;
        Self::parse(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.name
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Index of this tonic in its spelling sequence
    pub fn index(&self) -> Result<usize, ScaleError> {
        tonic_index(self.name, self.spelling)
    }
}

impl std::fmt::Display for Tonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
