//! # Scale Engine
//!
//! Builds chromatic rotations, interval walks and named-mode scales for one
//! validated tonic.
//!
//! ## Pipeline
//! 1. Validate the tonic against the membership tables
//! 2. Resolve the spelling (sharp or flat) and the tonic's index, once
//! 3. Walk an interval pattern from that index, mod 12
//! 4. For named modes, apply the mode's chord rule to the 8-note result
//!
//! The spelling chosen in step 2 is used for every name the engine produces,
//! so one computation never mixes `C#` and `Db`.
//!
//! ## Example
//! ```rust
//! use modal_scales::Scale;
//!
//! let scale = Scale::new("C")?;
//! let major = scale.major();
//! assert_eq!(major.notes, vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
//! assert_eq!(major.chord_labels(), "C, G, F, D");
//! # Ok::<(), modal_scales::ScaleError>(())
//! ```

use serde::Serialize;

use crate::error::ScaleError;
use crate::interval::{steps, validate_intervals_with, IntervalPolicy, Step};
use crate::mode::{Mode, Quality};
use crate::pitch::{Spelling, Tonic};

/// Every spelling a scale note can take, in fretboard order
pub const ALL_SPELLINGS: [&str; 17] = [
    "A", "A#", "Bb", "B", "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab",
];

/// A chord label: root name plus quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chord {
    pub root: &'static str,
    pub quality: Quality,
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.quality {
            Quality::Major => write!(f, "{}", self.root),
            Quality::Minor => write!(f, "{}m", self.root),
        }
    }
}

/// A named-mode scale with its representative chords
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeScale {
    pub mode: Mode,
    pub notes: Vec<&'static str>,
    pub chords: Vec<Chord>,
}

impl ModeScale {
    /// Chords joined as "Cm, G, Fm, Bb"
    pub fn chord_labels(&self) -> String {
        self.chords
            .iter()
            .map(|chord| chord.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Spellings from [`ALL_SPELLINGS`] that do not appear in the scale.
    ///
    /// The comparison is on spelling, so a flat-spelled scale still lists the
    /// sharp names of its own pitch classes.
    pub fn excluded_notes(&self) -> Vec<&'static str> {
        ALL_SPELLINGS
            .iter()
            .copied()
            .filter(|name| !self.notes.contains(name))
            .collect()
    }
}

/// All 22 modes for one tonic, in canonical order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleReport {
    pub tonic: Tonic,
    pub modes: Vec<ModeScale>,
}

impl ScaleReport {
    /// Find a mode by display name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&ModeScale> {
        let mode = Mode::from_name(name).ok()?;
        self.modes.iter().find(|scale| scale.mode == mode)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modes.iter().map(|scale| scale.mode.name())
    }
}

/// Scale engine bound to one tonic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    tonic: Tonic,
    pitches: &'static [&'static str; 12],
    tonic_index: usize,
}

macro_rules! named_modes {
    ($($method:ident => $mode:ident),* $(,)?) => {
        $(
            #[doc = concat!("The ", stringify!($mode), " scale and its chords.")]
            pub fn $method(&self) -> ModeScale {
                self.mode(Mode::$mode)
            }
        )*
    };
}

impl Scale {
    /// Validate a case-sensitive tonic spelling and bind the engine to it.
    pub fn new(tonic: &str) -> Result<Self, ScaleError> {
        Self::from_tonic(Tonic::parse(tonic)?)
    }

    pub fn from_tonic(tonic: Tonic) -> Result<Self, ScaleError> {
        let tonic_index = tonic.index()?;
        Ok(Self {
            tonic,
            pitches: tonic.spelling().pitches(),
            tonic_index,
        })
    }

    pub fn tonic(&self) -> Tonic {
        self.tonic
    }

    pub fn spelling(&self) -> Spelling {
        self.tonic.spelling()
    }

    /// The 12 pitch names starting at the tonic, ascending by semitone.
    pub fn chromatic(&self) -> Vec<&'static str> {
        let (before, after) = self.pitches.split_at(self.tonic_index);
        after.iter().chain(before.iter()).copied().collect()
    }

    /// Walk `pattern` from the tonic with the lenient policy.
    ///
    /// Returns the tonic followed by one name per recognized step; other
    /// characters are skipped.
    ///
    /// # Example
    /// ```
    /// use modal_scales::Scale;
    ///
    /// let scale = Scale::new("C")?;
    /// assert_eq!(scale.interval("MMA")?, vec!["C", "D", "E", "G"]);
    /// assert_eq!(scale.interval("M?M")?, vec!["C", "D", "E"]);
    /// # Ok::<(), modal_scales::ScaleError>(())
    /// ```
    pub fn interval(&self, pattern: &str) -> Result<Vec<&'static str>, ScaleError> {
        self.interval_with(pattern, IntervalPolicy::Lenient)
    }

    pub fn interval_with(
        &self,
        pattern: &str,
        policy: IntervalPolicy,
    ) -> Result<Vec<&'static str>, ScaleError> {
        let pattern = validate_intervals_with(pattern, policy)?;
        Ok(self.walk(steps(pattern)))
    }

    /// Build one named mode from the mode table.
    pub fn mode(&self, mode: Mode) -> ModeScale {
        let definition = mode.definition();
        let notes = self.walk(definition.steps.iter().copied());
        let chords = definition
            .chords
            .iter()
            .map(|tone| Chord {
                root: notes[tone.degree as usize],
                quality: tone.quality,
            })
            .collect();

        ModeScale {
            mode,
            notes,
            chords,
        }
    }

    /// Every named mode for this tonic, in canonical order.
    pub fn scale_all(&self) -> ScaleReport {
        ScaleReport {
            tonic: self.tonic,
            modes: Mode::ALL.iter().map(|mode| self.mode(*mode)).collect(),
        }
    }

    fn walk(&self, steps: impl Iterator<Item = Step>) -> Vec<&'static str> {
        let mut index = self.tonic_index;
        let mut notes = vec![self.pitches[index]];
        for step in steps {
            index = (index + step.semitones()) % 12;
            notes.push(self.pitches[index]);
        }
        notes
    }

    named_modes! {
        major => Major,
        minor => Minor,
        ousak => Ousak,
        xitzaz => Xitzaz,
        armoniko => Armoniko,
        sampax => Sampax,
        xitzaskiar => Xitzaskiar,
        niavent => Niavent,
        kartsigiar => Kartsigiar,
        peiraiotikos => Peiraiotikos,
        poimenikos => Poimenikos,
        segiax => Segiax,
        tampaxaniotikos => Tampaxaniotikos,
        xouzam => Xouzam,
        xouseini => Xouseini,
        rast => Rast,
        kiournti => Kiournti,
        lokrikos => Lokrikos,
        ludikos => Ludikos,
        mixoludikos => Mixoludikos,
        ouzal => Ouzal,
        souzinak => Souzinak,
    }
}
