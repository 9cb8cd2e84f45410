//! # Mode Table
//!
//! The 22 built-in modes as one declarative table. Each entry pairs a 7-step
//! interval pattern with the chord rule that picks representative chords out of
//! the resulting 8-note scale.
//!
//! ## Table Layout
//! ```text
//! ModeDefinition
//!   ├── mode: Mode
//!   ├── steps: [Step; 7]          walked from the tonic, 8 notes total
//!   └── chords: &[ChordTone]      (degree 0..=7, quality) in display order
//! ```
//!
//! Patterns are written as step strings (`"MMmMMMm"`) and decoded at compile
//! time; a malformed pattern or an out-of-range chord degree fails the build.
//!
//! Modes are looked up by [`Mode`] or by display name via [`Mode::from_name`].

use serde::Serialize;

use crate::error::ScaleError;
use crate::interval::Step;

/// Number of notes in a named-mode scale (tonic + 7 steps)
pub const SCALE_LEN: usize = 8;

/// The 22 named modes in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    Major,
    Minor,
    Ousak,
    Xitzaz,
    Armoniko,
    Sampax,
    Xitzaskiar,
    Niavent,
    Kartsigiar,
    Peiraiotikos,
    Poimenikos,
    Segiax,
    Tampaxaniotikos,
    Xouzam,
    Xouseini,
    Rast,
    Kiournti,
    Lokrikos,
    Ludikos,
    Mixoludikos,
    Ouzal,
    Souzinak,
}

impl Mode {
    /// Canonical mode order used for reports
    pub const ALL: [Mode; 22] = [
        Mode::Major,
        Mode::Minor,
        Mode::Ousak,
        Mode::Xitzaz,
        Mode::Armoniko,
        Mode::Sampax,
        Mode::Xitzaskiar,
        Mode::Niavent,
        Mode::Kartsigiar,
        Mode::Peiraiotikos,
        Mode::Poimenikos,
        Mode::Segiax,
        Mode::Tampaxaniotikos,
        Mode::Xouzam,
        Mode::Xouseini,
        Mode::Rast,
        Mode::Kiournti,
        Mode::Lokrikos,
        Mode::Ludikos,
        Mode::Mixoludikos,
        Mode::Ouzal,
        Mode::Souzinak,
    ];

    /// Display name, e.g. "Tampaxaniotikos"
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
            Mode::Ousak => "Ousak",
            Mode::Xitzaz => "Xitzaz",
            Mode::Armoniko => "Armoniko",
            Mode::Sampax => "Sampax",
            Mode::Xitzaskiar => "Xitzaskiar",
            Mode::Niavent => "Niavent",
            Mode::Kartsigiar => "Kartsigiar",
            Mode::Peiraiotikos => "Peiraiotikos",
            Mode::Poimenikos => "Poimenikos",
            Mode::Segiax => "Segiax",
            Mode::Tampaxaniotikos => "Tampaxaniotikos",
            Mode::Xouzam => "Xouzam",
            Mode::Xouseini => "Xouseini",
            Mode::Rast => "Rast",
            Mode::Kiournti => "Kiournti",
            Mode::Lokrikos => "Lokrikos",
            Mode::Ludikos => "Ludikos",
            Mode::Mixoludikos => "Mixoludikos",
            Mode::Ouzal => "Ouzal",
            Mode::Souzinak => "Souzinak",
        }
    }

    /// Look up a mode by display name, ignoring case ("ousak", "Ousak").
    pub fn from_name(name: &str) -> Result<Self, ScaleError> {
        let wanted = name.trim();
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScaleError::UnknownMode(name.to_string()))
    }

    pub fn definition(self) -> &'static ModeDefinition {
        &MODES[self as usize]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Chord quality as rendered in a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Major, // plain name
    Minor, // name + "m"
}

/// One entry of a chord rule: which scale degree, rendered with which quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordTone {
    pub degree: u8, // 0-based index into the 8-note scale
    pub quality: Quality,
}

/// Interval pattern and chord rule for one mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeDefinition {
    pub mode: Mode,
    pub steps: [Step; 7],
    pub chords: &'static [ChordTone],
}

impl ModeDefinition {
    /// The steps written back as a pattern string
    pub fn pattern(&self) -> String {
        self.steps.iter().map(|step| step.as_char()).collect()
    }

    /// Total semitones covered by the walk (12 for an octave-closing mode)
    pub fn span(&self) -> usize {
        self.steps.iter().map(|step| step.semitones()).sum()
    }
}

const fn pattern(s: &str) -> [Step; 7] {
    let bytes = s.as_bytes();
    assert!(bytes.len() == 7, "mode patterns have exactly 7 steps");
    let mut steps = [Step::Minor; 7];
    let mut i = 0;
    while i < 7 {
        steps[i] = match bytes[i] {
            b'm' => Step::Minor,
            b'M' => Step::Major,
            b'A' => Step::Augmented,
            _ => panic!("unknown step in mode pattern"),
        };
        i += 1;
    }
    steps
}

const fn major(degree: u8) -> ChordTone {
    ChordTone {
        degree,
        quality: Quality::Major,
    }
}

const fn minor(degree: u8) -> ChordTone {
    ChordTone {
        degree,
        quality: Quality::Minor,
    }
}

const fn table_is_valid(table: &[ModeDefinition]) -> bool {
    let mut i = 0;
    while i < table.len() {
        // entries sit at their own discriminant so `definition` can index
        if table[i].mode as usize != i || table[i].chords.is_empty() {
            return false;
        }
        let mut j = 0;
        while j < table[i].chords.len() {
            if table[i].chords[j].degree as usize >= SCALE_LEN {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const MODE_TABLE: [ModeDefinition; 22] = [
    ModeDefinition {
        mode: Mode::Major,
        steps: pattern("MMmMMMm"),
        chords: &[major(0), major(4), major(3), major(1)],
    },
    ModeDefinition {
        mode: Mode::Minor,
        steps: pattern("MmMMmMM"),
        chords: &[minor(0), major(4), minor(3), major(5)],
    },
    ModeDefinition {
        mode: Mode::Ousak,
        steps: pattern("mMMMmMM"),
        chords: &[minor(0), major(1), major(2), minor(3), major(5), minor(6)],
    },
    ModeDefinition {
        mode: Mode::Xitzaz,
        steps: pattern("mAmMmMM"),
        chords: &[major(0), major(1), major(3), major(6)],
    },
    ModeDefinition {
        mode: Mode::Armoniko,
        steps: pattern("MmMMmAm"),
        chords: &[minor(0), minor(3), major(4), major(5)],
    },
    ModeDefinition {
        mode: Mode::Sampax,
        steps: pattern("MmmAmMM"),
        chords: &[minor(0), major(2), minor(4), major(5)],
    },
    ModeDefinition {
        mode: Mode::Xitzaskiar,
        steps: pattern("mAmMmAm"),
        chords: &[major(0), major(1), minor(3)],
    },
    ModeDefinition {
        mode: Mode::Niavent,
        steps: pattern("MmAmmAm"),
        chords: &[minor(0), major(4), major(5)],
    },
    ModeDefinition {
        mode: Mode::Kartsigiar,
        steps: pattern("MmMmAmM"),
        chords: &[minor(0), minor(1), major(3), major(6)],
    },
    ModeDefinition {
        mode: Mode::Peiraiotikos,
        steps: pattern("mAMmmMM"),
        chords: &[major(0), major(1), major(3)],
    },
    ModeDefinition {
        mode: Mode::Poimenikos,
        steps: pattern("MmAmMmM"),
        chords: &[minor(0), major(2), minor(4)],
    },
    ModeDefinition {
        mode: Mode::Segiax,
        steps: pattern("AmmMmAm"),
        chords: &[major(0)],
    },
    ModeDefinition {
        mode: Mode::Tampaxaniotikos,
        steps: pattern("MMmMmAm"),
        chords: &[major(0), major(3), major(4)],
    },
    ModeDefinition {
        mode: Mode::Xouzam,
        steps: pattern("AmmMMMm"),
        chords: &[major(0), major(3)],
    },
    ModeDefinition {
        mode: Mode::Xouseini,
        steps: pattern("MMmMMmM"),
        chords: &[major(0), minor(1), minor(4), minor(5), major(3), major(6)],
    },
    ModeDefinition {
        mode: Mode::Rast,
        steps: pattern("MMmMMMm"),
        chords: &[major(0), major(1), major(4), major(3)],
    },
    ModeDefinition {
        mode: Mode::Kiournti,
        steps: pattern("MmMMMmM"),
        chords: &[minor(0), minor(1), minor(4), major(3), major(2), major(6)],
    },
    ModeDefinition {
        mode: Mode::Lokrikos,
        steps: pattern("mMMmMMM"),
        chords: &[minor(0), major(1), minor(3), major(5), minor(6)],
    },
    ModeDefinition {
        mode: Mode::Ludikos,
        steps: pattern("MMMmMMm"),
        chords: &[major(0), major(5), major(4)],
    },
    ModeDefinition {
        mode: Mode::Mixoludikos,
        steps: pattern("MMmMMmM"),
        chords: &[major(0), minor(5), minor(4), minor(1), major(3), major(6)],
    },
    ModeDefinition {
        mode: Mode::Ouzal,
        steps: pattern("mAmMMmM"),
        chords: &[major(0), major(3), minor(6)],
    },
    ModeDefinition {
        mode: Mode::Souzinak,
        steps: pattern("MmAmmMM"),
        chords: &[minor(0), major(2), minor(4), major(5)],
    },
];

const _: () = assert!(table_is_valid(&MODE_TABLE), "mode table is out of order or has an invalid chord degree");

/// All mode definitions, indexed by `Mode as usize`
pub static MODES: [ModeDefinition; 22] = MODE_TABLE;
