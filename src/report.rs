//! # Report Rendering
//!
//! Turns engine output into text for the terminal, or into YAML/JSON for other
//! tools.
//!
//! ## Text Layout
//! All modes, one block per mode separated by a blank line:
//! ```text
//! C Major Scale: C D E F G A B C
//! Major Chords: C, G, F, D
//!
//! C Minor Scale: C D D# F G G# A# C
//! Minor Chords: Cm, G, Fm, G#
//! ```
//!
//! A single mode as an info block:
//! ```text
//! ------------------------------------------------------
//! Selected Key: C
//! Scale Name: Major
//! Scale: C D E F G A B C
//! Chords: C, G, F, D
//! Not in scale: A# Bb C# Db D# Eb F# Gb G# Ab
//! ------------------------------------------------------
//! ```

use serde::Serialize;

use crate::error::ScaleError;
use crate::pitch::Tonic;
use crate::scale::ModeScale;

const RULE: &str = "------------------------------------------------------";

/// How a report is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// A custom interval walk carried alongside the mode scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Walk<'a> {
    pub pattern: &'a str,
    pub notes: &'a [&'static str],
}

/// Serializable view of a set of mode scales for one tonic
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    tonic: &'a str,
    spelling: &'static str,
    modes: Vec<ModeView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intervals: Option<Walk<'a>>,
}

#[derive(Debug, Serialize)]
struct ModeView<'a> {
    name: &'static str,
    pattern: String,
    notes: &'a [&'static str],
    chords: String,
}

impl<'a> ReportView<'a> {
    fn new(tonic: &'a Tonic, scales: &'a [ModeScale], walk: Option<Walk<'a>>) -> Self {
        Self {
            tonic: tonic.as_str(),
            spelling: tonic.spelling().as_str(),
            modes: scales
                .iter()
                .map(|scale| ModeView {
                    name: scale.mode.name(),
                    pattern: scale.mode.definition().pattern(),
                    notes: &scale.notes,
                    chords: scale.chord_labels(),
                })
                .collect(),
            intervals: walk,
        }
    }
}

/// One "Scale:" / "Chords:" block per mode, blank line between modes.
pub fn render_text(tonic: &Tonic, scales: &[ModeScale]) -> String {
    scales
        .iter()
        .map(|scale| {
            format!(
                "{} {} Scale: {}\n{} Chords: {}\n",
                tonic,
                scale.mode,
                scale.notes.join(" "),
                scale.mode,
                scale.chord_labels()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Info block for a single mode, including the notes outside the scale.
pub fn render_info(tonic: &Tonic, scale: &ModeScale) -> String {
    let mut text = String::new();
    text.push_str(RULE);
    text.push('\n');
    text.push_str(&format!("Selected Key: {}\n", tonic));
    text.push_str(&format!("Scale Name: {}\n", scale.mode));
    text.push_str(&format!("Scale: {}\n", scale.notes.join(" ")));
    text.push_str(&format!("Chords: {}\n", scale.chord_labels()));
    text.push_str(&format!("Not in scale: {}\n", scale.excluded_notes().join(" ")));
    text.push_str(RULE);
    text.push('\n');
    text
}

/// Chromatic rotation or a custom interval walk, as one line.
pub fn render_notes(tonic: &Tonic, label: &str, notes: &[&str]) -> String {
    format!("{} {}: {}\n", tonic, label, notes.join(" "))
}

pub fn render_yaml(
    tonic: &Tonic,
    scales: &[ModeScale],
    walk: Option<Walk<'_>>,
) -> Result<String, ScaleError> {
    serde_yaml::to_string(&ReportView::new(tonic, scales, walk))
        .map_err(|e| ScaleError::Output(e.to_string()))
}

pub fn render_json(
    tonic: &Tonic,
    scales: &[ModeScale],
    walk: Option<Walk<'_>>,
) -> Result<String, ScaleError> {
    serde_json::to_string_pretty(&ReportView::new(tonic, scales, walk))
        .map_err(|e| ScaleError::Output(e.to_string()))
}

/// Render `scales`, plus an optional interval walk, in the requested format.
///
/// Text output uses the info block when exactly one mode is given, and puts
/// the walk on its own line after the modes.
pub fn render(
    tonic: &Tonic,
    scales: &[ModeScale],
    walk: Option<Walk<'_>>,
    format: OutputFormat,
) -> Result<String, ScaleError> {
    match format {
        OutputFormat::Text => {
            let mut text = match scales {
                [] => String::new(),
                [single] => render_info(tonic, single),
                _ => render_text(tonic, scales),
            };
            if let Some(walk) = walk {
                if !text.is_empty() {
                    text.push('\n');
                }
                let label = format!("Intervals {}", walk.pattern);
                text.push_str(&render_notes(tonic, &label, walk.notes));
            }
            Ok(text)
        }
        OutputFormat::Yaml => render_yaml(tonic, scales, walk),
        OutputFormat::Json => render_json(tonic, scales, walk),
    }
}
