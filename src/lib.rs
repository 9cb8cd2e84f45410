//! # Modal Scales
//!
//! Scales and representative chords for a tonic across 22 modes: Major, Minor
//! and 20 modes from Eastern Mediterranean modal practice.
//!
//! ## Modules
//! - `pitch` - the two chromatic spellings and the tonic membership tables
//! - `interval` - the `m`/`M`/`A` steps and interval pattern validation
//! - `mode` - the declarative table of 22 modes and their chord rules
//! - `scale` - the engine: chromatic rotation, interval walks, named modes
//! - `report` - text, YAML and JSON rendering
//! - `config` - YAML run configuration for the `scales` binary
//!
//! ## Example
//! ```rust
//! use modal_scales::{Mode, Scale};
//!
//! let scale = Scale::new("c")?;
//! let minor = scale.mode(Mode::Minor);
//! assert_eq!(minor.notes, vec!["C", "D", "Eb", "F", "G", "Ab", "Bb", "C"]);
//! assert_eq!(minor.chord_labels(), "Cm, G, Fm, Ab");
//! # Ok::<(), modal_scales::ScaleError>(())
//! ```

pub mod config;
pub mod error;
pub mod interval;
pub mod mode;
pub mod pitch;
pub mod report;
pub mod scale;

pub use config::Config;
pub use error::ScaleError;
pub use interval::{validate_intervals, validate_intervals_with, IntervalPolicy, Step};
pub use mode::{ChordTone, Mode, ModeDefinition, Quality, MODES};
pub use pitch::{resolve_spelling, tonic_index, validate_tonic, Convention, Spelling, Tonic};
pub use report::{render, OutputFormat, Walk};
pub use scale::{Chord, ModeScale, Scale, ScaleReport};

/// Build every mode for a tonic spelling in one call.
pub fn scale_all(tonic: &str) -> Result<ScaleReport, ScaleError> {
    Ok(Scale::new(tonic)?.scale_all())
}

/// Build one mode, looked up by display name, for a tonic spelling.
///
/// # Example
/// ```rust
/// let ousak = modal_scales::generate("D", "ousak")?;
/// assert_eq!(ousak.chord_labels(), "Dm, D#, F, Gm, A#, Cm");
/// # Ok::<(), modal_scales::ScaleError>(())
/// ```
pub fn generate(tonic: &str, mode: &str) -> Result<ModeScale, ScaleError> {
    let mode = Mode::from_name(mode)?;
    Ok(Scale::new(tonic)?.mode(mode))
}

/// Generate the report described by a run configuration.
///
/// # Example
/// ```rust
/// use modal_scales::{run, Config};
///
/// let config = Config::from_yaml("tonic: C\nmodes: [Major]\nintervals: MMA")?;
/// let output = run(&config)?;
/// assert!(output.contains("Scale: C D E F G A B C"));
/// assert!(output.ends_with("C Intervals MMA: C D E G\n"));
/// # Ok::<(), modal_scales::ScaleError>(())
/// ```
pub fn run(config: &Config) -> Result<String, ScaleError> {
    let scale = Scale::from_tonic(config.tonic)?;
    let scales: Vec<ModeScale> = config.modes.iter().map(|mode| scale.mode(*mode)).collect();

    let walked = config
        .intervals
        .as_deref()
        .map(|pattern| {
            scale
                .interval_with(pattern, config.interval_policy)
                .map(|notes| (pattern, notes))
        })
        .transpose()?;
    let walk = walked
        .as_ref()
        .map(|(pattern, notes)| Walk { pattern, notes });

    render(&config.tonic, &scales, walk, config.format)
}
