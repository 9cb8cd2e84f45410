//! Integration tests for the scale generator
//!
//! Exercises the public API end to end: tonic validation, walks, named modes,
//! the all-modes report and configuration-driven runs.

use modal_scales::pitch::{FLAT_PITCHES, FLAT_TONES, SHARP_PITCHES, SHARP_TONES};
use modal_scales::{
    generate, run, scale_all, validate_intervals, validate_tonic, Config, Convention, Mode,
    OutputFormat, Scale, ScaleError, Spelling, Tonic,
};
use pretty_assertions::assert_eq;

#[test]
fn test_c_major_scale_and_chords() {
    let scale = Scale::new("C").unwrap();
    let (notes, chords) = {
        let major = scale.major();
        (major.notes.clone(), major.chord_labels())
    };
    assert_eq!(notes, vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
    assert_eq!(chords, "C, G, F, D");
}

#[test]
fn test_lowercase_a_minor() {
    let minor = Scale::new("a").unwrap().minor();
    assert_eq!(minor.notes[0], FLAT_PITCHES[0]);
    assert_eq!(minor.notes[0], SHARP_PITCHES[0]);
    assert!(minor.chord_labels().starts_with("Am"));
}

#[test]
fn test_validation_boundaries() {
    assert!(matches!(validate_tonic("H"), Err(ScaleError::InvalidTonic(_))));
    assert!(matches!(validate_intervals("xyz"), Err(ScaleError::InvalidInterval(_))));
    assert_eq!(validate_intervals("xyzM"), Ok("xyzM"));
}

#[test]
fn test_invalid_tonic_fails_before_any_scale() {
    assert_eq!(Scale::new("H"), Err(ScaleError::InvalidTonic("H".to_string())));
    assert!(matches!(generate("C#", "Major"), Err(ScaleError::InvalidTonic(_))));
}

#[test]
fn test_scale_all_matches_named_methods() {
    let report = scale_all("C").unwrap();
    let scale = Scale::new("C").unwrap();

    let names: Vec<_> = report.names().collect();
    assert_eq!(
        names,
        vec![
            "Major", "Minor", "Ousak", "Xitzaz", "Armoniko", "Sampax", "Xitzaskiar", "Niavent",
            "Kartsigiar", "Peiraiotikos", "Poimenikos", "Segiax", "Tampaxaniotikos", "Xouzam",
            "Xouseini", "Rast", "Kiournti", "Lokrikos", "Ludikos", "Mixoludikos", "Ouzal",
            "Souzinak",
        ]
    );

    let direct = vec![
        scale.major(),
        scale.minor(),
        scale.ousak(),
        scale.xitzaz(),
        scale.armoniko(),
        scale.sampax(),
        scale.xitzaskiar(),
        scale.niavent(),
        scale.kartsigiar(),
        scale.peiraiotikos(),
        scale.poimenikos(),
        scale.segiax(),
        scale.tampaxaniotikos(),
        scale.xouzam(),
        scale.xouseini(),
        scale.rast(),
        scale.kiournti(),
        scale.lokrikos(),
        scale.ludikos(),
        scale.mixoludikos(),
        scale.ouzal(),
        scale.souzinak(),
    ];
    assert_eq!(report.modes, direct);
}

#[test]
fn test_chord_counts_do_not_depend_on_tonic() {
    let counts: Vec<usize> = Mode::ALL.iter().map(|m| m.definition().chords.len()).collect();
    assert_eq!(counts, vec![4, 4, 6, 4, 4, 4, 3, 3, 4, 3, 3, 1, 3, 2, 6, 4, 6, 5, 3, 6, 3, 4]);

    for tone in SHARP_TONES.iter().chain(FLAT_TONES.iter()) {
        let Ok(scale) = Scale::new(tone) else {
            continue; // Cb has no spelling entry
        };
        for (mode, count) in Mode::ALL.iter().zip(counts.iter()) {
            assert_eq!(scale.mode(*mode).chords.len(), *count);
        }
    }
}

#[test]
fn test_spelling_is_never_mixed() {
    for tone in SHARP_TONES.iter().chain(FLAT_TONES.iter()) {
        let Ok(scale) = Scale::new(tone) else {
            continue;
        };
        let table = scale.spelling().pitches();
        for mode in scale.scale_all().modes {
            for note in &mode.notes {
                assert!(table.contains(note), "{} {} produced {}", tone, mode.mode, note);
            }
            for chord in &mode.chords {
                assert!(table.contains(&chord.root));
            }
        }
    }
}

#[test]
fn test_known_scales_across_spellings() {
    assert_eq!(
        generate("Bb", "Major").unwrap().notes,
        vec!["Bb", "C", "D", "Eb", "F", "G", "A", "Bb"]
    );
    assert_eq!(
        generate("f#", "Minor").unwrap().notes,
        vec!["F#", "G#", "A", "B", "C#", "D", "E", "F#"]
    );
    let armoniko = generate("d", "Armoniko").unwrap();
    assert_eq!(armoniko.notes, vec!["D", "E", "F", "G", "A", "Bb", "Db", "D"]);
    assert_eq!(armoniko.chord_labels(), "Dm, Gm, A, Bb");
}

#[test]
fn test_explicit_convention_matches_case() {
    let explicit = Tonic::new("G", Convention::Minor).unwrap();
    let parsed = Tonic::parse("g").unwrap();
    assert_eq!(explicit, parsed);
    assert_eq!(explicit.spelling(), Spelling::Flat);
    assert_eq!(
        Scale::from_tonic(explicit).unwrap().minor(),
        Scale::new("g").unwrap().minor()
    );
}

#[test]
fn test_config_driven_run() {
    let config = Config::from_yaml(
        r#"
tonic: E
modes: [Segiax]
"#,
    )
    .unwrap();
    let output = run(&config).unwrap();
    assert!(output.contains("Scale Name: Segiax"));
    assert!(output.contains("Scale: E G G# A B C D# E"));
    assert!(output.contains("Chords: E\n"));
}

#[test]
fn test_config_driven_yaml_run() {
    let mut config = Config::new(Tonic::parse("D").unwrap());
    config.modes = vec![Mode::Ousak];
    config.format = OutputFormat::Yaml;
    let output = run(&config).unwrap();
    assert!(output.contains("name: Ousak"));
    assert!(output.contains("chords: Dm, D#, F, Gm, A#, Cm"));
}

#[test]
fn test_config_strict_intervals_reject_noise() {
    let config = Config::from_yaml("tonic: C\nintervals: xyzM\ninterval-policy: strict").unwrap();
    assert!(matches!(run(&config), Err(ScaleError::InvalidInterval(_))));

    let lenient = Config::from_yaml("tonic: C\nintervals: xyzM").unwrap();
    assert!(run(&lenient).unwrap().ends_with("C Intervals xyzM: C D\n"));
}

#[test]
fn test_explicit_convention_respells_enharmonics() {
    let tonic = Tonic::new("Db", Convention::Minor).unwrap();
    assert_eq!(tonic.as_str(), "c#");
    assert_eq!(
        Scale::from_tonic(tonic).unwrap().minor().notes,
        vec!["C#", "D#", "E", "F#", "G#", "A", "B", "C#"]
    );
}
