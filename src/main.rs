use std::env;
use std::fs;
use std::process;

use modal_scales::{report, Config, Convention, IntervalPolicy, Mode, OutputFormat, Scale, Tonic};

const USAGE: &str = "Usage: scales <tonic> [mode] [--format text|yaml|json] [--intervals PATTERN] [--strict] [--minor]
       scales <tonic> --chromatic
       scales --config <run.yaml>";

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        usage_exit();
    }

    let mut positional: Vec<&String> = Vec::new();
    let mut format: Option<&String> = None;
    let mut intervals: Option<&String> = None;
    let mut config_path: Option<&String> = None;
    let mut strict = false;
    let mut minor = false;
    let mut chromatic = false;

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" => format = Some(iter.next().unwrap_or_else(|| usage_exit())),
            "--intervals" => intervals = Some(iter.next().unwrap_or_else(|| usage_exit())),
            "--config" => config_path = Some(iter.next().unwrap_or_else(|| usage_exit())),
            "--strict" => strict = true,
            "--minor" => minor = true,
            "--chromatic" => chromatic = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            flag if flag.starts_with("--") => {
                eprintln!("Unknown option '{}'", flag);
                usage_exit();
            }
            _ => positional.push(arg),
        }
    }

    let flags = Flags {
        positional: positional.len(),
        mode: positional.len() > 1,
        format: format.is_some(),
        intervals: intervals.is_some(),
        config: config_path.is_some(),
        strict,
        minor,
        chromatic,
    };
    if let Err(message) = check_flags(&flags) {
        eprintln!("{}", message);
        usage_exit();
    }

    // Build the run configuration, from file or from arguments
    let config = match config_path {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path, e);
                    process::exit(1);
                }
            };
            Config::from_yaml(&content)
        }
        None => config_from_args(&positional, format, intervals, strict, minor),
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if chromatic {
        match Scale::from_tonic(config.tonic) {
            Ok(scale) => print!("{}", report::render_notes(&config.tonic, "Chromatic", &scale.chromatic())),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    match modal_scales::run(&config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Which options were given on the command line
#[derive(Debug, Default)]
struct Flags {
    positional: usize,
    mode: bool,
    format: bool,
    intervals: bool,
    config: bool,
    strict: bool,
    minor: bool,
    chromatic: bool,
}

/// Reject option combinations where one option would be ignored.
fn check_flags(flags: &Flags) -> Result<(), String> {
    if flags.config {
        if flags.positional > 0 {
            return Err("--config does not take a tonic or mode argument".to_string());
        }
        if flags.format || flags.intervals || flags.strict || flags.minor || flags.chromatic {
            return Err("--config cannot be combined with other options".to_string());
        }
    }
    if flags.chromatic && (flags.mode || flags.format || flags.intervals || flags.strict) {
        return Err("--chromatic takes only a tonic (and --minor)".to_string());
    }
    Ok(())
}

fn config_from_args(
    positional: &[&String],
    format: Option<&String>,
    intervals: Option<&String>,
    strict: bool,
    minor: bool,
) -> Result<Config, modal_scales::ScaleError> {
    let (tonic, mode) = match positional {
        [tonic] => (tonic, None),
        [tonic, mode] => (tonic, Some(mode)),
        _ => usage_exit(),
    };

    let tonic = if minor {
        Tonic::new(tonic, Convention::Minor)?
    } else {
        Tonic::parse(tonic)?
    };

    let mut config = Config::new(tonic);

    if let Some(mode) = mode {
        config.modes = vec![Mode::from_name(mode)?];
    } else if intervals.is_some() {
        // a bare interval walk does not need the full mode report
        config.modes.clear();
    }

    if let Some(format) = format {
        config.format = OutputFormat::from_str(format).ok_or_else(|| {
            modal_scales::ScaleError::Config(format!("Invalid format: {}", format))
        })?;
    }

    if strict {
        config.interval_policy = IntervalPolicy::Strict;
    }
    config.intervals = intervals.cloned();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_positional_args() {
        let flags = Flags {
            config: true,
            positional: 2,
            mode: true,
            ..Flags::default()
        };
        assert!(check_flags(&flags).is_err());
    }

    #[test]
    fn test_config_rejects_other_options() {
        for flags in [
            Flags { config: true, format: true, ..Flags::default() },
            Flags { config: true, intervals: true, ..Flags::default() },
            Flags { config: true, strict: true, ..Flags::default() },
            Flags { config: true, minor: true, ..Flags::default() },
            Flags { config: true, chromatic: true, ..Flags::default() },
        ] {
            assert!(check_flags(&flags).is_err(), "{:?}", flags);
        }
        assert_eq!(check_flags(&Flags { config: true, ..Flags::default() }), Ok(()));
    }

    #[test]
    fn test_chromatic_rejects_ignored_options() {
        let chromatic = |flags: Flags| Flags { chromatic: true, positional: 1, ..flags };
        assert!(check_flags(&chromatic(Flags { intervals: true, ..Flags::default() })).is_err());
        assert!(check_flags(&chromatic(Flags { positional: 2, mode: true, ..Flags::default() })).is_err());
        assert!(check_flags(&chromatic(Flags { format: true, ..Flags::default() })).is_err());
        assert!(check_flags(&chromatic(Flags { strict: true, ..Flags::default() })).is_err());
        assert_eq!(check_flags(&chromatic(Flags { minor: true, ..Flags::default() })), Ok(()));
    }

    #[test]
    fn test_plain_runs_are_accepted() {
        let flags = Flags {
            positional: 2,
            mode: true,
            format: true,
            intervals: true,
            strict: true,
            minor: true,
            ..Flags::default()
        };
        assert_eq!(check_flags(&flags), Ok(()));
    }
}
