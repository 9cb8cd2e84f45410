//! # Interval Steps
//!
//! The three legal moves on the chromatic circle and the validation policy for
//! interval pattern strings.
//!
//! | Char | Step | Semitones |
//! |------|-----------|---|
//! | `m`  | minor     | 1 |
//! | `M`  | major     | 2 |
//! | `A`  | augmented | 3 |
//!
//! ## Validation Policy
//! [`IntervalPolicy::Lenient`] (the default) accepts a pattern as long as *any*
//! character is a recognized step; the others are skipped during the walk, so
//! `"xyzM"` is a one-step pattern. [`IntervalPolicy::Strict`] rejects a pattern
//! containing *any* unrecognized character.

use serde::Serialize;

use crate::error::ScaleError;

/// One step of an interval pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Step {
    Minor,     // m
    Major,     // M
    Augmented, // A
}

impl Step {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(Step::Minor),
            'M' => Some(Step::Major),
            'A' => Some(Step::Augmented),
            _ => None,
        }
    }

    pub const fn semitones(self) -> usize {
        match self {
            Step::Minor => 1,
            Step::Major => 2,
            Step::Augmented => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Step::Minor => 'm',
            Step::Major => 'M',
            Step::Augmented => 'A',
        }
    }
}

/// How strictly interval pattern strings are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalPolicy {
    /// At least one recognized step; other characters are skipped
    #[default]
    Lenient,
    /// Every character must be a recognized step
    Strict,
}

impl IntervalPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "lenient" => Some(IntervalPolicy::Lenient),
            "strict" => Some(IntervalPolicy::Strict),
            _ => None,
        }
    }
}

/// Validate `pattern` with the lenient policy.
///
/// # Example
/// ```
/// use modal_scales::{validate_intervals, ScaleError};
///
/// assert_eq!(validate_intervals("xyzM"), Ok("xyzM"));
/// assert!(matches!(validate_intervals("xyz"), Err(ScaleError::InvalidInterval(_))));
/// ```
pub fn validate_intervals(pattern: &str) -> Result<&str, ScaleError> {
    validate_intervals_with(pattern, IntervalPolicy::Lenient)
}

/// Validate `pattern` with an explicit policy.
pub fn validate_intervals_with(pattern: &str, policy: IntervalPolicy) -> Result<&str, ScaleError> {
    let valid = match policy {
        IntervalPolicy::Lenient => pattern.chars().any(|c| Step::from_char(c).is_some()),
        IntervalPolicy::Strict => {
            !pattern.is_empty() && pattern.chars().all(|c| Step::from_char(c).is_some())
        }
    };

    if valid {
        Ok(pattern)
    } else {
        Err(ScaleError::InvalidInterval(pattern.to_string()))
    }
}

/// Recognized steps of `pattern` in order, skipping everything else.
pub fn steps(pattern: &str) -> impl Iterator<Item = Step> + '_ {
    pattern.chars().filter_map(Step::from_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_semitones() {
        assert_eq!(Step::Minor.semitones(), 1);
        assert_eq!(Step::Major.semitones(), 2);
        assert_eq!(Step::Augmented.semitones(), 3);
    }

    #[test]
    fn test_step_chars() {
        for c in ['m', 'M', 'A'] {
            assert_eq!(Step::from_char(c).map(Step::as_char), Some(c));
        }
        assert_eq!(Step::from_char('a'), None);
        assert_eq!(Step::from_char('x'), None);
    }

    #[test]
    fn test_lenient_accepts_any_recognized_step() {
        assert_eq!(validate_intervals("MMmMMMm"), Ok("MMmMMMm"));
        assert_eq!(validate_intervals("xyzM"), Ok("xyzM"));
        assert!(matches!(validate_intervals("xyz"), Err(ScaleError::InvalidInterval(_))));
        assert!(matches!(validate_intervals(""), Err(ScaleError::InvalidInterval(_))));
    }

    #[test]
    fn test_strict_rejects_unrecognized_characters() {
        assert_eq!(
            validate_intervals_with("MMmMMMm", IntervalPolicy::Strict),
            Ok("MMmMMMm")
        );
        assert!(matches!(
            validate_intervals_with("xyzM", IntervalPolicy::Strict),
            Err(ScaleError::InvalidInterval(_))
        ));
        assert!(matches!(
            validate_intervals_with("M M", IntervalPolicy::Strict),
            Err(ScaleError::InvalidInterval(_))
        ));
        assert!(validate_intervals_with("", IntervalPolicy::Strict).is_err());
    }

    #[test]
    fn test_steps_skip_unknown_characters() {
        let parsed: Vec<_> = steps("M-x-A m").collect();
        assert_eq!(parsed, vec![Step::Major, Step::Augmented, Step::Minor]);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(IntervalPolicy::from_str("strict"), Some(IntervalPolicy::Strict));
        assert_eq!(IntervalPolicy::from_str(" lenient "), Some(IntervalPolicy::Lenient));
        assert_eq!(IntervalPolicy::from_str("loose"), None);
        assert_eq!(IntervalPolicy::default(), IntervalPolicy::Lenient);
    }
}
