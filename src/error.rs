//! # Error Types
//!
//! All errors raised by the scale engine, the mode table lookup and the run
//! configuration.
//!
//! ## Error Types
//! - `InvalidTonic` - tonic spelling not in either accepted set
//! - `InvalidInterval` - interval pattern rejected by the active policy
//! - `Inconsistent` - a tonic accepted by membership has no entry in its spelling table
//! - `UnknownMode` - mode name lookup failed
//! - `Config` - invalid YAML run configuration
//! - `Output` - a report could not be serialized
//!
//! ## Usage
//! ```rust
//! use modal_scales::{Scale, ScaleError};
//!
//! match Scale::new("H") {
//!     Ok(scale) => println!("{:?}", scale.major().notes),
//!     Err(ScaleError::InvalidTonic(tonic)) => eprintln!("No such tonic: {}", tonic),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// Tonic spelling is not a member of the sharp or flat tonic sets.
    ///
    /// Case is significant: `C` and `c` are different spellings.
    ///
    /// # Example
    /// ```
    /// # use modal_scales::ScaleError;
    /// let err = ScaleError::InvalidTonic("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid tonic 'H'");
    /// ```
    #[error("Invalid tonic '{0}'")]
    InvalidTonic(String),

    /// Interval pattern rejected by the active interval policy.
    ///
    /// # Example
    /// ```
    /// # use modal_scales::ScaleError;
    /// let err = ScaleError::InvalidInterval("xyz".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid interval pattern 'xyz': only intervals 'm', 'M', and 'A' are supported"
    /// );
    /// ```
    #[error("Invalid interval pattern '{0}': only intervals 'm', 'M', and 'A' are supported")]
    InvalidInterval(String),

    /// The pitch tables disagree with the tonic membership tables.
    ///
    /// This is not a user error. It means a tonic was accepted but its
    /// capitalized form does not appear in the chosen spelling sequence.
    ///
    /// # Example
    /// ```
    /// # use modal_scales::ScaleError;
    /// let err = ScaleError::Inconsistent {
    ///     tonic: "Cb".to_string(),
    ///     spelling: "flat",
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Internal consistency error: tonic 'Cb' is accepted but missing from the flat pitch table"
    /// );
    /// ```
    #[error("Internal consistency error: tonic '{tonic}' is accepted but missing from the {spelling} pitch table")]
    Inconsistent {
        tonic: String,
        spelling: &'static str,
    },

    #[error("Unknown mode '{0}'")]
    UnknownMode(String),

    /// Invalid run configuration.
    ///
    /// # Example
    /// ```
    /// # use modal_scales::ScaleError;
    /// let err = ScaleError::Config("tonic is required".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: tonic is required");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to write report: {0}")]
    Output(String),
}
