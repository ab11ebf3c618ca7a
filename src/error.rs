//! Error types for encounter building, party parsing, import and map generation.

use std::path::PathBuf;

/// A difficulty target could not be understood.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TargetError {
    /// The text contains none of `easy`, `medium`, `hard` or `deadly`.
    #[error("unknown target '{0}' (expected easy, medium, hard, deadly, '1.2x hard' or an xp value)")]
    UnknownLabel(String),

    /// A label was found but the text around it is not a number.
    #[error("invalid scale factor '{factor}' in target '{target}'")]
    InvalidFactor { target: String, factor: String },
}

/// A party description could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("invalid party token '{0}' (expected a level like '5' or 'NxL' like '4x5')")]
    InvalidToken(String),
}

/// Errors returned before the combination search begins.
///
/// Once the pool has been checked the search always produces an encounter,
/// so nothing here can come out of the sampling loop itself.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EncounterError {
    #[error("invalid build option: {0}")]
    InvalidOption(String),

    #[error("monster pool is empty after filtering")]
    EmptyPool,
}

/// A challenge rating string was not a non-negative number or fraction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid challenge rating '{0}'")]
pub struct ChallengeRatingError(pub String);

/// Bulk import failed. The pool being extended is never touched.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv input has no header row")]
    MissingHeader,

    #[error("csv header is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: {message}")]
    Row { line: usize, message: String },

    #[error("line {line}: {source}")]
    ChallengeRating {
        line: usize,
        #[source]
        source: ChallengeRatingError,
    },
}

/// Lair map options that cannot produce a map.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("invalid map options: {0}")]
    InvalidOptions(String),
}

/// An options file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read options file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
