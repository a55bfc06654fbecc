//! Shared types used across SQUAREPAD.
//! Includes the near-square `SquarePolicy` and the aggregate `BatchOutcome`.
use serde::{Deserialize, Serialize};

/// What to do with an image whose width/height difference is within the
/// square threshold.
///
/// Two variants of the reference behavior exist and are mutually exclusive:
/// `Stretch` resizes the shorter dimension up so both equal the longer side
/// (a slight aspect-ratio change), `Keep` writes the image through with its
/// geometry untouched. `Stretch` is the default.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum SquarePolicy {
    Stretch,
    Keep,
}

impl std::fmt::Display for SquarePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SquarePolicy::Stretch => write!(f, "Stretch"),
            SquarePolicy::Keep => write!(f, "Keep"),
        }
    }
}

/// Aggregate classification of a finished batch. Frontends render the three
/// cases differently.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BatchOutcome {
    AllSucceeded,
    Partial,
    AllFailed,
}

impl std::fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchOutcome::AllSucceeded => write!(f, "AllSucceeded"),
            BatchOutcome::Partial => write!(f, "Partial"),
            BatchOutcome::AllFailed => write!(f, "AllFailed"),
        }
    }
}
