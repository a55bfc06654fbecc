use serde::{Deserialize, Serialize};

use crate::types::SquarePolicy;

/// Width/height difference (in pixels) above which an image is padded onto a
/// black square canvas instead of being handled by the near-square policy.
///
/// The reference behavior shipped with two conflicting values, 25 and 5; 25
/// is the default here and [`STRICT_THRESHOLD`] records the alternative.
pub const DEFAULT_THRESHOLD: u32 = 25;

/// The stricter threshold variant observed in the reference behavior.
pub const STRICT_THRESHOLD: u32 = 5;

/// Normalization parameters suitable for config files and GUI state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeParams {
    /// Pad when |width - height| exceeds this value (strict comparison)
    pub threshold: u32,
    /// What to do when the difference is within the threshold
    pub policy: SquarePolicy,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            policy: SquarePolicy::Stretch,
        }
    }
}
