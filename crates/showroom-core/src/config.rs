//! Upload widget configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the upload widget's simulated progress ramp.
///
/// All parameters have defaults matching the product's reference
/// cadence: a 100 ms tick adding 5 points per tick (2 s to reach
/// 100 %), followed by a 600 ms pause before the completion callback
/// fires.
///
/// # Invariants
///
/// `progress_step` must be at least 1 or the ramp never finishes.
/// Fields are currently public with no construction-time validation,
/// enforced at the call sites that build configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Milliseconds between simulated progress ticks.
    pub tick_interval_ms: u32,

    /// Progress points added per tick. The counter is clamped to
    /// exactly 100, so steps that do not divide 100 are fine.
    pub progress_step: u8,

    /// Milliseconds between reaching 100 % and invoking the
    /// completion callback.
    pub redirect_delay_ms: u32,

    /// File extensions (lowercase, without the dot) the dropzone and
    /// file picker accept.
    pub accepted_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            progress_step: 5,
            redirect_delay_ms: 600,
            accepted_extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
        }
    }
}

impl UploadConfig {
    /// Check whether a filename has an accepted extension
    /// (case-insensitive). Filenames without an extension are rejected.
    #[must_use]
    pub fn accepts(&self, filename: &str) -> bool {
        filename.rsplit_once('.').is_some_and(|(_, ext)| {
            self.accepted_extensions
                .iter()
                .any(|a| a.eq_ignore_ascii_case(ext))
        })
    }

    /// Number of ticks needed for the counter to reach 100.
    #[must_use]
    pub fn ticks_to_complete(&self) -> u32 {
        if self.progress_step == 0 {
            return 0;
        }
        100u32.div_ceil(u32::from(self.progress_step))
    }

    /// Wall-clock duration of the progress ramp in milliseconds.
    #[must_use]
    pub fn ramp_duration_ms(&self) -> u32 {
        self.ticks_to_complete() * self.tick_interval_ms
    }

    /// Wall-clock time from selection to the completion callback,
    /// excluding decode time (the ramp plus the redirect delay).
    #[must_use]
    pub fn completion_time_ms(&self) -> u32 {
        self.ramp_duration_ms() + self.redirect_delay_ms
    }

    /// `accept` attribute value for the file input
    /// (e.g. `".jpg,.jpeg,.png"`).
    #[must_use]
    pub fn accept_attr(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
