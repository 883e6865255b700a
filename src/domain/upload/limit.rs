//! Upload size limit value object

use std::fmt;

/// Default maximum upload size in megabytes
pub const DEFAULT_UPLOAD_LIMIT_MB: f64 = 25.0;

/// Bytes per megabyte used for every size calculation
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Maximum accepted audio upload, expressed in megabytes.
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadLimit {
    megabytes: f64,
}

impl UploadLimit {
    /// Create a limit from megabytes, falling back to the default
    /// when the value is not a positive finite number.
    pub fn from_megabytes(megabytes: f64) -> Self {
        if megabytes.is_finite() && megabytes > 0.0 {
            Self { megabytes }
        } else {
            Self::default()
        }
    }

    /// Resolve an optional override, as read from configuration
    pub fn resolve(megabytes: Option<f64>) -> Self {
        megabytes.map(Self::from_megabytes).unwrap_or_default()
    }

    /// Limit in megabytes
    pub fn megabytes(&self) -> f64 {
        self.megabytes
    }

    /// Limit in bytes (fractional bytes are truncated)
    pub fn bytes(&self) -> u64 {
        (self.megabytes * BYTES_PER_MB as f64) as u64
    }

    /// Whether `size` bytes goes past the limit
    pub fn is_exceeded_by(&self, size: u64) -> bool {
        size > self.bytes()
    }
}

impl Default for UploadLimit {
    fn default() -> Self {
        Self {
            megabytes: DEFAULT_UPLOAD_LIMIT_MB,
        }
    }
}

impl fmt::Display for UploadLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MB", self.megabytes)
    }
}
