//! Precision and tolerance values shared by the exact vector crates.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates avoid scattering literals.

use std::fmt;

// =============================================================================
// TOLERANCE CONSTANTS
// =============================================================================

/// Default tolerance for magnitude-based zero tests and orthogonality checks.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TOLERANCE;
/// let dot: f64 = 5e-11;
/// assert!(dot.abs() < DEFAULT_TOLERANCE);
/// ```
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Angular tolerance in radians used when deciding whether two vectors are
/// parallel (angle of 0 or pi).
///
/// The angle goes through `f64` square root and arc-cosine, and `acos` near
/// `±1` amplifies the last-bit error of its argument to roughly `1e-8` rad.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_ANGLE_TOLERANCE;
/// let angle: f64 = 2.1e-8;
/// assert!(angle < PARALLEL_ANGLE_TOLERANCE);
/// ```
pub const PARALLEL_ANGLE_TOLERANCE: f64 = 1e-6;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Significant digits kept by the high precision preset (the default).
///
/// # Examples
/// ```
/// use config::constants::HIGH_PRECISION_DIGITS;
/// assert!(HIGH_PRECISION_DIGITS > 17);
/// ```
pub const HIGH_PRECISION_DIGITS: u64 = 30;

/// Significant digits kept by the presentation preset.
///
/// # Examples
/// ```
/// use config::constants::PRESENTATION_DIGITS;
/// assert_eq!(PRESENTATION_DIGITS, 4);
/// ```
pub const PRESENTATION_DIGITS: u64 = 4;

/// Upper bound accepted by [`PrecisionConfig::new`].
///
/// # Examples
/// ```
/// use config::constants::{MAX_SIGNIFICANT_DIGITS, HIGH_PRECISION_DIGITS};
/// assert!(MAX_SIGNIFICANT_DIGITS >= HIGH_PRECISION_DIGITS);
/// ```
pub const MAX_SIGNIFICANT_DIGITS: u64 = 1000;

/// Rounding applied when an arithmetic result exceeds the configured
/// significant digits.
///
/// # Examples
/// ```
/// use config::constants::Rounding;
/// assert_eq!(Rounding::default(), Rounding::HalfEven);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round to nearest, ties to the even neighbour.
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::HalfEven => f.write_str("half-even"),
            Rounding::HalfUp => f.write_str("half-up"),
        }
    }
}

/// Immutable description of the decimal precision used for vector
/// arithmetic.
///
/// # Examples
/// ```
/// use config::constants::PrecisionConfig;
/// let config = PrecisionConfig::default();
/// assert_eq!(config, PrecisionConfig::high_precision());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrecisionConfig {
    /// Number of significant digits kept after every arithmetic operation.
    pub significant_digits: u64,
    /// Rounding mode for digits beyond `significant_digits`.
    pub rounding: Rounding,
}

impl PrecisionConfig {
    /// Builds a configuration, rejecting digit counts outside
    /// `1..=MAX_SIGNIFICANT_DIGITS`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{PrecisionConfig, Rounding};
    /// let cfg = PrecisionConfig::new(12, Rounding::HalfUp).expect("valid config");
    /// assert_eq!(cfg.significant_digits, 12);
    /// assert!(PrecisionConfig::new(0, Rounding::HalfUp).is_err());
    /// ```
    pub fn new(significant_digits: u64, rounding: Rounding) -> Result<Self, ConfigError> {
        if significant_digits == 0 || significant_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(ConfigError::InvalidPrecision(significant_digits));
        }
        Ok(Self {
            significant_digits,
            rounding,
        })
    }

    /// General purpose preset: 30 significant digits, half-even rounding.
    pub const fn high_precision() -> Self {
        Self {
            significant_digits: HIGH_PRECISION_DIGITS,
            rounding: Rounding::HalfEven,
        }
    }

    /// Coarse preset for display-oriented results: 4 significant digits,
    /// half-up rounding.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{PrecisionConfig, Rounding};
    /// let cfg = PrecisionConfig::presentation();
    /// assert_eq!((cfg.significant_digits, cfg.rounding), (4, Rounding::HalfUp));
    /// ```
    pub const fn presentation() -> Self {
        Self {
            significant_digits: PRESENTATION_DIGITS,
            rounding: Rounding::HalfUp,
        }
    }
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self::high_precision()
    }
}

impl fmt::Display for PrecisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits, {}", self.significant_digits, self.rounding)
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the significant digit count is zero or above the limit.
    InvalidPrecision(u64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision(value) => {
                write!(
                    f,
                    "significant digits must be within 1..={MAX_SIGNIFICANT_DIGITS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
