//! # Config Crate
//!
//! Centralized configuration constants for exact vector arithmetic.
//! Tolerances and precision presets are defined here so the numeric layer
//! and its callers agree on a single set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PrecisionConfig, Rounding, DEFAULT_TOLERANCE};
//!
//! // Tolerance-based zero test on a magnitude
//! let magnitude: f64 = 1e-11;
//! assert!(magnitude < DEFAULT_TOLERANCE);
//!
//! // Precision presets
//! let precision = PrecisionConfig::default();
//! assert_eq!(precision.significant_digits, 30);
//! assert_eq!(PrecisionConfig::presentation().rounding, Rounding::HalfUp);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Custom precision goes through [`constants::PrecisionConfig::new`]
//! - **Dependency Free**: The crate only uses `std`

pub mod constants;
