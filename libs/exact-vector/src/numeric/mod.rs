//! Exact numeric layer shared by every vector operation.
//!
//! [`NumericContext`] binds a validated [`PrecisionConfig`] to `BigDecimal`
//! arithmetic: every sum, product and quotient is rounded to the configured
//! significant digits. The module also owns the two places where values
//! cross into `f64` and back (square root and arc-cosine), and the
//! [`ToExact`] conversion used by constructors and scalars.

use std::num::NonZeroU64;
use std::str::FromStr;
use std::sync::OnceLock;

use bigdecimal::{BigDecimal, RoundingMode};
use config::constants::{PrecisionConfig, Rounding};
use tracing::{debug, trace};

use crate::error::{VectorError, VectorResult};

static GLOBAL_CONTEXT: OnceLock<NumericContext> = OnceLock::new();

/// Precision and rounding applied to vector arithmetic.
///
/// A context is either passed explicitly to
/// [`Vector::with_context`](crate::Vector::with_context) or taken from the
/// process-wide binding returned by [`NumericContext::global`]. The global
/// binding is write-once so results stay reproducible within a process.
///
/// # Examples
/// ```
/// use exact_vector::NumericContext;
/// use config::constants::PrecisionConfig;
///
/// let ctx = NumericContext::presentation();
/// assert_eq!(ctx.precision(), PrecisionConfig::presentation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericContext {
    precision: PrecisionConfig,
}

impl NumericContext {
    /// Creates a context from an explicit configuration.
    ///
    /// The configuration is re-validated because its fields are public.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::NumericContext;
    /// use config::constants::{PrecisionConfig, Rounding};
    ///
    /// let precision = PrecisionConfig { significant_digits: 0, rounding: Rounding::HalfUp };
    /// assert!(NumericContext::new(precision).is_err());
    /// ```
    pub fn new(precision: PrecisionConfig) -> VectorResult<Self> {
        let precision = PrecisionConfig::new(precision.significant_digits, precision.rounding)?;
        Ok(Self { precision })
    }

    /// 30 significant digits, half-even rounding.
    pub const fn high_precision() -> Self {
        Self {
            precision: PrecisionConfig::high_precision(),
        }
    }

    /// 4 significant digits, half-up rounding.
    pub const fn presentation() -> Self {
        Self {
            precision: PrecisionConfig::presentation(),
        }
    }

    /// Returns the process-wide context, binding the default on first use.
    pub fn global() -> Self {
        *GLOBAL_CONTEXT.get_or_init(|| {
            let context = Self::default();
            debug!(precision = %context.precision, "binding default numeric precision");
            context
        })
    }

    /// Binds the process-wide context.
    ///
    /// Installing the value already in effect is a no-op. Once the context
    /// has been bound, explicitly or by first use through
    /// [`NumericContext::global`], a different value is rejected with
    /// [`VectorError::PrecisionLocked`].
    ///
    /// # Examples
    /// ```
    /// use exact_vector::NumericContext;
    /// use config::constants::PrecisionConfig;
    ///
    /// let ctx = NumericContext::install(PrecisionConfig::high_precision()).unwrap();
    /// assert_eq!(ctx, NumericContext::global());
    /// ```
    pub fn install(precision: PrecisionConfig) -> VectorResult<Self> {
        let requested = Self::new(precision)?;
        let installed = *GLOBAL_CONTEXT.get_or_init(|| {
            debug!(precision = %requested.precision, "installing numeric precision");
            requested
        });
        if installed != requested {
            return Err(VectorError::PrecisionLocked {
                installed: installed.precision,
                requested: requested.precision,
            });
        }
        Ok(installed)
    }

    /// Configuration this context applies.
    pub fn precision(&self) -> PrecisionConfig {
        self.precision
    }

    /// Rounds `value` to the context's significant digits.
    ///
    /// Values that already fit are returned untouched, without padding.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use bigdecimal::BigDecimal;
    /// use exact_vector::NumericContext;
    ///
    /// let ctx = NumericContext::presentation();
    /// let rounded = ctx.round(BigDecimal::from_str("2.34567").unwrap());
    /// assert_eq!(rounded, BigDecimal::from_str("2.346").unwrap());
    /// ```
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        // PrecisionConfig::new guarantees at least one digit
        let Some(digits) = NonZeroU64::new(self.precision.significant_digits) else {
            return value;
        };
        if value.digits() <= digits.get() {
            return value;
        }
        value.with_precision_round(digits, self.rounding_mode())
    }

    pub(crate) fn add(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a + b)
    }

    pub(crate) fn sub(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a - b)
    }

    pub(crate) fn mul(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a * b)
    }

    /// Callers guarantee a non-zero divisor.
    pub(crate) fn div(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(a / b)
    }

    /// Sum of `a[i] * b[i]`, rounding after every product and addition.
    pub(crate) fn sum_of_products(&self, a: &[BigDecimal], b: &[BigDecimal]) -> BigDecimal {
        a.iter()
            .zip(b)
            .fold(BigDecimal::from(0), |acc, (x, y)| self.add(&acc, &self.mul(x, y)))
    }

    /// Converts an exact value to `f64` for the square-root and arc-cosine
    /// steps.
    pub(crate) fn to_f64(&self, value: &BigDecimal, operation: &'static str) -> VectorResult<f64> {
        // parsing the decimal text is correctly rounded
        match value.to_string().parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(float),
            _ => Err(VectorError::NonFinite { operation }),
        }
    }

    /// Converts an `f64` result back into the exact type, rounded to this
    /// context.
    pub(crate) fn from_f64(&self, value: f64, operation: &'static str) -> VectorResult<BigDecimal> {
        let exact = decimal_from_f64(value).ok_or(VectorError::NonFinite { operation })?;
        trace!(operation, float = value, "f64 result converted back to exact decimal");
        Ok(self.round(exact))
    }

    fn rounding_mode(&self) -> RoundingMode {
        match self.precision.rounding {
            Rounding::HalfEven => RoundingMode::HalfEven,
            Rounding::HalfUp => RoundingMode::HalfUp,
        }
    }
}

impl Default for NumericContext {
    fn default() -> Self {
        Self::high_precision()
    }
}

/// Shortest round-trip decimal text of a finite float, parsed exactly.
///
/// `7.887_f64` becomes exactly `7.887` instead of its binary expansion.
fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Conversion of coordinate and scalar inputs into the exact decimal type.
///
/// Conversion is exact: no rounding happens until the first arithmetic
/// operation.
///
/// # Examples
/// ```
/// use exact_vector::ToExact;
///
/// assert_eq!(3_i64.to_exact().unwrap(), "3".to_exact().unwrap());
/// assert!(f64::NAN.to_exact().is_err());
/// assert!("three".to_exact().is_err());
/// ```
pub trait ToExact {
    /// Returns the exact decimal value or `InvalidArgument`.
    fn to_exact(&self) -> VectorResult<BigDecimal>;
}

macro_rules! impl_to_exact_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToExact for $ty {
                fn to_exact(&self) -> VectorResult<BigDecimal> {
                    Ok(BigDecimal::from(*self))
                }
            }
        )*
    };
}

impl_to_exact_for_integers!(i8, i16, i32, i64, u8, u16, u32, u64);

impl ToExact for f64 {
    fn to_exact(&self) -> VectorResult<BigDecimal> {
        decimal_from_f64(*self).ok_or_else(|| {
            VectorError::InvalidArgument(format!(
                "coordinates must be convertible to exact decimals: {self} is not finite"
            ))
        })
    }
}

impl ToExact for f32 {
    fn to_exact(&self) -> VectorResult<BigDecimal> {
        if !self.is_finite() {
            return Err(VectorError::InvalidArgument(format!(
                "coordinates must be convertible to exact decimals: {self} is not finite"
            )));
        }
        // f32's own shortest text, so 0.1_f32 stays 0.1
        self.to_string().as_str().to_exact()
    }
}

impl ToExact for str {
    fn to_exact(&self) -> VectorResult<BigDecimal> {
        BigDecimal::from_str(self.trim()).map_err(|err| {
            VectorError::InvalidArgument(format!(
                "coordinates must be convertible to exact decimals: '{self}' ({err})"
            ))
        })
    }
}

impl ToExact for String {
    fn to_exact(&self) -> VectorResult<BigDecimal> {
        self.as_str().to_exact()
    }
}

impl ToExact for BigDecimal {
    fn to_exact(&self) -> VectorResult<BigDecimal> {
        Ok(self.clone())
    }
}

impl<T: ToExact + ?Sized> ToExact for &T {
    fn to_exact(&self) -> VectorResult<BigDecimal> {
        (**self).to_exact()
    }
}
