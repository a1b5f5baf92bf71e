//! Numeric primitives shared by every statistic
//!
//! Formulas are written once against the [`Numeric`] trait and instantiated
//! either with `f64` ([`Precision::Standard`]) or with
//! [`rust_decimal::Decimal`] ([`Precision::High`]). The decimal path trades
//! speed (roughly two orders of magnitude slower) for 28 significant digits
//! and exact decimal arithmetic. Arithmetic goes through the fallible
//! `try_*` methods: a decimal result whose magnitude leaves the decimal range
//! (about 7.9e28) is reported as [`StatsError::NumericOverflow`], and an input
//! outside it as [`StatsError::Conversion`].

mod aggregate;
mod decimal;

pub use aggregate::{
    mean, sample_standard_deviation, sample_variance, standard_deviation, sum_squares, variance,
};
pub(crate) use aggregate::{mean_in, standard_deviation_in, sum_in, to_numeric, variance_in};
pub use decimal::to_exact_decimal;

use std::fmt;
use std::ops::Neg;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::errors::{StatsError, StatsResult};
use crate::types::Precision;

/// Below this exponent `exp` is treated as zero in decimal arithmetic
/// (e^-64 is already under the smallest representable step of 1e-28).
const DECIMAL_EXP_FLOOR: i64 = -64;

/// Arithmetic needed by the statistical formulas, implemented for native
/// floating point and for arbitrary-precision decimals.
pub trait Numeric: Copy + PartialOrd + fmt::Debug + fmt::Display + Neg<Output = Self> {
    /// Precision mode this type implements
    const PRECISION: Precision;

    fn zero() -> Self;
    fn one() -> Self;

    /// Convert a binary float without losing information
    fn from_f64(value: f64) -> StatsResult<Self>;

    fn from_usize(value: usize) -> Self;

    /// Parse a numeric constant written in plain decimal notation
    fn constant(literal: &'static str) -> StatsResult<Self>;

    fn to_f64(self) -> f64;

    fn try_add(self, rhs: Self) -> StatsResult<Self>;

    fn try_sub(self, rhs: Self) -> StatsResult<Self>;

    fn try_mul(self, rhs: Self) -> StatsResult<Self>;

    /// Division; decimals reject a zero divisor, floats follow IEEE 754
    fn try_div(self, rhs: Self) -> StatsResult<Self>;

    fn abs(self) -> Self;

    fn sqrt(self) -> StatsResult<Self>;

    fn ln(self) -> StatsResult<Self>;

    fn exp(self) -> StatsResult<Self>;

    /// Division that reports a zero divisor instead of panicking or
    /// producing an infinity
    fn checked_div(self, rhs: Self) -> Option<Self>;

    fn into_number(self) -> Number;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

impl Numeric for f64 {
    const PRECISION: Precision = Precision::Standard;

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> StatsResult<Self> {
        Ok(value)
    }

    fn from_usize(value: usize) -> Self {
        value as f64
    }

    fn constant(literal: &'static str) -> StatsResult<Self> {
        literal
            .parse::<f64>()
            .map_err(|_| StatsError::Conversion(literal.to_string()))
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn try_add(self, rhs: Self) -> StatsResult<Self> {
        Ok(self + rhs)
    }

    fn try_sub(self, rhs: Self) -> StatsResult<Self> {
        Ok(self - rhs)
    }

    fn try_mul(self, rhs: Self) -> StatsResult<Self> {
        Ok(self * rhs)
    }

    fn try_div(self, rhs: Self) -> StatsResult<Self> {
        Ok(self / rhs)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn sqrt(self) -> StatsResult<Self> {
        if self < 0.0 || self.is_nan() {
            return Err(StatsError::invalid("square root", "x", self));
        }
        Ok(f64::sqrt(self))
    }

    fn ln(self) -> StatsResult<Self> {
        if self <= 0.0 || self.is_nan() {
            return Err(StatsError::invalid("natural logarithm", "x", self));
        }
        Ok(f64::ln(self))
    }

    fn exp(self) -> StatsResult<Self> {
        Ok(f64::exp(self))
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs == 0.0 {
            None
        } else {
            Some(self / rhs)
        }
    }

    fn into_number(self) -> Number {
        Number::Float(self)
    }
}

impl Numeric for Decimal {
    const PRECISION: Precision = Precision::High;

    fn zero() -> Self {
        Decimal::ZERO
    }

    fn one() -> Self {
        Decimal::ONE
    }

    fn from_f64(value: f64) -> StatsResult<Self> {
        to_exact_decimal(value)
    }

    fn from_usize(value: usize) -> Self {
        Decimal::from(value)
    }

    fn constant(literal: &'static str) -> StatsResult<Self> {
        literal
            .parse::<Decimal>()
            .map_err(|_| StatsError::Conversion(literal.to_string()))
    }

    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn try_add(self, rhs: Self) -> StatsResult<Self> {
        self.checked_add(rhs)
            .ok_or(StatsError::NumericOverflow { operation: "addition" })
    }

    fn try_sub(self, rhs: Self) -> StatsResult<Self> {
        self.checked_sub(rhs)
            .ok_or(StatsError::NumericOverflow { operation: "subtraction" })
    }

    fn try_mul(self, rhs: Self) -> StatsResult<Self> {
        self.checked_mul(rhs)
            .ok_or(StatsError::NumericOverflow { operation: "multiplication" })
    }

    fn try_div(self, rhs: Self) -> StatsResult<Self> {
        if rhs.is_zero() {
            return Err(StatsError::invalid("decimal division", "divisor", 0.0));
        }
        self.checked_div(rhs)
            .ok_or(StatsError::NumericOverflow { operation: "division" })
    }

    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    fn sqrt(self) -> StatsResult<Self> {
        MathematicalOps::sqrt(&self)
            .ok_or_else(|| StatsError::invalid("square root", "x", self.to_f64()))
    }

    fn ln(self) -> StatsResult<Self> {
        if self <= Decimal::ZERO {
            return Err(StatsError::invalid("natural logarithm", "x", self.to_f64()));
        }
        self.checked_ln()
            .ok_or(StatsError::NumericOverflow { operation: "ln" })
    }

    fn exp(self) -> StatsResult<Self> {
        if self < Decimal::from(DECIMAL_EXP_FLOOR) {
            return Ok(Decimal::ZERO);
        }
        self.checked_exp()
            .ok_or(StatsError::NumericOverflow { operation: "exp" })
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Decimal::checked_div(self, rhs)
    }

    fn into_number(self) -> Number {
        Number::Decimal(self)
    }
}

/// A value produced in either precision mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Float(value) => value,
            Number::Decimal(value) => Numeric::to_f64(value),
        }
    }

    pub fn as_decimal(self) -> Option<Decimal> {
        match self {
            Number::Decimal(value) => Some(value),
            Number::Float(_) => None,
        }
    }

    pub fn precision(self) -> Precision {
        match self {
            Number::Float(_) => Precision::Standard,
            Number::Decimal(_) => Precision::High,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Float(value) => write!(f, "{}", value),
            Number::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}
