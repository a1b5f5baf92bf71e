//! Exact conversion of binary floats into decimals

use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::{StatsError, StatsResult};

/// Scale tried first when searching for an exact decimal expansion
const INITIAL_SCALE: u32 = 7;

/// Largest scale a `Decimal` can hold
const MAX_SCALE: u32 = 28;

/// Largest power of two usable as a `Decimal` denominator (96-bit mantissa)
const MAX_DENOMINATOR_BITS: i32 = 95;

/// Convert a float to a decimal, preserving the value the float encodes.
///
/// The float is decomposed into `m / 2^k` and divided out in decimal
/// arithmetic. Scales are tried from 7 upwards, doubling each time, until the
/// rounded quotient multiplied back by the denominator reproduces the
/// numerator. Binary fractions whose exact expansion needs more than 28
/// decimal places (e.g. `0.1`) resolve to the nearest 28-place decimal, which
/// still converts back to the identical float.
///
/// Fails with [`StatsError::Conversion`] for NaN, infinities and magnitudes
/// outside the decimal range.
pub fn to_exact_decimal(value: f64) -> StatsResult<Decimal> {
    if !value.is_finite() {
        return Err(StatsError::Conversion(value.to_string()));
    }
    if value == 0.0 {
        return Ok(Decimal::ZERO);
    }

    let (mantissa, exponent) = binary_ratio(value);

    if exponent >= 0 {
        let integer = 1i128
            .checked_shl(exponent as u32)
            .filter(|_| exponent < 127)
            .and_then(|power| (mantissa as i128).checked_mul(power))
            .ok_or_else(|| StatsError::Conversion(value.to_string()))?;
        return Decimal::try_from_i128_with_scale(integer, 0)
            .map_err(|_| StatsError::Conversion(value.to_string()));
    }

    if -exponent > MAX_DENOMINATOR_BITS {
        debug!(value, "denominator exceeds decimal range, falling back to retained conversion");
        return Decimal::from_f64_retain(value)
            .ok_or_else(|| StatsError::Conversion(value.to_string()));
    }

    let numerator = Decimal::from(mantissa);
    let denominator = Decimal::try_from_i128_with_scale(1i128 << (-exponent), 0)
        .map_err(|_| StatsError::Conversion(value.to_string()))?;
    let quotient = numerator
        .checked_div(denominator)
        .ok_or_else(|| StatsError::Conversion(value.to_string()))?;

    let mut scale = INITIAL_SCALE;
    loop {
        let candidate = quotient.round_dp(scale);
        if candidate.checked_mul(denominator) == Some(numerator) {
            return Ok(candidate);
        }
        if scale >= MAX_SCALE {
            debug!(value, %candidate, "no exact decimal expansion within 28 places");
            return Ok(candidate);
        }
        scale = (scale * 2).min(MAX_SCALE);
    }
}

/// Split a finite, non-zero float into `mantissa * 2^exponent` with the
/// mantissa reduced to be odd whenever the exponent is negative.
fn binary_ratio(value: f64) -> (i64, i32) {
    let bits = value.to_bits();
    let sign: i64 = if bits >> 63 == 0 { 1 } else { -1 };
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let mut mantissa = if biased == 0 {
        (bits & 0x000f_ffff_ffff_ffff) << 1
    } else {
        (bits & 0x000f_ffff_ffff_ffff) | 0x0010_0000_0000_0000
    };
    let mut exponent = biased - 1075;

    while mantissa & 1 == 0 && exponent < 0 {
        mantissa >>= 1;
        exponent += 1;
    }

    (sign * mantissa as i64, exponent)
}
