//! Significant-figure formatting for reported statistics

/// Threshold below which p-values are reported as "< 0.001"
const P_FLOOR: f64 = 0.001;

/// Significant figures used for p-values
const P_SIGNIFICANT_FIGURES: usize = 4;

fn power_of_ten(exponent: i32) -> f64 {
    10f64.powf(exponent as f64)
}

/// Format `value` with `precision` significant figures, JavaScript
/// `Number.prototype.toPrecision` style.
///
/// Uses scientific notation when the decimal exponent is below -2 or at
/// least `precision`. Zero formats as `"0."` followed by `precision - 1`
/// zeros.
///
/// ```
/// use statreport_core::format::to_precision;
/// assert_eq!(to_precision(0.04, 4), "0.04000");
/// assert_eq!(to_precision(0.0003, 4), "3.000e-4");
/// ```
pub fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("0.{}", "0".repeat(precision - 1));
    }

    let p = precision as i32;
    let mut out = String::new();
    let mut x = value;
    if x < 0.0 {
        out.push('-');
        x = -x;
    }

    let mut e = x.log10().trunc() as i32;
    let mut tens = power_of_ten(e - p + 1);
    let mut n = (x / tens).floor();
    if n < power_of_ten(p - 1) {
        e -= 1;
        tens = power_of_ten(e - p + 1);
        n = (x / tens).floor();
    }
    if ((n + 1.0) * tens - x).abs() <= (n * tens - x).abs() {
        n += 1.0;
    }
    if n >= power_of_ten(p) {
        n /= 10.0;
        e += 1;
    }

    let digits = format!("{:.0}", n);
    if e < -2 || e >= p {
        out.push_str(&digits[..1]);
        if precision > 1 {
            out.push('.');
            out.push_str(&digits[1..precision.min(digits.len())]);
        }
        out.push('e');
        if e > 0 {
            out.push('+');
        }
        out.push_str(&e.to_string());
    } else if e == p - 1 {
        out.push_str(&digits);
    } else if e >= 0 {
        let split = (e as usize + 1).min(digits.len());
        out.push_str(&digits[..split]);
        if split < digits.len() {
            out.push('.');
            out.push_str(&digits[split..]);
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-(e + 1)) as usize));
        out.push_str(&digits);
    }
    out
}

/// Format a p-value to four significant figures, prefixed with "< 0.001"
/// when it falls below that threshold
pub fn format_p_value(p: f64) -> String {
    let text = to_precision(p, P_SIGNIFICANT_FIGURES);
    if p < P_FLOOR {
        format!("< 0.001 ({})", text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_precision_fixed() {
        assert_eq!(to_precision(0.04, 4), "0.04000");
        assert_eq!(to_precision(0.5, 4), "0.5000");
        assert_eq!(to_precision(1.5, 4), "1.500");
        assert_eq!(to_precision(1234.5678, 4), "1235");
    }

    #[test]
    fn test_to_precision_scientific() {
        assert_eq!(to_precision(0.0003, 4), "3.000e-4");
        assert_eq!(to_precision(123456.0, 4), "1.235e+5");
    }

    #[test]
    fn test_to_precision_zero_and_sign() {
        assert_eq!(to_precision(0.0, 4), "0.000");
        assert_eq!(to_precision(-1.5, 4), "-1.500");
    }

    #[test]
    fn test_format_p_value() {
        assert_eq!(format_p_value(0.04), "0.04000");
        assert_eq!(format_p_value(0.0003), "< 0.001 (3.000e-4)");
        assert_eq!(format_p_value(0.0), "< 0.001 (0.000)");
    }
}
