//! Amount type for numbers exchanged with the API
//!
//! The API speaks plain JSON numbers, so amounts are kept as `f64`. Display
//! follows the way the web page printed them: integral values have no
//! fractional part, everything else uses the shortest round-trip form, and
//! magnitudes of 1e21 and above or below 1e-6 switch to exponent notation.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Largest integer an `f64` represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A numeric amount as sent to and received from the API
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Wrap a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Zero
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The not-a-number sentinel; serializes as JSON `null`
    pub const fn nan() -> Self {
        Self(f64::NAN)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// True for values that count as "missing" in a `value || default` test
    pub fn is_falsy(&self) -> bool {
        self.0 == 0.0 || self.0.is_nan()
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Parse user input leniently
    ///
    /// Leading whitespace is skipped and the longest numeric prefix is used,
    /// so `"12.50 CAD"` is `12.5`. Input without a numeric prefix yields NaN
    /// rather than an error.
    pub fn parse_lenient(input: &str) -> Self {
        let s = input.trim_start();
        let bytes = s.as_bytes();
        let mut pos = 0;

        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            pos += 1;
        }

        if s[pos..].starts_with("Infinity") {
            return if bytes[0] == b'-' {
                Self(f64::NEG_INFINITY)
            } else {
                Self(f64::INFINITY)
            };
        }

        let int_digits = count_digits(&bytes[pos..]);
        pos += int_digits;

        let mut frac_digits = 0;
        if bytes.get(pos) == Some(&b'.') {
            frac_digits = count_digits(&bytes[pos + 1..]);
            if int_digits > 0 || frac_digits > 0 {
                pos += 1 + frac_digits;
            }
        }

        if int_digits == 0 && frac_digits == 0 {
            return Self::nan();
        }

        // Exponent only counts when at least one digit follows it
        if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
            let mut exp_pos = pos + 1;
            if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
                exp_pos += 1;
            }
            let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
            if exp_digits > 0 {
                pos = exp_pos + exp_digits;
            }
        }

        s[..pos].parse::<f64>().map(Self).unwrap_or_else(|_| Self::nan())
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            write!(f, "NaN")
        } else if v.is_infinite() {
            write!(f, "{}Infinity", if v < 0.0 { "-" } else { "" })
        } else if v == 0.0 {
            // also covers -0
            write!(f, "0")
        } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
            write_exponential(f, v)
        } else {
            write!(f, "{}", v)
        }
    }
}

/// Shortest digits in exponent form with an explicit sign: `1e+21`, `1.5e-7`
fn write_exponential(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let formatted = format!("{:e}", v);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => write!(f, "{}e{}", mantissa, exp),
        Some((mantissa, exp)) => write!(f, "{}e+{}", mantissa, exp),
        None => f.write_str(&formatted),
    }
}

/// Integral values go out as JSON integers and non-finite values as `null`,
/// matching what a browser's `JSON.stringify` sends.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if !v.is_finite() {
            serializer.serialize_none()
        } else if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
