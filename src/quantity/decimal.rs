use super::{QuantityError, SCALE};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 10^SCALE, the mantissa of one whole unit
const ONE: i128 = 10i128.pow(SCALE);

/// Signed fixed-point decimal amount
///
/// Stored as an integer mantissa scaled by 10^18, so two quantities always
/// share the same scale and compare/add exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i128);

impl Quantity {
    pub const ZERO: Self = Self(0);

    /// Build a quantity from a whole number of units
    pub fn from_integer(units: i64) -> Self {
        // |i64::MAX| * 10^18 fits comfortably in i128
        Self(i128::from(units) * ONE)
    }

    /// Build a quantity from its raw mantissa (units of 10^-18)
    pub fn from_mantissa(mantissa: i128) -> Self {
        Self(mantissa)
    }

    pub fn mantissa(self) -> i128 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, QuantityError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(QuantityError::NumericOverflow)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, QuantityError> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(QuantityError::NumericOverflow)
    }

    /// Drop fractional digits beyond `decimals`, rounding toward zero
    pub fn truncate(self, decimals: u32) -> Self {
        if decimals >= SCALE {
            return self;
        }
        let factor = 10i128.pow(SCALE - decimals);
        Self(self.0 / factor * factor)
    }

    /// Lossy conversion for proportional displays such as charts.
    ///
    /// Never use the result for further monetary arithmetic.
    pub fn to_f64(self) -> f64 {
        let whole = (self.0 / ONE) as f64;
        let frac = (self.0 % ONE) as f64 / ONE as f64;
        whole + frac
    }
}

impl From<i64> for Quantity {
    fn from(units: i64) -> Self {
        Self::from_integer(units)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(QuantityError::InvalidFormat(raw.to_string()));
        }

        if frac_part.len() > SCALE as usize {
            return Err(QuantityError::TooPrecise {
                digits: frac_part.len(),
                max: SCALE,
            });
        }

        // Right-pad the fraction so every digit lands at its 10^-18 position
        let padding = SCALE as usize - frac_part.len();
        let digits = int_part
            .bytes()
            .chain(frac_part.bytes())
            .chain(std::iter::repeat(b'0').take(padding));

        // Negative values accumulate downward so i128::MIN stays reachable
        let mut mantissa: i128 = 0;
        for digit in digits {
            let d = i128::from(digit - b'0');
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| {
                    if negative {
                        m.checked_sub(d)
                    } else {
                        m.checked_add(d)
                    }
                })
                .ok_or(QuantityError::NumericOverflow)?;
        }

        Ok(Self(mantissa))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let one = ONE.unsigned_abs();
        let whole = abs / one;
        let frac = abs % one;

        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{whole}")?;

        if frac != 0 {
            let digits = format!("{:0width$}", frac, width = SCALE as usize);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }

        Ok(())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Quantity::from_integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i128::from(v)
            .checked_mul(ONE)
            .map(Quantity)
            .ok_or_else(|| E::custom(QuantityError::NumericOverflow))
    }
}
