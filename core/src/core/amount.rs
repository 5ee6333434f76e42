// order_intake/src/core/amount.rs

//! Order amounts and the coercion rules applied to incoming request values.
//!
//! An amount arrives either as a JSON number or as a string holding a numeric
//! literal (`"150"`, `" 12.50 "`, `"1e3"`). Anything else is rejected before
//! any order is created.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
  #[error("amount must not be blank")]
  Blank,

  #[error("'{0}' is not a number")]
  NotNumeric(String),

  #[error("'{0}' is outside the representable range")]
  OutOfRange(String),

  #[error("expected a number or numeric string, got {0}")]
  UnsupportedType(&'static str),
}

/// A validated, exact order amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
  pub fn new(value: Decimal) -> Self {
    Amount(value)
  }

  pub fn value(&self) -> Decimal {
    self.0
  }

  /// Coerces a raw JSON value into an amount.
  pub fn coerce(value: &Value) -> Result<Self, AmountError> {
    match value {
      Value::Number(n) => parse_literal(&n.to_string()),
      Value::String(s) => s.parse(),
      Value::Null => Err(AmountError::UnsupportedType("null")),
      Value::Bool(_) => Err(AmountError::UnsupportedType("boolean")),
      Value::Array(_) => Err(AmountError::UnsupportedType("array")),
      Value::Object(_) => Err(AmountError::UnsupportedType("object")),
    }
  }
}

/// Largest number of fractional digits a `Decimal` can carry.
const MAX_SCALE: i64 = 28;

fn parse_literal(literal: &str) -> Result<Amount, AmountError> {
  if let Ok(d) = Decimal::from_str(literal) {
    return Ok(Amount(d));
  }
  let finite = literal.parse::<f64>().map_or(false, f64::is_finite);
  if literal.contains(['e', 'E']) {
    if let Ok(d) = Decimal::from_scientific(literal) {
      return Ok(Amount(d));
    }
    if !finite {
      return Err(AmountError::NotNumeric(literal.to_string()));
    }
    // Tiny magnitudes round to the maximum scale, as plain literals do.
    return expand_negative_exponent(literal)
      .and_then(|plain| Decimal::from_str(&plain).ok())
      .map(Amount)
      .ok_or_else(|| AmountError::OutOfRange(literal.to_string()));
  }
  if finite {
    // A finite f64 literal that Decimal cannot hold is out of range, not malformed.
    return Err(AmountError::OutOfRange(literal.to_string()));
  }
  Err(AmountError::NotNumeric(literal.to_string()))
}

/// Rewrites `m.mmme-n` as a plain decimal literal. `None` unless the exponent
/// is negative. Values below half the smallest representable step become `0`.
fn expand_negative_exponent(literal: &str) -> Option<String> {
  let (mantissa, exponent) = literal.split_once(['e', 'E'])?;
  let exponent: i64 = exponent.parse().ok()?;
  if exponent >= 0 {
    return None;
  }
  let (sign, unsigned) = match mantissa.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
  };
  let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
  let digits = format!("{int_part}{frac_part}");
  let point = int_part.len() as i64 + exponent;

  if point < -MAX_SCALE {
    return Some("0".to_string());
  }
  if point <= 0 {
    let zeros = "0".repeat(point.unsigned_abs() as usize);
    return Some(format!("{sign}0.{zeros}{digits}"));
  }
  let (whole, fraction) = digits.split_at(point as usize);
  Some(format!("{sign}{whole}.{fraction}"))
}

impl FromStr for Amount {
  type Err = AmountError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
      return Err(AmountError::Blank);
    }
    parse_literal(trimmed)
  }
}

impl From<Decimal> for Amount {
  fn from(value: Decimal) -> Self {
    Amount(value)
  }
}

impl From<i64> for Amount {
  fn from(value: i64) -> Self {
    Amount(Decimal::from(value))
  }
}

impl fmt::Display for Amount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0.normalize(), f)
  }
}

// Events carry the amount as a plain JSON number.
impl Serialize for Amount {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    rust_decimal::serde::float::serialize(&self.0, serializer)
  }
}

impl<'de> Deserialize<'de> for Amount {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Amount::coerce(&raw).map_err(serde::de::Error::custom)
  }
}
