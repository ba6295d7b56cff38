use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

/// High-precision decimal type that preserves its original text.
///
/// FHIR requires that decimal values keep their precision across a round trip:
/// `1.50` must be written back as `1.50`, not `1.5`. This type stores the parsed
/// [`Decimal`] for comparisons and arithmetic next to the text it was read from.
///
/// Equality and ordering use the numeric value, so `10.0 == 10.00`. Text that
/// does not fit `Decimal` (exponents beyond its range) is still preserved; such
/// values compare by text.
///
/// # Examples
///
/// ```rust
/// use meridian_fhir::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::from(Decimal::new(12340, 3));
/// assert_eq!(precise.original_string(), "12.340");
///
/// let a = PreciseDecimal::parse("10.0");
/// let b = PreciseDecimal::parse("10.00");
/// assert_eq!(a, b);
/// assert_eq!(b.original_string(), "10.00");
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    /// The parsed decimal value, `None` if the text is out of range
    value: Option<Decimal>,
    /// The original text, written back verbatim
    original_string: Arc<str>,
}

impl PreciseDecimal {
    /// Creates a `PreciseDecimal` from an explicit value and text.
    pub fn from_parts(value: Option<Decimal>, original_string: String) -> Self {
        Self {
            value,
            original_string: Arc::from(original_string),
        }
    }

    /// Parses decimal text, keeping the text even when it does not fit `Decimal`.
    pub fn parse(text: &str) -> Self {
        Self {
            value: parse_decimal_string(text),
            original_string: Arc::from(text),
        }
    }

    /// Returns the parsed decimal value if parsing was successful.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Returns the original text.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Converts to a JSON number carrying the original text.
    ///
    /// Requires `serde_json`'s `arbitrary_precision` feature, which keeps the
    /// digits as written. Text that is not a valid JSON number falls back to
    /// the canonical form of the parsed value, or to a string.
    pub fn to_json(&self) -> Value {
        if let Ok(number) = serde_json::from_str::<Number>(&self.original_string) {
            return Value::Number(number);
        }
        let canonical = self.value.map(|v| v.to_string());
        match canonical.map(|text| serde_json::from_str::<Number>(&text)) {
            Some(Ok(number)) => Value::Number(number),
            _ => Value::String(self.original_string.to_string()),
        }
    }
}

/// Parses a decimal string with support for scientific notation.
fn parse_decimal_string(s: &str) -> Option<Decimal> {
    if s.contains(['e', 'E']) {
        Decimal::from_scientific(&s.replace('E', "e")).ok()
    } else {
        Decimal::from_str(s).ok()
    }
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric order; unparsed values sort first, by text.
impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => self.original_string.cmp(&other.original_string),
        }
    }
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            value: Some(value),
            original_string: Arc::from(value.to_string()),
        }
    }
}

impl std::fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original_string)
    }
}
