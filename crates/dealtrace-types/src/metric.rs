use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Raw scalar as found in exported simulation archives.
///
/// Upstream payloads are loosely typed: the same field may arrive as a JSON
/// number, a numeric string ("1.10"), a boolean, null, or free text such as
/// payment terms ("Net 30"). Values are preserved as-is; [`MetricValue::as_number`]
/// is the single normalization point that turns them into something
/// aggregators can consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Flag(bool),
    Missing,
}

impl MetricValue {
    /// Normalize to a finite number.
    ///
    /// Numeric strings are parsed with invariant decimal notation ("1.10"
    /// parses, "1,10" does not). Booleans are flags, never numbers.
    /// Non-finite results (NaN, infinities, strings spelling them) are
    /// treated as missing. Never panics.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) if n.is_finite() => Some(*n),
            MetricValue::Number(_) => None,
            MetricValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            MetricValue::Flag(_) | MetricValue::Missing => None,
        }
    }

    /// Pass a boolean through unchanged.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            MetricValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Raw text content, if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, MetricValue::Missing)
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Missing
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        MetricValue::Number(n)
    }
}

impl From<bool> for MetricValue {
    fn from(b: bool) -> Self {
        MetricValue::Flag(b)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        MetricValue::Text(s)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => write!(f, "{}", s),
            MetricValue::Flag(b) => write!(f, "{}", b),
            MetricValue::Missing => write!(f, "-"),
        }
    }
}

struct MetricValueVisitor;

impl<'de> Visitor<'de> for MetricValueVisitor {
    type Value = MetricValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar metric value (number, string, boolean, or null)")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(MetricValue::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(MetricValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(MetricValue::Number(v as f64))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(MetricValue::Flag(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(MetricValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(MetricValue::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MetricValue::Missing)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MetricValue::Missing)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }

    // Structured values are out of scope for metrics; swallow them as missing
    // rather than failing the whole archive.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(MetricValue::Missing)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(MetricValue::Missing)
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(MetricValueVisitor)
    }
}
