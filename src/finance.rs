//! The finance data model consumed by the earnings chart.
//!
//! The JSON document has the shape `{ "finance": { "periods": [ { "graph": {
//! "year": {..}, "half_year": {..}, "month": {..} } } ] } }`. Each of the
//! three aggregations maps a slot key to a number or `null`, and the order
//! of the keys in the document is the order of the bars on the chart.

use std::{fmt, fs, path::Path};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
};

use crate::{Error, period::Period};

/// Mock data shipped with the crate, used when no data file is given.
pub const MOCK_DATA: &str = include_str!("../data/mock_data.json");

/// The root of a finance JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceData {
    /// The finance record. A document without it is treated as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub finance: FinanceRecord,
}

impl FinanceData {
    /// Parse a finance document from a JSON string.
    ///
    /// # Errors
    /// Returns [Error::InvalidFinanceData] if `text` is not a JSON object of
    /// the expected shape.
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|error| Error::InvalidFinanceData(error.to_string()))
    }

    /// Read and parse a finance document from the file at `path`.
    ///
    /// # Errors
    /// Returns [Error::DataFileError] if the file cannot be read, or
    /// [Error::InvalidFinanceData] if it does not contain valid finance data.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|error| Error::DataFileError(format!("{}: {error}", path.display())))?;

        Self::from_json_str(&text)
    }

    /// The finance data embedded in the binary.
    ///
    /// # Errors
    /// Returns [Error::InvalidFinanceData] if the embedded document is invalid.
    pub fn mock() -> Result<Self, Error> {
        Self::from_json_str(MOCK_DATA)
    }
}

/// An ordered history of finance snapshots, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    /// The snapshots. Only the first is charted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub periods: Vec<FinancePeriod>,
}

impl FinanceRecord {
    /// The snapshot the chart is drawn from, if there is one.
    pub fn latest(&self) -> Option<&FinancePeriod> {
        self.periods.first()
    }
}

/// One historical snapshot of earnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancePeriod {
    /// The aggregations shown on the chart.
    #[serde(default, deserialize_with = "null_as_default")]
    pub graph: Graph,
}

/// The three parallel aggregations of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// One slot per month of the last year.
    #[serde(default)]
    pub year: Slots,
    /// One slot per month of the last six months.
    #[serde(default)]
    pub half_year: Slots,
    /// One slot per day of the last month.
    #[serde(default)]
    pub month: Slots,
}

impl Graph {
    /// The aggregation for `period`.
    pub fn slots(&self, period: Period) -> &Slots {
        match period {
            Period::Year => &self.year,
            Period::HalfYear => &self.half_year,
            Period::Month => &self.month,
        }
    }
}

/// Reads `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An insertion-ordered mapping from slot key to an optional amount.
///
/// A JSON value that is neither a number nor `null` is read as a missing
/// amount rather than rejecting the whole document. An array is read as a
/// mapping keyed by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots(Vec<(String, Option<f64>)>);

impl Slots {
    /// Create slots from `entries`, keeping their order.
    pub fn new(entries: Vec<(String, Option<f64>)>) -> Self {
        Self(entries)
    }

    /// The number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The amounts in key order.
    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.0.iter().map(|(_, value)| *value)
    }

    /// The keys and amounts in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<f64>)> for Slots {
    fn from_iter<T: IntoIterator<Item = (K, Option<f64>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

impl Serialize for Slots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Slots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SlotsVisitor)
    }
}

struct SlotsVisitor;

impl<'de> Visitor<'de> for SlotsVisitor {
    type Value = Slots;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of slot keys to numbers or null")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            entries.push((key, value.as_f64()));
        }

        Ok(Slots(entries))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some(value) = access.next_element::<serde_json::Value>()? {
            entries.push((entries.len().to_string(), value.as_f64()));
        }

        Ok(Slots(entries))
    }

    // `null` in place of a whole aggregation is an empty aggregation.
    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Slots::default())
    }
}
