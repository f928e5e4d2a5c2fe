use crate::error::RatioError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, fs, path::Path};

/// Gas measurement of one operation, as written by the bench generator.
///
/// Only `used_gas` takes part in the ratio; the remaining fields describe
/// how the measurement was taken and are kept for inspection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Raw gas measurement, validated by [`CostTable::used_gas`] on lookup.
    #[serde(default)]
    used_gas: Value,
    /// Caller address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Contract bytecode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// ABI encoded call data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Expected return data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl CostEntry {
    /// Entry carrying only a gas measurement.
    pub fn with_used_gas(used_gas: u64) -> Self {
        Self {
            used_gas: used_gas.into(),
            ..Default::default()
        }
    }
}

/// Mapping from operation name to its measured gas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostTable(pub BTreeMap<String, CostEntry>);

impl CostTable {
    /// Parses a cost table from a JSON object.
    pub fn parse(json: &str) -> Result<Self, RatioError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| RatioError::parse("cost table", e))?;
        let Value::Object(object) = value else {
            return Err(RatioError::validation("cost table must be a JSON object"));
        };

        object
            .into_iter()
            .map(|(name, entry)| {
                let entry = serde_json::from_value::<CostEntry>(entry).map_err(|e| {
                    RatioError::validation(format!("cost table entry `{name}`: {e}"))
                })?;
                Ok((name, entry))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Self)
    }

    /// Reads and parses the cost table at `path`.
    pub fn load(path: &Path) -> Result<Self, RatioError> {
        let json = fs::read_to_string(path).map_err(|e| RatioError::io(path, e))?;
        let table = Self::parse(&json)?;
        tracing::debug!(path = %path.display(), operations = table.len(), "loaded cost table");
        Ok(table)
    }

    /// Number of operations in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no operations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entry of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&CostEntry> {
        self.0.get(name)
    }

    /// Returns the validated gas used by `name`.
    ///
    /// Fails with [`RatioError::Lookup`] if the operation is absent and with
    /// [`RatioError::Validation`] if its `used_gas` is missing or not a
    /// positive integer.
    pub fn used_gas(&self, name: &str) -> Result<u64, RatioError> {
        let entry = self.get(name).ok_or_else(|| RatioError::Lookup {
            name: name.to_string(),
        })?;
        match entry.used_gas.as_u64() {
            Some(0) => Err(RatioError::validation(format!(
                "`used_gas` of operation `{name}` must be positive, got 0"
            ))),
            Some(gas) => Ok(gas),
            None if entry.used_gas.is_null() => Err(RatioError::validation(format!(
                "operation `{name}` has no `used_gas`"
            ))),
            None => Err(RatioError::validation(format!(
                "`used_gas` of operation `{name}` must be a positive integer, got {}",
                entry.used_gas
            ))),
        }
    }
}

impl<N: Into<String>> FromIterator<(N, u64)> for CostTable {
    fn from_iter<T: IntoIterator<Item = (N, u64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, gas)| (name.into(), CostEntry::with_used_gas(gas)))
                .collect(),
        )
    }
}
