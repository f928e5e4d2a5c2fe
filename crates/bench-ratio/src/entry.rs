use crate::error::RatioError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::HashSet, fs, path::Path};

/// Resource access profile of one benchmarked operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Operation name, unique within a benchmark list.
    pub name: String,
    /// Number of storage reads.
    pub reads: u64,
    /// Number of storage writes.
    pub writes: u64,
    /// Intrinsic weight, excluding storage access.
    pub weight: u64,
}

impl BenchmarkEntry {
    /// Creates a new benchmark entry.
    pub fn new(name: impl Into<String>, reads: u64, writes: u64, weight: u64) -> Self {
        Self {
            name: name.into(),
            reads,
            writes,
            weight,
        }
    }

    fn from_value(index: usize, value: &Value) -> Result<Self, RatioError> {
        let Some(object) = value.as_object() else {
            return Err(RatioError::validation(format!(
                "benchmark entry #{index} is not an object"
            )));
        };
        let name = match object.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(RatioError::validation(format!(
                    "benchmark entry #{index}: field `name` must be a string, got {other}"
                )))
            }
            None => {
                return Err(RatioError::validation(format!(
                    "benchmark entry #{index}: missing field `name`"
                )))
            }
        };
        let context = format!("benchmark entry `{name}`");
        Ok(Self {
            reads: u64_field(object, "reads", &context)?,
            writes: u64_field(object, "writes", &context)?,
            weight: u64_field(object, "weight", &context)?,
            name,
        })
    }
}

/// Reads a non-negative integer field of a JSON object.
pub(crate) fn u64_field(
    object: &Map<String, Value>,
    field: &str,
    context: &str,
) -> Result<u64, RatioError> {
    let value = object
        .get(field)
        .ok_or_else(|| RatioError::validation(format!("{context}: missing field `{field}`")))?;
    value.as_u64().ok_or_else(|| {
        RatioError::validation(format!(
            "{context}: field `{field}` must be a non-negative integer, got {value}"
        ))
    })
}

/// Parses a JSON array of benchmark entries.
///
/// The list must be non-empty and names must be unique.
pub fn parse_benchmark_entries(json: &str) -> Result<Vec<BenchmarkEntry>, RatioError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| RatioError::parse("benchmark list", e))?;
    let Value::Array(items) = value else {
        return Err(RatioError::validation("benchmark list must be a JSON array"));
    };
    if items.is_empty() {
        return Err(RatioError::validation("no benchmark entries"));
    }

    let mut seen = HashSet::with_capacity(items.len());
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = BenchmarkEntry::from_value(index, item)?;
        if !seen.insert(entry.name.clone()) {
            return Err(RatioError::validation(format!(
                "duplicate benchmark entry `{}`",
                entry.name
            )));
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// Reads and parses the benchmark list at `path`.
pub fn load_benchmark_entries(path: &Path) -> Result<Vec<BenchmarkEntry>, RatioError> {
    let json = fs::read_to_string(path).map_err(|e| RatioError::io(path, e))?;
    let entries = parse_benchmark_entries(&json)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded benchmark list");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_entries_in_order() {
        let entries = parse_benchmark_entries(
            r#"[
                {"name": "b", "reads": 1, "writes": 2, "weight": 300},
                {"name": "a", "reads": 0, "writes": 0, "weight": 1000}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![
                BenchmarkEntry::new("b", 1, 2, 300),
                BenchmarkEntry::new("a", 0, 0, 1000),
            ]
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let entries =
            parse_benchmark_entries(r#"[{"name":"a","reads":0,"writes":0,"weight":1,"extra":"x"}]"#)
                .unwrap();
        assert_eq!(entries[0], BenchmarkEntry::new("a", 0, 0, 1));
    }

    #[test]
    fn empty_list() {
        let err = parse_benchmark_entries("[]").unwrap_err();
        assert!(matches!(err, RatioError::Validation(ref msg) if msg == "no benchmark entries"));
    }

    #[test]
    fn malformed_json() {
        let err = parse_benchmark_entries(r#"[{"name": "a","#).unwrap_err();
        assert!(matches!(err, RatioError::Parse { .. }));
    }

    #[rstest]
    #[case::not_array(r#"{"name":"a"}"#, "must be a JSON array")]
    #[case::not_object(r#"[1]"#, "#0 is not an object")]
    #[case::missing_name(r#"[{"reads":0,"writes":0,"weight":0}]"#, "missing field `name`")]
    #[case::numeric_name(r#"[{"name":1,"reads":0,"writes":0,"weight":0}]"#, "`name` must be a string")]
    #[case::missing_reads(r#"[{"name":"a","writes":0,"weight":0}]"#, "`a`: missing field `reads`")]
    #[case::string_writes(r#"[{"name":"a","reads":0,"writes":"1","weight":0}]"#, "field `writes`")]
    #[case::negative_weight(r#"[{"name":"a","reads":0,"writes":0,"weight":-5}]"#, "field `weight`")]
    #[case::fractional_reads(r#"[{"name":"a","reads":1.5,"writes":0,"weight":0}]"#, "field `reads`")]
    #[case::duplicate(
        r#"[{"name":"a","reads":0,"writes":0,"weight":0},{"name":"a","reads":1,"writes":0,"weight":0}]"#,
        "duplicate benchmark entry `a`"
    )]
    fn invalid_entries(#[case] json: &str, #[case] expected: &str) {
        match parse_benchmark_entries(json) {
            Err(RatioError::Validation(msg)) => {
                assert!(msg.contains(expected), "`{msg}` does not contain `{expected}`")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
