use serde::Serialize;
use serde_json::{Map, Value};

/// Columns retained from the source CSV; anything else is dropped silently.
pub static EXPECTED_ATTRIBUTES: &[&str] = &[
    "BANK", "IFSC", "BRANCH", "CENTRE", "DISTRICT", "STATE", "ADDRESS", "CONTACT",
    "IMPS", "RTGS", "CITY", "ISO3166", "NEFT", "MICR", "UPI",
];

/// Columns stored as booleans in the destination table.
static BOOLEAN_ATTRIBUTES: &[&str] = &["IMPS", "RTGS", "NEFT", "UPI"];

/// Case-insensitive truthy tokens; every other value (including empty) is false.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "true" | "yes" | "1" | "t" | "y"
    )
}

/// One normalized branch row, keyed only by the expected attributes.
///
/// Exists transiently between CSV parse and the insert call; serializes to
/// the JSON object sent as the insert body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchRecord {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl BranchRecord {
    /// Build a record from `(column, raw value)` pairs. Pure and infallible:
    /// unknown columns are skipped, flag columns are parsed to booleans,
    /// ISO3166 is truncated to its first two characters, and everything else
    /// is kept as a string. A column absent from the input produces no key.
    pub fn normalize<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut fields = Map::new();
        for (key, raw) in pairs {
            if !EXPECTED_ATTRIBUTES.contains(&key) {
                continue;
            }
            let value = if BOOLEAN_ATTRIBUTES.contains(&key) {
                Value::Bool(parse_flag(raw))
            } else if key == "ISO3166" {
                Value::String(raw.chars().take(2).collect())
            } else {
                Value::String(raw.to_string())
            };
            fields.insert(key.to_string(), value);
        }
        Self { fields }
    }

    /// Row identity used in log lines; not every feed carries it.
    pub fn ifsc(&self) -> Option<&str> {
        self.fields.get("IFSC").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
