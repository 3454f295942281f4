//! Input model for the hybrid-analysis panel: a fixed set of named
//! traffic-log fields, each with a declared type and a seeded default.

use serde_json::{Map, Number, Value};

/// A single form field value. The declared type is fixed at seed time and
/// never changes afterwards: edits to a numeric field coerce, edits to a
/// text field are stored verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Number(_))
    }

    /// HTML input type for rendering.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
        }
    }

    /// Value attribute for rendering. Whole floats print without a
    /// fractional part (3, not 3.0), matching how they were seeded.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Number(n) => format!("{n}"),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// Non-numeric input to a numeric field coerces to this.
const NUMERIC_FALLBACK: f64 = 0.0;

/// The traffic-log form, with fields kept in their declared order.
#[derive(Debug, Clone)]
pub struct TrafficLogForm {
    fields: Vec<(&'static str, FieldValue)>,
}

impl TrafficLogForm {
    /// The documented default example log.
    pub fn seeded() -> Self {
        Self {
            fields: vec![
                ("duration", FieldValue::Number(0.009)),
                ("proto", FieldValue::Text("tcp".to_string())),
                ("service", FieldValue::Text("http".to_string())),
                ("conn_state", FieldValue::Text("SF".to_string())),
                ("orig_bytes", FieldValue::Number(3.0)),
                ("resp_bytes", FieldValue::Number(0.0)),
                ("missed_bytes", FieldValue::Number(2.0)),
                ("orig_pkts", FieldValue::Number(4.0)),
                ("orig_ip_bytes", FieldValue::Number(40.0)),
            ],
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Update exactly one field from raw user input. Numeric fields parse
    /// to f64, falling back to 0.0 on garbage; text fields keep the raw
    /// string. Unknown field names are refused.
    pub fn set(&mut self, name: &str, raw: &str) -> bool {
        let Some((_, value)) = self.fields.iter_mut().find(|(field, _)| *field == name) else {
            return false;
        };
        *value = match value {
            FieldValue::Number(_) => {
                let parsed = raw.trim().parse::<f64>().unwrap_or(NUMERIC_FALLBACK);
                // NaN / infinity have no JSON representation.
                FieldValue::Number(if parsed.is_finite() { parsed } else { NUMERIC_FALLBACK })
            }
            FieldValue::Text(_) => FieldValue::Text(raw.to_string()),
        };
        true
    }

    /// Wire payload: numeric keys as JSON numbers, string keys as strings.
    pub fn payload(&self) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.fields {
            let json = match value {
                FieldValue::Number(n) => Number::from_f64(*n)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                FieldValue::Text(s) => Value::String(s.clone()),
            };
            object.insert((*name).to_string(), json);
        }
        Value::Object(object)
    }
}

impl Default for TrafficLogForm {
    fn default() -> Self {
        Self::seeded()
    }
}
