//! Input model for the anomaly-detector panel: 32 numeric features keyed
//! `feature_1..feature_32`.
//!
//! Unlike the traffic-log form, edits here keep the raw string the user
//! typed; coercion to f64 happens once, when the payload is built.

use serde_json::{Map, Number, Value};

/// Number of features the autoencoder expects.
pub const FEATURE_COUNT: usize = 32;

/// Example vector the panel seeds from, indexed feature_1..feature_32.
const EXAMPLE_VECTOR: [f64; FEATURE_COUNT] = [
    1.9901, -0.5092, 0.2132, -1.0537, -0.9658, -0.8571, 0.4944, 0.5057,
    -0.5355, -0.1789, 0.0406, -0.2658, 0.9586, 0.1734, 0.6826, 0.5192,
    0.1271, -1.4251, -2.0184, 0.0729, -0.2575, -0.0374, 0.4007, 0.2273,
    0.0788, 1.2154, -1.1556, -0.4729, 0.8462, -0.7632, 1.2559, -1.4375,
];

/// The 32-slot feature vector. All keys are always present.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    // Raw strings in feature_1..feature_32 order.
    values: Vec<String>,
}

impl FeatureVector {
    /// Seed from the example vector. A slot with no example value seeds
    /// to 0.
    pub fn seeded() -> Self {
        Self {
            values: EXAMPLE_VECTOR.iter().map(|v| format!("{v}")).collect(),
        }
    }

    /// Every slot zeroed, mostly useful in tests.
    pub fn zeroed() -> Self {
        Self {
            values: vec!["0".to_string(); FEATURE_COUNT],
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, raw)| (format!("feature_{}", i + 1), raw.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        Some(self.values[Self::index_of(key)?].as_str())
    }

    /// Store the raw string for one key. No eager coercion.
    pub fn set(&mut self, key: &str, raw: &str) -> bool {
        match Self::index_of(key) {
            Some(index) => {
                self.values[index] = raw.to_string();
                true
            }
            None => false,
        }
    }

    /// Wire payload: all 32 keys, every value coerced to a finite f64.
    /// Invalid or empty input becomes 0.0 — the key is never omitted.
    pub fn payload(&self) -> Value {
        let mut object = Map::new();
        for (key, raw) in self.entries() {
            let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
            let value = if parsed.is_finite() { parsed } else { 0.0 };
            object.insert(
                key,
                Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null),
            );
        }
        Value::Object(object)
    }

    fn index_of(key: &str) -> Option<usize> {
        let n: usize = key.strip_prefix("feature_")?.parse().ok()?;
        if (1..=FEATURE_COUNT).contains(&n) {
            Some(n - 1)
        } else {
            None
        }
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::seeded()
    }
}
