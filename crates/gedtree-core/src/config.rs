use crate::{Error, Result};
use serde_json::{Map, Value, json};

/// JSON-backed tree configuration addressed by dotted paths (`routing.margin`).
///
/// Unknown keys are preserved so callers can carry their own settings alongside ours.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig(Value);

impl Default for TreeConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl TreeConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| Error::InvalidConfigJson {
            message: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(Error::InvalidConfigJson {
                message: "top-level value must be an object".to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.lookup(dotted_path)?.as_str()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.lookup(dotted_path)?.as_f64()
    }

    /// Built-in values for every key the engine reads.
    pub fn defaults() -> Self {
        Self(json!({
            "generations": { "rootPolicy": "founders" },
            "routing": {
                "margin": 20.0,
                "parallelSpacing": 10.0,
                "spouseDropOffset": 15.0,
                "jointRadius": 4.0
            }
        }))
    }

    /// `self` laid over [`TreeConfig::defaults`]: nested objects are combined key by key, any
    /// other value replaces the default outright.
    pub fn with_defaults(self) -> Self {
        Self(overlay(Self::defaults().0, self.0))
    }
}

fn overlay(base: Value, top: Value) -> Value {
    match (base, top) {
        (Value::Object(mut base), Value::Object(top)) => {
            for (key, value) in top {
                let slot = base.entry(key).or_insert(Value::Null);
                *slot = overlay(std::mem::take(slot), value);
            }
            Value::Object(base)
        }
        (_, top) => top,
    }
}

/// Which individuals seed generation 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootPolicyKind {
    /// Parentless individuals with children whose spouses are also parentless, with fallbacks.
    #[default]
    Founders,
    /// Every individual without recorded parents.
    Parentless,
}

impl RootPolicyKind {
    pub const CONFIG_KEY: &'static str = "generations.rootPolicy";

    pub fn from_config(config: &TreeConfig) -> Result<Self> {
        match config.get_str(Self::CONFIG_KEY) {
            None | Some("founders") => Ok(Self::Founders),
            Some("parentless") => Ok(Self::Parentless),
            Some(other) => Err(Error::InvalidConfigValue {
                key: Self::CONFIG_KEY.to_string(),
                message: format!("expected \"founders\" or \"parentless\", got {other:?}"),
            }),
        }
    }
}
