use serde_json::{Map, Value};

/// A provider payload plus the locally computed favorite flag.
///
/// The weather fields themselves are opaque to this crate; they are passed
/// through exactly as the provider returned them.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    payload: Map<String, Value>,
    is_favorite: bool,
}

impl WeatherReport {
    #[must_use]
    pub const fn new(payload: Map<String, Value>, is_favorite: bool) -> Self {
        Self {
            payload,
            is_favorite,
        }
    }

    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Merge the favorite flag into the payload for the boundary.
    #[must_use]
    pub fn into_json(self) -> Value {
        let mut payload = self.payload;
        payload.insert("isFavorite".to_string(), Value::Bool(self.is_favorite));
        Value::Object(payload)
    }
}
