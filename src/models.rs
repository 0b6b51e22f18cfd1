use crate::error::{CardError, CardResult};
use crate::formatters::title_case;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One card as delivered by HearthstoneJSON.
///
/// Kept as the raw attribute map rather than a fixed struct: the catalog adds
/// fields between builds and the formatter only needs a handful of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord {
    fields: Map<String, Value>,
}

impl CardRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw lookup, no key translation
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Presence check on the raw key
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Look up an attribute by its snake_case alias (`card_class` -> `cardClass`).
    /// Names without an underscore are used as-is.
    pub fn get(&self, name: &str) -> CardResult<&Value> {
        let key = snake_to_camel(name);
        self.fields
            .get(&key)
            .ok_or(CardError::MissingField(key))
    }

    /// `get` rendered for display: strings verbatim, anything else as JSON text
    pub fn get_display(&self, name: &str) -> CardResult<String> {
        self.get(name).map(display_value)
    }

    /// The card's name, if it has a string one
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn is_collectible(&self) -> bool {
        self.fields.get("collectible").is_some_and(is_truthy)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for CardRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// `faction_cost` -> `factionCost`: first segment unchanged, every following
/// segment title-cased, all concatenated.
pub fn snake_to_camel(name: &str) -> String {
    if !name.contains('_') {
        return name.to_string();
    }
    let mut parts = name.split('_');
    let mut key = parts.next().unwrap_or_default().to_string();
    for part in parts {
        key.push_str(&title_case(part));
    }
    key
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON truthiness: null, false, 0, "" and empty containers are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CardRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("card_class"), "cardClass");
        assert_eq!(snake_to_camel("faction_cost"), "factionCost");
        assert_eq!(snake_to_camel("cost"), "cost");
        assert_eq!(snake_to_camel("spell_damage_bonus"), "spellDamageBonus");
    }

    #[test]
    fn test_get_translates_snake_case() {
        let card = record(json!({"cardClass": "MAGE", "factionCost": 2, "cost": 4}));
        assert_eq!(card.get("card_class").unwrap(), &json!("MAGE"));
        assert_eq!(card.get("faction_cost").unwrap(), &json!(2));
        assert_eq!(card.get("cost").unwrap(), &json!(4));
    }

    #[test]
    fn test_get_missing_reports_translated_key() {
        let card = record(json!({"name": "Wisp"}));
        assert_eq!(
            card.get("card_class"),
            Err(CardError::MissingField("cardClass".to_string()))
        );
    }

    #[test]
    fn test_has_uses_raw_key() {
        let card = record(json!({"cardClass": "MAGE"}));
        assert!(card.has("cardClass"));
        assert!(!card.has("card_class"));
    }

    #[test]
    fn test_get_display() {
        let card = record(json!({"cost": 4, "race": "BEAST", "elite": true}));
        assert_eq!(card.get_display("cost").unwrap(), "4");
        assert_eq!(card.get_display("race").unwrap(), "BEAST");
        assert_eq!(card.get_display("elite").unwrap(), "true");
    }

    #[test]
    fn test_is_collectible() {
        assert!(record(json!({"collectible": true})).is_collectible());
        assert!(record(json!({"collectible": 1})).is_collectible());
        assert!(!record(json!({"collectible": false})).is_collectible());
        assert!(!record(json!({"collectible": 0})).is_collectible());
        assert!(!record(json!({"collectible": null})).is_collectible());
        assert!(!record(json!({"name": "Wisp"})).is_collectible());
        assert!(!record(json!({"collectible": 0.0})).is_collectible());
        assert!(!record(json!({"collectible": ""})).is_collectible());
        assert!(record(json!({"collectible": "yes"})).is_collectible());
        assert!(!record(json!({"collectible": []})).is_collectible());
        assert!(record(json!({"collectible": [1]})).is_collectible());
        assert!(!record(json!({"collectible": {}})).is_collectible());
        assert!(record(json!({"collectible": {"core": true}})).is_collectible());
    }

    #[test]
    fn test_name_requires_string() {
        assert_eq!(record(json!({"name": "Wisp"})).name(), Some("Wisp"));
        assert_eq!(record(json!({"name": 12})).name(), None);
        assert_eq!(record(json!({})).name(), None);
    }
}
