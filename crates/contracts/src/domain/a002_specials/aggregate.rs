use serde::{Deserialize, Serialize};

/// Specials document (special.json). Feeds the promotional panel only; its
/// ids are unrelated to catalog ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialsDocument {
    #[serde(default)]
    pub items: Vec<SpecialEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl SpecialEntry {
    /// Literal price as shown on the panel, e.g. `$3.50`.
    ///
    /// Cents are rounded half away from zero, so `2.125` shows as `$2.13`.
    pub fn display_price(&self) -> String {
        let rounded = (self.price * 100.0).round() / 100.0;
        format!("${:.2}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_specials() {
        let doc: SpecialsDocument = serde_json::from_str(
            r#"{ "items": [ { "id": "atta", "name": "Atta Biscuits", "price": 6 }, { "id": "sugar-free", "name": "Sugar-free Biscuits", "price": 7.5 } ] }"#,
        )
        .unwrap();
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[1].name, "Sugar-free Biscuits");
    }

    #[test]
    fn test_display_price() {
        let entry = SpecialEntry {
            id: "atta".into(),
            name: "Atta Biscuits".into(),
            price: 6.0,
        };
        assert_eq!(entry.display_price(), "$6.00");

        let entry = SpecialEntry {
            price: 7.499,
            ..entry
        };
        assert_eq!(entry.display_price(), "$7.50");
    }

    #[test]
    fn test_display_price_rounds_ties_up() {
        let entry = SpecialEntry {
            id: "sakkar".into(),
            name: "Sakkar Biscuits".into(),
            price: 2.125,
        };
        assert_eq!(entry.display_price(), "$2.13");

        let entry = SpecialEntry {
            price: 0.375,
            ..entry
        };
        assert_eq!(entry.display_price(), "$0.38");
    }

    #[test]
    fn test_missing_items_is_empty() {
        let doc: SpecialsDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.items.is_empty());
    }
}
