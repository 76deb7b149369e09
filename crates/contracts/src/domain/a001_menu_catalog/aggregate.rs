use serde::{Deserialize, Serialize};

/// Id of the category whose items are shown in the cakes drill-down
/// instead of the generic category list.
pub const CAKES_CATEGORY_ID: &str = "cakes";

// ============================================================================
// Wire document (menu.json)
// ============================================================================

/// Primary catalog document.
///
/// Every field is optional on the wire: a missing array becomes empty and a
/// missing string becomes `""`. Nothing else is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCatalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Item of a category. In the cakes category an item is a flavour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Size option. Extra fields in the document (prices etc.) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub size: String,
}

// ============================================================================
// Lookups
// ============================================================================

impl MenuCatalog {
    /// Category by exact id match.
    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains_category(&self, id: &str) -> bool {
        self.find_category(id).is_some()
    }

    /// Items of the cakes category, empty when the document has none.
    pub fn cake_flavours(&self) -> &[MenuItem] {
        self.find_category(CAKES_CATEGORY_ID)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    /// Categories other than cakes, in document order.
    pub fn browsable_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(|c| c.id != CAKES_CATEGORY_ID)
    }
}

impl MenuItem {
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.size.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "categories": [
            {
                "id": "cakes",
                "title": "Cakes",
                "description": "Eggless cakes",
                "items": [
                    { "id": "Pineapple", "name": "Pineapple", "variants": [ { "size": "6 inches", "price": 25 }, { "size": "7 inches" } ] },
                    { "id": "butterscotch", "name": "Butterscotch" }
                ]
            },
            {
                "id": "pastries",
                "title": "Pastries",
                "description": "Fresh every morning",
                "items": [ { "id": "croissant", "name": "Croissant", "variants": [] } ]
            },
            { "id": "drinks" }
        ]
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let catalog: MenuCatalog = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(catalog.categories.len(), 3);
        assert_eq!(catalog.categories[1].items[0].name, "Croissant");

        let pineapple = &catalog.categories[0].items[0];
        assert_eq!(pineapple.sizes().collect::<Vec<_>>(), vec!["6 inches", "7 inches"]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let catalog: MenuCatalog = serde_json::from_str(SAMPLE).unwrap();
        let drinks = catalog.find_category("drinks").unwrap();
        assert_eq!(drinks.title, "");
        assert!(drinks.items.is_empty());

        let butterscotch = &catalog.categories[0].items[1];
        assert!(butterscotch.variants.is_empty());

        let empty: MenuCatalog = serde_json::from_str("{}").unwrap();
        assert!(empty.categories.is_empty());
        assert!(empty.cake_flavours().is_empty());
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog: MenuCatalog = serde_json::from_str(SAMPLE).unwrap();
        assert!(catalog.contains_category("pastries"));
        assert!(!catalog.contains_category("Pastries"));
        assert!(!catalog.contains_category("pastries "));
    }

    #[test]
    fn test_browsable_categories_skip_cakes_and_keep_order() {
        let catalog: MenuCatalog = serde_json::from_str(SAMPLE).unwrap();
        let ids: Vec<&str> = catalog
            .browsable_categories()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["pastries", "drinks"]);
        assert_eq!(catalog.cake_flavours().len(), 2);
    }
}
