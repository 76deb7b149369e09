//! Image resolution
//!
//! An item image is chosen in three steps:
//! 1. explicit id -> path table (exact key match)
//! 2. rotation through an ordered fallback list, keyed by the item position
//! 3. at render time, a fixed placeholder when the chosen path fails to load
//!
//! Steps 1 and 2 are pure and happen here. Step 3 is done per `<img>` element
//! by [`FallbackImage`], which never writes back into the table.

use crate::shared::dom::swap_to_fallback;
use leptos::prelude::*;
use std::collections::HashMap;

/// Image reference plus the placeholder to use if it fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub src: String,
    pub fallback: String,
}

impl ResolvedImage {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fallback: fallback.into(),
        }
    }

    /// Replacement for an element currently showing `current` that failed.
    ///
    /// `None` once the element already shows the fallback, so a broken
    /// placeholder does not cause an endless error loop.
    pub fn fallback_for(&self, current: &str) -> Option<&str> {
        if current == self.fallback {
            None
        } else {
            Some(&self.fallback)
        }
    }
}

/// `list[position mod len]`, `None` for an empty list.
pub fn rotation_pick<'a>(list: &[&'a str], position: usize) -> Option<&'a str> {
    if list.is_empty() {
        return None;
    }
    Some(list[position % list.len()])
}

/// Static lookup table for a family of item images.
#[derive(Debug, Clone)]
pub struct ImageTable {
    pub mapping: HashMap<&'static str, &'static str>,
    pub rotation: &'static [&'static str],
    pub placeholder: &'static str,
}

impl ImageTable {
    /// Image for the item `item_id` at `position` in its list. Total: with an
    /// empty rotation the placeholder itself is used.
    pub fn resolve(&self, item_id: &str, position: usize) -> ResolvedImage {
        let src = self
            .mapping
            .get(item_id)
            .copied()
            .or_else(|| rotation_pick(self.rotation, position))
            .unwrap_or(self.placeholder);
        ResolvedImage::new(src, self.placeholder)
    }
}

/// `<img>` that swaps to its fallback on load error.
#[component]
pub fn FallbackImage(
    image: ResolvedImage,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let src = image.src.clone();
    view! {
        <img
            src=src
            alt=alt
            class=class
            on:error=move |ev| swap_to_fallback(ev.target(), &image)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    const ROTATION: &[&str] = &["/r1.jpg", "/r2.jpg", "/r3.jpg"];

    fn table() -> ImageTable {
        ImageTable {
            mapping: hashmap! { "Pineapple" => "/pineapple.jpg" },
            rotation: ROTATION,
            placeholder: "/placeholder.jpg",
        }
    }

    #[test]
    fn test_mapping_wins_over_rotation() {
        let image = table().resolve("Pineapple", 1);
        assert_eq!(image.src, "/pineapple.jpg");
        assert_eq!(image.fallback, "/placeholder.jpg");
    }

    #[test]
    fn test_rotation_by_position() {
        let table = table();
        for position in 0..20 {
            let image = table.resolve("unknown", position);
            assert_eq!(image.src, ROTATION[position % ROTATION.len()]);
            // deterministic
            assert_eq!(image, table.resolve("unknown", position));
        }
    }

    #[test]
    fn test_mapping_key_is_exact() {
        let image = table().resolve("pineapple", 0);
        assert_eq!(image.src, "/r1.jpg");
    }

    #[test]
    fn test_empty_rotation_uses_placeholder() {
        let table = ImageTable {
            mapping: HashMap::new(),
            rotation: &[],
            placeholder: "/placeholder.jpg",
        };
        assert_eq!(table.resolve("x", 7).src, "/placeholder.jpg");
        assert_eq!(rotation_pick(&[], 3), None);
    }

    #[test]
    fn test_fallback_for_stops_at_placeholder() {
        let image = ResolvedImage::new("/broken.jpg", "/placeholder.jpg");
        assert_eq!(image.fallback_for("/broken.jpg"), Some("/placeholder.jpg"));
        assert_eq!(image.fallback_for("/placeholder.jpg"), None);
        // the resolved value itself is untouched
        assert_eq!(image.src, "/broken.jpg");
    }
}
