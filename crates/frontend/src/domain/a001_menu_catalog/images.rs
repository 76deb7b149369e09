//! Image tables for the catalog browser.

use crate::shared::image::{ImageTable, ResolvedImage};
use maplit::hashmap;
use once_cell::sync::Lazy;

pub const CAKES_CARD_IMAGE: &str = "/images/cakes/hero-cakes.jpg";

/// Preview strip of the closed regular pane, also the rotation list for
/// flavours without an explicit image.
pub const REGULAR_PREVIEW: &[&str] = &[
    "/images/cakes/regular1.jpg",
    "/images/cakes/regular2.jpg",
    "/images/cakes/regular3.jpg",
    "/images/cakes/regular4.jpg",
    "/images/cakes/regular5.jpg",
    "/images/cakes/regular6.jpg",
];

pub const SPECIAL_PREVIEW: &[&str] = &[
    "/images/cakes/anniversary.jpg",
    "/images/cakes/wedding.jpg",
    "/images/cakes/birthday.jpg",
    "/images/cakes/special1.jpg",
    "/images/cakes/special2.jpg",
    "/images/cakes/special3.jpg",
];

pub const REGULAR_PLACEHOLDER: &str = "/images/cakes/regular1.jpg";
pub const SPECIAL_PLACEHOLDER: &str = "/images/cakes/regular2.jpg";
pub const PREVIEW_PLACEHOLDER: &str = "/images/cakes/regular1.jpg";

/// Flavour id (as in menu.json) -> image.
pub static REGULAR_CAKES: Lazy<ImageTable> = Lazy::new(|| ImageTable {
    mapping: hashmap! {
        "Pineapple" => "/images/cakes/pineapple.jpg",
        "Mix-fruit" => "/images/cakes/fruit.jpg",
        "mango-magic" => "/images/cakes/mango.jpg",
        "Gulab-jamun" => "/images/cakes/gulabjamun.jpg",
        "butterscotch" => "/images/cakes/butter.jpg",
        "strawberry-delight" => "/images/cakes/regular6.jpg",
        "Chocolate-Hazelnut" => "/images/cakes/special1.jpg",
        "lotus-cheesecake" => "/images/cakes/lotus.jpg",
        "motichoor-cheesecake" => "/images/cakes/motichoor.jpg",
        "Mango-mousse-cheesecake" => "/images/cakes/mango chesse.jpg",
        "KitKat" => "/images/cakes/kitkat.jpg",
        "Rasmalai" => "/images/cakes/rasmalai.jpg",
        "Red-velvet" => "/images/cakes/redvelvet.jpg",
    },
    rotation: REGULAR_PREVIEW,
    placeholder: REGULAR_PLACEHOLDER,
});

/// Named cake design of the special pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CakeDesign {
    pub name: &'static str,
    pub image: &'static str,
}

const fn design(name: &'static str, image: &'static str) -> CakeDesign {
    CakeDesign { name, image }
}

/// Fixed design list. Independent of both catalog and specials feed.
pub const SPECIAL_DESIGNS: &[CakeDesign] = &[
    design("Photo cakes", "/images/cakes/special1.jpg"),
    design("Custom cakes", "/images/cakes/special2.jpg"),
    design("Wedding cakes", "/images/cakes/wedding.jpg"),
    design("Heart cakes", "/images/cakes/heart.jpg"),
    design("2 tier cakes", "/images/cakes/2 tier.jpg"),
    design("3 tier cakes", "/images/cakes/3 tier.jpg"),
    design("Anniversary cakes", "/images/cakes/anniversary.jpg"),
    design("Birthday cakes", "/images/cakes/birthday.jpg"),
    design("Baby shower cakes", "/images/cakes/baby.jpg"),
    design("Graduation cakes", "/images/cakes/regular3.jpg"),
    design("Ribbon cakes", "/images/cakes/ribbon.jpg"),
    design("Travel cakes", "/images/cakes/travel.jpg"),
    design("Holiday cakes", "/images/cakes/hero-cakes.jpg"),
    design("Festival cakes", "/images/cakes/festival.jpg"),
    design("Regional cakes", "/images/cakes/regular3.jpg"),
    design("Layer cakes", "/images/cakes/regular4.jpg"),
    design("Bundt cakes", "/images/cakes/regular5.jpg"),
    design("Cheesecakes", "/images/cakes/special2.jpg"),
    design("Crepe cakes", "/images/cakes/special3.jpg"),
    design("Sheet cakes", "/images/cakes/hero-cakes.jpg"),
];

pub fn category_card_image(category_id: &str, placeholder: &str) -> ResolvedImage {
    ResolvedImage::new(format!("/images/categories/{category_id}.jpg"), placeholder)
}

pub fn cakes_card_image(placeholder: &str) -> ResolvedImage {
    ResolvedImage::new(CAKES_CARD_IMAGE, placeholder)
}

pub fn design_image(design: &CakeDesign) -> ResolvedImage {
    ResolvedImage::new(design.image, SPECIAL_PLACEHOLDER)
}

pub fn preview_images(list: &[&str]) -> Vec<ResolvedImage> {
    list.iter()
        .map(|src| ResolvedImage::new(*src, PREVIEW_PLACEHOLDER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pineapple_uses_mapping_at_any_position() {
        for position in 0..REGULAR_PREVIEW.len() * 2 {
            let image = REGULAR_CAKES.resolve("Pineapple", position);
            assert_eq!(image.src, "/images/cakes/pineapple.jpg");
        }
    }

    #[test]
    fn test_unmapped_flavour_rotates() {
        assert_eq!(
            REGULAR_CAKES.resolve("black-forest", 0).src,
            "/images/cakes/regular1.jpg"
        );
        assert_eq!(
            REGULAR_CAKES.resolve("black-forest", 7).src,
            "/images/cakes/regular2.jpg"
        );
        assert_eq!(
            REGULAR_CAKES.resolve("black-forest", 7).fallback,
            REGULAR_PLACEHOLDER
        );
    }

    #[test]
    fn test_category_card_image_path() {
        let image = category_card_image("pastries", "/images/placeholder-category.jpg");
        assert_eq!(image.src, "/images/categories/pastries.jpg");
        assert_eq!(image.fallback, "/images/placeholder-category.jpg");
    }

    #[test]
    fn test_special_designs_have_fixed_placeholder() {
        assert_eq!(SPECIAL_DESIGNS.len(), 20);
        assert!(SPECIAL_DESIGNS
            .iter()
            .all(|d| design_image(d).fallback == SPECIAL_PLACEHOLDER));
    }
}
