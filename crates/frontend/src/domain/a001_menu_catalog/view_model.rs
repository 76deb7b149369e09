//! Pure renderers: `(catalog, active view) -> rows to display`.
//!
//! Nothing here touches the DOM or reactive state; the components in `ui`
//! only map these values to markup.

use super::images::{
    cakes_card_image, category_card_image, design_image, preview_images, REGULAR_CAKES,
    REGULAR_PREVIEW, SPECIAL_DESIGNS, SPECIAL_PREVIEW,
};
use super::navigation::{ActiveView, CakesPane, NavigationAction};
use crate::shared::image::ResolvedImage;
use contracts::domain::a001_menu_catalog::aggregate::{MenuCatalog, MenuItem};

/// Separator between variant sizes in a caption.
pub const SIZE_SEPARATOR: &str = " • ";

#[derive(Debug, Clone, PartialEq)]
pub enum MenuScreen {
    Grid(Vec<CategoryCard>),
    Cakes(CakesScreen),
    Category(CategoryListing),
    /// Active view refers to a category that is not in the catalog
    Empty,
}

// ============================================================================
// Grid
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub key: String,
    pub title: String,
    pub caption: String,
    pub image: ResolvedImage,
    pub action: NavigationAction,
}

/// Synthetic cakes card first, then every other category in document order.
pub fn grid_cards(catalog: &MenuCatalog, card_placeholder: &str) -> Vec<CategoryCard> {
    let cakes = CategoryCard {
        key: "cakes".to_string(),
        title: "Cakes".to_string(),
        caption: "Regular & Special cakes — click to explore".to_string(),
        image: cakes_card_image(card_placeholder),
        action: NavigationAction::OpenCakes,
    };

    std::iter::once(cakes)
        .chain(catalog.browsable_categories().map(|c| CategoryCard {
            key: c.id.clone(),
            title: c.title.clone(),
            caption: c.description.clone(),
            image: category_card_image(&c.id, card_placeholder),
            action: NavigationAction::OpenCategory(c.id.clone()),
        }))
        .collect()
}

// ============================================================================
// Cakes drill-down
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CakesScreen {
    pub panes: Vec<PaneView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaneView {
    pub pane: CakesPane,
    pub title: &'static str,
    pub description: &'static str,
    pub body: PaneBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaneBody {
    /// Closed pane: preview strip and an "Explore" trigger
    Preview(Vec<ResolvedImage>),
    Open {
        heading: &'static str,
        rows: Vec<PaneRow>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaneRow {
    pub name: String,
    pub caption: Option<String>,
    pub image: ResolvedImage,
}

/// `"6 inches • 7 inches"`, `None` for an item without variants.
pub fn size_caption(item: &MenuItem) -> Option<String> {
    if item.variants.is_empty() {
        return None;
    }
    Some(item.sizes().collect::<Vec<_>>().join(SIZE_SEPARATOR))
}

pub fn regular_rows(catalog: &MenuCatalog) -> Vec<PaneRow> {
    catalog
        .cake_flavours()
        .iter()
        .enumerate()
        .map(|(position, item)| PaneRow {
            name: item.name.clone(),
            caption: size_caption(item),
            image: REGULAR_CAKES.resolve(&item.id, position),
        })
        .collect()
}

pub fn special_rows() -> Vec<PaneRow> {
    SPECIAL_DESIGNS
        .iter()
        .map(|d| PaneRow {
            name: d.name.to_string(),
            caption: None,
            image: design_image(d),
        })
        .collect()
}

pub fn cakes_screen(catalog: &MenuCatalog, open: Option<CakesPane>) -> CakesScreen {
    let regular = PaneView {
        pane: CakesPane::Regular,
        title: "Regular Cakes",
        description: "Everyday favourites — flavours & sizes.",
        body: if open == Some(CakesPane::Regular) {
            PaneBody::Open {
                heading: "Regular Cakes — Flavours & Sizes",
                rows: regular_rows(catalog),
            }
        } else {
            PaneBody::Preview(preview_images(REGULAR_PREVIEW))
        },
    };

    let special = PaneView {
        pane: CakesPane::Special,
        title: "Special Cakes",
        description: "Anniversary, Wedding, Custom & more.",
        body: if open == Some(CakesPane::Special) {
            PaneBody::Open {
                heading: "Special Cakes — Designs",
                rows: special_rows(),
            }
        } else {
            PaneBody::Preview(preview_images(SPECIAL_PREVIEW))
        },
    };

    CakesScreen {
        panes: vec![regular, special],
    }
}

// ============================================================================
// Category list
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub title: String,
    pub description: String,
    pub rows: Vec<String>,
}

/// Item names of the category, in catalog order. `None` if it is not there.
pub fn category_listing(catalog: &MenuCatalog, id: &str) -> Option<CategoryListing> {
    let category = catalog.find_category(id)?;
    Some(CategoryListing {
        title: category.title.clone(),
        description: category.description.clone(),
        rows: category.items.iter().map(|i| i.name.clone()).collect(),
    })
}

// ============================================================================

pub fn render_menu(catalog: &MenuCatalog, view: &ActiveView, card_placeholder: &str) -> MenuScreen {
    match view {
        ActiveView::Grid => MenuScreen::Grid(grid_cards(catalog, card_placeholder)),
        ActiveView::Cakes { pane } => MenuScreen::Cakes(cakes_screen(catalog, *pane)),
        ActiveView::Category { id } => category_listing(catalog, id)
            .map(MenuScreen::Category)
            .unwrap_or(MenuScreen::Empty),
    }
}
