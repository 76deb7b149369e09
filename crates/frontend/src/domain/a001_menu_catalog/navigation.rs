//! Catalog navigation state machine.
//!
//! ```text
//!            OpenCakes                 TogglePane(p)
//!   Grid ─────────────────► Cakes{pane} ◄──────────┐
//!    ▲  ◄───────────────────     │ └───────────────┘
//!    │          Back             │
//!    │  OpenCategory(id)         │
//!    └──────────► Category{id} ──┘ Back -> Grid
//! ```
//!
//! There is no edge between `Cakes` and `Category`; every cross-view move
//! passes through `Grid`. The view is plain data: it is owned by a
//! [`MenuNavigator`] and handed to the renderers by value.

use contracts::domain::a001_menu_catalog::aggregate::{MenuCatalog, CAKES_CATEGORY_ID};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Sub-pane of the cakes view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CakesPane {
    Regular,
    Special,
}

/// The single view currently displayed by the catalog section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActiveView {
    /// Category grid
    #[default]
    Grid,
    /// Cakes drill-down with at most one open pane
    Cakes { pane: Option<CakesPane> },
    /// Generic category detail
    Category { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    OpenCakes,
    OpenCategory(String),
    TogglePane(CakesPane),
    Back,
}

impl ActiveView {
    pub fn is_grid(&self) -> bool {
        matches!(self, ActiveView::Grid)
    }

    /// Next view for `action`, or `None` when the action is not valid here.
    ///
    /// `catalog` is the loaded catalog, if any; a category can only be
    /// opened when it is present in it.
    pub fn apply(
        &self,
        action: &NavigationAction,
        catalog: Option<&MenuCatalog>,
    ) -> Option<ActiveView> {
        match (self, action) {
            (ActiveView::Grid, NavigationAction::OpenCakes) => {
                Some(ActiveView::Cakes { pane: None })
            }
            (ActiveView::Grid, NavigationAction::OpenCategory(id)) => {
                if id == CAKES_CATEGORY_ID {
                    return None;
                }
                catalog
                    .filter(|c| c.contains_category(id))
                    .map(|_| ActiveView::Category { id: id.clone() })
            }
            (ActiveView::Cakes { pane }, NavigationAction::TogglePane(target)) => {
                let next = if *pane == Some(*target) {
                    None
                } else {
                    Some(*target)
                };
                Some(ActiveView::Cakes { pane: next })
            }
            (ActiveView::Cakes { .. } | ActiveView::Category { .. }, NavigationAction::Back) => {
                Some(ActiveView::Grid)
            }
            _ => None,
        }
    }
}

/// Result of a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Left the grid for a detail view
    Entered,
    /// Pane toggle or back to the grid
    Changed,
    Ignored,
}

/// Reactive owner of the active view.
#[derive(Clone, Copy)]
pub struct MenuNavigator {
    pub view: RwSignal<ActiveView>,
}

impl MenuNavigator {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ActiveView::default()),
        }
    }

    /// Apply `action` as one state replacement.
    pub fn dispatch(
        &self,
        action: NavigationAction,
        catalog: Option<&MenuCatalog>,
    ) -> DispatchOutcome {
        let current = self.view.get_untracked();
        let Some(next) = current.apply(&action, catalog) else {
            log::warn!("navigation: {action:?} ignored in {current:?}");
            return DispatchOutcome::Ignored;
        };

        log::debug!("navigation: {current:?} -> {next:?}");
        let outcome = if current.is_grid() && !next.is_grid() {
            DispatchOutcome::Entered
        } else {
            DispatchOutcome::Changed
        };
        self.view.set(next);
        outcome
    }
}

impl Default for MenuNavigator {
    fn default() -> Self {
        Self::new()
    }
}
