//! Catalog loader
//!
//! Two independent GETs at startup: the primary catalog (required) and the
//! specials document (best-effort). Their outcomes are merged into a single
//! [`LoadState`] which is written once into [`CatalogStore`].

use crate::shared::api_utils::{fetch_json, LoadError};
use crate::shared::config::CatalogConfig;
use contracts::domain::a001_menu_catalog::aggregate::MenuCatalog;
use contracts::domain::a002_specials::aggregate::{SpecialEntry, SpecialsDocument};
use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Load state
// ============================================================================

/// Catalog plus specials, as displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedMenu {
    pub catalog: MenuCatalog,
    pub specials: Vec<SpecialEntry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(LoadedMenu),
    /// Catalog unavailable. Specials that did load are kept for the
    /// promotional panel, which does not depend on the catalog.
    Failed {
        error: LoadError,
        specials: Vec<SpecialEntry>,
    },
}

impl LoadState {
    pub fn catalog(&self) -> Option<&MenuCatalog> {
        match self {
            LoadState::Ready(loaded) => Some(&loaded.catalog),
            _ => None,
        }
    }

    /// Specials that loaded, whatever happened to the catalog.
    pub fn specials(&self) -> &[SpecialEntry] {
        match self {
            LoadState::Ready(loaded) => &loaded.specials,
            LoadState::Failed { specials, .. } => specials,
            LoadState::Pending => &[],
        }
    }

    /// State after a load finished with `outcome`.
    ///
    /// A ready catalog is never replaced by a failure; a pending outcome
    /// changes nothing.
    pub fn settle(self, outcome: LoadState) -> LoadState {
        match (self, outcome) {
            (current, LoadState::Pending) => current,
            (LoadState::Ready(loaded), LoadState::Failed { error, .. }) => {
                log::warn!("catalog reload failed, keeping loaded catalog: {error}");
                LoadState::Ready(loaded)
            }
            (_, outcome) => outcome,
        }
    }
}

/// Combine both fetch outcomes.
///
/// The primary result alone decides between `Ready` and `Failed`; a failed
/// specials fetch only empties the specials list, in either state.
pub fn merge_outcomes(
    primary: Result<MenuCatalog, LoadError>,
    specials: Result<SpecialsDocument, LoadError>,
) -> LoadState {
    let specials = specials
        .map(|doc| doc.items)
        .unwrap_or_else(|e| {
            log::warn!("specials unavailable, continuing without them: {e}");
            Vec::new()
        });

    match primary {
        Ok(catalog) => LoadState::Ready(LoadedMenu { catalog, specials }),
        Err(error) => {
            log::error!("catalog failed to load: {error}");
            LoadState::Failed { error, specials }
        }
    }
}

// ============================================================================
// Stale result guard
// ============================================================================

/// Generation counter guarding against results that arrive after the owner
/// was torn down or a newer load was started.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard(Arc<AtomicU64>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadGuard {
    /// Start a load; earlier tickets become stale.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

// ============================================================================
// Store
// ============================================================================

/// Shared, reactive load state. Provided through context by the app root.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub state: RwSignal<LoadState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LoadState::Pending),
        }
    }

    /// Fetch both documents and settle the state once they are in.
    pub fn load(&self, config: &CatalogConfig, guard: LoadGuard) {
        let ticket = guard.begin();
        let state = self.state;
        let menu_path = config.menu_path.clone();
        let specials_path = config.specials_path.clone();

        wasm_bindgen_futures::spawn_local(async move {
            log::debug!("loading {menu_path} and {specials_path}");
            let (primary, specials) = futures::join!(
                fetch_json::<MenuCatalog>(&menu_path),
                fetch_json::<SpecialsDocument>(&specials_path),
            );

            if !guard.is_current(ticket) {
                log::debug!("discarding stale catalog load");
                return;
            }

            let outcome = merge_outcomes(primary, specials);
            state.update(|current| *current = std::mem::take(current).settle(outcome));
        });
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pastries() -> MenuCatalog {
        serde_json::from_str(
            r#"{ "categories": [ { "id": "pastries", "title": "Pastries", "description": "",
                 "items": [ { "id": "croissant", "name": "Croissant", "variants": [] } ] } ] }"#,
        )
        .unwrap()
    }

    fn specials() -> SpecialsDocument {
        serde_json::from_str(r#"{ "items": [ { "id": "atta", "name": "Atta Biscuits", "price": 6 } ] }"#)
            .unwrap()
    }

    #[test]
    fn test_both_succeed() {
        let state = merge_outcomes(Ok(pastries()), Ok(specials()));
        assert_eq!(state.catalog(), Some(&pastries()));
        assert_eq!(state.specials().len(), 1);
        assert_eq!(state.specials()[0].name, "Atta Biscuits");
    }

    #[test]
    fn test_primary_failure_wins_regardless_of_specials() {
        let failed = merge_outcomes(Err(LoadError::Status(404)), Ok(specials()));
        assert!(matches!(
            failed,
            LoadState::Failed {
                error: LoadError::Status(404),
                ..
            }
        ));
        assert!(failed.catalog().is_none());

        let failed = merge_outcomes(
            Err(LoadError::Parse("expected value".into())),
            Err(LoadError::Network("offline".into())),
        );
        assert!(matches!(
            failed,
            LoadState::Failed {
                error: LoadError::Parse(_),
                ..
            }
        ));
        assert!(failed.catalog().is_none());
        assert!(failed.specials().is_empty());
    }

    #[test]
    fn test_specials_failure_degrades_to_empty() {
        let state = merge_outcomes(Ok(pastries()), Err(LoadError::Status(500)));
        assert_eq!(
            state,
            LoadState::Ready(LoadedMenu {
                catalog: pastries(),
                specials: Vec::new(),
            })
        );
    }

    #[test]
    fn test_specials_survive_catalog_failure() {
        let failed = merge_outcomes(Err(LoadError::Status(404)), Ok(specials()));
        assert_eq!(failed.specials().len(), 1);
        assert_eq!(failed.specials()[0].name, "Atta Biscuits");

        let settled = LoadState::Pending.settle(failed);
        assert_eq!(settled.specials().len(), 1);
    }

    #[test]
    fn test_failed_reload_keeps_ready_catalog() {
        let ready = merge_outcomes(Ok(pastries()), Ok(specials()));
        let after = ready
            .clone()
            .settle(LoadState::Failed {
                error: LoadError::Network("offline".into()),
                specials: Vec::new(),
            });
        assert_eq!(after, ready);
    }

    #[test]
    fn test_settle_from_pending() {
        let failed = LoadState::Pending.settle(merge_outcomes(
            Err(LoadError::Status(404)),
            Err(LoadError::Status(404)),
        ));
        assert_eq!(
            failed,
            LoadState::Failed {
                error: LoadError::Status(404),
                specials: Vec::new(),
            }
        );

        let ready = LoadState::Pending.settle(merge_outcomes(Ok(pastries()), Ok(specials())));
        assert!(ready.catalog().is_some());

        assert_eq!(LoadState::Pending.settle(LoadState::Pending), LoadState::Pending);
    }

    #[test]
    fn test_guard_discards_stale_tickets() {
        let guard = LoadGuard::default();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));

        guard.clone().invalidate();
        assert!(!guard.is_current(second));
    }
}
