pub mod cakes;
pub mod category_list;
pub mod grid;

use self::cakes::CakesDetail;
use self::category_list::CategoryListView;
use self::grid::CategoryGrid;
use crate::domain::a001_menu_catalog::loader::{CatalogStore, LoadState};
use crate::domain::a001_menu_catalog::navigation::{DispatchOutcome, MenuNavigator, NavigationAction};
use crate::domain::a001_menu_catalog::view_model::{render_menu, MenuScreen};
use crate::shared::config::SiteConfig;
use crate::shared::dom::scroll_into_view;
use leptos::prelude::*;

/// Catalog browser section (`#menu`).
///
/// Owns the navigation state; the catalog itself comes from the
/// [`CatalogStore`] in context and is only read here.
#[component]
pub fn MenuSection() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let navigator = MenuNavigator::new();

    let section_id = config.catalog.section_id.clone();
    let card_placeholder = config.catalog.card_placeholder.clone();

    let on_action = Callback::new({
        let section_id = section_id.clone();
        move |action: NavigationAction| {
            let outcome = store
                .state
                .with_untracked(|state| navigator.dispatch(action, state.catalog()));
            if outcome == DispatchOutcome::Entered {
                scroll_into_view(&section_id);
            }
        }
    });

    let content = move || {
        store.state.with(|state| match state {
            LoadState::Pending => view! {
                <div class="menu__status">"Loading menu..."</div>
            }
            .into_any(),
            LoadState::Failed { error, .. } => view! {
                <div class="menu__status menu__status--error">
                    {format!("Error loading menu: {error}")}
                </div>
            }
            .into_any(),
            LoadState::Ready(loaded) => {
                let view = navigator.view.get();
                match render_menu(&loaded.catalog, &view, &card_placeholder) {
                    MenuScreen::Grid(cards) => view! {
                        <CategoryGrid cards=cards on_select=on_action />
                    }
                    .into_any(),
                    MenuScreen::Cakes(screen) => view! {
                        <CakesDetail screen=screen on_action=on_action />
                    }
                    .into_any(),
                    MenuScreen::Category(listing) => view! {
                        <CategoryListView listing=listing on_back=on_action />
                    }
                    .into_any(),
                    MenuScreen::Empty => ().into_any(),
                }
            }
        })
    };

    view! {
        <section id=section_id class="menu">
            <div class="menu__container">
                <h1 class="menu__title">"Our Menu"</h1>
                <p class="menu__intro">
                    "Explore our handcrafted delights. Tap a category to view items."
                </p>
                {content}
            </div>
        </section>
    }
}
