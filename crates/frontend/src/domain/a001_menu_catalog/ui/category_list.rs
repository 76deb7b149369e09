use crate::domain::a001_menu_catalog::navigation::NavigationAction;
use crate::domain::a001_menu_catalog::view_model::CategoryListing;
use leptos::prelude::*;

/// Item names of one category, no pagination.
#[component]
pub fn CategoryListView(
    listing: CategoryListing,
    on_back: Callback<NavigationAction>,
) -> impl IntoView {
    view! {
        <div class="menu-detail">
            <div class="menu-detail__header">
                <div>
                    <h3 class="menu-detail__title">{listing.title}</h3>
                    <p class="menu-detail__description">{listing.description}</p>
                </div>
                <button
                    class="button button--ghost"
                    on:click=move |_| on_back.run(NavigationAction::Back)
                >
                    "Back"
                </button>
            </div>
            <div class="menu-detail__list">
                {listing
                    .rows
                    .into_iter()
                    .map(|name| view! { <div class="menu-detail__row">{name}</div> })
                    .collect_view()}
            </div>
        </div>
    }
}
