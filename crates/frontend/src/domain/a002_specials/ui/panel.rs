use crate::domain::a001_menu_catalog::loader::{CatalogStore, LoadState};
use crate::shared::image::{FallbackImage, ResolvedImage};
use leptos::prelude::*;

const PANEL_IMAGE: &str = "/images/desi-biscuits.jpg";
const PANEL_PLACEHOLDER: &str = "/images/placeholder-category.jpg";

/// Promotional panel (`#specials`) fed by the specials document.
///
/// Reads the specials of the load state whether or not the catalog loaded;
/// catalog failures are reported by the menu section only. An unavailable
/// feed arrives as an empty list and leaves just the empty anchor section.
#[component]
pub fn SpecialsPanel() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");

    let content = move || {
        store.state.with(|state| match state {
            LoadState::Pending => view! {
                <p class="specials__status">"Loading specials..."</p>
            }
            .into_any(),
            state if !state.specials().is_empty() => {
                let rows = state
                    .specials()
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="specials__row">
                                <span>{entry.name.clone()}</span>
                                <span class="specials__price">{entry.display_price()}</span>
                            </li>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="specials__panel">
                        <div class="specials__image">
                            <FallbackImage
                                image=ResolvedImage::new(PANEL_IMAGE, PANEL_PLACEHOLDER)
                                alt="Desi Biscuits"
                            />
                        </div>
                        <div class="specials__content">
                            <h2 class="specials__title">"Specials of Red Moon Bakery"</h2>
                            <p class="specials__intro">
                                "Our Desi Biscuits are made from atta, shakkar, and pure desi ghee — "
                                "giving you that warm, home-like taste of tradition."
                            </p>
                            <div class="specials__card">
                                <h3>"Our Biscuit Collection"</h3>
                                <ul class="specials__list">{rows}</ul>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }
            _ => ().into_any(),
        })
    };

    view! {
        <section id="specials" class="specials">
            {content}
        </section>
    }
}
