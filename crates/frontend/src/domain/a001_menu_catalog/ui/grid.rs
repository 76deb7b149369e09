use crate::domain::a001_menu_catalog::navigation::NavigationAction;
use crate::domain::a001_menu_catalog::view_model::CategoryCard;
use crate::shared::image::FallbackImage;
use leptos::prelude::*;

#[component]
pub fn CategoryGrid(
    cards: Vec<CategoryCard>,
    on_select: Callback<NavigationAction>,
) -> impl IntoView {
    view! {
        <div class="menu-grid">
            {cards
                .into_iter()
                .map(|card| {
                    let action = card.action.clone();
                    let alt = card.title.clone();
                    view! {
                        <button
                            class="menu-card"
                            data-key=card.key
                            on:click=move |_| on_select.run(action.clone())
                        >
                            <div class="menu-card__image">
                                <FallbackImage image=card.image alt=alt />
                            </div>
                            <div class="menu-card__body">
                                <div class="menu-card__title">{card.title}</div>
                                <div class="menu-card__caption">{card.caption}</div>
                                <span class="menu-card__cta">"View"</span>
                            </div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
