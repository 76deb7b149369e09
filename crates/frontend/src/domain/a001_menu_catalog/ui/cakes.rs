use crate::domain::a001_menu_catalog::navigation::NavigationAction;
use crate::domain::a001_menu_catalog::view_model::{CakesScreen, PaneBody, PaneRow, PaneView};
use crate::shared::image::FallbackImage;
use leptos::prelude::*;

/// Cakes drill-down: regular and special panes side by side.
#[component]
pub fn CakesDetail(screen: CakesScreen, on_action: Callback<NavigationAction>) -> impl IntoView {
    view! {
        <div class="menu-detail">
            <div class="menu-detail__header">
                <div>
                    <h3 class="menu-detail__title">"Cakes"</h3>
                    <p class="menu-detail__description">
                        "Choose Regular or Special Cakes — explore below!"
                    </p>
                </div>
                <button
                    class="button button--ghost"
                    on:click=move |_| on_action.run(NavigationAction::Back)
                >
                    "Back"
                </button>
            </div>
            <div class="cakes__panes">
                {screen
                    .panes
                    .into_iter()
                    .map(|pane| view! { <CakePane pane=pane on_action=on_action /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CakePane(pane: PaneView, on_action: Callback<NavigationAction>) -> impl IntoView {
    let toggle = NavigationAction::TogglePane(pane.pane);

    match pane.body {
        PaneBody::Preview(images) => view! {
            <div class="cake-pane">
                <button
                    class="cake-pane__trigger"
                    on:click=move |_| on_action.run(toggle.clone())
                >
                    <div>
                        <h3 class="cake-pane__title">{pane.title}</h3>
                        <p class="cake-pane__description">{pane.description}</p>
                    </div>
                    <span class="cake-pane__cta">"Explore"</span>
                </button>
                <div class="cake-pane__preview">
                    {images
                        .into_iter()
                        .map(|image| view! { <FallbackImage image=image alt=pane.title /> })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        PaneBody::Open { heading, rows } => view! {
            <div class="cake-pane cake-pane--open">
                <div class="cake-pane__header">
                    <h3 class="cake-pane__heading">{heading}</h3>
                    <button
                        class="button button--ghost"
                        on:click=move |_| on_action.run(toggle.clone())
                    >
                        "Close"
                    </button>
                </div>
                <div class="cake-pane__rows">
                    {rows.into_iter().map(pane_row).collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}

fn pane_row(row: PaneRow) -> impl IntoView {
    let alt = row.name.clone();
    view! {
        <div class="cake-pane__row">
            <div class="cake-pane__row-text">
                <div class="cake-pane__row-name">{row.name}</div>
                {row
                    .caption
                    .map(|sizes| view! { <div class="cake-pane__row-sizes">{format!("Sizes: {sizes}")}</div> })}
            </div>
            <FallbackImage image=row.image alt=alt class="cake-pane__row-image" />
        </div>
    }
}
