use leptos::prelude::*;

/// In-page anchors; the browser does the scrolling.
const LINKS: &[(&str, &str)] = &[
    ("#hero", "Home"),
    ("#menu", "Menu"),
    ("#specials", "Specials"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header data-zone="header" class="navbar">
            <div class="navbar__content">
                <img src="/images/logo.png" alt="Red Moon Bakery Logo" class="navbar__logo" />
                <nav class="navbar__links">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="navbar__link">{*label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
