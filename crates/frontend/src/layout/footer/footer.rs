use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__brand">
                <img src="/images/logo.png" alt="logo" class="footer__logo" />
                <div>
                    <p class="footer__name">"Red Moon Bakery & Cafe"</p>
                    <p class="footer__tagline">"Handcrafted goodness in Brampton"</p>
                </div>
            </div>
            <div class="footer__copyright">
                {format!("© {year} Red Moon Bakery & Cafe. All rights reserved.")}
            </div>
        </footer>
    }
}
