use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header id="hero" class="hero">
            <div class="hero__frame">
                <img src="/images/Hero.jpg" alt="bakery hero" class="hero__image" />
                <div class="hero__overlay">
                    <h1 class="hero__title">"Red Moon Bakery & Cafe"</h1>
                    <p class="hero__tagline">
                        "Where every bite tells a story — handcrafted cakes, flaky pastries, and warm smiles."
                    </p>
                    <div class="hero__actions">
                        <a href="#menu" class="button button--primary">"See Menu"</a>
                        <a href="#contact" class="button button--secondary">"Contact & Location"</a>
                    </div>
                </div>
            </div>
        </header>
    }
}
