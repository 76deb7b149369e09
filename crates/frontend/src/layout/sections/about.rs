use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="about__title">"About Redmoon Bakery & Café"</h2>
            <p class="about__tagline">
                "Eggless cakes, desi flavours, and a growing legacy in the heart of Brampton."
            </p>
            <div class="about__card">
                <p>
                    "Redmoon Bakery & Café is a trusted destination in Brampton for fresh, "
                    "high-quality eggless baked goods and authentic Indian flavours, with fast, "
                    "same-day customizations on every cake."
                </p>
                <p>
                    "Find us at Karol Bagh Plaza, 1098 Peter Robertson Blvd, at the Torbram and "
                    "Peter Robertson intersection. We deliver throughout the GTA."
                </p>
                <p>
                    "Along with our signature cakes we bake patties, homemade desi biscuits and a "
                    "full spread of Indian street food."
                </p>
            </div>
        </section>
    }
}
