use leptos::prelude::*;

const MAPS_URL: &str = "https://www.google.com/maps?q=Red+Moon+Bakery,+1098+Peter+Robertson+Blvd+%2323,+Brampton,+ON+L6R+1G6";
const INSTAGRAM_URL: &str = "https://www.instagram.com/redmoonbrampton";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="contact__info">
                <h2 class="contact__title">"Contact & Location"</h2>
                <p>"Phone: " <a href="tel:+19058740003">"(905) 874-0003"</a></p>
                <p>"Email: " <a href="mailto:info@redmoonbakery.ca">"info@redmoonbakery.ca"</a></p>
                <p>"Address: 1098 Peter Robertson Blvd #23, Brampton, ON L6R 1G6"</p>
                <p>
                    "Follow us: "
                    <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer">
                        "@redmoonbakerycanada"
                    </a>
                </p>
                <a href=MAPS_URL target="_blank" rel="noopener noreferrer" class="button button--primary">
                    "View on Google Maps"
                </a>
            </div>
        </section>
    }
}
