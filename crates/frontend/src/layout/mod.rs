pub mod footer;
pub mod header;
pub mod sections;

use leptos::prelude::*;

/// Page shell: fixed navbar, page sections, footer.
///
/// ```text
/// +------------------------------------------+
/// |              Navbar                       |
/// +------------------------------------------+
/// |  main: hero, menu, specials, about, ...  |
/// +------------------------------------------+
/// |              Footer                       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <header::navbar::Navbar />
            <main>{children()}</main>
            <footer::footer::Footer />
        </div>
    }
}
