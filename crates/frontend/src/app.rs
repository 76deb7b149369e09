use crate::domain::a001_menu_catalog::loader::{CatalogStore, LoadGuard};
use crate::domain::a001_menu_catalog::ui::MenuSection;
use crate::domain::a002_specials::ui::panel::SpecialsPanel;
use crate::layout::header::hero::Hero;
use crate::layout::sections::about::AboutSection;
use crate::layout::sections::contact::ContactSection;
use crate::layout::Shell;
use crate::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();

    // One-shot load of both documents; results arriving after teardown are dropped.
    let store = CatalogStore::new();
    let guard = LoadGuard::default();
    store.load(&config.catalog, guard.clone());
    on_cleanup(move || guard.invalidate());

    provide_context(config);
    provide_context(store);

    view! {
        <Shell>
            <Hero />
            <MenuSection />
            <SpecialsPanel />
            <AboutSection />
            <ContactSection />
        </Shell>
    }
}
