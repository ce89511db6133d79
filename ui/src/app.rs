use leptos::*;
use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use crate::routes::RoutesMenu;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::Title;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="Community Sports Hub"/>
      <Router>
        <main class="min-h-screen flex items-center justify-center p-4">
          <RoutesMenu/>
        </main>

        <footer class="py-6 text-center text-sm opacity-70">
          <p>"© 2025 Community Sports Hub"</p>
        </footer>
      </Router>
    }
}
