use leptos::prelude::AriaAttributes;
use leptos::prelude::Callable;
use leptos::prelude::Callback;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Get;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::{IntoView, component, view};

use crate::portal::{Intent, PortalView, Theme};

#[component]
pub fn ThemeToggle(state: RwSignal<PortalView>, on_intent: Callback<Intent>) -> impl IntoView {
    let theme = move || state.get().theme;

    view! {
        <button
            class="theme-toggle fixed top-4 right-4 h-10 w-10 rounded-full border text-xl"
            title=move || match theme() {
                Theme::Light => "Switch to dark mode",
                Theme::Dark => "Switch to light mode",
            }
            aria-label="Toggle theme"
            on:click=move |_| on_intent.run(Intent::ToggleTheme)
        >
            { move || theme().indicator() }
        </button>
    }
}
