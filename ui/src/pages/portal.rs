use leptos::prelude::*;

use crate::browser;
use crate::components::login_form::LoginForm;
use crate::components::role_cards::RoleCards;
use crate::components::theme_toggle::ThemeToggle;
use crate::portal::{
    BrowserStore, Intent, PlaceholderIdentity, Portal, Screen, Transition,
};

#[component]
fn SignedInNotice(on_intent: Callback<Intent>) -> impl IntoView {
    view! {
        <p class="session-notice mb-6 text-sm">
            "You already have a session on this device. "
            <button
                class="underline underline-offset-4"
                on:click=move |_| on_intent.run(Intent::SignOut)
            >
                "Sign out"
            </button>
        </p>
    }
}

#[component]
pub fn PortalPage() -> impl IntoView {
    let portal = StoredValue::new(Portal::load(BrowserStore, PlaceholderIdentity::default()));
    let client_id = portal.with_value(|p| p.client_id().to_owned());

    let state = RwSignal::new(portal.with_value(|p| p.view()));
    let error = RwSignal::new(None::<String>);

    // every control funnels through here
    let on_intent = Callback::new(move |intent: Intent| {
        let Some(result) = portal.try_update_value(|p| p.dispatch(intent)) else {
            return;
        };
        match result {
            Ok(Transition::Stay) => error.set(None),
            Ok(Transition::Navigate(dest)) => browser::navigate(dest),
            Err(e) => {
                let msg = e.to_string();
                browser::alert(&msg);
                error.set(Some(msg));
            }
        }
        if let Some(next) = portal.try_with_value(|p| p.view()) {
            state.set(next);
        }
    });

    // once per page; the login form mounts and unmounts freely
    browser::register_credential_callback(move |credential| {
        on_intent.run(Intent::Credential(credential));
    });

    Effect::new(move |_| browser::apply_theme(state.get().theme));

    view! {
        <ThemeToggle state on_intent />

        <div class="portal-card mx-auto max-w-2xl p-10 rounded-2xl shadow-sm">
            <header class="mb-8 text-center">
                <h1 class="text-4xl font-extrabold">"Community Sports Hub"</h1>
                <p class="opacity-80">"Courts, fields and pools for the whole neighbourhood."</p>
            </header>

            <Show when=move || state.get().signed_in>
                <SignedInNotice on_intent />
            </Show>

            <Show
                when=move || state.get().screen == Screen::LoginForm
                fallback=move || view! { <RoleCards on_intent /> }
            >
                <LoginForm state error on_intent client_id=client_id.clone() />
            </Show>
        </div>
    }
}
