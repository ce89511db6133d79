use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::google_button::GoogleButton;
use crate::portal::{Intent, PortalView};

#[component]
pub fn LoginForm(
    state: RwSignal<PortalView>,
    error: RwSignal<Option<String>>,
    on_intent: Callback<Intent>,
    client_id: String,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let role_label = move || state.get().role_label().unwrap_or_default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_intent.run(Intent::Submit {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <section class="login-form">
            <button
                class="mb-4 text-sm underline-offset-4 hover:underline"
                on:click=move |_| on_intent.run(Intent::GoBack)
            >
                "← Back to roles"
            </button>

            <h2 class="text-2xl font-bold mb-1">"Sign in"</h2>
            <p class="mb-6 opacity-80">
                "Signing in as "
                <strong class="role-label">{ role_label }</strong>
            </p>

            <form class="flex flex-col gap-4" on:submit=on_submit>
                <label class="flex flex-col gap-1">
                    <span class="text-sm">"Email"</span>
                    <input
                        class="input rounded-lg border px-3 py-2"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="flex flex-col gap-1">
                    <span class="text-sm">"Password"</span>
                    <input
                        class="input rounded-lg border px-3 py-2"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="login-error text-sm">{ move || error.get().unwrap_or_default() }</p>
                </Show>

                <button class="btn-primary rounded-full px-6 py-3 font-medium" type="submit">
                    "Log in"
                </button>
            </form>

            <div class="divider my-6 text-center text-sm opacity-70">"or"</div>

            <GoogleButton client_id />
        </section>
    }
}
