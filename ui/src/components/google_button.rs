use leptos::html;
use leptos::prelude::*;

use crate::browser::{CREDENTIAL_CALLBACK, render_google_button};

/// Google sign-in button. Rendered through the GSI library when it is already
/// loaded; otherwise the `g_id_*` markup is left for the script to pick up
/// once it finishes loading. The page registers the window callback.
#[component]
pub fn GoogleButton(client_id: String) -> impl IntoView {
    let host: NodeRef<html::Div> = NodeRef::new();
    let widget_client_id = client_id.clone();
    Effect::new(move |_| {
        if let Some(el) = host.get() {
            if !render_google_button(&widget_client_id, &el) {
                log::debug!("gsi not ready, leaving declarative markup");
            }
        }
    });

    view! {
        <div class="google-signin flex justify-center">
            <div
                id="g_id_onload"
                data-client_id=client_id
                data-callback=CREDENTIAL_CALLBACK
                data-auto_prompt="false"
            ></div>
            <div
                node_ref=host
                class="g_id_signin"
                data-type="standard"
                data-size="large"
                data-text="sign_in_with"
                data-shape="pill"
            ></div>
        </div>
    }
}
