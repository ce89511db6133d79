use leptos::prelude::Callable;
use leptos::prelude::Callback;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::OnAttribute;
use leptos::{IntoView, component, view};

use crate::portal::{Intent, Role};

pub trait RoleTile {
    fn card(self, on_intent: Callback<Intent>) -> impl IntoView;
}

impl RoleTile for Role {
    fn card(self, on_intent: Callback<Intent>) -> impl IntoView {
        view! {
            <li>
                <button
                    class="role-card w-full p-6 rounded-xl border text-left transition hover:-translate-y-1"
                    on:click=move |_| on_intent.run(Intent::SelectRole(self))
                >
                    <span class="text-4xl block mb-3">{ self.icon() }</span>
                    <h3 class="font-semibold text-lg mb-1">{ self.label() }</h3>
                    <p class="text-sm opacity-80">{ self.blurb() }</p>
                </button>
            </li>
        }
    }
}

#[component]
pub fn RoleCards(on_intent: Callback<Intent>) -> impl IntoView {
    view! {
        <section class="role-selection">
            <h2 class="text-2xl font-bold mb-2">"Who are you?"</h2>
            <p class="mb-6 opacity-80">"Choose your role to continue."</p>

            <ul class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                { Role::Resident      .card(on_intent) }
                { Role::FacilityStaff .card(on_intent) }
                { Role::Admin         .card(on_intent) }
            </ul>
        </section>
    }
}
