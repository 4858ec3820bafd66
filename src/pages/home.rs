//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Campus Portal"</h1>
            <p>"Browse colleges, acceptance rates, and costs of attendance."</p>
            <Show
                when=move || auth.get().authenticated
                fallback=|| view! { <A href="/login">"Sign in to browse colleges"</A> }
            >
                <A href="/colleges">"Browse colleges"</A>
            </Show>
        </div>
    }
}
