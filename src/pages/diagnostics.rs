//! Connectivity check page: shows the resolved endpoints, the profile the
//! auth service returns, and lets the user force a token refresh.

use leptos::prelude::*;

use crate::app::BrowserServices;
use crate::state::auth::AuthState;

#[component]
pub fn TestPage() -> impl IntoView {
    let services = expect_context::<BrowserServices>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let profile = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let auth_base = services.config.auth_base.clone();
    let api_base = services.config.api_base.clone();

    {
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let fetched = services.credentials.profile().await;
            profile.set(fetched.0.to_string());
        });
    }

    let on_refresh = move |_: leptos::ev::MouseEvent| {
        let services = services.clone();
        status.set("Refreshing...".to_owned());
        leptos::task::spawn_local(async move {
            match services.credentials.refresh().await {
                Ok(_) => status.set("Access token refreshed.".to_owned()),
                Err(e) => {
                    auth.set(AuthState::from_session(&services.store.get()));
                    status.set(format!("Refresh failed, signed out: {e}"));
                }
            }
        });
    };

    view! {
        <div class="test-page">
            <h1>"Connection test"</h1>
            <dl>
                <dt>"Auth service"</dt>
                <dd>{auth_base}</dd>
                <dt>"Resource service"</dt>
                <dd>{api_base}</dd>
                <dt>"Profile"</dt>
                <dd><code>{move || profile.get()}</code></dd>
            </dl>
            <button on:click=on_refresh>"Refresh token"</button>
            <Show when=move || !status.get().is_empty()>
                <p class="test-page__status">{move || status.get()}</p>
            </Show>
        </div>
    }
}
