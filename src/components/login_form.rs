//! Login Form Component
//!
//! Username/password form with inline field errors and a single generic
//! failure message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{FieldErrors, LoginFlow, LoginOutcome};

use crate::gateway::TauriGateway;
use crate::session::LocalStorageSession;
use crate::store::{store_sign_in, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let flow = LoginFlow::new(TauriGateway);

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (error_message, set_error_message) = signal::<Option<&'static str>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        set_submitting.set(true);

        spawn_local(async move {
            let outcome = flow.submit(&user, &pass).await;
            set_field_errors.set(outcome.field_errors());
            set_error_message.set(outcome.message());
            set_submitting.set(false);

            // Navigating unmounts this form, so it goes last
            if let LoginOutcome::Authenticated(session) = outcome {
                LocalStorageSession.store(&session);
                store_sign_in(&store, &session);
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Login"</h1>
            <form class="login-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().username.map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
                <div class="form-field">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().password.map(|msg| view! { <p class="field-error">{msg}</p> })}
                </div>
                <button type="submit" disabled=move || submitting.get()>"Login"</button>
                {move || error_message.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            </form>
        </div>
    }
}
