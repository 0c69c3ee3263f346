use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::api::{self, ApiError};
use crate::app::View;

#[component]
pub fn RegisterPage(set_view: WriteSignal<View>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let user = username.get_untracked();
        let pass = password.get_untracked();
        spawn_local(async move {
            match api::register(&user, &pass).await {
                Ok(()) => set_view.set(View::Login),
                Err(ApiError::Auth(message)) => set_error.set(Some(message)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Auth] register failed: {}", e).into());
                    set_error.set(Some("An error occurred during registration".to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            {move || error.get().map(|message| view! { <p class="auth-error">{message}</p> })}
            <form on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Username"
                    required=true
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Register"</button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <a class="auth-link" on:click=move |_| set_view.set(View::Login)>
                    "Login"
                </a>
            </p>
        </div>
    }
}
