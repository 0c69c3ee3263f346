use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::api::{self, ApiError};
use crate::app::session::Session;
use crate::app::View;

#[component]
pub fn LoginPage(set_view: WriteSignal<View>) -> impl IntoView {
    let session = expect_context::<Session>();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let user = username.get_untracked();
        let pass = password.get_untracked();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(token) => {
                    session.store(&token);
                    set_view.set(View::Dashboard);
                }
                Err(ApiError::Auth(message)) => set_error.set(Some(message)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Auth] login failed: {}", e).into());
                    set_error.set(Some("An error occurred during login".to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Login"</h1>
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
                <button type="submit">"Login"</button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <a class="auth-link" on:click=move |_| set_view.set(View::Register)>
                    "Sign Up"
                </a>
            </p>
        </div>
    }
}
