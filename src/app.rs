use leptos::prelude::*;

pub mod api;
pub mod components;
pub mod session;
pub mod types;
pub mod utils;

use components::file_list::FileList;
use components::login::LoginPage;
use components::register::RegisterPage;
use components::uploader::Uploader;
use session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Dashboard,
}

#[component]
pub fn App() -> impl IntoView {
    let session = Session::new();
    provide_context(session);

    // a missing token is an unauthenticated state, not an error
    let initial = if session.is_authenticated() { View::Dashboard } else { View::Login };
    let (view, set_view) = signal(initial);

    view! {
        <div class="app">
            {move || match view.get() {
                View::Login => view! { <LoginPage set_view=set_view/> }.into_any(),
                View::Register => view! { <RegisterPage set_view=set_view/> }.into_any(),
                View::Dashboard => view! { <Dashboard set_view=set_view/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Dashboard(set_view: WriteSignal<View>) -> impl IntoView {
    let session = expect_context::<Session>();

    // Uploader and FileList are independent siblings; a confirmed upload
    // bumps this tick and the list's fetch effect picks it up.
    let (refresh_tick, set_refresh_tick) = signal(0u32);

    Effect::new(move |_| {
        if !session.is_authenticated() {
            set_view.set(View::Login);
        }
    });

    let handle_logout = move |_| {
        session.clear();
        set_view.set(View::Login);
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"File Management Dashboard"</h1>
                <button class="logout-button" on:click=handle_logout>"Logout"</button>
            </header>
            <Uploader set_refresh_tick=set_refresh_tick/>
            <FileList refresh_tick=refresh_tick/>
        </div>
    }
}
