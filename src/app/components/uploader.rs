use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use web_sys::HtmlInputElement;

use crate::app::api;
use crate::app::components::feedback::FeedbackBar;
use crate::app::session::Session;
use crate::app::types::Feedback;

/// Holds at most one candidate file plus its tag text and submits a single
/// multipart upload. A confirmed upload bumps `set_refresh_tick` so the list
/// refetches.
#[component]
pub fn Uploader(set_refresh_tick: WriteSignal<u32>) -> impl IntoView {
    let session = expect_context::<Session>();

    let (selected_file, set_selected_file) = signal(None::<SendWrapper<web_sys::File>>);
    let (tags_input, set_tags_input) = signal(String::new());
    let (drag_active, set_drag_active) = signal(false);
    let (feedback, set_feedback) = signal(None::<Feedback>);
    let file_input_ref = NodeRef::<html::Input>::new();

    let selected_name = move || selected_file.with(|file| file.as_ref().map(|f| f.name()));
    let nothing_selected = move || selected_file.with(|file| file.is_none());

    let accept_file = move |file: web_sys::File| {
        // a new selection replaces the previous one wholesale
        set_selected_file.set(Some(SendWrapper::new(file)));
    };

    let handle_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file);
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) else {
            return;
        };
        if files.length() > 1 {
            // reject the whole drop; the previous selection stays untouched
            set_feedback.set(Some(Feedback::error("Please drag and drop only one file!")));
            return;
        }
        if let Some(file) = files.get(0) {
            accept_file(file);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let handle_upload = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            // the button is disabled without a selection; this guard keeps
            // the operation a no-op if it is reached anyway
            set_feedback.set(Some(Feedback::error("No file selected!")));
            return;
        };
        let tags = tags_input.get_untracked();
        spawn_local(async move {
            match api::upload_file(session, &file, &tags).await {
                Ok(()) => {
                    set_selected_file.set(None);
                    set_tags_input.set(String::new());
                    set_feedback.set(Some(Feedback::success("File uploaded successfully")));
                    set_refresh_tick.update(|tick| *tick += 1);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Upload] failed: {}", e).into());
                    set_feedback.set(Some(Feedback::error("File upload failed")));
                }
            }
        });
    };

    view! {
        <div class="uploader">
            <h2>"Drag and Drop File Upload"</h2>

            <div
                class="drop-zone"
                class:dragging=move || drag_active.get()
                on:dragover=move |ev| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragleave=move |_| set_drag_active.set(false)
                on:drop=handle_drop
                on:click=open_picker
            >
                {move || match selected_name() {
                    Some(name) => view! {
                        <p class="drop-zone-file">{format!("Selected File: {}", name)}</p>
                    }
                    .into_any(),
                    None => view! {
                        <p class="drop-zone-hint">
                            "Drag and drop a file here, or click to select a file"
                        </p>
                    }
                    .into_any(),
                }}
                <input
                    type="file"
                    class="file-input"
                    style="display: none"
                    node_ref=file_input_ref
                    on:change=handle_change
                />
            </div>

            <input
                type="text"
                class="tags-input"
                placeholder="Tags (comma-separated)"
                prop:value=tags_input
                disabled=nothing_selected
                on:input=move |ev| set_tags_input.set(event_target_value(&ev))
            />

            <button class="upload-button" disabled=nothing_selected on:click=handle_upload>
                "Upload"
            </button>

            <FeedbackBar feedback=feedback set_feedback=set_feedback/>
        </div>
    }
}
