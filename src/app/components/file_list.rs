use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::use_debounce_fn_with_arg;

use crate::app::api;
use crate::app::components::feedback::FeedbackBar;
use crate::app::session::Session;
use crate::app::types::{type_for_tab, Feedback, FileRecord, TAB_LABELS};
use crate::app::utils::{copy_to_clipboard, open_in_new_tab};

const FILTER_DEBOUNCE_MS: f64 = 300.0;

/// Owns the file list for the current (tab, tag filter) pair: fetches it
/// from the server, lets the user reorder it locally via drag-and-drop, and
/// dispatches the per-row actions. The local order is a presentation overlay
/// only; every successful fetch replaces the list wholesale.
#[component]
pub fn FileList(refresh_tick: ReadSignal<u32>) -> impl IntoView {
    let session = expect_context::<Session>();

    let (files, set_files) = signal(Vec::<FileRecord>::new());
    let (active_tab, set_active_tab) = signal(0usize);
    let (filter_input, set_filter_input) = signal(String::new());
    let (tag_filter, set_tag_filter) = signal(String::new());
    let (dragged_item, set_dragged_item) = signal(None::<FileRecord>);
    let (feedback, set_feedback) = signal(None::<Feedback>);

    let apply_filter = use_debounce_fn_with_arg(
        move |value: String| set_tag_filter.set(value),
        FILTER_DEBOUNCE_MS,
    );

    // Refetch whenever the tab, the debounced tag filter, or the shared
    // refresh tick changes. The last response to resolve wins.
    Effect::new(move |_| {
        let tab = active_tab.get();
        let tags = tag_filter.get();
        refresh_tick.get();
        spawn_local(async move {
            match api::filter_files(session, type_for_tab(tab), &tags).await {
                Ok(records) => {
                    web_sys::console::log_1(
                        &format!("[Files] loaded {} records", records.len()).into(),
                    );
                    set_files.set(records);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Files] fetch failed: {}", e).into());
                    set_feedback.set(Some(Feedback::error("Failed to fetch files.")));
                }
            }
        });
    });

    let handle_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_file(session, &id).await {
                Ok(()) => {
                    // remove by id, not by position: a manual reorder may
                    // have moved the row since it was rendered
                    set_files.update(|records| {
                        leptos_listorder::remove(records, |r| r.id.clone(), &id);
                    });
                    set_feedback.set(Some(Feedback::success("File deleted successfully.")));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Files] delete failed: {}", e).into());
                    set_feedback.set(Some(Feedback::error("Failed to delete file.")));
                }
            }
        });
    };

    let handle_view = move |record: FileRecord| {
        spawn_local(async move {
            let counted = api::register_view(session, &record.id).await;
            if let Err(e) = &counted {
                web_sys::console::error_1(&format!("[Files] view count failed: {}", e).into());
                set_feedback.set(Some(Feedback::error("Failed to update view count.")));
            }
            // opening is best-effort either way
            open_in_new_tab(&api::file_url(&record.filename));
            if counted.is_ok() {
                let tab = active_tab.get_untracked();
                let tags = tag_filter.get_untracked();
                match api::filter_files(session, type_for_tab(tab), &tags).await {
                    Ok(records) => set_files.set(records),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[Files] fetch failed: {}", e).into());
                        set_feedback.set(Some(Feedback::error("Failed to fetch files.")));
                    }
                }
            }
        });
    };

    let handle_share = move |id: String| {
        spawn_local(async move {
            match api::share_file(session, &id).await {
                Ok(link) => {
                    if !copy_to_clipboard(&link).await {
                        web_sys::console::warn_1(&"[Share] clipboard write failed".into());
                    }
                    set_feedback.set(Some(Feedback::info("Shareable link copied to clipboard!")));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Share] link failed: {}", e).into());
                    set_feedback.set(Some(Feedback::error("Failed to generate shareable link.")));
                }
            }
        });
    };

    let handle_drop_on = move |target: FileRecord| {
        if let Some(dragged) = dragged_item.get_untracked() {
            if dragged.id != target.id {
                set_files.update(|records| {
                    leptos_listorder::reorder(records, |r| r.id.clone(), &dragged.id, &target.id);
                });
                set_feedback.set(Some(Feedback::success("Files reordered successfully.")));
            }
        }
        // the dragged item always clears, whether or not anything moved
        leptos_listorder::end_drag(set_dragged_item);
    };

    view! {
        <div class="file-list">
            <h2>"Uploaded Files"</h2>

            <div class="tabs">
                {TAB_LABELS
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || active_tab.get() == index
                                on:click=move |_| set_active_tab.set(index)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <input
                type="text"
                class="tag-filter"
                placeholder="Filter by Tags (comma-separated)"
                prop:value=filter_input
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_filter_input.set(value.clone());
                    apply_filter(value);
                }
            />

            <ul class="file-rows">
                <For
                    each=move || files.get()
                    key=|record| record.id.clone()
                    children=move |record| {
                        let record_for_drag = record.clone();
                        let record_for_drop = record.clone();
                        let record_for_view = record.clone();
                        let id_for_delete = record.id.clone();
                        let id_for_share = record.id.clone();
                        let summary = format!(
                            " - Views: {} - Tags: {}",
                            record.views,
                            record.tags.join(", ")
                        );
                        view! {
                            <li
                                class="file-row"
                                draggable="true"
                                on:dragstart=move |_| {
                                    set_dragged_item.set(Some(record_for_drag.clone()))
                                }
                                on:dragover=move |ev| ev.prevent_default()
                                on:drop=move |ev| {
                                    ev.prevent_default();
                                    handle_drop_on(record_for_drop.clone());
                                }
                            >
                                <span class="file-summary">
                                    <strong>{record.filename.clone()}</strong>
                                    {summary}
                                </span>
                                <button
                                    class="view-button"
                                    on:click=move |_| handle_view(record_for_view.clone())
                                >
                                    "View"
                                </button>
                                <button
                                    class="delete-button"
                                    on:click=move |_| handle_delete(id_for_delete.clone())
                                >
                                    "Delete"
                                </button>
                                <button
                                    class="share-button"
                                    on:click=move |_| handle_share(id_for_share.clone())
                                >
                                    "Share"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || files.with(|records| records.is_empty())>
                <p class="empty-state">"No files found for the selected type and tags."</p>
            </Show>

            <FeedbackBar feedback=feedback set_feedback=set_feedback/>
        </div>
    }
}
