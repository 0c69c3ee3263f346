use leptos::prelude::*;

use crate::app::types::Feedback;

/// Renders the owning component's single feedback slot with an explicit
/// dismiss control. Setting a new feedback replaces whatever is shown.
#[component]
pub fn FeedbackBar(
    feedback: ReadSignal<Option<Feedback>>,
    set_feedback: WriteSignal<Option<Feedback>>,
) -> impl IntoView {
    view! {
        {move || {
            feedback.get().map(|fb| {
                let class = format!("feedback feedback-{}", fb.severity.as_class());
                let message = fb.message;
                view! {
                    <div class=class>
                        <span class="feedback-message">{message}</span>
                        <button class="feedback-dismiss" on:click=move |_| set_feedback.set(None)>
                            "\u{00d7}"
                        </button>
                    </div>
                }
            })
        }}
    }
}
