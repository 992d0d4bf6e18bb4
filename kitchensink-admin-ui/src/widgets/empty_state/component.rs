use dioxus::prelude::*;

#[component]
pub fn EmptyState(
    title: String,
    description: String,
    action_label: Option<String>,
    on_action: Option<EventHandler<MouseEvent>>
) -> Element {
    rsx! {
        div { class: "alert alert-info empty-state",
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if let Some(label) = action_label {
                button {
                    class: "btn btn-link alert-link",
                    onclick: move |e| {
                        if let Some(handler) = &on_action {
                            handler.call(e);
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}
