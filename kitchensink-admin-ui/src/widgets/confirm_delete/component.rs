use dioxus::prelude::*;

/// Inline confirmation shown on a member card before it is deleted.
#[component]
pub fn ConfirmDelete(
    name: String,
    on_confirm: EventHandler<MouseEvent>,
    on_cancel: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "alert alert-warning confirm-delete", role: "alert",
            p { "Are you sure you want to delete {name}?" }
            div { class: "d-flex justify-content-between",
                button {
                    class: "btn btn-sm btn-danger",
                    onclick: move |e| on_confirm.call(e),
                    "Yes, delete"
                }
                button {
                    class: "btn btn-sm btn-secondary",
                    onclick: move |e| on_cancel.call(e),
                    "Keep"
                }
            }
        }
    }
}
