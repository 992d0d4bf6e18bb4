use dioxus::prelude::*;
use kitchensink::MemberClient;
use kitchensink::views::{DeleteOutcome, ListState, MemberListView};

use crate::Route;
use crate::widgets::confirm_delete::ConfirmDelete;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::spinner::Spinner;

#[component]
pub fn MemberList() -> Element {
    let client = use_context::<MemberClient>();
    let mut view = use_signal(MemberListView::new);
    let nav = navigator();

    let refresh = use_callback({
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let ticket = view.write().begin_refresh();
            spawn(async move {
                info!("Fetching members...");
                let result = client.list_members().await;
                view.write().finish_refresh(ticket, result);
            });
        }
    });

    let delete_confirmed = use_callback(move |()| {
        let Some((ticket, id)) = view.write().confirm_delete() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.delete_member(&id).await;
            if view.write().finish_delete(ticket, result) == DeleteOutcome::Refresh {
                refresh.call(());
            }
        });
    });

    // Fetch once on mount; the task is dropped with the component.
    use_effect(move || refresh.call(()));

    let current = view.read();
    match current.state() {
        ListState::Loading => rsx! {
            Spinner {}
        },
        ListState::Error(message) => rsx! {
            div { class: "alert alert-danger", role: "alert",
                "{message}"
                div { class: "mt-3",
                    button { class: "btn btn-primary", onclick: move |_| refresh.call(()), "Try Again" }
                }
            }
        },
        ListState::Empty | ListState::Ready(_) => {
            let members = current.members();
            let count = members.len();
            let pending = current.pending_delete();
            let deleting = current.is_deleting();

            let cards = members.iter().enumerate().map(|(index, member)| {
                let id = member.id().map(str::to_string);
                let key = id.clone().unwrap_or_else(|| format!("unsaved-{index}"));
                let confirming = id.is_some() && pending == id.as_deref();

                // members the server never assigned an id to get no actions
                let actions = id.map(|id| {
                    let edit_to = Route::EditMember { id: id.clone() };
                    rsx! {
                        div { class: "member-actions",
                            Link { to: edit_to, class: "btn btn-sm btn-primary me-2", "Edit" }
                            button {
                                class: "btn btn-sm btn-danger",
                                disabled: deleting,
                                onclick: move |_| view.write().request_delete(id.clone()),
                                if deleting { "Deleting..." } else { "Delete" }
                            }
                        }
                    }
                });

                rsx! {
                    div { key: "{key}", class: "member-card",
                        div { class: "member-card-inner",
                            div { class: "member-name", "{member.name}" }
                            div { class: "member-contact",
                                div {
                                    strong { "Email:" }
                                    " {member.email}"
                                }
                                div {
                                    strong { "Phone:" }
                                    " {member.phone_number}"
                                }
                            }
                            if confirming {
                                ConfirmDelete {
                                    name: member.name.clone(),
                                    on_confirm: move |_| delete_confirmed.call(()),
                                    on_cancel: move |_| view.write().cancel_delete(),
                                }
                            } else {
                                {actions}
                            }
                        }
                    }
                }
            });

            rsx! {
                div { class: "container",
                    div { class: "members-header",
                        h2 { "{count} Member(s)" }
                    }
                    if count == 0 {
                        EmptyState {
                            title: "No members found.".to_string(),
                            description: "The directory is empty.".to_string(),
                            action_label: Some("Add a new member".to_string()),
                            on_action: Some(EventHandler::new(move |_| {
                                nav.push(Route::AddMember {});
                            }))
                        }
                    } else {
                        div { class: "member-grid", {cards} }
                    }
                    div { class: "add-member-button",
                        Link { to: Route::AddMember {}, class: "btn btn-primary", "Add New Member" }
                    }
                }
            }
        }
    }
}
