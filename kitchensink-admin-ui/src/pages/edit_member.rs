use dioxus::prelude::*;
use kitchensink::{MemberClient, MemberField};
use kitchensink::timer::{self, REDIRECT_DELAY};
use kitchensink::views::{EditMemberForm, EditState};

use crate::Route;
use crate::widgets::member_fields::MemberFields;
use crate::widgets::spinner::Spinner;

#[component]
pub fn EditMember(id: String) -> Element {
    let client = use_context::<MemberClient>();
    let mut draft = use_signal(|| EditMemberForm::new(id.clone()));
    let nav = navigator();

    let load = use_callback({
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            let ticket = {
                let mut form = draft.write();
                if form.id() != id {
                    form.rekey(id.clone());
                }
                form.begin_load()
            };
            spawn(async move {
                let result = client.get_member(&id).await;
                draft.write().finish_load(ticket, result);
            });
        }
    });

    // Reload whenever the route points at a different member.
    use_effect(use_reactive((&id,), move |(id,)| load.call(id)));

    let update_member = move |e: FormEvent| {
        e.prevent_default();
        let Some((ticket, id, member)) = draft.write().submit() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.update_member(&id, &member).await;
            if draft.write().finish_submit(ticket, result) {
                timer::sleep(REDIRECT_DELAY).await;
                nav.push(Route::MemberList {});
            }
        });
    };

    let current = draft.read();
    let body = match current.state() {
        EditState::Loading => {
            return rsx! {
                Spinner {}
            };
        }
        EditState::LoadFailed(message) => {
            return rsx! {
                div { class: "alert alert-danger", role: "alert",
                    "{message}"
                    div { class: "mt-3",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                nav.push(Route::MemberList {});
                            },
                            "Back to Members"
                        }
                    }
                }
            };
        }
        EditState::Updated => rsx! {
            div { class: "alert alert-success",
                h4 { "Member updated successfully!" }
                p { "Redirecting to members list..." }
            }
        },
        state => {
            let error = match state {
                EditState::Editing { error } => error.clone(),
                _ => None,
            };
            let submitting = matches!(state, EditState::Submitting);

            rsx! {
                form { onsubmit: update_member,
                    if let Some(error) = error {
                        div { class: "alert alert-danger", role: "alert", "{error}" }
                    }
                    MemberFields {
                        member: current.member().clone(),
                        errors: current.errors().clone(),
                        show_placeholders: false,
                        disabled: submitting,
                        on_input: move |(field, value): (MemberField, String)| draft.write().set_field(field, value),
                    }
                    div { class: "d-flex justify-content-between",
                        button { r#type: "submit", class: "btn btn-primary", disabled: submitting, "Update" }
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                nav.push(Route::MemberList {});
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "card",
            div { class: "card-header bg-primary text-white",
                h2 { "Edit Member" }
            }
            div { class: "card-body", {body} }
        }
    }
}
