use dioxus::prelude::*;
use kitchensink::{MemberClient, MemberField};
use kitchensink::timer::{self, REDIRECT_DELAY};
use kitchensink::views::{CreateMemberForm, CreateState};

use crate::Route;
use crate::widgets::member_fields::MemberFields;

#[component]
pub fn AddMember() -> Element {
    let client = use_context::<MemberClient>();
    let mut draft = use_signal(CreateMemberForm::new);
    let nav = navigator();

    let save_member = move |e: FormEvent| {
        e.prevent_default();
        let Some((ticket, member)) = draft.write().submit() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.create_member(&member).await;
            if draft.write().finish_submit(ticket, result) {
                timer::sleep(REDIRECT_DELAY).await;
                nav.push(Route::MemberList {});
            }
        });
    };

    let current = draft.read();
    let body = match current.state() {
        CreateState::Submitted => rsx! {
            div { class: "alert alert-success",
                h4 { "Member created successfully!" }
                p { "Redirecting to members list..." }
            }
        },
        state => {
            let error = match state {
                CreateState::Editing { error } => error.clone(),
                _ => None,
            };
            let submitting = matches!(state, CreateState::Submitting);

            rsx! {
                form { onsubmit: save_member,
                    if let Some(error) = error {
                        div { class: "alert alert-danger", role: "alert", "{error}" }
                    }
                    MemberFields {
                        member: current.member().clone(),
                        errors: current.errors().clone(),
                        show_placeholders: true,
                        disabled: submitting,
                        on_input: move |(field, value): (MemberField, String)| draft.write().set_field(field, value),
                    }
                    div { class: "d-flex justify-content-between",
                        button { r#type: "submit", class: "btn btn-primary", disabled: submitting, "Submit" }
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
                h2 { "Add New Member" }
            }
            div { class: "card-body", {body} }
        }
    }
}
