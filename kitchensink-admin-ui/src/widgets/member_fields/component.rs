use dioxus::prelude::*;
use kitchensink::{FieldErrors, MemberField};
use shared_http::api::Member;
use strum::IntoEnumIterator;

/// Name, email and phone inputs with their validation feedback.
#[component]
pub fn MemberFields(
    member: Member,
    errors: FieldErrors,
    show_placeholders: bool,
    disabled: bool,
    on_input: EventHandler<(MemberField, String)>,
) -> Element {
    let inputs = MemberField::iter().map(|field| {
        let name = field.to_string();
        let label = field.label();
        let value = field.value(&member).to_string();
        let placeholder = if show_placeholders { field.placeholder() } else { "" };
        let error = errors.get(field);
        let class = if error.is_some() { "form-control is-invalid" } else { "form-control" };

        rsx! {
            div { class: "mb-3", key: "{name}",
                label { r#for: "{name}", class: "form-label", "{label}" }
                input {
                    r#type: field.input_type(),
                    class,
                    id: "{name}",
                    name: "{name}",
                    value,
                    placeholder,
                    disabled,
                    oninput: move |e: Event<FormData>| on_input.call((field, e.value())),
                }
                if let Some(message) = error {
                    div { class: "invalid-feedback", "{message}" }
                }
            }
        }
    });

    rsx! {
        {inputs}
    }
}
