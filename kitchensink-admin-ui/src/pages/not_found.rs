use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "alert alert-warning", role: "alert",
            h4 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::MemberList {}, class: "alert-link", "Back to Members" }
        }
    }
}
