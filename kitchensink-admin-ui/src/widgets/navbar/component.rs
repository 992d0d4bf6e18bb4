use dioxus::prelude::*;

use crate::Route;

/// Top navigation shared by every screen.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();

    let link_class = |active: bool| if active { "nav-link active" } else { "nav-link" };
    let on_list = matches!(route, Route::MemberList {});
    let on_add = matches!(route, Route::AddMember {});

    rsx! {
        div { class: "container",
            nav { class: "navbar navbar-expand-lg navbar-dark bg-dark",
                div { class: "container-fluid",
                    Link { to: Route::MemberList {}, class: "navbar-brand", "Kitchensink Microservices" }
                    ul { class: "navbar-nav",
                        li { class: "nav-item",
                            Link { to: Route::MemberList {}, class: link_class(on_list), "Members" }
                        }
                        li { class: "nav-item",
                            Link { to: Route::AddMember {}, class: link_class(on_add), "Add Member" }
                        }
                    }
                }
            }
            div { class: "container mt-3", Outlet::<Route> {} }
        }
    }
}
