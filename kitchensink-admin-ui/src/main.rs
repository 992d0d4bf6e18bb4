use dioxus::prelude::*;
use kitchensink::MemberClient;

mod pages;
mod widgets;

use pages::{AddMember, EditMember, MemberList, PageNotFound};
use widgets::navbar::Navbar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    MemberList {},
    #[route("/add")]
    AddMember {},
    #[route("/edit/:id")]
    EditMember { id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| MemberClient::from_env().map_err(|e| e.to_string()));

    rsx! {
        match client {
            Ok(client) => rsx! {
                Console { client }
            },
            Err(reason) => {
                warn!("Failed to build member client: {}", reason);
                rsx! {
                    div { class: "alert alert-danger", role: "alert",
                        "Unable to start the member console: {reason}"
                    }
                }
            }
        }
    }
}

/// Provides the transport client to every view and mounts the router.
#[component]
fn Console(client: MemberClient) -> Element {
    use_context_provider(|| client);

    rsx! {
        Router::<Route> {}
    }
}
