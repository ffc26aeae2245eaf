use dioxus::prelude::*;

use crate::client::{component::ErrorPage, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        ErrorPage { status: 404, message: "The page you are looking for does not exist" }
        div {
            class: "flex justify-center -mt-24",
            Link { to: Route::Home {}, class: "btn btn-outline", "Back home" }
        }
    }
}
