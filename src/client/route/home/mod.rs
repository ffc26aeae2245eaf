mod hero;
mod projects;
mod testimonials;

use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

use hero::Hero;
use projects::Projects;
use testimonials::Testimonials;

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-16",
            Hero {}
            Projects {}
            Testimonials {}
        }
    }
}
