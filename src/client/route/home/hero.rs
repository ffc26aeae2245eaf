use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaArrowDown, Icon};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "flex flex-col items-center text-center gap-6 max-w-3xl py-16",
            h1 {
                class: "text-4xl sm:text-5xl font-bold",
                "Products built to ship"
            }
            p {
                class: "text-lg opacity-80",
                "Web apps, tools and services designed, built and maintained end to end. Browse the projects below by category."
            }
            a {
                href: "#projects",
                class: "btn btn-primary gap-2",
                "See the projects"
                Icon { width: 16, height: 16, icon: FaArrowDown }
            }
        }
    }
}
