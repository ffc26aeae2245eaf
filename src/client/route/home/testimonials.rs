use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaQuoteLeft, Icon};

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Delivered on time and the product has been running without a hitch since launch.",
        author: "Amira K.",
        role: "Operations lead",
    },
    Testimonial {
        quote: "Clear communication throughout and a codebase our own team could pick up immediately.",
        author: "Jonas P.",
        role: "CTO",
    },
    Testimonial {
        quote: "The admin tools alone saved us hours every week.",
        author: "Lena M.",
        role: "Product manager",
    },
];

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section {
            class: "w-full max-w-6xl flex flex-col gap-6 pb-16",
            h2 { class: "text-3xl font-semibold text-center", "What clients say" }
            div {
                class: "grid gap-4 md:grid-cols-3",
                for testimonial in TESTIMONIALS {
                    div {
                        class: "card bg-base-200 p-6 flex flex-col gap-4",
                        Icon { width: 20, height: 20, icon: FaQuoteLeft }
                        p { class: "italic", "{testimonial.quote}" }
                        div {
                            p { class: "font-semibold", "{testimonial.author}" }
                            p { class: "text-sm opacity-70", "{testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}
