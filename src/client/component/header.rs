use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaBriefcase, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthState, router::Route};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<Signal<AuthState>>();

    let fetch_completed = auth.read().is_fetched();
    let user_logged_in = auth.read().user().is_some();
    let user_is_admin = auth.read().is_admin();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 28, height: 28, icon: FaBriefcase }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                if user_is_admin {
                    Link {
                        to: Route::AdminCategories {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                // Full navigation so the server clears the session and redirects
                a {
                    href: "/api/auth/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if fetch_completed {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}
