use dioxus::prelude::*;

use crate::{
    client::{component::page::LoadingPage, model::auth::AuthState, router::Route},
    model::route::redirect_for,
};

/// Wraps `/admin/**` pages.
#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { path: "/admin" }
    }
}

/// Wraps `/login` and `/register`, which logged-in users are sent away from.
#[component]
pub fn GuestOnly() -> Element {
    rsx! {
        ProtectedLayout { path: "/login" }
    }
}

/// Applies the same redirect table as the server route guard once the session is known.
#[component]
pub fn ProtectedLayout(path: &'static str) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = navigator();

    let fetch_completed = auth.read().is_fetched();
    let redirect = redirect_for(path, auth.read().role());

    use_effect(use_reactive!(|(fetch_completed, redirect)| {
        if fetch_completed {
            if let Some(target) = redirect {
                nav.replace(target);
            }
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if redirect.is_none() {
            Outlet::<Route> {}
        }
    }
}
