use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{auth::AuthState, toast::Toasts},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context_provider(|| Signal::new(AuthState::Initializing));
    use_context_provider(Toasts::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        let state = match get_user().await {
            Ok(user) => AuthState::from(user),
            Err(err) => AuthState::Error(err),
        };
        auth.set(state);
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Projects, products and services portfolio"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
