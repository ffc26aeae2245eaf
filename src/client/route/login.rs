use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    model::{auth::AuthState, toast::Toasts},
    router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::user::LoginDto};

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    #[allow(unused_mut, unused_variables)]
    let mut auth = use_context::<Signal<AuthState>>();
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<Toasts>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_submitting() {
            return;
        }
        is_submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = LoginDto {
                email: email(),
                password: password(),
            };

            match login(payload).await {
                Ok(user) => {
                    let target = if user.is_admin() {
                        Route::AdminCategories {}
                    } else {
                        Route::Home {}
                    };
                    auth.set(AuthState::Authenticated(user));
                    navigator().replace(target);
                }
                Err(err) => toasts.error(err.message),
            }
            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            form {
                class: "card bg-base-200 w-full max-w-sm p-6 flex flex-col gap-4",
                onsubmit: on_submit,
                h1 { class: "text-2xl", "Log in" }
                input {
                    r#type: "email",
                    class: "input input-bordered w-full",
                    placeholder: "Email",
                    value: "{email}",
                    disabled: is_submitting(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "Password",
                    value: "{password}",
                    disabled: is_submitting(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: is_submitting(),
                    if is_submitting() {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Log in"
                }
                p {
                    class: "text-sm opacity-70",
                    "No account yet? "
                    Link { to: Route::Register { code: String::new() }, class: "link", "Register" }
                }
            }
        }
    }
}
