use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    model::{auth::AuthState, toast::Toasts},
    router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::register, model::user::RegisterDto};

/// Registration form. A `code` query parameter carries the first-admin setup code.
#[component]
pub fn Register(code: String) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);

    #[allow(unused_mut, unused_variables)]
    let mut auth = use_context::<Signal<AuthState>>();
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<Toasts>();

    let has_code = !code.is_empty();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_submitting() {
            return;
        }
        is_submitting.set(true);

        #[cfg(feature = "web")]
        {
            let code = code.clone();
            spawn(async move {
                let payload = RegisterDto {
                    name: name(),
                    email: email(),
                    password: password(),
                    code: (!code.is_empty()).then_some(code),
                };

                match register(payload).await {
                    Ok(user) => {
                        toasts.success(format!("Welcome, {}", user.name));
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
        }
    };

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center",
            form {
                class: "card bg-base-200 w-full max-w-sm p-6 flex flex-col gap-4",
                onsubmit: on_submit,
                h1 { class: "text-2xl", "Create an account" }
                if has_code {
                    div {
                        class: "alert alert-info text-sm",
                        "This link creates the administrator account."
                    }
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name",
                    value: "{name}",
                    disabled: is_submitting(),
                    oninput: move |evt| name.set(evt.value()),
                }
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
                    placeholder: "Password (8 characters or more)",
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
                    "Register"
                }
                p {
                    class: "text-sm opacity-70",
                    "Already registered? "
                    Link { to: Route::Login {}, class: "link", "Log in" }
                }
            }
        }
    }
}
