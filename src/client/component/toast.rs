use dioxus::prelude::*;

use crate::client::model::toast::{ToastKind, Toasts};

#[component]
pub fn ToastContainer() -> Element {
    let mut toasts = use_context::<Toasts>();

    rsx!(div {
        class: "toast toast-end z-50",
        for toast in toasts.items() {
            div {
                key: "{toast.id}",
                class: match toast.kind {
                    ToastKind::Success => "alert alert-success",
                    ToastKind::Error => "alert alert-error",
                },
                span { "{toast.message}" }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| toasts.dismiss(toast.id),
                    "✕"
                }
            }
        }
    })
}
