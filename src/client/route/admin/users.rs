use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Page, Pagination, PaginationData},
        constant::SITE_NAME,
        model::{auth::AuthState, error::ApiError, toast::Toasts},
        route::admin::{AdminTab, AdminTabs},
    },
    model::user::{PaginatedUsersDto, Role, UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::user::{delete_user, get_users, update_user_role};

#[component]
pub fn AdminUsers() -> Element {
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<Result<PaginatedUsersDto, ApiError>>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);
    let mut pending_role = use_signal(|| None::<i32>);
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<Toasts>();

    let auth = use_context::<Signal<AuthState>>();
    let current_user_id = auth.read().user().map(|u| u.id);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_users(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                data.set(Some(result.clone()));
            }
        });
    }

    #[allow(unused_variables)]
    let on_toggle_role = move |user: UserDto| {
        if pending_role().is_some() {
            return;
        }
        pending_role.set(Some(user.id));

        #[cfg(feature = "web")]
        spawn(async move {
            let role = if user.is_admin() { Role::User } else { Role::Admin };
            match update_user_role(user.id, role).await {
                Ok(updated) => {
                    toasts.success(format!("{} is now {}", updated.name, updated.role.as_str()));
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
            pending_role.set(None);
        });
    };

    let on_delete = move |_| {
        let Some((_id, _)) = to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_user(_id).await {
                Ok(()) => {
                    toasts.success("User deleted");
                    show_delete.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
            is_deleting.set(false);
        });
    };

    let delete_name = to_delete().map(|(_, name)| name).unwrap_or_default();

    rsx! {
        Title { "Admin - Users | {SITE_NAME}" }
        match data() {
            Some(Ok(users)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl",
                        h1 { class: "text-lg sm:text-2xl mb-6", "Admin Panel" }
                        AdminTabs { active_tab: AdminTab::Users }
                        h2 { class: "text-lg font-semibold mb-6", "Users" }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                div {
                                    class: "overflow-x-auto",
                                    table {
                                        class: "table",
                                        thead {
                                            tr {
                                                th { "Name" }
                                                th { "Email" }
                                                th { "Role" }
                                                th { "Joined" }
                                                th { class: "text-right", "Actions" }
                                            }
                                        }
                                        tbody {
                                            for user in users.users.clone() {
                                                UserRow {
                                                    key: "{user.id}",
                                                    is_self: current_user_id == Some(user.id),
                                                    is_pending: pending_role() == Some(user.id),
                                                    user: user.clone(),
                                                    on_toggle_role,
                                                    on_delete: move |user: UserDto| {
                                                        to_delete.set(Some((user.id, user.name)));
                                                        show_delete.set(true);
                                                    },
                                                }
                                            }
                                        }
                                    }
                                }
                                Pagination {
                                    page,
                                    per_page,
                                    data: PaginationData {
                                        page: users.page,
                                        per_page: users.per_page,
                                        total: users.total,
                                        total_pages: users.total_pages,
                                    },
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage {}
            },
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete User".to_string(),
            message: format!("Delete the account of {}?", delete_name),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn UserRow(
    user: UserDto,
    is_self: bool,
    is_pending: bool,
    on_toggle_role: EventHandler<UserDto>,
    on_delete: EventHandler<UserDto>,
) -> Element {
    let joined = user.created_at.format("%Y-%m-%d").to_string();
    let toggle_label = if user.is_admin() {
        "Make user"
    } else {
        "Make admin"
    };

    rsx! {
        tr {
            td {
                "{user.name}"
                if is_self {
                    span { class: "badge badge-ghost ml-2", "you" }
                }
            }
            td { "{user.email}" }
            td {
                span {
                    class: if user.is_admin() { "badge badge-primary" } else { "badge" },
                    "{user.role.as_str()}"
                }
            }
            td { "{joined}" }
            td {
                class: "flex justify-end gap-1",
                // Self-demotion and self-deletion are refused by the server too
                button {
                    class: "btn btn-outline btn-xs",
                    disabled: is_self || is_pending,
                    onclick: {
                        let user = user.clone();
                        move |_| on_toggle_role.call(user.clone())
                    },
                    if is_pending {
                        span { class: "loading loading-spinner loading-xs" }
                    }
                    "{toggle_label}"
                }
                button {
                    class: "btn btn-error btn-outline btn-xs",
                    disabled: is_self,
                    onclick: {
                        let user = user.clone();
                        move |_| on_delete.call(user.clone())
                    },
                    "Delete"
                }
            }
        }
    }
}
