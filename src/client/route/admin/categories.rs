use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorPage, LoadingPage, Modal, Page, Pagination, PaginationData,
        },
        constant::SITE_NAME,
        model::{error::ApiError, toast::Toasts},
        route::admin::{AdminTab, AdminTabs},
    },
    model::category::{CategoryListItemDto, PaginatedCategoriesDto},
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::category::{
            create_category, delete_category, get_categories, get_paginated_categories,
            reorder_categories, update_category,
        },
        route::admin::move_id,
    },
    model::category::{CreateCategoryDto, UpdateCategoryDto},
};

#[derive(Clone, PartialEq)]
struct CategoryForm {
    id: Option<i32>,
    name: String,
    order: String,
}

#[component]
pub fn AdminCategories() -> Element {
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<Result<PaginatedCategoriesDto, ApiError>>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_form = use_signal(|| false);
    let mut form = use_signal(|| CategoryForm {
        id: None,
        name: String::new(),
        order: "0".to_string(),
    });
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_saving = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<Toasts>();

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_paginated_categories(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                data.set(Some(result.clone()));
            }
        });
    }

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        if is_saving() {
            return;
        }
        let Ok(order) = form().order.trim().parse::<i32>() else {
            toasts.error("Order must be a whole number");
            return;
        };
        is_saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let current = form();
            let result = match current.id {
                Some(id) => update_category(id, UpdateCategoryDto { name: current.name, order })
                    .await
                    .map(|_| "Category updated"),
                None => create_category(CreateCategoryDto { name: current.name, order })
                    .await
                    .map(|_| "Category created"),
            };

            match result {
                Ok(message) => {
                    toasts.success(message);
                    show_form.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
            is_saving.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = order;
    };

    let on_delete = move |_| {
        let Some((_id, _)) = to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_category(_id).await {
                Ok(()) => {
                    toasts.success("Category deleted");
                    show_delete.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
            is_deleting.set(false);
        });
    };

    #[allow(unused_variables)]
    let on_move = move |(id, direction): (i32, isize)| {
        #[cfg(feature = "web")]
        spawn(async move {
            let result: Result<(), ApiError> = async {
                let ids: Vec<i32> = get_categories().await?.into_iter().map(|c| c.id).collect();
                let Some(index) = ids.iter().position(|&c| c == id) else {
                    return Ok(());
                };
                match move_id(&ids, index, direction) {
                    Some(reordered) => reorder_categories(reordered).await,
                    None => Ok(()),
                }
            }
            .await;

            match result {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => toasts.error(err.message),
            }
        });
    };

    let delete_name = to_delete().map(|(_, name)| name).unwrap_or_default();
    let form_title = if form().id.is_some() {
        "Edit Category".to_string()
    } else {
        "Add Category".to_string()
    };

    rsx! {
        Title { "Admin - Categories | {SITE_NAME}" }
        match data() {
            Some(Ok(categories)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl",
                        h1 { class: "text-lg sm:text-2xl mb-6", "Admin Panel" }
                        AdminTabs { active_tab: AdminTab::Categories }
                        div {
                            class: "flex items-center justify-between gap-4 mb-6",
                            h2 { class: "text-lg font-semibold", "Categories" }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    form.set(CategoryForm {
                                        id: None,
                                        name: String::new(),
                                        order: "0".to_string(),
                                    });
                                    show_form.set(true);
                                },
                                "Add Category"
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                CategoryTable {
                                    categories: categories.categories.clone(),
                                    on_edit: move |category: CategoryListItemDto| {
                                        form.set(CategoryForm {
                                            id: Some(category.id),
                                            name: category.name,
                                            order: category.order.to_string(),
                                        });
                                        show_form.set(true);
                                    },
                                    on_delete: move |category: CategoryListItemDto| {
                                        to_delete.set(Some((category.id, category.name)));
                                        show_delete.set(true);
                                    },
                                    on_move,
                                }
                                Pagination {
                                    page,
                                    per_page,
                                    data: PaginationData {
                                        page: categories.page,
                                        per_page: categories.per_page,
                                        total: categories.total,
                                        total_pages: categories.total_pages,
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

        Modal {
            show: show_form,
            title: form_title,
            prevent_close: is_saving(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_save,
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name",
                    value: "{form().name}",
                    disabled: is_saving(),
                    oninput: move |evt| form.write().name = evt.value(),
                }
                input {
                    r#type: "number",
                    min: "0",
                    class: "input input-bordered w-full",
                    placeholder: "Order",
                    value: "{form().order}",
                    disabled: is_saving(),
                    oninput: move |evt| form.write().order = evt.value(),
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_saving(),
                        onclick: move |_| show_form.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_saving(),
                        if is_saving() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Save"
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete Category".to_string(),
            message: format!("Delete \"{}\" and all of its products?", delete_name),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn CategoryTable(
    categories: Vec<CategoryListItemDto>,
    on_edit: EventHandler<CategoryListItemDto>,
    on_delete: EventHandler<CategoryListItemDto>,
    on_move: EventHandler<(i32, isize)>,
) -> Element {
    rsx! {
        if categories.is_empty() {
            div { class: "text-center py-8 opacity-50", "No categories yet" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Order" }
                            th { "Name" }
                            th { "Products" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for category in categories {
                            tr {
                                key: "{category.id}",
                                td { "{category.order}" }
                                td { "{category.name}" }
                                td { "{category.product_count}" }
                                td {
                                    class: "flex justify-end gap-1",
                                    button {
                                        class: "btn btn-ghost btn-xs",
                                        onclick: move |_| on_move.call((category.id, -1)),
                                        "▲"
                                    }
                                    button {
                                        class: "btn btn-ghost btn-xs",
                                        onclick: move |_| on_move.call((category.id, 1)),
                                        "▼"
                                    }
                                    button {
                                        class: "btn btn-outline btn-xs",
                                        onclick: {
                                            let category = category.clone();
                                            move |_| on_edit.call(category.clone())
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-error btn-outline btn-xs",
                                        onclick: {
                                            let category = category.clone();
                                            move |_| on_delete.call(category.clone())
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
