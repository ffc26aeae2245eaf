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
    model::{
        category::CategoryDto,
        product::{AddonDto, CreateProductDto, PaginatedProductsDto, ProductDto, UpdateProductDto},
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        category::get_categories,
        product::{
            create_product, delete_product, get_paginated_products, get_products,
            reorder_products, update_product,
        },
        upload::{selected_file, upload_image},
    },
    route::admin::move_id,
};

const IMAGE_INPUT_ID: &str = "product-image-file";

/// Product dialog state; numeric fields stay text until submitted.
#[derive(Clone, PartialEq, Default)]
pub struct ProductForm {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category_id: String,
    pub github_url: String,
    pub live_url: String,
    pub order: String,
    /// Comma separated
    pub techs: String,
    pub has_addon: bool,
    pub addon_title: String,
    pub addon_description: String,
}

impl ProductForm {
    pub fn empty(default_category: Option<i32>) -> Self {
        Self {
            category_id: default_category.map(|id| id.to_string()).unwrap_or_default(),
            order: "0".to_string(),
            ..Default::default()
        }
    }

    pub fn from_product(product: &ProductDto) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            category_id: product.category_id.to_string(),
            github_url: product.github_url.clone().unwrap_or_default(),
            live_url: product.live_url.clone().unwrap_or_default(),
            order: product.order.to_string(),
            techs: product.techs.join(", "),
            has_addon: product.addon.is_some(),
            addon_title: product.addon.as_ref().map(|a| a.title.clone()).unwrap_or_default(),
            addon_description: product
                .addon
                .as_ref()
                .map(|a| a.description.clone())
                .unwrap_or_default(),
        }
    }

    /// Converts the form into a request body. Field rules are enforced by the server.
    pub fn to_dto(&self) -> Result<CreateProductDto, String> {
        let category_id = self
            .category_id
            .trim()
            .parse::<i32>()
            .map_err(|_| "Select a category".to_string())?;
        let order = self
            .order
            .trim()
            .parse::<i32>()
            .map_err(|_| "Order must be a whole number".to_string())?;

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(CreateProductDto {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.trim().to_string(),
            category_id,
            github_url: optional(&self.github_url),
            live_url: optional(&self.live_url),
            order,
            techs: self
                .techs
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            addon: self.has_addon.then(|| AddonDto {
                title: self.addon_title.clone(),
                description: self.addon_description.clone(),
            }),
        })
    }
}

fn into_update(dto: CreateProductDto) -> UpdateProductDto {
    UpdateProductDto {
        name: dto.name,
        description: dto.description,
        image: dto.image,
        category_id: dto.category_id,
        github_url: dto.github_url,
        live_url: dto.live_url,
        order: dto.order,
        techs: dto.techs,
        addon: dto.addon,
    }
}

#[component]
pub fn AdminProducts() -> Element {
    #[allow(unused_mut)]
    let mut data = use_signal(|| None::<Result<PaginatedProductsDto, ApiError>>);
    #[allow(unused_mut)]
    let mut categories = use_signal(Vec::<CategoryDto>::new);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    #[allow(unused_mut)]
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_form = use_signal(|| false);
    let mut form = use_signal(ProductForm::default);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_saving = use_signal(|| false);
    let mut is_uploading = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    #[allow(unused_mut, unused_variables)]
    let mut toasts = use_context::<Toasts>();

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_paginated_products(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                data.set(Some(result.clone()));
            }
        });

        let category_future = use_resource(get_categories);

        use_effect(move || {
            if let Some(Ok(list)) = category_future.read_unchecked().as_ref() {
                categories.set(list.clone());
            }
        });
    }

    let on_upload = move |_| {
        if is_uploading() {
            return;
        }

        #[cfg(feature = "web")]
        {
            let Some(file) = selected_file(IMAGE_INPUT_ID) else {
                toasts.error("Choose an image first");
                return;
            };
            is_uploading.set(true);

            spawn(async move {
                match upload_image(&file).await {
                    Ok(upload) => {
                        form.write().image = upload.url;
                        toasts.success("Image uploaded");
                    }
                    Err(err) => toasts.error(err.message),
                }
                is_uploading.set(false);
            });
        }
    };

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        if is_saving() || is_uploading() {
            return;
        }
        let current = form();
        let dto = match current.to_dto() {
            Ok(dto) => dto,
            Err(message) => {
                toasts.error(message);
                return;
            }
        };
        is_saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match current.id {
                Some(id) => update_product(id, into_update(dto)).await.map(|_| "Product updated"),
                None => create_product(dto).await.map(|_| "Product created"),
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
        let _ = (dto, into_update);
    };

    let on_delete = move |_| {
        let Some((_id, _)) = to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_product(_id).await {
                Ok(()) => {
                    toasts.success("Product deleted");
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
                let ids: Vec<i32> = get_products(None).await?.into_iter().map(|p| p.id).collect();
                let Some(index) = ids.iter().position(|&p| p == id) else {
                    return Ok(());
                };
                match move_id(&ids, index, direction) {
                    Some(reordered) => reorder_products(reordered).await,
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
        "Edit Product".to_string()
    } else {
        "Add Product".to_string()
    };
    let busy = is_saving() || is_uploading();

    rsx! {
        Title { "Admin - Products | {SITE_NAME}" }
        match data() {
            Some(Ok(products)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl",
                        h1 { class: "text-lg sm:text-2xl mb-6", "Admin Panel" }
                        AdminTabs { active_tab: AdminTab::Products }
                        div {
                            class: "flex items-center justify-between gap-4 mb-6",
                            h2 { class: "text-lg font-semibold", "Products" }
                            button {
                                class: "btn btn-primary",
                                disabled: categories.read().is_empty(),
                                onclick: move |_| {
                                    let default_category = categories.read().first().map(|c| c.id);
                                    form.set(ProductForm::empty(default_category));
                                    show_form.set(true);
                                },
                                "Add Product"
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                ProductTable {
                                    products: products.products.clone(),
                                    on_edit: move |product: ProductDto| {
                                        form.set(ProductForm::from_product(&product));
                                        show_form.set(true);
                                    },
                                    on_delete: move |product: ProductDto| {
                                        to_delete.set(Some((product.id, product.name)));
                                        show_delete.set(true);
                                    },
                                    on_move,
                                }
                                Pagination {
                                    page,
                                    per_page,
                                    data: PaginationData {
                                        page: products.page,
                                        per_page: products.per_page,
                                        total: products.total,
                                        total_pages: products.total_pages,
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
            prevent_close: busy,
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_save,
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name",
                    value: "{form().name}",
                    disabled: busy,
                    oninput: move |evt| form.write().name = evt.value(),
                }
                textarea {
                    class: "textarea textarea-bordered w-full h-32",
                    placeholder: "Description (markdown)",
                    value: "{form().description}",
                    disabled: busy,
                    oninput: move |evt| form.write().description = evt.value(),
                }
                div {
                    class: "flex flex-col sm:flex-row gap-2",
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Image URL",
                        value: "{form().image}",
                        disabled: busy,
                        oninput: move |evt| form.write().image = evt.value(),
                    }
                    input {
                        id: IMAGE_INPUT_ID,
                        r#type: "file",
                        accept: "image/png,image/jpeg,image/webp,image/gif",
                        class: "file-input file-input-bordered",
                        disabled: busy,
                    }
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: busy,
                        onclick: on_upload,
                        if is_uploading() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Upload"
                    }
                }
                select {
                    class: "select select-bordered w-full",
                    value: "{form().category_id}",
                    disabled: busy,
                    onchange: move |evt| form.write().category_id = evt.value(),
                    for category in categories.read().iter() {
                        option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                    }
                }
                div {
                    class: "grid sm:grid-cols-2 gap-2",
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "GitHub URL (optional)",
                        value: "{form().github_url}",
                        disabled: busy,
                        oninput: move |evt| form.write().github_url = evt.value(),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Live URL (optional)",
                        value: "{form().live_url}",
                        disabled: busy,
                        oninput: move |evt| form.write().live_url = evt.value(),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Technologies, comma separated",
                        value: "{form().techs}",
                        disabled: busy,
                        oninput: move |evt| form.write().techs = evt.value(),
                    }
                    input {
                        r#type: "number",
                        min: "0",
                        class: "input input-bordered w-full",
                        placeholder: "Order",
                        value: "{form().order}",
                        disabled: busy,
                        oninput: move |evt| form.write().order = evt.value(),
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox",
                        checked: form().has_addon,
                        disabled: busy,
                        onchange: move |evt| form.write().has_addon = evt.checked(),
                    }
                    span { "Include an addon" }
                }
                if form().has_addon {
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Addon title",
                        value: "{form().addon_title}",
                        disabled: busy,
                        oninput: move |evt| form.write().addon_title = evt.value(),
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Addon description",
                        value: "{form().addon_description}",
                        disabled: busy,
                        oninput: move |evt| form.write().addon_description = evt.value(),
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: busy,
                        onclick: move |_| show_form.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: busy,
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
            title: "Delete Product".to_string(),
            message: format!("Delete \"{}\"? Its technologies and addon are removed too.", delete_name),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn ProductTable(
    products: Vec<ProductDto>,
    on_edit: EventHandler<ProductDto>,
    on_delete: EventHandler<ProductDto>,
    on_move: EventHandler<(i32, isize)>,
) -> Element {
    rsx! {
        if products.is_empty() {
            div { class: "text-center py-8 opacity-50", "No products yet" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Order" }
                            th { "Name" }
                            th { "Category" }
                            th { "Technologies" }
                            th { "Addon" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for product in products {
                            tr {
                                key: "{product.id}",
                                td { "{product.order}" }
                                td { "{product.name}" }
                                td { "{product.category_name}" }
                                td { {product.techs.join(", ")} }
                                td {
                                    if let Some(addon) = product.addon.as_ref() {
                                        "{addon.title}"
                                    } else {
                                        span { class: "opacity-50", "None" }
                                    }
                                }
                                td {
                                    class: "flex justify-end gap-1",
                                    button {
                                        class: "btn btn-ghost btn-xs",
                                        onclick: move |_| on_move.call((product.id, -1)),
                                        "▲"
                                    }
                                    button {
                                        class: "btn btn-ghost btn-xs",
                                        onclick: move |_| on_move.call((product.id, 1)),
                                        "▼"
                                    }
                                    button {
                                        class: "btn btn-outline btn-xs",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| on_edit.call(product.clone())
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-error btn-outline btn-xs",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| on_delete.call(product.clone())
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
