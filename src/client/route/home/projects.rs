use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{fa_brands_icons::FaGithub, fa_solid_icons::FaArrowUpRightFromSquare},
    Icon,
};
use crate::{
    client::{component::Markdown, model::error::ApiError},
    model::{catalog::CatalogDto, product::ProductDto},
};

#[cfg(feature = "web")]
use crate::client::api::catalog::get_catalog;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Products to show for the selected category; `None` shows every category in order.
pub fn visible_products(catalog: &CatalogDto, category_id: Option<i32>) -> Vec<ProductDto> {
    catalog
        .categories
        .iter()
        .filter(|c| category_id.is_none_or(|id| c.id == id))
        .flat_map(|c| c.products.iter().cloned())
        .collect()
}

#[component]
pub fn Projects() -> Element {
    #[allow(unused_mut)]
    let mut catalog = use_signal(|| None::<Result<CatalogDto, ApiError>>);
    let mut selected = use_signal(|| None::<i32>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_catalog);

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch catalog: {}", err);
                }
                catalog.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        section {
            id: "projects",
            class: "w-full max-w-6xl flex flex-col gap-6",
            h2 { class: "text-3xl font-semibold text-center", "Projects" }
            match catalog() {
                None => rsx! {
                    div { class: "flex justify-center", span { class: "loading loading-spinner loading-lg" } }
                },
                Some(Err(err)) => rsx! {
                    div { class: "alert alert-error", "Could not load projects: {err.message}" }
                },
                Some(Ok(data)) => rsx! {
                    div {
                        class: "flex flex-wrap justify-center gap-2",
                        button {
                            class: if selected().is_none() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
                            onclick: move |_| selected.set(None),
                            "All"
                        }
                        for category in data.categories.iter() {
                            CategoryButton {
                                key: "{category.id}",
                                id: category.id,
                                name: category.name.clone(),
                                selected,
                            }
                        }
                    }
                    {
                        let products = visible_products(&data, selected());
                        rsx! {
                            if products.is_empty() {
                                p { class: "text-center opacity-60 py-8", "No projects in this category yet." }
                            } else {
                                div {
                                    class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                                    for product in products {
                                        ProductCard { key: "{product.id}", product }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CategoryButton(id: i32, name: String, selected: Signal<Option<i32>>) -> Element {
    let active = selected() == Some(id);

    rsx! {
        button {
            class: if active { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
            onclick: move |_| selected.set(Some(id)),
            "{name}"
        }
    }
}

#[component]
fn ProductCard(product: ProductDto) -> Element {
    rsx! {
        div {
            class: "card bg-base-200 overflow-hidden",
            img {
                class: "w-full h-48 object-cover",
                src: "{product.image}",
                alt: "{product.name}",
            }
            div {
                class: "card-body gap-3",
                div {
                    class: "flex justify-between items-start gap-2",
                    h3 { class: "card-title", "{product.name}" }
                    span { class: "badge badge-outline", "{product.category_name}" }
                }
                Markdown { source: product.description.clone(), class: "text-sm" }
                if !product.techs.is_empty() {
                    div {
                        class: "flex flex-wrap gap-1",
                        for tech in product.techs.iter() {
                            span { class: "badge badge-ghost", "{tech}" }
                        }
                    }
                }
                if let Some(addon) = product.addon.as_ref() {
                    div {
                        class: "rounded-box bg-base-300 p-3",
                        p { class: "font-semibold text-sm", "{addon.title}" }
                        p { class: "text-sm opacity-80", "{addon.description}" }
                    }
                }
                div {
                    class: "card-actions justify-end",
                    if let Some(url) = product.github_url.as_ref() {
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn btn-sm btn-ghost gap-1",
                            Icon { width: 14, height: 14, icon: FaGithub }
                            "Code"
                        }
                    }
                    if let Some(url) = product.live_url.as_ref() {
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn btn-sm btn-primary gap-1",
                            Icon { width: 14, height: 14, icon: FaArrowUpRightFromSquare }
                            "Live"
                        }
                    }
                }
            }
        }
    }
}
