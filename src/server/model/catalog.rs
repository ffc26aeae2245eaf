//! Public catalog model: categories with their products, as shown on the projects section.

use crate::{
    model::catalog::{CatalogCategoryDto, CatalogDto},
    server::model::{category::Category, product::Product},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCategory {
    pub category: Category,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub categories: Vec<CatalogCategory>,
}

impl Catalog {
    /// Groups products under their categories, keeping the order of both inputs.
    pub fn build(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let mut categories: Vec<CatalogCategory> = categories
            .into_iter()
            .map(|category| CatalogCategory {
                category,
                products: Vec::new(),
            })
            .collect();

        for product in products {
            if let Some(entry) = categories
                .iter_mut()
                .find(|entry| entry.category.id == product.category_id)
            {
                entry.products.push(product);
            }
        }

        Self { categories }
    }

    pub fn into_dto(self) -> CatalogDto {
        CatalogDto {
            categories: self
                .categories
                .into_iter()
                .map(|entry| CatalogCategoryDto {
                    id: entry.category.id,
                    name: entry.category.name,
                    products: entry.products.into_iter().map(Product::into_dto).collect(),
                })
                .collect(),
        }
    }
}
