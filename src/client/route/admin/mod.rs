mod categories;
mod products;
mod users;

pub use categories::AdminCategories;
pub use products::AdminProducts;
pub use users::AdminUsers;

use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Categories,
    Products,
    Users,
}

#[component]
pub fn AdminTabs(active_tab: AdminTab) -> Element {
    let tab_class = move |tab: AdminTab| {
        if tab == active_tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx! {
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6",
            Link { to: Route::AdminCategories {}, class: tab_class(AdminTab::Categories), "Categories" }
            Link { to: Route::AdminProducts {}, class: tab_class(AdminTab::Products), "Products" }
            Link { to: Route::AdminUsers {}, class: tab_class(AdminTab::Users), "Users" }
        }
    }
}

/// Swaps `ids[index]` with its neighbour in `direction` (-1 up, 1 down).
///
/// Returns `None` when the move would leave the list.
pub fn move_id(ids: &[i32], index: usize, direction: isize) -> Option<Vec<i32>> {
    let target = index.checked_add_signed(direction)?;
    if index >= ids.len() || target >= ids.len() {
        return None;
    }

    let mut reordered = ids.to_vec();
    reordered.swap(index, target);
    Some(reordered)
}

#[cfg(test)]
mod tests {
    use super::move_id;

    #[test]
    fn moves_within_bounds() {
        assert_eq!(move_id(&[1, 2, 3], 1, -1), Some(vec![2, 1, 3]));
        assert_eq!(move_id(&[1, 2, 3], 1, 1), Some(vec![1, 3, 2]));
    }

    #[test]
    fn refuses_moves_past_the_ends() {
        assert_eq!(move_id(&[1, 2, 3], 0, -1), None);
        assert_eq!(move_id(&[1, 2, 3], 2, 1), None);
        assert_eq!(move_id(&[], 0, 1), None);
    }
}
