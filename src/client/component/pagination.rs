use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[component]
pub fn Pagination(page: Signal<u64>, per_page: Signal<u64>, data: PaginationData) -> Element {
    let first = if data.total == 0 {
        0
    } else {
        data.page * data.per_page + 1
    };
    let last = ((data.page + 1) * data.per_page).min(data.total);
    let has_next = data.page + 1 < data.total_pages;

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            per_page.set(value);
                            page.set(0);
                        }
                    },
                    option { value: "5", "5" }
                    option { value: "10", "10" }
                    option { value: "25", "25" }
                    option { value: "50", "50" }
                }
                span { "entries" }
            }
            div {
                class: "flex items-center gap-4",
                span {
                    class: "text-sm opacity-70 whitespace-nowrap",
                    "Showing {first} to {last} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-sm",
                        disabled: data.page == 0,
                        onclick: move |_| page.set(page().saturating_sub(1)),
                        "«"
                    }
                    button {
                        class: "join-item btn btn-sm pointer-events-none",
                        "Page {data.page + 1} of {data.total_pages.max(1)}"
                    }
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !has_next,
                        onclick: move |_| page.set(page() + 1),
                        "»"
                    }
                }
            }
        }
    )
}
