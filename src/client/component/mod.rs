pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod toast;

pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{GuestOnly, RequiresAdmin};
pub use toast::ToastContainer;
