// Small helpers shared by the dashboard pages

pub mod slug;
pub mod initials;
pub mod dates;
pub mod toast;

pub use dates::{format_date, format_date_time};
pub use initials::initials;
pub use slug::generate_code;
pub use toast::{Toast, ToastKind, Toaster};
