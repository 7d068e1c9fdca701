//! UI components for steptabs
//!
//! Each component draws into an `egui::Ui` and reports interactions as
//! action values; none of them mutate application state directly.

mod about;
mod chrome;
mod tabs_page;

pub use about::show_about_page;
pub use chrome::{show_footer, show_header, show_top_bar, HeaderAction, APP_TITLE};
pub use tabs_page::{show_tabs_page, TabsAction, TabsView};
