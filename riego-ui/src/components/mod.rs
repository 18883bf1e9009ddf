//! Reusable Dioxus RSX components for the simulator.

mod confirm_dialog;
mod dialog_host;
mod field_control;
mod home_page;
mod irrigation_form;
mod login_page;
mod modal;
mod nav_bar;
mod result_dialog;

pub use confirm_dialog::ConfirmDialog;
pub use dialog_host::DialogHost;
pub use field_control::FieldControl;
pub use home_page::HomePage;
pub use irrigation_form::IrrigationForm;
pub use login_page::LoginPage;
pub use modal::Modal;
pub use nav_bar::NavBar;
pub use result_dialog::ResultDialog;
