//! UI Components
//!
//! Leptos components of the ingredient list manager.

mod category_row;
mod confirm_dialog;
mod dialog_host;
mod edit_ingredient_form;
mod inline_delete;
mod ingredient_list;
mod list_selector;
mod log_panel;
mod modal;
mod name_dialog;
mod scaling_control;
mod snackbar;
mod sub_ingredient_form;
mod unit_select;
mod voice_input_modal;

pub use category_row::CategoryRow;
pub use confirm_dialog::ConfirmDialog;
pub use dialog_host::DialogHost;
pub use edit_ingredient_form::EditIngredientForm;
pub use ingredient_list::IngredientListView;
pub use inline_delete::InlineDeleteButton;
pub use list_selector::ListSelector;
pub use log_panel::LogPanel;
pub use modal::Modal;
pub use name_dialog::NameDialog;
pub use scaling_control::ScalingControl;
pub use snackbar::Snackbar;
pub use sub_ingredient_form::SubIngredientForm;
pub use unit_select::UnitSelect;
pub use voice_input_modal::VoiceInputModal;
