pub mod selectable_list;
pub mod selection_form;
pub mod selection_page;

pub use selectable_list::SelectableList;
pub use selection_form::SelectionForm;
pub use selection_page::SelectionPage;
