pub mod controller;
pub mod state;

pub use controller::SelectionController;
pub use state::SelectionState;
