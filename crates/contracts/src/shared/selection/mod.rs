//! Общие типы выбора элементов списка: элемент, сериализуемый набор, ошибки

pub mod error;
pub mod item;
pub mod set;

pub use error::{EmptySelection, SelectionError};
pub use item::SelectableItem;
pub use set::{SelectionSet, FIELD_DELIMITER};
