use crate::enums::ItemCategory;
use thiserror::Error;

/// Ни один элемент категории не выбран.
///
/// `Display` даёт ровно тот текст, который показывается пользователю.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please select at least one (1) {category}")]
pub struct EmptySelection {
    pub category: ItemCategory,
}

/// Ошибки построения набора выбираемых элементов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{category} item has an empty identifier")]
    EmptyIdentifier { category: ItemCategory },

    #[error("{category} identifier {id:?} contains the field delimiter")]
    DelimiterInIdentifier { category: ItemCategory, id: String },

    #[error("duplicate {category} item {id:?}")]
    DuplicateItem { category: ItemCategory, id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_notice_text() {
        assert_eq!(
            EmptySelection { category: ItemCategory::Playlist }.to_string(),
            "Please select at least one (1) playlist"
        );
        assert_eq!(
            EmptySelection { category: ItemCategory::Artist }.to_string(),
            "Please select at least one (1) artist"
        );
    }

    #[test]
    fn test_selection_error_messages() {
        let err = SelectionError::DuplicateItem {
            category: ItemCategory::Artist,
            id: "Muse".into(),
        };
        assert_eq!(err.to_string(), "duplicate artist item \"Muse\"");
    }
}
