use crate::enums::ItemCategory;

/// Элемент списка, который пользователь может выбрать
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub category: ItemCategory,

    /// Стабильный идентификатор, попадает в скрытое поле формы
    pub id: String,

    /// Текст для отображения
    pub label: String,

    /// Дополнительная подпись справа (например, число треков)
    pub detail: Option<String>,

    pub selected: bool,
}

impl SelectableItem {
    pub fn new(category: ItemCategory, id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into(),
            label: label.into(),
            detail: None,
            selected: false,
        }
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}
