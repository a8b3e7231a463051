//! Чистая модель выбора: элементы в порядке документа и индекс по (категория, id).
//!
//! Не зависит от DOM и реактивности, поэтому тестируется без браузера.

use contracts::enums::ItemCategory;
use contracts::shared::selection::{
    EmptySelection, SelectableItem, SelectionError, SelectionSet, FIELD_DELIMITER,
};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    /// Элементы в порядке документа
    items: Vec<SelectableItem>,
    index: HashMap<(ItemCategory, String), usize>,
    /// Последнее записанное значение скрытого поля по категориям
    output_fields: HashMap<ItemCategory, String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Строит модель из элементов страницы. Элементы, которые нельзя
    /// зарегистрировать, пропускаются с предупреждением; остальные остаются доступны.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SelectableItem>,
    {
        let mut state = Self::new();
        for item in items {
            if let Err(e) = state.register(item) {
                log::warn!("skipping item: {e}");
            }
        }
        state
    }

    /// Добавить элемент в конец списка своей категории
    pub fn register(&mut self, item: SelectableItem) -> Result<(), SelectionError> {
        let category = item.category;
        if item.id.is_empty() {
            return Err(SelectionError::EmptyIdentifier { category });
        }
        if item.id.contains(FIELD_DELIMITER) {
            return Err(SelectionError::DelimiterInIdentifier {
                category,
                id: item.id,
            });
        }

        let key = (category, item.id.clone());
        if self.index.contains_key(&key) {
            return Err(SelectionError::DuplicateItem {
                category,
                id: item.id,
            });
        }

        self.index.insert(key, self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self, category: ItemCategory) -> impl Iterator<Item = &SelectableItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    pub fn contains(&self, category: ItemCategory, id: &str) -> bool {
        self.position(category, id).is_some()
    }

    pub fn is_selected(&self, category: ItemCategory, id: &str) -> bool {
        self.position(category, id)
            .map(|pos| self.items[pos].selected)
            .unwrap_or(false)
    }

    pub fn selected_count(&self, category: ItemCategory) -> usize {
        self.items(category).filter(|i| i.selected).count()
    }

    /// Инвертирует выбор элемента. Возвращает новое состояние,
    /// `None` если элемента нет.
    pub fn toggle(&mut self, category: ItemCategory, id: &str) -> Option<bool> {
        let pos = self.position(category, id)?;
        let item = &mut self.items[pos];
        item.selected = !item.selected;
        Some(item.selected)
    }

    /// Идентификаторы выбранных элементов в порядке документа.
    /// `None`, если ничего не выбрано.
    pub fn collect_selected(&self, category: ItemCategory) -> Option<SelectionSet> {
        let ids: Vec<String> = self
            .items(category)
            .filter(|i| i.selected)
            .map(|i| i.id.clone())
            .collect();

        if ids.is_empty() {
            None
        } else {
            Some(SelectionSet::new(ids))
        }
    }

    /// Перезаписывает скрытое поле категории текущим выбором и возвращает записанное значение
    pub fn sync_output_field(&mut self, category: ItemCategory) -> String {
        let value = SelectionSet::encode_optional(self.collect_selected(category).as_ref());
        self.output_fields.insert(category, value.clone());
        value
    }

    /// Значение скрытого поля на момент последней синхронизации
    pub fn output_field(&self, category: ItemCategory) -> &str {
        self.output_fields
            .get(&category)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn validate_selection(
        &self,
        category: ItemCategory,
    ) -> Result<SelectionSet, EmptySelection> {
        self.collect_selected(category)
            .ok_or(EmptySelection { category })
    }

    fn position(&self, category: ItemCategory, id: &str) -> Option<usize> {
        self.index.get(&(category, id.to_string())).copied()
    }
}
