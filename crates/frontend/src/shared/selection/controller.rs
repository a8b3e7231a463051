use super::state::SelectionState;
use contracts::enums::ItemCategory;
use contracts::shared::selection::{EmptySelection, SelectableItem, SelectionSet};
use leptos::prelude::*;

/// Реактивная обёртка над [`SelectionState`].
///
/// Компоненты списка читают состояние через сигнал и перерисовываются
/// при переключении; форма синхронизирует скрытое поле только при отправке.
#[derive(Clone, Copy)]
pub struct SelectionController {
    state: RwSignal<SelectionState>,
}

impl SelectionController {
    pub fn new(items: Vec<SelectableItem>) -> Self {
        Self {
            state: RwSignal::new(SelectionState::from_items(items)),
        }
    }

    pub fn items(&self, category: ItemCategory) -> Vec<SelectableItem> {
        self.state
            .with(|s| s.items(category).cloned().collect())
    }

    pub fn is_selected(&self, category: ItemCategory, id: &str) -> bool {
        self.state.with(|s| s.is_selected(category, id))
    }

    pub fn selected_count(&self, category: ItemCategory) -> usize {
        self.state.with(|s| s.selected_count(category))
    }

    pub fn toggle(&self, category: ItemCategory, id: &str) {
        // Неизвестный id не должен будить подписчиков
        if !self.state.with_untracked(|s| s.contains(category, id)) {
            log::warn!("toggle for unknown {category} item {id:?}");
            return;
        }

        let mut selected = false;
        self.state
            .update(|s| selected = s.toggle(category, id).unwrap_or_default());
        log::debug!("{category} {id:?} selected={selected}");
    }

    pub fn collect_selected(&self, category: ItemCategory) -> Option<SelectionSet> {
        self.state.with_untracked(|s| s.collect_selected(category))
    }

    /// Записывает текущий выбор в скрытое поле и возвращает записанное значение
    pub fn sync_output_field(&self, category: ItemCategory) -> String {
        let mut value = String::new();
        self.state
            .update(|s| value = s.sync_output_field(category));
        value
    }

    pub fn output_field(&self, category: ItemCategory) -> String {
        self.state.with(|s| s.output_field(category).to_string())
    }

    pub fn validate_selection(
        &self,
        category: ItemCategory,
    ) -> Result<SelectionSet, EmptySelection> {
        self.state
            .with_untracked(|s| s.validate_selection(category))
    }
}
