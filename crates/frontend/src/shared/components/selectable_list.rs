//! Список выбираемых элементов одной категории
//!
//! Клик по строке инвертирует выбор; активная строка получает класс `active`.
//! Строки рендерятся кнопками `type="button"`, чтобы клик внутри формы не отправлял её.

use crate::shared::selection::SelectionController;
use contracts::enums::ItemCategory;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SelectableList(
    controller: SelectionController,
    category: ItemCategory,
) -> impl IntoView {
    let items = controller.items(category);

    if items.is_empty() {
        return view! {
            <div class="list-group list-group--empty">
                {format!("No {} to select", category.display_name().to_lowercase())}
            </div>
        }
        .into_any();
    }

    view! {
        <div class="list-group" data-category=category.code()>
            {items.into_iter().map(|item| {
                let id_for_class = item.id.clone();
                let id_for_click = item.id.clone();
                view! {
                    <button
                        type="button"
                        class="list-group-item list-group-item-action d-flex justify-content-between align-items-center"
                        class:active=move || controller.is_selected(category, &id_for_class)
                        data-id=item.id
                        on:click=move |_| controller.toggle(category, &id_for_click)
                    >
                        <span>{item.label}</span>
                        {item.detail.map(|detail| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                {detail}
                            </Badge>
                        })}
                    </button>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}
