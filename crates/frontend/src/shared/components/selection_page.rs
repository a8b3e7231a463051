use super::{selectable_list::SelectableList, selection_form::SelectionForm};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SELECT};
use crate::shared::selection::SelectionController;
use contracts::enums::ItemCategory;
use contracts::shared::selection::SelectableItem;
use leptos::prelude::*;

/// Страница выбора элементов одной категории: заголовок, список и форма отправки.
///
/// Ошибка загрузки данных показывается вместо списка.
#[component]
pub fn SelectionPage(
    page_id: &'static str,
    category: ItemCategory,
    #[prop(into)]
    title: String,
    #[prop(into)]
    action: String,
    #[prop(into)]
    submit_label: String,
    items: Result<Vec<SelectableItem>, String>,
) -> impl IntoView {
    let controller = items.map(|items| {
        log::info!("{page_id}: {} {category} item(s)", items.len());
        SelectionController::new(items)
    });

    let content = match controller {
        Ok(controller) => view! {
            <SelectionForm controller=controller category=category action=action submit_label=submit_label>
                <SelectableList controller=controller category=category />
            </SelectionForm>
        }
        .into_any(),
        Err(e) => {
            log::error!("{page_id}: {e}");
            view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_SELECT>
            <div class="page__header">
                <h1 class="header__title">{title}</h1>
            </div>
            <div class="page__content">
                {content}
            </div>
        </PageFrame>
    }
}
