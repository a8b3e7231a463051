use crate::shared::selection::SelectionController;
use contracts::enums::ItemCategory;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

/// Форма со скрытым полем выбранных элементов.
///
/// Перед отправкой синхронизирует скрытое поле и проверяет, что выбран хотя бы
/// один элемент. Пустой выбор отменяет отправку и показывает блокирующий alert.
#[component]
pub fn SelectionForm(
    controller: SelectionController,
    category: ItemCategory,
    /// URL, на который уходит форма
    #[prop(into)]
    action: String,
    #[prop(into)]
    submit_label: String,
    children: Children,
) -> impl IntoView {
    let field_ref: NodeRef<html::Input> = NodeRef::new();

    let on_submit = move |ev: SubmitEvent| {
        let value = controller.sync_output_field(category);
        // Реактивное обновление prop:value применится позже, чем браузер соберёт форму
        if let Some(input) = field_ref.get_untracked() {
            input.set_value(&value);
        }

        match controller.validate_selection(category) {
            Ok(selection) => {
                log::info!("submitting {} {category} item(s)", selection.len());
            }
            Err(err) => {
                ev.prevent_default();
                log::warn!("{err}");
                notify(&err.to_string());
            }
        }
    };

    view! {
        <form class="selection-form" method="post" action=action on:submit=on_submit>
            {children()}
            <input
                type="hidden"
                name=category.field_name()
                node_ref=field_ref
                prop:value=move || controller.output_field(category)
            />
            <div class="selection-form__actions">
                <button type="submit" class="button button--primary">
                    {move || format!("{} ({})", submit_label, controller.selected_count(category))}
                </button>
            </div>
        </form>
    }
}

fn notify(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
