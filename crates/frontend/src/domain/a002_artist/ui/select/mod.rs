use crate::shared::components::SelectionPage;
use crate::shared::config::FrontendConfig;
use crate::shared::page_data::read_embedded_json;
use contracts::domain::a002_artist::aggregate::Artist;
use contracts::enums::ItemCategory;
use contracts::shared::selection::SelectableItem;
use leptos::prelude::*;

/// Выбор исполнителей, для которых будут созданы отдельные плейлисты
#[component]
#[allow(non_snake_case)]
pub fn ArtistSelect() -> impl IntoView {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let category = ItemCategory::Artist;

    let items = read_embedded_json::<Vec<Artist>>(config.data_element_id(category))
        .map(|artists| artists.into_iter().map(SelectableItem::from).collect());

    view! {
        <SelectionPage
            page_id="a002_artist--select"
            category=category
            title="Select artists"
            action=config.form_action(category).to_string()
            submit_label="Generate"
            items=items
        />
    }
}
