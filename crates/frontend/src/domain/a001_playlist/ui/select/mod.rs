use crate::shared::components::SelectionPage;
use crate::shared::config::FrontendConfig;
use crate::shared::page_data::read_embedded_json;
use contracts::domain::a001_playlist::aggregate::Playlist;
use contracts::enums::ItemCategory;
use contracts::shared::selection::SelectableItem;
use leptos::prelude::*;

/// Выбор плейлистов, с которыми пользователь будет работать дальше
#[component]
#[allow(non_snake_case)]
pub fn PlaylistSelect() -> impl IntoView {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let category = ItemCategory::Playlist;

    let items = read_embedded_json::<Vec<Playlist>>(config.data_element_id(category))
        .map(|playlists| playlists.into_iter().map(SelectableItem::from).collect());

    view! {
        <SelectionPage
            page_id="a001_playlist--select"
            category=category
            title="Select playlists"
            action=config.form_action(category).to_string()
            submit_label="Continue"
            items=items
        />
    }
}
