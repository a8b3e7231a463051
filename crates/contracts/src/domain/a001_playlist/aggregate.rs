use crate::enums::ItemCategory;
use crate::shared::selection::SelectableItem;
use serde::{Deserialize, Serialize};

/// Плейлист пользователя, как его отдаёт страница со списком
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Идентификатор плейлиста у провайдера
    pub id: String,

    pub name: String,

    /// Количество треков (если известно)
    #[serde(default)]
    pub tracks_total: Option<u32>,
}

impl From<Playlist> for SelectableItem {
    fn from(p: Playlist) -> Self {
        let detail = p.tracks_total.map(|n| n.to_string());
        SelectableItem::new(ItemCategory::Playlist, p.id, p.name).with_detail(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_tracks() {
        let p: Playlist = serde_json::from_str(r#"{"id":"37i9dQ","name":"Focus"}"#).unwrap();
        assert_eq!(p.tracks_total, None);
    }

    #[test]
    fn test_into_selectable_item() {
        let item: SelectableItem = Playlist {
            id: "p1".into(),
            name: "Road trip".into(),
            tracks_total: Some(42),
        }
        .into();

        assert_eq!(item.category, ItemCategory::Playlist);
        assert_eq!(item.id, "p1");
        assert_eq!(item.label, "Road trip");
        assert_eq!(item.detail.as_deref(), Some("42"));
        assert!(!item.selected);
    }
}
