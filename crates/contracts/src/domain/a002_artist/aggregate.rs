use crate::enums::ItemCategory;
use crate::shared::selection::SelectableItem;
use serde::{Deserialize, Serialize};

/// Исполнитель, найденный в выбранных плейлистах
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Идентификатор; если не передан, исполнитель идентифицируется по имени
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,
}

impl Artist {
    pub fn identifier(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

impl From<Artist> for SelectableItem {
    fn from(a: Artist) -> Self {
        let id = a.identifier().to_string();
        SelectableItem::new(ItemCategory::Artist, id, a.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_falls_back_to_name() {
        let a: Artist = serde_json::from_str(r#"{"name":"Boards of Canada"}"#).unwrap();
        assert_eq!(a.identifier(), "Boards of Canada");

        let item: SelectableItem = a.into();
        assert_eq!(item.id, "Boards of Canada");
        assert_eq!(item.category, ItemCategory::Artist);
    }

    #[test]
    fn test_explicit_identifier_wins() {
        let a = Artist {
            id: Some("4Z8W4fKeB5YxbusRsdQVPb".into()),
            name: "Radiohead".into(),
        };
        assert_eq!(a.identifier(), "4Z8W4fKeB5YxbusRsdQVPb");
    }
}
