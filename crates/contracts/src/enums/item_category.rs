/// Категории выбираемых элементов списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Playlist,
    Artist,
}

impl ItemCategory {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            ItemCategory::Playlist => "playlist",
            ItemCategory::Artist => "artist",
        }
    }

    /// Имя скрытого поля формы, в которое сериализуется выбор
    pub fn field_name(&self) -> &'static str {
        match self {
            ItemCategory::Playlist => "selected_playlists",
            ItemCategory::Artist => "selected_artists",
        }
    }

    /// Получить человекочитаемое название (множественное число)
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCategory::Playlist => "Playlists",
            ItemCategory::Artist => "Artists",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(ItemCategory::Playlist.field_name(), "selected_playlists");
        assert_eq!(ItemCategory::Artist.field_name(), "selected_artists");
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(ItemCategory::Artist.to_string(), "artist");
        assert_eq!(format!("{}", ItemCategory::Playlist), "playlist");
    }
}
