//! Чтение данных, встроенных в страницу как `<script type="application/json" id="...">`

use serde::de::DeserializeOwned;

/// Текстовое содержимое элемента по id, если он есть в документе
pub fn embedded_text(element_id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(element_id)?.text_content()
}

/// Десериализует JSON из элемента страницы
pub fn read_embedded_json<T: DeserializeOwned>(element_id: &str) -> Result<T, String> {
    let text = embedded_text(element_id)
        .ok_or_else(|| format!("Data block #{element_id} not found on the page"))?;
    parse_embedded_json(element_id, &text)
}

pub fn parse_embedded_json<T: DeserializeOwned>(element_id: &str, text: &str) -> Result<T, String> {
    serde_json::from_str(text).map_err(|e| format!("Malformed data in #{element_id}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_playlist::aggregate::Playlist;

    #[test]
    fn test_parse_playlists() {
        let playlists: Vec<Playlist> = parse_embedded_json(
            "playlists-data",
            r#"[{"id":"p1","name":"Mix","tracks_total":12},{"id":"p2","name":"Chill"}]"#,
        )
        .unwrap();
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].tracks_total, Some(12));
    }

    #[test]
    fn test_parse_error_names_element() {
        let err = parse_embedded_json::<Vec<Playlist>>("playlists-data", "{").unwrap_err();
        assert!(err.starts_with("Malformed data in #playlists-data"));
    }
}
