use crate::shared::page_data;
use contracts::enums::ItemCategory;
use serde::Deserialize;
use std::str::FromStr;

/// Id элемента страницы с конфигурацией фронтенда
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FrontendConfig {
    /// Уровень логирования в консоль браузера
    pub log_level: String,
    pub forms: FormsConfig,
    pub data: DataConfig,
}

/// Куда отправляются формы выбора
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    pub playlists_action: String,
    pub artists_action: String,
}

/// Id элементов страницы со встроенными списками
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub playlists_element_id: String,
    pub artists_element_id: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            forms: FormsConfig::default(),
            data: DataConfig::default(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            playlists_action: "/select_option".to_string(),
            artists_action: "/result".to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            playlists_element_id: "playlists-data".to_string(),
            artists_element_id: "artists-data".to_string(),
        }
    }
}

impl FrontendConfig {
    /// Неизвестный уровень трактуется как `debug`
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Debug)
    }

    pub fn form_action(&self, category: ItemCategory) -> &str {
        match category {
            ItemCategory::Playlist => &self.forms.playlists_action,
            ItemCategory::Artist => &self.forms.artists_action,
        }
    }

    pub fn data_element_id(&self, category: ItemCategory) -> &str {
        match category {
            ItemCategory::Playlist => &self.data.playlists_element_id,
            ItemCategory::Artist => &self.data.artists_element_id,
        }
    }
}

/// Load configuration from the `#app-config` block.
///
/// Falls back to defaults when the block is absent; a malformed block is an error
/// so the caller can report it once logging is up.
pub fn load_config() -> Result<FrontendConfig, String> {
    match page_data::embedded_text(CONFIG_ELEMENT_ID) {
        Some(text) => page_data::parse_embedded_json(CONFIG_ELEMENT_ID, &text),
        None => Ok(FrontendConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FrontendConfig =
            serde_json::from_str(r#"{"forms":{"artists_action":"/generate"}}"#).unwrap();

        assert_eq!(config.form_action(ItemCategory::Artist), "/generate");
        assert_eq!(config.form_action(ItemCategory::Playlist), "/select_option");
        assert_eq!(config.data_element_id(ItemCategory::Playlist), "playlists-data");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FrontendConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FrontendConfig::default());
    }

    #[test]
    fn test_log_level() {
        let config = FrontendConfig {
            log_level: "warn".into(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);

        let config = FrontendConfig {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
