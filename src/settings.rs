//! Startup configuration.
//!
//! Read once from an INI file (overridable through `CARDKEEPER_*`
//! environment variables) and never changed afterwards.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;
use crate::persist::PersistenceMode;
use crate::position::GridLayout;

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSection {
    pub total_cards: i64,
    pub rows_in_page: i64,
    pub columns_in_page: i64,
    pub name_offset: i64,
    #[serde(default)]
    pub layout: GridLayout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSection {
    pub file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileSettings {
    pub collection: CollectionSection,
    pub database: DatabaseSection,
}

impl FileSettings {
    pub fn load(path: &str) -> Result<FileSettings> {
        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Ini))
            .add_source(
                Environment::with_prefix("CARDKEEPER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn from_ini_str(ini: &str) -> Result<FileSettings> {
        let settings = Config::builder()
            .add_source(File::from_str(ini, FileFormat::Ini))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn persistence_mode(&self) -> PersistenceMode {
        PersistenceMode::File(self.database.file.clone())
    }

    pub fn into_settings(self, read_only: bool) -> Settings {
        let collection = self.collection;
        Settings {
            total_cards: collection.total_cards,
            rows_in_page: collection.rows_in_page,
            columns_in_page: collection.columns_in_page,
            name_offset: collection.name_offset,
            layout: collection.layout,
            read_only,
        }
    }
}

/// Everything the collection needs to know about the album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub total_cards: i64,
    pub rows_in_page: i64,
    pub columns_in_page: i64,
    pub name_offset: i64,
    pub layout: GridLayout,
    pub read_only: bool,
}

impl Settings {
    pub fn new(total_cards: i64, rows_in_page: i64, columns_in_page: i64) -> Self {
        Self {
            total_cards,
            rows_in_page,
            columns_in_page,
            name_offset: 0,
            layout: GridLayout::default(),
            read_only: false,
        }
    }
    pub fn with_offset(mut self, name_offset: i64) -> Self {
        self.name_offset = name_offset;
        self
    }
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
[collection]
total_cards = 240
rows_in_page = 5
columns_in_page = 4
name_offset = -2

[database]
file = album.db
";

    #[test]
    fn parses_ini_sections() {
        let file = FileSettings::from_ini_str(SAMPLE).expect("config");
        assert_eq!(file.persistence_mode(), PersistenceMode::File("album.db".into()));
        let settings = file.into_settings(true);
        assert_eq!(settings.total_cards, 240);
        assert_eq!(settings.name_offset, -2);
        assert_eq!(settings.layout, GridLayout::Legacy);
        assert!(settings.read_only);
    }

    #[test]
    fn layout_can_be_chosen() {
        let ini = SAMPLE.replace("name_offset = -2", "name_offset = 0\nlayout = row-major");
        let settings = FileSettings::from_ini_str(&ini).expect("config").into_settings(false);
        assert_eq!(settings.layout, GridLayout::RowMajor);
    }

    #[test]
    fn environment_overrides_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("album.ini");
        let ini = SAMPLE
            .replace("total_cards = 240", "total_cards = 12")
            .replace("name_offset = -2", "name_offset = -3\nlayout = row-major");
        std::fs::write(&path, ini).expect("write");
        // no other test reads this variable
        unsafe { std::env::set_var("CARDKEEPER_COLLECTION__TOTAL_CARDS", "30") };
        let loaded = FileSettings::load(path.to_str().expect("utf8 path"));
        unsafe { std::env::remove_var("CARDKEEPER_COLLECTION__TOTAL_CARDS") };
        let settings = loaded.expect("config").into_settings(false);
        assert_eq!(settings.total_cards, 30);
        assert_eq!(settings.rows_in_page, 5);
        assert_eq!(settings.name_offset, -3);
        assert_eq!(settings.layout, GridLayout::RowMajor);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nowhere.ini");
        let err = FileSettings::load(path.to_str().expect("utf8 path")).unwrap_err();
        assert!(matches!(err, crate::error::CardkeeperError::Config(_)));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let ini = SAMPLE.replace("rows_in_page = 5\n", "");
        let err = FileSettings::from_ini_str(&ini).unwrap_err();
        assert!(matches!(err, crate::error::CardkeeperError::Config(_)));
    }
}
