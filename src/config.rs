// src/config.rs
//! Конфигурация мира
//!
//! Параметры, из которых строится [`MinecraftWorld`]:
//! - сид (обязателен);
//! - версия Minecraft (по умолчанию `1.21.3`);
//! - измерение (по умолчанию верхний мир);
//! - режим «Большие биомы».
//!
//! Конфигурация загружается из TOML-файлов.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dimension::Dimension;
use crate::version::McVersion;
use crate::world::{MinecraftWorld, WorldError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Параметры мира
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Сид мира (знаковый, как в игре)
    pub seed: i64,

    /// Название версии Minecraft, например `"1.21.3"` или `"Beta 1.8"`
    #[serde(default = "default_version")]
    pub version: String,

    /// Измерение (по умолчанию `overworld`)
    #[serde(default)]
    pub dimension: Dimension,

    #[serde(default)]
    pub large_biomes: bool,
}

fn default_version() -> String {
    McVersion::PINNED.to_string()
}

impl WorldConfig {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # world.toml
    /// seed = 3257840388504953787
    /// version = "1.21"
    /// dimension = "nether"
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Проверяет версию и строит описание мира
    pub fn to_world(&self) -> Result<MinecraftWorld, ConfigError> {
        let mut world = MinecraftWorld::from_version_str(&self.version, self.seed)?;
        world.large_biomes = self.large_biomes;
        Ok(world)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            version: default_version(),
            dimension: Dimension::Overworld,
            large_biomes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = WorldConfig::from_toml_str("seed = -42").unwrap();
        assert_eq!(
            config,
            WorldConfig {
                seed: -42,
                ..WorldConfig::default()
            }
        );
    }

    #[test]
    fn default_version_is_pinned_version() {
        let config = WorldConfig::from_toml_str("seed = 1").unwrap();
        assert_eq!(McVersion::parse(&config.version), McVersion::PINNED);
    }

    #[test]
    fn missing_seed_is_an_error() {
        let err = WorldConfig::from_toml_str("version = \"1.18\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 3257840388504953787").unwrap();
        writeln!(file, "version = \"1.21\"").unwrap();
        writeln!(file, "dimension = \"nether\"").unwrap();
        writeln!(file, "large_biomes = true").unwrap();

        let config = WorldConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.dimension, Dimension::Nether);

        let world = config.to_world().unwrap();
        assert_eq!(world.version, McVersion::V1_21Wd);
        assert_eq!(world.seed, 3_257_840_388_504_953_787);
        assert!(world.large_biomes);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let config = WorldConfig {
            version: "lorelei".to_owned(),
            ..WorldConfig::default()
        };
        assert!(matches!(
            config.to_world(),
            Err(ConfigError::World(WorldError::InvalidVersionNumber(_)))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorldConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
