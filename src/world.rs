// src/world.rs
//! Описание мира Minecraft: версия, сид и настройки генерации
//!
//! [`MinecraftWorld`] — лёгкое значение, из которого по запросу строятся
//! заранее засеянные контексты [`Generator`].

use thiserror::Error;

use crate::dimension::Dimension;
use crate::generator::{Generator, GeneratorFlags, seed_generator};
use crate::version::McVersion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("invalid Minecraft version number: {0:?}")]
    InvalidVersionNumber(String),
}

/// Мир Minecraft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinecraftWorld {
    pub version: McVersion,
    pub seed: i64,
    /// Режим «Большие биомы»
    pub large_biomes: bool,
}

impl MinecraftWorld {
    #[must_use]
    pub fn new(version: McVersion, seed: i64) -> Self {
        Self {
            version,
            seed,
            large_biomes: false,
        }
    }

    /// Создаёт мир по текстовому названию версии
    ///
    /// # Ошибки
    /// [`WorldError::InvalidVersionNumber`], если название не распознано.
    pub fn from_version_str(version: &str, seed: i64) -> Result<Self, WorldError> {
        let mc = McVersion::parse(version);
        if mc.is_undefined() {
            return Err(WorldError::InvalidVersionNumber(version.to_owned()));
        }
        Ok(Self::new(mc, seed))
    }

    #[must_use]
    pub fn flags(&self) -> GeneratorFlags {
        if self.large_biomes {
            GeneratorFlags::LARGE_BIOMES
        } else {
            GeneratorFlags::empty()
        }
    }

    /// Строит засеянный генератор для измерения
    #[must_use]
    pub fn generator(&self, dimension: Dimension) -> Generator {
        let mut generator = Generator::new();
        seed_generator(
            &mut generator,
            self.version,
            self.flags(),
            self.seed,
            dimension,
        );

        log::debug!(
            "Seeded generator for {} ({:?}) with seed {}",
            generator.mc(),
            generator.dimension(),
            generator.seed()
        );
        if generator.mc() != self.version
            || generator.flags() != self.flags()
            || generator.dimension() != dimension
        {
            log::warn!(
                "Requested {} / {:?} / {:?}, but the generator is pinned to {} / {:?} / {:?}",
                self.version,
                dimension,
                self.flags(),
                generator.mc(),
                generator.dimension(),
                generator.flags()
            );
        }

        generator
    }
}
