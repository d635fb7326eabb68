// src/generator.rs
//! Контекст генератора и его предварительная настройка
//!
//! [`Generator`] принадлежит вызывающей стороне и передаётся по `&mut`: модуль
//! никогда не создаёт и не освобождает контекст сам. Настройка проходит в два шага:
//! 1. [`Generator::setup`] — версия и флаги;
//! 2. [`Generator::apply_seed`] — сид и измерение.
//!
//! [`seed_generator`] выполняет оба шага с зафиксированными версией и измерением.

use bitflags::bitflags;
use thiserror::Error;

use crate::dimension::Dimension;
use crate::version::McVersion;

bitflags! {
    /// Флаги настройки генератора
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GeneratorFlags: u32 {
        const LARGE_BIOMES         = 0x1;
        const NO_BETA_OCEAN        = 0x2;
        const FORCE_OCEAN_VARIANTS = 0x4;
    }
}

impl Default for GeneratorFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("generator must be set up for a version before a seed is applied")]
    Uninitialized,
}

/// Изменяемое состояние движка генерации
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Generator {
    mc: McVersion,
    flags: GeneratorFlags,
    seed: u64,
    dimension: Dimension,
}

impl Generator {
    /// Создаёт ненастроенный контекст
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Настраивает контекст под версию и флаги. Предыдущий сид сбрасывается.
    pub fn setup(&mut self, mc: McVersion, flags: GeneratorFlags) {
        *self = Self {
            mc,
            flags,
            ..Self::default()
        };
    }

    /// Применяет сид для измерения
    ///
    /// Возвращает [`GeneratorError::Uninitialized`], если контекст не прошёл
    /// [`Generator::setup`]; состояние при этом не меняется.
    pub fn apply_seed(&mut self, dimension: Dimension, seed: u64) -> Result<(), GeneratorError> {
        if !self.is_initialized() {
            return Err(GeneratorError::Uninitialized);
        }
        self.store_seed(dimension, seed);
        Ok(())
    }

    fn store_seed(&mut self, dimension: Dimension, seed: u64) {
        self.dimension = dimension;
        self.seed = seed;
    }

    #[must_use]
    pub fn mc(&self) -> McVersion {
        self.mc
    }

    #[must_use]
    pub fn flags(&self) -> GeneratorFlags {
        self.flags
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.mc.is_undefined()
    }

    #[must_use]
    pub fn has_large_biomes(&self) -> bool {
        self.flags.contains(GeneratorFlags::LARGE_BIOMES)
    }
}

/// Настраивает генератор и применяет к нему сид
///
/// Версия, флаги и измерение принимаются, но не передаются дальше: контекст всегда
/// настраивается на [`McVersion::PINNED`] без флагов, а сид применяется для
/// [`Dimension::Overworld`]. Знаковый сид переинтерпретируется как `u64`
/// (`-1` → `0xFFFF_FFFF_FFFF_FFFF`).
pub fn seed_generator(
    generator: &mut Generator,
    _mc: McVersion,
    _flags: GeneratorFlags,
    seed: i64,
    _dimension: Dimension,
) {
    generator.setup(McVersion::PINNED, GeneratorFlags::empty());
    generator.store_seed(Dimension::Overworld, seed as u64);
}
