// src/version.rs
//! Версии Minecraft, известные движку генерации
//!
//! Порядок вариантов совпадает с порядком идентификаторов движка: сравнение версий
//! (`<`, `>=`) соответствует хронологии релизов. `Undefined` — значение для
//! нераспознанного текста и для ещё не настроенного генератора.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Версия Minecraft, для которой настраивается генератор
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum McVersion {
    #[default]
    Undefined = 0,
    Beta1_7,
    Beta1_8,
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V1_6,
    V1_7,
    V1_8,
    V1_9,
    V1_10,
    V1_11,
    V1_12,
    V1_13,
    V1_14,
    V1_15,
    V1_16_1,
    V1_16,
    V1_17,
    V1_18,
    V1_19_2,
    V1_19,
    V1_20,
    V1_21_1,
    V1_21_3,
    /// 1.21 Winter Drop
    V1_21Wd,
}

/// Ошибка разбора текстового названия версии
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("unknown Minecraft version: {0:?}")]
    Unknown(String),
}

/// Каноническое название и допустимые синонимы для каждой версии.
const VERSION_NAMES: &[(McVersion, &str, &[&str])] = &[
    (McVersion::Beta1_7, "Beta 1.7", &[]),
    (McVersion::Beta1_8, "Beta 1.8", &[]),
    (McVersion::V1_0, "1.0", &["1.0.0"]),
    (McVersion::V1_1, "1.1", &["1.1.0"]),
    (McVersion::V1_2, "1.2", &["1.2.5"]),
    (McVersion::V1_3, "1.3", &["1.3.2"]),
    (McVersion::V1_4, "1.4", &["1.4.7"]),
    (McVersion::V1_5, "1.5", &["1.5.2"]),
    (McVersion::V1_6, "1.6", &["1.6.4"]),
    (McVersion::V1_7, "1.7", &["1.7.10"]),
    (McVersion::V1_8, "1.8", &["1.8.9"]),
    (McVersion::V1_9, "1.9", &["1.9.4"]),
    (McVersion::V1_10, "1.10", &["1.10.2"]),
    (McVersion::V1_11, "1.11", &["1.11.2"]),
    (McVersion::V1_12, "1.12", &["1.12.2"]),
    (McVersion::V1_13, "1.13", &["1.13.2"]),
    (McVersion::V1_14, "1.14", &["1.14.4"]),
    (McVersion::V1_15, "1.15", &["1.15.2"]),
    (McVersion::V1_16_1, "1.16.1", &[]),
    (McVersion::V1_16, "1.16", &["1.16.5"]),
    (McVersion::V1_17, "1.17", &["1.17.1"]),
    (McVersion::V1_18, "1.18", &["1.18.2"]),
    (McVersion::V1_19_2, "1.19.2", &[]),
    (McVersion::V1_19, "1.19", &["1.19.4"]),
    (McVersion::V1_20, "1.20", &["1.20.6"]),
    (McVersion::V1_21_1, "1.21.1", &[]),
    (McVersion::V1_21_3, "1.21.3", &[]),
    (McVersion::V1_21Wd, "1.21 WD", &["1.21"]),
];

impl McVersion {
    /// Самая новая поддерживаемая версия
    pub const NEWEST: McVersion = McVersion::V1_21Wd;

    /// Версия, на которую всегда настраивается генератор в [`crate::seed_generator`]
    pub const PINNED: McVersion = McVersion::V1_21_3;

    /// Разбирает название версии. Нераспознанный текст даёт `Undefined`.
    ///
    /// # Примеры
    /// ```
    /// use mcseed::McVersion;
    /// assert_eq!(McVersion::parse("1.2"), McVersion::V1_2);
    /// assert_eq!(McVersion::parse("1.21"), McVersion::V1_21Wd);
    /// assert!(McVersion::parse("lorelei").is_undefined());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> McVersion {
        let text = text.trim();
        VERSION_NAMES
            .iter()
            .find(|(_, name, aliases)| *name == text || aliases.contains(&text))
            .map_or(McVersion::Undefined, |&(version, _, _)| version)
    }

    /// Каноническое название версии (`None` для `Undefined`)
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        VERSION_NAMES
            .iter()
            .find(|(version, _, _)| *version == self)
            .map(|&(_, name, _)| name)
    }

    /// Числовой идентификатор версии в движке
    #[must_use]
    pub fn raw(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn from_raw(raw: i32) -> Option<McVersion> {
        Self::all().find(|version| version.raw() == raw)
    }

    #[must_use]
    pub fn is_undefined(self) -> bool {
        self == McVersion::Undefined
    }

    /// Все версии от `Undefined` до [`McVersion::NEWEST`] включительно
    pub fn all() -> impl Iterator<Item = McVersion> {
        std::iter::once(McVersion::Undefined)
            .chain(VERSION_NAMES.iter().map(|&(version, _, _)| version))
    }
}

impl fmt::Display for McVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("undefined"))
    }
}

impl FromStr for McVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match McVersion::parse(s) {
            McVersion::Undefined => Err(VersionError::Unknown(s.to_owned())),
            version => Ok(version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_and_aliases() {
        assert_eq!(McVersion::parse("Beta 1.7"), McVersion::Beta1_7);
        assert_eq!(McVersion::parse("1.12.2"), McVersion::V1_12);
        assert_eq!(McVersion::parse("1.16.1"), McVersion::V1_16_1);
        assert_eq!(McVersion::parse("1.16.5"), McVersion::V1_16);
        assert_eq!(McVersion::parse(" 1.21.3 "), McVersion::V1_21_3);
        assert_eq!(McVersion::parse("1.21"), McVersion::NEWEST);
    }

    #[test]
    fn unknown_text_is_undefined() {
        assert!(McVersion::parse("lorelei").is_undefined());
        assert!(McVersion::parse("").is_undefined());
        assert_eq!(
            "1.99".parse::<McVersion>(),
            Err(VersionError::Unknown("1.99".to_owned()))
        );
    }

    #[test]
    fn names_round_trip_through_parse() {
        for version in McVersion::all().filter(|v| !v.is_undefined()) {
            let name = version.name().expect("every defined version has a name");
            assert_eq!(McVersion::parse(name), version);
            assert_eq!(version.to_string(), name);
        }
        assert_eq!(McVersion::Undefined.name(), None);
    }

    #[test]
    fn all_is_ordered_and_ends_with_newest() {
        let versions: Vec<_> = McVersion::all().collect();
        assert_eq!(versions.first(), Some(&McVersion::Undefined));
        assert_eq!(versions.last(), Some(&McVersion::NEWEST));
        assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
        for (index, version) in versions.iter().enumerate() {
            assert_eq!(version.raw(), index as i32);
            assert_eq!(McVersion::from_raw(index as i32), Some(*version));
        }
        assert_eq!(McVersion::from_raw(-1), None);
    }
}
