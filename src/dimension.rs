use serde::{Deserialize, Serialize};

/// Измерение мира, в котором применяется сид
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    #[default]
    Overworld,
    Nether,
    End,
}

impl Dimension {
    /// Значение измерения в движке: верхний мир `0`, Незер `-1`, Энд `1`
    #[must_use]
    pub fn raw(self) -> i32 {
        match self {
            Dimension::Overworld => 0,
            Dimension::Nether => -1,
            Dimension::End => 1,
        }
    }

    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Dimension::Overworld),
            -1 => Some(Dimension::Nether),
            1 => Some(Dimension::End),
            _ => None,
        }
    }
}
