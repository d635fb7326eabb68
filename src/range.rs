use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Точка в трёхмерном пространстве мира
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point3D<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3D<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Add<Output = T>> Point3D<T> {
    /// Сдвигает точку по X и Z, высота не меняется
    #[must_use]
    pub fn offset(self, by: T) -> Self {
        Self {
            x: self.x + by,
            y: self.y,
            z: self.z + by,
        }
    }
}

impl Point3D<i32> {
    /// Точка на карте: двумерная координата (x, z) с высотой `1`
    #[must_use]
    pub fn from_xz(x: i32, z: i32) -> Self {
        Self { x, y: 1, z }
    }
}

/// Масштаб карты: сколько блоков приходится на одну ячейку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
}

impl Scale {
    #[must_use]
    pub fn blocks_per_cell(self) -> i32 {
        match self {
            Scale::XSmall => 1,
            Scale::Small => 4,
            Scale::Medium => 16,
            Scale::Large => 64,
            Scale::XLarge => 256,
        }
    }
}

fn default_range_size() -> i32 {
    4
}

/// Прямоугольная область мира вокруг точки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldRange {
    pub position: Point3D<i32>,
    pub scale: Point3D<i32>,
    #[serde(default = "default_range_size")]
    pub size: i32,
}

impl WorldRange {
    #[must_use]
    pub fn new(origin: Point3D<i32>, scale: Point3D<i32>, size: i32) -> Self {
        Self {
            position: origin,
            scale,
            size,
        }
    }

    /// Область с квадратными тайлами `tile_size × tile_size` и высотой в один блок
    #[must_use]
    pub fn scaling_to(origin: Point3D<i32>, tile_size: i32, map_size: i32) -> Self {
        Self {
            position: origin,
            scale: Point3D::new(tile_size, 1, tile_size),
            size: map_size,
        }
    }

    /// Область с размером по умолчанию (`4`)
    #[must_use]
    pub fn around(origin: Point3D<i32>, scale: Point3D<i32>) -> Self {
        Self::new(origin, scale, default_range_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_only_horizontal_axes() {
        let point = Point3D::new(116, 15, -31);
        assert_eq!(point.offset(-80), Point3D::new(36, 15, -111));
        assert_eq!(Point3D::from_xz(3, 4), Point3D::new(3, 1, 4));
    }

    #[test]
    fn scale_table() {
        let blocks: Vec<_> = [
            Scale::XSmall,
            Scale::Small,
            Scale::Medium,
            Scale::Large,
            Scale::XLarge,
        ]
        .into_iter()
        .map(Scale::blocks_per_cell)
        .collect();
        assert_eq!(blocks, [1, 4, 16, 64, 256]);
    }

    #[test]
    fn range_constructors() {
        let origin = Point3D::new(116, 15, -31);
        let range = WorldRange::scaling_to(origin, 256, 8);
        assert_eq!(range.scale, Point3D::new(256, 1, 256));
        assert_eq!(range.size, 8);

        let range = WorldRange::around(origin, Point3D::new(256, 1, 256));
        assert_eq!(range.size, 4);
        assert_eq!(range.position, origin);
    }
}
