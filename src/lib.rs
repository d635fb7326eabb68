pub mod config;
pub mod dimension;
pub mod generator;
pub mod range;
pub mod version;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use dimension::Dimension;
pub use generator::{Generator, GeneratorError, GeneratorFlags, seed_generator};
pub use range::{Point3D, Scale, WorldRange};
pub use version::{McVersion, VersionError};
pub use world::{MinecraftWorld, WorldError};
