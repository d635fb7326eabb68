use clap::{Parser, ValueEnum};
use mcseed::{Dimension, McVersion, MinecraftWorld, WorldConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DimensionArg {
    Overworld,
    Nether,
    End,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Overworld => Dimension::Overworld,
            DimensionArg::Nether => Dimension::Nether,
            DimensionArg::End => Dimension::End,
        }
    }
}

/// Предварительная настройка генератора мира Minecraft
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(
        short,
        long,
        conflicts_with_all = ["seed", "mc_version", "dimension", "large_biomes"]
    )]
    config: Option<PathBuf>,

    /// Сид мира
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        required_unless_present = "config"
    )]
    seed: Option<i64>,

    /// Версия Minecraft
    #[arg(short = 'm', long, default_value_t = McVersion::PINNED.to_string())]
    mc_version: String,

    /// Измерение
    #[arg(short, long, value_enum, default_value = "overworld")]
    dimension: DimensionArg,

    /// Режим «Большие биомы»
    #[arg(long)]
    large_biomes: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let (world, dimension) = match (&cli.config, cli.seed) {
        (Some(path), _) => {
            log::info!("Loading config from {}", path.display());
            let config = WorldConfig::from_toml_file(path)?;
            (config.to_world()?, config.dimension)
        }
        (None, Some(seed)) => {
            let mut world = MinecraftWorld::from_version_str(&cli.mc_version, seed)?;
            world.large_biomes = cli.large_biomes;
            (world, cli.dimension.into())
        }
        (None, None) => return Err("either --config or --seed is required".into()),
    };

    let generator = world.generator(dimension);

    println!("version:   {}", generator.mc());
    println!("flags:     {:?}", generator.flags());
    println!("dimension: {:?}", generator.dimension());
    println!("seed:      {} ({:#018x})", generator.seed(), generator.seed());
    Ok(())
}
