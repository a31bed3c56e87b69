use clap::{Parser, ValueEnum};
use log::LevelFilter;
use umbra_renderer::Partition;

/// Log levels accepted on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Work partitioning strategies
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PartitionArg {
    Contiguous,
    Strided,
}

impl From<PartitionArg> for Partition {
    fn from(arg: PartitionArg) -> Self {
        match arg {
            PartitionArg::Contiguous => Partition::Contiguous,
            PartitionArg::Strided => Partition::Strided,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "umbra")]
#[command(about = "Render a JSON scene with one primary ray per pixel and hard shadows")]
pub struct Args {
    /// Scene file (JSON)
    pub scene: String,

    /// Output file path (.png, or .ppm for plain-text PPM)
    #[arg(short, long, default_value = "render.png")]
    pub output: String,

    /// Override the scene's image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the scene's image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the scene's vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Number of worker threads (defaults to all cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// How pixels are split across worker threads
    #[arg(long, value_enum, default_value = "contiguous")]
    pub partition: PartitionArg,

    /// Shadow ray offset along the surface normal
    #[arg(long, default_value_t = umbra_renderer::DEFAULT_SHADOW_BIAS)]
    pub shadow_bias: f32,

    /// Clamp light arriving from behind a surface to zero
    #[arg(long)]
    pub clamp_light: bool,

    /// Apply gamma 2.0 when writing the image
    #[arg(long)]
    pub gamma: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
