use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
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

#[derive(Debug, Parser)]
#[command(name = "pathtracer")]
#[command(about = "Renders a preview of a TOML scene description")]
pub struct Args {
    /// Scene description to render
    pub scene: PathBuf,

    /// Output image, .png or .ppm
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Override the scene's image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the scene's image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the scene's samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Seed for pixel jitter, lens and shutter sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
