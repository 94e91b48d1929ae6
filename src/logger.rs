use log::LevelFilter;

/// Initialize the logger with the specified level, RUST_LOG can still refine it
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
