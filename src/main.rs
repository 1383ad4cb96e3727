use clap::Parser;
use mekgen::utils::logger;
use mekgen::{CliArgs, LocalFileSystem, ProjectConfig, Scaffolder};

fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    // 缺少 --config 不是錯誤，只顯示使用方式
    let Some(config_path) = args.config else {
        println!("Usage: mekgen --config=<path_to_config.json>");
        return;
    };

    tracing::info!("Loading configuration from {}", config_path.display());

    let result = ProjectConfig::from_file(&config_path).and_then(|config| {
        let base_dir = std::env::current_dir()?;
        let scaffolder = Scaffolder::new(LocalFileSystem, base_dir);
        scaffolder.generate(&config)
    });

    if let Err(e) = result {
        tracing::error!("Scaffolding failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
