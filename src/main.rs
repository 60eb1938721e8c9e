use clap::Parser;
use decorator_showcase::utils::{logger, validation::Validate};
use decorator_showcase::{app, CliConfig, MenuConfig, Presenter, Session};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting decorator-showcase");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let menu = match &config.config {
        Some(path) => {
            tracing::info!("Loading menu from: {}", path);
            let menu = MenuConfig::from_file(path).and_then(|menu| {
                menu.validate()?;
                Ok(menu)
            });
            match menu {
                Ok(menu) => Some(menu),
                Err(e) => {
                    tracing::error!("Failed to load menu '{}': {}", path, e);
                    eprintln!("❌ Failed to load menu file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    // 命令列設定優先於選單檔案
    let (base, selection, catalog) = config.resolve(menu.as_ref())?;

    tracing::info!(
        "Chain: {} with {} add-on(s){}",
        base,
        selection.len(),
        menu.as_ref()
            .map(|m| format!(" from menu '{}'", m.menu.name))
            .unwrap_or_default()
    );

    let presenter = Presenter::with_catalog(base, catalog).with_selection(selection);

    if config.interactive {
        let stdin = io::stdin();
        let mut session = Session::new(presenter, stdin.lock(), io::stdout());
        session.run()?;
        return Ok(());
    }

    let rendering = presenter.render();
    let output = app::render(&rendering, config.output_format()?)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
