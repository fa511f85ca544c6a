use std::path::Path;

use chorelist::app::{ChoreApp, Outcome};
use chorelist::config::toml_config::DEFAULT_CONFIG_FILE;
use chorelist::utils::{logger, validation::Validate};
use chorelist::{ChoreError, ChoresConfig, CliConfig, Settings};
use clap::Parser;

fn load_config_file(cli: &CliConfig) -> Result<Option<ChoresConfig>, ChoreError> {
    // 沒有指定時，只在預設檔案存在時讀取
    let path = match &cli.config {
        Some(path) => path.as_str(),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE,
        None => return Ok(None),
    };

    let config = ChoresConfig::from_file(path)?;
    config.validate()?;
    Ok(Some(config))
}

fn fail(e: &ChoreError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match load_config_file(&cli) {
        Ok(config) => config,
        Err(e) => {
            // 日誌還沒初始化
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let settings = Settings::merge(
        file_config.as_ref(),
        cli.data_dir.as_deref(),
        cli.verbose,
        cli.log_json,
    );
    logger::init_cli_logger(settings.verbose, settings.json_logs);

    if settings.verbose {
        tracing::debug!("Effective settings: {:?}", settings);
    }
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let data_dir = settings.data_dir.clone();
    let mut app = ChoreApp::open(settings);
    let today = chrono::Local::now().date_naive();

    match app.run(&cli.command, today) {
        Ok(Outcome::Printed(text)) => println!("{}", text),
        Ok(Outcome::Saved(message)) => println!("✅ {}", message),
        Ok(Outcome::SaveFailed) => {
            tracing::error!("❌ Could not write chores file in {}", data_dir);
            eprintln!("❌ Could not write chores file in {}", data_dir);
            std::process::exit(1);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
