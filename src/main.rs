use advcalc::utils::error::ErrorSeverity;
use advcalc::utils::{logger, validation::Validate};
use advcalc::{Calculator, CliConfig, FastEvaluator, Shell};
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.log_level("warn"));
    tracing::debug!("Shell config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let calculator = Calculator::new(FastEvaluator::new());
    let stdin = io::stdin();
    let mut shell = Shell::new(calculator, &config, stdin.lock(), io::stdout());

    if let Err(e) = shell.run() {
        tracing::error!(
            "Shell stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        let exit_code = if e.severity() >= ErrorSeverity::Critical { 3 } else { 1 };
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code);
    }

    Ok(())
}
