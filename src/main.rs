use clap::Parser;
use hook_installer::utils::{logger, validation::Validate};
use hook_installer::{CliConfig, HookConfig, HookError, HookInstaller};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "Hook installation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("Error: {}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), HookError> {
    let hook_config: HookConfig = config.hook_config()?;
    hook_config.validate()?;

    let installer = HookInstaller::from_config(&hook_config, &config.project_root);
    let plan = installer.plan();
    tracing::info!(
        "Installing {} from {} into {}",
        plan.hook_name,
        plan.source.display(),
        plan.hooks_dir.display()
    );

    if config.dry_run {
        installer.preflight()?;
        println!(
            "Would install {} -> {}",
            plan.source.display(),
            plan.destination.display()
        );
        return Ok(());
    }

    let report = installer.install()?;
    tracing::info!(
        "Installed {} bytes at {}",
        report.bytes_copied,
        report.destination.display()
    );
    Ok(())
}
