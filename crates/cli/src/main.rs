use anyhow::Context;

use stockroom_core::InventoryConfig;

fn main() -> anyhow::Result<()> {
    let config = InventoryConfig::from_env().context("invalid configuration")?;

    stockroom_observability::init(&config.log_path)
        .with_context(|| format!("failed to open log file {}", config.log_path.display()))?;

    let stdout = std::io::stdout();
    let outcome = stockroom_cli::demo::run(&config, &mut stdout.lock())?;

    tracing::debug!(
        actions = outcome.actions.len(),
        items = outcome.store.len(),
        "demo run finished"
    );
    Ok(())
}
