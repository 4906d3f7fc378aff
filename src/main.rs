use std::io;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_appender::rolling;

use hrm_employee::utils::products;
use hrm_employee::{Config, Employee, ServiceCharges};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(products_file = %config.products_file.display(), "Starting products check");

    let stderr = io::stderr();
    let loaded = products::run(&config.products_file, &mut stderr.lock());
    if !loaded {
        warn!("Products check finished without a products file");
    }

    if let Some(path) = &config.services_file {
        let services = ServiceCharges::from_path(path)
            .with_context(|| format!("Failed to read service charges from {}", path.display()))?;

        let employee = Employee::new("Sam", "Smith");
        info!(
            employee = %employee.full_name(),
            services = services.len(),
            balance_due = employee.balance_due(&services),
            "Balance due computed"
        );
    }

    Ok(())
}
