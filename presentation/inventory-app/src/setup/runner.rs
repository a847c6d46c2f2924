use business::domain::product::report::InventoryReport;
use business::domain::session::use_cases::login::LoginParams;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Runner;

impl Runner {
    /// Logs in, mirrors the remote catalog when reachable, then logs the report.
    pub async fn run(config: &AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let submitted = &config.session.submitted;
        let session = container
            .login
            .execute(LoginParams {
                username: submitted.username.clone(),
                password: submitted.password.clone(),
            })
            .await?;
        tracing::info!("Logged in as {}", session.username);

        if !config.sheets.is_enabled() {
            tracing::info!("Working offline, changes stay on this device");
        }

        let view_model = container.view_model;
        match view_model.refresh().await? {
            Some(count) => tracing::info!("Mirrored {} products from remote catalog", count),
            None => tracing::info!("Remote catalog unavailable, showing local products"),
        }

        let product_count = view_model.products().borrow().len();
        let category_count = view_model.categories().borrow().len();
        tracing::info!(
            "{} products in {} categories",
            product_count,
            category_count
        );

        for line in describe_report(&view_model.report(), view_model.low_stock_threshold()) {
            tracing::info!("{}", line);
        }

        Ok(())
    }
}

fn describe_report(report: &InventoryReport, threshold: u32) -> Vec<String> {
    let mut lines = vec![format!("Total asset value: {:.2}", report.total_asset)];

    lines.extend(
        report
            .asset_by_category
            .iter()
            .map(|(category, value)| format!("  {}: {:.2}", category, value)),
    );

    if report.low_stock.is_empty() {
        lines.push(format!("No product below {} units", threshold));
    } else {
        lines.push(format!("Below {} units:", threshold));
        lines.extend(
            report
                .low_stock
                .iter()
                .map(|p| format!("  {} ({}): {} left", p.name, p.category, p.stock)),
        );
    }

    lines
}
