use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vsh_dashboard::application::auth::AuthError;
use vsh_dashboard::utils::format_date;
use vsh_dashboard::{AppConfig, Platform};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(app = %config.app_name, version = %config.app_version, "starting");

    let platform = match Platform::connect(config) {
        Ok(platform) => platform,
        Err(e) => {
            warn!(error = %e, "platform unavailable");
            match AuthError::from_connect(&e) {
                Some(auth) => anyhow::bail!("{auth}"),
                None => return Err(e.into()),
            }
        }
    };

    // Restore the stored session, refreshing it if needed
    match platform.auth.session().await {
        Some(session) => println!(
            "Đã đăng nhập: {}",
            session.user.email.as_deref().unwrap_or("-")
        ),
        None => println!("Chưa đăng nhập"),
    }

    match (platform.auth.cached_tenant(), platform.auth.trial_status()) {
        (Some(tenant), Some(trial)) => {
            let plan = platform.config.plan_display_name(&tenant.plan);
            if trial.is_unlimited() {
                println!("{} ({}): gói {}", tenant.name, tenant.code, plan);
            } else if trial.valid {
                let ends = tenant
                    .trial_ends_at
                    .map(|ts| format_date(&ts.to_rfc3339()))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{} ({}): gói {}, còn {} ngày (đến {})",
                    tenant.name, tenant.code, plan, trial.days_left, ends
                );
            } else {
                println!("{} ({}): gói {} đã hết hạn", tenant.name, tenant.code, plan);
            }
        }
        _ => println!("Chưa có tổ chức nào được lưu"),
    }

    if let Some(tier) = platform
        .auth
        .cached_tenant()
        .and_then(|tenant| platform.config.plan_tier(&tenant.plan).cloned())
    {
        let limit = |value: Option<u64>| value.map_or_else(|| "không giới hạn".to_string(), |n| n.to_string());
        println!(
            "Giới hạn: {} người dùng, {} ứng dụng",
            limit(tier.user_limit()),
            limit(tier.app_limit())
        );
    }

    Ok(())
}
