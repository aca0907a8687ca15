use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(format: &str) {
    common::utils::logging::init_logging(format);
    info!(service = "envcheck", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // load .env first so RUST_LOG and the AUTH_* variables take effect
    dotenv().ok();

    let config = configs::AppConfig::load_and_validate();
    let format = config
        .as_ref()
        .map(|c| c.logging.format.clone())
        .unwrap_or_else(|_| "compact".to_string());
    init_logging(&format);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "envcheck",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    info!(
        service = "envcheck",
        event = "start",
        %service_id,
        pid,
        version,
        "environment check starting"
    );

    let report = common::env::check_env();
    report.log();

    match &config {
        Ok(cfg) => info!(
            service = "envcheck",
            event = "config_ok",
            project_id = %cfg.auth.project_id,
            "app configuration loaded and validated"
        ),
        Err(e) => error!(
            service = "envcheck",
            event = "config_error",
            error = %e,
            "app configuration failed to load"
        ),
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(service = "envcheck", event = "report_error", error = %e, "report not serializable"),
    }

    if report.passed && config.is_ok() {
        info!(service = "envcheck", event = "done", "environment check passed");
        std::process::ExitCode::SUCCESS
    } else {
        error!(service = "envcheck", event = "done", "environment check failed");
        std::process::ExitCode::FAILURE
    }
}
