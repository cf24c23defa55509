use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tokio::runtime::Runtime;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "lava-rapido";

fn runtime_for(cfg: &AppConfig) -> std::io::Result<Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

fn main() -> ExitCode {
    // .env first so RUST_LOG / LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let run_id = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |info| {
        error!(service = SERVICE, event = "panic", %run_id, message = %info, "unhandled panic");
    }));

    let cfg = match configs::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let rt = match runtime_for(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %run_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        backend = ?cfg.database.backend,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "starting"
    );

    // Ctrl+C / SIGTERM stop the listener; the call returns once open requests finish.
    match rt.block_on(server::serve(cfg, server::shutdown_signal())) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", %run_id, "stopped cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", %run_id, error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
