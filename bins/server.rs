use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tokio::runtime::Runtime;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "inventory";

fn init_logging() {
    // 先加载 .env，使 RUST_LOG / LOG_FORMAT 生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = SERVICE, event = "logger_init", "tracing subscriber initialized");
}

/// Route panics through tracing so they land in the same log stream.
fn install_panic_hook(service_id: Uuid, pid: u32) {
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = SERVICE,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));
}

fn build_runtime(cfg: &AppConfig) -> std::io::Result<Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

/// Serve until the server task ends or Ctrl+C arrives.
async fn serve_until_signal(cfg: AppConfig, service_id: Uuid, pid: u32) -> ExitCode {
    let server_task = tokio::spawn(server::run(cfg));

    tokio::select! {
        res = server_task => match res {
            Ok(Ok(())) => {
                info!(service = SERVICE, event = "stop", %service_id, pid, "server stopped normally");
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!(service = SERVICE, event = "run_failed", error = %e, "server::run returned error");
                ExitCode::FAILURE
            }
            Err(e) => {
                error!(service = SERVICE, event = "task_join_error", error = %e, "server task join error");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            // 数据只在内存中，收到 Ctrl+C 直接退出即可
            info!(service = SERVICE, event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    install_panic_hook(service_id, pid);

    // 优先读取 config.toml，失败时回退到 SERVER_HOST / SERVER_PORT / TOKIO_WORKER_THREADS
    let cfg = AppConfig::load_or_env();

    let rt = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %service_id,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        addr = %cfg.server.bind_addr(),
        id_strategy = ?cfg.store.id_strategy,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "inventory service starting"
    );

    rt.block_on(serve_until_signal(cfg, service_id, pid))
}
