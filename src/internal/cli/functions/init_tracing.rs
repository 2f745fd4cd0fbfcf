use tracing_subscriber::EnvFilter;

/// 初始化日志：输出到 stderr，避免与 stdout 上的进度行混在一起。
///
/// 优先级：`RUST_LOG` > `verbose`（debug）> 默认（warn）。
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // 已初始化时忽略
}
