// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 输出到 stderr，stdout 只留给报告
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认日志级别（保持报告输出干净）
pub const DEFAULT_FILTER: &str = "warn";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: warn）
///   例如: RUST_LOG=debug 或 RUST_LOG=fra_atlas=trace
///
/// # 示例
/// ```no_run
/// use fra_atlas::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// 初始化日志系统，RUST_LOG 未设置时使用给定级别
pub fn init_with_default(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
