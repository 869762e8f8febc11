// ==========================================
// FRA 参考目录 - 命令行主入口
// ==========================================
// 流程: 解析参数 -> 初始化日志 -> 加载并校验目录 -> 渲染到 stdout
// 退出码: 0 成功；1 目录不变量违反或其他错误（诊断写入 stderr）
// ==========================================

use clap::Parser;
use fra_atlas::cli::{self, Cli};
use fra_atlas::logging;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init_with_default(cli.log_filter());

    tracing::debug!("{} v{}", fra_atlas::APP_NAME, fra_atlas::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = cli::run(&cli, &mut out).and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "执行失败");
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
