//! 基准测试入口
//!
//! 报告写到标准输出，进度日志写到标准错误。

use std::process;

use clap::{error::ErrorKind, CommandFactory, Parser};
use hashing_bench::{bench, cli::Cli, log_error, BenchError};

// 初始化日志记录器
#[cfg(feature = "logging")]
fn init_logger() {
    use env_logger::{Builder, Env};
    use std::io::Write;

    let env = Env::default()
        .filter_or("RUST_LOG", "info")
        .write_style_or("RUST_LOG_STYLE", "auto");

    Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logger() {}

fn main() {
    // 用法错误由 clap 打印并以状态码 2 退出
    let cli = Cli::parse();
    init_logger();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(BenchError::Usage { reason }) => {
            Cli::command().error(ErrorKind::ValueValidation, reason).exit()
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    };

    match bench::run(&config) {
        Ok(report) => {
            println!("{}", report);
            if report.errors() > 0 {
                process::exit(1);
            }
        }
        Err(e) => {
            log_error!("{} failed: {}", config.algo, e);
            eprintln!("error: {}", e);
            if let Some(hint) = e.recovery_suggestion() {
                eprintln!("hint: {}", hint);
            }
            process::exit(e.exit_code());
        }
    }
}
