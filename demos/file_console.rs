//! 文件 + 终端双目标示例
//!
//! 运行方式：cargo run --example file_console

use anyhow::Result;
use logx::{
    ConsoleLoggerProvider, ConsoleLoggerProviderConfig, FileLoggerProvider,
    FileLoggerProviderConfig, Logger, LoggerFactory,
};
use std::sync::Arc;

fn main() -> Result<()> {
    let factory = LoggerFactory::new();

    // 文件目标：同一路径的 appender 经注册表去重
    let file_provider = FileLoggerProvider::new(
        factory.registry(),
        FileLoggerProviderConfig {
            file_path: "logfile.txt".to_string(),
            formatter: Default::default(),
        },
    )?;
    factory.add_provider(Arc::new(file_provider));

    // 终端目标
    let console_provider = ConsoleLoggerProvider::new(ConsoleLoggerProviderConfig::default());
    factory.add_provider(Arc::new(console_provider));

    // 记录一次，文件和终端各收到一份
    let logger = factory.create_logger("App");
    logger.info("This is an informational message.");
    logger.warn("This is a warning message.");
    logger.error("This is an error message.", None);

    let scope = logger.begin_scope(&"request 42");
    logger.info("inside a scope");
    drop(scope);

    factory.dispose();
    println!("Logs written to logfile.txt");

    Ok(())
}
