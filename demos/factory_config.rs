//! 基于配置组装日志工厂示例
//!
//! 运行方式：cargo run --example factory_config

use anyhow::Result;
use logx::{Logger, LoggerFactory, LoggerFactoryConfig};

fn main() -> Result<()> {
    let config: LoggerFactoryConfig = json5::from_str(
        r#"
        {
            providers: [
                {
                    type: "FileLogger",
                    file_path: "logfile.txt",
                    formatter: {
                        time_format: "%Y-%m-%d %H:%M:%S%.3f",
                    },
                },
                {
                    type: "ConsoleLogger",
                },
            ]
        }
        "#,
    )?;

    let factory = LoggerFactory::from_config(config)?;

    let app = factory.create_logger("App");
    let db = factory.create_logger("Db");

    app.info("application started");
    db.warn("slow query detected");

    // 两个类别写的是同一个文件
    let err = anyhow::anyhow!("connection refused");
    db.error("failed to reach replica", Some(&err));

    factory.dispose();

    Ok(())
}
