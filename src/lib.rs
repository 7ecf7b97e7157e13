//! logx - 最小化的结构化日志落盘组件
//!
//! 接收应用产生的日志记录，持久化追加到单个文件目标，同时支持
//! 终端目标，二者统一在可插拔的 provider/factory 抽象之下。核心
//! 是文件写入器：把多个调用方的并发日志调用串行化到一个只追加的
//! 文件里，行与行之间不交织、不损坏，写入失败绝不影响调用方。
//!
//! # 特性
//!
//! - 级别枚举：Trace, Debug, Information, Warning, Error, Critical, None
//! - 文件 / 终端双目标，实现同一个 `Logger` 能力接口，一次记录统一扇出
//! - 同一文件路径全程只有一个 `FileAppender`，并发追加互斥且完整
//! - 写入失败在日志层吞掉，日志通道故障不得中断业务
//! - 基于配置的组装（serde + JSON5）
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use logx::{Logger, LoggerFactory, LoggerFactoryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config: LoggerFactoryConfig = json5::from_str(r#"
//!         {
//!             providers: [
//!                 { type: "FileLogger", file_path: "logfile.txt" },
//!                 { type: "ConsoleLogger" },
//!             ]
//!         }
//!     "#)?;
//!
//!     let factory = LoggerFactory::from_config(config)?;
//!     let logger = factory.create_logger("App");
//!
//!     logger.info("This is an informational message.");
//!     logger.warn("This is a warning message.");
//!     logger.error("This is an error message.", None);
//!
//!     factory.dispose();
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod error;
pub mod factory;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod macros;
pub mod provider;
pub mod record;
pub mod scope;

// 重新导出核心类型
pub use appender::{
    AppenderRegistry, ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig,
    LogAppender,
};
pub use error::LogError;
pub use factory::{LoggerFactory, LoggerFactoryConfig};
pub use formatter::{LineFormatter, LineFormatterConfig, LogFormatter};
pub use level::Severity;
pub use logger::{CategoryLogger, CompositeLogger, Logger, MessageFormatter};
pub use provider::{
    ConsoleLoggerProvider, ConsoleLoggerProviderConfig, FileLoggerProvider,
    FileLoggerProviderConfig, LoggerProvider, LoggerProviderConfig,
};
pub use record::{EventId, LogRecord};
pub use scope::ScopeGuard;
