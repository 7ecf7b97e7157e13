use crate::appender::LogAppender;
use crate::error::LogError;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// ConsoleAppender 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 是否使用颜色（预留功能）
    pub use_colors: bool,
}

/// 终端输出器
///
/// 将日志输出到标准输出，与文件目标并存的既有能力
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { config }
    }
}

impl LogAppender for ConsoleAppender {
    fn append(&self, line: &str) -> Result<(), LogError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

crate::impl_from!(ConsoleAppenderConfig => ConsoleAppender);
