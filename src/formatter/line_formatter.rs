use crate::formatter::LogFormatter;
use crate::record::LogRecord;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

/// LineFormatter 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct LineFormatterConfig {
    /// 时间戳格式（chrono 格式串，按本地时区渲染）
    #[default = "%Y-%m-%d %H:%M:%S%.3f"]
    pub time_format: String,
}

/// 行格式化器
///
/// 将日志记录渲染为 `[<时间戳>] <级别>: <消息>` 的单行文本。
/// 行终止符由 appender 负责，这里不追加。
pub struct LineFormatter {
    config: LineFormatterConfig,
}

impl LineFormatter {
    pub fn new(config: LineFormatterConfig) -> Self {
        Self { config }
    }
}

impl LogFormatter for LineFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        use std::fmt::Write;

        // 预分配容量：时间戳约 24 字节 + 级别 + 消息 + 错误描述
        let capacity = 32
            + record.message.len()
            + record.error.as_ref().map_or(0, |e| e.len() + 2);
        let mut result = String::with_capacity(capacity);

        result.push('[');
        write!(
            result,
            "{}",
            record.timestamp.format(&self.config.time_format)
        )?;
        result.push_str("] ");

        write!(result, "{}", record.level)?;
        result.push_str(": ");

        result.push_str(&record.message);

        // 错误描述并入同一行，绝不静默丢弃
        if let Some(error) = &record.error {
            result.push_str(": ");
            result.push_str(error);
        }

        Ok(result)
    }
}

crate::impl_from!(LineFormatterConfig => LineFormatter);
