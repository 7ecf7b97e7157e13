use crate::level::Severity;
use chrono::{DateTime, Local};

/// 事件编号
///
/// 随日志调用透传，当前的行格式不输出它，仅保留在记录上。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventId(pub i32);

/// 日志记录
///
/// 单次日志调用的瞬时载体：构造、格式化、落盘之后即丢弃，
/// 没有跨调用的生命周期。
pub struct LogRecord {
    /// 日志级别
    pub level: Severity,
    /// 类别名（逻辑来源）
    pub category: String,
    /// 日志消息
    pub message: String,
    /// 事件编号
    pub event_id: EventId,
    /// 关联错误的描述
    pub error: Option<String>,
    /// 本地时间戳
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳取构造时刻
    pub fn new(level: Severity, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            category: category.into(),
            message: message.into(),
            event_id: EventId::default(),
            error: None,
            timestamp: Local::now(),
        }
    }

    /// 设置事件编号
    pub fn with_event_id(mut self, event_id: EventId) -> Self {
        self.event_id = event_id;
        self
    }

    /// 附加错误描述
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
