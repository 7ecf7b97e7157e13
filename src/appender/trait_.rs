use crate::error::LogError;

/// 日志输出器 trait
///
/// 负责将格式化后的单行日志输出到目标介质。实现必须保证并发
/// `append` 之间的字节互不交织。
pub trait LogAppender: Send + Sync {
    /// 追加一行日志
    ///
    /// `line` 可以不带行终止符，实现恰好补齐一个；绝不写出半行。
    fn append(&self, line: &str) -> Result<(), LogError>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<(), LogError> {
        Ok(())
    }
}
