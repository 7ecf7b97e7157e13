use thiserror::Error;

/// 日志组件统一错误类型
#[derive(Error, Debug)]
pub enum LogError {
    /// 创建 appender 时路径不合法，构建 provider 时立即暴露
    #[error("invalid log file path '{path}': {reason}")]
    Configuration { path: String, reason: String },

    /// 追加写入失败（权限、磁盘满、路径消失等）
    #[error("failed to append to log file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = LogError::Configuration {
            path: "".to_string(),
            reason: "path is empty".to_string(),
        };
        assert!(err.to_string().contains("path is empty"));
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LogError::from(io);
        assert!(matches!(err, LogError::Io(_)));
        assert!(err.to_string().contains("no such directory"));
    }
}
