use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 日志级别
///
/// 全序枚举，数值越大级别越高。`None` 表示不记录任何日志，
/// 仅用于级别比较，本身不会被写入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// 最详细的日志
    Trace = 0,
    /// 调试信息
    Debug = 1,
    /// 一般信息
    Information = 2,
    /// 警告信息
    Warning = 3,
    /// 错误信息
    Error = 4,
    /// 致命错误
    Critical = 5,
    /// 不记录日志
    None = 6,
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" | "information" => Ok(Severity::Information),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            "none" => Ok(Severity::None),
            _ => Err(format!("invalid severity: {}", s)),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 展示名即落盘格式中的级别名，如 `[..] Warning: ..`
        match self {
            Severity::Trace => write!(f, "Trace"),
            Severity::Debug => write!(f, "Debug"),
            Severity::Information => write!(f, "Information"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
            Severity::Critical => write!(f, "Critical"),
            Severity::None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_str() {
        assert_eq!(Severity::from_str("trace").unwrap(), Severity::Trace);
        assert_eq!(Severity::from_str("DEBUG").unwrap(), Severity::Debug);
        assert_eq!(Severity::from_str("info").unwrap(), Severity::Information);
        assert_eq!(
            Severity::from_str("Information").unwrap(),
            Severity::Information
        );
        assert_eq!(Severity::from_str("warn").unwrap(), Severity::Warning);
        assert_eq!(Severity::from_str("Warning").unwrap(), Severity::Warning);
        assert_eq!(Severity::from_str("error").unwrap(), Severity::Error);
        assert_eq!(Severity::from_str("critical").unwrap(), Severity::Critical);
        assert_eq!(Severity::from_str("none").unwrap(), Severity::None);
    }

    #[test]
    fn test_severity_from_str_invalid() {
        assert!(Severity::from_str("invalid").is_err());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Trace.to_string(), "Trace");
        assert_eq!(Severity::Debug.to_string(), "Debug");
        assert_eq!(Severity::Information.to_string(), "Information");
        assert_eq!(Severity::Warning.to_string(), "Warning");
        assert_eq!(Severity::Error.to_string(), "Error");
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(Severity::None.to_string(), "None");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::None > Severity::Critical);
        assert!(Severity::Critical > Severity::Error);
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Information);
        assert!(Severity::Information > Severity::Debug);
        assert!(Severity::Debug > Severity::Trace);
    }
}
