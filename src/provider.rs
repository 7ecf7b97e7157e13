use crate::appender::{
    AppenderRegistry, ConsoleAppender, ConsoleAppenderConfig, FileAppender, LogAppender,
};
use crate::error::LogError;
use crate::formatter::{LineFormatter, LineFormatterConfig, LogFormatter};
use crate::logger::{CategoryLogger, Logger};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::sync::Arc;

/// 日志提供者 trait
///
/// 按类别名发放 Logger 实例的工厂入口，文件目标和终端目标各有
/// 一个实现。
pub trait LoggerProvider: Send + Sync {
    /// 为指定类别创建 Logger
    ///
    /// 幂等：同一 provider 发出的所有 Logger 共享同一个底层
    /// appender，不同类别名只是记录上的标签不同。
    fn create_logger(&self, category: &str) -> Arc<dyn Logger>;

    /// 释放 provider 级资源
    fn dispose(&self);
}

/// FileLoggerProvider 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct FileLoggerProviderConfig {
    /// 日志文件路径
    #[default = "logfile.txt"]
    pub file_path: String,

    /// 行格式化配置
    pub formatter: LineFormatterConfig,
}

/// 文件日志提供者
///
/// 通过 AppenderRegistry 解析自己的 FileAppender：同一路径的多个
/// provider 拿到的是同一个实例，"一个路径至多一个 appender" 的
/// 不变量由注册表保证。路径不合法在这里立即暴露，而不是等到第一
/// 条日志。
pub struct FileLoggerProvider {
    appender: Arc<FileAppender>,
    formatter: Arc<dyn LogFormatter>,
}

impl FileLoggerProvider {
    pub fn new(
        registry: &AppenderRegistry,
        config: FileLoggerProviderConfig,
    ) -> Result<Self, LogError> {
        let appender = registry.get_or_create(&config.file_path)?;
        let formatter: Arc<dyn LogFormatter> = Arc::new(LineFormatter::new(config.formatter));

        Ok(Self {
            appender,
            formatter,
        })
    }

    /// 获取目标文件路径
    pub fn file_path(&self) -> &str {
        self.appender.path()
    }
}

impl LoggerProvider for FileLoggerProvider {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(CategoryLogger::new(
            category,
            Arc::clone(&self.formatter),
            Arc::clone(&self.appender) as Arc<dyn LogAppender>,
        ))
    }

    fn dispose(&self) {
        // appender 在每次 append 时独立打开和关闭文件，调用之间
        // 不持有句柄，这里确实没有需要释放的资源
    }
}

/// ConsoleLoggerProvider 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleLoggerProviderConfig {
    /// 行格式化配置
    pub formatter: LineFormatterConfig,

    /// 终端输出配置
    pub appender: ConsoleAppenderConfig,
}

/// 终端日志提供者
pub struct ConsoleLoggerProvider {
    appender: Arc<ConsoleAppender>,
    formatter: Arc<dyn LogFormatter>,
}

impl ConsoleLoggerProvider {
    pub fn new(config: ConsoleLoggerProviderConfig) -> Self {
        Self {
            appender: Arc::new(ConsoleAppender::new(config.appender)),
            formatter: Arc::new(LineFormatter::new(config.formatter)),
        }
    }
}

impl LoggerProvider for ConsoleLoggerProvider {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(CategoryLogger::new(
            category,
            Arc::clone(&self.formatter),
            Arc::clone(&self.appender) as Arc<dyn LogAppender>,
        ))
    }

    fn dispose(&self) {}
}

crate::impl_from!(ConsoleLoggerProviderConfig => ConsoleLoggerProvider);

/// 日志提供者配置
///
/// 按 type 字段选择具体实现
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum LoggerProviderConfig {
    /// 文件目标
    FileLogger(FileLoggerProviderConfig),
    /// 终端目标
    ConsoleLogger(ConsoleLoggerProviderConfig),
}

impl LoggerProviderConfig {
    /// 根据配置创建 provider 实例
    pub fn build(&self, registry: &AppenderRegistry) -> Result<Arc<dyn LoggerProvider>, LogError> {
        match self {
            LoggerProviderConfig::FileLogger(config) => Ok(Arc::new(FileLoggerProvider::new(
                registry,
                config.clone(),
            )?)),
            LoggerProviderConfig::ConsoleLogger(config) => {
                Ok(Arc::new(ConsoleLoggerProvider::new(config.clone())))
            }
        }
    }
}
