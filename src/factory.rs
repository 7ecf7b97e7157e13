use crate::appender::AppenderRegistry;
use crate::error::LogError;
use crate::logger::{CompositeLogger, Logger};
use crate::provider::{LoggerProvider, LoggerProviderConfig};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::sync::{Arc, RwLock};

/// LoggerFactory 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct LoggerFactoryConfig {
    /// 日志目标提供者列表，按声明顺序扇出
    pub providers: Vec<LoggerProviderConfig>,
}

/// 日志工厂
///
/// 组装根持有的唯一对象：拥有 appender 注册表和全部 provider。
/// `create_logger` 把同一类别在每个 provider 上各建一个 Logger，
/// 组合后返回，应用记录一次即分发到所有目标（典型组合是一个文件
/// 目标加一个终端目标）。
pub struct LoggerFactory {
    registry: AppenderRegistry,
    providers: RwLock<Vec<Arc<dyn LoggerProvider>>>,
}

impl LoggerFactory {
    /// 创建空工厂
    pub fn new() -> Self {
        Self {
            registry: AppenderRegistry::new(),
            providers: RwLock::new(Vec::new()),
        }
    }

    /// 从配置创建工厂
    ///
    /// 任何一个 provider 配置不合法都立即失败，不会建出半个工厂
    pub fn from_config(config: LoggerFactoryConfig) -> Result<Self, LogError> {
        let factory = Self::new();

        {
            let mut providers = factory.providers.write().unwrap();
            for provider_config in &config.providers {
                providers.push(provider_config.build(&factory.registry)?);
            }
        }

        Ok(factory)
    }

    /// 追加一个 provider
    pub fn add_provider(&self, provider: Arc<dyn LoggerProvider>) {
        let mut providers = self.providers.write().unwrap();
        providers.push(provider);
    }

    /// appender 注册表
    ///
    /// 手工构建 FileLoggerProvider 时传入，保证走同一份路径缓存
    pub fn registry(&self) -> &AppenderRegistry {
        &self.registry
    }

    /// 当前 provider 数量
    pub fn provider_count(&self) -> usize {
        self.providers.read().unwrap().len()
    }

    /// 为指定类别创建 Logger
    ///
    /// 返回覆盖全部目标的组合 Logger；没有 provider 时返回的实例
    /// 什么都不写。
    pub fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        let providers = self.providers.read().unwrap();
        let targets: Vec<Arc<dyn Logger>> = providers
            .iter()
            .map(|provider| provider.create_logger(category))
            .collect();

        Arc::new(CompositeLogger::new(targets))
    }

    /// 释放工厂资源，逐个转发给 provider
    pub fn dispose(&self) {
        let providers = self.providers.read().unwrap();
        for provider in providers.iter() {
            provider.dispose();
        }
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}
