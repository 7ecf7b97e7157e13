use crate::appender::{FileAppender, FileAppenderConfig};
use crate::error::LogError;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// 文件输出器注册表
///
/// 维护 文件路径 -> FileAppender 的缓存，保证同一路径在注册表
/// 生命周期内至多存在一个 FileAppender 实例，所有写入都经过它的
/// 互斥锁。注册表本身由组装根显式持有并传递，不是全局状态。
pub struct AppenderRegistry {
    appenders: DashMap<String, Arc<FileAppender>>,
}

impl AppenderRegistry {
    pub fn new() -> Self {
        Self {
            appenders: DashMap::new(),
        }
    }

    /// 获取或创建指定路径的 FileAppender
    ///
    /// 并发首次使用时通过 entry 的原子插入避免同一路径创建出两个
    /// 实例；路径不合法时返回 `LogError::Configuration`。
    pub fn get_or_create(&self, file_path: &str) -> Result<Arc<FileAppender>, LogError> {
        // 快路径：已存在直接克隆引用
        if let Some(existing) = self.appenders.get(file_path) {
            return Ok(Arc::clone(&existing));
        }

        match self.appenders.entry(file_path.to_string()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let appender = Arc::new(FileAppender::new(FileAppenderConfig {
                    file_path: file_path.to_string(),
                })?);
                entry.insert(Arc::clone(&appender));
                Ok(appender)
            }
        }
    }

    /// 检查指定路径是否已有 appender
    pub fn contains(&self, file_path: &str) -> bool {
        self.appenders.contains_key(file_path)
    }

    /// 当前缓存的 appender 数量
    pub fn len(&self) -> usize {
        self.appenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appenders.is_empty()
    }
}

impl Default for AppenderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
