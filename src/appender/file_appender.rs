use crate::appender::LogAppender;
use crate::error::LogError;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// FileAppender 配置
#[derive(Debug, Clone, Deserialize)]
pub struct FileAppenderConfig {
    /// 日志文件路径
    pub file_path: String,
}

/// 文件输出器
///
/// 将日志追加写入单个文件。同一实例上的并发 `append` 通过互斥锁
/// 串行化：整行（含终止符）在锁内一次 `write_all` 写出，任意两次
/// 调用的字节不会交织；调用之间的先后顺序即抢到锁的顺序。
///
/// 文件按 create + append 方式逐次打开，从不截断；实例本身不持有
/// 打开的句柄，进程退出时没有需要显式关闭的资源。
pub struct FileAppender {
    path: PathBuf,
    lock: Mutex<()>,
    config: FileAppenderConfig,
}

impl FileAppender {
    /// 从配置创建 FileAppender
    ///
    /// 只校验路径，不做任何 I/O；空路径返回 `LogError::Configuration`。
    /// 目录不存在等运行期问题留到 `append` 时以 `LogError::Io` 暴露。
    pub fn new(config: FileAppenderConfig) -> Result<Self, LogError> {
        if config.file_path.trim().is_empty() {
            return Err(LogError::Configuration {
                path: config.file_path.clone(),
                reason: "path is empty".to_string(),
            });
        }

        Ok(Self {
            path: PathBuf::from(&config.file_path),
            lock: Mutex::new(()),
            config,
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &str {
        &self.config.file_path
    }
}

impl LogAppender for FileAppender {
    fn append(&self, line: &str) -> Result<(), LogError> {
        // 恰好补齐一个行终止符，整行一次写出
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        if !buf.ends_with('\n') {
            buf.push('\n');
        }

        // 锁只保护文件写入顺序，不保护内存状态，毒化后直接恢复继续
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf.as_bytes())?;

        Ok(())
    }
}
