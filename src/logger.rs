use crate::appender::LogAppender;
use crate::formatter::LogFormatter;
use crate::level::Severity;
use crate::record::{EventId, LogRecord};
use crate::scope::ScopeGuard;
use std::fmt;
use std::sync::Arc;

/// 消息格式化闭包
///
/// 由调用方提供，负责从 state 渲染出消息文本；关联错误不需要在
/// 闭包里拼接，它会经由 LogRecord 并入同一行输出。
pub type MessageFormatter<'a> = &'a dyn Fn(&dyn fmt::Display, Option<&anyhow::Error>) -> String;

/// 日志能力接口
///
/// 文件目标和终端目标实现同一个接口，应用记录一次日志即可统一
/// 分发到多个目标。所有方法都不向调用方返回错误。
pub trait Logger: Send + Sync {
    /// 指定级别是否启用
    ///
    /// 当前固定返回 true（不做运行期过滤），保留为未来按级别抑制
    /// 的扩展点。
    fn is_enabled(&self, level: Severity) -> bool;

    /// 进入一个日志作用域
    ///
    /// 立即返回 RAII 守卫，释放由 Drop 保证；当前不做作用域嵌套。
    fn begin_scope(&self, state: &dyn fmt::Display) -> ScopeGuard;

    /// 记录一条日志
    ///
    /// `formatter` 缺席时整条忽略，什么都不写也不报错；渲染出的
    /// 消息为空时同样跳过。写盘失败在这一层吞掉：日志通道自身的
    /// 故障不得中断或阻塞业务逻辑。
    fn log(
        &self,
        level: Severity,
        event_id: EventId,
        state: &dyn fmt::Display,
        error: Option<&anyhow::Error>,
        formatter: Option<MessageFormatter>,
    );

    /// 记录 Trace 级别日志
    fn trace(&self, message: &str) {
        self.log(
            Severity::Trace,
            EventId::default(),
            &message,
            None,
            Some(&message_from_state),
        );
    }

    /// 记录 Debug 级别日志
    fn debug(&self, message: &str) {
        self.log(
            Severity::Debug,
            EventId::default(),
            &message,
            None,
            Some(&message_from_state),
        );
    }

    /// 记录 Information 级别日志
    fn info(&self, message: &str) {
        self.log(
            Severity::Information,
            EventId::default(),
            &message,
            None,
            Some(&message_from_state),
        );
    }

    /// 记录 Warning 级别日志
    fn warn(&self, message: &str) {
        self.log(
            Severity::Warning,
            EventId::default(),
            &message,
            None,
            Some(&message_from_state),
        );
    }

    /// 记录 Error 级别日志
    fn error(&self, message: &str, error: Option<&anyhow::Error>) {
        self.log(
            Severity::Error,
            EventId::default(),
            &message,
            error,
            Some(&message_from_state),
        );
    }

    /// 记录 Critical 级别日志
    fn critical(&self, message: &str, error: Option<&anyhow::Error>) {
        self.log(
            Severity::Critical,
            EventId::default(),
            &message,
            error,
            Some(&message_from_state),
        );
    }
}

/// 默认消息格式化：直接渲染 state
fn message_from_state(state: &dyn fmt::Display, _error: Option<&anyhow::Error>) -> String {
    state.to_string()
}

/// 按类别的日志器
///
/// 每个类别一个轻量实例：除类别名外只持有对 formatter 和 appender
/// 的引用，可随意创建和丢弃；多个实例可以共享同一个 appender。
pub struct CategoryLogger {
    category: String,
    formatter: Arc<dyn LogFormatter>,
    appender: Arc<dyn LogAppender>,
}

impl CategoryLogger {
    pub fn new(
        category: impl Into<String>,
        formatter: Arc<dyn LogFormatter>,
        appender: Arc<dyn LogAppender>,
    ) -> Self {
        Self {
            category: category.into(),
            formatter,
            appender,
        }
    }

    /// 获取类别名
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Logger for CategoryLogger {
    fn is_enabled(&self, _level: Severity) -> bool {
        true
    }

    fn begin_scope(&self, _state: &dyn fmt::Display) -> ScopeGuard {
        ScopeGuard::new()
    }

    fn log(
        &self,
        level: Severity,
        event_id: EventId,
        state: &dyn fmt::Display,
        error: Option<&anyhow::Error>,
        formatter: Option<MessageFormatter>,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        // formatter 缺席：无消息可写，静默跳过
        let formatter = match formatter {
            Some(formatter) => formatter,
            None => return,
        };

        let message = formatter(state, error);
        if message.is_empty() {
            return;
        }

        let mut record =
            LogRecord::new(level, self.category.clone(), message).with_event_id(event_id);
        if let Some(error) = error {
            record = record.with_error(format!("{:#}", error));
        }

        let line = match self.formatter.format(&record) {
            Ok(line) => line,
            Err(_) => return,
        };

        // 写入失败只丢弃这一条记录，不重试也不上抛
        let _ = self.appender.append(&line);
    }
}

/// 组合日志器
///
/// 把一次 log 调用扇出到一组目标，各目标独立收到同一事件
pub struct CompositeLogger {
    targets: Vec<Arc<dyn Logger>>,
}

impl CompositeLogger {
    pub fn new(targets: Vec<Arc<dyn Logger>>) -> Self {
        Self { targets }
    }

    /// 追加一个目标
    pub fn add_target(&mut self, target: Arc<dyn Logger>) {
        self.targets.push(target);
    }

    /// 目标数量
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Logger for CompositeLogger {
    fn is_enabled(&self, level: Severity) -> bool {
        self.targets.iter().any(|target| target.is_enabled(level))
    }

    fn begin_scope(&self, _state: &dyn fmt::Display) -> ScopeGuard {
        ScopeGuard::new()
    }

    fn log(
        &self,
        level: Severity,
        event_id: EventId,
        state: &dyn fmt::Display,
        error: Option<&anyhow::Error>,
        formatter: Option<MessageFormatter>,
    ) {
        for target in &self.targets {
            target.log(level, event_id, state, error, formatter);
        }
    }
}
