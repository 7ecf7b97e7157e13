/// 日志作用域守卫
///
/// `begin_scope` 返回的 RAII 句柄：进入作用域立即返回，释放由
/// `Drop` 在所有退出路径（包括错误路径）上保证。当前不做任何
/// 嵌套状态管理，仅保留接口，未来扩展作用域嵌套时调用方无需改动。
#[must_use = "scope 在守卫被 drop 时结束"]
#[derive(Debug)]
pub struct ScopeGuard {
    _private: (),
}

impl ScopeGuard {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // 释放点：当前无需清理
    }
}
