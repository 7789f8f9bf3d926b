//! 页面异步任务的取消协调
//!
//! 数据加载跑在 `spawn_local` 里，组件卸载或依赖变化后迟到的响应
//! 不能再写入页面状态。令牌只做建议性标记，不会中断进行中的网络请求。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::on_cleanup;
use send_wrapper::SendWrapper;

/// 发给单次加载任务的取消令牌
///
/// 任务在每次提交状态前用 [`CancelToken::is_cancelled`] 检查自己是否已过期。
#[derive(Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    fn cancel(&self) {
        self.0.set(true);
    }
}

/// 页面级任务守卫
///
/// 每次加载通过 [`TaskGuard::reissue`] 领取新令牌，上一个令牌随即作废；
/// 组件卸载时由 [`use_task_guard`] 注册的清理回调作废当前令牌。
/// 守卫只在 wasm 主线程上使用，`SendWrapper` 使其满足清理回调的 `Send` 约束。
#[derive(Clone)]
pub struct TaskGuard {
    current: SendWrapper<Rc<RefCell<Option<CancelToken>>>>,
}

impl Default for TaskGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGuard {
    pub fn new() -> Self {
        Self {
            current: SendWrapper::new(Rc::default()),
        }
    }

    /// 作废上一个令牌并签发新令牌
    pub fn reissue(&self) -> CancelToken {
        let token = CancelToken::default();
        if let Some(previous) = self.current.borrow_mut().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// 作废当前令牌
    pub fn cancel(&self) {
        if let Some(token) = self.current.borrow().as_ref() {
            token.cancel();
        }
    }
}

/// 创建与组件生命周期绑定的任务守卫
pub fn use_task_guard() -> TaskGuard {
    let guard = TaskGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reissue_cancels_previous() {
        let guard = TaskGuard::new();
        let first = guard.reissue();
        assert!(!first.is_cancelled());

        let second = guard.reissue();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn test_cancel_current() {
        let guard = TaskGuard::new();
        let token = guard.reissue();
        guard.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_without_token() {
        // 尚未签发令牌时调用不应 panic
        TaskGuard::new().cancel();
    }

    #[test]
    fn test_token_clones_share_state() {
        let guard = TaskGuard::new();
        let token = guard.reissue();
        let moved_into_task = token.clone();
        guard.cancel();
        assert!(moved_into_task.is_cancelled());
    }
}
