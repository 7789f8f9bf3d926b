//! 会话模块
//!
//! 管理员令牌的持久化与响应式会话状态。客户端只认令牌存在与否，
//! 真正的校验由后端在每次调用时完成。

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

/// localStorage 中的令牌键名
const TOKEN_KEY: &str = "officego_admin_token";

// =========================================================
// Token Store
// =========================================================

mod token_store {
    use super::*;

    pub fn get() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    pub fn set(token: &str) {
        // 写入失败（隐私模式等）时静默忽略，刷新后回到未登录
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
    }
}

// =========================================================
// 会话上下文
// =========================================================

/// 会话上下文
///
/// 应用启动时创建一次并注入 Context，令牌只通过
/// [`Session::establish`] / [`Session::clear`] 变更，
/// 路由守卫与 API 客户端各自按需读取。
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// 从持久化存储恢复会话
    pub fn load() -> Self {
        Self {
            token: RwSignal::new(token_store::get()),
        }
    }

    /// 当前令牌（响应式读取，路由守卫用）
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// 当前令牌（非响应式，异步任务内使用）
    pub fn raw_token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// 登录成功后写入令牌
    pub fn establish(&self, token: &str) {
        token_store::set(token);
        self.token.set(Some(token.to_string()));
    }

    /// 退出登录，清掉持久化令牌
    pub fn clear(&self) {
        token_store::clear();
        self.token.set(None);
    }
}

/// 从 Context 获取会话
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session should be provided")
}
