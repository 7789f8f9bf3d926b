//! 匿名身份门闸
//!
//! CloudBase 要求任何云函数调用都携带平台凭证，管理端用匿名登录获取。
//! 登录只做一次：首个调用方发起签名并缓存未完成的 Future，并发调用方
//! 共享同一次尝试；失败清空缓存，下一次调用重新登录。

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use gloo_net::http::Request;
use leptos::logging;
use send_wrapper::SendWrapper;
use serde::Deserialize;

use super::CloudError;

/// 单次匿名登录尝试
type SignInFuture = LocalBoxFuture<'static, Result<String, CloudError>>;

/// 状态机：未尝试 → 进行中 → 已建立；失败回到未尝试
enum GateState {
    Unattempted,
    InFlight {
        attempt: u64,
        future: Shared<SignInFuture>,
    },
    Established(String),
}

/// 状态机与签名器，克隆体之间共享
struct GateInner {
    state: RefCell<GateState>,
    next_attempt: Cell<u64>,
    signer: Box<dyn Fn() -> SignInFuture>,
}

/// 匿名身份门闸
///
/// 门闸只在 wasm 主线程上使用，`SendWrapper` 使其可以进入 Leptos 上下文。
#[derive(Clone)]
pub struct IdentityGate {
    inner: SendWrapper<Rc<GateInner>>,
}

impl IdentityGate {
    /// 生产构造：向平台的匿名登录端点取凭证
    pub fn new(base: &str) -> Self {
        let url = format!("{base}/auth/v1/signin/anonymously");
        Self::with_signer(move || sign_in_anonymously(url.clone()).boxed_local())
    }

    /// 以自定义签名过程构造，测试注入用
    fn with_signer(signer: impl Fn() -> SignInFuture + 'static) -> Self {
        Self {
            inner: SendWrapper::new(Rc::new(GateInner {
                state: RefCell::new(GateState::Unattempted),
                next_attempt: Cell::new(0),
                signer: Box::new(signer),
            })),
        }
    }

    /// 确保匿名身份已建立，返回平台凭证
    ///
    /// 幂等：进行中的尝试被并发调用方共享，首次解析前无论调用多少次
    /// 都只发起一次登录；失败清空缓存的尝试，下一次调用重试。
    pub async fn ensure(&self) -> Result<String, CloudError> {
        let (attempt, future) = {
            let mut state = self.inner.state.borrow_mut();
            match &*state {
                GateState::Established(credential) => return Ok(credential.clone()),
                GateState::InFlight { attempt, future } => (*attempt, future.clone()),
                GateState::Unattempted => {
                    let attempt = self.inner.next_attempt.get();
                    self.inner.next_attempt.set(attempt + 1);
                    let future = (self.inner.signer)().shared();
                    *state = GateState::InFlight {
                        attempt,
                        future: future.clone(),
                    };
                    (attempt, future)
                }
            }
        };

        let result = future.await;

        let mut state = self.inner.state.borrow_mut();
        match &result {
            Ok(credential) => {
                // 共享同一次尝试的每个调用方都会走到这里，重复写入同一凭证无害
                *state = GateState::Established(credential.clone());
            }
            Err(e) => {
                // 只有仍属于本代的失败才重置状态，迟到的失败不能打断新的尝试
                if matches!(&*state, GateState::InFlight { attempt: a, .. } if *a == attempt) {
                    logging::warn!("[cloudbase] signInAnonymously failed: {e}");
                    *state = GateState::Unattempted;
                }
            }
        }
        result
    }
}

/// 匿名登录响应，只关心凭证字段
#[derive(Deserialize)]
struct AnonymousCredential {
    access_token: String,
}

/// 向平台发起一次匿名登录
async fn sign_in_anonymously(url: String) -> Result<String, CloudError> {
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| CloudError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CloudError::Gateway(response.status()));
    }

    let credential: AnonymousCredential = response
        .json()
        .await
        .map_err(|e| CloudError::Decode(e.to_string()))?;
    Ok(credential.access_token)
}

#[cfg(test)]
mod tests;
