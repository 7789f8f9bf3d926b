use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;

use super::*;

/// 计数签名器：记录发起次数，第 fail_first 次之前全部失败
fn scripted_signer(calls: Rc<Cell<u32>>, fail_first: u32) -> impl Fn() -> SignInFuture {
    move || {
        let n = calls.get() + 1;
        calls.set(n);
        async move {
            // 让出一次执行权，保证并发调用方在解析前发生重叠
            tokio::task::yield_now().await;
            if n <= fail_first {
                Err(CloudError::Network("connection reset".to_string()))
            } else {
                Ok("anon-credential".to_string())
            }
        }
        .boxed_local()
    }
}

#[tokio::test]
async fn test_concurrent_callers_share_one_attempt() {
    let calls = Rc::new(Cell::new(0));
    let gate = IdentityGate::with_signer(scripted_signer(calls.clone(), 0));

    // 1. 首次解析前的并发调用共享同一次登录
    let (a, b) = futures::join!(gate.ensure(), gate.ensure());
    assert_eq!(a, Ok("anon-credential".to_string()));
    assert_eq!(b, Ok("anon-credential".to_string()));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_established_credential_short_circuits() {
    let calls = Rc::new(Cell::new(0));
    let gate = IdentityGate::with_signer(scripted_signer(calls.clone(), 0));

    gate.ensure().await.unwrap();
    gate.ensure().await.unwrap();
    gate.ensure().await.unwrap();

    // 凭证建立后不再发起登录
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_failure_clears_memo_and_allows_retry() {
    let calls = Rc::new(Cell::new(0));
    let gate = IdentityGate::with_signer(scripted_signer(calls.clone(), 1));

    // 1. 第一次尝试失败，错误原样上抛
    let first = gate.ensure().await;
    assert_eq!(
        first,
        Err(CloudError::Network("connection reset".to_string()))
    );

    // 2. 失败已清空缓存，下一次调用重新登录并成功
    let second = gate.ensure().await;
    assert_eq!(second, Ok("anon-credential".to_string()));
    assert_eq!(calls.get(), 2);
}

#[tokio::test]
async fn test_concurrent_failure_consumes_single_attempt() {
    let calls = Rc::new(Cell::new(0));
    let gate = IdentityGate::with_signer(scripted_signer(calls.clone(), 1));

    // 1. 两个并发调用共享同一次失败
    let (a, b) = futures::join!(gate.ensure(), gate.ensure());
    assert!(a.is_err());
    assert!(b.is_err());
    assert_eq!(calls.get(), 1);

    // 2. 重试属于新的一次尝试
    assert_eq!(gate.ensure().await, Ok("anon-credential".to_string()));
    assert_eq!(calls.get(), 2);
}

#[tokio::test]
async fn test_clones_share_gate_state() {
    let calls = Rc::new(Cell::new(0));
    let gate = IdentityGate::with_signer(scripted_signer(calls.clone(), 0));
    let gate_clone = gate.clone();

    gate.ensure().await.unwrap();
    gate_clone.ensure().await.unwrap();

    // 克隆体共享同一状态机
    assert_eq!(calls.get(), 1);
}
