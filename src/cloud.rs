//! CloudBase 接入层
//!
//! 封装环境选择、匿名身份与云函数调用三件事，
//! 所有 admin-api 请求都经由 [`CloudClient::call_function`] 发出。

mod identity;

use gloo_net::http::Request;
use leptos::logging;
use serde::{Serialize, de::DeserializeOwned};

pub use identity::IdentityGate;

/// 编译期注入的云环境 ID（对应原生工程的 VITE_CLOUD_ENV_ID）
const ENV_ID: Option<&str> = option_env!("OFFICEGO_CLOUD_ENV_ID");

/// 当前配置的环境 ID，仅用于诊断日志
pub fn env_id() -> Option<&'static str> {
    ENV_ID
}

// =========================================================
// 错误
// =========================================================

/// 接入层错误，页面直接展示 Display 文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    /// 环境 ID 未配置，无法定位云环境
    EnvMissing,
    /// 网络请求未能完成
    Network(String),
    /// 平台网关返回非 2xx
    Gateway(u16),
    /// 响应体不是预期的 JSON 结构
    Decode(String),
}

impl std::fmt::Display for CloudError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloudError::EnvMissing => write!(f, "云环境未配置 (OFFICEGO_CLOUD_ENV_ID)"),
            CloudError::Network(e) => write!(f, "网络错误: {e}"),
            CloudError::Gateway(status) => write!(f, "云服务网关错误: HTTP {status}"),
            CloudError::Decode(e) => write!(f, "响应解析失败: {e}"),
        }
    }
}

impl std::error::Error for CloudError {}

// =========================================================
// 客户端
// =========================================================

/// 云函数调用请求体
#[derive(Serialize)]
struct InvokeRequest<'a, D: Serialize> {
    name: &'a str,
    data: &'a D,
}

/// 环境已配置时的连接信息
#[derive(Clone)]
struct CloudEnv {
    base: String,
    identity: IdentityGate,
}

/// CloudBase 客户端
///
/// 环境 ID 缺失时仍可构造，此时所有调用返回 [`CloudError::EnvMissing`]。
#[derive(Clone)]
pub struct CloudClient {
    env: Option<CloudEnv>,
}

impl CloudClient {
    /// 按编译期环境变量初始化
    pub fn from_env() -> Self {
        logging::log!("[cloudbase] init env: {}", ENV_ID.unwrap_or("(未设置)"));
        let env = match ENV_ID {
            Some(id) => {
                let base = format!("https://{id}.service.tcloudbase.com");
                let identity = IdentityGate::new(&base);
                Some(CloudEnv { base, identity })
            }
            None => {
                logging::warn!("OFFICEGO_CLOUD_ENV_ID not set");
                None
            }
        };
        Self { env }
    }

    /// 调用云函数并解析响应
    ///
    /// 先确保匿名身份可用，再向函数网关发起一次调用。传输层失败原样上抛。
    ///
    /// # 参数
    /// * `name` - 云函数名
    /// * `data` - 函数入参，序列化为请求体的 data 字段
    pub async fn call_function<D, T>(&self, name: &str, data: &D) -> Result<T, CloudError>
    where
        D: Serialize,
        T: DeserializeOwned,
    {
        let Some(env) = &self.env else {
            return Err(CloudError::EnvMissing);
        };
        let credential = env.identity.ensure().await?;

        let url = format!("{}/v1/functions/invoke", env.base);
        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {credential}"))
            .json(&InvokeRequest { name, data })
            .map_err(|e| CloudError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| CloudError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(CloudError::Gateway(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CloudError::Decode(e.to_string()))
    }
}
