//! admin-api 客户端
//!
//! 云函数统一返回 `{code, msg, data}` 信封，这里做一次通用拆包：
//! 通用动作以 200 或 0 为成功码；login 是唯一例外，只认 200，
//! 成功后顺手把令牌写入会话。与后端的这一不对称约定按原样保留。

use leptos::logging;
use leptos::prelude::use_context;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::cloud::{CloudClient, CloudError};
use crate::model::{
    LoginData, MonthlyAttendance, Overview, StatsReport, Team, TeamDetail, TeamStats,
    TeamStatus, User,
};
use crate::session::Session;

/// 后端云函数名
const FN_ADMIN_API: &str = "admin-api";

/// 通用动作的成功码
const SUCCESS_CODES: &[i64] = &[200, 0];
/// login 只认 200
const LOGIN_SUCCESS_CODES: &[i64] = &[200];

// =========================================================
// 错误
// =========================================================

/// API 层错误，页面直接展示 Display 文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 传输/平台层错误，原样透传
    Cloud(CloudError),
    /// 信封 code 非成功，携带服务端消息
    Server(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Cloud(e) => write!(f, "{e}"),
            ApiError::Server(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CloudError> for ApiError {
    fn from(e: CloudError) -> Self {
        ApiError::Cloud(e)
    }
}

// =========================================================
// 信封
// =========================================================

/// 云函数统一信封
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T: Default> Envelope<T> {
    /// 按成功码拆包
    ///
    /// 成功但 data 缺失时返回默认值；失败时取服务端 msg，
    /// msg 缺失或为空串时落到 `fallback`。
    pub fn into_data(self, success_codes: &[i64], fallback: &str) -> Result<T, ApiError> {
        if success_codes.contains(&self.code) {
            Ok(self.data.unwrap_or_default())
        } else {
            let msg = self
                .msg
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            Err(ApiError::Server(msg))
        }
    }
}

// =========================================================
// 请求体
// =========================================================

/// admin-api 的调用参数；token 缺失时整个键省略
#[derive(Serialize)]
struct FunctionData<'a, P: Serialize> {
    action: &'a str,
    payload: &'a P,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// listTeams 入参
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

/// listUsers 入参
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize)]
struct EmptyPayload {}

#[derive(Serialize)]
struct PasswordPayload<'a> {
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamIdPayload<'a> {
    team_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamStatsPayload<'a> {
    team_id: &'a str,
    days: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTeamStatusPayload<'a> {
    team_id: &'a str,
    status: TeamStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveMemberPayload<'a> {
    team_id: &'a str,
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserIdPayload<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserAttendancePayload<'a> {
    user_id: &'a str,
    month: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DateRangePayload<'a> {
    start_date: &'a str,
    end_date: &'a str,
}

// =========================================================
// 客户端
// =========================================================

/// admin-api 客户端
///
/// 持有云客户端与会话，除 login 外的动作自动携带当前令牌。
#[derive(Clone)]
pub struct AdminApi {
    cloud: CloudClient,
    session: Session,
}

impl AdminApi {
    pub fn new(cloud: CloudClient, session: Session) -> Self {
        Self { cloud, session }
    }

    /// 通用动作调用
    async fn call<P, T>(&self, action: &str, payload: &P) -> Result<T, ApiError>
    where
        P: Serialize,
        T: DeserializeOwned + Default,
    {
        let data = FunctionData {
            action,
            payload,
            token: self.session.raw_token(),
        };
        let envelope: Envelope<T> = self.cloud.call_function(FN_ADMIN_API, &data).await?;
        envelope.into_data(SUCCESS_CODES, "Request failed")
    }

    /// 管理员登录
    ///
    /// 不携带已有令牌；只认 200；成功后把返回的令牌写入会话再返回。
    pub async fn login(&self, password: &str) -> Result<LoginData, ApiError> {
        logging::log!(
            "[admin] 调用 admin-api login, env: {}",
            crate::cloud::env_id().unwrap_or("(未设置)")
        );
        let data = FunctionData {
            action: "login",
            payload: &PasswordPayload { password },
            token: None,
        };
        let envelope: Envelope<LoginData> =
            match self.cloud.call_function(FN_ADMIN_API, &data).await {
                Ok(envelope) => envelope,
                Err(e) => {
                    logging::error!("[admin] callFunction 异常: {e}");
                    return Err(e.into());
                }
            };
        logging::log!("[admin] callFunction 原始返回: {envelope:?}");

        let code = envelope.code;
        match envelope.into_data(LOGIN_SUCCESS_CODES, "Login failed") {
            Ok(data) => {
                self.session.establish(&data.token);
                Ok(data)
            }
            Err(e) => {
                logging::error!("[admin] 登录失败 code={code} msg={e}");
                Err(e)
            }
        }
    }

    /// 数据概览
    pub async fn get_overview(&self) -> Result<Overview, ApiError> {
        self.call("getOverview", &EmptyPayload {}).await
    }

    /// 团队列表，排序在服务端完成
    pub async fn list_teams(&self, params: &ListTeamsParams) -> Result<Vec<Team>, ApiError> {
        self.call("listTeams", params).await
    }

    /// 团队详情（基础信息 + 成员列表）
    pub async fn get_team_detail(&self, team_id: &str) -> Result<TeamDetail, ApiError> {
        self.call("getTeamDetail", &TeamIdPayload { team_id }).await
    }

    /// 团队近 days 天的出勤趋势
    pub async fn get_team_stats(&self, team_id: &str, days: u32) -> Result<TeamStats, ApiError> {
        self.call("getTeamStats", &TeamStatsPayload { team_id, days })
            .await
    }

    /// 禁用/恢复团队
    pub async fn update_team_status(
        &self,
        team_id: &str,
        status: TeamStatus,
    ) -> Result<(), ApiError> {
        self.call::<_, serde_json::Value>(
            "updateTeamStatus",
            &UpdateTeamStatusPayload { team_id, status },
        )
        .await
        .map(|_| ())
    }

    /// 把成员移出团队
    pub async fn remove_member(&self, team_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.call::<_, serde_json::Value>("removeMember", &RemoveMemberPayload { team_id, user_id })
            .await
            .map(|_| ())
    }

    /// 用户列表
    pub async fn list_users(&self, params: &ListUsersParams) -> Result<Vec<User>, ApiError> {
        self.call("listUsers", params).await
    }

    /// 用户详情
    pub async fn get_user_detail(&self, user_id: &str) -> Result<User, ApiError> {
        self.call("getUserDetail", &UserIdPayload { user_id }).await
    }

    /// 用户某月考勤，month 形如 YYYY-MM
    pub async fn get_user_attendance(
        &self,
        user_id: &str,
        month: &str,
    ) -> Result<MonthlyAttendance, ApiError> {
        self.call("getUserAttendance", &UserAttendancePayload { user_id, month })
            .await
    }

    /// 时间区间内的考勤报表
    pub async fn get_attendance_stats(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<StatsReport, ApiError> {
        self.call(
            "getAttendanceStats",
            &DateRangePayload {
                start_date,
                end_date,
            },
        )
        .await
    }

    /// 管理员列表（后端预留动作，页面暂不消费结构化结果）
    pub async fn list_admins(&self) -> Result<serde_json::Value, ApiError> {
        self.call("listAdmins", &EmptyPayload {}).await
    }
}

/// 从 Context 获取 API 客户端
pub fn use_admin_api() -> AdminApi {
    use_context::<AdminApi>().expect("AdminApi should be provided")
}

#[cfg(test)]
mod tests;
