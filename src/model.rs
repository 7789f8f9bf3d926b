//! admin-api 数据模型
//!
//! 与云函数约定的 camelCase JSON 结构一一对应。客户端不做校验，
//! 缺失字段一律取默认值；列表页的筛选谓词也集中在这里，方便单测。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =========================================================
// 概览
// =========================================================

/// 数据概览统计
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub team_count: u32,
    pub user_count: u32,
    pub active_user_count: u32,
    /// 活跃用户环比增幅（百分比数值），为 0 时不展示
    pub active_user_growth: f64,
}

// =========================================================
// 团队
// =========================================================

/// 团队运营状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    /// 已被管理员禁用
    Disabled,
    /// 正常运营（未知状态按正常处理）
    #[default]
    #[serde(other)]
    Active,
}

impl TeamStatus {
    pub fn is_disabled(&self) -> bool {
        matches!(self, TeamStatus::Disabled)
    }

    /// 禁用/恢复操作的目标状态
    pub fn toggled(&self) -> TeamStatus {
        match self {
            TeamStatus::Active => TeamStatus::Disabled,
            TeamStatus::Disabled => TeamStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    pub description: Option<String>,
    pub invite_code: String,
    pub member_count: u32,
    pub admin_name: Option<String>,
    pub status: TeamStatus,
    /// 创建时间，毫秒时间戳
    pub created_at: Option<i64>,
    /// 活跃度百分比
    pub activity_rate: f64,
}

impl Team {
    /// 名称或邀请码包含关键字（大小写不敏感）
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.invite_code.to_lowercase().contains(&q)
    }
}

/// 团队详情：基础信息 + 成员列表
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamDetail {
    pub base_info: Team,
    pub members: Vec<Member>,
}

/// 团队成员（User 在单个团队内的投影）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub user_id: String,
    pub name: Option<String>,
    pub role: Role,
    pub joined_at: Option<i64>,
}

impl Member {
    /// 姓名包含关键字（大小写不敏感；无姓名的成员不参与匹配）
    pub fn matches_name(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&q))
    }
}

/// 团队近期考勤统计（getTeamStats）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    /// 按天的打卡趋势；后端未返回时页面回退到全零序列
    pub trend: Option<Vec<TrendPoint>>,
    pub attendance_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendPoint {
    /// YYYY-MM-DD 或英文星期缩写
    pub day: String,
    pub value: f64,
}

// =========================================================
// 用户
// =========================================================

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// 普通成员（未知角色按成员处理）
    #[default]
    #[serde(other)]
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }

    /// 角色徽章文案
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "管理员",
            Role::Member => "成员",
        }
    }
}

/// 用户账号状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    /// 后端扩展出的新状态，不参与任何筛选
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub wechat: Option<String>,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub role: Role,
    pub status: Option<UserStatus>,
    /// 注册时间，毫秒时间戳
    pub created_at: Option<i64>,
    /// 加入当前团队的时间，毫秒时间戳
    pub joined_at: Option<i64>,
    /// 最近活跃时间，后端已格式化好的文本
    pub last_active_at: Option<String>,
}

impl User {
    /// 状态缺失按正常处理
    pub fn is_active(&self) -> bool {
        matches!(self.status, None | Some(UserStatus::Active))
    }

    /// 用户列表的组合筛选，各条件取逻辑与
    ///
    /// # 参数
    /// * `search` - 关键字，匹配姓名/手机号/微信号（手机号按原文匹配，其余不分大小写）
    /// * `team` - 团队 ID 精确匹配，空串表示不限
    /// * `role` - 角色字面量（admin/member），空串表示不限
    /// * `status` - 状态字面量（active/inactive），空串表示不限
    pub fn matches_filters(&self, search: &str, team: &str, role: &str, status: &str) -> bool {
        let matches_search = search.is_empty() || {
            let q = search.to_lowercase();
            self.name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&q))
                || self.phone.as_deref().is_some_and(|p| p.contains(search))
                || self
                    .wechat
                    .as_deref()
                    .is_some_and(|w| w.to_lowercase().contains(&q))
        };
        let matches_team = team.is_empty() || self.team_id.as_deref() == Some(team);
        let matches_role = role.is_empty() || self.role.as_str() == role;
        let matches_status =
            status.is_empty() || self.status.is_some_and(|s| s.as_str() == status);
        matches_search && matches_team && matches_role && matches_status
    }
}

// =========================================================
// 考勤
// =========================================================

/// 打卡状态；后端新增的状态保留原文
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Office,
    Remote,
    Leave,
    Trip,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceRecord {
    pub date: String,
    pub status: AttendanceStatus,
    pub time: String,
    pub location: String,
}

/// 考勤汇总，getUserAttendance 与 getAttendanceStats 共用
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceSummary {
    pub office: u32,
    pub remote: u32,
    pub leave: u32,
    pub total: u32,
    /// 出勤率百分比数值
    pub rate: f64,
}

/// 单个用户的月度考勤（getUserAttendance）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyAttendance {
    pub stats: Option<AttendanceSummary>,
    pub records: Option<Vec<AttendanceRecord>>,
}

/// 单日打卡计数
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayCounts {
    pub office: u32,
    pub remote: u32,
    pub leave: u32,
}

/// 全量考勤报表（getAttendanceStats）
///
/// byDate 用有序映射承接，迭代即按日期升序。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsReport {
    pub stats: AttendanceSummary,
    pub by_date: BTreeMap<String, DayCounts>,
}

// =========================================================
// 登录
// =========================================================

/// login 动作的返回数据，多余字段忽略
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginData {
    pub token: String,
}

#[cfg(test)]
mod tests;
