use super::*;
use serde_json::json;

// =========================================================
// 反序列化与默认值
// =========================================================

#[test]
fn test_team_decodes_full_payload() {
    let team: Team = serde_json::from_value(json!({
        "teamId": "t-001",
        "name": "研发一组",
        "description": "核心业务团队",
        "inviteCode": "ABC123",
        "memberCount": 12,
        "adminName": "张伟",
        "status": "disabled",
        "createdAt": 1_709_899_200_000_i64,
        "activityRate": 87.5
    }))
    .unwrap();

    assert_eq!(team.team_id, "t-001");
    assert_eq!(team.name, "研发一组");
    assert_eq!(team.invite_code, "ABC123");
    assert_eq!(team.member_count, 12);
    assert_eq!(team.status, TeamStatus::Disabled);
    assert_eq!(team.activity_rate, 87.5);
}

#[test]
fn test_team_defaults_for_missing_fields() {
    let team: Team = serde_json::from_value(json!({})).unwrap();
    assert_eq!(team.member_count, 0);
    assert_eq!(team.status, TeamStatus::Active);
    assert!(team.description.is_none());
    assert_eq!(team.activity_rate, 0.0);
}

#[test]
fn test_unknown_team_status_degrades_to_active() {
    let team: Team = serde_json::from_value(json!({ "status": "archived" })).unwrap();
    assert_eq!(team.status, TeamStatus::Active);
}

#[test]
fn test_unknown_role_degrades_to_member() {
    let member: Member = serde_json::from_value(json!({ "role": "owner" })).unwrap();
    assert_eq!(member.role, Role::Member);
}

#[test]
fn test_unknown_user_status_matches_no_filter() {
    let user: User = serde_json::from_value(json!({ "status": "frozen" })).unwrap();
    assert_eq!(user.status, Some(UserStatus::Unknown));
    assert!(!user.matches_filters("", "", "", "active"));
    assert!(!user.matches_filters("", "", "", "inactive"));
}

#[test]
fn test_attendance_status_keeps_unknown_text() {
    let record: AttendanceRecord = serde_json::from_value(json!({
        "date": "2024-03-08",
        "status": "overtime",
        "time": "09:12",
        "location": "总部大厦"
    }))
    .unwrap();
    assert_eq!(record.status, AttendanceStatus::Other("overtime".to_string()));

    let record: AttendanceRecord =
        serde_json::from_value(json!({ "status": "office" })).unwrap();
    assert_eq!(record.status, AttendanceStatus::Office);
}

#[test]
fn test_stats_report_by_date_is_sorted() {
    let report: StatsReport = serde_json::from_value(json!({
        "stats": { "office": 5, "total": 9 },
        "byDate": {
            "2024-03-10": { "office": 2 },
            "2024-03-01": { "office": 1, "remote": 1 },
            "2024-03-05": { "leave": 1 }
        }
    }))
    .unwrap();

    let days: Vec<&str> = report.by_date.keys().map(|s| s.as_str()).collect();
    assert_eq!(days, vec!["2024-03-01", "2024-03-05", "2024-03-10"]);
    assert_eq!(report.stats.office, 5);
    // 未返回的汇总字段取默认值
    assert_eq!(report.stats.rate, 0.0);
}

#[test]
fn test_team_stats_distinguishes_missing_and_empty_trend() {
    let stats: TeamStats = serde_json::from_value(json!({ "attendanceRate": 91.0 })).unwrap();
    assert!(stats.trend.is_none());

    let stats: TeamStats = serde_json::from_value(json!({ "trend": [] })).unwrap();
    assert_eq!(stats.trend, Some(Vec::new()));
}

// =========================================================
// 筛选谓词
// =========================================================

fn make_user(id: &str) -> User {
    User {
        user_id: id.to_string(),
        ..Default::default()
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            name: Some("张伟".to_string()),
            phone: Some("13800138000".to_string()),
            wechat: Some("zhangwei_wx".to_string()),
            team_id: Some("t1".to_string()),
            role: Role::Admin,
            status: Some(UserStatus::Active),
            ..make_user("u1")
        },
        User {
            name: Some("Li Na".to_string()),
            phone: Some("13900001111".to_string()),
            team_id: Some("t2".to_string()),
            status: Some(UserStatus::Inactive),
            ..make_user("u2")
        },
        User {
            wechat: Some("WX_003".to_string()),
            ..make_user("u3")
        },
    ]
}

#[test]
fn test_user_search_is_case_insensitive_on_name_and_wechat() {
    let users = sample_users();
    let hits: Vec<&str> = users
        .iter()
        .filter(|u| u.matches_filters("LI", "", "", ""))
        .map(|u| u.user_id.as_str())
        .collect();
    assert_eq!(hits, vec!["u2"]);

    let hits: Vec<&str> = users
        .iter()
        .filter(|u| u.matches_filters("wx_003", "", "", ""))
        .map(|u| u.user_id.as_str())
        .collect();
    assert_eq!(hits, vec!["u3"]);
}

#[test]
fn test_user_search_matches_phone_verbatim() {
    let users = sample_users();
    let hits: Vec<&str> = users
        .iter()
        .filter(|u| u.matches_filters("138001", "", "", ""))
        .map(|u| u.user_id.as_str())
        .collect();
    assert_eq!(hits, vec!["u1"]);
}

#[test]
fn test_user_filters_combine_with_and() {
    let users = sample_users();

    // 单个条件命中
    assert!(users[0].matches_filters("张", "", "", ""));
    assert!(users[0].matches_filters("", "t1", "", ""));
    assert!(users[0].matches_filters("", "", "admin", ""));
    assert!(users[0].matches_filters("", "", "", "active"));

    // 全部条件同时命中才通过
    assert!(users[0].matches_filters("张", "t1", "admin", "active"));
    assert!(!users[0].matches_filters("张", "t2", "admin", "active"));
    assert!(!users[0].matches_filters("张", "t1", "member", "active"));
    assert!(!users[0].matches_filters("张", "t1", "admin", "inactive"));
}

#[test]
fn test_user_status_filter_excludes_missing_status() {
    let users = sample_users();
    // u3 没有 status 字段，状态筛选永远不命中
    assert!(!users[2].matches_filters("", "", "", "active"));
    // 但不设状态筛选时正常出现
    assert!(users[2].matches_filters("", "", "", ""));
}

#[test]
fn test_user_is_active_defaults_missing_status() {
    assert!(make_user("u").is_active());

    let inactive = User {
        status: Some(UserStatus::Inactive),
        ..make_user("u")
    };
    assert!(!inactive.is_active());
}

#[test]
fn test_member_filter_case_insensitive_substring() {
    let members = vec![
        Member {
            user_id: "m1".to_string(),
            name: Some("Alice Chen".to_string()),
            ..Default::default()
        },
        Member {
            user_id: "m2".to_string(),
            name: Some("王小明".to_string()),
            ..Default::default()
        },
        Member {
            user_id: "m3".to_string(),
            name: None,
            ..Default::default()
        },
    ];

    let hits: Vec<&str> = members
        .iter()
        .filter(|m| m.matches_name("alice"))
        .map(|m| m.user_id.as_str())
        .collect();
    assert_eq!(hits, vec!["m1"]);

    // 空关键字返回所有有姓名的成员；无姓名的成员不参与匹配
    let hits: Vec<&str> = members
        .iter()
        .filter(|m| m.matches_name(""))
        .map(|m| m.user_id.as_str())
        .collect();
    assert_eq!(hits, vec!["m1", "m2"]);
}

#[test]
fn test_team_query_matches_name_or_invite_code() {
    let team = Team {
        name: "研发一组".to_string(),
        invite_code: "AbC123".to_string(),
        ..Default::default()
    };
    assert!(team.matches_query("研发"));
    assert!(team.matches_query("abc"));
    assert!(team.matches_query(""));
    assert!(!team.matches_query("市场"));
}

#[test]
fn test_team_status_toggled() {
    assert_eq!(TeamStatus::Active.toggled(), TeamStatus::Disabled);
    assert_eq!(TeamStatus::Disabled.toggled(), TeamStatus::Active);
}

#[test]
fn test_role_label() {
    assert_eq!(Role::Admin.label(), "管理员");
    assert_eq!(Role::Member.label(), "成员");
}
