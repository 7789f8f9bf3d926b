use serde_json::json;

use super::*;

// =========================================================
// 信封拆包
// =========================================================

#[test]
fn test_into_data_accepts_both_success_codes() {
    let envelope: Envelope<Vec<String>> = serde_json::from_value(json!({
        "code": 200,
        "data": ["a", "b"]
    }))
    .unwrap();
    assert_eq!(
        envelope.into_data(SUCCESS_CODES, "Request failed").unwrap(),
        vec!["a".to_string(), "b".to_string()]
    );

    let envelope: Envelope<Vec<String>> = serde_json::from_value(json!({ "code": 0 })).unwrap();
    // code 0 也是成功；data 缺失时取默认值
    assert_eq!(
        envelope.into_data(SUCCESS_CODES, "Request failed").unwrap(),
        Vec::<String>::new()
    );
}

#[test]
fn test_into_data_surfaces_server_message() {
    let envelope: Envelope<serde_json::Value> = serde_json::from_value(json!({
        "code": 403,
        "msg": "无权限"
    }))
    .unwrap();
    assert_eq!(
        envelope.into_data(SUCCESS_CODES, "Request failed"),
        Err(ApiError::Server("无权限".to_string()))
    );
}

#[test]
fn test_into_data_falls_back_when_msg_missing_or_empty() {
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_value(json!({ "code": 500 })).unwrap();
    assert_eq!(
        envelope.into_data(SUCCESS_CODES, "Request failed"),
        Err(ApiError::Server("Request failed".to_string()))
    );

    // 空串 msg 等同缺失
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_value(json!({ "code": 500, "msg": "" })).unwrap();
    assert_eq!(
        envelope.into_data(SUCCESS_CODES, "Request failed"),
        Err(ApiError::Server("Request failed".to_string()))
    );
}

#[test]
fn test_login_rejects_code_zero() {
    // 同一个信封：通用动作视为成功，login 只认 200
    let envelope: Envelope<LoginData> = serde_json::from_value(json!({
        "code": 0,
        "data": { "token": "tok-1" }
    }))
    .unwrap();

    assert!(
        envelope
            .clone()
            .into_data(SUCCESS_CODES, "Request failed")
            .is_ok()
    );
    assert_eq!(
        envelope.into_data(LOGIN_SUCCESS_CODES, "Login failed"),
        Err(ApiError::Server("Login failed".to_string()))
    );
}

#[test]
fn test_login_data_ignores_extra_fields() {
    let envelope: Envelope<LoginData> = serde_json::from_value(json!({
        "code": 200,
        "data": { "token": "tok-1", "expiresIn": 3600, "adminName": "root" }
    }))
    .unwrap();
    let data = envelope
        .into_data(LOGIN_SUCCESS_CODES, "Login failed")
        .unwrap();
    assert_eq!(data.token, "tok-1");
}

// =========================================================
// 请求体形状
// =========================================================

#[test]
fn test_function_data_shape_with_token() {
    let value = serde_json::to_value(FunctionData {
        action: "listTeams",
        payload: &ListTeamsParams {
            sort_by: Some("memberCount".to_string()),
            ..Default::default()
        },
        token: Some("tok-1".to_string()),
    })
    .unwrap();

    assert_eq!(
        value,
        json!({
            "action": "listTeams",
            "payload": { "sortBy": "memberCount" },
            "token": "tok-1"
        })
    );
}

#[test]
fn test_function_data_omits_missing_token() {
    let value = serde_json::to_value(FunctionData {
        action: "getOverview",
        payload: &EmptyPayload {},
        token: None,
    })
    .unwrap();

    assert_eq!(value, json!({ "action": "getOverview", "payload": {} }));
}

#[test]
fn test_payloads_serialize_camel_case() {
    assert_eq!(
        serde_json::to_value(UserAttendancePayload {
            user_id: "u1",
            month: "2024-03"
        })
        .unwrap(),
        json!({ "userId": "u1", "month": "2024-03" })
    );

    assert_eq!(
        serde_json::to_value(UpdateTeamStatusPayload {
            team_id: "t1",
            status: TeamStatus::Disabled
        })
        .unwrap(),
        json!({ "teamId": "t1", "status": "disabled" })
    );

    assert_eq!(
        serde_json::to_value(DateRangePayload {
            start_date: "2024-03-01",
            end_date: "2024-03-31"
        })
        .unwrap(),
        json!({ "startDate": "2024-03-01", "endDate": "2024-03-31" })
    );

    assert_eq!(
        serde_json::to_value(RemoveMemberPayload {
            team_id: "t1",
            user_id: "u1"
        })
        .unwrap(),
        json!({ "teamId": "t1", "userId": "u1" })
    );
}
