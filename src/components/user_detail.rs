//! 用户详情页
//!
//! 详情与本月考勤并发加载，考勤接口失败或字段缺失时落到占位数据，
//! 只有详情本身失败才进错误态。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::icons::{Activity, Calendar, ChevronLeft, MessageCircle, Phone};
use super::users::initials;
use crate::api::use_admin_api;
use crate::date::{current_month, format_date_ms};
use crate::model::{AttendanceRecord, AttendanceStatus, AttendanceSummary, MonthlyAttendance, User};
use crate::task::use_task_guard;

/// 考勤汇总缺失时的占位统计
fn placeholder_stats() -> AttendanceSummary {
    AttendanceSummary {
        office: 20,
        remote: 2,
        leave: 0,
        total: 0,
        rate: 98.0,
    }
}

/// 打卡记录缺失时的占位数据
fn placeholder_records() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            date: "2024-03-10".to_string(),
            status: AttendanceStatus::Office,
            time: "08:55".to_string(),
            location: "公司".to_string(),
        },
        AttendanceRecord {
            date: "2024-03-09".to_string(),
            status: AttendanceStatus::Remote,
            time: "09:00".to_string(),
            location: "家".to_string(),
        },
        AttendanceRecord {
            date: "2024-03-08".to_string(),
            status: AttendanceStatus::Office,
            time: "08:50".to_string(),
            location: "公司".to_string(),
        },
    ]
}

#[component]
fn AttendanceStat(
    value: String,
    label: &'static str,
    #[prop(default = "text-gray-900")] value_color: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-4 px-6 border-r border-gray-100 last:border-0">
            <p class=format!("text-2xl font-bold {value_color}")>{value}</p>
            <p class="text-xs text-gray-500 mt-1">{label}</p>
        </div>
    }
}

#[component]
fn StatusBadge(active: bool) -> impl IntoView {
    let (class, label) = if active {
        ("text-sm font-medium text-green-500", "正常")
    } else {
        ("text-sm font-medium text-red-500", "停用")
    };
    view! { <span class=class>{label}</span> }
}

#[component]
fn AttendanceStatusBadge(status: AttendanceStatus) -> impl IntoView {
    let (label, colors) = match status {
        AttendanceStatus::Office => ("到岗".to_string(), "bg-green-100 text-green-600"),
        AttendanceStatus::Remote => ("远程".to_string(), "bg-blue-100 text-blue-600"),
        AttendanceStatus::Leave => ("请假".to_string(), "bg-orange-100 text-orange-600"),
        AttendanceStatus::Trip => ("出差".to_string(), "bg-purple-100 text-purple-600"),
        AttendanceStatus::Other(raw) => (raw, "bg-gray-100 text-gray-600"),
    };
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-1 {colors} text-xs font-medium rounded-lg",
        )>{label}</span>
    }
}

#[component]
fn LogItem(text: &'static str, time: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-2 py-2">
            <span class="text-gray-400 mt-0.5">"•"</span>
            <div>
                <p class="text-sm text-gray-600">{text}</p>
                <p class="text-xs text-gray-400 mt-0.5">{time}</p>
            </div>
        </div>
    }
}

#[component]
fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-6 animate-pulse">
            <div class="h-6 w-32 bg-gray-200 rounded"></div>
            <div class="bg-white rounded-2xl p-6 border border-gray-100">
                <div class="flex items-center gap-4">
                    <div class="w-16 h-16 bg-gray-200 rounded-2xl"></div>
                    <div class="space-y-2">
                        <div class="h-6 w-32 bg-gray-200 rounded"></div>
                        <div class="h-4 w-48 bg-gray-200 rounded"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let api = use_admin_api();
    let guard = use_task_guard();
    let params = use_params_map();

    let (user, set_user) = signal(Option::<User>::None);
    let (attendance, set_attendance) = signal(Option::<MonthlyAttendance>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 路由参数变化时重新加载
    Effect::new({
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let user_id = params.get().get("user_id").unwrap_or_default();
            if user_id.is_empty() {
                return;
            }
            set_loading.set(true);
            set_error.set(None);
            let api = api.clone();
            let token = guard.reissue();
            spawn_local(async move {
                let month = current_month();
                let (user_result, attendance_result) = futures::join!(
                    api.get_user_detail(&user_id),
                    api.get_user_attendance(&user_id, &month),
                );
                if token.is_cancelled() {
                    return;
                }
                match user_result {
                    Ok(data) => {
                        set_user.set(Some(data));
                        // 考勤失败不影响主数据
                        set_attendance.set(attendance_result.ok());
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    });

    move || {
        if loading.get() {
            return view! { <DetailSkeleton /> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! {
                <div class="flex flex-col items-center justify-center py-16">
                    <p class="text-red-500 mb-4">{message}</p>
                    <A href="/users" attr:class="text-blue-500 hover:underline cursor-pointer">
                        "返回用户列表"
                    </A>
                </div>
            }
            .into_any();
        }
        let Some(user) = user.get() else {
            return ().into_any();
        };

        let monthly = attendance.get();
        let stats = monthly
            .as_ref()
            .and_then(|m| m.stats.clone())
            .unwrap_or_else(placeholder_stats);
        let records = monthly
            .as_ref()
            .and_then(|m| m.records.clone())
            .unwrap_or_else(placeholder_records);

        let avatar = initials(user.name.as_deref());
        let active = user.is_active();
        let display_name = user
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "未知用户".to_string());
        let wechat = user
            .wechat
            .clone()
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| "-".to_string());
        let phone = user
            .phone
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "-".to_string());
        let registered = format_date_ms(user.created_at);
        let last_active = user
            .last_active_at
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "-".to_string());

        let team_card = match user.team_name.clone().filter(|t| !t.is_empty()) {
            Some(team_name) => {
                let joined = format_date_ms(user.joined_at);
                view! {
                    <div class="p-4 bg-gray-50 rounded-xl">
                        <p class="font-medium text-gray-900">{team_name}</p>
                        <div class="flex items-center justify-between mt-2 text-sm text-gray-500">
                            <span>{user.role.label()}</span>
                            <span>{joined}" 加入"</span>
                        </div>
                    </div>
                }
                .into_any()
            }
            None => view! { <p class="text-gray-400 text-sm">"暂未加入团队"</p> }.into_any(),
        };

        let record_rows = if records.is_empty() {
            view! { <div class="px-6 py-12 text-center text-gray-400">"暂无打卡记录"</div> }
                .into_any()
        } else {
            records
                .into_iter()
                .map(|record| {
                    view! {
                        <div class="grid grid-cols-4 gap-4 px-6 py-4 items-center">
                            <div class="text-sm text-gray-900">{record.date}</div>
                            <div>
                                <AttendanceStatusBadge status=record.status />
                            </div>
                            <div class="text-sm text-gray-600">{record.time}</div>
                            <div class="text-sm text-gray-500">{record.location}</div>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <div class="max-w-5xl space-y-6">
                <A
                    href="/users"
                    attr:class="inline-flex items-center gap-1 text-sm text-gray-500 hover:text-gray-900 transition-colors cursor-pointer"
                >
                    <ChevronLeft attr:class="w-4 h-4" />
                    "返回用户列表"
                </A>

                // 用户信息卡
                <div class="bg-white rounded-2xl p-6 border border-gray-100">
                    <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                        <div class="flex items-center gap-4">
                            <div class="w-16 h-16 bg-blue-100 rounded-2xl flex items-center justify-center text-blue-600 font-bold text-xl">
                                {avatar}
                            </div>
                            <div>
                                <h1 class="text-xl font-bold text-gray-900">{display_name}</h1>
                                <div class="flex flex-wrap items-center gap-4 mt-2 text-sm text-gray-500">
                                    <div class="flex items-center gap-1">
                                        <MessageCircle attr:class="w-4 h-4" />
                                        {wechat}
                                    </div>
                                    <div class="flex items-center gap-1">
                                        <Phone attr:class="w-4 h-4" />
                                        {phone}
                                    </div>
                                    <div class="flex items-center gap-1">
                                        <Calendar attr:class="w-4 h-4" />
                                        "注册于 "
                                        {registered}
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="flex items-center gap-6 text-sm">
                            <div>
                                <p class="text-gray-400">"状态"</p>
                                <StatusBadge active=active />
                            </div>
                            <div class="text-right">
                                <p class="text-gray-400">"最近活跃"</p>
                                <p class="font-medium text-gray-900">{last_active}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    // 左侧主栏
                    <div class="lg:col-span-2 space-y-6">
                        // 本月考勤统计
                        <div class="bg-white rounded-2xl border border-gray-100 overflow-hidden">
                            <div class="flex items-center gap-2 p-6 border-b border-gray-100">
                                <div class="w-1 h-5 bg-blue-500 rounded-full"></div>
                                <h2 class="font-semibold text-gray-900">"本月考勤统计"</h2>
                            </div>
                            <div class="grid grid-cols-4">
                                <AttendanceStat
                                    value=stats.office.to_string()
                                    label="出勤天数"
                                    value_color="text-green-500"
                                />
                                <AttendanceStat
                                    value=stats.remote.to_string()
                                    label="远程天数"
                                    value_color="text-blue-500"
                                />
                                <AttendanceStat
                                    value=stats.leave.to_string()
                                    label="请假天数"
                                    value_color="text-orange-500"
                                />
                                <AttendanceStat value=format!("{}%", stats.rate) label="出勤率" />
                            </div>
                        </div>

                        // 最近打卡记录
                        <div class="bg-white rounded-2xl border border-gray-100 overflow-hidden">
                            <div class="p-6 border-b border-gray-100">
                                <h2 class="font-semibold text-gray-900">"最近打卡记录"</h2>
                            </div>

                            <div class="grid grid-cols-4 gap-4 px-6 py-3 bg-gray-50 text-xs font-medium text-gray-500 uppercase tracking-wider">
                                <div>"日期"</div>
                                <div>"状态"</div>
                                <div>"打卡时间"</div>
                                <div>"地点"</div>
                            </div>

                            <div class="divide-y divide-gray-100">{record_rows}</div>
                        </div>
                    </div>

                    // 右侧边栏
                    <div class="space-y-6">
                        <div class="bg-white rounded-2xl p-6 border border-gray-100">
                            <h3 class="font-semibold text-gray-900 mb-4">"所属团队"</h3>
                            {team_card}
                        </div>

                        <div class="bg-white rounded-2xl p-6 border border-gray-100">
                            <div class="flex items-center gap-2 mb-4">
                                <Activity attr:class="w-4 h-4 text-gray-400" />
                                <h3 class="font-semibold text-gray-900">"行为日志"</h3>
                            </div>
                            <div>
                                <LogItem text="修改了个人头像" time="2024-03-10" />
                                <LogItem text="加入了新团队" time="2024-03-01" />
                                <LogItem text="完善了个人资料" time="2024-02-15" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
