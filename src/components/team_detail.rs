//! 团队详情页
//!
//! 详情与近 7 天出勤趋势并发加载，趋势失败只影响图表兜底，
//! 详情失败才算页面级错误。移出成员后仅重拉详情。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::icons::{Calendar, ChevronLeft, Clock, Search, Settings};
use crate::api::use_admin_api;
use crate::date::{format_date_ms, last_n_days, month_day_label, weekday_char};
use crate::model::{Member, Role, TeamDetail, TeamStats, TrendPoint};
use crate::task::use_task_guard;
use crate::web;

/// 后端未返回趋势时的兜底：截止今天的 7 个零值点
fn fallback_trend() -> Vec<TrendPoint> {
    last_n_days(7)
        .into_iter()
        .map(|day| TrendPoint { day, value: 0.0 })
        .collect()
}

/// 柱高基准，至少取 1 避免除零
fn chart_max(data: &[TrendPoint]) -> f64 {
    data.iter().map(|p| p.value).fold(1.0, f64::max)
}

#[component]
fn BarChart(data: Vec<TrendPoint>) -> impl IntoView {
    let max_value = chart_max(&data);

    view! {
        <div class="flex items-end justify-between gap-2 h-40 pt-4">
            {data
                .into_iter()
                .map(|point| {
                    let height = format!("{}px", point.value / max_value * 120.0);
                    let min_height = if point.value > 0.0 { "8px" } else { "4px" };
                    view! {
                        <div class="flex-1 flex flex-col items-center gap-2">
                            <div class="text-xs text-gray-600 font-medium">{point.value}</div>
                            <div class="w-full flex justify-center">
                                <div
                                    class="w-10 bg-blue-400 rounded-t-lg transition-all duration-300 hover:bg-blue-500"
                                    style:height=height
                                    style:min-height=min_height
                                ></div>
                            </div>
                            <div class="text-center">
                                <div class="text-xs font-medium text-gray-700">
                                    {format!("周{}", weekday_char(&point.day))}
                                </div>
                                <div class="text-[10px] text-gray-400">
                                    {month_day_label(&point.day)}
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn StatItem(
    label: &'static str,
    value: String,
    #[prop(default = "text-gray-900")] value_color: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-2">
            <span class="text-sm text-gray-500">{label}</span>
            <span class=format!("font-semibold {value_color}")>{value}</span>
        </div>
    }
}

#[component]
fn LogItem(action: &'static str, user: &'static str, time: &'static str) -> impl IntoView {
    view! {
        <div class="py-3 border-b border-gray-50 last:border-0">
            <p class="text-sm font-medium text-gray-900">{action}</p>
            <p class="text-xs text-gray-400 mt-1">{user}" · "{time}</p>
        </div>
    }
}

#[component]
fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-6 animate-pulse">
            <div class="h-6 w-32 bg-gray-200 rounded"></div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <div class="bg-white rounded-2xl p-6 border border-gray-100">
                        <div class="h-8 w-48 bg-gray-200 rounded mb-4"></div>
                        <div class="h-4 w-64 bg-gray-200 rounded"></div>
                    </div>
                </div>
                <div class="bg-white rounded-2xl p-6 border border-gray-100">
                    <div class="h-5 w-20 bg-gray-200 rounded mb-4"></div>
                    <div class="space-y-4">
                        <div class="h-4 w-full bg-gray-200 rounded"></div>
                        <div class="h-4 w-full bg-gray-200 rounded"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TeamDetailPage() -> impl IntoView {
    let api = use_admin_api();
    let guard = use_task_guard();
    let params = use_params_map();

    let (detail, set_detail) = signal(Option::<TeamDetail>::None);
    let (stats, set_stats) = signal(Option::<TeamStats>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (member_search, set_member_search) = signal(String::new());

    // 路由参数变化时重新加载
    Effect::new({
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let team_id = params.get().get("team_id").unwrap_or_default();
            if team_id.is_empty() {
                return;
            }
            set_loading.set(true);
            set_error.set(None);
            let api = api.clone();
            let token = guard.reissue();
            spawn_local(async move {
                let (detail_result, stats_result) = futures::join!(
                    api.get_team_detail(&team_id),
                    api.get_team_stats(&team_id, 7),
                );
                if token.is_cancelled() {
                    return;
                }
                match detail_result {
                    Ok(data) => {
                        set_detail.set(Some(data));
                        // 统计失败不影响主数据
                        set_stats.set(stats_result.ok());
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    });

    let handle_remove = {
        let api = api.clone();
        let guard = guard.clone();
        move |team_id: String, user_id: String| {
            if !web::confirm("确定要移出该成员吗？") {
                return;
            }
            let api = api.clone();
            let token = guard.reissue();
            spawn_local(async move {
                // 移出成功后重拉详情，趋势保持原样
                let refreshed = match api.remove_member(&team_id, &user_id).await {
                    Ok(()) => api.get_team_detail(&team_id).await,
                    Err(e) => Err(e),
                };
                if token.is_cancelled() {
                    return;
                }
                match refreshed {
                    Ok(data) => set_detail.set(Some(data)),
                    Err(e) => web::alert(&e.to_string()),
                }
            });
        }
    };

    move || {
        if loading.get() {
            return view! { <DetailSkeleton /> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! {
                <div class="flex flex-col items-center justify-center py-16">
                    <p class="text-red-500 mb-4">{message}</p>
                    <A href="/teams" attr:class="text-blue-500 hover:underline cursor-pointer">
                        "返回团队列表"
                    </A>
                </div>
            }
            .into_any();
        }
        let Some(data) = detail.get() else {
            return ().into_any();
        };

        let base_info = data.base_info;
        let members = data.members;
        let team_stats = stats.get();

        let trend_data = team_stats
            .as_ref()
            .and_then(|s| s.trend.clone())
            .unwrap_or_else(fallback_trend);
        // 出勤率 0 视同缺失，展示占位值
        let attendance_rate = team_stats
            .as_ref()
            .and_then(|s| s.attendance_rate)
            .filter(|rate| *rate != 0.0)
            .unwrap_or(92.0);
        let admin_count = members.iter().filter(|m| m.role == Role::Admin).count();
        let member_count = members.len();

        let description = base_info
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "暂无团队描述".to_string());
        let created = format_date_ms(base_info.created_at);

        let member_rows = {
            let members = members.clone();
            let handle_remove = handle_remove.clone();
            let team_id = base_info.team_id.clone();
            move || {
                let query = member_search.get();
                let filtered: Vec<Member> = members
                    .iter()
                    .filter(|m| m.matches_name(&query))
                    .cloned()
                    .collect();
                if filtered.is_empty() {
                    return view! {
                        <div class="px-6 py-12 text-center text-gray-400">"暂无成员"</div>
                    }
                    .into_any();
                }
                let handle_remove = handle_remove.clone();
                let team_id = team_id.clone();
                filtered
                    .into_iter()
                    .map(|member| {
                        let remove = {
                            let handle_remove = handle_remove.clone();
                            let team_id = team_id.clone();
                            let user_id = member.user_id.clone();
                            move |_| handle_remove(team_id.clone(), user_id.clone())
                        };
                        let initial = member
                            .name
                            .as_deref()
                            .filter(|n| !n.is_empty())
                            .unwrap_or("U")
                            .chars()
                            .next()
                            .unwrap_or('U')
                            .to_uppercase()
                            .to_string();
                        let display_name = member
                            .name
                            .clone()
                            .filter(|n| !n.is_empty())
                            .unwrap_or_else(|| "Unknown".to_string());

                        view! {
                            <div class="grid grid-cols-12 gap-4 px-6 py-4 items-center hover:bg-gray-50 transition-colors">
                                <div class="col-span-4 flex items-center gap-3">
                                    <div class="w-9 h-9 bg-blue-100 rounded-lg flex items-center justify-center text-blue-600 font-semibold text-sm">
                                        {initial}
                                    </div>
                                    <span class="font-medium text-gray-900">{display_name}</span>
                                </div>

                                <div class="col-span-2 text-sm text-gray-600">
                                    {member.role.label()}
                                </div>

                                <div class="col-span-3 text-sm text-gray-500">
                                    {format_date_ms(member.joined_at)}
                                </div>

                                <div class="col-span-3 text-right">
                                    <button
                                        on:click=remove
                                        class="text-sm text-gray-400 hover:text-red-500 transition-colors cursor-pointer"
                                    >
                                        "移出"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }
        };

        view! {
            <div class="max-w-6xl space-y-6">
                <A
                    href="/teams"
                    attr:class="inline-flex items-center gap-1 text-sm text-gray-500 hover:text-gray-900 transition-colors cursor-pointer"
                >
                    <ChevronLeft attr:class="w-4 h-4" />
                    "返回团队列表"
                </A>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    // 左侧主栏
                    <div class="lg:col-span-2 space-y-6">
                        // 团队信息
                        <div class="bg-white rounded-2xl p-6 border border-gray-100">
                            <div class="flex items-start justify-between mb-4">
                                <div>
                                    <div class="flex items-center gap-3">
                                        <h1 class="text-2xl font-bold text-gray-900">
                                            {base_info.name}
                                        </h1>
                                        <span class="px-2.5 py-1 bg-green-50 text-green-600 text-xs font-medium rounded-full">
                                            "正常运营"
                                        </span>
                                    </div>
                                    <p class="text-gray-500 mt-2">{description}</p>
                                </div>
                                <button class="flex items-center gap-2 px-4 py-2 text-sm font-medium text-gray-600 bg-gray-50 rounded-lg hover:bg-gray-100 transition-colors cursor-pointer">
                                    <Settings attr:class="w-4 h-4" />
                                    "团队设置"
                                </button>
                            </div>

                            <div class="flex items-center gap-6 text-sm text-gray-500">
                                <div class="flex items-center gap-2">
                                    <Calendar attr:class="w-4 h-4" />
                                    "创建于 "
                                    {created}
                                </div>
                                <div class="flex items-center gap-2 px-3 py-1 bg-gray-50 rounded-lg font-mono">
                                    {base_info.invite_code}
                                </div>
                            </div>
                        </div>

                        // 出勤趋势
                        <div class="bg-white rounded-2xl p-6 border border-gray-100">
                            <div class="flex items-center gap-2 mb-4">
                                <div class="w-1 h-5 bg-blue-500 rounded-full"></div>
                                <h2 class="font-semibold text-gray-900">"近7天出勤趋势"</h2>
                            </div>
                            <BarChart data=trend_data />
                        </div>

                        // 成员列表
                        <div class="bg-white rounded-2xl border border-gray-100 overflow-hidden">
                            <div class="flex items-center justify-between p-6 border-b border-gray-100">
                                <h2 class="font-semibold text-gray-900">"成员列表"</h2>
                                <div class="relative">
                                    <Search attr:class="absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4 text-gray-400" />
                                    <input
                                        type="text"
                                        placeholder="搜索成员"
                                        prop:value=member_search
                                        on:input=move |ev| set_member_search.set(event_target_value(&ev))
                                        class="pl-9 pr-4 py-2 bg-gray-50 border-0 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500/20"
                                    />
                                </div>
                            </div>

                            <div class="grid grid-cols-12 gap-4 px-6 py-3 bg-gray-50 text-xs font-medium text-gray-500 uppercase tracking-wider">
                                <div class="col-span-4">"成员"</div>
                                <div class="col-span-2">"角色"</div>
                                <div class="col-span-3">"加入时间"</div>
                                <div class="col-span-3 text-right">"操作"</div>
                            </div>

                            <div class="divide-y divide-gray-100">{member_rows}</div>
                        </div>
                    </div>

                    // 右侧边栏
                    <div class="space-y-6">
                        <div class="bg-white rounded-2xl p-6 border border-gray-100">
                            <h3 class="font-semibold text-gray-900 mb-4">"统计概览"</h3>
                            <div class="divide-y divide-gray-100">
                                <StatItem label="成员总数" value=member_count.to_string() />
                                <StatItem label="管理员数" value=admin_count.to_string() />
                                <StatItem
                                    label="本月出勤率"
                                    value=format!("{attendance_rate}%")
                                    value_color="text-green-500"
                                />
                            </div>
                        </div>

                        <div class="bg-white rounded-2xl p-6 border border-gray-100">
                            <div class="flex items-center gap-2 mb-4">
                                <Clock attr:class="w-4 h-4 text-gray-400" />
                                <h3 class="font-semibold text-gray-900">"操作日志"</h3>
                            </div>
                            <div>
                                <LogItem
                                    action="修改了团队名称"
                                    user="王人力"
                                    time="2023-10-15 10:00"
                                />
                                <LogItem
                                    action="移除了成员 User 101"
                                    user="王人力"
                                    time="2023-10-16 14:30"
                                />
                                <LogItem
                                    action="更新了考勤规则"
                                    user="系统管理员"
                                    time="2023-10-20 09:15"
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_trend_is_seven_zero_days_ending_today() {
        let trend = fallback_trend();
        assert_eq!(trend.len(), 7);
        assert!(trend.iter().all(|p| p.value == 0.0));
        let today = last_n_days(1).pop().unwrap();
        assert_eq!(trend.last().map(|p| p.day.clone()), Some(today));
    }

    #[test]
    fn test_chart_max_never_below_one() {
        assert_eq!(chart_max(&[]), 1.0);
        // 全零兜底数据也不能除零
        assert_eq!(chart_max(&fallback_trend()), 1.0);

        let data = vec![
            TrendPoint {
                day: "2024-03-08".to_string(),
                value: 3.0,
            },
            TrendPoint {
                day: "2024-03-09".to_string(),
                value: 9.0,
            },
        ];
        assert_eq!(chart_max(&data), 9.0);
    }
}
