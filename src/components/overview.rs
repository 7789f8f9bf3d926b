//! 数据概览页
//!
//! 首屏并发拉取平台概览与团队列表，任一失败都按空数据渲染，
//! 不打断另一半内容的展示。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::icons::{Building2, ChevronRight, TrendingUp, Users};
use crate::api::{ListTeamsParams, use_admin_api};
use crate::model::{Overview, Team};
use crate::task::use_task_guard;

#[component]
fn StatCard(
    label: &'static str,
    value: String,
    #[prop(optional_no_strip)] trend: Option<String>,
    icon_bg: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-6 border border-gray-100">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500 mb-1">{label}</p>
                    <p class="text-3xl font-bold text-gray-900">{value}</p>
                    {trend
                        .map(|t| {
                            view! {
                                <p class="text-sm text-green-500 mt-1 flex items-center gap-1">
                                    <TrendingUp attr:class="w-3 h-3" />
                                    {t}
                                </p>
                            }
                        })}
                </div>
                <div class=format!(
                    "w-12 h-12 {icon_bg} rounded-xl flex items-center justify-center",
                )>{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn TeamItem(team: Team) -> impl IntoView {
    let initial = team.name.chars().next().unwrap_or('?').to_string();
    // 空描述与缺失一视同仁
    let description = team
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "暂无描述".to_string());

    view! {
        <div class="flex items-center justify-between py-4 px-2 hover:bg-gray-50 rounded-xl transition-colors cursor-pointer group">
            <div class="flex items-center gap-4">
                <div class="w-10 h-10 bg-blue-100 rounded-xl flex items-center justify-center text-blue-600 font-semibold text-sm">
                    {initial}
                </div>
                <div>
                    <p class="font-medium text-gray-900 group-hover:text-blue-600 transition-colors">
                        {team.name}
                    </p>
                    <p class="text-sm text-gray-500">{description}</p>
                </div>
            </div>
            <div class="flex items-center gap-3">
                <div class="text-right">
                    <p class="text-xs text-gray-400">"活跃度"</p>
                    <p class="text-sm font-semibold text-green-500">
                        {format!("{}%", team.activity_rate)}
                    </p>
                </div>
                <ChevronRight attr:class="w-5 h-5 text-gray-300 group-hover:text-blue-500 transition-colors" />
            </div>
        </div>
    }
}

#[component]
fn StatCardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-6 border border-gray-100 animate-pulse">
            <div class="flex items-center justify-between">
                <div class="space-y-3">
                    <div class="h-4 w-20 bg-gray-200 rounded"></div>
                    <div class="h-8 w-16 bg-gray-200 rounded"></div>
                </div>
                <div class="w-12 h-12 bg-gray-200 rounded-xl"></div>
            </div>
        </div>
    }
}

#[component]
fn TeamListSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-2">
            {(0..3)
                .map(|_| {
                    view! {
                        <div class="flex items-center gap-4 py-4 px-2 animate-pulse">
                            <div class="w-10 h-10 bg-gray-200 rounded-xl"></div>
                            <div class="flex-1 space-y-2">
                                <div class="h-4 w-32 bg-gray-200 rounded"></div>
                                <div class="h-3 w-24 bg-gray-200 rounded"></div>
                            </div>
                            <div class="h-4 w-10 bg-gray-200 rounded"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let api = use_admin_api();
    let guard = use_task_guard();

    let (overview, set_overview) = signal(Overview::default());
    let (teams, set_teams) = signal(Vec::<Team>::new());
    let (loading, set_loading) = signal(true);

    let token = guard.reissue();
    spawn_local(async move {
        let team_params = ListTeamsParams::default();
        let (ov, tl) = futures::join!(api.get_overview(), api.list_teams(&team_params));
        if token.is_cancelled() {
            return;
        }
        set_overview.set(ov.unwrap_or_default());
        set_teams.set(tl.unwrap_or_default());
        set_loading.set(false);
    });

    view! {
        <div class="max-w-5xl space-y-8">
            <h1 class="text-2xl font-bold text-gray-900">"数据概览"</h1>

            // 统计卡片
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <StatCardSkeleton />
                            <StatCardSkeleton />
                            <StatCardSkeleton />
                        }
                    }
                >
                    {move || {
                        let ov = overview.get();
                        let trend = (ov.active_user_growth != 0.0)
                            .then(|| format!("较上月 +{}%", ov.active_user_growth));
                        view! {
                            <StatCard
                                label="团队总数"
                                value=ov.team_count.to_string()
                                icon_bg="bg-blue-50"
                            >
                                <Building2 attr:class="w-6 h-6 text-blue-500" />
                            </StatCard>
                            <StatCard
                                label="用户总数"
                                value=ov.user_count.to_string()
                                icon_bg="bg-purple-50"
                            >
                                <Users attr:class="w-6 h-6 text-purple-500" />
                            </StatCard>
                            <StatCard
                                label="本月活跃用户"
                                value=ov.active_user_count.to_string()
                                trend=trend
                                icon_bg="bg-green-50"
                            >
                                <TrendingUp attr:class="w-6 h-6 text-green-500" />
                            </StatCard>
                        }
                    }}
                </Show>
            </div>

            // 最近活跃团队
            <div class="bg-white rounded-2xl border border-gray-100 p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="font-bold text-gray-900">"最近活跃团队"</h2>
                    <A
                        href="/teams"
                        attr:class="text-sm text-blue-500 hover:text-blue-600 flex items-center gap-1 cursor-pointer"
                    >
                        "查看全部"
                        <ChevronRight attr:class="w-4 h-4" />
                    </A>
                </div>

                <Show when=move || !loading.get() fallback=|| view! { <TeamListSkeleton /> }>
                    {move || {
                        let list = teams.get();
                        if list.is_empty() {
                            view! {
                                <div class="py-12 text-center text-gray-400">"暂无团队数据"</div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="divide-y divide-gray-50">
                                    {list
                                        .into_iter()
                                        .take(5)
                                        .map(|team| {
                                            let href = format!("/teams/{}", team.team_id);
                                            view! {
                                                <A href=href>
                                                    <TeamItem team=team />
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </Show>
            </div>
        </div>
    }
}
