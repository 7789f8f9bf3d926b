//! 团队管理页
//!
//! 服务端按 sortBy 排序，搜索在客户端完成（团队名称或邀请码）。
//! 禁用/恢复按钮走 updateTeamStatus，成功后重新拉取列表。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::icons::{Ban, ChevronDown, Copy, Download, Search};
use crate::api::{ListTeamsParams, use_admin_api};
use crate::date::format_date_ms;
use crate::model::{Team, TeamStatus};
use crate::task::use_task_guard;
use crate::web;

#[component]
fn TableSkeleton() -> impl IntoView {
    view! {
        <div class="divide-y divide-gray-100">
            {(0..4)
                .map(|_| {
                    view! {
                        <div class="px-6 py-4 animate-pulse">
                            <div class="flex items-center gap-4">
                                <div class="h-4 w-32 bg-gray-200 rounded"></div>
                                <div class="h-4 w-20 bg-gray-200 rounded"></div>
                                <div class="h-4 w-12 bg-gray-200 rounded"></div>
                                <div class="h-4 w-16 bg-gray-200 rounded"></div>
                                <div class="h-4 w-24 bg-gray-200 rounded"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn TeamsPage() -> impl IntoView {
    let api = use_admin_api();
    let guard = use_task_guard();

    let (teams, set_teams) = signal(Vec::<Team>::new());
    let (loading, set_loading) = signal(true);
    let (search_query, set_search_query) = signal(String::new());
    let (sort_by, set_sort_by) = signal("createdAt".to_string());

    let load_teams = {
        let api = api.clone();
        let guard = guard.clone();
        move |sort: String| {
            set_loading.set(true);
            let api = api.clone();
            let token = guard.reissue();
            spawn_local(async move {
                let params = ListTeamsParams {
                    sort_by: Some(sort),
                    ..Default::default()
                };
                let result = api.list_teams(&params).await;
                if token.is_cancelled() {
                    return;
                }
                set_teams.set(result.unwrap_or_default());
                set_loading.set(false);
            });
        }
    };

    // 首次加载 + 排序字段变化时重新拉取
    Effect::new({
        let load_teams = load_teams.clone();
        move |_| load_teams(sort_by.get())
    });

    let handle_toggle_status = {
        let api = api.clone();
        let load_teams = load_teams.clone();
        move |team_id: String, status: TeamStatus| {
            let message = if status.is_disabled() {
                "确定要恢复该团队吗？"
            } else {
                "确定要禁用该团队吗？"
            };
            if !web::confirm(message) {
                return;
            }
            let api = api.clone();
            let load_teams = load_teams.clone();
            spawn_local(async move {
                match api.update_team_status(&team_id, status.toggled()).await {
                    Ok(_) => load_teams(sort_by.get_untracked()),
                    Err(e) => web::alert(&e.to_string()),
                }
            });
        }
    };

    let filtered_teams = Memo::new(move |_| {
        let query = search_query.get();
        teams
            .get()
            .into_iter()
            .filter(|t| t.matches_query(&query))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="max-w-6xl space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">"团队管理"</h1>
                <button class="flex items-center gap-2 px-4 py-2 text-sm font-medium text-gray-600 bg-white border border-gray-200 rounded-lg hover:bg-gray-50 transition-colors cursor-pointer">
                    <Download attr:class="w-4 h-4" />
                    "导出数据"
                </button>
            </div>

            // 搜索与排序
            <div class="bg-white rounded-2xl border border-gray-100 p-4">
                <div class="flex flex-col sm:flex-row gap-4">
                    <div class="flex-1 relative">
                        <Search attr:class="absolute left-4 top-1/2 -translate-y-1/2 w-5 h-5 text-gray-400" />
                        <input
                            type="text"
                            placeholder="搜索团队名称、邀请码..."
                            prop:value=search_query
                            on:input=move |ev| set_search_query.set(event_target_value(&ev))
                            class="w-full pl-11 pr-4 py-2.5 bg-gray-50 border-0 rounded-xl text-sm focus:outline-none focus:ring-2 focus:ring-blue-500/20 focus:bg-white transition-all"
                        />
                    </div>

                    <div class="relative">
                        <select
                            prop:value=sort_by
                            on:change=move |ev| set_sort_by.set(event_target_value(&ev))
                            class="appearance-none pl-4 pr-10 py-2.5 bg-gray-50 border-0 rounded-xl text-sm text-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500/20 cursor-pointer"
                        >
                            <option value="createdAt">"按创建时间排序"</option>
                            <option value="memberCount">"按成员数排序"</option>
                            <option value="name">"按名称排序"</option>
                        </select>
                        <ChevronDown attr:class="absolute right-3 top-1/2 -translate-y-1/2 w-4 h-4 text-gray-400 pointer-events-none" />
                    </div>
                </div>
            </div>

            // 团队列表
            <div class="bg-white rounded-2xl border border-gray-100 overflow-hidden">
                <div class="grid grid-cols-12 gap-4 px-6 py-4 bg-gray-50 border-b border-gray-100 text-xs font-medium text-gray-500 uppercase tracking-wider">
                    <div class="col-span-3">"团队名称"</div>
                    <div class="col-span-2">"邀请码"</div>
                    <div class="col-span-1">"成员数"</div>
                    <div class="col-span-2">"管理员"</div>
                    <div class="col-span-2">"创建时间"</div>
                    <div class="col-span-2 text-right">"操作"</div>
                </div>

                <Show when=move || !loading.get() fallback=|| view! { <TableSkeleton /> }>
                    {
                        let handle_toggle_status = handle_toggle_status.clone();
                        view! {
                            <Show
                                when=move || !filtered_teams.get().is_empty()
                                fallback=move || {
                                    view! {
                                        <div class="px-6 py-16 text-center text-gray-400">
                                            {move || {
                                                if search_query.get().is_empty() {
                                                    "暂无团队数据"
                                                } else {
                                                    "没有找到匹配的团队"
                                                }
                                            }}
                                        </div>
                                    }
                                }
                            >
                                <div class="divide-y divide-gray-100">
                                    <For
                                        each=move || filtered_teams.get()
                                        key=|t| t.team_id.clone()
                                        children={
                                            let handle_toggle_status = handle_toggle_status.clone();
                                            move |team: Team| {
                                                let code = team.invite_code.clone();
                                                let detail_href = format!("/teams/{}", team.team_id);
                                                let disabled = team.status.is_disabled();
                                                let toggle = {
                                                    let handle_toggle_status = handle_toggle_status.clone();
                                                    let team_id = team.team_id.clone();
                                                    let status = team.status;
                                                    move |_| handle_toggle_status(team_id.clone(), status)
                                                };
                                                let admin_name = team
                                                    .admin_name
                                                    .clone()
                                                    .filter(|n| !n.is_empty())
                                                    .unwrap_or_else(|| "-".to_string());

                                                view! {
                                                    <div class="grid grid-cols-12 gap-4 px-6 py-4 items-center hover:bg-gray-50 transition-colors">
                                                        <div class="col-span-3 flex items-center gap-2">
                                                            <span class="font-medium text-gray-900">{team.name}</span>
                                                            {disabled
                                                                .then(|| {
                                                                    view! {
                                                                        <span class="inline-flex items-center px-2 py-0.5 rounded text-xs font-medium bg-red-50 text-red-600">
                                                                            "已禁用"
                                                                        </span>
                                                                    }
                                                                })}
                                                        </div>

                                                        <div class="col-span-2 font-mono text-sm text-gray-600">
                                                            {team.invite_code}
                                                        </div>

                                                        <div class="col-span-1 text-sm text-gray-600">
                                                            {team.member_count}
                                                        </div>

                                                        <div class="col-span-2 text-sm text-gray-600">{admin_name}</div>

                                                        <div class="col-span-2 text-sm text-gray-500">
                                                            {format_date_ms(team.created_at)}
                                                        </div>

                                                        <div class="col-span-2 flex items-center justify-end gap-2">
                                                            <button
                                                                on:click=move |_| web::copy_to_clipboard(&code)
                                                                class="p-2 text-gray-400 hover:text-blue-500 hover:bg-blue-50 rounded-lg transition-colors cursor-pointer"
                                                                title="复制邀请码"
                                                            >
                                                                <Copy attr:class="w-4 h-4" />
                                                            </button>
                                                            <A
                                                                href=detail_href
                                                                attr:class="px-3 py-1.5 text-sm text-blue-500 hover:text-blue-600 hover:bg-blue-50 rounded-lg transition-colors cursor-pointer"
                                                            >
                                                                "详情"
                                                            </A>
                                                            <button
                                                                on:click=toggle
                                                                class="p-2 text-gray-400 hover:text-red-500 hover:bg-red-50 rounded-lg transition-colors cursor-pointer"
                                                                title=if disabled { "恢复团队" } else { "禁用团队" }
                                                            >
                                                                <Ban attr:class="w-4 h-4" />
                                                            </button>
                                                        </div>
                                                    </div>
                                                }
                                            }
                                        }
                                    />
                                </div>
                            </Show>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
