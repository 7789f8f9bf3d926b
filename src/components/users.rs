//! 用户管理页
//!
//! 用户与团队列表一次性并发拉取，关键字/团队/角色/状态四个条件
//! 全部在前端组合过滤，团队下拉的选项来自团队列表接口。

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::icons::{ChevronDown, Download, Search};
use crate::api::{ListTeamsParams, ListUsersParams, use_admin_api};
use crate::date::format_date_ms;
use crate::model::{Role, Team, User};
use crate::task::use_task_guard;

/// 头像缩写：按空格分词取首字符，至多两位；无名用户显示 U
pub(super) fn initials(name: Option<&str>) -> String {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return "U".to_string();
    };
    let joined: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    if joined.is_empty() {
        return "U".to_string();
    }
    joined.to_uppercase().chars().take(2).collect()
}

#[component]
fn UserAvatar(#[prop(optional_no_strip)] name: Option<String>) -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gray-100 rounded-lg flex items-center justify-center text-gray-600 font-semibold text-sm">
            {initials(name.as_deref())}
        </div>
    }
}

#[component]
fn RoleBadge(role: Role) -> impl IntoView {
    let class = if role == Role::Admin {
        "text-sm text-orange-500"
    } else {
        "text-sm text-gray-500"
    };
    view! { <span class=class>{role.label()}</span> }
}

#[component]
fn TeamTag(name: String) -> impl IntoView {
    view! {
        <span class="inline-flex items-center px-2.5 py-1 bg-gray-100 text-gray-600 text-xs font-medium rounded-lg">
            {name}
        </span>
    }
}

#[component]
fn TableSkeleton() -> impl IntoView {
    view! {
        <div class="divide-y divide-gray-100">
            {(0..4)
                .map(|_| {
                    view! {
                        <div class="px-6 py-4 animate-pulse">
                            <div class="flex items-center gap-4">
                                <div class="w-10 h-10 bg-gray-200 rounded-lg"></div>
                                <div class="space-y-2 flex-1">
                                    <div class="h-4 w-24 bg-gray-200 rounded"></div>
                                    <div class="h-3 w-32 bg-gray-200 rounded"></div>
                                </div>
                                <div class="h-4 w-28 bg-gray-200 rounded"></div>
                                <div class="h-6 w-20 bg-gray-200 rounded-full"></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = use_admin_api();
    let guard = use_task_guard();

    let (users, set_users) = signal(Vec::<User>::new());
    let (teams, set_teams) = signal(Vec::<Team>::new());
    let (loading, set_loading) = signal(true);
    let (search_query, set_search_query) = signal(String::new());
    let (filter_team, set_filter_team) = signal(String::new());
    let (filter_role, set_filter_role) = signal(String::new());
    let (filter_status, set_filter_status) = signal(String::new());

    {
        let api = api.clone();
        let token = guard.reissue();
        spawn_local(async move {
            let user_params = ListUsersParams::default();
            let team_params = ListTeamsParams::default();
            let (users_result, teams_result) = futures::join!(
                api.list_users(&user_params),
                api.list_teams(&team_params),
            );
            if token.is_cancelled() {
                return;
            }
            // 任一接口失败都按空列表渲染，页面不进错误态
            set_users.set(users_result.unwrap_or_else(|e| {
                logging::error!("[users] listUsers 失败: {e}");
                Vec::new()
            }));
            set_teams.set(teams_result.unwrap_or_else(|e| {
                logging::error!("[users] listTeams 失败: {e}");
                Vec::new()
            }));
            set_loading.set(false);
        });
    }

    let filtered_users = Memo::new(move |_| {
        let search = search_query.get();
        let team = filter_team.get();
        let role = filter_role.get();
        let status = filter_status.get();
        users
            .get()
            .into_iter()
            .filter(|u| u.matches_filters(&search, &team, &role, &status))
            .collect::<Vec<_>>()
    });

    // 空态文案只看前三个筛选条件，状态筛选不参与判断
    let empty_message = move || {
        if !search_query.get().is_empty()
            || !filter_team.get().is_empty()
            || !filter_role.get().is_empty()
        {
            "没有找到匹配的用户"
        } else {
            "暂无用户数据"
        }
    };

    view! {
        <div class="max-w-6xl space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">"用户管理"</h1>
                <button class="flex items-center gap-2 px-4 py-2 text-sm font-medium text-gray-600 bg-white border border-gray-200 rounded-lg hover:bg-gray-50 transition-colors cursor-pointer">
                    <Download attr:class="w-4 h-4" />
                    "导出列表"
                </button>
            </div>

            // 搜索与筛选
            <div class="bg-white rounded-2xl border border-gray-100 p-4">
                <div class="flex flex-col lg:flex-row gap-4">
                    <div class="flex-1 relative">
                        <Search attr:class="absolute left-4 top-1/2 -translate-y-1/2 w-5 h-5 text-gray-400" />
                        <input
                            type="text"
                            placeholder="搜索姓名、手机号、微信昵称..."
                            prop:value=search_query
                            on:input=move |ev| set_search_query.set(event_target_value(&ev))
                            class="w-full pl-11 pr-4 py-2.5 bg-gray-50 border-0 rounded-xl text-sm focus:outline-none focus:ring-2 focus:ring-blue-500/20 focus:bg-white transition-all"
                        />
                    </div>

                    <div class="flex gap-3">
                        <div class="relative">
                            <select
                                prop:value=filter_team
                                on:change=move |ev| set_filter_team.set(event_target_value(&ev))
                                class="appearance-none pl-4 pr-10 py-2.5 bg-gray-50 border-0 rounded-xl text-sm text-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500/20 cursor-pointer min-w-[120px]"
                            >
                                <option value="">"所有团队"</option>
                                <For
                                    each=move || teams.get()
                                    key=|team| team.team_id.clone()
                                    children=|team: Team| {
                                        view! { <option value=team.team_id>{team.name}</option> }
                                    }
                                />
                            </select>
                            <ChevronDown attr:class="absolute right-3 top-1/2 -translate-y-1/2 w-4 h-4 text-gray-400 pointer-events-none" />
                        </div>

                        <div class="relative">
                            <select
                                prop:value=filter_role
                                on:change=move |ev| set_filter_role.set(event_target_value(&ev))
                                class="appearance-none pl-4 pr-10 py-2.5 bg-gray-50 border-0 rounded-xl text-sm text-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500/20 cursor-pointer min-w-[110px]"
                            >
                                <option value="">"所有角色"</option>
                                <option value="admin">"管理员"</option>
                                <option value="member">"成员"</option>
                            </select>
                            <ChevronDown attr:class="absolute right-3 top-1/2 -translate-y-1/2 w-4 h-4 text-gray-400 pointer-events-none" />
                        </div>

                        <div class="relative">
                            <select
                                prop:value=filter_status
                                on:change=move |ev| set_filter_status.set(event_target_value(&ev))
                                class="appearance-none pl-4 pr-10 py-2.5 bg-gray-50 border-0 rounded-xl text-sm text-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500/20 cursor-pointer min-w-[110px]"
                            >
                                <option value="">"状态: 全部"</option>
                                <option value="active">"正常"</option>
                                <option value="inactive">"停用"</option>
                            </select>
                            <ChevronDown attr:class="absolute right-3 top-1/2 -translate-y-1/2 w-4 h-4 text-gray-400 pointer-events-none" />
                        </div>
                    </div>
                </div>
            </div>

            // 用户表格
            <div class="bg-white rounded-2xl border border-gray-100 overflow-hidden">
                <div class="grid grid-cols-12 gap-4 px-6 py-4 bg-gray-50 border-b border-gray-100 text-xs font-medium text-gray-500 uppercase tracking-wider">
                    <div class="col-span-3">"用户"</div>
                    <div class="col-span-2">"联系方式"</div>
                    <div class="col-span-3">"所属团队"</div>
                    <div class="col-span-1">"角色"</div>
                    <div class="col-span-2">"注册时间"</div>
                    <div class="col-span-1 text-right">"操作"</div>
                </div>

                <Show when=move || !loading.get() fallback=|| view! { <TableSkeleton /> }>
                    <Show
                        when=move || !filtered_users.get().is_empty()
                        fallback=move || {
                            view! {
                                <div class="px-6 py-16 text-center text-gray-400">
                                    {empty_message}
                                </div>
                            }
                        }
                    >
                        <div class="divide-y divide-gray-100">
                            <For
                                each=move || filtered_users.get()
                                key=|user| user.user_id.clone()
                                children=|user: User| {
                                    let detail_href = format!("/users/{}", user.user_id);
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
                                    let team_name =
                                        user.team_name.clone().filter(|t| !t.is_empty());

                                    view! {
                                        <div class="grid grid-cols-12 gap-4 px-6 py-4 items-center hover:bg-gray-50 transition-colors">
                                            <div class="col-span-3 flex items-center gap-3">
                                                <UserAvatar name=user.name.clone() />
                                                <div class="min-w-0">
                                                    <p class="font-medium text-gray-900 truncate">
                                                        {display_name}
                                                    </p>
                                                    <p class="text-xs text-gray-400 truncate">
                                                        "WeChat: "{wechat}
                                                    </p>
                                                </div>
                                            </div>

                                            <div class="col-span-2 text-sm text-gray-600">{phone}</div>

                                            <div class="col-span-3">
                                                {match team_name {
                                                    Some(name) => view! { <TeamTag name=name /> }.into_any(),
                                                    None => {
                                                        view! {
                                                            <span class="text-sm text-gray-400">"-"</span>
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </div>

                                            <div class="col-span-1">
                                                <RoleBadge role=user.role />
                                            </div>

                                            <div class="col-span-2 text-sm text-gray-500">
                                                {format_date_ms(user.created_at)}
                                            </div>

                                            <div class="col-span-1 text-right">
                                                <A
                                                    href=detail_href
                                                    attr:class="text-sm text-blue-500 hover:text-blue-600 cursor-pointer"
                                                >
                                                    "详情"
                                                </A>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_spaced_name() {
        assert_eq!(initials(Some("John Doe")), "JD");
        assert_eq!(initials(Some("mary jane watson")), "MJ");
    }

    #[test]
    fn test_initials_from_chinese_name() {
        // 中文名没有空格，只取首字
        assert_eq!(initials(Some("张伟")), "张");
        assert_eq!(initials(Some("王 人力")), "王人");
    }

    #[test]
    fn test_initials_fallback() {
        assert_eq!(initials(None), "U");
        assert_eq!(initials(Some("")), "U");
        assert_eq!(initials(Some("   ")), "U");
    }
}
