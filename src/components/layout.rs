//! 管理端骨架
//!
//! 左侧固定导航 + 右侧内容区，移动端收起为抽屉。
//! 子页面通过 `<Outlet/>` 渲染。

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use super::icons::{BarChart3, Building2, LayoutDashboard, LogOut, Menu, Shield, Users, X};
use crate::session::use_session;

/// 侧边栏导航项，当前路由命中时高亮
///
/// `exact` 为 true 时仅精确匹配（首页用），否则按前缀匹配，
/// 使 `/teams/:id` 也能点亮 `/teams`。
#[component]
fn NavItem(
    href: &'static str,
    label: &'static str,
    #[prop(optional)] exact: bool,
    set_sidebar_open: WriteSignal<bool>,
    children: Children,
) -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| {
        let path = location.pathname.get();
        if exact {
            path == href
        } else {
            path == href || path.starts_with(&format!("{href}/"))
        }
    });

    view! {
        <A
            href=href
            attr:class=move || {
                if active.get() {
                    "flex items-center gap-3 px-4 py-3 rounded-xl text-sm font-medium transition-all duration-200 cursor-pointer bg-blue-50 text-blue-600"
                } else {
                    "flex items-center gap-3 px-4 py-3 rounded-xl text-sm font-medium transition-all duration-200 cursor-pointer text-gray-600 hover:bg-gray-50 hover:text-gray-900"
                }
            }
            on:click=move |_| set_sidebar_open.set(false)
        >
            {children()}
            <span>{label}</span>
        </A>
    }
}

#[component]
pub fn AppLayout() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (sidebar_open, set_sidebar_open) = signal(false);

    let on_logout = move |_| {
        session.clear();
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex">
            // 移动端遮罩
            <Show when=move || sidebar_open.get()>
                <div
                    class="fixed inset-0 bg-black/30 z-40 md:hidden"
                    on:click=move |_| set_sidebar_open.set(false)
                ></div>
            </Show>

            // 侧边栏
            <aside class=move || {
                format!(
                    "fixed top-0 left-0 h-full w-60 bg-white z-50 flex flex-col border-r border-gray-100 transition-transform duration-300 ease-out {} md:translate-x-0 md:static",
                    if sidebar_open.get() { "translate-x-0" } else { "-translate-x-full" },
                )
            }>
                <div class="h-16 flex items-center px-5 border-b border-gray-100">
                    <div class="w-9 h-9 bg-blue-500 rounded-xl flex items-center justify-center text-white">
                        <svg viewBox="0 0 24 24" class="w-5 h-5" fill="currentColor">
                            <path d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                        </svg>
                    </div>
                    <span class="ml-3 font-bold text-lg text-gray-900">"来了么"</span>

                    // 移动端关闭按钮
                    <button
                        type="button"
                        on:click=move |_| set_sidebar_open.set(false)
                        class="ml-auto p-2 rounded-lg text-gray-400 hover:bg-gray-100 md:hidden cursor-pointer"
                        aria-label="关闭菜单"
                    >
                        <X attr:class="w-5 h-5" />
                    </button>
                </div>

                <nav class="flex-1 p-3 space-y-1 overflow-y-auto">
                    <NavItem href="/" label="数据概览" exact=true set_sidebar_open=set_sidebar_open>
                        <LayoutDashboard attr:class="w-5 h-5 flex-shrink-0" />
                    </NavItem>
                    <NavItem href="/teams" label="团队管理" set_sidebar_open=set_sidebar_open>
                        <Building2 attr:class="w-5 h-5 flex-shrink-0" />
                    </NavItem>
                    <NavItem href="/users" label="用户管理" set_sidebar_open=set_sidebar_open>
                        <Users attr:class="w-5 h-5 flex-shrink-0" />
                    </NavItem>
                    <NavItem href="/stats" label="考勤统计" set_sidebar_open=set_sidebar_open>
                        <BarChart3 attr:class="w-5 h-5 flex-shrink-0" />
                    </NavItem>
                    <NavItem href="/admins" label="管理员管理" set_sidebar_open=set_sidebar_open>
                        <Shield attr:class="w-5 h-5 flex-shrink-0" />
                    </NavItem>
                </nav>

                <div class="p-3 border-t border-gray-100">
                    <button
                        type="button"
                        on:click=on_logout
                        class="flex items-center gap-3 w-full px-4 py-3 text-sm font-medium text-gray-500 hover:text-red-600 hover:bg-red-50 rounded-xl transition-colors cursor-pointer"
                    >
                        <LogOut attr:class="w-5 h-5" />
                        "退出登录"
                    </button>
                </div>
            </aside>

            // 内容区
            <div class="flex-1 flex flex-col min-h-screen">
                // 移动端顶栏
                <header class="h-16 bg-white border-b border-gray-100 flex items-center px-4 md:hidden">
                    <button
                        type="button"
                        on:click=move |_| set_sidebar_open.set(true)
                        class="p-2 -ml-2 rounded-lg text-gray-600 hover:bg-gray-100 cursor-pointer"
                        aria-label="打开菜单"
                    >
                        <Menu attr:class="w-6 h-6" />
                    </button>
                    <span class="ml-3 font-bold text-gray-900">"来了么"</span>
                </header>

                <main class="flex-1 p-6 lg:p-8 overflow-y-auto">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
