//! 来了么管理端（CSR 单页应用）
//!
//! 按职责分层：
//! - `cloud`: CloudBase 接入（匿名身份 + 云函数网关调用）
//! - `api`: admin-api 云函数的类型化封装
//! - `session`: 管理员令牌的持久化与响应式会话
//! - `model`: 接口数据模型
//! - `components`: 页面与 UI 组件层

pub mod api;
pub mod cloud;
pub mod date;
pub mod model;
pub mod session;
pub mod task;

mod components {
    pub mod admins;
    pub mod attendance_stats;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod overview;
    pub mod team_detail;
    pub mod teams;
    pub mod user_detail;
    pub mod users;
}

// 浏览器原生能力的轻量封装（confirm/alert/剪贴板）
pub(crate) mod web;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::api::AdminApi;
use crate::cloud::CloudClient;
use crate::components::admins::AdminsPage;
use crate::components::attendance_stats::AttendanceStatsPage;
use crate::components::layout::AppLayout;
use crate::components::login::LoginPage;
use crate::components::overview::OverviewPage;
use crate::components::team_detail::TeamDetailPage;
use crate::components::teams::TeamsPage;
use crate::components::user_detail::UserDetailPage;
use crate::components::users::UsersPage;
use crate::session::{Session, use_session};

/// 登录守卫：无令牌时整棵子树不渲染并跳回登录页
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if session.token().is_none() {
                navigate(
                    "/login",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    move || session.token().map(|_| children())
}

/// 未匹配路由统一回首页
#[component]
fn FallbackRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move |_| {
        navigate(
            "/",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 恢复会话并注入全局上下文
    let session = Session::load();
    provide_context(session);

    // 2. 类型化 API 客户端，所有页面共享同一个 CloudBase 接入
    provide_context(AdminApi::new(CloudClient::from_env(), session));

    view! {
        <Router>
            <Routes fallback=FallbackRedirect>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute
                    path=path!("")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <AppLayout />
                            </RequireAuth>
                        }
                    }
                >
                    <Route path=path!("") view=OverviewPage />
                    <Route path=path!("teams") view=TeamsPage />
                    <Route path=path!("teams/:team_id") view=TeamDetailPage />
                    <Route path=path!("users") view=UsersPage />
                    <Route path=path!("users/:user_id") view=UserDetailPage />
                    <Route path=path!("stats") view=AttendanceStatsPage />
                    <Route path=path!("admins") view=AdminsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
