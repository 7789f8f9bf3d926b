//! 登录页
//!
//! 输入管理员密码换取访问令牌；已持有令牌时直接回首页。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::icons::CheckCircle2;
use crate::api::use_admin_api;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_admin_api();
    let navigate = use_navigate();

    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    // 已登录则直接回首页
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if session.token().is_some() {
                navigate(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_loading.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.login(&password.get_untracked()).await {
                // 登录成功后令牌已写入会话，直接进入后台
                Ok(_) => navigate(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                ),
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow-lg p-8">
                <div class="text-center mb-8">
                    <div class="w-12 h-12 bg-blue-600 rounded-lg flex items-center justify-center text-white mx-auto mb-4">
                        <CheckCircle2 attr:class="w-8 h-8" />
                    </div>
                    <h1 class="text-2xl font-bold text-gray-900">"来了么 · 管理端"</h1>
                    <p class="text-gray-500 mt-2">"请输入管理员密码"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <input
                            type="password"
                            placeholder="管理员密码"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class=move || {
                                format!(
                                    "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 transition-all {}",
                                    if error_msg.get().is_some() {
                                        "border-red-500 focus:ring-red-500"
                                    } else {
                                        "border-gray-300 focus:ring-blue-500"
                                    },
                                )
                            }
                            disabled=move || loading.get()
                        />
                        <Show when=move || error_msg.get().is_some()>
                            <p class="text-red-500 text-sm mt-1">
                                {move || error_msg.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </div>
                    <button
                        type="submit"
                        disabled=move || loading.get() || password.get().is_empty()
                        class="w-full bg-blue-600 text-white py-3 rounded-lg font-medium hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                    >
                        {move || if loading.get() { "登录中..." } else { "登录" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
