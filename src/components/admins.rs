//! 管理员管理页，功能占位

use leptos::prelude::*;

use super::icons::Shield;

#[component]
pub fn AdminsPage() -> impl IntoView {
    view! {
        <div class="max-w-4xl space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">"管理员管理"</h1>

            <div class="bg-white rounded-2xl border border-gray-100 p-12 text-center">
                <div class="w-16 h-16 bg-gray-100 rounded-2xl flex items-center justify-center mx-auto mb-4">
                    <Shield attr:class="w-8 h-8 text-gray-400" />
                </div>
                <h3 class="text-lg font-medium text-gray-900 mb-2">"功能开发中"</h3>
                <p class="text-gray-500">"管理员管理功能即将上线，敬请期待"</p>
            </div>
        </div>
    }
}
