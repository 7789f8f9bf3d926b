//! 考勤统计页
//!
//! 按月份查询全量考勤报表。切换月份时保留上一次的数据继续展示，
//! 只有首屏尚无数据时才整页显示加载或错误文案。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_admin_api;
use crate::date::{current_month, month_range};
use crate::model::StatsReport;
use crate::task::use_task_guard;

#[component]
pub fn AttendanceStatsPage() -> impl IntoView {
    let api = use_admin_api();
    let guard = use_task_guard();

    let (month, set_month) = signal(current_month());
    let (data, set_data) = signal(Option::<StatsReport>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 月份变化时重新查询
    Effect::new({
        let api = api.clone();
        let guard = guard.clone();
        move |_| {
            let (start, end) = month_range(&month.get());
            set_loading.set(true);
            set_error.set(None);
            let api = api.clone();
            let token = guard.reissue();
            spawn_local(async move {
                let result = api.get_attendance_stats(&start, &end).await;
                if token.is_cancelled() {
                    return;
                }
                match result {
                    Ok(report) => set_data.set(Some(report)),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    });

    move || {
        let report = data.get();
        if loading.get() && report.is_none() {
            return view! { <div class="p-8 text-gray-500">"加载中..."</div> }.into_any();
        }
        if let (Some(message), None) = (error.get(), report.as_ref()) {
            return view! { <div class="p-8 text-red-600">{message}</div> }.into_any();
        }
        let report = report.unwrap_or_default();

        let day_rows = report
            .by_date
            .iter()
            .map(|(date, counts)| {
                view! {
                    <tr class="hover:bg-gray-50">
                        <td class="px-6 py-4 text-sm text-gray-900">{date.clone()}</td>
                        <td class="px-6 py-4 text-sm text-gray-600">{counts.office}</td>
                        <td class="px-6 py-4 text-sm text-gray-600">{counts.remote}</td>
                        <td class="px-6 py-4 text-sm text-gray-600">{counts.leave}</td>
                    </tr>
                }
            })
            .collect_view();
        let show_empty = report.by_date.is_empty() && !loading.get();

        view! {
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-gray-900">"考勤统计"</h2>

                <div class="flex flex-wrap items-center gap-4">
                    <label class="flex items-center gap-2 text-sm text-gray-600">
                        "月份："
                        <input
                            type="month"
                            prop:value=month
                            on:change=move |ev| set_month.set(event_target_value(&ev))
                            class="px-3 py-2 border border-gray-200 rounded-lg text-sm focus:ring-2 focus:ring-blue-500 outline-none"
                        />
                    </label>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
                        <p class="text-gray-500 font-medium mb-1">"到岗"</p>
                        <p class="text-3xl font-bold text-gray-900">{report.stats.office}</p>
                    </div>
                    <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
                        <p class="text-gray-500 font-medium mb-1">"远程"</p>
                        <p class="text-3xl font-bold text-gray-900">{report.stats.remote}</p>
                    </div>
                    <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
                        <p class="text-gray-500 font-medium mb-1">"请假"</p>
                        <p class="text-3xl font-bold text-gray-900">{report.stats.leave}</p>
                    </div>
                    <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
                        <p class="text-gray-500 font-medium mb-1">"总记录数"</p>
                        <p class="text-3xl font-bold text-gray-900">{report.stats.total}</p>
                    </div>
                </div>

                <section class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
                    <div class="px-6 py-4 border-b border-gray-100">
                        <h3 class="font-bold text-gray-900">"按日明细"</h3>
                    </div>
                    <div class="overflow-x-auto">
                        <table class="w-full text-left">
                            <thead class="bg-gray-50 border-b border-gray-200">
                                <tr>
                                    <th class="px-6 py-4 text-xs font-semibold text-gray-500 uppercase">
                                        "日期"
                                    </th>
                                    <th class="px-6 py-4 text-xs font-semibold text-gray-500 uppercase">
                                        "到岗"
                                    </th>
                                    <th class="px-6 py-4 text-xs font-semibold text-gray-500 uppercase">
                                        "远程"
                                    </th>
                                    <th class="px-6 py-4 text-xs font-semibold text-gray-500 uppercase">
                                        "请假"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-100">{day_rows}</tbody>
                        </table>
                    </div>
                    {show_empty
                        .then(|| {
                            view! {
                                <p class="px-6 py-8 text-gray-500 text-center">"暂无数据"</p>
                            }
                        })}
                </section>
            </div>
        }
        .into_any()
    }
}
