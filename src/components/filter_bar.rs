//! 筛选与导出工具栏
//!
//! 天数、账号两个下拉框按"与"组合筛选，右侧是文件名输入和导出按钮

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::{account_options, day_options, filter_records};
use crate::utils::export;
use crate::utils::log_trace::{log_error, log_info};
use crate::PlanContext;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<PlanContext>().expect("PlanContext not found");

    let (file_base_name, set_file_base_name) = create_signal(String::new());
    let (export_done, set_export_done) = create_signal(false);

    // "all" 解析不了数字，正好落回 None
    let on_day_change = move |ev| {
        let day = event_target_value(&ev).parse::<u32>().ok();
        ctx.set_filters.update(|f| f.day = day);
    };
    let on_account_change = move |ev| {
        let account = event_target_value(&ev).parse::<u32>().ok();
        ctx.set_filters.update(|f| f.account = account);
    };

    let on_export = move |_| {
        ctx.set_error_msg.set(None);
        let filtered = filter_records(&ctx.records.get(), &ctx.filters.get());
        match export::download_xlsx(&filtered, &file_base_name.get()) {
            Ok(()) => {
                log_info("export", &format!("导出 {} 条记录", filtered.len()));
                set_export_done.set(true);
                spawn_local(async move {
                    gloo::timers::future::TimeoutFuture::new(2000).await;
                    set_export_done.set(false);
                });
            }
            Err(err) => {
                log_error("export", &err.to_string());
                ctx.set_error_msg.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <div class="filter-bar">
            <select
                class="filter-select"
                prop:value=move || {
                    ctx.filters.get().day.map(|d| d.to_string()).unwrap_or_else(|| "all".to_string())
                }
                on:change=on_day_change
            >
                <option value="all">"全部天数"</option>
                <For
                    each=move || day_options(&ctx.records.get())
                    key=|day| *day
                    let:day
                >
                    <option value=day.to_string()>{format!("第{}天", day)}</option>
                </For>
            </select>
            <select
                class="filter-select"
                prop:value=move || {
                    ctx.filters.get().account.map(|a| a.to_string()).unwrap_or_else(|| "all".to_string())
                }
                on:change=on_account_change
            >
                <option value="all">"全部账号"</option>
                <For
                    each=move || account_options(&ctx.records.get())
                    key=|account| *account
                    let:account
                >
                    <option value=account.to_string()>{format!("账号 {}", account)}</option>
                </For>
            </select>
            <div class="export-group">
                <input
                    type="text"
                    class="file-name-input"
                    placeholder="assignments"
                    prop:value=move || file_base_name.get()
                    on:input=move |ev| set_file_base_name.set(event_target_value(&ev))
                />
                <button class="export-btn" on:click=on_export>
                    {move || if export_done.get() { "已导出" } else { "导出Excel" }}
                </button>
            </div>
        </div>
    }
}
