//! 分配表单组件
//!
//! 账号、任务、天数输入加两个开关，点击"分配任务"后同步生成记录

use leptos::*;

use crate::generator::{self, GenerateParams};
use crate::models::Filters;
use crate::utils::log_trace::{log_info, log_warn};
use crate::PlanContext;

#[component]
pub fn AssignForm() -> impl IntoView {
    let ctx = use_context::<PlanContext>().expect("PlanContext not found");

    let (num_accounts, set_num_accounts) = create_signal(String::new());
    let (num_tasks, set_num_tasks) = create_signal(String::new());
    let (num_days, set_num_days) = create_signal(String::new());
    let (random_tasks, set_random_tasks) = create_signal(true);
    let (use_custom_labels, set_use_custom_labels) = create_signal(false);
    let (custom_label_text, set_custom_label_text) = create_signal(String::new());

    let on_assign = move |_| {
        ctx.set_error_msg.set(None);

        // 解析失败按 0 处理，交给校验统一拦下
        let accounts = num_accounts.get().trim().parse::<u32>().unwrap_or(0);
        let days = num_days.get().trim().parse::<u32>().unwrap_or(0);
        let labels = if use_custom_labels.get() {
            match generator::custom_labels(&custom_label_text.get()) {
                Ok(labels) => labels,
                Err(err) => {
                    log_warn("generate", &err.to_string());
                    ctx.set_error_msg.set(Some(err.to_string()));
                    return;
                }
            }
        } else {
            let tasks = num_tasks.get().trim().parse::<u32>().unwrap_or(0);
            generator::letter_labels(tasks)
        };

        let params = GenerateParams {
            accounts,
            labels,
            days,
            randomize_order: random_tasks.get(),
        };
        match generator::generate(&params) {
            Ok(records) => {
                log_info(
                    "generate",
                    &format!("生成 {} 条分配记录，共 {} 天", records.len(), days),
                );
                ctx.set_filters.set(Filters::default());
                ctx.set_records.set(records);
            }
            Err(err) => {
                // 校验失败：提示原因，保留上一次的记录
                log_warn("generate", &err.to_string());
                ctx.set_error_msg.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <div class="assign-form">
            <div class="form-row">
                <label class="form-field">
                    <span>"账号数量"</span>
                    <input
                        type="number"
                        min="2"
                        placeholder="请输入账号数量"
                        prop:value=move || num_accounts.get()
                        on:input=move |ev| set_num_accounts.set(event_target_value(&ev))
                    />
                </label>
                {move || (!use_custom_labels.get()).then(|| view! {
                    <label class="form-field">
                        <span>"任务数量"</span>
                        <input
                            type="number"
                            min="2"
                            placeholder="请输入任务数量"
                            prop:value=move || num_tasks.get()
                            on:input=move |ev| set_num_tasks.set(event_target_value(&ev))
                        />
                    </label>
                })}
                <label class="form-field">
                    <span>"完成天数"</span>
                    <input
                        type="number"
                        min="2"
                        placeholder="请输入完成天数"
                        prop:value=move || num_days.get()
                        on:input=move |ev| set_num_days.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="form-row">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || random_tasks.get()
                        on:change=move |ev| set_random_tasks.set(event_target_checked(&ev))
                    />
                    <span>"随机任务顺序"</span>
                </label>
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || use_custom_labels.get()
                        on:change=move |ev| set_use_custom_labels.set(event_target_checked(&ev))
                    />
                    <span>"自定义任务名称"</span>
                </label>
                <button class="primary-btn" on:click=on_assign>"分配任务"</button>
            </div>
            {move || use_custom_labels.get().then(|| view! {
                <textarea
                    class="label-input"
                    rows="4"
                    placeholder="每行一个任务名称"
                    prop:value=move || custom_label_text.get()
                    on:input=move |ev| set_custom_label_text.set(event_target_value(&ev))
                ></textarea>
            })}
        </div>
    }
}
