//! 随机任务分配工具
//!
//! 输入账号、任务、天数，随机把任务分配到各个账号的某一天，
//! 结果可按天数和账号筛选，并导出为 Excel。
//! 状态只存在于当前页面，生成与筛选都是同步的纯函数计算。

use leptos::*;

mod components;
mod generator;
mod models;
mod utils;

use components::{AssignForm, AssignmentTable, FilterBar};
use models::{AssignmentRecord, Filters};

// ============================================
// 共享状态
// ============================================

/// 页面级共享状态：记录列表、筛选条件、错误提示
///
/// 所有可变状态集中在这里，生成和筛选逻辑保持无状态。
#[derive(Clone, Copy)]
pub struct PlanContext {
    pub records: ReadSignal<Vec<AssignmentRecord>>,
    pub set_records: WriteSignal<Vec<AssignmentRecord>>,
    pub filters: ReadSignal<Filters>,
    pub set_filters: WriteSignal<Filters>,
    pub error_msg: ReadSignal<Option<String>>,
    pub set_error_msg: WriteSignal<Option<String>>,
}

// ============================================
// 应用入口
// ============================================

#[component]
fn App() -> impl IntoView {
    let (records, set_records) = create_signal(Vec::<AssignmentRecord>::new());
    let (filters, set_filters) = create_signal(Filters::default());
    let (error_msg, set_error_msg) = create_signal(None::<String>);

    let ctx = PlanContext {
        records,
        set_records,
        filters,
        set_filters,
        error_msg,
        set_error_msg,
    };
    provide_context(ctx);

    view! {
        <div class="app">
            <div class="card">
                <h1 class="card-title">"随机任务分配"</h1>
                <AssignForm/>
                {move || ctx.error_msg.get().map(|msg| view! {
                    <p class="error-msg">{msg}</p>
                })}
                <FilterBar/>
                <AssignmentTable/>
            </div>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
