//! 分配结果表格组件
//!
//! 天数、账号、任务顺序三列。天数列标签按天着色，点表头可切换排序。

use leptos::*;

use crate::models::{filter_records, AssignmentRecord};
use crate::utils::day_color;
use crate::PlanContext;

/// 天数列排序状态，点击表头依次轮换
#[derive(Clone, Copy, PartialEq)]
enum DaySort {
    None,
    Ascending,
    Descending,
}

impl DaySort {
    fn next(self) -> Self {
        match self {
            DaySort::None => DaySort::Ascending,
            DaySort::Ascending => DaySort::Descending,
            DaySort::Descending => DaySort::None,
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            DaySort::None => "",
            DaySort::Ascending => " ↑",
            DaySort::Descending => " ↓",
        }
    }
}

#[component]
pub fn AssignmentTable() -> impl IntoView {
    let ctx = use_context::<PlanContext>().expect("PlanContext not found");
    let (day_sort, set_day_sort) = create_signal(DaySort::None);

    let visible_records = move || {
        let mut records = filter_records(&ctx.records.get(), &ctx.filters.get());
        match day_sort.get() {
            DaySort::None => {}
            DaySort::Ascending => records.sort_by_key(|r| r.day),
            DaySort::Descending => records.sort_by_key(|r| std::cmp::Reverse(r.day)),
        }
        records
    };

    view! {
        <table class="assignment-table">
            <thead>
                <tr>
                    <th
                        class="sortable"
                        on:click=move |_| set_day_sort.set(day_sort.get().next())
                    >
                        {move || format!("天数{}", day_sort.get().indicator())}
                    </th>
                    <th>"账号"</th>
                    <th>"任务顺序"</th>
                </tr>
            </thead>
            <tbody>
                {move || visible_records()
                    .into_iter()
                    .map(|record| view! { <AssignmentRow record=record/> })
                    .collect_view()}
            </tbody>
        </table>
        {move || visible_records().is_empty().then(|| view! {
            <p class="empty-hint">"暂无数据"</p>
        })}
    }
}

#[component]
fn AssignmentRow(record: AssignmentRecord) -> impl IntoView {
    view! {
        <tr>
            <td>
                <span
                    class="tag day-tag"
                    style=format!("background-color: {}", day_color(record.day))
                >
                    {record.day}
                </span>
            </td>
            <td>
                <span class="tag account-tag">{format!("账号 {}", record.account)}</span>
            </td>
            <td>
                {record.task_order.iter().map(|task| view! {
                    <span class="tag task-tag">{task.clone()}</span>
                }).collect_view()}
            </td>
        </tr>
    }
}
