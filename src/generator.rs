//! 分配生成模块
//!
//! 核心算法：整体洗牌一次决定账号落在哪一天，再为每个账号生成任务顺序。
//! 纯函数实现，随机源通过参数注入，方便用固定种子复现结果。

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::AssignmentRecord;

/// 一次生成所需的全部参数
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateParams {
    /// 账号数量
    pub accounts: u32,
    /// 任务名称列表（自动字母或自定义名称）
    pub labels: Vec<String>,
    /// 完成天数
    pub days: u32,
    /// 是否为每个账号单独打乱任务顺序
    pub randomize_order: bool,
}

/// 生成失败原因，直接作为用户可见的提示文案
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("账号数量至少为 2")]
    TooFewAccounts,
    #[error("任务数量至少为 2")]
    TooFewTasks,
    #[error("完成天数至少为 2")]
    TooFewDays,
    #[error("完成天数不能超过账号数量")]
    MoreDaysThanAccounts,
    #[error("第 {index} 个任务名称为空")]
    BlankLabel { index: usize },
    #[error("任务名称重复: {label}")]
    DuplicateLabel { label: String },
}

// ============================================
// 任务名称
// ============================================

/// 自动任务名称：A..Z，超过 26 个后按 AA、AB 续接
pub fn letter_labels(count: u32) -> Vec<String> {
    (0..count).map(column_letter).collect()
}

/// 0 -> A、25 -> Z、26 -> AA，与电子表格列名同规则
fn column_letter(index: u32) -> String {
    let mut label = String::new();
    let mut n = index;
    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}

/// 从多行文本解析自定义任务名称，每行一个
///
/// 整体首尾的空行忽略，中间的空行算作空名称，直接报错。
pub fn custom_labels(raw: &str) -> Result<Vec<String>, GenerateError> {
    let labels: Vec<String> = raw
        .trim()
        .lines()
        .map(|line| line.trim().to_string())
        .collect();
    validate_labels(&labels)?;
    Ok(labels)
}

/// 校验名称列表：全部非空白且两两不同
fn validate_labels(labels: &[String]) -> Result<(), GenerateError> {
    for (idx, label) in labels.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(GenerateError::BlankLabel { index: idx + 1 });
        }
        if labels[..idx].contains(label) {
            return Err(GenerateError::DuplicateLabel {
                label: label.clone(),
            });
        }
    }
    Ok(())
}

// ============================================
// 生成
// ============================================

fn validate(params: &GenerateParams) -> Result<(), GenerateError> {
    if params.accounts <= 1 {
        return Err(GenerateError::TooFewAccounts);
    }
    if params.labels.len() <= 1 {
        return Err(GenerateError::TooFewTasks);
    }
    if params.days <= 1 {
        return Err(GenerateError::TooFewDays);
    }
    if params.days > params.accounts {
        return Err(GenerateError::MoreDaysThanAccounts);
    }
    validate_labels(&params.labels)
}

/// 生成分配记录，随机源由调用方提供
///
/// 账号列表做一次 Fisher-Yates 洗牌后按顺序切分到各天，
/// 每天 floor(accounts/days) 个账号，余数依次补给编号最小的几天。
/// 校验失败时不产生任何记录。
pub fn generate_with<R: Rng>(
    params: &GenerateParams,
    rng: &mut R,
) -> Result<Vec<AssignmentRecord>, GenerateError> {
    validate(params)?;

    let mut order: Vec<u32> = (1..=params.accounts).collect();
    order.shuffle(rng);

    let base = (params.accounts / params.days) as usize;
    let extra = (params.accounts % params.days) as usize;

    let mut records = Vec::with_capacity(params.accounts as usize);
    let mut start = 0;
    for day in 1..=params.days {
        let size = base + usize::from(day as usize <= extra);
        for &account in &order[start..start + size] {
            let task_order = if params.randomize_order {
                let mut tasks = params.labels.clone();
                tasks.shuffle(rng);
                tasks
            } else {
                params.labels.clone()
            };
            records.push(AssignmentRecord::new(day, account, task_order));
        }
        start += size;
    }

    Ok(records)
}

/// 默认入口：使用系统随机源，每次结果不同
pub fn generate(params: &GenerateParams) -> Result<Vec<AssignmentRecord>, GenerateError> {
    generate_with(params, &mut rand::thread_rng())
}
