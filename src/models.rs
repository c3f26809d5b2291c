//! 数据模型模块
//!
//! 分配记录与表格筛选条件

use serde::{Deserialize, Serialize};

// ============================================
// 分配记录
// ============================================

/// 一条分配记录：某个账号在某一天按什么顺序执行任务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// 行标识，格式为"天数-账号"
    pub key: String,
    /// 天数，从 1 开始
    pub day: u32,
    /// 账号编号，从 1 开始
    pub account: u32,
    /// 任务执行顺序（任务名称的一个排列）
    pub task_order: Vec<String>,
}

impl AssignmentRecord {
    pub fn new(day: u32, account: u32, task_order: Vec<String>) -> Self {
        Self {
            key: format!("{}-{}", day, account),
            day,
            account,
            task_order,
        }
    }
}

// ============================================
// 筛选条件
// ============================================

/// 表格筛选条件，None 表示"全部"
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Filters {
    pub day: Option<u32>,
    pub account: Option<u32>,
}

impl Filters {
    /// 两个条件须同时满足
    pub fn matches(&self, record: &AssignmentRecord) -> bool {
        let day_ok = self.day.map_or(true, |d| record.day == d);
        let account_ok = self.account.map_or(true, |a| record.account == a);
        day_ok && account_ok
    }
}

/// 按筛选条件过滤记录，保持原有顺序
pub fn filter_records(records: &[AssignmentRecord], filters: &Filters) -> Vec<AssignmentRecord> {
    records
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect()
}

/// 天数下拉框选项，按记录中首次出现的顺序
pub fn day_options(records: &[AssignmentRecord]) -> Vec<u32> {
    let mut days = Vec::new();
    for record in records {
        if !days.contains(&record.day) {
            days.push(record.day);
        }
    }
    days
}

/// 账号下拉框选项，升序排列
pub fn account_options(records: &[AssignmentRecord]) -> Vec<u32> {
    let mut accounts = Vec::new();
    for record in records {
        if !accounts.contains(&record.account) {
            accounts.push(record.account);
        }
    }
    accounts.sort_unstable();
    accounts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<AssignmentRecord> {
        vec![
            AssignmentRecord::new(1, 4, vec!["A".to_string(), "B".to_string()]),
            AssignmentRecord::new(1, 2, vec!["B".to_string(), "A".to_string()]),
            AssignmentRecord::new(2, 3, vec!["A".to_string(), "B".to_string()]),
            AssignmentRecord::new(2, 1, vec!["B".to_string(), "A".to_string()]),
        ]
    }

    #[test]
    fn test_key_combines_day_and_account() {
        let record = AssignmentRecord::new(3, 7, vec!["A".to_string()]);
        assert_eq!(record.key, "3-7");
    }

    #[test]
    fn test_wildcard_filters_return_all_records_unchanged() {
        let records = sample_records();
        let filtered = filter_records(&records, &Filters::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_day_filter_keeps_matching_day_only() {
        let filtered = filter_records(
            &sample_records(),
            &Filters {
                day: Some(2),
                account: None,
            },
        );
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.day == 2));
    }

    #[test]
    fn test_account_filter_keeps_matching_account_only() {
        let filtered = filter_records(
            &sample_records(),
            &Filters {
                day: None,
                account: Some(3),
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key, "2-3");
    }

    #[test]
    fn test_both_filters_combine_with_and() {
        let records = sample_records();
        let filtered = filter_records(
            &records,
            &Filters {
                day: Some(1),
                account: Some(2),
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key, "1-2");

        let empty = filter_records(
            &records,
            &Filters {
                day: Some(2),
                account: Some(4),
            },
        );
        assert!(empty.is_empty());
    }

    #[test]
    fn test_filter_preserves_record_order() {
        let filtered = filter_records(
            &sample_records(),
            &Filters {
                day: Some(1),
                account: None,
            },
        );
        let accounts: Vec<u32> = filtered.iter().map(|r| r.account).collect();
        assert_eq!(accounts, vec![4, 2]);
    }

    #[test]
    fn test_day_options_follow_first_appearance() {
        let mut records = sample_records();
        records.reverse();
        assert_eq!(day_options(&records), vec![2, 1]);
    }

    #[test]
    fn test_account_options_sorted_ascending() {
        assert_eq!(account_options(&sample_records()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = AssignmentRecord::new(1, 2, vec!["A".to_string(), "B".to_string()]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["key"], "1-2");
        assert_eq!(json["day"], 1);
        assert_eq!(json["account"], 2);
        assert_eq!(json["task_order"][0], "A");
    }
}
