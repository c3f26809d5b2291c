//! Excel 导出模块
//!
//! 把筛选后的分配记录写入单个工作表，并在浏览器里触发下载

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use serde_json::{Map, Value};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::AssignmentRecord;

/// 工作表名称
const SHEET_NAME: &str = "Assignments";
/// 未填写文件名时的默认基础名
const DEFAULT_BASE_NAME: &str = "assignments";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("生成工作簿失败: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("浏览器下载失败: {0}")]
    Browser(String),
}

fn js_error(err: JsValue) -> ExportError {
    ExportError::Browser(format!("{:?}", err))
}

// ============================================
// 行数据
// ============================================

/// 记录转成"列名 -> 值"的行映射
///
/// 天数、账号两列固定，任务列按位置命名（任务1、任务2 ...），
/// 列的数量跟随本次生成的任务数量变化。
pub fn sheet_rows(records: &[AssignmentRecord]) -> Vec<Map<String, Value>> {
    records
        .iter()
        .map(|record| {
            let mut row = Map::new();
            row.insert("天数".to_string(), Value::from(record.day));
            row.insert("账号".to_string(), Value::from(record.account));
            for (idx, task) in record.task_order.iter().enumerate() {
                row.insert(format!("任务{}", idx + 1), Value::from(task.as_str()));
            }
            row
        })
        .collect()
}

// ============================================
// 工作簿
// ============================================

/// 生成 xlsx 文件内容
pub fn workbook_bytes(records: &[AssignmentRecord]) -> Result<Vec<u8>, ExportError> {
    let rows = sheet_rows(records);

    // 列集合取所有行的并集，按首次出现的顺序排列
    let mut columns: Vec<String> = Vec::new();
    for row in &rows {
        for name in row.keys() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.clone());
            }
        }
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(0x4472C4)
        .set_font_color(0xFFFFFF)
        .set_border(FormatBorder::Thin);
    let cell_format = Format::new().set_border(FormatBorder::Thin);

    for (col, name) in columns.iter().enumerate() {
        sheet.write_with_format(0, col as u16, name.as_str(), &header_format)?;
        let width = if col < 2 { 10.0 } else { 14.0 };
        sheet.set_column_width(col as u16, width).ok();
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, name) in columns.iter().enumerate() {
            match row.get(name) {
                Some(Value::Number(n)) => {
                    sheet.write_with_format(
                        row_idx as u32 + 1,
                        col_idx as u16,
                        n.as_f64().unwrap_or_default(),
                        &cell_format,
                    )?;
                }
                Some(Value::String(s)) => {
                    sheet.write_with_format(
                        row_idx as u32 + 1,
                        col_idx as u16,
                        s.as_str(),
                        &cell_format,
                    )?;
                }
                _ => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// 导出文件名：用户输入的基础名加固定扩展名，留空时用默认名
pub fn export_file_name(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        format!("{}.xlsx", DEFAULT_BASE_NAME)
    } else {
        format!("{}.xlsx", trimmed)
    }
}

// ============================================
// 浏览器下载
// ============================================

/// 通过 Blob 和临时链接触发下载
pub fn download_xlsx(records: &[AssignmentRecord], base_name: &str) -> Result<(), ExportError> {
    let bytes = workbook_bytes(records)?;
    let file_name = export_file_name(base_name);

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(XLSX_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let window =
        web_sys::window().ok_or_else(|| ExportError::Browser("window 不可用".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("document 不可用".to_string()))?;
    let anchor = document.create_element("a").map_err(js_error)?;
    anchor.set_attribute("href", &url).map_err(js_error)?;
    anchor.set_attribute("download", &file_name).map_err(js_error)?;
    if let Some(element) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        element.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<AssignmentRecord> {
        vec![
            AssignmentRecord::new(1, 3, vec!["B".to_string(), "A".to_string()]),
            AssignmentRecord::new(2, 1, vec!["A".to_string(), "B".to_string()]),
        ]
    }

    #[test]
    fn test_sheet_rows_have_one_column_per_task_position() {
        let rows = sheet_rows(&sample_records());
        assert_eq!(rows.len(), 2);
        let columns: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(columns, ["天数", "账号", "任务1", "任务2"]);
        assert_eq!(rows[0]["天数"], Value::from(1));
        assert_eq!(rows[0]["任务1"], Value::from("B"));
        assert_eq!(rows[1]["账号"], Value::from(1));
        assert_eq!(rows[1]["任务2"], Value::from("B"));
    }

    #[test]
    fn test_sheet_rows_follow_record_order() {
        let rows = sheet_rows(&sample_records());
        let days: Vec<&Value> = rows.iter().map(|r| &r["天数"]).collect();
        assert_eq!(days, [&Value::from(1), &Value::from(2)]);
    }

    #[test]
    fn test_workbook_bytes_is_zip_archive() {
        let bytes = workbook_bytes(&sample_records()).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_workbook_from_no_records_still_valid() {
        let bytes = workbook_bytes(&[]).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_export_file_name_appends_extension() {
        assert_eq!(export_file_name("我的计划"), "我的计划.xlsx");
        assert_eq!(export_file_name("  plan  "), "plan.xlsx");
    }

    #[test]
    fn test_export_file_name_falls_back_to_default() {
        assert_eq!(export_file_name(""), "assignments.xlsx");
        assert_eq!(export_file_name("   "), "assignments.xlsx");
    }
}
