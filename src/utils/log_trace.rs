//! 控制台日志模块
//!
//! 按"分类 + 消息"输出到浏览器控制台，带 ISO 时间戳

use web_sys::console;

fn timestamp() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

fn format_line(category: &str, message: &str) -> String {
    format!("{} [{}] {}", timestamp(), category, message)
}

pub fn log_info(category: &str, message: &str) {
    console::log_1(&format_line(category, message).into());
}

pub fn log_warn(category: &str, message: &str) {
    console::warn_1(&format_line(category, message).into());
}

pub fn log_error(category: &str, message: &str) {
    console::error_1(&format_line(category, message).into());
}
