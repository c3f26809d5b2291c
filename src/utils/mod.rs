//! 工具模块

pub mod export;
pub mod log_trace;

// 共用小工具

/// 天数标签颜色：色相按黄金角递进，相邻天颜色区分明显
pub fn day_color(day: u32) -> String {
    let hue = (day as f64 * 137.508) % 360.0;
    format!("hsl({}, 50%, 50%)", hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_color_follows_golden_angle() {
        assert_eq!(day_color(1), "hsl(137.508, 50%, 50%)");
        assert_eq!(day_color(2), "hsl(275.016, 50%, 50%)");
        assert_eq!(day_color(3), "hsl(52.524, 50%, 50%)");
    }

    #[test]
    fn test_day_color_hue_wraps_at_full_circle() {
        let css = day_color(100);
        let hue: f64 = css
            .trim_start_matches("hsl(")
            .split(',')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!((0.0..360.0).contains(&hue));
    }
}
