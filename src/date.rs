//! 日期工具模块
//!
//! 页面展示所需的本地时间格式化与月份区间拼接。
//! chrono 开启 wasmbind 特性，`Local::now` 在 wasm32 与原生环境下行为一致，
//! 因此这里的函数可以在宿主机上直接跑单元测试。

use chrono::{Datelike, Days, Local, NaiveDate, TimeZone, Weekday};

/// 毫秒时间戳格式化为 zh-CN 习惯的日期文本（如 2024/3/8）
///
/// 缺失、为 0 或非法的时间戳渲染为 "-"。
pub fn format_date_ms(ms: Option<i64>) -> String {
    ms.filter(|&ms| ms != 0)
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%Y/%-m/%-d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// 当前月份，格式 YYYY-MM
pub fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

/// 把 YYYY-MM 月份拼成考勤查询区间
///
/// 与后端约定日期按字符串比较，月末统一写 31；入参为空时回退到当前月份。
pub fn month_range(month: &str) -> (String, String) {
    if month.is_empty() {
        let m = current_month();
        (format!("{m}-01"), format!("{m}-31"))
    } else {
        (format!("{month}-01"), format!("{month}-31"))
    }
}

/// 截止今天的最近 n 天，元素为 YYYY-MM-DD，按时间升序
pub fn last_n_days(n: u64) -> Vec<String> {
    let today = Local::now().date_naive();
    (0..n)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect()
}

/// 趋势图横轴的星期字符（不含"周"前缀）
///
/// 兼容 YYYY-MM-DD 与后端可能直接返回的英文缩写两种形态，
/// 无法识别时原样返回。
pub fn weekday_char(day: &str) -> String {
    if day.is_empty() {
        return String::new();
    }
    if day.contains('-') {
        return NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map(|date| weekday_zh(date.weekday()).to_string())
            .unwrap_or_default();
    }
    match day {
        "Mon" => "一",
        "Tue" => "二",
        "Wed" => "三",
        "Thu" => "四",
        "Fri" => "五",
        "Sat" => "六",
        "Sun" => "日",
        other => other,
    }
    .to_string()
}

/// 趋势图横轴的短日期（M/D，去掉前导零）
pub fn month_day_label(day: &str) -> String {
    if !day.contains('-') {
        return String::new();
    }
    let mut parts = day.splitn(3, '-').skip(1);
    match (
        parts.next().and_then(|p| p.parse::<u32>().ok()),
        parts.next().and_then(|p| p.parse::<u32>().ok()),
    ) {
        (Some(month), Some(d)) => format!("{month}/{d}"),
        _ => String::new(),
    }
}

fn weekday_zh(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "一",
        Weekday::Tue => "二",
        Weekday::Wed => "三",
        Weekday::Thu => "四",
        Weekday::Fri => "五",
        Weekday::Sat => "六",
        Weekday::Sun => "日",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_ms() {
        // 2024-03-08 12:00:00 UTC，本地时区下仍落在 3 月
        let formatted = format_date_ms(Some(1_709_899_200_000));
        assert!(formatted.starts_with("2024/3/"));
        assert_eq!(format_date_ms(None), "-");
        assert_eq!(format_date_ms(Some(0)), "-");
    }

    #[test]
    fn test_month_range() {
        assert_eq!(
            month_range("2024-03"),
            ("2024-03-01".to_string(), "2024-03-31".to_string())
        );
        // 空月份回退到当前月
        let (start, end) = month_range("");
        let m = current_month();
        assert_eq!(start, format!("{m}-01"));
        assert_eq!(end, format!("{m}-31"));
    }

    #[test]
    fn test_last_n_days() {
        let days = last_n_days(7);
        assert_eq!(days.len(), 7);
        // 升序且以今天结尾
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(days.last(), Some(&today));
        let mut sorted = days.clone();
        sorted.sort();
        assert_eq!(days, sorted);
    }

    #[test]
    fn test_weekday_char() {
        // 2024-03-10 是周日
        assert_eq!(weekday_char("2024-03-10"), "日");
        assert_eq!(weekday_char("2024-03-11"), "一");
        assert_eq!(weekday_char("Fri"), "五");
        assert_eq!(weekday_char("自定义"), "自定义");
        assert_eq!(weekday_char(""), "");
    }

    #[test]
    fn test_month_day_label() {
        assert_eq!(month_day_label("2024-03-08"), "3/8");
        assert_eq!(month_day_label("2024-11-20"), "11/20");
        assert_eq!(month_day_label("Mon"), "");
    }
}
