//! 浏览器交互封装
//!
//! 原生对话框与剪贴板的调用集中在此模块，
//! 页面组件只使用这里的包装，不直接接触 web_sys。

/// 弹出原生确认框，拿不到 window 时视为取消
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// 弹出原生提示框
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 把文本写入剪贴板，发起后不等待结果
pub(crate) fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}
