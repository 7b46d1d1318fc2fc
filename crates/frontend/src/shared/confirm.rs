use contracts::domain::common::ConfirmPort;

/// Asks through `window.confirm`. Without a window every prompt is declined.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmPort for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
