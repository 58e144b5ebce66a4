// ============================================================================
// BROWSER INTEGRATION - user-facing error toasts + navigation
// ============================================================================
// Injected behind traits so the pipeline can run headless in tests.

/// User-visible error surface (one message per failed call)
pub trait Notifier {
    fn error(&self, message: &str);
}

/// Navigation surface used for forced-logout redirects
pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserNotifier;

#[cfg(target_arch = "wasm32")]
impl Notifier for BrowserNotifier {
    fn error(&self, message: &str) {
        log::error!("❌ {}", message);
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn redirect(&self, path: &str) {
        if let Some(win) = web_sys::window() {
            if win.location().set_href(path).is_err() {
                log::error!("❌ Error redirigiendo a {}", path);
            }
        }
    }
}
