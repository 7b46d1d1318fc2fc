use contracts::shared::config::AppConfig;
use contracts::shared::navigation::Page;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const PAGE_PARAM: &str = "page";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    pub user_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            active: RwSignal::new(Page::resolve(
                Some(&config.app.default_page),
                Page::Dashboard,
            )),
            left_open: RwSignal::new(config.ui.sidebar_open),
            user_menu_open: RwSignal::new(false),
        }
    }

    /// Restore the active page from `?page=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get(PAGE_PARAM) {
            match Page::from_key(key) {
                Some(page) => self.open(page),
                None => log::warn!("Unknown page '{}' in URL, keeping default", key),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([(PAGE_PARAM, page.key())])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page '{}'", page.key());
        self.active.set(page);
        self.user_menu_open.set(false);
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active.get() == page
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_user_menu(&self) {
        self.user_menu_open.update(|val| *val = !*val);
    }
}

/// Context accessor used by every layout component
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
