use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(&config));
    provide_context(config);

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

/// Effective configuration provided by [`App`]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided")
}
