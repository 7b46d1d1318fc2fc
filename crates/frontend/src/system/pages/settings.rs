use leptos::prelude::*;

use crate::app::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Read-only view of the effective configuration
#[component]
pub fn SettingsPage() -> impl IntoView {
    let config = use_config();
    let rendered = serde_json::to_string_pretty(&config)
        .unwrap_or_else(|e| format!("Failed to render configuration: {}", e));

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
            </div>
            <div class="page__content">
                <dl class="settings-list">
                    <dt>"Title"</dt>
                    <dd>{config.app.title.clone()}</dd>
                    <dt>"Start page"</dt>
                    <dd>{config.app.default_page.clone()}</dd>
                    <dt>"Currency"</dt>
                    <dd>{config.ui.currency.clone()}</dd>
                    <dt>"Sidebar open on start"</dt>
                    <dd>{if config.ui.sidebar_open { "Yes" } else { "No" }}</dd>
                </dl>
                <h3>"Effective configuration"</h3>
                <pre class="settings-json">{rendered}</pre>
            </div>
        </PageFrame>
    }
}
