//! TopHeader: sidebar toggle, page title and the user dropdown

use crate::app::use_config;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::shared::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let email = move || {
        auth_state
            .get()
            .session
            .map(|s| s.email)
            .unwrap_or_default()
    };
    let greeting = move || {
        auth_state
            .get()
            .session
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| "Guest".to_string())
    };
    let initial = move || {
        auth_state
            .get()
            .session
            .map(|s| s.initial())
            .unwrap_or_default()
    };

    let logout = move |_| {
        ctx.user_menu_open.set(false);
        do_logout(set_auth_state);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{config.app.title.clone()}</span>
                <span class="top-header__page">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user" on:click=move |_| ctx.toggle_user_menu()>
                    <span class="top-header__avatar">{initial}</span>
                    <span>{greeting}</span>
                    {icon("chevron-down")}
                </div>

                <Show when=move || ctx.user_menu_open.get()>
                    <div class="top-header__dropdown">
                        <div class="top-header__dropdown-email">{email}</div>
                        <button
                            class="top-header__dropdown-item"
                            on:click=move |_| ctx.open(Page::Settings)
                        >
                            {icon("settings")}
                            " Settings"
                        </button>
                        <button class="top-header__dropdown-item" on:click=logout>
                            {icon("log-out")}
                            " Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
