//! Sidebar with one entry per page

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::shared::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="app-sidebar__content">
            {Page::ALL
                .into_iter()
                .map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.is_active(page)
                            on:click=move |_| ctx.open(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.icon())}
                                <span>{page.title()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
