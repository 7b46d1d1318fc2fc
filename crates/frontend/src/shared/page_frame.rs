//! PageFrame: root wrapper for every page rendered in the center zone.

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id` and `data-page-category` on the page root and adds the
/// category modifier class (`page--dashboard`, `page--system`).
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_user--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    if !is_valid_page_id(page_id) {
        log::warn!("Page id '{}' does not follow the entity--category format", page_id);
    }

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
