use crate::dashboards::d400_overview::OverviewPage;
use crate::dashboards::d401_landing::LandingPage;
use crate::domain::a001_user::ui::list::UsersListPage;
use crate::domain::a004_product::ui::list::ProductsPage;
use crate::domain::a005_order::ui::list::OrdersListPage;
use crate::domain::a006_blog_post::ui::list::BlogPostsListPage;
use crate::layout::global_context::use_app_context;
use crate::system::pages::settings::SettingsPage;
use contracts::shared::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Page registry: the component mounted for each sidebar entry.
///
/// Each page builds its stores from the seed when mounted, so leaving a page
/// discards its edits.
#[component]
pub fn PageContent() -> impl IntoView {
    let ctx = use_app_context();
    // Re-clicking the current page must not remount it
    let active = Memo::new(move |_| ctx.active.get());

    move || match active.get() {
        Page::Dashboard => view! { <OverviewPage /> }.into_any(),
        Page::Users => view! { <UsersListPage /> }.into_any(),
        Page::Products => view! { <ProductsPage /> }.into_any(),
        Page::Landing => view! { <LandingPage /> }.into_any(),
        Page::Blogs => view! { <BlogPostsListPage /> }.into_any(),
        Page::Orders => view! { <OrdersListPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
