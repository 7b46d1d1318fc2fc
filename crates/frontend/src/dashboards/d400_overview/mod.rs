//! Overview dashboard: stat groups, bar charts and the newest catalog entries

use contracts::dashboards::d400_overview::OverviewSummary;
use contracts::shared::seed::seed_or_empty;
use leptos::prelude::*;
use thaw::*;

use crate::app::use_config;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::stat_card::StatGroup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// One row of the "New products" table, detached from the catalog borrow
#[derive(Clone)]
struct LatestProduct {
    name: String,
    brand: String,
    category: String,
    price: String,
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let config = use_config();
    let seed = seed_or_empty();
    let summary = OverviewSummary::from_seed(seed, &config.ui.currency);

    let catalog = seed.catalog();
    let latest: Vec<LatestProduct> = catalog
        .latest(config.ui.latest_products)
        .into_iter()
        .map(|row| LatestProduct {
            name: row.product.name.clone(),
            brand: row.brand.to_string(),
            category: row.category.to_string(),
            price: row.product.format_price(&config.ui.currency),
        })
        .collect();
    let has_latest = !latest.is_empty();
    let latest = StoredValue::new(latest);

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
            </div>

            <div class="page__content">
                <StatGroup title="Blog" tiles=summary.blog_tiles />
                <StatGroup title="Users" tiles=summary.user_tiles />
                <StatGroup title="Landing" tiles=summary.landing_tiles />
                <StatGroup title="Orders" tiles=summary.order_tiles />

                <div class="chart-grid">
                    <BarChart series=summary.blog_chart />
                    <BarChart series=summary.user_chart />
                    <BarChart series=summary.traffic_chart />
                </div>

                <section class="stat-group">
                    <h3 class="stat-group__title">"New products"</h3>
                    <Show
                        when=move || has_latest
                        fallback=|| view! { <div class="page__hint">"No products yet"</div> }
                    >
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Brand"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {latest
                                    .get_value()
                                    .into_iter()
                                    .map(|row| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.brand}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.price}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    </Show>
                </section>
            </div>
        </PageFrame>
    }
}
