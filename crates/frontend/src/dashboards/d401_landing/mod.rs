use contracts::dashboards::d400_overview::OverviewSummary;
use contracts::shared::indicators::ValueFormat;
use contracts::shared::seed::seed_or_empty;
use leptos::prelude::*;

use crate::app::use_config;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::stat_card::StatGroup;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Landing page funnel: page views, conversions and monthly traffic
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_config();
    let seed = seed_or_empty();
    let summary = OverviewSummary::from_seed(seed, &config.ui.currency);

    let percent = ValueFormat::Percent { decimals: 1 };
    let ctr = percent.format(seed.landing.click_through_rate());
    let conversion = percent.format(seed.landing.conversion_rate());

    view! {
        <PageFrame page_id="d401_landing--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Landing"</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__summary">
                        {format!("CTR {} / conversion {}", ctr, conversion)}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <StatGroup title="Funnel" tiles=summary.landing_tiles />
                <div class="chart-grid">
                    <BarChart series=summary.traffic_chart />
                </div>
            </div>
        </PageFrame>
    }
}
