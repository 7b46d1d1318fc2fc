use contracts::shared::indicators::ChartSeries;
use leptos::prelude::*;

const CHART_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 28.0;
const BAR_GAP: f64 = 14.0;
const LABEL_SPACE: f64 = 20.0;

/// Vertical bars scaled to the largest value of the series
#[component]
pub fn BarChart(series: ChartSeries) -> impl IntoView {
    let width = series.points.len() as f64 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
    let view_box = format!("0 0 {} {}", width, CHART_HEIGHT + LABEL_SPACE);

    let bars = series
        .points
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let height = series.ratio(*value) * CHART_HEIGHT;
            let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
            let y = CHART_HEIGHT - height;
            let tooltip = format!("{}: {}", label, value);
            view! {
                <g class="bar-chart__bar">
                    <title>{tooltip}</title>
                    <rect x=x y=y width=BAR_WIDTH height=height rx="3" />
                    <text
                        class="bar-chart__label"
                        x=x + BAR_WIDTH / 2.0
                        y=CHART_HEIGHT + LABEL_SPACE - 6.0
                        text-anchor="middle"
                    >
                        {label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="bar-chart">
            <h3 class="bar-chart__title">{series.title.clone()}</h3>
            <svg class="bar-chart__svg" viewBox=view_box preserveAspectRatio="xMidYMid meet">
                {bars}
            </svg>
        </div>
    }
}
