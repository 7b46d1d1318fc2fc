use crate::shared::icons::icon;
use contracts::shared::indicators::StatTile;
use leptos::prelude::*;

#[component]
pub fn StatCard(tile: StatTile) -> impl IntoView {
    let value = tile.display_value();

    view! {
        <div class=tile.status.css_class()>
            <div class="stat-card__icon">
                {icon(&tile.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{tile.label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}

/// Row of cards under a section heading
#[component]
pub fn StatGroup(title: &'static str, tiles: Vec<StatTile>) -> impl IntoView {
    view! {
        <section class="stat-group">
            <h3 class="stat-group__title">{title}</h3>
            <div class="stat-group__grid">
                {tiles.into_iter().map(|tile| view! { <StatCard tile=tile /> }).collect_view()}
            </div>
        </section>
    }
}
