use contracts::enums::{DatePeriod, SkuStatus};
use contracts::shared::filter::{apply_filters, Condition, FilterCriteria, SENTINEL_ALL};
use leptos::prelude::*;

use crate::shared::data::{mock_forecast_series, mock_skus, tca_options};
use crate::shared::date_utils::format_quantity;
use crate::shared::icons::icon;

#[derive(Clone, Debug)]
struct DashboardState {
    tca: String,
    period: DatePeriod,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tca: SENTINEL_ALL.to_string(),
            period: DatePeriod::SixMonths,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    // SKU counts per status plus total stock for the selected TCA.
    let sku_summary = Memo::new(move |_| {
        let skus = mock_skus();
        let criteria = FilterCriteria::new()
            .with_condition(Condition::equals("tca", state.get().tca))
            .with_group_by("status")
            .with_aggregate("currentStock");
        apply_filters(&skus, &criteria).summary
    });

    let series = Memo::new(move |_| {
        let DashboardState { tca, period } = state.get();
        let mut points = mock_forecast_series(&tca);
        points.truncate(period.months().min(points.len()));
        points
    });

    let total_stock = move || {
        sku_summary
            .get()
            .numeric
            .map(|n| format_quantity(n.sum as i64))
            .unwrap_or_else(|| "0".to_string())
    };

    view! {
        <div class="page dashboard-page">
            <h1>"Dashboard"</h1>

            // Filters: TCA and date range, both with sentinel defaults.
            <div class="filter-bar">
                <span class="filter-label">{icon("filter")}" Filters:"</span>

                <select on:change=move |ev| {
                    state.update(|s| s.tca = event_target_value(&ev));
                }>
                    <option value=SENTINEL_ALL selected=move || state.get().tca == SENTINEL_ALL>
                        "All TCA"
                    </option>
                    {tca_options()
                        .into_iter()
                        .map(|(code, name)| {
                            view! {
                                <option value=code selected=move || state.get().tca == code>
                                    {format!("{} ({})", code, name)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Some(period) = DatePeriod::parse(&value) {
                        state.update(|s| s.period = period);
                    }
                }>
                    {DatePeriod::all()
                        .iter()
                        .copied()
                        .map(|period| {
                            view! {
                                <option
                                    value=period.as_str()
                                    selected=move || state.get().period == period
                                >
                                    {period.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            // Summary cards over the filtered SKU set.
            <div class="summary-cards">
                <div class="summary-card">
                    <span class="summary-card-title">"SKUs"</span>
                    <span class="summary-card-value">{move || sku_summary.get().total}</span>
                </div>
                <div class="summary-card summary-card-normal">
                    <span class="summary-card-title">"Normal"</span>
                    <span class="summary-card-value">
                        {move || sku_summary.get().count_of(SkuStatus::Normal.as_str())}
                    </span>
                </div>
                <div class="summary-card summary-card-warning">
                    <span class="summary-card-title">"Warning"</span>
                    <span class="summary-card-value">
                        {move || sku_summary.get().count_of(SkuStatus::Warning.as_str())}
                    </span>
                </div>
                <div class="summary-card summary-card-critical">
                    <span class="summary-card-title">"Critical"</span>
                    <span class="summary-card-value">
                        {move || sku_summary.get().count_of(SkuStatus::Critical.as_str())}
                    </span>
                </div>
                <div class="summary-card">
                    <span class="summary-card-title">"Total stock"</span>
                    <span class="summary-card-value">{total_stock}</span>
                </div>
            </div>

            // Forecast series, rendered as a plain table.
            <div class="card">
                <h3>{icon("trending-up")}" Sales forecast"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Period"</th>
                            <th class="num">"Actual"</th>
                            <th class="num">"Forecast"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            series
                                .get()
                                .into_iter()
                                .map(|point| {
                                    view! {
                                        <tr>
                                            <td>{point.period.clone()}</td>
                                            <td class="num">
                                                {point
                                                    .actual_value
                                                    .map(|v| format_quantity(v as i64))
                                                    .unwrap_or_else(|| "—".to_string())}
                                            </td>
                                            <td class="num">
                                                {format_quantity(point.forecast_value as i64)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
