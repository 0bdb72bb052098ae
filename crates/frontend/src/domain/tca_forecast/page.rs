use contracts::enums::SkuStatus;
use contracts::shared::filter::{apply_filters, Condition, FilterCriteria, SortSpec, SENTINEL_ALL};
use leptos::prelude::*;

use crate::shared::data::mock_tca_summary;
use crate::shared::date_utils::format_quantity;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, sort_indicator};

/// Forecast accuracy per horizon, shown next to the summary table.
const HORIZON_ACCURACY: &[(&str, f64)] = &[
    ("1 month", 96.5),
    ("3 months", 92.1),
    ("6 months", 88.7),
    ("12 months", 84.3),
    ("24 months", 79.2),
];

#[component]
pub fn TcaForecastPage() -> impl IntoView {
    let status_filter = RwSignal::new(SENTINEL_ALL.to_string());
    let sort = RwSignal::new(Option::<SortSpec>::None);

    let output = Memo::new(move |_| {
        let rows = mock_tca_summary();
        let mut criteria = FilterCriteria::new()
            .with_condition(Condition::equals("status", status_filter.get()))
            .with_group_by("status");
        criteria.sort = sort.get();
        apply_filters(&rows, &criteria)
    });

    let status_count =
        move |status: SkuStatus| output.get().summary.count_of(status.as_str());

    let header = move |label: &'static str, field: &'static str| {
        view! {
            <th class="sortable" on:click=create_sort_toggle(field, sort)>
                {label}
                {move || sort_indicator(sort.get().as_ref(), field)}
            </th>
        }
    };

    view! {
        <div class="page tca-forecast-page">
            <div class="page-header">
                <h1>"TCA Forecast Analysis"</h1>
                <p class="page-subtitle">"Therapeutic Category Analysis - 24 month forecast"</p>
            </div>

            <div class="card">
                <h3>{icon("trending-up")}" Forecast accuracy by horizon"</h3>
                <ul class="horizon-list">
                    {HORIZON_ACCURACY
                        .iter()
                        .map(|(period, accuracy)| {
                            view! {
                                <li>
                                    <span>{*period}</span>
                                    <span class="num">{format!("{:.1}%", accuracy)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"TCA summary"</h3>

                    <select on:change=move |ev| status_filter.set(event_target_value(&ev))>
                        <option value=SENTINEL_ALL>"All statuses"</option>
                        {SkuStatus::all()
                            .iter()
                            .copied()
                            .map(|status| {
                                view! {
                                    <option value=status.as_str()>{status.label()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="status-strip">
                    <span>{move || format!("{} categories", output.get().summary.total)}</span>
                    <span class="status-normal">
                        {move || format!("Normal: {}", status_count(SkuStatus::Normal))}
                    </span>
                    <span class="status-warning">
                        {move || format!("Warning: {}", status_count(SkuStatus::Warning))}
                    </span>
                    <span class="status-critical">
                        {move || format!("Critical: {}", status_count(SkuStatus::Critical))}
                    </span>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            {header("Code", "code")}
                            {header("Name", "name")}
                            {header("Current stock", "currentStock")}
                            {header("3M", "forecast3M")}
                            {header("6M", "forecast6M")}
                            {header("12M", "forecast12M")}
                            {header("Accuracy", "accuracy")}
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            output
                                .get()
                                .visible
                                .into_iter()
                                .map(|row| {
                                    let status_class = format!("badge badge-{}", row.status.as_str());
                                    view! {
                                        <tr>
                                            <td class="mono">{row.code.clone()}</td>
                                            <td>{row.name.clone()}</td>
                                            <td class="num">{format_quantity(row.current_stock)}</td>
                                            <td class="num">{format_quantity(row.forecast_3m)}</td>
                                            <td class="num">{format_quantity(row.forecast_6m)}</td>
                                            <td class="num">{format_quantity(row.forecast_12m)}</td>
                                            <td class="num">{format!("{:.1}%", row.accuracy)}</td>
                                            <td>
                                                <span class=status_class>{row.status.label()}</span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <Show when=move || output.get().visible.is_empty()>
                    <div class="empty-state">"No categories match the current filter."</div>
                </Show>
            </div>
        </div>
    }
}
