use contracts::enums::{AccuracyBand, IssuePriority, SkuStatus};
use contracts::shared::filter::{
    apply_filters, Condition, FilterCriteria, SortSpec, SENTINEL_ALL,
};
use leptos::prelude::*;

use crate::shared::data::{mock_issues, mock_skus, mock_variance_rows, tca_options};
use crate::shared::date_utils::format_quantity;
use crate::shared::icons::icon;

/// Filter inputs of the SKU selection panel, one signal per control so a
/// chip can reset its own dimension without touching the others.
#[derive(Clone, Copy)]
struct SkuFilters {
    search: RwSignal<String>,
    tca: RwSignal<String>,
    status: RwSignal<String>,
    accuracy: RwSignal<String>,
}

impl SkuFilters {
    fn new() -> Self {
        Self {
            search: RwSignal::new(String::new()),
            tca: RwSignal::new(SENTINEL_ALL.to_string()),
            status: RwSignal::new(SENTINEL_ALL.to_string()),
            accuracy: RwSignal::new(SENTINEL_ALL.to_string()),
        }
    }

    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_condition(Condition::search(self.search.get()))
            .with_condition(Condition::equals("tca", self.tca.get()))
            .with_condition(Condition::equals("status", self.status.get()))
            .with_group_by("status");
        if let Some(band) = AccuracyBand::parse(&self.accuracy.get()) {
            let (min, max) = band.bounds();
            criteria = criteria.with_condition(Condition::range("accuracy", min, max));
        }
        criteria
    }

    /// Active chips as (label text, which dimension to reset).
    fn chips(&self) -> Vec<(String, ChipKind)> {
        let mut chips = Vec::new();
        let condition = Condition::search(self.search.get());
        if condition.is_active() {
            chips.push((condition.display_text("Search"), ChipKind::Search));
        }
        let condition = Condition::equals("tca", self.tca.get());
        if condition.is_active() {
            chips.push((condition.display_text("TCA"), ChipKind::Tca));
        }
        let condition = Condition::equals("status", self.status.get());
        if condition.is_active() {
            chips.push((condition.display_text("Status"), ChipKind::Status));
        }
        if let Some(band) = AccuracyBand::parse(&self.accuracy.get()) {
            chips.push((format!("Accuracy: {}", band.label()), ChipKind::Accuracy));
        }
        chips
    }

    fn reset(&self, kind: ChipKind) {
        match kind {
            ChipKind::Search => self.search.set(String::new()),
            ChipKind::Tca => self.tca.set(SENTINEL_ALL.to_string()),
            ChipKind::Status => self.status.set(SENTINEL_ALL.to_string()),
            ChipKind::Accuracy => self.accuracy.set(SENTINEL_ALL.to_string()),
        }
    }

    fn clear(&self) {
        self.search.set(String::new());
        self.tca.set(SENTINEL_ALL.to_string());
        self.status.set(SENTINEL_ALL.to_string());
        self.accuracy.set(SENTINEL_ALL.to_string());
    }

    fn any_active(&self) -> bool {
        !self.search.get().trim().is_empty()
            || self.tca.get() != SENTINEL_ALL
            || self.status.get() != SENTINEL_ALL
            || self.accuracy.get() != SENTINEL_ALL
    }
}

#[derive(Clone, Copy)]
enum ChipKind {
    Search,
    Tca,
    Status,
    Accuracy,
}

#[component]
pub fn SkuForecastPage() -> impl IntoView {
    let filters = SkuFilters::new();

    let output = Memo::new(move |_| {
        let skus = mock_skus();
        apply_filters(&skus, &filters.criteria())
    });

    // Largest deviation first, regardless of sign.
    let variance = Memo::new(move |_| {
        let rows = mock_variance_rows();
        let criteria =
            FilterCriteria::new().with_sort(SortSpec::by_absolute_descending("variancePercent"));
        apply_filters(&rows, &criteria).visible
    });

    // Open issues against the SKUs currently visible, bucketed by priority.
    let issue_summary = Memo::new(move |_| {
        let visible_ids: Vec<String> =
            output.get().visible.into_iter().map(|sku| sku.id).collect();
        let issues: Vec<_> = mock_issues()
            .into_iter()
            .filter(|issue| visible_ids.contains(&issue.sku))
            .collect();
        let criteria = FilterCriteria::new().with_group_by("priority");
        apply_filters(&issues, &criteria).summary
    });

    let status_count = move |status: SkuStatus| output.get().summary.count_of(status.as_str());

    view! {
        <div class="page sku-forecast-page">
            <div class="page-header">
                <h1>"SKU Forecast"</h1>
                <p class="page-subtitle">"Item-level forecast and variance analysis"</p>
            </div>

            <div class="card">
                <div class="filter-bar">
                    <span class="filter-label">{icon("search")}</span>
                    <input
                        type="text"
                        placeholder="Search by id, name, category or TCA"
                        prop:value=move || filters.search.get()
                        on:input=move |ev| filters.search.set(event_target_value(&ev))
                    />

                    <select on:change=move |ev| filters.tca.set(event_target_value(&ev))>
                        <option value=SENTINEL_ALL selected=move || filters.tca.get() == SENTINEL_ALL>
                            "All TCA"
                        </option>
                        {tca_options()
                            .into_iter()
                            .map(|(code, name)| {
                                view! {
                                    <option value=code selected=move || filters.tca.get() == code>
                                        {format!("{} ({})", code, name)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <select on:change=move |ev| filters.status.set(event_target_value(&ev))>
                        <option
                            value=SENTINEL_ALL
                            selected=move || filters.status.get() == SENTINEL_ALL
                        >
                            "All statuses"
                        </option>
                        {SkuStatus::all()
                            .iter()
                            .copied()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || filters.status.get() == status.as_str()
                                    >
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <select on:change=move |ev| filters.accuracy.set(event_target_value(&ev))>
                        <option
                            value=SENTINEL_ALL
                            selected=move || filters.accuracy.get() == SENTINEL_ALL
                        >
                            "Any accuracy"
                        </option>
                        {AccuracyBand::all()
                            .iter()
                            .copied()
                            .map(|band| {
                                view! {
                                    <option
                                        value=band.as_str()
                                        selected=move || filters.accuracy.get() == band.as_str()
                                    >
                                        {band.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                // Active-filter chips with per-chip reset.
                <Show when=move || filters.any_active()>
                    <div class="filter-chips">
                        {move || {
                            filters
                                .chips()
                                .into_iter()
                                .map(|(text, kind)| {
                                    view! {
                                        <span class="chip">
                                            {text}
                                            <button
                                                class="chip-remove"
                                                on:click=move |_| filters.reset(kind)
                                            >
                                                {icon("x")}
                                            </button>
                                        </span>
                                    }
                                })
                                .collect_view()
                        }}
                        <button class="link-button" on:click=move |_| filters.clear()>
                            "Clear all"
                        </button>
                    </div>
                </Show>

                <div class="status-strip">
                    <span>{move || format!("{} results", output.get().summary.total)}</span>
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
                            <th>"SKU"</th>
                            <th>"Name"</th>
                            <th>"TCA"</th>
                            <th>"Status"</th>
                            <th class="num">"Stock"</th>
                            <th class="num">"Forecast"</th>
                            <th class="num">"Accuracy"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            output
                                .get()
                                .visible
                                .into_iter()
                                .map(|sku| {
                                    let status_class =
                                        format!("badge badge-{}", sku.status.as_str());
                                    view! {
                                        <tr>
                                            <td class="mono">{sku.id.clone()}</td>
                                            <td>{sku.name.clone()}</td>
                                            <td>{sku.tca.clone()}</td>
                                            <td>
                                                <span class=status_class>{sku.status.label()}</span>
                                            </td>
                                            <td class="num">{format_quantity(sku.current_stock)}</td>
                                            <td class="num">{format_quantity(sku.forecast_qty)}</td>
                                            <td class="num">{format!("{:.1}%", sku.accuracy)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <Show when=move || output.get().visible.is_empty()>
                    <div class="empty-state">"No SKUs match the current filters."</div>
                </Show>
            </div>

            <div class="card issue-summary">
                <h3>{icon("alert-triangle")}" Open issues on these SKUs"</h3>
                <div class="status-strip">
                    <span>{move || format!("{} issues", issue_summary.get().total)}</span>
                    {IssuePriority::all()
                        .iter()
                        .copied()
                        .map(|p| {
                            view! {
                                <span class=format!("priority-{}", p.as_str())>
                                    {move || {
                                        format!(
                                            "{}: {}",
                                            p.label(),
                                            issue_summary.get().count_of(p.as_str()),
                                        )
                                    }}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card">
                <h3>{icon("trending-down")}" Forecast variance"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Period"</th>
                            <th class="num">"Actual"</th>
                            <th class="num">"Forecast"</th>
                            <th class="num">"Variance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            variance
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let class = if row.variance_percent >= 0.0 {
                                        "num variance-positive"
                                    } else {
                                        "num variance-negative"
                                    };
                                    view! {
                                        <tr>
                                            <td>{row.period.clone()}</td>
                                            <td class="num">{format_quantity(row.actual as i64)}</td>
                                            <td class="num">
                                                {format_quantity(row.forecast as i64)}
                                            </td>
                                            <td class=class>
                                                {format!("{:+.1}%", row.variance_percent)}
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
