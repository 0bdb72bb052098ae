use chrono::NaiveDate;
use contracts::domain::IssueRecord;
use contracts::enums::{IssuePriority, IssueType};
use contracts::shared::filter::{
    apply_filters, Condition, FilterCriteria, SortSpec, SENTINEL_ALL,
};
use leptos::prelude::*;

use crate::shared::data::mock_issues;
use crate::shared::date_utils::{format_date, format_quantity};
use crate::shared::icons::icon;

fn issue_icon(issue_type: IssueType) -> &'static str {
    match issue_type {
        IssueType::OutOfStock => "alert-circle",
        IssueType::LowStock => "alert-triangle",
        IssueType::HighReturns => "trending-down",
        IssueType::QualityIssue => "file-text",
        IssueType::ExpiryWarning => "calendar",
        IssueType::SupplierDelay => "clock",
    }
}

/// Editable subset of an issue, held as raw input strings while the detail
/// form is open.
#[derive(Debug, Clone, Default)]
struct IssueDraft {
    title: String,
    description: String,
    expected_restock: String,
}

impl IssueDraft {
    fn from_issue(issue: &IssueRecord) -> Self {
        Self {
            title: issue.title.clone(),
            description: issue.description.clone(),
            expected_restock: issue
                .expected_restock
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }

    /// Write the draft back. An empty date clears the planned restock; an
    /// unparseable one keeps the previous value.
    fn apply_to(&self, issue: &mut IssueRecord) {
        if !self.title.trim().is_empty() {
            issue.title = self.title.trim().to_string();
        }
        issue.description = self.description.trim().to_string();
        let raw = self.expected_restock.trim();
        if raw.is_empty() {
            issue.expected_restock = None;
        } else if let Ok(date) = raw.parse::<NaiveDate>() {
            issue.expected_restock = Some(date);
        }
    }
}

#[component]
pub fn IssuesPage() -> impl IntoView {
    let issues = RwSignal::new(mock_issues());
    let search = RwSignal::new(String::new());
    let type_filter = RwSignal::new(SENTINEL_ALL.to_string());
    let priority_filter = RwSignal::new(SENTINEL_ALL.to_string());
    let selected_id = RwSignal::new(Option::<String>::None);
    let edit_mode = RwSignal::new(false);
    let draft = RwSignal::new(IssueDraft::default());

    let output = Memo::new(move |_| {
        let criteria = FilterCriteria::new()
            .with_condition(Condition::search(search.get()))
            .with_condition(Condition::equals("type", type_filter.get()))
            .with_condition(Condition::equals("priority", priority_filter.get()))
            .with_group_by("priority");
        apply_filters(&issues.get(), &criteria)
    });

    // Resolved against the full set so an edit that no longer matches the
    // filters does not close the detail panel mid-save.
    let selected = Memo::new(move |_| {
        let id = selected_id.get()?;
        issues.get().into_iter().find(|i| i.id == id)
    });

    let select = move |issue: &IssueRecord| {
        selected_id.set(Some(issue.id.clone()));
        draft.set(IssueDraft::from_issue(issue));
        edit_mode.set(false);
    };

    let save = move |_| {
        if let Some(id) = selected_id.get() {
            issues.update(|list| {
                if let Some(issue) = list.iter_mut().find(|i| i.id == id) {
                    draft.get().apply_to(issue);
                }
            });
        }
        edit_mode.set(false);
    };

    let cancel = move |_| {
        if let Some(issue) = selected.get() {
            draft.set(IssueDraft::from_issue(&issue));
        }
        edit_mode.set(false);
    };

    let priority_count =
        move |priority: IssuePriority| output.get().summary.count_of(priority.as_str());

    view! {
        <div class="page issues-page">
            <div class="page-header">
                <h1>"Issues"</h1>
                <p class="page-subtitle">"Stock and quality incidents needing attention"</p>
            </div>

            <div class="card">
                <div class="filter-bar">
                    <span class="filter-label">{icon("search")}</span>
                    <input
                        type="text"
                        placeholder="Search by title or SKU"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />

                    <select on:change=move |ev| type_filter.set(event_target_value(&ev))>
                        <option
                            value=SENTINEL_ALL
                            selected=move || type_filter.get() == SENTINEL_ALL
                        >
                            "All types"
                        </option>
                        {IssueType::all()
                            .iter()
                            .copied()
                            .map(|t| {
                                view! {
                                    <option
                                        value=t.as_str()
                                        selected=move || type_filter.get() == t.as_str()
                                    >
                                        {t.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <select on:change=move |ev| priority_filter.set(event_target_value(&ev))>
                        <option
                            value=SENTINEL_ALL
                            selected=move || priority_filter.get() == SENTINEL_ALL
                        >
                            "All priorities"
                        </option>
                        {IssuePriority::all()
                            .iter()
                            .copied()
                            .map(|p| {
                                view! {
                                    <option
                                        value=p.as_str()
                                        selected=move || priority_filter.get() == p.as_str()
                                    >
                                        {p.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="status-strip">
                    <span>{move || format!("{} issues", output.get().summary.total)}</span>
                    <span class="priority-high">
                        {move || format!("Urgent: {}", priority_count(IssuePriority::High))}
                    </span>
                    <span class="priority-medium">
                        {move || format!("Medium: {}", priority_count(IssuePriority::Medium))}
                    </span>
                    <span class="priority-low">
                        {move || format!("Low: {}", priority_count(IssuePriority::Low))}
                    </span>
                </div>
            </div>

            <div class="issues-layout">
                <ul class="issue-list">
                    {move || {
                        output
                            .get()
                            .visible
                            .into_iter()
                            .map(|issue| {
                                let row = issue.clone();
                                let active = issue.id.clone();
                                let class = move || {
                                    if selected_id.get().as_deref() == Some(active.as_str()) {
                                        "issue-row issue-row-active"
                                    } else {
                                        "issue-row"
                                    }
                                };
                                let priority_class =
                                    format!("badge badge-priority-{}", issue.priority.as_str());
                                view! {
                                    <li class=class on:click=move |_| select(&row)>
                                        {icon(issue_icon(issue.issue_type))}
                                        <div class="issue-row-main">
                                            <span class="issue-title">{issue.title.clone()}</span>
                                            <span class="issue-meta">
                                                {format!(
                                                    "{} · {} · {}",
                                                    issue.sku,
                                                    issue.issue_type.label(),
                                                    format_date(&issue.created_date.to_string()),
                                                )}
                                            </span>
                                        </div>
                                        <span class=priority_class>{issue.priority.label()}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>

                <Show when=move || output.get().visible.is_empty()>
                    <div class="empty-state">"No issues match the current filters."</div>
                </Show>

                <div class="card issue-detail">
                    {move || match selected.get() {
                        None => {
                            view! {
                                <div class="empty-state">
                                    {icon("alert-circle")}
                                    <p>"Select an issue to see the details."</p>
                                </div>
                            }
                                .into_any()
                        }
                        Some(issue) => {
                            view! {
                                <div class="detail-header">
                                    <h3>{issue.title.clone()}</h3>
                                    <span class=format!(
                                        "badge badge-priority-{}",
                                        issue.priority.as_str(),
                                    )>{issue.priority.label()}</span>
                                    <Show when=move || !edit_mode.get()>
                                        <button
                                            class="btn-secondary"
                                            on:click=move |_| edit_mode.set(true)
                                        >
                                            {icon("edit")}
                                            "Edit"
                                        </button>
                                    </Show>
                                </div>

                                <dl class="detail-grid">
                                    <dt>"Issue"</dt>
                                    <dd class="mono">{issue.id.clone()}</dd>
                                    <dt>"SKU"</dt>
                                    <dd class="mono">{issue.sku.clone()}</dd>
                                    <dt>"Type"</dt>
                                    <dd>{issue.issue_type.label()}</dd>
                                    <dt>"Assignee"</dt>
                                    <dd>{issue.assignee.clone()}</dd>
                                    <dt>"Affected quantity"</dt>
                                    <dd class="num">
                                        {format_quantity(issue.affected_quantity)}
                                    </dd>
                                    <dt>"Created"</dt>
                                    <dd>{format_date(&issue.created_date.to_string())}</dd>
                                </dl>

                                <Show
                                    when=move || edit_mode.get()
                                    fallback={
                                        let issue = issue.clone();
                                        move || {
                                            let issue = issue.clone();
                                            let restock_date = issue
                                                .expected_restock
                                                .map(|d| format_date(&d.to_string()))
                                                .unwrap_or_else(|| "Not scheduled".to_string());
                                            view! {
                                                <p class="issue-description">
                                                    {issue.description.clone()}
                                                </p>
                                                <Show when={
                                                    let stock = issue.issue_type.is_stock_related();
                                                    move || stock
                                                }>
                                                    <div class="restock-note">
                                                        {icon("package")}
                                                        {format!(
                                                            "Expected restock: {}",
                                                            restock_date,
                                                        )}
                                                    </div>
                                                </Show>
                                            }
                                        }
                                    }
                                >
                                    <div class="detail-form">
                                        <div class="form-group">
                                            <label>"Title"</label>
                                            <input
                                                type="text"
                                                prop:value=move || draft.get().title
                                                on:input=move |ev| {
                                                    draft
                                                        .update(|d| d.title = event_target_value(&ev))
                                                }
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label>"Description"</label>
                                            <textarea
                                                prop:value=move || draft.get().description
                                                on:input=move |ev| {
                                                    draft
                                                        .update(|d| {
                                                            d.description = event_target_value(&ev)
                                                        })
                                                }
                                            ></textarea>
                                        </div>
                                        <div class="form-group">
                                            <label>"Expected restock"</label>
                                            <input
                                                type="date"
                                                prop:value=move || draft.get().expected_restock
                                                on:input=move |ev| {
                                                    draft
                                                        .update(|d| {
                                                            d.expected_restock = event_target_value(&ev)
                                                        })
                                                }
                                            />
                                        </div>
                                        <div class="form-actions">
                                            <button class="btn-primary" on:click=save>
                                                "Save"
                                            </button>
                                            <button class="btn-secondary" on:click=cancel>
                                                "Cancel"
                                            </button>
                                        </div>
                                    </div>
                                </Show>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <RestockingPlan issues />
        </div>
    }
}

/// Restocking plan over the stock-related issues, with its own urgency and
/// schedule filters.
#[component]
fn RestockingPlan(issues: RwSignal<Vec<IssueRecord>>) -> impl IntoView {
    let urgency = RwSignal::new(SENTINEL_ALL.to_string());
    let schedule = RwSignal::new(SENTINEL_ALL.to_string());

    // Unscheduled rows carry no date, so the ascending sort puts them last.
    let rows = Memo::new(move |_| {
        let stock_related: Vec<IssueRecord> = issues
            .get()
            .into_iter()
            .filter(|i| i.issue_type.is_stock_related())
            .collect();
        let criteria = FilterCriteria::new()
            .with_condition(Condition::equals("priority", urgency.get()))
            .with_condition(Condition::equals("restockStatus", schedule.get()))
            .with_sort(SortSpec::ascending("expectedRestock"));
        apply_filters(&stock_related, &criteria).visible
    });

    view! {
        <div class="card restock-plan">
            <div class="card-header">
                <h3>{icon("package")}" Restocking plan"</h3>

                <select on:change=move |ev| urgency.set(event_target_value(&ev))>
                    <option value=SENTINEL_ALL selected=move || urgency.get() == SENTINEL_ALL>
                        "All urgencies"
                    </option>
                    {IssuePriority::all()
                        .iter()
                        .copied()
                        .map(|p| {
                            view! {
                                <option
                                    value=p.as_str()
                                    selected=move || urgency.get() == p.as_str()
                                >
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <select on:change=move |ev| schedule.set(event_target_value(&ev))>
                    <option value=SENTINEL_ALL selected=move || schedule.get() == SENTINEL_ALL>
                        "All schedules"
                    </option>
                    <option
                        value="scheduled"
                        selected=move || schedule.get() == "scheduled"
                    >
                        "Scheduled"
                    </option>
                    <option
                        value="unscheduled"
                        selected=move || schedule.get() == "unscheduled"
                    >
                        "Not scheduled"
                    </option>
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Issue"</th>
                        <th class="num">"Quantity"</th>
                        <th>"Expected restock"</th>
                        <th>"Urgency"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|issue| {
                                let priority_class =
                                    format!("badge badge-priority-{}", issue.priority.as_str());
                                view! {
                                    <tr>
                                        <td class="mono">{issue.sku.clone()}</td>
                                        <td>{issue.title.clone()}</td>
                                        <td class="num">
                                            {format_quantity(issue.affected_quantity)}
                                        </td>
                                        <td>
                                            {issue
                                                .expected_restock
                                                .map(|d| format_date(&d.to_string()))
                                                .unwrap_or_else(|| "Not scheduled".to_string())}
                                        </td>
                                        <td>
                                            <span class=priority_class>
                                                {issue.priority.label()}
                                            </span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <Show when=move || rows.get().is_empty()>
                <div class="empty-state">"Nothing to restock under the current filters."</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_round_trip_updates_editable_fields() {
        let mut issue = mock_issues().remove(0);
        let mut draft = IssueDraft::from_issue(&issue);
        draft.title = "  Renamed issue  ".into();
        draft.description = "Escalated to the supplier".into();
        draft.expected_restock = "2024-08-15".into();
        draft.apply_to(&mut issue);
        assert_eq!(issue.title, "Renamed issue");
        assert_eq!(issue.description, "Escalated to the supplier");
        assert_eq!(
            issue.expected_restock,
            NaiveDate::from_ymd_opt(2024, 8, 15)
        );
    }

    #[test]
    fn blank_date_clears_the_plan_and_garbage_keeps_it() {
        let mut issue = mock_issues().remove(0);
        let before = issue.expected_restock;
        assert!(before.is_some());

        let mut draft = IssueDraft::from_issue(&issue);
        draft.expected_restock = "not-a-date".into();
        draft.apply_to(&mut issue);
        assert_eq!(issue.expected_restock, before);

        draft.expected_restock = String::new();
        draft.apply_to(&mut issue);
        assert_eq!(issue.expected_restock, None);
    }
}
