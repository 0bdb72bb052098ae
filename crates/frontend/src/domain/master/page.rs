use contracts::domain::SkuRecord;
use contracts::shared::filter::{apply_filters, Condition, FilterCriteria, SENTINEL_ALL};
use contracts::shared::upload::AcceptPolicy;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::shared::data::{master_stats, mock_skus};
use crate::shared::date_utils::{format_date, format_quantity};
use crate::shared::file_utils::files_from_list;
use crate::shared::icons::icon;

/// Editable subset of a SKU row, held as raw input strings while the form is
/// open.
#[derive(Debug, Clone, Default)]
struct SkuDraft {
    name: String,
    assignee: String,
    current_stock: String,
    reorder_point: String,
}

impl SkuDraft {
    fn from_sku(sku: &SkuRecord) -> Self {
        Self {
            name: sku.name.clone(),
            assignee: sku.assignee.clone(),
            current_stock: sku.current_stock.to_string(),
            reorder_point: sku.reorder_point.to_string(),
        }
    }

    /// Write the draft back. Unparseable numbers keep the previous value.
    fn apply_to(&self, sku: &mut SkuRecord) {
        if !self.name.trim().is_empty() {
            sku.name = self.name.trim().to_string();
        }
        sku.assignee = self.assignee.trim().to_string();
        if let Ok(stock) = self.current_stock.trim().parse() {
            sku.current_stock = stock;
        }
        if let Ok(point) = self.reorder_point.trim().parse() {
            sku.reorder_point = point;
        }
    }
}

#[component]
pub fn MasterPage() -> impl IntoView {
    let skus = RwSignal::new(mock_skus());
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(SENTINEL_ALL.to_string());
    let selected_id = RwSignal::new(Option::<String>::None);
    let edit_mode = RwSignal::new(false);
    let draft = RwSignal::new(SkuDraft::default());

    let stats = Memo::new(move |_| {
        let list = skus.get();
        let stats = master_stats(&list);
        (
            stats.total_skus,
            stats.active_skus,
            stats.discontinued_skus,
            stats.inn_codes,
        )
    });

    let categories = Memo::new(move |_| {
        let mut names: Vec<String> = skus.get().iter().map(|s| s.category.clone()).collect();
        names.sort();
        names.dedup();
        names
    });

    let visible = Memo::new(move |_| {
        let criteria = FilterCriteria::new()
            .with_condition(Condition::search(search.get()))
            .with_condition(Condition::equals("category", category.get()));
        apply_filters(&skus.get(), &criteria).visible
    });

    let selected_sku = Memo::new(move |_| {
        let id = selected_id.get()?;
        skus.get().into_iter().find(|s| s.id == id)
    });

    let select = move |sku: &SkuRecord| {
        selected_id.set(Some(sku.id.clone()));
        draft.set(SkuDraft::from_sku(sku));
        edit_mode.set(false);
    };

    let save = move |_| {
        if let Some(id) = selected_id.get() {
            skus.update(|list| {
                if let Some(sku) = list.iter_mut().find(|s| s.id == id) {
                    draft.get().apply_to(sku);
                }
            });
        }
        edit_mode.set(false);
    };

    let cancel = move |_| {
        if let Some(sku) = selected_sku.get() {
            draft.set(SkuDraft::from_sku(&sku));
        }
        edit_mode.set(false);
    };

    // Reference-data imports also take JSON exports, unlike the sales upload.
    let policy = StoredValue::new(AcceptPolicy::spreadsheets_and_json());
    let imported = RwSignal::new(Vec::<String>::new());

    let on_import = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let accepted = policy
            .get_value()
            .filter_accepted(files_from_list(input.files()), |f| (f.name(), f.type_()));
        for file in &accepted {
            log::info!("master data import queued: {}", file.name());
        }
        imported.update(|names| names.extend(accepted.iter().map(|f| f.name())));
        input.set_value("");
    };

    view! {
        <div class="page master-page">
            <div class="page-header">
                <h1>"Master Data"</h1>
                <p class="page-subtitle">"SKU registry and reference data"</p>
                <label class="btn-secondary">
                    {icon("upload")}
                    "Import"
                    <input
                        type="file"
                        multiple=true
                        accept=policy.get_value().accept_attr()
                        style="display: none"
                        on:change=on_import
                    />
                </label>
            </div>

            <Show when=move || !imported.get().is_empty()>
                <div class="info-banner">
                    {icon("file-text")}
                    {move || format!("Queued for import: {}", imported.get().join(", "))}
                </div>
            </Show>

            <div class="summary-cards">
                <div class="summary-card">
                    <span class="summary-card-title">"Total SKUs"</span>
                    <span class="summary-card-value">{move || stats.get().0}</span>
                </div>
                <div class="summary-card summary-card-normal">
                    <span class="summary-card-title">"Active"</span>
                    <span class="summary-card-value">{move || stats.get().1}</span>
                </div>
                <div class="summary-card summary-card-critical">
                    <span class="summary-card-title">"Discontinued"</span>
                    <span class="summary-card-value">{move || stats.get().2}</span>
                </div>
                <div class="summary-card">
                    <span class="summary-card-title">"INN codes"</span>
                    <span class="summary-card-value">{move || stats.get().3}</span>
                </div>
            </div>

            <div class="master-layout">
                <div class="card master-list">
                    <div class="filter-bar">
                        <span class="filter-label">{icon("search")}</span>
                        <input
                            type="text"
                            placeholder="Search SKU"
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <select on:change=move |ev| category.set(event_target_value(&ev))>
                            <option
                                value=SENTINEL_ALL
                                selected=move || category.get() == SENTINEL_ALL
                            >
                                "All categories"
                            </option>
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|name| {
                                        let value = name.clone();
                                        let is_selected = name.clone();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || category.get() == is_selected
                                            >
                                                {name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <ul class="sku-list">
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|sku| {
                                    let row = sku.clone();
                                    let active = sku.id.clone();
                                    let class = move || {
                                        if selected_id.get().as_deref() == Some(active.as_str()) {
                                            "sku-row sku-row-active"
                                        } else {
                                            "sku-row"
                                        }
                                    };
                                    view! {
                                        <li class=class on:click=move |_| select(&row)>
                                            <span class="mono">{sku.id.clone()}</span>
                                            <span>{sku.name.clone()}</span>
                                            <Show when={
                                                let discontinued = sku.discontinued;
                                                move || discontinued
                                            }>
                                                <span class="badge badge-muted">"Discontinued"</span>
                                            </Show>
                                            {icon("chevron-right")}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>

                    <Show when=move || visible.get().is_empty()>
                        <div class="empty-state">"No SKUs match the current filters."</div>
                    </Show>
                </div>

                <div class="card master-detail">
                    {move || match selected_sku.get() {
                        None => {
                            view! {
                                <div class="empty-state">
                                    {icon("database")}
                                    <p>"Select a SKU to view its details."</p>
                                </div>
                            }
                                .into_any()
                        }
                        Some(sku) => {
                            view! {
                                <div class="detail-header">
                                    <h3>{sku.id.clone()}</h3>
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

                                <Show when={
                                    let warn = sku.needs_restock();
                                    move || warn
                                }>
                                    <div class="warning-banner">
                                        {icon("alert-triangle")}
                                        "Stock is at or below the reorder point."
                                    </div>
                                </Show>

                                <Show
                                    when=move || edit_mode.get()
                                    fallback={
                                        let sku = sku.clone();
                                        move || {
                                            let sku = sku.clone();
                                            view! {
                                                <dl class="detail-grid">
                                                    <dt>"Name"</dt>
                                                    <dd>{sku.name.clone()}</dd>
                                                    <dt>"INN"</dt>
                                                    <dd class="mono">{sku.inn.clone()}</dd>
                                                    <dt>"Category"</dt>
                                                    <dd>{sku.category.clone()}</dd>
                                                    <dt>"TCA"</dt>
                                                    <dd>
                                                        {format!("{} ({})", sku.tca, sku.tca_name)}
                                                    </dd>
                                                    <dt>"Assignee"</dt>
                                                    <dd>{sku.assignee.clone()}</dd>
                                                    <dt>"Status"</dt>
                                                    <dd>
                                                        <span class=format!(
                                                            "badge badge-{}",
                                                            sku.status.as_str(),
                                                        )>{sku.status.label()}</span>
                                                    </dd>
                                                    <dt>"Current stock"</dt>
                                                    <dd class="num">
                                                        {format_quantity(sku.current_stock)}
                                                    </dd>
                                                    <dt>"Reorder point"</dt>
                                                    <dd class="num">
                                                        {format_quantity(sku.reorder_point)}
                                                    </dd>
                                                    <dt>"Forecast qty"</dt>
                                                    <dd class="num">
                                                        {format_quantity(sku.forecast_qty)}
                                                    </dd>
                                                    <dt>"Accuracy"</dt>
                                                    <dd class="num">
                                                        {format!("{:.1}%", sku.accuracy)}
                                                    </dd>
                                                    <dt>"Created"</dt>
                                                    <dd>
                                                        {format_date(&sku.created_date.to_string())}
                                                    </dd>
                                                    <dt>"Modified"</dt>
                                                    <dd>
                                                        {format_date(&sku.last_modified.to_string())}
                                                    </dd>
                                                </dl>
                                            }
                                        }
                                    }
                                >
                                    <div class="detail-form">
                                        <div class="form-group">
                                            <label>"Name"</label>
                                            <input
                                                type="text"
                                                prop:value=move || draft.get().name
                                                on:input=move |ev| {
                                                    draft.update(|d| d.name = event_target_value(&ev))
                                                }
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label>"Assignee"</label>
                                            <input
                                                type="text"
                                                prop:value=move || draft.get().assignee
                                                on:input=move |ev| {
                                                    draft
                                                        .update(|d| d.assignee = event_target_value(&ev))
                                                }
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label>"Current stock"</label>
                                            <input
                                                type="number"
                                                prop:value=move || draft.get().current_stock
                                                on:input=move |ev| {
                                                    draft
                                                        .update(|d| {
                                                            d.current_stock = event_target_value(&ev)
                                                        })
                                                }
                                            />
                                        </div>
                                        <div class="form-group">
                                            <label>"Reorder point"</label>
                                            <input
                                                type="number"
                                                prop:value=move || draft.get().reorder_point
                                                on:input=move |ev| {
                                                    draft
                                                        .update(|d| {
                                                            d.reorder_point = event_target_value(&ev)
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
        </div>
    }
}
