use contracts::shared::upload::{format_file_size, AcceptPolicy};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::shared::file_utils::files_from_list;
use crate::shared::icons::icon;

/// Interval between simulated upload-progress ticks.
const PROGRESS_TICK_MS: u32 = 150;
const PROGRESS_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadStatus {
    Uploading,
    Complete,
}

#[derive(Debug, Clone)]
struct UploadEntry {
    id: Uuid,
    name: String,
    size: u64,
    progress: u32,
    status: UploadStatus,
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let policy = StoredValue::new(AcceptPolicy::spreadsheets());
    let entries = RwSignal::new(Vec::<UploadEntry>::new());
    let drag_active = RwSignal::new(false);

    // Cleared on unmount so pending progress timers stop touching signals.
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let start_upload = move |files: Vec<web_sys::File>| {
        // Unsupported files drop out without an error message.
        let accepted = policy
            .get_value()
            .filter_accepted(files, |f| (f.name(), f.type_()));

        for file in accepted {
            let entry = UploadEntry {
                id: Uuid::new_v4(),
                name: file.name(),
                size: file.size() as u64,
                progress: 0,
                status: UploadStatus::Uploading,
            };
            let id = entry.id;
            entries.update(|list| list.push(entry));
            log::info!("upload started: {}", file.name());

            spawn_local(async move {
                loop {
                    TimeoutFuture::new(PROGRESS_TICK_MS).await;
                    // The page may already be disposed; a disposed flag reads
                    // as `None`, never as alive.
                    if !alive.try_get_value().unwrap_or(false) {
                        return;
                    }
                    let done = entries
                        .try_update(|list| match list.iter_mut().find(|e| e.id == id) {
                            Some(entry) => {
                                entry.progress = (entry.progress + PROGRESS_STEP).min(100);
                                if entry.progress == 100 {
                                    entry.status = UploadStatus::Complete;
                                    true
                                } else {
                                    false
                                }
                            }
                            None => true,
                        })
                        .unwrap_or(true);
                    if done {
                        return;
                    }
                }
            });
        }
    };

    let on_input_change = move |ev: leptos::ev::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            start_upload(files_from_list(input.files()));
            input.set_value("");
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        if let Some(transfer) = ev.data_transfer() {
            start_upload(files_from_list(transfer.files()));
        }
    };

    view! {
        <div class="page upload-page">
            <div class="page-header">
                <h1>"Data Upload"</h1>
                <p class="page-subtitle">"Upload sales actuals for forecast recalculation"</p>
            </div>

            <div
                class=move || {
                    if drag_active.get() { "drop-zone drop-zone-active" } else { "drop-zone" }
                }
                on:dragover=move |ev| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
            >
                {icon("upload")}
                <p>"Drag files here or choose from disk"</p>
                <label class="btn-primary">
                    "Select files"
                    <input
                        type="file"
                        multiple=true
                        accept=policy.get_value().accept_attr()
                        style="display: none"
                        on:change=on_input_change
                    />
                </label>
                <p class="hint">"Supported formats: Excel (.xlsx, .xls) and CSV"</p>
            </div>

            <Show when=move || !entries.get().is_empty()>
                <div class="card">
                    <h3>{icon("file-text")}" Uploaded files"</h3>
                    <ul class="upload-list">
                        {move || {
                            entries
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class="upload-row">
                                            <span class="upload-name">{entry.name.clone()}</span>
                                            <span class="upload-size">
                                                {format_file_size(entry.size)}
                                            </span>
                                            {match entry.status {
                                                UploadStatus::Uploading => {
                                                    view! {
                                                        <span class="upload-progress">
                                                            {icon("clock")}
                                                            {format!("{}%", entry.progress)}
                                                        </span>
                                                    }
                                                        .into_any()
                                                }
                                                UploadStatus::Complete => {
                                                    view! {
                                                        <span class="upload-done">
                                                            {icon("check-circle")}
                                                            "Done"
                                                        </span>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>

            <div class="card guidelines">
                <h3>{icon("alert-circle")}" Upload guidelines"</h3>
                <ul>
                    <li>"The first row must contain column headers."</li>
                    <li>"Required columns: SKU code, period, quantity."</li>
                    <li>"Periods use the YYYY-MM format."</li>
                    <li>"Files over 10 MB may take a while to process."</li>
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    #[test]
    fn disposed_liveness_flag_reads_as_not_alive() {
        let owner = Owner::new();
        let alive = owner.with(|| {
            let alive = StoredValue::new(true);
            on_cleanup(move || alive.set_value(false));
            alive
        });
        assert_eq!(alive.try_get_value(), Some(true));

        // Simulated unmount: the flag's arena node is disposed with its
        // owner, so a pending timer tick must not read it as alive.
        drop(owner);
        assert!(!alive.try_get_value().unwrap_or(false));
    }
}
