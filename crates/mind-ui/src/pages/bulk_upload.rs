use leptos::html::Input;
use leptos::prelude::*;
use mind_types::{BulkUploadResult, BULK_UPLOAD_ACCEPT};

use crate::components::toast::use_toast;

/// Spreadsheet upload that creates accounts in bulk.
#[component]
pub fn BulkUpload() -> impl IntoView {
    let fileInput = NodeRef::<Input>::new();
    #[allow(unused_variables)]
    let (fileName, setFileName) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (uploading, setUploading) = signal(false);
    #[allow(unused_variables)]
    let (result, setResult) = signal(Option::<BulkUploadResult>::None);
    #[allow(unused_variables)]
    let toast = use_toast();

    let downloadTemplate = move |_| {
        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            use mind_types::admin::TEMPLATE_FILENAME;

            use crate::api::{self, download::save_file};

            let saved = match api::csv_template().await {
                Ok(bytes) => save_file(
                    &bytes,
                    TEMPLATE_FILENAME,
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                ),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = saved {
                leptos::logging::error!("template download failed: {e}");
                toast.error("Failed to download the template.");
            }
        });
    };

    let onFileChange = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = fileInput
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            setFileName.set(name);
            setResult.set(None);
        }
    };

    let upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use mind_types::is_bulk_upload_file;

            let Some(input) = fileInput.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                toast.error("Choose a file first.");
                return;
            };
            if !is_bulk_upload_file(&file.name()) {
                toast.error("Only .csv, .xlsx and .xls files are accepted.");
                return;
            }

            setUploading.set(true);
            setResult.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::bulk_upload(&file).await {
                    Ok(outcome) => {
                        if outcome.fully_succeeded() {
                            toast.success(format!("Registered {} users.", outcome.success_count));
                            input.set_value("");
                            setFileName.set(None);
                        }
                        setResult.set(Some(outcome));
                    }
                    Err(e) => toast.error(e.user_message("Upload failed.")),
                }
                setUploading.set(false);
            });
        }
    };

    view! {
        <section class="card bulk-upload">
            <div class="card-header">
                <div class="card-title">"Bulk registration (Excel / CSV)"</div>
                <button type="button" class="btn btn-secondary" on:click=downloadTemplate>
                    "Download template"
                </button>
            </div>

            <ol class="instructions">
                <li>"Download the Excel template."</li>
                <li>"Fill in the school or company sheet, keeping the key row intact."</li>
                <li>"Full name and email are required for every row."</li>
                <li>"Save as Excel or CSV and upload it here."</li>
            </ol>

            <div class="upload-row">
                <label class="file-label">
                    <input
                        type="file"
                        accept=BULK_UPLOAD_ACCEPT
                        node_ref=fileInput
                        prop:disabled=uploading
                        on:change=onFileChange
                    />
                    <span>{move || fileName.get().unwrap_or_else(|| "Choose an Excel or CSV file".into())}</span>
                </label>
                <button
                    type="button"
                    class="btn btn-primary"
                    prop:disabled=move || uploading.get() || fileName.get().is_none()
                    on:click=upload
                >
                    {move || if uploading.get() { "Uploading..." } else { "Register users" }}
                </button>
            </div>

            {move || result.get().map(|outcome| view! { <UploadReport outcome /> })}
        </section>
    }
}

#[component]
fn UploadReport(outcome: BulkUploadResult) -> impl IntoView {
    let hasErrors = !outcome.errors.is_empty();

    view! {
        <div class="upload-result">
            <div class="result-summary">
                <div class="result-card success">
                    <span class="result-label">"Succeeded"</span>
                    <span class="result-number">{outcome.success_count}</span>
                </div>
                <div class="result-card error">
                    <span class="result-label">"Failed"</span>
                    <span class="result-number">{outcome.error_count}</span>
                </div>
            </div>
            {hasErrors
                .then(|| {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Row"</th>
                                    <th>"Email"</th>
                                    <th>"Error"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {outcome
                                    .errors
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.row}</td>
                                                <td>{row.email.unwrap_or_else(|| "-".into())}</td>
                                                <td>{row.error}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                })}
        </div>
    }
}
