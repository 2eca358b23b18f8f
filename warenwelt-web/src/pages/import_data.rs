use i18nrs::yew::use_translation;
use shared::models::ImportResult;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::files;

/// Which CSV format a card accepts.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ImportKind {
    Suppliers,
    Products,
}

#[derive(Properties, PartialEq)]
struct ImportCardProps {
    kind: ImportKind,
}

#[function_component(ImportCard)]
fn import_card(props: &ImportCardProps) -> Html {
    let (i18n, _) = use_translation();
    let kind = props.kind;
    let file = use_state(|| None::<web_sys::File>);
    let result = use_state(|| None::<ImportResult>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_file_change = {
        let file = file.clone();
        Callback::from(move |event: Event| {
            let picked = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|list| list.item(0));
            file.set(picked);
        })
    };

    let on_upload = {
        let file = file.clone();
        let result = result.clone();
        let error = error.clone();
        let busy = busy.clone();
        let save_failed = i18n.t("error.save_failed");
        Callback::from(move |_: MouseEvent| {
            let Some(picked) = (*file).clone() else {
                return;
            };
            let result = result.clone();
            let error = error.clone();
            let busy = busy.clone();
            let save_failed = save_failed.clone();
            busy.set(true);
            spawn_local(async move {
                let bytes = match files::read_file_bytes(&picked).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        error.set(Some(format!("{save_failed}: {err:?}")));
                        busy.set(false);
                        return;
                    }
                };
                let client = ApiClient::shared();
                let outcome = match kind {
                    ImportKind::Suppliers => {
                        client.import_suppliers_csv(picked.name(), bytes).await
                    }
                    ImportKind::Products => client.import_products_csv(picked.name(), bytes).await,
                };
                match outcome {
                    Ok(summary) => {
                        result.set(Some(summary));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{save_failed}: {err}"))),
                }
                busy.set(false);
            });
        })
    };

    let title_key = match kind {
        ImportKind::Suppliers => "import.suppliers",
        ImportKind::Products => "import.products",
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body space-y-2">
                <h2 class="card-title">{ i18n.t(title_key) }</h2>

                <ErrorAlert message={(*error).clone()} />

                <div class="flex flex-wrap items-center gap-2">
                    <input
                        class="file-input file-input-bordered grow"
                        type="file"
                        accept=".csv"
                        onchange={on_file_change}
                    />
                    <button
                        class="btn btn-primary"
                        disabled={file.is_none() || *busy}
                        onclick={on_upload}
                    >
                        if *busy {
                            <span class="loading loading-spinner loading-sm"></span>
                        }
                        { i18n.t("import.upload") }
                    </button>
                </div>

                if let Some(summary) = &*result {
                    <div class="flex gap-2">
                        <div class="badge badge-success gap-1">
                            { format!("{}: {}", i18n.t("import.imported"), summary.imported_count) }
                        </div>
                        <div class="badge badge-warning gap-1">
                            { format!("{}: {}", i18n.t("import.skipped"), summary.skipped_count) }
                        </div>
                    </div>

                    if !summary.errors.is_empty() {
                        <div class="overflow-x-auto">
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>{ i18n.t("import.row") }</th>
                                        <th>{ i18n.t("import.errors") }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for summary.errors.iter().map(|row_error| html! {
                                        <tr key={row_error.row}>
                                            <td>{ row_error.row }</td>
                                            <td>{ row_error.message.clone() }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }
                }
            </div>
        </div>
    }
}

#[function_component(ImportDataPage)]
pub fn import_data_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("import.title") }</h1>
            <div class="grid gap-4 lg:grid-cols-2">
                <ImportCard kind={ImportKind::Suppliers} />
                <ImportCard kind={ImportKind::Products} />
            </div>
        </div>
    }
}
