use i18nrs::yew::use_translation;
use shared::models::SupplierRead;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::routes::Route;

#[function_component(SuppliersPage)]
pub fn suppliers_page() -> Html {
    let (i18n, _) = use_translation();
    let suppliers = use_state(Vec::<SupplierRead>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let suppliers = suppliers.clone();
        let loading = loading.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_suppliers().await {
                    Ok(list) => suppliers.set(list),
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let suppliers = suppliers.clone();
        let error = error.clone();
        let confirm_label = i18n.t("common.confirm_delete");
        let delete_failed = i18n.t("error.delete_failed");
        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .map(|window| window.confirm_with_message(&confirm_label).unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let suppliers = suppliers.clone();
            let error = error.clone();
            let delete_failed = delete_failed.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.delete_supplier(id).await {
                    Ok(()) => {
                        let mut next = (*suppliers).clone();
                        next.retain(|supplier| supplier.id != id);
                        suppliers.set(next);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{delete_failed}: {err}"))),
                }
            });
        })
    };

    let rows = suppliers.iter().map(|supplier| {
        let id = supplier.id;
        let on_delete = on_delete.clone();
        html! {
            <tr key={id}>
                <td>{ supplier.supplier_number.clone() }</td>
                <td>{ supplier.display_name() }</td>
                <td>{ supplier.email.clone().unwrap_or_default() }</td>
                <td>
                    if supplier.is_internal {
                        <span class="badge badge-info">{ i18n.t("suppliers.internal") }</span>
                    }
                </td>
                <td class="space-x-2">
                    <Link<Route> to={Route::SupplierEdit { id }} classes="btn btn-sm btn-outline">
                        { i18n.t("common.edit") }
                    </Link<Route>>
                    <button
                        class="btn btn-sm btn-outline btn-error"
                        onclick={Callback::from(move |_| on_delete.emit(id))}
                    >
                        { i18n.t("common.delete") }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ i18n.t("suppliers.title") }</h1>
                <Link<Route> to={Route::SupplierNew} classes="btn btn-primary">
                    { i18n.t("suppliers.new") }
                </Link<Route>>
            </div>

            <ErrorAlert message={(*error).clone()} />

            if *loading {
                <div class="flex justify-center p-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ i18n.t("suppliers.number") }</th>
                                <th>{ i18n.t("suppliers.name") }</th>
                                <th>{ i18n.t("suppliers.email") }</th>
                                <th></th>
                                <th>{ i18n.t("common.actions") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
