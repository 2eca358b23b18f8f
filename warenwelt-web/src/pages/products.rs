use i18nrs::yew::use_translation;
use shared::models::{ProductRead, ProductStatus, ProductType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::routes::Route;

pub(super) fn type_key(product_type: ProductType) -> &'static str {
    match product_type {
        ProductType::Commission => "products.type_commission",
        ProductType::NewWare => "products.type_new_ware",
    }
}

pub(super) fn status_key(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::InStock => "products.status_in_stock",
        ProductStatus::Sold => "products.status_sold",
        ProductStatus::Returned => "products.status_returned",
        ProductStatus::Donated => "products.status_donated",
        ProductStatus::Reserved => "products.status_reserved",
    }
}

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let (i18n, _) = use_translation();
    let products = use_state(Vec::<ProductRead>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let products = products.clone();
        let loading = loading.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_products().await {
                    Ok(list) => products.set(list),
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let products = products.clone();
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
            let products = products.clone();
            let error = error.clone();
            let delete_failed = delete_failed.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.delete_product(id).await {
                    Ok(()) => {
                        let mut next = (*products).clone();
                        next.retain(|product| product.id != id);
                        products.set(next);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{delete_failed}: {err}"))),
                }
            });
        })
    };

    let rows = products.iter().map(|product| {
        let id = product.id;
        let on_delete = on_delete.clone();
        html! {
            <tr key={id}>
                <td class="font-mono">{ product.sku.clone() }</td>
                <td>{ product.name.clone() }</td>
                <td>{ product.supplier.display_name() }</td>
                <td class="text-right">{ format!("{:.2} €", product.selling_price) }</td>
                <td>{ i18n.t(type_key(product.product_type)) }</td>
                <td>
                    <span class="badge badge-outline">{ i18n.t(status_key(product.status)) }</span>
                </td>
                <td class="space-x-2">
                    <Link<Route> to={Route::ProductEdit { id }} classes="btn btn-sm btn-outline">
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
                <h1 class="text-2xl font-bold">{ i18n.t("products.title") }</h1>
                <div class="space-x-2">
                    <Link<Route> to={Route::PriceTagPrint} classes="btn btn-outline">
                        { i18n.t("nav.price_tags") }
                    </Link<Route>>
                    <Link<Route> to={Route::ProductNew} classes="btn btn-primary">
                        { i18n.t("products.new") }
                    </Link<Route>>
                </div>
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
                                <th>{ i18n.t("products.sku") }</th>
                                <th>{ i18n.t("products.name") }</th>
                                <th>{ i18n.t("products.supplier") }</th>
                                <th class="text-right">{ i18n.t("products.selling_price") }</th>
                                <th>{ i18n.t("products.type") }</th>
                                <th>{ i18n.t("products.status") }</th>
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
