use std::collections::HashSet;

use i18nrs::yew::use_translation;
use shared::models::{PriceTagData, ProductRead};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api::ApiClient;
use crate::components::ErrorAlert;

/// Lets the clerk pick products and renders printable price tags for them.
#[function_component(PriceTagPrintPage)]
pub fn price_tag_print_page() -> Html {
    let (i18n, _) = use_translation();
    let products = use_state(Vec::<ProductRead>::new);
    let selected = use_state(HashSet::<i64>::new);
    let tags = use_state(Vec::<PriceTagData>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let products = products.clone();
        let loading = loading.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                match ApiClient::shared().list_products().await {
                    Ok(list) => products.set(list),
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let toggle = {
        let selected = selected.clone();
        Callback::from(move |id: i64| {
            let mut next = (*selected).clone();
            if !next.insert(id) {
                next.remove(&id);
            }
            selected.set(next);
        })
    };

    let on_fetch = {
        let selected = selected.clone();
        let tags = tags.clone();
        let error = error.clone();
        let busy = busy.clone();
        let load_failed = i18n.t("error.load_failed");
        Callback::from(move |_: MouseEvent| {
            let mut ids: Vec<i64> = selected.iter().copied().collect();
            ids.sort_unstable();
            if ids.is_empty() {
                return;
            }
            let tags = tags.clone();
            let error = error.clone();
            let busy = busy.clone();
            let load_failed = load_failed.clone();
            busy.set(true);
            spawn_local(async move {
                let client = ApiClient::shared();
                let mut loaded = Vec::with_capacity(ids.len());
                for id in ids {
                    match client.get_price_tag_data(id).await {
                        Ok(tag) => loaded.push(tag),
                        Err(err) => {
                            error.set(Some(format!("{load_failed}: {err}")));
                            busy.set(false);
                            return;
                        }
                    }
                }
                tags.set(loaded);
                error.set(None);
                busy.set(false);
            });
        })
    };

    let on_print = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });

    let product_rows = products.iter().map(|product| {
        let id = product.id;
        let checked = selected.contains(&id);
        let onchange = {
            let toggle = toggle.clone();
            Callback::from(move |_: Event| toggle.emit(id))
        };
        html! {
            <tr key={id}>
                <td>
                    <input class="checkbox" type="checkbox" {checked} {onchange} />
                </td>
                <td class="font-mono">{ product.sku.clone() }</td>
                <td>{ product.name.clone() }</td>
                <td class="text-right">{ format!("{:.2} €", product.selling_price) }</td>
            </tr>
        }
    });

    let tag_cards = tags.iter().enumerate().map(|(index, tag)| {
        html! {
            <div key={index} class="card card-compact border border-base-300 bg-base-100">
                <div class="card-body items-center text-center">
                    <p class="font-semibold">{ tag.product_name.clone() }</p>
                    <p class="text-3xl font-bold">{ format!("{:.2} €", tag.selling_price) }</p>
                    <p class="font-mono text-sm">{ tag.sku.clone() }</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ i18n.t("price_tags.title") }</h1>
                <div class="flex gap-2">
                    <button
                        class="btn btn-primary"
                        disabled={selected.is_empty() || *busy}
                        onclick={on_fetch}
                    >
                        if *busy {
                            <span class="loading loading-spinner loading-sm"></span>
                        }
                        { i18n.t("price_tags.load") }
                    </button>
                    if !tags.is_empty() {
                        <button class="btn btn-outline" onclick={on_print}>
                            <Icon icon_id={IconId::HeroiconsOutlinePrinter} class="w-4 h-4" />
                            { i18n.t("price_tags.print") }
                        </button>
                    }
                </div>
            </div>

            <p class="text-base-content/60">{ i18n.t("price_tags.select_hint") }</p>

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
                                <th></th>
                                <th>{ i18n.t("products.sku") }</th>
                                <th>{ i18n.t("products.name") }</th>
                                <th class="text-right">{ i18n.t("products.selling_price") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for product_rows }
                        </tbody>
                    </table>
                </div>
            }

            if !tags.is_empty() {
                <div class="grid grid-cols-2 gap-4 md:grid-cols-3">
                    { for tag_cards }
                </div>
            }
        </div>
    }
}
