use i18nrs::yew::use_translation;
use shared::models::{PayoutCreate, PayoutRead, SupplierPayoutSummary, SupplierRead};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::components::ErrorAlert;
use crate::forms::validation::optional_trimmed;

#[function_component(PayoutsPage)]
pub fn payouts_page() -> Html {
    let (i18n, _) = use_translation();
    let suppliers = use_state(Vec::<SupplierRead>::new);
    let selected_supplier = use_state(String::new);
    let summary = use_state(|| None::<SupplierPayoutSummary>);
    let notes = use_state(String::new);
    let history = use_state(Vec::<PayoutRead>::new);
    let created = use_state(|| None::<PayoutRead>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let suppliers = suppliers.clone();
        let history = history.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                let loaded = async {
                    let supplier_list = client.list_suppliers().await?;
                    let payout_list = client.list_payouts().await?;
                    Ok::<_, ApiError>((supplier_list, payout_list))
                }
                .await;
                match loaded {
                    Ok((supplier_list, payout_list)) => {
                        suppliers.set(supplier_list);
                        history.set(payout_list);
                    }
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
            });
            || ()
        });
    }

    let on_supplier_change = {
        let selected_supplier = selected_supplier.clone();
        let summary = summary.clone();
        let created = created.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                selected_supplier.set(select.value());
                summary.set(None);
                created.set(None);
            }
        })
    };

    let on_check = {
        let selected_supplier = selected_supplier.clone();
        let summary = summary.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        Callback::from(move |_: MouseEvent| {
            let Ok(supplier_id) = (*selected_supplier).parse::<i64>() else {
                return;
            };
            let summary = summary.clone();
            let error = error.clone();
            let load_failed = load_failed.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.get_payout_summary(supplier_id).await {
                    Ok(result) => {
                        summary.set(Some(result));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
            });
        })
    };

    let on_notes_change = {
        let notes = notes.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                notes.set(input.value());
            }
        })
    };

    let on_create = {
        let summary = summary.clone();
        let notes = notes.clone();
        let history = history.clone();
        let created = created.clone();
        let error = error.clone();
        let busy = busy.clone();
        let save_failed = i18n.t("error.save_failed");
        Callback::from(move |_: MouseEvent| {
            let Some(current) = (*summary).clone() else {
                return;
            };
            let payload = PayoutCreate {
                supplier_id: current.supplier_id,
                payout_date: None,
                notes: optional_trimmed(&notes),
            };
            let summary = summary.clone();
            let notes = notes.clone();
            let history = history.clone();
            let created = created.clone();
            let error = error.clone();
            let busy = busy.clone();
            let save_failed = save_failed.clone();
            busy.set(true);
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.create_payout(&payload).await {
                    Ok(payout) => {
                        let mut next = (*history).clone();
                        next.insert(0, payout.clone());
                        history.set(next);
                        created.set(Some(payout));
                        summary.set(None);
                        notes.set(String::new());
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{save_failed}: {err}"))),
                }
                busy.set(false);
            });
        })
    };

    let preview_rows = (*summary).as_ref().map_or_else(Vec::new, |current| {
        current
            .items_preview
            .iter()
            .map(|item| {
                html! {
                    <tr key={item.product_id}>
                        <td class="font-mono">{ item.product_sku.clone() }</td>
                        <td>{ item.product_name.clone() }</td>
                        <td class="font-mono">{ item.sale_transaction_number.clone() }</td>
                        <td>{ item.sale_date.format("%d.%m.%Y").to_string() }</td>
                        <td class="text-right">{ format!("{:.2} €", item.commission_amount) }</td>
                    </tr>
                }
            })
            .collect()
    });

    let history_rows = history.iter().map(|payout| {
        html! {
            <tr key={payout.id}>
                <td class="font-mono">{ payout.payout_number.clone() }</td>
                <td>{ payout.supplier.display_name() }</td>
                <td>
                    { payout
                        .payout_date
                        .map(|date| date.format("%d.%m.%Y").to_string())
                        .unwrap_or_default() }
                </td>
                <td class="text-right">{ format!("{:.2} €", payout.total_amount) }</td>
                <td>{ payout.notes.clone().unwrap_or_default() }</td>
            </tr>
        }
    });

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("payouts.title") }</h1>

            if let Some(payout) = &*created {
                <div class="alert alert-success">
                    <span>
                        { format!(
                            "{} ({}, {:.2} €)",
                            i18n.t("payouts.created"),
                            payout.payout_number,
                            payout.total_amount,
                        ) }
                    </span>
                </div>
            }

            <ErrorAlert message={(*error).clone()} />

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body space-y-2">
                    <div class="flex flex-wrap items-end gap-2">
                        <div class="form-control grow">
                            <label class="label">
                                <span class="label-text">{ i18n.t("payouts.supplier") }</span>
                            </label>
                            <select class="select select-bordered" onchange={on_supplier_change}>
                                <option value="" selected={selected_supplier.is_empty()}>
                                    { i18n.t("common.choose") }
                                </option>
                                { for suppliers.iter().map(|supplier| {
                                    let value = supplier.id.to_string();
                                    html! {
                                        <option
                                            value={value.clone()}
                                            selected={*selected_supplier == value}
                                        >
                                            { supplier.display_name() }
                                        </option>
                                    }
                                }) }
                            </select>
                        </div>
                        <button
                            class="btn btn-outline"
                            disabled={selected_supplier.is_empty()}
                            onclick={on_check}
                        >
                            { i18n.t("payouts.check") }
                        </button>
                    </div>

                    if let Some(current) = &*summary {
                        <div class="stats shadow">
                            <div class="stat">
                                <div class="stat-title">{ i18n.t("payouts.total_due") }</div>
                                <div class="stat-value text-primary">
                                    { format!("{:.2} €", current.total_due) }
                                </div>
                                <div class="stat-desc">{ current.supplier_name.clone() }</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{ i18n.t("payouts.eligible_items") }</div>
                                <div class="stat-value">{ current.eligible_items_count }</div>
                            </div>
                        </div>

                        if current.eligible_items_count == 0 {
                            <p class="text-base-content/60">{ i18n.t("payouts.nothing_due") }</p>
                        } else {
                            <div class="overflow-x-auto">
                                <table class="table table-sm">
                                    <thead>
                                        <tr>
                                            <th>{ i18n.t("products.sku") }</th>
                                            <th>{ i18n.t("products.name") }</th>
                                            <th>{ i18n.t("payouts.sale") }</th>
                                            <th>{ i18n.t("reports.date") }</th>
                                            <th class="text-right">{ i18n.t("payouts.amount") }</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { for preview_rows.into_iter() }
                                    </tbody>
                                </table>
                            </div>

                            <div class="flex flex-wrap items-end gap-2">
                                <div class="form-control grow">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("payouts.notes") }</span>
                                    </label>
                                    <input
                                        class="input input-bordered"
                                        type="text"
                                        value={(*notes).clone()}
                                        oninput={on_notes_change}
                                    />
                                </div>
                                <button class="btn btn-primary" disabled={*busy} onclick={on_create}>
                                    if *busy {
                                        <span class="loading loading-spinner loading-sm"></span>
                                    }
                                    { i18n.t("payouts.create") }
                                </button>
                            </div>
                        }
                    }
                </div>
            </div>

            <h2 class="text-xl font-semibold">{ i18n.t("payouts.history") }</h2>
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ i18n.t("payouts.number") }</th>
                            <th>{ i18n.t("payouts.supplier") }</th>
                            <th>{ i18n.t("payouts.date") }</th>
                            <th class="text-right">{ i18n.t("common.total") }</th>
                            <th>{ i18n.t("payouts.notes") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for history_rows }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
