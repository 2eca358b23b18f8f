use chrono::{Datelike, NaiveDate, Utc};
use i18nrs::yew::use_translation;
use shared::models::RevenueListReport;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::files;

/// Maps the serialized product type of a report row onto a label key.
fn product_type_key(raw: &str) -> Option<&'static str> {
    match raw {
        "COMMISSION" => Some("products.type_commission"),
        "NEW_WARE" => Some("products.type_new_ware"),
        _ => None,
    }
}

#[function_component(RevenueListPage)]
pub fn revenue_list_page() -> Html {
    let (i18n, _) = use_translation();
    let today = Utc::now().date_naive();
    let month_begin = today.with_day(1).unwrap_or(today);
    let start = use_state(|| month_begin.format("%Y-%m-%d").to_string());
    let end = use_state(|| today.format("%Y-%m-%d").to_string());
    let report = use_state(|| None::<RevenueListReport>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let edit_value = {
        move |target: UseStateHandle<String>| -> Callback<InputEvent> {
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    target.set(input.value());
                }
            })
        }
    };

    let parse_range = {
        let start = start.clone();
        let end = end.clone();
        move || -> Option<(NaiveDate, NaiveDate)> {
            let start_date = NaiveDate::parse_from_str(&start, "%Y-%m-%d").ok()?;
            let end_date = NaiveDate::parse_from_str(&end, "%Y-%m-%d").ok()?;
            Some((start_date, end_date))
        }
    };

    let on_load = {
        let parse_range = parse_range.clone();
        let report = report.clone();
        let error = error.clone();
        let busy = busy.clone();
        let load_failed = i18n.t("error.load_failed");
        let range_invalid = i18n.t("form.errors.end_before_start");
        Callback::from(move |_: MouseEvent| {
            let Some((start_date, end_date)) = parse_range() else {
                return;
            };
            if end_date < start_date {
                error.set(Some(range_invalid.clone()));
                return;
            }
            let report = report.clone();
            let error = error.clone();
            let busy = busy.clone();
            let load_failed = load_failed.clone();
            busy.set(true);
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.get_revenue_list_report(start_date, end_date).await {
                    Ok(result) => {
                        report.set(Some(result));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
                busy.set(false);
            });
        })
    };

    let on_download = {
        let parse_range = parse_range.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        Callback::from(move |_: MouseEvent| {
            let Some((start_date, end_date)) = parse_range() else {
                return;
            };
            let error = error.clone();
            let load_failed = load_failed.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.download_revenue_list_csv(start_date, end_date).await {
                    Ok(bytes) => {
                        let file_name = format!("erloesliste-{start_date}-{end_date}.csv");
                        if let Err(err) = files::save_bytes_as_file(&file_name, &bytes, "text/csv")
                        {
                            error.set(Some(format!("{load_failed}: {err:?}")));
                        }
                    }
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
            });
        })
    };

    let by_type_table = |result: &RevenueListReport| -> Html {
        let mut rows: Vec<_> = result.summary_by_product_type.iter().collect();
        rows.sort_by(|left, right| left.0.cmp(right.0));
        html! {
            <div class="overflow-x-auto">
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>{ i18n.t("products.type") }</th>
                            <th class="text-right">{ i18n.t("revenue.gross") }</th>
                            <th class="text-right">{ i18n.t("revenue.items_sold") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|(raw_type, summary)| {
                            let label = product_type_key(raw_type)
                                .map_or_else(|| raw_type.clone(), |key| i18n.t(key));
                            html! {
                                <tr key={raw_type.clone()}>
                                    <td>{ label }</td>
                                    <td class="text-right">
                                        { format!("{:.2} €", summary.total_revenue) }
                                    </td>
                                    <td class="text-right">{ summary.item_count }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    let items_table = |result: &RevenueListReport| -> Html {
        html! {
            <div class="overflow-x-auto">
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>{ i18n.t("products.sku") }</th>
                            <th>{ i18n.t("products.name") }</th>
                            <th>{ i18n.t("products.type") }</th>
                            <th class="text-right">{ i18n.t("pos.quantity") }</th>
                            <th class="text-right">{ i18n.t("pos.price") }</th>
                            <th class="text-right">{ i18n.t("reports.total_amount") }</th>
                            <th>{ i18n.t("payouts.sale") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for result.revenue_items.iter().enumerate().map(|(index, item)| {
                            let label = product_type_key(&item.product_type)
                                .map_or_else(|| item.product_type.clone(), |key| i18n.t(key));
                            html! {
                                <tr key={index}>
                                    <td class="font-mono">{ item.product_sku.clone() }</td>
                                    <td>{ item.product_name.clone() }</td>
                                    <td>{ label }</td>
                                    <td class="text-right">{ item.quantity_sold }</td>
                                    <td class="text-right">
                                        { format!("{:.2} €", item.price_per_unit_at_sale) }
                                    </td>
                                    <td class="text-right">
                                        { format!("{:.2} €", item.total_gross_revenue_for_item) }
                                    </td>
                                    <td class="font-mono">{ item.transaction_number.clone() }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("revenue.title") }</h1>

            <ErrorAlert message={(*error).clone()} />

            <div class="flex flex-wrap items-end gap-2">
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{ i18n.t("revenue.start") }</span>
                    </label>
                    <input
                        class="input input-bordered"
                        type="date"
                        value={(*start).clone()}
                        oninput={edit_value(start.clone())}
                    />
                </div>
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{ i18n.t("revenue.end") }</span>
                    </label>
                    <input
                        class="input input-bordered"
                        type="date"
                        value={(*end).clone()}
                        oninput={edit_value(end.clone())}
                    />
                </div>
                <button class="btn btn-primary" disabled={*busy} onclick={on_load}>
                    if *busy {
                        <span class="loading loading-spinner loading-sm"></span>
                    }
                    { i18n.t("reports.load") }
                </button>
                if report.is_some() {
                    <button class="btn btn-outline" onclick={on_download}>
                        { i18n.t("revenue.datev_csv") }
                    </button>
                }
            </div>

            if let Some(result) = &*report {
                <div class="stats shadow">
                    <div class="stat">
                        <div class="stat-title">{ i18n.t("revenue.gross") }</div>
                        <div class="stat-value text-primary">
                            { format!("{:.2} €", result.total_gross_revenue_all_items) }
                        </div>
                        <div class="stat-desc">
                            { format!(
                                "{}: {} - {}",
                                i18n.t("reports.period"),
                                result.report_period_start_date.format("%d.%m.%Y"),
                                result.report_period_end_date.format("%d.%m.%Y"),
                            ) }
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{ i18n.t("revenue.items_sold") }</div>
                        <div class="stat-value">{ result.total_items_sold }</div>
                    </div>
                </div>

                <h2 class="text-lg font-semibold">{ i18n.t("revenue.by_type") }</h2>
                { by_type_table(result) }

                <h2 class="text-lg font-semibold">{ i18n.t("revenue.title") }</h2>
                { items_table(result) }
            }
        </div>
    }
}
