use chrono::{Datelike, NaiveDate, Utc};
use i18nrs::yew::use_translation;
use shared::models::{DailySummaryReport, PaymentMethodSummary, PeriodSummaryReport};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::files;

/// Which aggregation window the user is looking at.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ReportTab {
    Daily,
    Weekly,
    Monthly,
}

/// Maps the serialized payment method of a report row onto a label key.
fn payment_method_key(raw: &str) -> Option<&'static str> {
    match raw {
        "CASH" => Some("pos.payment_cash"),
        "CARD" => Some("pos.payment_card"),
        "VOUCHER" => Some("pos.payment_voucher"),
        "MIXED" => Some("pos.payment_mixed"),
        _ => None,
    }
}

#[function_component(SalesSummaryPage)]
pub fn sales_summary_page() -> Html {
    let (i18n, _) = use_translation();
    let today = Utc::now().date_naive();
    let tab = use_state_eq(|| ReportTab::Daily);
    let date = use_state(|| today.format("%Y-%m-%d").to_string());
    let year = use_state(|| today.year().to_string());
    let month = use_state(|| today.month().to_string());
    let daily = use_state(|| None::<DailySummaryReport>);
    let period = use_state(|| None::<PeriodSummaryReport>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let select_tab = {
        let tab = tab.clone();
        let daily = daily.clone();
        let period = period.clone();
        move |next: ReportTab| -> Callback<MouseEvent> {
            let tab = tab.clone();
            let daily = daily.clone();
            let period = period.clone();
            Callback::from(move |_| {
                tab.set(next);
                daily.set(None);
                period.set(None);
            })
        }
    };

    let edit_value = {
        move |target: UseStateHandle<String>| -> Callback<InputEvent> {
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    target.set(input.value());
                }
            })
        }
    };

    let on_load = {
        let tab = tab.clone();
        let date = date.clone();
        let year = year.clone();
        let month = month.clone();
        let daily = daily.clone();
        let period = period.clone();
        let error = error.clone();
        let busy = busy.clone();
        let load_failed = i18n.t("error.load_failed");
        Callback::from(move |_: MouseEvent| {
            let current_tab = *tab;
            let daily = daily.clone();
            let period = period.clone();
            let error = error.clone();
            let busy = busy.clone();
            let load_failed = load_failed.clone();

            match current_tab {
                ReportTab::Daily | ReportTab::Weekly => {
                    let Ok(report_date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
                        return;
                    };
                    busy.set(true);
                    spawn_local(async move {
                        let client = ApiClient::shared();
                        if current_tab == ReportTab::Daily {
                            match client.get_daily_summary_report(report_date).await {
                                Ok(report) => {
                                    daily.set(Some(report));
                                    period.set(None);
                                    error.set(None);
                                }
                                Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                            }
                        } else {
                            match client.get_weekly_summary_report(report_date).await {
                                Ok(report) => {
                                    period.set(Some(report));
                                    daily.set(None);
                                    error.set(None);
                                }
                                Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                            }
                        }
                        busy.set(false);
                    });
                }
                ReportTab::Monthly => {
                    let (Ok(year_value), Ok(month_value)) =
                        (year.parse::<i32>(), month.parse::<u32>())
                    else {
                        return;
                    };
                    if !(1..=12).contains(&month_value) {
                        return;
                    }
                    busy.set(true);
                    spawn_local(async move {
                        let client = ApiClient::shared();
                        match client.get_monthly_summary_report(year_value, month_value).await {
                            Ok(report) => {
                                period.set(Some(report));
                                daily.set(None);
                                error.set(None);
                            }
                            Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                        }
                        busy.set(false);
                    });
                }
            }
        })
    };

    let on_download = {
        let tab = tab.clone();
        let date = date.clone();
        let year = year.clone();
        let month = month.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        Callback::from(move |_: MouseEvent| {
            let current_tab = *tab;
            let error = error.clone();
            let load_failed = load_failed.clone();

            match current_tab {
                ReportTab::Daily => {
                    let Ok(report_date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
                        return;
                    };
                    spawn_local(async move {
                        let client = ApiClient::shared();
                        match client.download_daily_summary_csv(report_date).await {
                            Ok(bytes) => {
                                let file_name = format!("tagesumsatz-{report_date}.csv");
                                if let Err(err) =
                                    files::save_bytes_as_file(&file_name, &bytes, "text/csv")
                                {
                                    error.set(Some(format!("{load_failed}: {err:?}")));
                                }
                            }
                            Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                        }
                    });
                }
                ReportTab::Monthly => {
                    let (Ok(year_value), Ok(month_value)) =
                        (year.parse::<i32>(), month.parse::<u32>())
                    else {
                        return;
                    };
                    spawn_local(async move {
                        let client = ApiClient::shared();
                        match client.download_monthly_summary_csv(year_value, month_value).await {
                            Ok(bytes) => {
                                let file_name =
                                    format!("monatsumsatz-{year_value}-{month_value:02}.csv");
                                if let Err(err) =
                                    files::save_bytes_as_file(&file_name, &bytes, "text/csv")
                                {
                                    error.set(Some(format!("{load_failed}: {err:?}")));
                                }
                            }
                            Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                        }
                    });
                }
                ReportTab::Weekly => {}
            }
        })
    };

    let payment_table = |rows: &[PaymentMethodSummary]| -> Html {
        html! {
            <div class="overflow-x-auto">
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>{ i18n.t("pos.payment_method") }</th>
                            <th class="text-right">{ i18n.t("reports.total_amount") }</th>
                            <th class="text-right">{ i18n.t("reports.transactions") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|row| {
                            let label = payment_method_key(&row.payment_method)
                                .map_or_else(|| row.payment_method.clone(), |key| i18n.t(key));
                            html! {
                                <tr key={row.payment_method.clone()}>
                                    <td>{ label }</td>
                                    <td class="text-right">{ format!("{:.2} €", row.total_amount) }</td>
                                    <td class="text-right">{ row.transaction_count }</td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    let tab_class = |candidate: ReportTab| -> Classes {
        classes!("tab", (*tab == candidate).then_some("tab-active"))
    };

    let csv_available = matches!(*tab, ReportTab::Daily if daily.is_some())
        || matches!(*tab, ReportTab::Monthly if period.is_some());

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("reports.title") }</h1>

            <div class="tabs tabs-boxed w-fit">
                <a class={tab_class(ReportTab::Daily)} onclick={select_tab(ReportTab::Daily)}>
                    { i18n.t("reports.daily") }
                </a>
                <a class={tab_class(ReportTab::Weekly)} onclick={select_tab(ReportTab::Weekly)}>
                    { i18n.t("reports.weekly") }
                </a>
                <a class={tab_class(ReportTab::Monthly)} onclick={select_tab(ReportTab::Monthly)}>
                    { i18n.t("reports.monthly") }
                </a>
            </div>

            <ErrorAlert message={(*error).clone()} />

            <div class="flex flex-wrap items-end gap-2">
                if *tab == ReportTab::Monthly {
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{ i18n.t("reports.year") }</span>
                        </label>
                        <input
                            class="input input-bordered w-28"
                            type="number"
                            value={(*year).clone()}
                            oninput={edit_value(year.clone())}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{ i18n.t("reports.month") }</span>
                        </label>
                        <input
                            class="input input-bordered w-24"
                            type="number"
                            min="1"
                            max="12"
                            value={(*month).clone()}
                            oninput={edit_value(month.clone())}
                        />
                    </div>
                } else {
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">
                                { if *tab == ReportTab::Weekly {
                                    i18n.t("reports.week_of")
                                } else {
                                    i18n.t("reports.date")
                                } }
                            </span>
                        </label>
                        <input
                            class="input input-bordered"
                            type="date"
                            value={(*date).clone()}
                            oninput={edit_value(date.clone())}
                        />
                    </div>
                }
                <button class="btn btn-primary" disabled={*busy} onclick={on_load}>
                    if *busy {
                        <span class="loading loading-spinner loading-sm"></span>
                    }
                    { i18n.t("reports.load") }
                </button>
                if csv_available {
                    <button class="btn btn-outline" onclick={on_download}>
                        { i18n.t("common.download_csv") }
                    </button>
                }
            </div>

            if let Some(report) = &*daily {
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body space-y-2">
                        <div class="stats shadow">
                            <div class="stat">
                                <div class="stat-title">{ i18n.t("reports.total_amount") }</div>
                                <div class="stat-value text-primary">
                                    { format!("{:.2} €", report.overall_total_amount) }
                                </div>
                                <div class="stat-desc">
                                    { report.report_date.format("%d.%m.%Y").to_string() }
                                </div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{ i18n.t("reports.transactions") }</div>
                                <div class="stat-value">{ report.overall_transaction_count }</div>
                            </div>
                        </div>
                        <h2 class="text-lg font-semibold">{ i18n.t("reports.by_payment_method") }</h2>
                        { payment_table(&report.summary_by_payment_method) }
                    </div>
                </div>
            }

            if let Some(report) = &*period {
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body space-y-2">
                        <div class="stats shadow">
                            <div class="stat">
                                <div class="stat-title">{ i18n.t("reports.total_amount") }</div>
                                <div class="stat-value text-primary">
                                    { format!("{:.2} €", report.overall_total_amount) }
                                </div>
                                <div class="stat-desc">
                                    { format!(
                                        "{}: {} - {}",
                                        i18n.t("reports.period"),
                                        report.start_date.format("%d.%m.%Y"),
                                        report.end_date.format("%d.%m.%Y"),
                                    ) }
                                </div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{ i18n.t("reports.transactions") }</div>
                                <div class="stat-value">{ report.overall_transaction_count }</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">{ i18n.t("reports.commission_paid") }</div>
                                <div class="stat-value">
                                    { format!("{:.2} €", report.total_commission_paid_to_suppliers) }
                                </div>
                            </div>
                        </div>
                        <h2 class="text-lg font-semibold">{ i18n.t("reports.by_payment_method") }</h2>
                        { payment_table(&report.summary_by_payment_method) }
                    </div>
                </div>
            }
        </div>
    }
}
