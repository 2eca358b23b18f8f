use chrono::Utc;
use i18nrs::yew::use_translation;
use shared::models::DailySummaryReport;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_icons::{Icon, IconId};
use yew_router::components::Link;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::routes::Route;

/// Landing page: today's till numbers plus one card per back-office area.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let summary = use_state(|| None::<DailySummaryReport>);
    let error = use_state(|| None::<String>);

    {
        let summary = summary.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                let today = Utc::now().date_naive();
                match client.get_daily_sales_summary(today).await {
                    Ok(report) => summary.set(Some(report)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let card = |route: Route, icon: IconId| -> Html {
        let label = route.nav_key().map(|key| i18n.t(key)).unwrap_or_default();
        html! {
            <Link<Route>
                to={route}
                classes="card bg-base-200 shadow-xl hover:bg-base-300 transition-colors"
            >
                <div class="card-body items-center text-center">
                    <Icon icon_id={icon} class="w-8 h-8" />
                    <h2 class="card-title text-base">{ label }</h2>
                </div>
            </Link<Route>>
        }
    };

    let cards = [
        (Route::Pos, IconId::HeroiconsOutlineShoppingCart),
        (Route::Products, IconId::HeroiconsOutlineArchiveBox),
        (Route::PriceTagPrint, IconId::HeroiconsOutlineTag),
        (Route::Suppliers, IconId::HeroiconsOutlineUserGroup),
        (Route::Payouts, IconId::HeroiconsOutlineBanknotes),
        (Route::SalesSummaryReport, IconId::HeroiconsOutlineChartBar),
        (Route::RevenueReport, IconId::HeroiconsOutlineTableCells),
        (Route::ProductCategories, IconId::HeroiconsOutlineFolder),
        (Route::Shelves, IconId::HeroiconsOutlineBuildingStorefront),
        (Route::RentalContracts, IconId::HeroiconsOutlineDocumentText),
        (Route::DataImport, IconId::HeroiconsOutlineArrowUpTray),
    ];

    let revenue_text = (*summary).as_ref().map_or_else(
        || "–".to_string(),
        |report| format!("{:.2} €", report.overall_total_amount),
    );
    let transaction_text = (*summary).as_ref().map_or_else(
        || "–".to_string(),
        |report| report.overall_transaction_count.to_string(),
    );
    let date_text = (*summary).as_ref().map_or_else(String::new, |report| {
        report.report_date.format("%d.%m.%Y").to_string()
    });
    let error_message = (*error)
        .as_ref()
        .map(|message| format!("{}: {message}", i18n.t("error.load_failed")));

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("dashboard.title") }</h1>

            <ErrorAlert message={error_message} />

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineBanknotes} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.today_revenue") }</div>
                    <div class="stat-value text-primary">{ revenue_text }</div>
                    <div class="stat-desc">{ date_text.clone() }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.today_transactions") }</div>
                    <div class="stat-value text-secondary">{ transaction_text }</div>
                    <div class="stat-desc">{ date_text }</div>
                </div>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                { for cards.into_iter().map(|(route, icon)| card(route, icon)) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    use crate::config::FrontendConfig;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    #[allow(dead_code)] // WASM tests may not be run in regular test suite
    fn test_dashboard_uses_configured_api_base() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
        assert!(config.api_base_url().starts_with("http"));
    }
}
