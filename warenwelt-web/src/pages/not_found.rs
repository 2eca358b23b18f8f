use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::components::Link;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-base-200 space-y-4">
            <h1 class="text-6xl font-bold">{ "404" }</h1>
            <p class="text-lg">{ i18n.t("not_found.title") }</p>
            <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                { i18n.t("not_found.back") }
            </Link<Route>>
        </div>
    }
}
