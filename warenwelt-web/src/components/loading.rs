use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center gap-3">
                <div class="text-xl font-medium">{"Warenwelt"}</div>
                <div class="flex items-center gap-2">
                    <span class="loading loading-spinner loading-md"></span>
                    <span>{ i18n.t("common.loading") }</span>
                </div>
            </div>
        </div>
    }
}
