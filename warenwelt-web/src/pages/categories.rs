use i18nrs::yew::use_translation;
use shared::models::ProductCategoryRead;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::routes::Route;

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let (i18n, _) = use_translation();
    let categories = use_state(Vec::<ProductCategoryRead>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let categories = categories.clone();
        let loading = loading.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_product_categories().await {
                    Ok(list) => categories.set(list),
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let categories = categories.clone();
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
            let categories = categories.clone();
            let error = error.clone();
            let delete_failed = delete_failed.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.delete_product_category(id).await {
                    Ok(()) => {
                        let mut next = (*categories).clone();
                        next.retain(|category| category.id != id);
                        categories.set(next);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{delete_failed}: {err}"))),
                }
            });
        })
    };

    let rows = categories.iter().map(|category| {
        let id = category.id;
        let on_delete = on_delete.clone();
        html! {
            <tr key={id}>
                <td>{ category.name.clone() }</td>
                <td class="space-x-2">
                    <Link<Route> to={Route::ProductCategoryEdit { id }} classes="btn btn-sm btn-outline">
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
        <div class="p-4 max-w-2xl mx-auto space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ i18n.t("categories.title") }</h1>
                <Link<Route> to={Route::ProductCategoryNew} classes="btn btn-primary">
                    { i18n.t("categories.new") }
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
                                <th>{ i18n.t("categories.name") }</th>
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
