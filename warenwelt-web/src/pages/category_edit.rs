use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::hooks::use_navigator;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::forms::category::{CategoryDraft, CategoryFormErrors};
use crate::forms::validation::ValidationError;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct CategoryEditPageProps {
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(CategoryEditPage)]
pub fn category_edit_page(props: &CategoryEditPageProps) -> Html {
    let (i18n, _) = use_translation();
    let navigator = use_navigator();

    let draft = use_state(CategoryDraft::default);
    let field_errors = use_state(CategoryFormErrors::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let draft = draft.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.get_product_category(id).await {
                        Ok(category) => draft.set(CategoryDraft::from_category(&category)),
                        Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                    }
                });
            }
            || ()
        });
    }

    let on_name_change = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(CategoryDraft {
                    name: input.value(),
                });
            }
        })
    };

    let onsubmit = {
        let id = props.id;
        let draft = draft.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let busy = busy.clone();
        let navigator = navigator;
        let save_failed = i18n.t("error.save_failed");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let draft_value = (*draft).clone();
            let field_errors = field_errors.clone();
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let save_failed = save_failed.clone();
            match id {
                None => match draft_value.validate() {
                    Ok(payload) => {
                        field_errors.set(CategoryFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.create_product_category(&payload).await {
                                Ok(_) => {
                                    if let Some(nav) = navigator {
                                        nav.push(&Route::ProductCategories);
                                    }
                                }
                                Err(err) => {
                                    error.set(Some(format!("{save_failed}: {err}")));
                                }
                            }
                            busy.set(false);
                        });
                    }
                    Err(errors) => field_errors.set(errors),
                },
                Some(id) => match draft_value.validate_update() {
                    Ok(payload) => {
                        field_errors.set(CategoryFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.update_product_category(id, &payload).await {
                                Ok(_) => {
                                    if let Some(nav) = navigator {
                                        nav.push(&Route::ProductCategories);
                                    }
                                }
                                Err(err) => {
                                    error.set(Some(format!("{save_failed}: {err}")));
                                }
                            }
                            busy.set(false);
                        });
                    }
                    Err(errors) => field_errors.set(errors),
                },
            }
        })
    };

    let field_error = |slot: Option<ValidationError>| -> Html {
        slot.map_or_else(
            || html! {},
            |err| {
                html! {
                    <label class="label">
                        <span class="label-text-alt text-error">{ i18n.t(err.message_key()) }</span>
                    </label>
                }
            },
        )
    };

    let title_key = if props.id.is_some() {
        "categories.edit"
    } else {
        "categories.new"
    };

    html! {
        <div class="p-4 max-w-md mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t(title_key) }</h1>

            <ErrorAlert message={(*error).clone()} />

            <form class="card bg-base-200 shadow-xl" onsubmit={onsubmit}>
                <div class="card-body space-y-2">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{ i18n.t("categories.name") }</span>
                        </label>
                        <input
                            class="input input-bordered"
                            type="text"
                            value={draft.name.clone()}
                            oninput={on_name_change}
                        />
                        { field_error(field_errors.name) }
                    </div>

                    <div class="card-actions justify-end mt-4">
                        <Link<Route> to={Route::ProductCategories} classes="btn btn-ghost">
                            { i18n.t("common.cancel") }
                        </Link<Route>>
                        <button class="btn btn-primary" type="submit" disabled={*busy}>
                            if *busy {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("common.save") }
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
