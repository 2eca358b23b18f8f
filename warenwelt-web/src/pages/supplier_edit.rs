use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::hooks::use_navigator;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::forms::supplier::{SupplierDraft, SupplierFormErrors};
use crate::forms::validation::ValidationError;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SupplierEditPageProps {
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(SupplierEditPage)]
pub fn supplier_edit_page(props: &SupplierEditPageProps) -> Html {
    let (i18n, _) = use_translation();
    let navigator = use_navigator();

    let draft = use_state(SupplierDraft::default);
    let field_errors = use_state(SupplierFormErrors::default);
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
                    match client.get_supplier(id).await {
                        Ok(supplier) => draft.set(SupplierDraft::from_supplier(&supplier)),
                        Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                    }
                });
            }
            || ()
        });
    }

    let edit_text = {
        let draft = draft.clone();
        move |apply: fn(&mut SupplierDraft, String)| -> Callback<InputEvent> {
            let draft = draft.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    let mut next = (*draft).clone();
                    apply(&mut next, input.value());
                    draft.set(next);
                }
            })
        }
    };

    let on_internal_change = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.is_internal = input.checked();
                draft.set(next);
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
            let current = (*draft).clone();
            let field_errors = field_errors.clone();
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let save_failed = save_failed.clone();
            match id {
                None => match current.validate() {
                    Ok(payload) => {
                        field_errors.set(SupplierFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.create_supplier(&payload).await {
                                Ok(_) => {
                                    if let Some(nav) = navigator {
                                        nav.push(&Route::Suppliers);
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
                Some(id) => match current.validate_update() {
                    Ok(payload) => {
                        field_errors.set(SupplierFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.update_supplier(id, &payload).await {
                                Ok(_) => {
                                    if let Some(nav) = navigator {
                                        nav.push(&Route::Suppliers);
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
        "suppliers.edit"
    } else {
        "suppliers.new"
    };

    html! {
        <div class="p-4 max-w-2xl mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t(title_key) }</h1>

            <ErrorAlert message={(*error).clone()} />

            <form class="card bg-base-200 shadow-xl" onsubmit={onsubmit}>
                <div class="card-body space-y-2">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{ i18n.t("suppliers.number") }</span>
                        </label>
                        <input
                            class="input input-bordered"
                            type="text"
                            value={draft.supplier_number.clone()}
                            oninput={edit_text(|draft, value| draft.supplier_number = value)}
                        />
                        { field_error(field_errors.supplier_number) }
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{ i18n.t("suppliers.company") }</span>
                            <span class="label-text-alt">{ i18n.t("suppliers.name_rule") }</span>
                        </label>
                        <input
                            class="input input-bordered"
                            type="text"
                            value={draft.company_name.clone()}
                            oninput={edit_text(|draft, value| draft.company_name = value)}
                        />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("suppliers.first_name") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="text"
                                value={draft.first_name.clone()}
                                oninput={edit_text(|draft, value| draft.first_name = value)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("suppliers.last_name") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="text"
                                value={draft.last_name.clone()}
                                oninput={edit_text(|draft, value| draft.last_name = value)}
                            />
                        </div>
                    </div>
                    { field_error(field_errors.name) }

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("suppliers.email") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="text"
                                value={draft.email.clone()}
                                oninput={edit_text(|draft, value| draft.email = value)}
                            />
                            { field_error(field_errors.email) }
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("suppliers.phone") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="text"
                                value={draft.phone.clone()}
                                oninput={edit_text(|draft, value| draft.phone = value)}
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="checkbox"
                                checked={draft.is_internal}
                                onchange={on_internal_change}
                            />
                            <span class="label-text">{ i18n.t("suppliers.internal") }</span>
                        </label>
                    </div>

                    <div class="card-actions justify-end mt-4">
                        <Link<Route> to={Route::Suppliers} classes="btn btn-ghost">
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
