use std::str::FromStr;

use i18nrs::yew::use_translation;
use shared::models::{RentalContractRead, RentalContractStatus, ShelfRead, SupplierRead};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::components::ErrorAlert;
use crate::forms::rental_contract::{RentalContractDraft, RentalContractFormErrors};
use crate::forms::validation::ValidationError;

fn contract_status_key(status: RentalContractStatus) -> &'static str {
    match status {
        RentalContractStatus::Pending => "contracts.status_pending",
        RentalContractStatus::Active => "contracts.status_active",
        RentalContractStatus::Expired => "contracts.status_expired",
        RentalContractStatus::Terminated => "contracts.status_terminated",
    }
}

#[derive(Clone, PartialEq)]
struct ContractEditor {
    id: Option<i64>,
    draft: RentalContractDraft,
}

#[function_component(RentalContractsPage)]
pub fn rental_contracts_page() -> Html {
    let (i18n, _) = use_translation();
    let contracts = use_state(Vec::<RentalContractRead>::new);
    let shelves = use_state(Vec::<ShelfRead>::new);
    let suppliers = use_state(Vec::<SupplierRead>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let editor = use_state(|| None::<ContractEditor>);
    let field_errors = use_state(RentalContractFormErrors::default);
    let busy = use_state(|| false);

    {
        let contracts = contracts.clone();
        let shelves = shelves.clone();
        let suppliers = suppliers.clone();
        let loading = loading.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                let loaded = async {
                    let contract_list = client.list_rental_contracts().await?;
                    let shelf_list = client.list_shelves().await?;
                    let supplier_list = client.list_suppliers().await?;
                    Ok::<_, ApiError>((contract_list, shelf_list, supplier_list))
                }
                .await;
                match loaded {
                    Ok((contract_list, shelf_list, supplier_list)) => {
                        contracts.set(contract_list);
                        shelves.set(shelf_list);
                        suppliers.set(supplier_list);
                    }
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let open_new = {
        let editor = editor.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |_: MouseEvent| {
            field_errors.set(RentalContractFormErrors::default());
            editor.set(Some(ContractEditor {
                id: None,
                draft: RentalContractDraft::default(),
            }));
        })
    };

    let open_edit = {
        let editor = editor.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |contract: RentalContractRead| {
            field_errors.set(RentalContractFormErrors::default());
            editor.set(Some(ContractEditor {
                id: Some(contract.id),
                draft: RentalContractDraft::from_contract(&contract),
            }));
        })
    };

    let on_close = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.set(None))
    };

    let edit_text = {
        let editor = editor.clone();
        move |apply: fn(&mut RentalContractDraft, String)| -> Callback<InputEvent> {
            let editor = editor.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>()
                    && let Some(mut state) = (*editor).clone()
                {
                    apply(&mut state.draft, input.value());
                    editor.set(Some(state));
                }
            })
        }
    };

    let edit_select = {
        let editor = editor.clone();
        move |apply: fn(&mut RentalContractDraft, String)| -> Callback<Event> {
            let editor = editor.clone();
            Callback::from(move |event: Event| {
                if let Some(select) = event.target_dyn_into::<HtmlSelectElement>()
                    && let Some(mut state) = (*editor).clone()
                {
                    apply(&mut state.draft, select.value());
                    editor.set(Some(state));
                }
            })
        }
    };

    let on_save = {
        let editor = editor.clone();
        let field_errors = field_errors.clone();
        let contracts = contracts.clone();
        let error = error.clone();
        let busy = busy.clone();
        let save_failed = i18n.t("error.save_failed");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(state) = (*editor).clone() else {
                return;
            };
            let editor = editor.clone();
            let field_errors = field_errors.clone();
            let contracts = contracts.clone();
            let error = error.clone();
            let busy = busy.clone();
            let save_failed = save_failed.clone();
            match state.id {
                None => match state.draft.validate() {
                    Ok(payload) => {
                        field_errors.set(RentalContractFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.create_rental_contract(&payload).await {
                                Ok(created) => {
                                    let mut next = (*contracts).clone();
                                    next.push(created);
                                    contracts.set(next);
                                    editor.set(None);
                                    error.set(None);
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
                Some(id) => match state.draft.validate_update() {
                    Ok(payload) => {
                        field_errors.set(RentalContractFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.update_rental_contract(id, &payload).await {
                                Ok(updated) => {
                                    let mut next = (*contracts).clone();
                                    if let Some(slot) =
                                        next.iter_mut().find(|contract| contract.id == id)
                                    {
                                        *slot = updated;
                                    }
                                    contracts.set(next);
                                    editor.set(None);
                                    error.set(None);
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

    let on_delete = {
        let contracts = contracts.clone();
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
            let contracts = contracts.clone();
            let error = error.clone();
            let delete_failed = delete_failed.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.delete_rental_contract(id).await {
                    Ok(()) => {
                        let mut next = (*contracts).clone();
                        next.retain(|contract| contract.id != id);
                        contracts.set(next);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{delete_failed}: {err}"))),
                }
            });
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

    let rows = contracts.iter().map(|contract| {
        let id = contract.id;
        let on_delete = on_delete.clone();
        let on_edit = {
            let open_edit = open_edit.clone();
            let contract = contract.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(contract.clone()))
        };
        let shelf_name = contract
            .shelf
            .as_ref()
            .map_or_else(|| contract.shelf_id.to_string(), |shelf| shelf.name.clone());
        let tenant_name = contract.tenant.as_ref().map_or_else(
            || contract.tenant_supplier_id.to_string(),
            |tenant| tenant.display_name(),
        );
        html! {
            <tr key={id}>
                <td class="font-mono">{ contract.contract_number.clone().unwrap_or_default() }</td>
                <td>{ shelf_name }</td>
                <td>{ tenant_name }</td>
                <td>{ contract.start_date.format("%d.%m.%Y").to_string() }</td>
                <td>{ contract.end_date.format("%d.%m.%Y").to_string() }</td>
                <td class="text-right">{ format!("{:.2} €", contract.rent_price_at_signing) }</td>
                <td>
                    <span class="badge badge-outline">
                        { i18n.t(contract_status_key(contract.status)) }
                    </span>
                </td>
                <td class="space-x-2">
                    <button class="btn btn-sm btn-outline" onclick={on_edit}>
                        { i18n.t("common.edit") }
                    </button>
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
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{ i18n.t("contracts.title") }</h1>
                <button class="btn btn-primary" onclick={open_new}>
                    { i18n.t("contracts.new") }
                </button>
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
                                <th>{ i18n.t("contracts.number") }</th>
                                <th>{ i18n.t("contracts.shelf") }</th>
                                <th>{ i18n.t("contracts.tenant") }</th>
                                <th>{ i18n.t("contracts.start") }</th>
                                <th>{ i18n.t("contracts.end") }</th>
                                <th class="text-right">{ i18n.t("contracts.rent") }</th>
                                <th>{ i18n.t("contracts.status") }</th>
                                <th>{ i18n.t("common.actions") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows }
                        </tbody>
                    </table>
                </div>
            }

            if let Some(state) = &*editor {
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h3 class="font-bold text-lg">
                            {
                                if state.id.is_some() {
                                    i18n.t("contracts.edit")
                                } else {
                                    i18n.t("contracts.new")
                                }
                            }
                        </h3>
                        <form class="space-y-2" onsubmit={on_save}>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("contracts.shelf") }</span>
                                    </label>
                                    <select
                                        class="select select-bordered"
                                        onchange={edit_select(|draft, value| draft.shelf_id = value)}
                                    >
                                        <option value="" selected={state.draft.shelf_id.is_empty()}>
                                            { i18n.t("common.choose") }
                                        </option>
                                        { for shelves.iter().map(|shelf| {
                                            let value = shelf.id.to_string();
                                            html! {
                                                <option
                                                    value={value.clone()}
                                                    selected={state.draft.shelf_id == value}
                                                >
                                                    { shelf.name.clone() }
                                                </option>
                                            }
                                        }) }
                                    </select>
                                    { field_error(field_errors.shelf_id) }
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("contracts.tenant") }</span>
                                    </label>
                                    <select
                                        class="select select-bordered"
                                        onchange={edit_select(|draft, value| draft.tenant_supplier_id = value)}
                                    >
                                        <option value="" selected={state.draft.tenant_supplier_id.is_empty()}>
                                            { i18n.t("common.choose") }
                                        </option>
                                        { for suppliers.iter().map(|supplier| {
                                            let value = supplier.id.to_string();
                                            html! {
                                                <option
                                                    value={value.clone()}
                                                    selected={state.draft.tenant_supplier_id == value}
                                                >
                                                    { supplier.display_name() }
                                                </option>
                                            }
                                        }) }
                                    </select>
                                    { field_error(field_errors.tenant_supplier_id) }
                                </div>
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("contracts.start") }</span>
                                    </label>
                                    <input
                                        class="input input-bordered"
                                        type="date"
                                        value={state.draft.start_date.clone()}
                                        oninput={edit_text(|draft, value| draft.start_date = value)}
                                    />
                                    { field_error(field_errors.start_date) }
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("contracts.end") }</span>
                                    </label>
                                    <input
                                        class="input input-bordered"
                                        type="date"
                                        value={state.draft.end_date.clone()}
                                        oninput={edit_text(|draft, value| draft.end_date = value)}
                                    />
                                    { field_error(field_errors.end_date) }
                                </div>
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("contracts.rent") }</span>
                                    </label>
                                    <input
                                        class="input input-bordered"
                                        type="text"
                                        inputmode="decimal"
                                        value={state.draft.rent_price_at_signing.clone()}
                                        oninput={edit_text(|draft, value| draft.rent_price_at_signing = value)}
                                    />
                                    { field_error(field_errors.rent_price_at_signing) }
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("contracts.status") }</span>
                                    </label>
                                    <select
                                        class="select select-bordered"
                                        onchange={edit_select(|draft, value| {
                                            if let Ok(parsed) = RentalContractStatus::from_str(&value) {
                                                draft.status = parsed;
                                            }
                                        })}
                                    >
                                        { for RentalContractStatus::ALL.iter().map(|variant| html! {
                                            <option
                                                value={variant.as_str()}
                                                selected={state.draft.status == *variant}
                                            >
                                                { i18n.t(contract_status_key(*variant)) }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{ i18n.t("contracts.terms") }</span>
                                </label>
                                <input
                                    class="input input-bordered"
                                    type="text"
                                    value={state.draft.payment_terms.clone()}
                                    oninput={edit_text(|draft, value| draft.payment_terms = value)}
                                />
                            </div>

                            <div class="modal-action">
                                <button type="button" class="btn btn-ghost" onclick={on_close.clone()}>
                                    { i18n.t("common.cancel") }
                                </button>
                                <button type="submit" class="btn btn-primary" disabled={*busy}>
                                    if *busy {
                                        <span class="loading loading-spinner loading-sm"></span>
                                    }
                                    { i18n.t("common.save") }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}
