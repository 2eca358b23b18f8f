use std::str::FromStr;

use i18nrs::yew::use_translation;
use shared::models::{ShelfRead, ShelfStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ErrorAlert;
use crate::forms::shelf::{ShelfDraft, ShelfFormErrors};
use crate::forms::validation::ValidationError;

fn shelf_status_key(status: ShelfStatus) -> &'static str {
    match status {
        ShelfStatus::Available => "shelves.status_available",
        ShelfStatus::Rented => "shelves.status_rented",
        ShelfStatus::Maintenance => "shelves.status_maintenance",
    }
}

/// Editor dialog state. `id` is `None` while creating a new shelf.
#[derive(Clone, PartialEq)]
struct ShelfEditor {
    id: Option<i64>,
    draft: ShelfDraft,
}

#[function_component(ShelvesPage)]
pub fn shelves_page() -> Html {
    let (i18n, _) = use_translation();
    let shelves = use_state(Vec::<ShelfRead>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let editor = use_state(|| None::<ShelfEditor>);
    let field_errors = use_state(ShelfFormErrors::default);
    let busy = use_state(|| false);

    {
        let shelves = shelves.clone();
        let loading = loading.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.list_shelves().await {
                    Ok(list) => shelves.set(list),
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
            field_errors.set(ShelfFormErrors::default());
            editor.set(Some(ShelfEditor {
                id: None,
                draft: ShelfDraft::default(),
            }));
        })
    };

    let open_edit = {
        let editor = editor.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |shelf: ShelfRead| {
            field_errors.set(ShelfFormErrors::default());
            editor.set(Some(ShelfEditor {
                id: Some(shelf.id),
                draft: ShelfDraft::from_shelf(&shelf),
            }));
        })
    };

    let on_close = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.set(None))
    };

    let edit_text = {
        let editor = editor.clone();
        move |apply: fn(&mut ShelfDraft, String)| -> Callback<InputEvent> {
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

    let on_status_change = {
        let editor = editor.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>()
                && let Some(mut state) = (*editor).clone()
                && let Ok(status) = ShelfStatus::from_str(&select.value())
            {
                state.draft.status = status;
                editor.set(Some(state));
            }
        })
    };

    let on_active_change = {
        let editor = editor.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>()
                && let Some(mut state) = (*editor).clone()
            {
                state.draft.is_active = input.checked();
                editor.set(Some(state));
            }
        })
    };

    let on_save = {
        let editor = editor.clone();
        let field_errors = field_errors.clone();
        let shelves = shelves.clone();
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
            let shelves = shelves.clone();
            let error = error.clone();
            let busy = busy.clone();
            let save_failed = save_failed.clone();
            match state.id {
                None => match state.draft.validate() {
                    Ok(payload) => {
                        field_errors.set(ShelfFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.create_shelf(&payload).await {
                                Ok(created) => {
                                    let mut next = (*shelves).clone();
                                    next.push(created);
                                    shelves.set(next);
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
                        field_errors.set(ShelfFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.update_shelf(id, &payload).await {
                                Ok(updated) => {
                                    let mut next = (*shelves).clone();
                                    if let Some(slot) =
                                        next.iter_mut().find(|shelf| shelf.id == id)
                                    {
                                        *slot = updated;
                                    }
                                    shelves.set(next);
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
        let shelves = shelves.clone();
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
            let shelves = shelves.clone();
            let error = error.clone();
            let delete_failed = delete_failed.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.delete_shelf(id).await {
                    Ok(()) => {
                        let mut next = (*shelves).clone();
                        next.retain(|shelf| shelf.id != id);
                        shelves.set(next);
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

    let rows = shelves.iter().map(|shelf| {
        let id = shelf.id;
        let on_delete = on_delete.clone();
        let on_edit = {
            let open_edit = open_edit.clone();
            let shelf = shelf.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(shelf.clone()))
        };
        html! {
            <tr key={id}>
                <td>{ shelf.name.clone() }</td>
                <td>{ shelf.location_description.clone().unwrap_or_default() }</td>
                <td>{ shelf.size_description.clone().unwrap_or_default() }</td>
                <td class="text-right">{ format!("{:.2} €", shelf.monthly_rent_price) }</td>
                <td>
                    <span class="badge badge-outline">{ i18n.t(shelf_status_key(shelf.status)) }</span>
                </td>
                <td>
                    if shelf.is_active {
                        <span class="badge badge-success">{ i18n.t("common.active") }</span>
                    } else {
                        <span class="badge badge-ghost">{ i18n.t("common.inactive") }</span>
                    }
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
                <h1 class="text-2xl font-bold">{ i18n.t("shelves.title") }</h1>
                <button class="btn btn-primary" onclick={open_new}>
                    { i18n.t("shelves.new") }
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
                                <th>{ i18n.t("shelves.name") }</th>
                                <th>{ i18n.t("shelves.location") }</th>
                                <th>{ i18n.t("shelves.size") }</th>
                                <th class="text-right">{ i18n.t("shelves.rent") }</th>
                                <th>{ i18n.t("shelves.status") }</th>
                                <th>{ i18n.t("shelves.active") }</th>
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
                                    i18n.t("shelves.edit")
                                } else {
                                    i18n.t("shelves.new")
                                }
                            }
                        </h3>
                        <form class="space-y-2" onsubmit={on_save}>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{ i18n.t("shelves.name") }</span>
                                </label>
                                <input
                                    class="input input-bordered"
                                    type="text"
                                    value={state.draft.name.clone()}
                                    oninput={edit_text(|draft, value| draft.name = value)}
                                />
                                { field_error(field_errors.name) }
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("shelves.location") }</span>
                                    </label>
                                    <input
                                        class="input input-bordered"
                                        type="text"
                                        value={state.draft.location_description.clone()}
                                        oninput={edit_text(|draft, value| draft.location_description = value)}
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("shelves.size") }</span>
                                    </label>
                                    <input
                                        class="input input-bordered"
                                        type="text"
                                        value={state.draft.size_description.clone()}
                                        oninput={edit_text(|draft, value| draft.size_description = value)}
                                    />
                                </div>
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("shelves.rent") }</span>
                                    </label>
                                    <input
                                        class="input input-bordered"
                                        type="text"
                                        inputmode="decimal"
                                        value={state.draft.monthly_rent_price.clone()}
                                        oninput={edit_text(|draft, value| draft.monthly_rent_price = value)}
                                    />
                                    { field_error(field_errors.monthly_rent_price) }
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">{ i18n.t("shelves.status") }</span>
                                    </label>
                                    <select class="select select-bordered" onchange={on_status_change}>
                                        { for ShelfStatus::ALL.iter().map(|variant| html! {
                                            <option
                                                value={variant.as_str()}
                                                selected={state.draft.status == *variant}
                                            >
                                                { i18n.t(shelf_status_key(*variant)) }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="form-control">
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input
                                        type="checkbox"
                                        class="checkbox"
                                        checked={state.draft.is_active}
                                        onchange={on_active_change}
                                    />
                                    <span class="label-text">{ i18n.t("shelves.active") }</span>
                                </label>
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
