use std::str::FromStr;

use i18nrs::yew::use_translation;
use shared::models::{ProductCategoryRead, ProductRead, ProductStatus, ProductType, SupplierRead, TaxRateRead};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::hooks::use_navigator;

use crate::api::{ApiClient, ApiError};
use crate::components::ErrorAlert;
use crate::config::FrontendConfig;
use crate::files;
use crate::forms::product::{ProductDraft, ProductFormErrors};
use crate::forms::validation::ValidationError;
use crate::routes::Route;

use super::products::{status_key, type_key};

#[derive(Properties, PartialEq)]
pub struct ProductEditPageProps {
    #[prop_or_default]
    pub id: Option<i64>,
}

#[function_component(ProductEditPage)]
pub fn product_edit_page(props: &ProductEditPageProps) -> Html {
    let (i18n, _) = use_translation();
    let navigator = use_navigator();

    let draft = use_state(ProductDraft::default);
    let field_errors = use_state(ProductFormErrors::default);
    let suppliers = use_state(Vec::<SupplierRead>::new);
    let categories = use_state(Vec::<ProductCategoryRead>::new);
    let tax_rates = use_state(Vec::<TaxRateRead>::new);
    let current = use_state(|| None::<ProductRead>);
    let image_file = use_state(|| None::<web_sys::File>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    // Select options for supplier, category and tax rate.
    {
        let suppliers = suppliers.clone();
        let categories = categories.clone();
        let tax_rates = tax_rates.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                let loaded = async {
                    let supplier_list = client.list_suppliers().await?;
                    let category_list = client.list_product_categories().await?;
                    let tax_rate_list = client.list_tax_rates().await?;
                    Ok::<_, ApiError>((supplier_list, category_list, tax_rate_list))
                }
                .await;
                match loaded {
                    Ok((supplier_list, category_list, tax_rate_list)) => {
                        suppliers.set(supplier_list);
                        categories.set(category_list);
                        tax_rates.set(tax_rate_list);
                    }
                    Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                }
            });
            || ()
        });
    }

    {
        let draft = draft.clone();
        let current = current.clone();
        let error = error.clone();
        let load_failed = i18n.t("error.load_failed");
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.get_product(id).await {
                        Ok(product) => {
                            draft.set(ProductDraft::from_product(&product));
                            current.set(Some(product));
                        }
                        Err(err) => error.set(Some(format!("{load_failed}: {err}"))),
                    }
                });
            }
            || ()
        });
    }

    let edit_text = {
        let draft = draft.clone();
        move |apply: fn(&mut ProductDraft, String)| -> Callback<InputEvent> {
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

    let edit_select = {
        let draft = draft.clone();
        move |apply: fn(&mut ProductDraft, String)| -> Callback<Event> {
            let draft = draft.clone();
            Callback::from(move |event: Event| {
                if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                    let mut next = (*draft).clone();
                    apply(&mut next, select.value());
                    draft.set(next);
                }
            })
        }
    };

    let on_description_change = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*draft).clone();
                next.description = area.value();
                draft.set(next);
            }
        })
    };

    let on_file_change = {
        let image_file = image_file.clone();
        Callback::from(move |event: Event| {
            let picked = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|list| list.item(0));
            image_file.set(picked);
        })
    };

    let on_upload = {
        let id = props.id;
        let image_file = image_file.clone();
        let current = current.clone();
        let error = error.clone();
        let busy = busy.clone();
        let save_failed = i18n.t("error.save_failed");
        Callback::from(move |_: MouseEvent| {
            let (Some(id), Some(file)) = (id, (*image_file).clone()) else {
                return;
            };
            let image_file = image_file.clone();
            let current = current.clone();
            let error = error.clone();
            let busy = busy.clone();
            let save_failed = save_failed.clone();
            busy.set(true);
            spawn_local(async move {
                let bytes = match files::read_file_bytes(&file).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        error.set(Some(format!("{save_failed}: {err:?}")));
                        busy.set(false);
                        return;
                    }
                };
                let mime_type = file.type_();
                let mime_type = if mime_type.is_empty() {
                    "application/octet-stream".to_string()
                } else {
                    mime_type
                };
                let client = ApiClient::shared();
                match client
                    .upload_product_image(id, file.name(), &mime_type, bytes)
                    .await
                {
                    Ok(product) => {
                        current.set(Some(product));
                        image_file.set(None);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(format!("{save_failed}: {err}"))),
                }
                busy.set(false);
            });
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
                        field_errors.set(ProductFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.create_product(&payload).await {
                                Ok(_) => {
                                    if let Some(nav) = navigator {
                                        nav.push(&Route::Products);
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
                        field_errors.set(ProductFormErrors::default());
                        busy.set(true);
                        spawn_local(async move {
                            let client = ApiClient::shared();
                            match client.update_product(id, &payload).await {
                                Ok(_) => {
                                    if let Some(nav) = navigator {
                                        nav.push(&Route::Products);
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
        "products.edit"
    } else {
        "products.new"
    };

    let config = FrontendConfig::new();
    let image_src = (*current)
        .as_ref()
        .and_then(|product| product.image_url.as_deref())
        .map(|relative| config.image_url(relative));

    html! {
        <div class="p-4 max-w-3xl mx-auto space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t(title_key) }</h1>

            <ErrorAlert message={(*error).clone()} />

            <form class="card bg-base-200 shadow-xl" onsubmit={onsubmit}>
                <div class="card-body space-y-2">
                    if let Some(product) = &*current {
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.sku") }</span>
                            </label>
                            <input
                                class="input input-bordered font-mono"
                                type="text"
                                readonly=true
                                value={product.sku.clone()}
                            />
                        </div>
                    }

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{ i18n.t("products.name") }</span>
                        </label>
                        <input
                            class="input input-bordered"
                            type="text"
                            value={draft.name.clone()}
                            oninput={edit_text(|draft, value| draft.name = value)}
                        />
                        { field_error(field_errors.name) }
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{ i18n.t("products.description") }</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered"
                            value={draft.description.clone()}
                            oninput={on_description_change}
                        />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.supplier") }</span>
                            </label>
                            <select
                                class="select select-bordered"
                                onchange={edit_select(|draft, value| draft.supplier_id = value)}
                            >
                                <option value="" selected={draft.supplier_id.is_empty()}>
                                    { i18n.t("common.choose") }
                                </option>
                                { for suppliers.iter().map(|supplier| {
                                    let value = supplier.id.to_string();
                                    html! {
                                        <option
                                            value={value.clone()}
                                            selected={draft.supplier_id == value}
                                        >
                                            { supplier.display_name() }
                                        </option>
                                    }
                                }) }
                            </select>
                            { field_error(field_errors.supplier_id) }
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.category") }</span>
                            </label>
                            <select
                                class="select select-bordered"
                                onchange={edit_select(|draft, value| draft.category_id = value)}
                            >
                                <option value="" selected={draft.category_id.is_empty()}>
                                    { i18n.t("common.choose") }
                                </option>
                                { for categories.iter().map(|category| {
                                    let value = category.id.to_string();
                                    html! {
                                        <option
                                            value={value.clone()}
                                            selected={draft.category_id == value}
                                        >
                                            { category.name.clone() }
                                        </option>
                                    }
                                }) }
                            </select>
                            { field_error(field_errors.category_id) }
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.tax_rate") }</span>
                            </label>
                            <select
                                class="select select-bordered"
                                onchange={edit_select(|draft, value| draft.tax_rate_id = value)}
                            >
                                <option value="" selected={draft.tax_rate_id.is_empty()}>
                                    { i18n.t("common.choose") }
                                </option>
                                { for tax_rates.iter().map(|tax_rate| {
                                    let value = tax_rate.id.to_string();
                                    html! {
                                        <option
                                            value={value.clone()}
                                            selected={draft.tax_rate_id == value}
                                        >
                                            { format!("{} ({:.1} %)", tax_rate.name, tax_rate.rate_percent) }
                                        </option>
                                    }
                                }) }
                            </select>
                            { field_error(field_errors.tax_rate_id) }
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.purchase_price") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="text"
                                inputmode="decimal"
                                value={draft.purchase_price.clone()}
                                oninput={edit_text(|draft, value| draft.purchase_price = value)}
                            />
                            { field_error(field_errors.purchase_price) }
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.selling_price") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="text"
                                inputmode="decimal"
                                value={draft.selling_price.clone()}
                                oninput={edit_text(|draft, value| draft.selling_price = value)}
                            />
                            { field_error(field_errors.selling_price) }
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.type") }</span>
                            </label>
                            <select
                                class="select select-bordered"
                                onchange={edit_select(|draft, value| {
                                    if let Ok(parsed) = ProductType::from_str(&value) {
                                        draft.product_type = parsed;
                                    }
                                })}
                            >
                                { for ProductType::ALL.iter().map(|variant| html! {
                                    <option
                                        value={variant.as_str()}
                                        selected={draft.product_type == *variant}
                                    >
                                        { i18n.t(type_key(*variant)) }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.status") }</span>
                            </label>
                            <select
                                class="select select-bordered"
                                onchange={edit_select(|draft, value| {
                                    if let Ok(parsed) = ProductStatus::from_str(&value) {
                                        draft.status = parsed;
                                    }
                                })}
                            >
                                { for ProductStatus::ALL.iter().map(|variant| html! {
                                    <option
                                        value={variant.as_str()}
                                        selected={draft.status == *variant}
                                    >
                                        { i18n.t(status_key(*variant)) }
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.entry_date") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="date"
                                value={draft.entry_date.clone()}
                                oninput={edit_text(|draft, value| draft.entry_date = value)}
                            />
                            { field_error(field_errors.entry_date) }
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.shelf_location") }</span>
                            </label>
                            <input
                                class="input input-bordered"
                                type="text"
                                value={draft.shelf_location.clone()}
                                oninput={edit_text(|draft, value| draft.shelf_location = value)}
                            />
                        </div>
                    </div>

                    if props.id.is_some() {
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">{ i18n.t("products.image") }</span>
                            </label>
                            if let Some(src) = image_src.clone() {
                                <img src={src} class="w-32 h-32 object-cover rounded mb-2" />
                            }
                            <div class="flex gap-2">
                                <input
                                    class="file-input file-input-bordered grow"
                                    type="file"
                                    accept="image/*"
                                    onchange={on_file_change}
                                />
                                <button
                                    class="btn btn-outline"
                                    type="button"
                                    disabled={(*image_file).is_none() || *busy}
                                    onclick={on_upload}
                                >
                                    { i18n.t("products.upload_image") }
                                </button>
                            </div>
                        </div>
                    }

                    <div class="card-actions justify-end mt-4">
                        <Link<Route> to={Route::Products} classes="btn btn-ghost">
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
