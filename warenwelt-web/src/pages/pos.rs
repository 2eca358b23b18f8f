use std::str::FromStr;

use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::models::{PaymentMethod, ProductRead, SaleCreate, SaleItemCreate, SaleRead};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ErrorAlert;

fn payment_key(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "pos.payment_cash",
        PaymentMethod::Card => "pos.payment_card",
        PaymentMethod::Voucher => "pos.payment_voucher",
        PaymentMethod::Mixed => "pos.payment_mixed",
    }
}

#[derive(Clone, PartialEq)]
struct CartLine {
    product: ProductRead,
    quantity: i64,
}

#[function_component(PosPage)]
pub fn pos_page() -> Html {
    let (i18n, _) = use_translation();
    let sku_input = use_state(String::new);
    let cart = use_state(Vec::<CartLine>::new);
    let payment = use_state(|| PaymentMethod::Cash);
    let last_sale = use_state(|| None::<SaleRead>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_sku_change = {
        let sku_input = sku_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                sku_input.set(input.value());
            }
        })
    };

    // Scanner input submits the lookup form.
    let on_add = {
        let sku_input = sku_input.clone();
        let cart = cart.clone();
        let last_sale = last_sale.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let sku = (*sku_input).trim().to_string();
            if sku.is_empty() {
                return;
            }
            let sku_input = sku_input.clone();
            let cart = cart.clone();
            let last_sale = last_sale.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.get_product_by_sku(&sku).await {
                    Ok(product) => {
                        let mut next = (*cart).clone();
                        if let Some(line) =
                            next.iter_mut().find(|line| line.product.id == product.id)
                        {
                            line.quantity += 1;
                        } else {
                            next.push(CartLine {
                                product,
                                quantity: 1,
                            });
                        }
                        cart.set(next);
                        sku_input.set(String::new());
                        last_sale.set(None);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_increment = {
        let cart = cart.clone();
        Callback::from(move |id: i64| {
            let mut next = (*cart).clone();
            if let Some(line) = next.iter_mut().find(|line| line.product.id == id) {
                line.quantity += 1;
            }
            cart.set(next);
        })
    };

    let on_decrement = {
        let cart = cart.clone();
        Callback::from(move |id: i64| {
            let mut next = (*cart).clone();
            if let Some(line) = next.iter_mut().find(|line| line.product.id == id)
                && line.quantity > 1
            {
                line.quantity -= 1;
            }
            cart.set(next);
        })
    };

    let on_remove = {
        let cart = cart.clone();
        Callback::from(move |id: i64| {
            let mut next = (*cart).clone();
            next.retain(|line| line.product.id != id);
            cart.set(next);
        })
    };

    let on_payment_change = {
        let payment = payment.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>()
                && let Ok(parsed) = PaymentMethod::from_str(&select.value())
            {
                payment.set(parsed);
            }
        })
    };

    let on_checkout = {
        let cart = cart.clone();
        let payment = payment.clone();
        let last_sale = last_sale.clone();
        let error = error.clone();
        let busy = busy.clone();
        let save_failed = i18n.t("error.save_failed");
        Callback::from(move |_: MouseEvent| {
            if cart.is_empty() {
                return;
            }
            let items = cart
                .iter()
                .map(|line| SaleItemCreate {
                    sku: None,
                    product_id: Some(line.product.id),
                    quantity: line.quantity,
                })
                .collect();
            let payload = SaleCreate {
                items,
                payment_method: *payment,
            };
            let cart = cart.clone();
            let last_sale = last_sale.clone();
            let error = error.clone();
            let busy = busy.clone();
            let save_failed = save_failed.clone();
            busy.set(true);
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.create_sale(&payload).await {
                    Ok(sale) => {
                        last_sale.set(Some(sale));
                        cart.set(Vec::new());
                        error.set(None);
                        // The confirmation clears itself so the next customer
                        // starts from an empty screen.
                        let dismiss = last_sale.clone();
                        Timeout::new(8_000, move || dismiss.set(None)).forget();
                    }
                    Err(err) => error.set(Some(format!("{save_failed}: {err}"))),
                }
                busy.set(false);
            });
        })
    };

    let total: f64 = cart
        .iter()
        .map(|line| line.product.selling_price * line.quantity as f64)
        .sum();

    let rows = cart.iter().map(|line| {
        let id = line.product.id;
        let on_increment = on_increment.clone();
        let on_decrement = on_decrement.clone();
        let on_remove = on_remove.clone();
        let line_total = line.product.selling_price * line.quantity as f64;
        html! {
            <tr key={id}>
                <td class="font-mono">{ line.product.sku.clone() }</td>
                <td>{ line.product.name.clone() }</td>
                <td>
                    <div class="join">
                        <button
                            class="btn btn-xs join-item"
                            onclick={Callback::from(move |_| on_decrement.emit(id))}
                        >
                            { "−" }
                        </button>
                        <span class="join-item px-3">{ line.quantity }</span>
                        <button
                            class="btn btn-xs join-item"
                            onclick={Callback::from(move |_| on_increment.emit(id))}
                        >
                            { "+" }
                        </button>
                    </div>
                </td>
                <td class="text-right">{ format!("{:.2} €", line.product.selling_price) }</td>
                <td class="text-right">{ format!("{line_total:.2} €") }</td>
                <td>
                    <button
                        class="btn btn-xs btn-outline btn-error"
                        onclick={Callback::from(move |_| on_remove.emit(id))}
                    >
                        { i18n.t("pos.remove") }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{ i18n.t("pos.title") }</h1>

            if let Some(sale) = &*last_sale {
                <div class="alert alert-success">
                    <span>
                        { format!(
                            "{} {} ({:.2} €)",
                            i18n.t("pos.sale_done"),
                            sale.transaction_number,
                            sale.total_amount,
                        ) }
                    </span>
                </div>
            }

            <ErrorAlert message={(*error).clone()} />

            <form class="flex gap-2" onsubmit={on_add}>
                <input
                    class="input input-bordered grow font-mono"
                    type="text"
                    placeholder={i18n.t("pos.sku_placeholder")}
                    value={(*sku_input).clone()}
                    oninput={on_sku_change}
                />
                <button class="btn btn-primary" type="submit">
                    { i18n.t("pos.add") }
                </button>
            </form>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                <div class="lg:col-span-2 overflow-x-auto">
                    if cart.is_empty() {
                        <p class="text-base-content/60 p-4">{ i18n.t("pos.cart_empty") }</p>
                    } else {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("products.sku") }</th>
                                    <th>{ i18n.t("products.name") }</th>
                                    <th>{ i18n.t("pos.quantity") }</th>
                                    <th class="text-right">{ i18n.t("pos.price") }</th>
                                    <th class="text-right">{ i18n.t("common.total") }</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for rows }
                            </tbody>
                        </table>
                    }
                </div>

                <div class="card bg-base-200 shadow-xl h-fit">
                    <div class="card-body">
                        <div class="text-sm">{ i18n.t("common.total") }</div>
                        <div class="text-4xl font-bold">{ format!("{total:.2} €") }</div>

                        <div class="form-control mt-2">
                            <label class="label">
                                <span class="label-text">{ i18n.t("pos.payment_method") }</span>
                            </label>
                            <select class="select select-bordered" onchange={on_payment_change}>
                                { for PaymentMethod::ALL.iter().map(|method| html! {
                                    <option
                                        value={method.as_str()}
                                        selected={*payment == *method}
                                    >
                                        { i18n.t(payment_key(*method)) }
                                    </option>
                                }) }
                            </select>
                        </div>

                        <button
                            class="btn btn-primary btn-lg mt-4"
                            disabled={cart.is_empty() || *busy}
                            onclick={on_checkout}
                        >
                            if *busy {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("pos.checkout") }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
