use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::Routable;
use yew_router::hooks::use_navigator;
use yewdux::use_store;

use crate::forms::login::{LoginDraft, LoginFormErrors};
use crate::forms::validation::ValidationError;
use crate::routes::Route;
use crate::session::{self, SessionState};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, _) = use_translation();
    let (_, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(LoginFormErrors::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let failed_label = i18n.t("login.failed");

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let busy = busy.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let draft = LoginDraft {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let credentials = match draft.validate() {
                Ok(credentials) => credentials,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(LoginFormErrors::default());
            busy.set(true);
            error.set(None);

            let error = error.clone();
            let busy = busy.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let failed_label = failed_label.clone();
            spawn_local(async move {
                match session::login(&dispatch, &credentials.email, &credentials.password).await {
                    Ok(()) => {
                        let target = session::take_return_url(&dispatch)
                            .and_then(|path| Route::recognize(&path))
                            .unwrap_or(Route::Dashboard);
                        if let Some(nav) = navigator {
                            nav.push(&target);
                        }
                    }
                    Err(err) if err.is_unauthorized() => {
                        error.set(Some(failed_label.clone()));
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
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

    let is_busy = *busy;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{ message.clone() }</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{ i18n.t("login.email") }</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                        { field_error(field_errors.email) }
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ i18n.t("login.password") }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                        { field_error(field_errors.password) }
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            if is_busy {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            { i18n.t("login.submit") }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
