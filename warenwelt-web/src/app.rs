use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::ApiClient;
use crate::components::Loading;
use crate::routes::{self, Route};
use crate::session::{self, SessionState};

/// Root component: restores the stored session, wires the 401 teardown hook
/// and only then hands control to the router.
#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            let restored = SessionState::restored();
            let client = ApiClient::shared();
            client.set_access_token(restored.access_token.clone());
            dispatch.set(restored);

            // Any 401 from here on drops the session, which flips every
            // guarded route back to the login page.
            let teardown = dispatch.clone();
            client.set_unauthorized_handler(Some(Callback::from(move |()| {
                session::clear(&teardown);
            })));

            let dispatch = dispatch.clone();
            spawn_local(async move {
                session::init(&dispatch).await;
                ready.set(true);
            });
            || ()
        });
    }

    if !*ready {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={routes::switch} />
        </BrowserRouter>
    }
}
