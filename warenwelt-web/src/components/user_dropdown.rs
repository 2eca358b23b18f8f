use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::routes::Route;
use crate::session::{self, SessionState};

/// Identity menu in the header: shows who is signed in and offers logout.
///
/// Logout is purely local; there is no server-side session to end.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let (session, dispatch) = use_store::<SessionState>();

    let Some(user) = session.user.clone() else {
        return html! {};
    };

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            session::clear(&dispatch);
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.display_name() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                <li><a onclick={on_logout}>{ i18n.t("header.logout") }</a></li>
            </ul>
        </div>
    }
}
