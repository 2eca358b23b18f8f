use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::components::{
    header_nav_item::HeaderNavItem, language_selector::LanguageSelector,
    user_dropdown::UserDropdown,
};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();

    let render_routes = || -> Html {
        html! {
            { for Route::iter()
                .filter(|route| route.nav_key().is_some())
                .map(|route| html! {
                    <HeaderNavItem {route} current_route={props.current_route.clone()} />
                }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={Route::Dashboard} classes="btn btn-ghost text-lg">
                { i18n.t("app.title") }
            </Link<Route>>
            <div class="dropdown lg:hidden">
                <div tabindex="0" role="button" class="btn btn-ghost">
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                </div>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-4 rounded-box shadow w-64 gap-1"
                >
                    { render_routes() }
                </ul>
            </div>
            <ul class="hidden menu lg:menu-horizontal px-1">
                { render_routes() }
            </ul>
            <div class="flex items-center gap-1">
                <LanguageSelector />
                <UserDropdown />
            </div>
        </nav>
    }
}
