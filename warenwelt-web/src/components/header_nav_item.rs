use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: Route,
    pub current_route: Option<Route>,
}

/// One entry in the main navigation. Routes without a navigation label
/// render nothing, so the caller can feed the whole route set through.
#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let Some(nav_key) = props.route.nav_key() else {
        return html! {};
    };
    let active_class = if props.current_route.as_ref() == Some(&props.route) {
        "active"
    } else {
        ""
    };

    html! {
        <li>
            <Link<Route> to={props.route.clone()} classes={classes!(active_class)}>
                { i18n.t(nav_key) }
            </Link<Route>>
        </li>
    }
}
