use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

use crate::containers::header::Header;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window()
            && let Some(document) = window.document()
            && let Some(html_element) = document.document_element()
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Header current_route={props.current_route.clone()} />
            <main class="flex-grow p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2025 Warenwelt"}</p>
                </div>
            </footer>
        </div>
    }
}
