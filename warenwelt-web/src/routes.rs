use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::containers::layout::Layout;
use crate::pages::*;
use crate::session::SessionState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The app routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/suppliers")]
    Suppliers,
    #[at("/suppliers/new")]
    SupplierNew,
    #[at("/suppliers/edit/:id")]
    SupplierEdit { id: i64 },
    #[at("/products")]
    Products,
    #[at("/products/new")]
    ProductNew,
    #[at("/products/edit/:id")]
    ProductEdit { id: i64 },
    #[at("/products/print-price-tags")]
    PriceTagPrint,
    #[at("/pos")]
    Pos,
    #[at("/payouts")]
    Payouts,
    #[at("/reports/sales-summary")]
    SalesSummaryReport,
    #[at("/reports/revenue-list")]
    RevenueReport,
    #[at("/product-categories")]
    ProductCategories,
    #[at("/product-categories/new")]
    ProductCategoryNew,
    #[at("/product-categories/edit/:id")]
    ProductCategoryEdit { id: i64 },
    #[at("/shelves")]
    Shelves,
    #[at("/rental-contracts")]
    RentalContracts,
    #[at("/import-data")]
    DataImport,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether the route is only reachable with a signed-in session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Home | Route::Login | Route::NotFound)
    }

    /// Translation key for routes that appear in the main navigation.
    pub fn nav_key(&self) -> Option<&'static str> {
        match self {
            Route::Dashboard => Some("nav.dashboard"),
            Route::Pos => Some("nav.pos"),
            Route::Products => Some("nav.products"),
            Route::PriceTagPrint => Some("nav.price_tags"),
            Route::Suppliers => Some("nav.suppliers"),
            Route::Payouts => Some("nav.payouts"),
            Route::SalesSummaryReport => Some("nav.sales_summary"),
            Route::RevenueReport => Some("nav.revenue_list"),
            Route::ProductCategories => Some("nav.categories"),
            Route::Shelves => Some("nav.shelves"),
            Route::RentalContracts => Some("nav.rental_contracts"),
            Route::DataImport => Some("nav.import"),
            _ => None,
        }
    }
}

/// What the navigation guard decided for a requested route.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationDecision {
    Allow,
    /// Not signed in on a protected route; remember where the visitor was
    /// headed so login can send them back.
    RedirectToLogin { return_to: String },
    /// Already signed in, so the login page is pointless.
    RedirectToDashboard,
}

/// Pure guard rule, kept free of hooks so it can be tested directly.
pub fn check_navigation(route: &Route, is_authenticated: bool) -> NavigationDecision {
    if route.requires_auth() && !is_authenticated {
        return NavigationDecision::RedirectToLogin {
            return_to: route.to_path(),
        };
    }
    if matches!(route, Route::Login) && is_authenticated {
        return NavigationDecision::RedirectToDashboard;
    }
    NavigationDecision::Allow
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let decision = check_navigation(&props.route, session.is_authenticated());

    use_effect_with(decision.clone(), {
        let dispatch = dispatch.clone();
        move |decision: &NavigationDecision| {
            if let NavigationDecision::RedirectToLogin { return_to } = decision {
                let return_to = return_to.clone();
                dispatch.reduce_mut(move |state| state.return_url = Some(return_to));
            }
            || ()
        }
    });

    match decision {
        NavigationDecision::RedirectToLogin { .. } => {
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        NavigationDecision::RedirectToDashboard => {
            html! { <Redirect<Route> to={Route::Dashboard} /> }
        }
        NavigationDecision::Allow => render_page(&props.route),
    }
}

fn render_page(route: &Route) -> Html {
    match route.clone() {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
        Route::Dashboard => in_layout(route, html! { <DashboardPage /> }),
        Route::Suppliers => in_layout(route, html! { <SuppliersPage /> }),
        Route::SupplierNew => in_layout(route, html! { <SupplierEditPage id={None::<i64>} /> }),
        Route::SupplierEdit { id } => in_layout(route, html! { <SupplierEditPage id={Some(id)} /> }),
        Route::Products => in_layout(route, html! { <ProductsPage /> }),
        Route::ProductNew => in_layout(route, html! { <ProductEditPage id={None::<i64>} /> }),
        Route::ProductEdit { id } => in_layout(route, html! { <ProductEditPage id={Some(id)} /> }),
        Route::PriceTagPrint => in_layout(route, html! { <PriceTagPrintPage /> }),
        Route::Pos => in_layout(route, html! { <PosPage /> }),
        Route::Payouts => in_layout(route, html! { <PayoutsPage /> }),
        Route::SalesSummaryReport => in_layout(route, html! { <SalesSummaryPage /> }),
        Route::RevenueReport => in_layout(route, html! { <RevenueListPage /> }),
        Route::ProductCategories => in_layout(route, html! { <CategoriesPage /> }),
        Route::ProductCategoryNew => {
            in_layout(route, html! { <CategoryEditPage id={None::<i64>} /> })
        }
        Route::ProductCategoryEdit { id } => {
            in_layout(route, html! { <CategoryEditPage id={Some(id)} /> })
        }
        Route::Shelves => in_layout(route, html! { <ShelvesPage /> }),
        Route::RentalContracts => in_layout(route, html! { <RentalContractsPage /> }),
        Route::DataImport => in_layout(route, html! { <ImportDataPage /> }),
    }
}

fn in_layout(route: &Route, page: Html) -> Html {
    html! {
        <Layout current_route={route.clone()}>
            { page }
        </Layout>
    }
}

/// Switch function for the app routes.
pub fn switch(route: Route) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <RouteView {route} /> }
}
