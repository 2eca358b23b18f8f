#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    use crate::routes::{NavigationDecision, Route, check_navigation};

    /// Test that routes render the expected paths.
    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::SupplierEdit { id: 7 }.to_path(), "/suppliers/edit/7");
        assert_eq!(
            Route::PriceTagPrint.to_path(),
            "/products/print-price-tags"
        );
        assert_eq!(
            Route::SalesSummaryReport.to_path(),
            "/reports/sales-summary"
        );
        assert_eq!(Route::DataImport.to_path(), "/import-data");
    }

    /// Test that paths are recognized back into routes.
    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/pos"), Some(Route::Pos));
        assert_eq!(
            Route::recognize("/products/edit/42"),
            Some(Route::ProductEdit { id: 42 })
        );
        assert_eq!(
            Route::recognize("/rental-contracts"),
            Some(Route::RentalContracts)
        );
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }

    /// Test that only the entry routes are reachable without a session.
    #[test]
    fn test_requires_auth_classification() {
        for route in Route::iter() {
            let expected = !matches!(route, Route::Home | Route::Login | Route::NotFound);
            assert_eq!(route.requires_auth(), expected, "route {route:?}");
        }
    }

    /// Test that unauthenticated visitors are sent to login with the
    /// original destination remembered.
    #[test]
    fn test_guard_redirects_to_login_and_keeps_destination() {
        let decision = check_navigation(&Route::Payouts, false);
        assert_eq!(
            decision,
            NavigationDecision::RedirectToLogin {
                return_to: "/payouts".to_string()
            }
        );

        let decision = check_navigation(&Route::SupplierEdit { id: 9 }, false);
        assert_eq!(
            decision,
            NavigationDecision::RedirectToLogin {
                return_to: "/suppliers/edit/9".to_string()
            }
        );
    }

    /// Test that a signed-in visitor cannot land on the login page.
    #[test]
    fn test_guard_bounces_authenticated_login_visits() {
        assert_eq!(
            check_navigation(&Route::Login, true),
            NavigationDecision::RedirectToDashboard
        );
    }

    /// Test that everything else passes through.
    #[test]
    fn test_guard_allows_normal_traffic() {
        assert_eq!(
            check_navigation(&Route::Dashboard, true),
            NavigationDecision::Allow
        );
        assert_eq!(
            check_navigation(&Route::Login, false),
            NavigationDecision::Allow
        );
        assert_eq!(
            check_navigation(&Route::NotFound, false),
            NavigationDecision::Allow
        );
    }

    /// Test that every navigation entry has a translation key.
    #[test]
    fn test_nav_keys() {
        assert_eq!(Route::Dashboard.nav_key(), Some("nav.dashboard"));
        assert_eq!(Route::Pos.nav_key(), Some("nav.pos"));
        assert_eq!(Route::Login.nav_key(), None);
        assert_eq!(Route::SupplierEdit { id: 1 }.nav_key(), None);

        let nav_entries = Route::iter().filter(|route| route.nav_key().is_some());
        assert_eq!(nav_entries.count(), 12);
    }
}
