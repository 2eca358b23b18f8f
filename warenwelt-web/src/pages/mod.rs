mod categories;
mod category_edit;
mod dashboard;
mod import_data;
mod login;
mod not_found;
mod payouts;
mod pos;
mod price_tags;
mod product_edit;
mod products;
mod rental_contracts;
mod revenue_list;
mod sales_summary;
mod shelves;
mod supplier_edit;
mod suppliers;

pub use categories::CategoriesPage;
pub use category_edit::CategoryEditPage;
pub use dashboard::DashboardPage;
pub use import_data::ImportDataPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use payouts::PayoutsPage;
pub use pos::PosPage;
pub use price_tags::PriceTagPrintPage;
pub use product_edit::ProductEditPage;
pub use products::ProductsPage;
pub use rental_contracts::RentalContractsPage;
pub use revenue_list::RevenueListPage;
pub use sales_summary::SalesSummaryPage;
pub use shelves::ShelvesPage;
pub use supplier_edit::SupplierEditPage;
pub use suppliers::SuppliersPage;
