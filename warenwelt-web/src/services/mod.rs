//! REST endpoints grouped by resource, all implemented as methods on
//! [`ApiClient`](crate::api::ApiClient).

mod auth;
mod categories;
mod imports;
mod payouts;
mod products;
mod rental_contracts;
mod reports;
mod sales;
mod shelves;
mod suppliers;
