//! Form state and validation for the editor pages.
//!
//! Each form keeps its raw input in a `*Draft` struct of strings and turns it
//! into an API payload through `validate()`, collecting per-field errors on
//! the way. The error variants map to translation keys so the pages stay
//! language-agnostic.

pub mod category;
pub mod login;
pub mod product;
pub mod rental_contract;
pub mod shelf;
pub mod supplier;
pub mod validation;
