//! Request and response bodies exchanged with the Warenwelt API.

pub mod category;
pub mod errors;
pub mod import;
pub mod payout;
pub mod product;
pub mod rental_contract;
pub mod report;
pub mod sale;
pub mod shelf;
pub mod supplier;
pub mod tax_rate;
pub mod user;

pub use category::{ProductCategoryCreate, ProductCategoryRead, ProductCategoryUpdate};
pub use errors::{ErrorDetail, ErrorResponse, ValidationIssue};
pub use import::{ImportResult, ImportRowError};
pub use payout::{PayoutCreate, PayoutRead, PayoutSummaryItem, SupplierPayoutSummary};
pub use product::{
    PriceTagData, ProductCreate, ProductRead, ProductStatus, ProductType, ProductUpdate,
};
pub use rental_contract::{
    RentalContractCreate, RentalContractRead, RentalContractStatus, RentalContractUpdate,
};
pub use report::{
    DailySummaryReport, PaymentMethodSummary, PeriodSummaryReport, RevenueItem, RevenueListReport,
    RevenueProductTypeSummary,
};
pub use sale::{PaymentMethod, SaleCreate, SaleItemCreate, SaleItemRead, SaleRead};
pub use shelf::{ShelfBasicRead, ShelfCreate, ShelfRead, ShelfStatus, ShelfUpdate};
pub use supplier::{SupplierBasicRead, SupplierCreate, SupplierRead, SupplierUpdate};
pub use tax_rate::TaxRateRead;
pub use user::{RoleRead, Token, UserRead};
