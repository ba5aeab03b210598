//! Request and response bodies of the tax calculation API
//!
//! Grouped by API area. Every type here is declared through the codec macros,
//! so each one decodes, encodes and describes itself the same way.

pub mod accounts;
pub mod common;
pub mod companies;
pub mod definitions;
pub mod enums;
pub mod errors;
pub mod filings;
pub mod transactions;
pub mod users;

pub use accounts::{AccountModel, AccountSummaryModel, SubscriptionModel};
pub use common::{DocumentStatusModel, FetchResult, PingResultModel};
pub use companies::{CompanyModel, ContactModel, LocationModel};
pub use definitions::{NexusModel, RateModel, TaxCodeModel, TaxRateModel};
pub use enums::*;
pub use errors::{ErrorDetail, ErrorInfo, ErrorResult, ServiceError};
pub use filings::{ApproveFilingsModel, FilingModel, FilingRegionModel};
pub use transactions::{
    AddressLocationInfo, AddressesModel, AdjustTransactionModel, CommitTransactionModel,
    CreateTransactionModel, LineItemModel, TaxOverrideModel, TransactionAddressModel,
    TransactionLineDetailModel, TransactionLineModel, TransactionMessage, TransactionModel,
    TransactionParameterModel, TransactionSummary, VoidTransactionModel,
};
pub use users::{UserEntitlementModel, UserModel};
