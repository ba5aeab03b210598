//! Accounts and subscriptions

use super::enums::{AccountStatusId, AccountTypeId};
use super::users::UserModel;
use crate::codec::Timestamp;

wire_model! {
    /// A customer account; the top of the account → company → transaction tree
    pub struct AccountModel {
        pub id: i32 => "id",
        /// Identifier in the vendor's CRM
        pub crm_id: Option<String> => "crmid",
        pub name: String => "name",
        pub effective_date: Option<Timestamp> => "effectiveDate",
        pub end_date: Option<Timestamp> => "endDate",
        pub account_status_id: Option<AccountStatusId> => "accountStatusId",
        pub account_type_id: Option<AccountTypeId> => "accountTypeId",
        pub created_date: Option<Timestamp> => "createdDate",
        pub created_user_id: Option<i32> => "createdUserId",
        pub modified_date: Option<Timestamp> => "modifiedDate",
        pub modified_user_id: Option<i32> => "modifiedUserId",
        /// Included when requested with `$include=Subscriptions`
        pub subscriptions: Option<Vec<SubscriptionModel>> => "subscriptions",
        /// Included when requested with `$include=Users`
        pub users: Option<Vec<UserModel>> => "users",
        pub is_saml_enabled: Option<bool> => "isSamlEnabled",
        pub is_deleted: Option<bool> => "isDeleted",
    }
}

impl AccountModel {
    pub fn is_active(&self) -> bool {
        self.account_status_id == Some(AccountStatusId::Active)
    }
}

wire_model! {
    /// Condensed account reference returned by lookup endpoints
    pub struct AccountSummaryModel {
        pub account_id: i64 => "accountId",
        pub account_name: Option<String> => "accountName",
        pub account_status_id: Option<AccountStatusId> => "accountStatusId",
        pub company_count: Option<i32> => "companyCount",
    }
}

wire_model! {
    /// A service the account is subscribed to
    pub struct SubscriptionModel {
        pub id: i32 => "id",
        pub account_id: i32 => "accountId",
        pub subscription_type_id: i32 => "subscriptionTypeId",
        pub subscription_description: Option<String> => "subscriptionDescription",
        pub effective_date: Timestamp => "effectiveDate",
        pub end_date: Option<Timestamp> => "endDate",
        pub created_date: Option<Timestamp> => "createdDate",
        pub created_user_id: Option<i32> => "createdUserId",
        pub modified_date: Option<Timestamp> => "modifiedDate",
        pub modified_user_id: Option<i32> => "modifiedUserId",
    }
}

impl SubscriptionModel {
    /// Whether the subscription covers `date` (end date inclusive, open-ended when absent)
    pub fn covers(&self, date: chrono::NaiveDate) -> bool {
        if date < self.effective_date.date() {
            return false;
        }
        self.end_date.is_none_or(|end| date <= end.date())
    }
}
