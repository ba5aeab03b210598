//! Users and their entitlements

use super::enums::{CompanyAccessLevel, PasswordStatusId, SecurityRoleId};
use crate::codec::Timestamp;

wire_model! {
    /// A user who may sign in to an account
    pub struct UserModel {
        pub id: i32 => "id",
        pub account_id: i32 => "accountId",
        /// Set when the user is limited to one company
        pub company_id: Option<i32> => "companyId",
        pub user_name: String => "userName",
        pub first_name: Option<String> => "firstName",
        pub last_name: Option<String> => "lastName",
        pub email: String => "email",
        pub postal_code: String => "postalCode",
        pub security_role_id: SecurityRoleId => "securityRoleId",
        pub password_status: Option<PasswordStatusId> => "passwordStatus",
        pub is_active: Option<bool> => "isActive",
        pub created_date: Option<Timestamp> => "createdDate",
        pub created_user_id: Option<i32> => "createdUserId",
        pub modified_date: Option<Timestamp> => "modifiedDate",
        pub modified_user_id: Option<i32> => "modifiedUserId",
        pub suppress_new_user_email: Option<bool> => "suppressNewUserEmail",
        pub is_deleted: Option<bool> => "isDeleted",
    }
}

impl UserModel {
    pub fn new(
        account_id: i32,
        user_name: impl Into<String>,
        email: impl Into<String>,
        postal_code: impl Into<String>,
        security_role_id: SecurityRoleId,
    ) -> Self {
        Self {
            id: 0,
            account_id,
            company_id: None,
            user_name: user_name.into(),
            first_name: None,
            last_name: None,
            email: email.into(),
            postal_code: postal_code.into(),
            security_role_id,
            password_status: None,
            is_active: None,
            created_date: None,
            created_user_id: None,
            modified_date: None,
            modified_user_id: None,
            suppress_new_user_email: None,
            is_deleted: None,
        }
    }

    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}

wire_model! {
    /// What the current user may do
    pub struct UserEntitlementModel {
        /// Permission names granted to the user
        pub permissions: Option<Vec<String>> => "permissions",
        pub access_level: CompanyAccessLevel => "accessLevel",
        /// Companies the user can reach when access is not account-wide
        pub companies: Option<Vec<i32>> => "companies",
    }
}

impl UserEntitlementModel {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|granted| granted.iter().any(|p| p == permission))
    }

    pub fn can_access_company(&self, company_id: i32) -> bool {
        match self.access_level {
            CompanyAccessLevel::None => false,
            CompanyAccessLevel::SingleCompany => self
                .companies
                .as_ref()
                .is_some_and(|ids| ids.contains(&company_id)),
            CompanyAccessLevel::SingleAccount
            | CompanyAccessLevel::AllCompanies
            | CompanyAccessLevel::FirmManagedAccounts => true,
        }
    }
}
