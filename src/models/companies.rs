//! Companies, their contacts and locations

use super::definitions::NexusModel;
use super::enums::AddressCategoryId;
use crate::codec::Timestamp;

wire_model! {
    /// A legal entity that collects and remits tax
    pub struct CompanyModel {
        pub id: i32 => "id",
        pub account_id: i32 => "accountId",
        pub parent_company_id: Option<i32> => "parentCompanyId",
        /// Short code used by transactions to refer to this company
        pub company_code: Option<String> => "companyCode",
        pub name: String => "name",
        pub is_default: Option<bool> => "isDefault",
        pub default_location_id: Option<i32> => "defaultLocationId",
        pub is_active: Option<bool> => "isActive",
        pub taxpayer_id_number: Option<String> => "taxpayerIdNumber",
        pub has_profile: Option<bool> => "hasProfile",
        pub is_reporting_entity: Option<bool> => "isReportingEntity",
        /// Two-character ISO 3166 country code
        pub default_country: Option<String> => "defaultCountry",
        pub base_currency_code: Option<String> => "baseCurrencyCode",
        pub is_test: Option<bool> => "isTest",
        pub in_progress: Option<bool> => "inProgress",
        pub business_identification_no: Option<String> => "businessIdentificationNo",
        pub created_date: Option<Timestamp> => "createdDate",
        pub created_user_id: Option<i32> => "createdUserId",
        pub modified_date: Option<Timestamp> => "modifiedDate",
        pub modified_user_id: Option<i32> => "modifiedUserId",
        pub contacts: Option<Vec<ContactModel>> => "contacts",
        pub locations: Option<Vec<LocationModel>> => "locations",
        pub nexus: Option<Vec<NexusModel>> => "nexus",
    }
}

impl CompanyModel {
    pub fn new(account_id: i32, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            account_id,
            parent_company_id: None,
            company_code: None,
            name: name.into(),
            is_default: None,
            default_location_id: None,
            is_active: None,
            taxpayer_id_number: None,
            has_profile: None,
            is_reporting_entity: None,
            default_country: None,
            base_currency_code: None,
            is_test: None,
            in_progress: None,
            business_identification_no: None,
            created_date: None,
            created_user_id: None,
            modified_date: None,
            modified_user_id: None,
            contacts: None,
            locations: None,
            nexus: None,
        }
    }

    /// The location marked as default, if locations were included
    pub fn default_location(&self) -> Option<&LocationModel> {
        let id = self.default_location_id?;
        self.locations.as_ref()?.iter().find(|l| l.id == id)
    }
}

wire_model! {
    /// A person to contact at a company
    pub struct ContactModel {
        pub id: i32 => "id",
        pub company_id: i32 => "companyId",
        pub contact_code: String => "contactCode",
        pub first_name: Option<String> => "firstName",
        pub middle_name: Option<String> => "middleName",
        pub last_name: Option<String> => "lastName",
        pub title: Option<String> => "title",
        pub line1: Option<String> => "line1",
        pub line2: Option<String> => "line2",
        pub line3: Option<String> => "line3",
        pub city: Option<String> => "city",
        pub region: Option<String> => "region",
        pub postal_code: Option<String> => "postalCode",
        pub country: Option<String> => "country",
        pub email: Option<String> => "email",
        pub phone: Option<String> => "phone",
        pub mobile: Option<String> => "mobile",
        pub fax: Option<String> => "fax",
        pub created_date: Option<Timestamp> => "createdDate",
        pub modified_date: Option<Timestamp> => "modifiedDate",
    }
}

wire_model! {
    /// A physical place where a company does business
    pub struct LocationModel {
        pub id: i32 => "id",
        pub company_id: i32 => "companyId",
        pub location_code: String => "locationCode",
        pub description: Option<String> => "description",
        pub address_type_id: Option<String> => "addressTypeId",
        pub address_category_id: AddressCategoryId => "addressCategoryId",
        pub line1: String => "line1",
        pub line2: Option<String> => "line2",
        pub line3: Option<String> => "line3",
        pub city: Option<String> => "city",
        pub county: Option<String> => "county",
        pub region: Option<String> => "region",
        pub postal_code: Option<String> => "postalCode",
        pub country: String => "country",
        pub is_default: Option<bool> => "isDefault",
        pub is_registered: Option<bool> => "isRegistered",
        pub dba_name: Option<String> => "dbaName",
        pub outlet_name: Option<String> => "outletName",
        pub effective_date: Option<Timestamp> => "effectiveDate",
        pub end_date: Option<Timestamp> => "endDate",
        pub last_transaction_date: Option<Timestamp> => "lastTransactionDate",
        pub registered_date: Option<Timestamp> => "registeredDate",
        pub created_date: Option<Timestamp> => "createdDate",
        pub modified_date: Option<Timestamp> => "modifiedDate",
    }
}
