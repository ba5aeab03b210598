//! Tax codes, nexus declarations and rate lookups

use super::enums::{JurisTypeId, JurisdictionType, NexusTypeId, Sourcing};
use crate::codec::Timestamp;

wire_model! {
    /// A product or service tax code
    pub struct TaxCodeModel {
        pub id: i32 => "id",
        pub company_id: i32 => "companyId",
        /// Code such as `P0000000` (tangible personal property)
        pub tax_code: String => "taxCode",
        /// `P` for product, `S` for service, ...
        pub tax_code_type_id: Option<String> => "taxCodeTypeId",
        pub description: Option<String> => "description",
        pub parent_tax_code: Option<String> => "parentTaxCode",
        pub is_physical: Option<bool> => "isPhysical",
        pub goods_service_code: Option<i64> => "goodsServiceCode",
        pub entity_use_code: Option<String> => "entityUseCode",
        pub is_active: Option<bool> => "isActive",
        pub is_sst_certified: Option<bool> => "isSSTCertified",
        pub created_date: Option<Timestamp> => "createdDate",
        pub created_user_id: Option<i32> => "createdUserId",
        pub modified_date: Option<Timestamp> => "modifiedDate",
        pub modified_user_id: Option<i32> => "modifiedUserId",
    }
}

wire_model! {
    /// A jurisdiction where a company is obliged to collect tax
    pub struct NexusModel {
        pub id: i32 => "id",
        pub company_id: i32 => "companyId",
        pub country: String => "country",
        pub region: String => "region",
        pub juris_type_id: Option<JurisTypeId> => "jurisTypeId",
        pub juris_code: String => "jurisCode",
        pub juris_name: String => "jurisName",
        pub effective_date: Option<Timestamp> => "effectiveDate",
        pub end_date: Option<Timestamp> => "endDate",
        pub short_name: Option<String> => "shortName",
        pub signature_code: Option<String> => "signatureCode",
        pub state_assigned_no: Option<String> => "stateAssignedNo",
        pub nexus_type_id: Option<NexusTypeId> => "nexusTypeId",
        pub sourcing: Option<Sourcing> => "sourcing",
        pub has_local_nexus: Option<bool> => "hasLocalNexus",
        pub has_permanent_establishment: Option<bool> => "hasPermanentEstablishment",
        pub tax_id: Option<String> => "taxId",
        pub streamlined_sales_tax: Option<bool> => "streamlinedSalesTax",
        pub is_sst_active: Option<bool> => "isSSTActive",
        pub tax_type_group: Option<String> => "taxTypeGroup",
        pub nexus_tax_type_group: Option<String> => "nexusTaxTypeGroup",
        pub tax_authority_id: Option<i64> => "taxAuthorityId",
        pub is_seller_importer_of_record: Option<bool> => "isSellerImporterOfRecord",
        pub created_date: Option<Timestamp> => "createdDate",
        pub modified_date: Option<Timestamp> => "modifiedDate",
    }
}

impl NexusModel {
    /// Whether the declaration is in force on `date` (end date inclusive)
    pub fn is_effective_on(&self, date: chrono::NaiveDate) -> bool {
        let started = self.effective_date.is_none_or(|start| start.date() <= date);
        let not_ended = self.end_date.is_none_or(|end| date <= end.date());
        started && not_ended
    }
}

wire_model! {
    /// Combined rate for an address, with its per-jurisdiction parts
    pub struct TaxRateModel {
        pub total_rate: f64 => "totalRate",
        pub rates: Option<Vec<RateModel>> => "rates",
    }
}

impl TaxRateModel {
    /// Sum of the component rates (may differ from `total_rate` by rounding)
    pub fn component_total(&self) -> f64 {
        self.rates
            .as_ref()
            .map(|rates| rates.iter().map(|r| r.rate).sum())
            .unwrap_or_default()
    }
}

wire_model! {
    /// One jurisdiction's share of a combined rate
    pub struct RateModel {
        pub rate: f64 => "rate",
        pub name: String => "name",
        pub jurisdiction_type: JurisdictionType => "type",
    }
}
