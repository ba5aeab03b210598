//! Tax returns prepared for filing

use super::enums::{FilingFrequencyId, FilingStatusId, WorksheetTypeId};
use crate::codec::Timestamp;

wire_model! {
    /// All returns of one company for one filing period
    pub struct FilingModel {
        pub id: i64 => "id",
        pub company_id: i32 => "companyId",
        pub month: i32 => "month",
        pub year: i32 => "year",
        pub worksheet_type: Option<WorksheetTypeId> => "type",
        pub created_date: Option<Timestamp> => "createdDate",
        pub created_user_id: Option<i32> => "createdUserId",
        pub modified_date: Option<Timestamp> => "modifiedDate",
        pub modified_user_id: Option<i32> => "modifiedUserId",
        pub filing_regions: Option<Vec<FilingRegionModel>> => "filingRegions",
    }
}

impl FilingModel {
    /// Regions still waiting for approval
    pub fn pending_regions(&self) -> impl Iterator<Item = &FilingRegionModel> {
        self.filing_regions
            .iter()
            .flatten()
            .filter(|r| r.status == Some(FilingStatusId::PendingApproval))
    }

    pub fn is_fully_approved(&self) -> bool {
        self.pending_regions().next().is_none()
    }
}

wire_model! {
    /// Returns for one country and region within a filing
    pub struct FilingRegionModel {
        pub id: i64 => "id",
        pub filing_id: i64 => "filingId",
        pub country: String => "country",
        pub region: String => "region",
        pub sales_amount: Option<f64> => "salesAmount",
        pub taxable_amount: Option<f64> => "taxableAmount",
        pub tax_amount: Option<f64> => "taxAmount",
        pub collect_amount: Option<f64> => "collectAmount",
        pub total_remittance_amount: Option<f64> => "totalRemittanceAmount",
        pub non_taxable_amount: Option<f64> => "nonTaxableAmount",
        pub filing_frequency_id: Option<FilingFrequencyId> => "filingFrequencyId",
        pub status: Option<FilingStatusId> => "status",
        pub start_date: Option<Timestamp> => "startDate",
        pub end_date: Option<Timestamp> => "endDate",
        pub has_nexus: Option<bool> => "hasNexus",
        pub approve_date: Option<Timestamp> => "approveDate",
        pub created_date: Option<Timestamp> => "createdDate",
        pub modified_date: Option<Timestamp> => "modifiedDate",
    }
}

wire_model! {
    /// Request body approving (or un-approving) a filing period
    pub struct ApproveFilingsModel {
        pub approve: bool => "approve",
    }
}
