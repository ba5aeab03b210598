//! Transaction requests and results
//!
//! `CreateTransactionModel` is the request for tax calculation; the service
//! answers with a `TransactionModel` holding per-line results
//! (`TransactionLineModel`), their jurisdiction breakdown
//! (`TransactionLineDetailModel`) and a document-level summary.

use super::enums::{
    AdjustmentReason, BoundaryLevel, DocumentStatus, DocumentType, JurisTypeId, JurisdictionType,
    RateType, SeverityLevel, Sourcing, TaxOverrideType, TaxType, VoidReasonCode,
};
use crate::codec::Timestamp;

wire_model! {
    /// Request body for creating (and optionally committing) a transaction
    pub struct CreateTransactionModel {
        /// Document code; generated by the service when absent
        pub code: Option<String> => "code",
        pub lines: Vec<LineItemModel> => "lines",
        /// Defaults to `SalesOrder` on the service side
        pub doc_type: Option<DocumentType> => "type",
        pub company_code: Option<String> => "companyCode",
        pub date: Timestamp => "date",
        pub salesperson_code: Option<String> => "salespersonCode",
        pub customer_code: String => "customerCode",
        pub entity_use_code: Option<String> => "entityUseCode",
        /// Document-level discount, spread over lines marked `discounted`
        pub discount: Option<f64> => "discount",
        pub purchase_order_no: Option<String> => "purchaseOrderNo",
        pub exemption_no: Option<String> => "exemptionNo",
        pub addresses: Option<AddressesModel> => "addresses",
        pub parameters: Option<Vec<TransactionParameterModel>> => "parameters",
        pub reference_code: Option<String> => "referenceCode",
        pub reporting_location_code: Option<String> => "reportingLocationCode",
        pub commit: Option<bool> => "commit",
        pub batch_code: Option<String> => "batchCode",
        pub tax_override: Option<TaxOverrideModel> => "taxOverride",
        /// Three-character ISO 4217 currency code
        pub currency_code: Option<String> => "currencyCode",
        pub exchange_rate: Option<f64> => "exchangeRate",
        pub exchange_rate_effective_date: Option<Timestamp> => "exchangeRateEffectiveDate",
        pub pos_lane_code: Option<String> => "posLaneCode",
        pub business_identification_no: Option<String> => "businessIdentificationNo",
        pub is_seller_importer_of_record: Option<bool> => "isSellerImporterOfRecord",
        pub description: Option<String> => "description",
        pub email: Option<String> => "email",
    }
}

impl CreateTransactionModel {
    pub fn new(customer_code: impl Into<String>, date: impl Into<Timestamp>, lines: Vec<LineItemModel>) -> Self {
        Self {
            code: None,
            lines,
            doc_type: None,
            company_code: None,
            date: date.into(),
            salesperson_code: None,
            customer_code: customer_code.into(),
            entity_use_code: None,
            discount: None,
            purchase_order_no: None,
            exemption_no: None,
            addresses: None,
            parameters: None,
            reference_code: None,
            reporting_location_code: None,
            commit: None,
            batch_code: None,
            tax_override: None,
            currency_code: None,
            exchange_rate: None,
            exchange_rate_effective_date: None,
            pos_lane_code: None,
            business_identification_no: None,
            is_seller_importer_of_record: None,
            description: None,
            email: None,
        }
    }

    pub fn with_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    pub fn with_company_code(mut self, company_code: impl Into<String>) -> Self {
        self.company_code = Some(company_code.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_addresses(mut self, addresses: AddressesModel) -> Self {
        self.addresses = Some(addresses);
        self
    }

    pub fn with_commit(mut self, commit: bool) -> Self {
        self.commit = Some(commit);
        self
    }

    /// Sum of line amounts before tax
    pub fn total_amount(&self) -> f64 {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

wire_model! {
    /// One line of a transaction request
    pub struct LineItemModel {
        /// Line number; assigned sequentially when absent
        pub number: Option<String> => "number",
        pub quantity: Option<f64> => "quantity",
        /// Total amount for the line (not unit price)
        pub amount: f64 => "amount",
        /// Per-line address override
        pub addresses: Option<AddressesModel> => "addresses",
        pub tax_code: Option<String> => "taxCode",
        pub entity_use_code: Option<String> => "entityUseCode",
        pub item_code: Option<String> => "itemCode",
        pub exemption_code: Option<String> => "exemptionCode",
        pub discounted: Option<bool> => "discounted",
        /// `amount` already includes tax
        pub tax_included: Option<bool> => "taxIncluded",
        pub revenue_account: Option<String> => "revenueAccount",
        pub ref1: Option<String> => "ref1",
        pub ref2: Option<String> => "ref2",
        pub description: Option<String> => "description",
        pub business_identification_no: Option<String> => "businessIdentificationNo",
        pub tax_override: Option<TaxOverrideModel> => "taxOverride",
        pub parameters: Option<Vec<TransactionParameterModel>> => "parameters",
        /// Harmonized System code for cross-border goods
        pub hs_code: Option<String> => "hsCode",
        pub merchant_seller_id: Option<i64> => "merchantSellerId",
    }
}

impl LineItemModel {
    pub fn new(amount: f64) -> Self {
        Self {
            number: None,
            quantity: None,
            amount,
            addresses: None,
            tax_code: None,
            entity_use_code: None,
            item_code: None,
            exemption_code: None,
            discounted: None,
            tax_included: None,
            revenue_account: None,
            ref1: None,
            ref2: None,
            description: None,
            business_identification_no: None,
            tax_override: None,
            parameters: None,
            hs_code: None,
            merchant_seller_id: None,
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_tax_code(mut self, tax_code: impl Into<String>) -> Self {
        self.tax_code = Some(tax_code.into());
        self
    }

    pub fn with_item_code(mut self, item_code: impl Into<String>) -> Self {
        self.item_code = Some(item_code.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

wire_model! {
    /// The addresses of a transaction or line, by role
    pub struct AddressesModel {
        /// Use instead of ship-from/ship-to when the sale happens at one place
        pub single_location: Option<AddressLocationInfo> => "singleLocation",
        pub ship_from: Option<AddressLocationInfo> => "shipFrom",
        pub ship_to: Option<AddressLocationInfo> => "shipTo",
        pub point_of_order_origin: Option<AddressLocationInfo> => "pointOfOrderOrigin",
        pub point_of_order_acceptance: Option<AddressLocationInfo> => "pointOfOrderAcceptance",
    }
}

impl AddressesModel {
    pub fn single_location(address: AddressLocationInfo) -> Self {
        Self {
            single_location: Some(address),
            ship_from: None,
            ship_to: None,
            point_of_order_origin: None,
            point_of_order_acceptance: None,
        }
    }

    pub fn shipping(from: AddressLocationInfo, to: AddressLocationInfo) -> Self {
        Self {
            single_location: None,
            ship_from: Some(from),
            ship_to: Some(to),
            point_of_order_origin: None,
            point_of_order_acceptance: None,
        }
    }
}

wire_model! {
    /// An address given inline, by location code, or by coordinates
    pub struct AddressLocationInfo {
        /// Refers to a stored company location instead of an inline address
        pub location_code: Option<String> => "locationCode",
        pub line1: Option<String> => "line1",
        pub line2: Option<String> => "line2",
        pub line3: Option<String> => "line3",
        pub city: Option<String> => "city",
        /// State, province or region code
        pub region: Option<String> => "region",
        pub country: Option<String> => "country",
        pub postal_code: Option<String> => "postalCode",
        pub latitude: Option<f64> => "latitude",
        pub longitude: Option<f64> => "longitude",
    }
}

impl AddressLocationInfo {
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            location_code: None,
            line1: Some(line1.into()),
            line2: None,
            line3: None,
            city: Some(city.into()),
            region: Some(region.into()),
            country: Some(country.into()),
            postal_code: Some(postal_code.into()),
            latitude: None,
            longitude: None,
        }
    }

    pub fn from_location_code(location_code: impl Into<String>) -> Self {
        Self {
            location_code: Some(location_code.into()),
            line1: None,
            line2: None,
            line3: None,
            city: None,
            region: None,
            country: None,
            postal_code: None,
            latitude: None,
            longitude: None,
        }
    }
}

wire_model! {
    /// Override of the calculated tax for a document or line
    pub struct TaxOverrideModel {
        pub override_type: Option<TaxOverrideType> => "type",
        pub tax_amount: Option<f64> => "taxAmount",
        pub tax_date: Option<Timestamp> => "taxDate",
        /// Audit reason; required by the service for every override
        pub reason: String => "reason",
    }
}

wire_model! {
    /// Extra named value attached to a transaction or line
    pub struct TransactionParameterModel {
        pub name: String => "name",
        pub value: String => "value",
        pub unit: Option<String> => "unit",
    }
}

wire_model! {
    /// A calculated transaction as stored by the service
    pub struct TransactionModel {
        pub id: i64 => "id",
        pub code: Option<String> => "code",
        pub company_id: Option<i32> => "companyId",
        pub date: Option<Timestamp> => "date",
        pub status: Option<DocumentStatus> => "status",
        pub doc_type: Option<DocumentType> => "type",
        pub batch_code: Option<String> => "batchCode",
        pub currency_code: Option<String> => "currencyCode",
        pub entity_use_code: Option<String> => "entityUseCode",
        pub customer_vendor_code: Option<String> => "customerVendorCode",
        pub customer_code: Option<String> => "customerCode",
        pub exempt_no: Option<String> => "exemptNo",
        pub reconciled: Option<bool> => "reconciled",
        pub location_code: Option<String> => "locationCode",
        pub reporting_location_code: Option<String> => "reportingLocationCode",
        pub purchase_order_no: Option<String> => "purchaseOrderNo",
        pub reference_code: Option<String> => "referenceCode",
        pub salesperson_code: Option<String> => "salespersonCode",
        pub tax_override_type: Option<TaxOverrideType> => "taxOverrideType",
        pub tax_override_amount: Option<f64> => "taxOverrideAmount",
        pub tax_override_reason: Option<String> => "taxOverrideReason",
        pub total_amount: Option<f64> => "totalAmount",
        pub total_exempt: Option<f64> => "totalExempt",
        pub total_discount: Option<f64> => "totalDiscount",
        pub total_tax: Option<f64> => "totalTax",
        pub total_taxable: Option<f64> => "totalTaxable",
        /// Tax before any override was applied
        pub total_tax_calculated: Option<f64> => "totalTaxCalculated",
        pub adjustment_reason: Option<AdjustmentReason> => "adjustmentReason",
        pub adjustment_description: Option<String> => "adjustmentDescription",
        pub locked: Option<bool> => "locked",
        pub region: Option<String> => "region",
        pub country: Option<String> => "country",
        pub version: Option<i32> => "version",
        pub software_version: Option<String> => "softwareVersion",
        pub origin_address_id: Option<i64> => "originAddressId",
        pub destination_address_id: Option<i64> => "destinationAddressId",
        pub exchange_rate_effective_date: Option<Timestamp> => "exchangeRateEffectiveDate",
        pub exchange_rate: Option<f64> => "exchangeRate",
        pub is_seller_importer_of_record: Option<bool> => "isSellerImporterOfRecord",
        pub description: Option<String> => "description",
        pub email: Option<String> => "email",
        pub modified_date: Option<Timestamp> => "modifiedDate",
        pub modified_user_id: Option<i32> => "modifiedUserId",
        pub tax_date: Option<Timestamp> => "taxDate",
        pub lines: Option<Vec<TransactionLineModel>> => "lines",
        pub addresses: Option<Vec<TransactionAddressModel>> => "addresses",
        pub summary: Option<Vec<TransactionSummary>> => "summary",
        pub messages: Option<Vec<TransactionMessage>> => "messages",
        pub parameters: Option<Vec<TransactionParameterModel>> => "parameters",
    }
}

impl TransactionModel {
    pub fn is_committed(&self) -> bool {
        self.status == Some(DocumentStatus::Committed)
    }

    /// Find a line by its line number
    pub fn line(&self, line_number: &str) -> Option<&TransactionLineModel> {
        self.lines
            .as_ref()?
            .iter()
            .find(|line| line.line_number.as_deref() == Some(line_number))
    }

    /// Messages at `Error` severity or above
    pub fn error_messages(&self) -> Vec<&TransactionMessage> {
        self.messages
            .iter()
            .flatten()
            .filter(|m| {
                matches!(
                    m.severity,
                    Some(SeverityLevel::Error) | Some(SeverityLevel::Exception)
                )
            })
            .collect()
    }
}

wire_model! {
    /// Calculated result for one line
    pub struct TransactionLineModel {
        pub id: Option<i64> => "id",
        pub transaction_id: Option<i64> => "transactionId",
        pub line_number: Option<String> => "lineNumber",
        pub boundary_override_id: Option<i32> => "boundaryOverrideId",
        pub entity_use_code: Option<String> => "entityUseCode",
        pub description: Option<String> => "description",
        pub destination_address_id: Option<i64> => "destinationAddressId",
        pub origin_address_id: Option<i64> => "originAddressId",
        pub discount_amount: Option<f64> => "discountAmount",
        pub exempt_amount: Option<f64> => "exemptAmount",
        pub exempt_cert_id: Option<i32> => "exemptCertId",
        pub exempt_no: Option<String> => "exemptNo",
        pub is_item_taxable: Option<bool> => "isItemTaxable",
        pub is_sstp: Option<bool> => "isSSTP",
        pub item_code: Option<String> => "itemCode",
        pub line_amount: Option<f64> => "lineAmount",
        pub quantity: Option<f64> => "quantity",
        pub ref1: Option<String> => "ref1",
        pub ref2: Option<String> => "ref2",
        pub reporting_date: Option<Timestamp> => "reportingDate",
        pub rev_account: Option<String> => "revAccount",
        pub sourcing: Option<Sourcing> => "sourcing",
        pub tax: Option<f64> => "tax",
        pub taxable_amount: Option<f64> => "taxableAmount",
        pub tax_calculated: Option<f64> => "taxCalculated",
        pub tax_code: Option<String> => "taxCode",
        pub tax_code_id: Option<i32> => "taxCodeId",
        pub tax_date: Option<Timestamp> => "taxDate",
        pub tax_engine: Option<String> => "taxEngine",
        pub tax_override_type: Option<TaxOverrideType> => "taxOverrideType",
        pub business_identification_no: Option<String> => "businessIdentificationNo",
        pub tax_override_amount: Option<f64> => "taxOverrideAmount",
        pub tax_override_reason: Option<String> => "taxOverrideReason",
        pub tax_included: Option<bool> => "taxIncluded",
        pub details: Option<Vec<TransactionLineDetailModel>> => "details",
        pub parameters: Option<Vec<TransactionParameterModel>> => "parameters",
        pub hs_code: Option<String> => "hsCode",
    }
}

impl TransactionLineModel {
    /// Sum of detail-level tax (0 when details were not included)
    pub fn detail_tax(&self) -> f64 {
        self.details
            .iter()
            .flatten()
            .filter_map(|d| d.tax)
            .sum()
    }
}

wire_model! {
    /// Tax for one line in one jurisdiction
    pub struct TransactionLineDetailModel {
        pub id: Option<i64> => "id",
        pub transaction_line_id: Option<i64> => "transactionLineId",
        pub transaction_id: Option<i64> => "transactionId",
        pub address_id: Option<i64> => "addressId",
        pub country: Option<String> => "country",
        pub region: Option<String> => "region",
        pub county_fips: Option<String> => "countyFIPS",
        pub state_fips: Option<String> => "stateFIPS",
        pub exempt_amount: Option<f64> => "exemptAmount",
        pub exempt_reason_id: Option<i32> => "exemptReasonId",
        pub in_state: Option<bool> => "inState",
        pub juris_code: Option<String> => "jurisCode",
        pub juris_name: Option<String> => "jurisName",
        pub jurisdiction_id: Option<i32> => "jurisdictionId",
        pub signature_code: Option<String> => "signatureCode",
        pub state_assigned_no: Option<String> => "stateAssignedNo",
        pub juris_type: Option<JurisTypeId> => "jurisType",
        pub jurisdiction_type: Option<JurisdictionType> => "jurisdictionType",
        pub non_taxable_amount: Option<f64> => "nonTaxableAmount",
        pub non_taxable_rule_id: Option<i32> => "nonTaxableRuleId",
        pub non_taxable_type: Option<String> => "nonTaxableType",
        pub rate: Option<f64> => "rate",
        pub rate_rule_id: Option<i32> => "rateRuleId",
        pub rate_source_id: Option<i32> => "rateSourceId",
        pub ser_code: Option<String> => "serCode",
        pub sourcing: Option<Sourcing> => "sourcing",
        pub tax: Option<f64> => "tax",
        pub taxable_amount: Option<f64> => "taxableAmount",
        pub tax_type: Option<TaxType> => "taxType",
        pub tax_sub_type_id: Option<String> => "taxSubTypeId",
        pub tax_type_group_id: Option<String> => "taxTypeGroupId",
        pub tax_name: Option<String> => "taxName",
        pub tax_authority_type_id: Option<i32> => "taxAuthorityTypeId",
        pub tax_region_id: Option<i32> => "taxRegionId",
        pub tax_calculated: Option<f64> => "taxCalculated",
        pub tax_override: Option<f64> => "taxOverride",
        pub rate_type: Option<RateType> => "rateType",
        pub rate_type_code: Option<String> => "rateTypeCode",
        pub taxable_units: Option<f64> => "taxableUnits",
        pub non_taxable_units: Option<f64> => "nonTaxableUnits",
        pub exempt_units: Option<f64> => "exemptUnits",
        pub unit_of_basis: Option<String> => "unitOfBasis",
        pub is_non_pass_thru: Option<bool> => "isNonPassThru",
        pub is_fee: Option<bool> => "isFee",
    }
}

wire_model! {
    /// Document-level tax per jurisdiction, tax type and rate
    pub struct TransactionSummary {
        pub country: Option<String> => "country",
        pub region: Option<String> => "region",
        pub juris_type: Option<JurisdictionType> => "jurisType",
        pub juris_code: Option<String> => "jurisCode",
        pub juris_name: Option<String> => "jurisName",
        pub tax_authority_type: Option<i32> => "taxAuthorityType",
        pub state_assigned_no: Option<String> => "stateAssignedNo",
        pub tax_type: Option<TaxType> => "taxType",
        pub tax_sub_type: Option<String> => "taxSubType",
        pub tax_name: Option<String> => "taxName",
        pub rate_type: Option<RateType> => "rateType",
        pub taxable: Option<f64> => "taxable",
        pub rate: Option<f64> => "rate",
        pub tax: Option<f64> => "tax",
        pub tax_calculated: Option<f64> => "taxCalculated",
        pub non_taxable: Option<f64> => "nonTaxable",
        pub exemption: Option<f64> => "exemption",
    }
}

wire_model! {
    /// An address as resolved and stored on a transaction
    pub struct TransactionAddressModel {
        pub id: Option<i64> => "id",
        pub transaction_id: Option<i64> => "transactionId",
        pub boundary_level: Option<BoundaryLevel> => "boundaryLevel",
        pub line1: Option<String> => "line1",
        pub line2: Option<String> => "line2",
        pub line3: Option<String> => "line3",
        pub city: Option<String> => "city",
        pub region: Option<String> => "region",
        pub postal_code: Option<String> => "postalCode",
        pub country: Option<String> => "country",
        pub tax_region_id: Option<i32> => "taxRegionId",
        /// Sent as a string by the service
        pub latitude: Option<String> => "latitude",
        pub longitude: Option<String> => "longitude",
    }
}

wire_model! {
    /// Informational message attached to a calculated transaction
    pub struct TransactionMessage {
        pub summary: Option<String> => "summary",
        pub details: Option<String> => "details",
        pub refers_to: Option<String> => "refersTo",
        pub severity: Option<SeverityLevel> => "severity",
        pub source: Option<String> => "source",
    }
}

wire_model! {
    /// Request body for committing a saved transaction
    pub struct CommitTransactionModel {
        pub commit: bool => "commit",
    }
}

wire_model! {
    /// Request body for voiding a transaction
    pub struct VoidTransactionModel {
        pub code: VoidReasonCode => "code",
    }
}

wire_model! {
    /// Request body for replacing a committed transaction
    pub struct AdjustTransactionModel {
        pub adjustment_reason: AdjustmentReason => "adjustmentReason",
        pub adjustment_description: Option<String> => "adjustmentDescription",
        pub new_transaction: CreateTransactionModel => "newTransaction",
    }
}
