//! Name-based access to every model and enum
//!
//! Used where the type is only known at runtime, such as the CLI's
//! `decode <MODEL>` command.

use serde_json::Value;
use thiserror::Error;

use crate::codec::{
    DecodeConfig, DecodeError, Decoded, EncodeError, FieldSpec, WireEnum, WireModel, decode_value,
    encode_value,
};
use crate::models::*;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

type TranscodeFn = fn(&Value, &DecodeConfig) -> Result<Decoded<Value>, TranscodeError>;

/// One model in the catalog
#[derive(Clone, Copy)]
pub struct ModelEntry {
    pub name: &'static str,
    /// API area (module) the model belongs to
    pub area: &'static str,
    pub fields: &'static [FieldSpec],
    transcode: TranscodeFn,
}

impl ModelEntry {
    fn of<T: WireModel>(area: &'static str) -> Self {
        Self {
            name: T::MODEL_NAME,
            area,
            fields: T::FIELDS,
            transcode: transcode_as::<T>,
        }
    }

    /// Decode `json` as this model and re-encode it in normalized form
    pub fn transcode(&self, json: &str, config: &DecodeConfig) -> Result<Decoded<Value>, TranscodeError> {
        let value: Value = serde_json::from_str(json).map_err(DecodeError::from)?;
        self.transcode_value(&value, config)
    }

    pub fn transcode_value(&self, value: &Value, config: &DecodeConfig) -> Result<Decoded<Value>, TranscodeError> {
        (self.transcode)(value, config)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}

impl std::fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelEntry")
            .field("name", &self.name)
            .field("area", &self.area)
            .field("fields", &self.fields.len())
            .finish()
    }
}

fn transcode_as<T: WireModel>(value: &Value, config: &DecodeConfig) -> Result<Decoded<Value>, TranscodeError> {
    let decoded = decode_value::<T>(value, config)?;
    let normalized = encode_value(&decoded.value)?;
    Ok(Decoded {
        value: normalized,
        warnings: decoded.warnings,
    })
}

/// One enum in the catalog
#[derive(Clone, Copy)]
pub struct EnumEntry {
    pub name: &'static str,
    table: fn() -> Vec<(&'static str, i32)>,
}

impl EnumEntry {
    fn of<E: WireEnum>() -> Self {
        Self {
            name: E::ENUM_NAME,
            table: E::table,
        }
    }

    /// `(name, code)` for every member, in declaration order
    pub fn members(&self) -> Vec<(&'static str, i32)> {
        (self.table)()
    }

    pub fn code_of(&self, token: &str) -> Option<i32> {
        self.members()
            .into_iter()
            .find(|(name, _)| *name == token)
            .map(|(_, code)| code)
    }
}

impl std::fmt::Debug for EnumEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumEntry").field("name", &self.name).finish()
    }
}

/// Every model, grouped by area
pub fn models() -> Vec<ModelEntry> {
    vec![
        ModelEntry::of::<DocumentStatusModel>("common"),
        ModelEntry::of::<PingResultModel>("common"),
        ModelEntry::of::<AccountModel>("accounts"),
        ModelEntry::of::<AccountSummaryModel>("accounts"),
        ModelEntry::of::<SubscriptionModel>("accounts"),
        ModelEntry::of::<CompanyModel>("companies"),
        ModelEntry::of::<ContactModel>("companies"),
        ModelEntry::of::<LocationModel>("companies"),
        ModelEntry::of::<UserModel>("users"),
        ModelEntry::of::<UserEntitlementModel>("users"),
        ModelEntry::of::<CreateTransactionModel>("transactions"),
        ModelEntry::of::<LineItemModel>("transactions"),
        ModelEntry::of::<AddressesModel>("transactions"),
        ModelEntry::of::<AddressLocationInfo>("transactions"),
        ModelEntry::of::<TaxOverrideModel>("transactions"),
        ModelEntry::of::<TransactionParameterModel>("transactions"),
        ModelEntry::of::<TransactionModel>("transactions"),
        ModelEntry::of::<TransactionLineModel>("transactions"),
        ModelEntry::of::<TransactionLineDetailModel>("transactions"),
        ModelEntry::of::<TransactionSummary>("transactions"),
        ModelEntry::of::<TransactionAddressModel>("transactions"),
        ModelEntry::of::<TransactionMessage>("transactions"),
        ModelEntry::of::<CommitTransactionModel>("transactions"),
        ModelEntry::of::<VoidTransactionModel>("transactions"),
        ModelEntry::of::<AdjustTransactionModel>("transactions"),
        ModelEntry::of::<TaxCodeModel>("definitions"),
        ModelEntry::of::<NexusModel>("definitions"),
        ModelEntry::of::<TaxRateModel>("definitions"),
        ModelEntry::of::<RateModel>("definitions"),
        ModelEntry::of::<FilingModel>("filings"),
        ModelEntry::of::<FilingRegionModel>("filings"),
        ModelEntry::of::<ApproveFilingsModel>("filings"),
        ModelEntry::of::<ErrorResult>("errors"),
        ModelEntry::of::<ErrorInfo>("errors"),
        ModelEntry::of::<ErrorDetail>("errors"),
    ]
}

pub fn enums() -> Vec<EnumEntry> {
    vec![
        EnumEntry::of::<DocumentStatus>(),
        EnumEntry::of::<DocumentType>(),
        EnumEntry::of::<TransactionAddressType>(),
        EnumEntry::of::<TaxOverrideType>(),
        EnumEntry::of::<VoidReasonCode>(),
        EnumEntry::of::<AdjustmentReason>(),
        EnumEntry::of::<AccountStatusId>(),
        EnumEntry::of::<AccountTypeId>(),
        EnumEntry::of::<AddressCategoryId>(),
        EnumEntry::of::<BoundaryLevel>(),
        EnumEntry::of::<JurisdictionType>(),
        EnumEntry::of::<JurisTypeId>(),
        EnumEntry::of::<TaxType>(),
        EnumEntry::of::<RateType>(),
        EnumEntry::of::<Sourcing>(),
        EnumEntry::of::<NexusTypeId>(),
        EnumEntry::of::<FilingFrequencyId>(),
        EnumEntry::of::<FilingStatusId>(),
        EnumEntry::of::<WorksheetTypeId>(),
        EnumEntry::of::<SecurityRoleId>(),
        EnumEntry::of::<PasswordStatusId>(),
        EnumEntry::of::<CompanyAccessLevel>(),
        EnumEntry::of::<AuthenticationTypeId>(),
        EnumEntry::of::<ErrorCodeId>(),
        EnumEntry::of::<ErrorTargetCode>(),
        EnumEntry::of::<SeverityLevel>(),
    ]
}

/// Look up a model by name (case-insensitive)
pub fn find_model(name: &str) -> Option<ModelEntry> {
    models()
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Look up an enum by name (case-insensitive)
pub fn find_enum(name: &str) -> Option<EnumEntry> {
    enums()
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}
