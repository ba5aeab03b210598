//! Code list tests

use taxcalc_sdk::catalog;
use serde::Serialize;
use serde_json::json;
use taxcalc_sdk::codec::{
    DecodeConfig, FromWire, IssueKind, UnknownEnumToken, WireEnum, WireModel, decode_value,
    encode_value,
};
use taxcalc_sdk::models::*;

fn assert_members_round_trip<E: WireEnum + FromWire + Serialize + std::fmt::Debug>() {
    let config = DecodeConfig::strict();
    for &member in E::MEMBERS {
        assert_eq!(E::from_wire_token(member.to_wire_token()), Ok(member));
        assert_eq!(E::from_code(i64::from(member.code())), Some(member));

        let encoded = encode_value(&member).unwrap();
        assert_eq!(encoded, json!(member.wire_token()));
        assert_eq!(decode_value::<E>(&encoded, &config).unwrap().into_inner(), member);
        assert_eq!(
            decode_value::<E>(&json!(member.code()), &config).unwrap().into_inner(),
            member
        );
    }
}

mod token_tests {
    use super::*;

    #[test]
    fn test_every_member_round_trips() {
        assert_members_round_trip::<DocumentStatus>();
        assert_members_round_trip::<DocumentType>();
        assert_members_round_trip::<TransactionAddressType>();
        assert_members_round_trip::<TaxOverrideType>();
        assert_members_round_trip::<VoidReasonCode>();
        assert_members_round_trip::<AdjustmentReason>();
        assert_members_round_trip::<AccountStatusId>();
        assert_members_round_trip::<AccountTypeId>();
        assert_members_round_trip::<AddressCategoryId>();
        assert_members_round_trip::<BoundaryLevel>();
        assert_members_round_trip::<JurisdictionType>();
        assert_members_round_trip::<JurisTypeId>();
        assert_members_round_trip::<TaxType>();
        assert_members_round_trip::<RateType>();
        assert_members_round_trip::<Sourcing>();
        assert_members_round_trip::<NexusTypeId>();
        assert_members_round_trip::<FilingFrequencyId>();
        assert_members_round_trip::<FilingStatusId>();
        assert_members_round_trip::<WorksheetTypeId>();
        assert_members_round_trip::<SecurityRoleId>();
        assert_members_round_trip::<PasswordStatusId>();
        assert_members_round_trip::<CompanyAccessLevel>();
        assert_members_round_trip::<AuthenticationTypeId>();
        assert_members_round_trip::<ErrorCodeId>();
        assert_members_round_trip::<ErrorTargetCode>();
        assert_members_round_trip::<SeverityLevel>();
    }

    #[test]
    fn test_unknown_token() {
        let err = DocumentType::from_wire_token("LayawayOrder").unwrap_err();
        assert_eq!(err, UnknownEnumToken::new("DocumentType", "LayawayOrder"));
        assert_eq!(err.to_string(), "unknown DocumentType token 'LayawayOrder'");
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!(DocumentStatus::from_wire_token("committed").is_err());
        assert_eq!("Committed".parse::<DocumentStatus>(), Ok(DocumentStatus::Committed));
    }

    #[test]
    fn test_codes_are_unique_per_enum() {
        for entry in catalog::enums() {
            let mut codes: Vec<i32> = entry.members().iter().map(|(_, code)| *code).collect();
            let total = codes.len();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), total, "duplicate code in {}", entry.name);
        }
    }
}

mod code_tests {
    use super::*;

    #[test]
    fn test_char_coded_families() {
        assert_eq!(TaxType::Sales.code(), i32::from(b'S'));
        assert_eq!(RateType::General.code(), i32::from(b'G'));
        assert_eq!(Sourcing::Origin.code(), i32::from(b'O'));
        assert_eq!(Sourcing::from_code(68), Some(Sourcing::Destination));
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(VoidReasonCode::try_from(3), Ok(VoidReasonCode::DocVoided));
        let err = VoidReasonCode::try_from(99).unwrap_err();
        assert_eq!(err.token, "99");
    }

    #[test]
    fn test_members_named_error_convert() {
        assert_eq!(SeverityLevel::try_from(2), Ok(SeverityLevel::Error));
        assert_eq!(SeverityLevel::try_from(3), Ok(SeverityLevel::Exception));
        assert_eq!(
            SeverityLevel::try_from(9),
            Err(UnknownEnumToken::new("SeverityLevel", "9"))
        );
        assert_eq!("Error".parse::<SeverityLevel>(), Ok(SeverityLevel::Error));
        assert!("Err".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn test_fractional_code_is_invalid_not_unknown() {
        // Same outcome in lenient mode: only unknown tokens are demoted
        let err = DocumentStatusModel::from_json(r#"{"id": 1, "status": 2.5}"#).unwrap_err();
        assert!(matches!(
            &err.issue_at("status").unwrap().kind,
            IssueKind::InvalidValue { expected: "DocumentStatus", reason } if reason.contains("not a whole number")
        ));

        let err = DocumentStatusModel::from_json(r#"{"id": 1, "status": 18446744073709551615}"#).unwrap_err();
        assert!(matches!(
            &err.issue_at("status").unwrap().kind,
            IssueKind::InvalidValue { reason, .. } if reason.contains("out of range")
        ));

        let decoded = DocumentStatusModel::from_json(r#"{"id": 1, "status": 77}"#).unwrap();
        assert_eq!(decoded.value.status, None);
        assert!(matches!(
            decoded.warnings[0].kind,
            IssueKind::UnknownEnumToken { enum_name: "DocumentStatus", .. }
        ));
    }

    #[test]
    fn test_serde_writes_names_and_reads_both() {
        assert_eq!(serde_json::to_string(&DocumentStatus::Adjusted).unwrap(), "\"Adjusted\"");
        assert_eq!(
            serde_json::from_str::<DocumentStatus>("5").unwrap(),
            DocumentStatus::Adjusted
        );
        assert_eq!(
            serde_json::from_str::<DocumentStatus>("\"Adjusted\"").unwrap(),
            DocumentStatus::Adjusted
        );
        assert!(serde_json::from_str::<DocumentStatus>("\"Archived\"").is_err());
    }

    #[test]
    fn test_negative_code() {
        assert_eq!(DocumentType::from_code(-1), Some(DocumentType::Any));
        assert_eq!(DocumentType::Any.to_string(), "Any");
    }
}
