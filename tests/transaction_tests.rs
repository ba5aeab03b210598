//! Transaction model tests

use chrono::NaiveDate;
use serde_json::json;
use taxcalc_sdk::codec::{DecodeConfig, EncodeError, IssueKind, Timestamp, WireModel, encode_value};
use taxcalc_sdk::models::*;

fn sample_request() -> CreateTransactionModel {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let lines = vec![
        LineItemModel::new(100.0).with_number("1").with_tax_code("P0000000"),
        LineItemModel::new(25.5).with_number("2").with_quantity(3.0),
    ];
    CreateTransactionModel::new("ABC", date, lines)
        .with_type(DocumentType::SalesInvoice)
        .with_company_code("DEFAULT")
        .with_addresses(AddressesModel::single_location(AddressLocationInfo::new(
            "2000 Main Street",
            "Irvine",
            "CA",
            "92614",
            "US",
        )))
}

const CALCULATED: &str = r#"{
    "id": 123456789,
    "code": "INV-1",
    "companyId": 12345,
    "date": "2024-06-01",
    "status": "Committed",
    "type": "SalesInvoice",
    "currencyCode": "USD",
    "totalAmount": 100.0,
    "totalTax": 7.75,
    "lines": [
        {
            "id": 1,
            "lineNumber": "1",
            "lineAmount": 100.0,
            "tax": 7.75,
            "sourcing": "Destination",
            "details": [
                {"jurisType": "STA", "jurisdictionType": "State", "rate": 0.06, "tax": 6.0, "taxType": "Sales", "rateType": "General"},
                {"jurisType": "CTY", "jurisdictionType": "County", "rate": 0.0175, "tax": 1.75, "taxType": "Sales", "rateType": "General"}
            ]
        }
    ],
    "summary": [
        {"country": "US", "region": "CA", "jurisType": "State", "taxType": "Sales", "rate": 0.06, "tax": 6.0}
    ],
    "messages": [
        {"summary": "Address not geocoded", "severity": "Warning", "refersTo": "Addresses[0]"}
    ]
}"#;

mod request_tests {
    use super::*;

    #[test]
    fn test_request_encodes_wire_keys() {
        let value = encode_value(&sample_request()).unwrap();

        assert_eq!(value["type"], json!("SalesInvoice"));
        assert_eq!(value["customerCode"], json!("ABC"));
        assert_eq!(value["date"], json!("2024-06-01"));
        assert_eq!(value["lines"][0]["taxCode"], json!("P0000000"));
        assert_eq!(value["addresses"]["singleLocation"]["postalCode"], json!("92614"));
        assert!(value.get("commit").is_none());
        assert!(value["lines"][1].get("taxCode").is_none());
    }

    #[test]
    fn test_request_round_trip() {
        let request = sample_request().with_commit(true);
        let back = CreateTransactionModel::from_json(&request.to_json().unwrap())
            .unwrap()
            .into_inner();
        assert_eq!(back, request);
        assert_eq!(back.total_amount(), 125.5);
    }

    #[test]
    fn test_non_finite_numbers_are_not_encoded() {
        let err = LineItemModel::new(f64::NAN).to_json().unwrap_err();
        assert!(matches!(&err, EncodeError::NonFinite { path } if path == "amount"));

        let err = LineItemModel::new(1.0).with_quantity(f64::INFINITY).to_json().unwrap_err();
        assert!(matches!(&err, EncodeError::NonFinite { path } if path == "quantity"));

        let mut request = sample_request();
        request.lines[1].amount = f64::NEG_INFINITY;
        let err = encode_value(&request).unwrap_err();
        assert_eq!(err.to_string(), "Non-finite number at 'lines[1].amount'");

        let mut request = sample_request();
        request.lines[0].tax_override = Some(TaxOverrideModel {
            override_type: Some(TaxOverrideType::TaxAmount),
            tax_amount: Some(f64::NAN),
            tax_date: None,
            reason: "audit".to_string(),
        });
        let err = request.to_json().unwrap_err();
        assert!(matches!(&err, EncodeError::NonFinite { path } if path == "lines[0].taxOverride.taxAmount"));

        let page = FetchResult::new(vec![LineItemModel::new(1.0), LineItemModel::new(f64::INFINITY)]);
        let err = page.to_json().unwrap_err();
        assert!(matches!(&err, EncodeError::NonFinite { path } if path == "value[1].amount"));
    }

    #[test]
    fn test_line_errors_are_indexed() {
        let json = json!({
            "customerCode": "ABC",
            "date": "2024-06-01",
            "lines": [
                {"amount": 10},
                {"quantity": 1},
                {"amount": "ten"}
            ]
        });
        let err = CreateTransactionModel::from_json(&json.to_string()).unwrap_err();

        assert_eq!(err.issues().len(), 2);
        assert!(err.issue_at("lines[1].amount").unwrap().is_missing_required());
        assert!(matches!(
            err.issue_at("lines[2].amount").unwrap().kind,
            IssueKind::TypeMismatch { expected: "number", .. }
        ));
    }

    #[test]
    fn test_missing_request_fields() {
        let err = CreateTransactionModel::from_json("{}").unwrap_err();
        let mut missing = err.missing_fields();
        missing.sort_unstable();
        assert_eq!(missing, vec!["customerCode", "date", "lines"]);
    }

    #[test]
    fn test_tax_override_requires_reason() {
        let json = r#"{"amount": 10, "taxOverride": {"type": "TaxDate", "taxDate": "2024-01-15"}}"#;
        let err = LineItemModel::from_json(json).unwrap_err();
        assert_eq!(err.missing_fields(), vec!["taxOverride.reason"]);
    }

    #[test]
    fn test_adjust_wraps_new_transaction() {
        let adjust = AdjustTransactionModel {
            adjustment_reason: AdjustmentReason::PriceAdjusted,
            adjustment_description: None,
            new_transaction: sample_request(),
        };
        let value = encode_value(&adjust).unwrap();
        assert_eq!(value["adjustmentReason"], json!("PriceAdjusted"));
        assert_eq!(value["newTransaction"]["customerCode"], json!("ABC"));

        let back = AdjustTransactionModel::from_json(&adjust.to_json().unwrap())
            .unwrap()
            .into_inner();
        assert_eq!(back, adjust);
    }

    #[test]
    fn test_void_requires_known_code() {
        let void = VoidTransactionModel::from_json(r#"{"code": "DocVoided"}"#).unwrap().into_inner();
        assert_eq!(void.code, VoidReasonCode::DocVoided);

        // Required enum: no leniency
        let err = VoidTransactionModel::from_json(r#"{"code": "Shredded"}"#).unwrap_err();
        assert!(matches!(
            err.issue_at("code").unwrap().kind,
            IssueKind::UnknownEnumToken { .. }
        ));
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn test_calculated_transaction() {
        let decoded = TransactionModel::from_json(CALCULATED).unwrap();
        assert!(decoded.is_clean());

        let tx = decoded.into_inner();
        assert_eq!(tx.id, 123456789);
        assert!(tx.is_committed());
        assert_eq!(tx.date, Some(Timestamp::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())));

        let line = tx.line("1").unwrap();
        assert_eq!(line.sourcing, Some(Sourcing::Destination));
        assert_eq!(line.detail_tax(), 7.75);

        let details = line.details.as_ref().unwrap();
        assert_eq!(details[0].juris_type, Some(JurisTypeId::STA));
        assert_eq!(details[1].jurisdiction_type, Some(JurisdictionType::County));
        assert_eq!(details[0].rate_type, Some(RateType::General));

        assert!(tx.error_messages().is_empty());
        assert_eq!(tx.messages.as_ref().unwrap()[0].severity, Some(SeverityLevel::Warning));
    }

    #[test]
    fn test_unknown_nested_token_is_dropped_with_path() {
        let json = CALCULATED.replace(r#""sourcing": "Destination""#, r#""sourcing": "Orbital""#);
        let decoded = TransactionModel::from_json(&json).unwrap();

        assert_eq!(decoded.warnings.len(), 1);
        assert_eq!(decoded.warnings[0].path, "lines[0].sourcing");
        assert_eq!(decoded.value.line("1").unwrap().sourcing, None);

        let err = TransactionModel::from_json_with(&json, &DecodeConfig::strict()).unwrap_err();
        assert!(err.issue_at("lines[0].sourcing").is_some());
    }

    #[test]
    fn test_transaction_round_trip() {
        let tx = TransactionModel::from_json(CALCULATED).unwrap().into_inner();
        let back = TransactionModel::from_json(&tx.to_json().unwrap()).unwrap().into_inner();
        assert_eq!(back, tx);
        assert_eq!(tx.to_json().unwrap(), back.to_json().unwrap());
    }

    #[test]
    fn test_fetch_result_of_transactions() {
        let json = format!(r#"{{"@recordsetCount": 1, "value": [{}]}}"#, CALCULATED);
        let page = FetchResult::<TransactionModel>::from_json(&json).unwrap().into_inner();
        assert_eq!(page.len(), 1);
        assert!(!page.has_next_page());
        assert_eq!(page.iter().next().map(|tx| tx.id), Some(123456789));
    }

    #[test]
    fn test_service_error_body() {
        let json = r#"{"error": {"code": "DocumentCodeConflict", "message": "Duplicate code", "target": "IncorrectData"}}"#;
        let err = ErrorResult::from_json(json).unwrap().into_inner().into_error();
        assert_eq!(err.code(), Some(ErrorCodeId::DocumentCodeConflict));
        assert_eq!(err.to_string(), "DocumentCodeConflict: Duplicate code");
    }
}
