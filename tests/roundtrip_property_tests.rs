//! Property-based round-trip tests for request models

use chrono::NaiveDate;
use proptest::prelude::*;
use taxcalc_sdk::codec::WireModel;
use taxcalc_sdk::models::*;

/// Any finite double, including subnormals and values with 17 significant digits
fn amount_strategy() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("JSON numbers are finite", |v| v.is_finite())
}

fn line_strategy() -> impl Strategy<Value = LineItemModel> {
    (
        amount_strategy(),
        proptest::option::of(1u32..1000),
        proptest::option::of("[A-Z][0-9]{7}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,20}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop_oneof![
            Just(TaxOverrideType::None),
            Just(TaxOverrideType::TaxAmount),
            Just(TaxOverrideType::Exemption),
            Just(TaxOverrideType::TaxDate),
        ]),
    )
        .prop_map(|(amount, quantity, tax_code, description, discounted, override_type)| {
            let mut line = LineItemModel::new(amount);
            line.quantity = quantity.map(f64::from);
            line.tax_code = tax_code;
            line.description = description;
            line.discounted = discounted;
            line.tax_override = override_type.map(|override_type| TaxOverrideModel {
                override_type: Some(override_type),
                tax_amount: None,
                tax_date: None,
                reason: "audit".to_string(),
            });
            line
        })
}

fn request_strategy() -> impl Strategy<Value = CreateTransactionModel> {
    (
        "[A-Z0-9]{1,12}",
        (2000i32..2040, 1u32..=12, 1u32..=28),
        prop::collection::vec(line_strategy(), 0..8),
        proptest::option::of(prop_oneof![
            Just(DocumentType::SalesOrder),
            Just(DocumentType::SalesInvoice),
            Just(DocumentType::ReturnInvoice),
            Just(DocumentType::Any),
        ]),
    )
        .prop_map(|(customer, (y, m, d), lines, doc_type)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let mut request = CreateTransactionModel::new(customer, date, lines);
            request.doc_type = doc_type;
            request
        })
}

/// Property: decoding the encoding of any line item yields the same line item.
#[test]
fn prop_line_item_round_trip() {
    proptest!(|(line in line_strategy())| {
        let json = line.to_json().unwrap();
        let decoded = LineItemModel::from_json(&json).unwrap();
        prop_assert!(decoded.is_clean());
        let decoded = decoded.into_inner();
        prop_assert_eq!(decoded.amount.to_bits(), line.amount.to_bits());
        prop_assert_eq!(decoded, line);
    });
}

/// Shortest-form decimals that a non-correctly-rounded parser reads one ulp off
#[test]
fn test_amounts_round_trip_bit_exact() {
    for amount in [971.9863718547629, 0.1 + 0.2, 5e-324, f64::MAX, -1.7976931348623157e308] {
        let line = LineItemModel::new(amount);
        let back = LineItemModel::from_json(&line.to_json().unwrap()).unwrap().into_inner();
        assert_eq!(back.amount.to_bits(), amount.to_bits(), "{}", amount);
    }
}

/// Property: requests round-trip and encode deterministically.
#[test]
fn prop_request_round_trip_and_idempotent_encoding() {
    proptest!(|(request in request_strategy())| {
        let first = request.to_json().unwrap();
        let second = request.to_json().unwrap();
        prop_assert_eq!(&first, &second);

        let back = CreateTransactionModel::from_json(&first).unwrap().into_inner();
        prop_assert_eq!(back.to_json().unwrap(), first);
        prop_assert_eq!(back, request);
    });
}
