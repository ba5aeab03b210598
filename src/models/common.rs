//! Shapes shared by many endpoints

use serde::Serialize;
use serde_json::Value;

use super::enums::{AuthenticationTypeId, DocumentStatus};
use crate::codec::{
    DecodeContext, FieldSpec, FromWire, ObjectReader, WireEnum, WireModel, WireSlot, decode_object,
    join_path,
};

/// One page of a list endpoint
///
/// List endpoints wrap their records in `value` and report the total count
/// and a link to the next page. Following `next_link` is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult<T> {
    /// Total number of records matching the query, across all pages
    #[serde(rename = "@recordsetCount", skip_serializing_if = "Option::is_none")]
    pub recordset_count: Option<i32>,
    pub value: Vec<T>,
    #[serde(rename = "@nextLink", skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    #[serde(rename = "pageKey", skip_serializing_if = "Option::is_none")]
    pub page_key: Option<String>,
}

const FETCH_RESULT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "recordset_count",
        wire_key: "@recordsetCount",
        rust_type: "Option<i32>",
        required: false,
    },
    FieldSpec {
        name: "value",
        wire_key: "value",
        rust_type: "Vec<T>",
        required: true,
    },
    FieldSpec {
        name: "next_link",
        wire_key: "@nextLink",
        rust_type: "Option<String>",
        required: false,
    },
    FieldSpec {
        name: "page_key",
        wire_key: "pageKey",
        rust_type: "Option<String>",
        required: false,
    },
];

impl<T> FetchResult<T> {
    pub fn new(value: Vec<T>) -> Self {
        Self {
            recordset_count: None,
            value,
            next_link: None,
            page_key: None,
        }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the service reported another page
    pub fn has_next_page(&self) -> bool {
        self.next_link.is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.value.iter()
    }
}

impl<T> IntoIterator for FetchResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<T: FromWire> FromWire for FetchResult<T> {
    const EXPECTED: &'static str = "FetchResult";

    fn from_wire(value: &Value, cx: &mut DecodeContext) -> Option<Self> {
        decode_object(value, cx, Self::EXPECTED, FETCH_RESULT_FIELDS, |reader| {
            let recordset_count = reader.optional("@recordsetCount");
            let value = reader.required("value");
            let next_link = reader.optional("@nextLink");
            let page_key = reader.optional("pageKey");
            Some(Self {
                recordset_count: recordset_count?,
                value: value?,
                next_link: next_link?,
                page_key: page_key?,
            })
        })
    }

    fn non_finite_path(&self) -> Option<String> {
        FromWire::non_finite_path(&self.value).map(|rest| join_path("value", rest))
    }
}

impl<T: FromWire> WireSlot for FetchResult<T> {
    const REQUIRED: bool = true;

    fn read(reader: &mut ObjectReader<'_>, key: &'static str) -> Option<Self> {
        reader.required(key)
    }

    fn non_finite_path(&self) -> Option<String> {
        <Self as FromWire>::non_finite_path(self)
    }
}

impl<T: FromWire + Serialize> WireModel for FetchResult<T> {
    const MODEL_NAME: &'static str = "FetchResult";
    const FIELDS: &'static [FieldSpec] = FETCH_RESULT_FIELDS;
}

wire_model! {
    /// Lookup row describing one document status
    pub struct DocumentStatusModel {
        /// Numeric code of the status
        pub id: i32 => "id",
        pub description: Option<String> => "description",
        pub status: Option<DocumentStatus> => "status",
    }
}

impl DocumentStatusModel {
    /// The explicit `status` when present, otherwise the member whose code equals `id`
    pub fn resolved_status(&self) -> Option<DocumentStatus> {
        self.status
            .or_else(|| DocumentStatus::from_code(i64::from(self.id)))
    }
}

wire_model! {
    /// Response of the ping endpoint: service version and who the caller is
    pub struct PingResultModel {
        pub version: Option<String> => "version",
        pub authenticated: bool => "authenticated",
        pub authentication_type: Option<AuthenticationTypeId> => "authenticationType",
        pub authenticated_user_name: Option<String> => "authenticatedUserName",
        pub authenticated_user_id: Option<i32> => "authenticatedUserId",
        pub authenticated_account_id: Option<i32> => "authenticatedAccountId",
        pub crm_id: Option<String> => "crmid",
    }
}
