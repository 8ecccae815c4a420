use bon::Builder;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// ISO-8601 with a numeric `+hhmm` offset, e.g. `2022-04-04T12:34:56+0010`.
pub const RETURN_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Body of a `return` call. Without `reduced_value` the whole amount is refunded.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct ReturnData {
    #[serde(serialize_with = "serialize_return_date")]
    pub return_date: DateTime<FixedOffset>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub reduced_value: Option<Decimal>,
}

fn serialize_return_date<S: Serializer>(
    date: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(RETURN_DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn date() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(10 * 60)
            .expect("valid offset")
            .with_ymd_and_hms(2022, 4, 4, 12, 34, 56)
            .single()
            .expect("unambiguous")
    }

    #[test]
    fn date_uses_numeric_offset() {
        let data = ReturnData::builder().return_date(date()).build();

        assert_eq!(
            serde_json::to_string(&data).expect("serializable"),
            r#"{"returnDate":"2022-04-04T12:34:56+0010"}"#
        );
    }

    #[test]
    fn reduced_value_only_when_present() {
        let data = ReturnData::builder()
            .return_date(date())
            .reduced_value(dec!(150.25))
            .build();

        assert_eq!(
            serde_json::to_value(&data).expect("serializable"),
            json!({ "returnDate": "2022-04-04T12:34:56+0010", "reducedValue": 150.25 })
        );
    }
}
