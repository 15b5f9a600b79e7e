//! Body decoding shared by both clients.

use rosreestr_http::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Applies the status policy and decodes the body.
///
/// Status 400 and above is an error carrying the body, 204 is an empty
/// value without parsing, anything else must be JSON.
pub(crate) fn body_value(response: &HttpResponse) -> Result<Value, ClientError> {
    match response.status {
        status if status >= 400 => Err(ClientError::HttpStatus {
            status,
            body: response.text().into_owned(),
        }),
        204 => {
            tracing::info!(url = %response.url, "There was an empty response body");
            Ok(Value::Null)
        }
        _ => Ok(response.json()?),
    }
}

/// Like [`body_value`], decoding into `T`; an empty value becomes `T::default()`.
pub(crate) fn body_as<T>(response: &HttpResponse) -> Result<T, ClientError>
where
    T: DeserializeOwned + Default,
{
    match body_value(response)? {
        Value::Null => Ok(T::default()),
        value => Ok(serde_json::from_value(value)?),
    }
}

/// Returns true for values the registry uses to mean "nothing found".
#[must_use]
pub fn is_empty_result(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Turns a decoded search result into a list of objects.
///
/// Empty results give an empty list, an array gives its elements and any
/// other value is wrapped as the only element.
#[must_use]
pub fn into_objects(value: Value) -> Vec<Value> {
    if is_empty_result(&value) {
        return Vec::new();
    }
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use rosreestr_core::MacroRegion;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(status, "https://rosreestr.gov.ru/api/online/", body)
    }

    #[test]
    fn test_status_policy() {
        assert_eq!(body_value(&response(200, "[1]")).unwrap(), json!([1]));
        assert_eq!(body_value(&response(204, "")).unwrap(), Value::Null);

        let err = body_value(&response(404, "not here")).unwrap_err();
        assert!(matches!(
            err,
            ClientError::HttpStatus { status: 404, ref body } if body == "not here"
        ));

        let err = body_value(&response(200, "<html>")).unwrap_err();
        assert!(matches!(err, ClientError::Json { .. }));
    }

    #[test]
    fn test_body_as_defaults_on_empty() {
        let macro_regions: Vec<MacroRegion> = body_as(&response(204, "")).unwrap();
        assert!(macro_regions.is_empty());

        let macro_regions: Vec<MacroRegion> = body_as(&response(200, "null")).unwrap();
        assert!(macro_regions.is_empty());

        let macro_regions: Vec<MacroRegion> =
            body_as(&response(200, r#"[{"id": 145000000000, "name": "Москва"}]"#)).unwrap();
        assert_eq!(macro_regions[0].name, "Москва");
    }

    #[test]
    fn test_empty_results() {
        for value in [json!(null), json!([]), json!(""), json!(false), json!(0), json!({})] {
            assert!(is_empty_result(&value), "{value} should be empty");
            assert!(into_objects(value).is_empty());
        }
        for value in [json!([0]), json!("x"), json!(true), json!(0.5), json!({"a": 1})] {
            assert!(!is_empty_result(&value), "{value} should not be empty");
        }
    }

    #[test]
    fn test_into_objects() {
        assert_eq!(into_objects(json!([{"a": 1}, {"b": 2}])).len(), 2);
        assert_eq!(into_objects(json!({"a": 1})), vec![json!({"a": 1})]);
    }
}
