use crate::error::{Result, StoreError};
use crate::pipe::Pipe;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{HeaderMap, header};
use serde_json::{Map, Value};

/// Parses a path segment into a row identifier
///
/// Only a complete integer literal is accepted: `"12abc"` and `"1.5"` are
/// rejected as well as `"abc"`, and so is anything outside the `i64` range.
#[derive(Default)]
pub struct ParseIdPipe;

#[async_trait]
impl Pipe for ParseIdPipe {
    type Input = String;
    type Output = i64;

    async fn transform(&self, input: String) -> Result<i64> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| StoreError::InvalidIdentifier(input))
    }
}

/// A request body as received, with whether it was declared as JSON
pub struct RawBody {
    pub json: bool,
    pub bytes: Bytes,
}

impl RawBody {
    pub fn new(headers: &HeaderMap, bytes: Bytes) -> Self {
        Self {
            json: has_json_content_type(headers),
            bytes,
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Unwraps a request body into a JSON object map
///
/// Bodies that are empty or not declared as JSON yield an empty map, as does
/// well-formed JSON that is not an object, so every field reads as absent.
/// Only a JSON body that fails to parse is rejected.
#[derive(Default)]
pub struct JsonObjectPipe;

#[async_trait]
impl Pipe for JsonObjectPipe {
    type Input = RawBody;
    type Output = Map<String, Value>;

    async fn transform(&self, input: RawBody) -> Result<Map<String, Value>> {
        if !input.json || input.bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }
        match serde_json::from_slice::<Value>(&input.bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Ok(Map::new()),
            Err(e) => Err(StoreError::MalformedBody(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_parse_id_accepts_integers() {
        assert_eq!(ParseIdPipe.transform("3".to_string()).await.unwrap(), 3);
        assert_eq!(ParseIdPipe.transform("-7".to_string()).await.unwrap(), -7);
    }

    #[tokio::test]
    async fn test_parse_id_rejects_non_integers() {
        for raw in ["abc", "12abc", "1.5", ""] {
            let err = ParseIdPipe.transform(raw.to_string()).await.unwrap_err();
            assert!(matches!(err, StoreError::InvalidIdentifier(_)), "{raw}");
        }
    }

    #[tokio::test]
    async fn test_parse_id_rejects_out_of_range_integers() {
        let err = ParseIdPipe
            .transform("99999999999999999999".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidIdentifier(_)));
    }

    fn json_body(body: &'static str) -> RawBody {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        RawBody::new(&headers, Bytes::from_static(body.as_bytes()))
    }

    #[tokio::test]
    async fn test_json_object_pipe() {
        let map = JsonObjectPipe
            .transform(json_body(r#"{ "price": 50 }"#))
            .await
            .unwrap();
        assert_eq!(map.get("price"), Some(&json!(50)));

        let empty = JsonObjectPipe
            .transform(json_body(r#"["not", "an", "object"]"#))
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_json_object_pipe_treats_missing_body_as_empty() {
        let blank = JsonObjectPipe.transform(json_body("  \n")).await.unwrap();
        assert!(blank.is_empty());

        let undeclared = RawBody::new(&HeaderMap::new(), Bytes::from_static(b"{\"price\": 50}"));
        assert!(!undeclared.json);
        let map = JsonObjectPipe.transform(undeclared).await.unwrap();
        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn test_json_object_pipe_rejects_broken_json() {
        let err = JsonObjectPipe
            .transform(json_body(r#"{"name": "#))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedBody(_)));
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "application/merge-patch+json".parse().unwrap());
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!has_json_content_type(&headers));
    }
}
