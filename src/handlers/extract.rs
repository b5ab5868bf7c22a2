//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body decoded from the raw bytes, whatever the `Content-Type`.
/// Only the first JSON value is read; anything after it is ignored.
/// Any read or decode failure, or an empty body, is a [`AppError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        decode_first(&bytes).map(JsonBody)
    }
}

fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    match serde_json::Deserializer::from_slice(bytes).into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(AppError::Validation(e.to_string())),
        None => Err(AppError::Validation("empty body".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Body {
        sentence_id: i64,
    }

    #[test]
    fn test_trailing_data_is_ignored() {
        let body: Body = decode_first(br#"{"sentence_id": 1} trailing"#).unwrap();
        assert_eq!(body, Body { sentence_id: 1 });
    }

    #[test]
    fn test_empty_body_is_rejected() {
        assert!(matches!(decode_first::<Body>(b""), Err(AppError::Validation(_))));
        assert!(matches!(decode_first::<Body>(b"   \n"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_malformed_first_value_is_rejected() {
        assert!(matches!(decode_first::<Body>(b"{not json"), Err(AppError::Validation(_))));
        assert!(matches!(
            decode_first::<Body>(br#"{"sentence_id": "one"}"#),
            Err(AppError::Validation(_))
        ));
    }
}
