//! Wire payload decode: typed structs, entity decoding, category mapping.

use jokebox_types::Joke;
use serde::Deserialize;

use crate::error::FetchError;

/// Payload `type` value marking a usable batch.
const PAYLOAD_TYPE_SUCCESS: &str = "success";

/// Top-level response body of the joke endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct BatchPayload {
    #[serde(rename = "type")]
    payload_type: String,
    #[serde(default)]
    value: Vec<RawJoke>,
}

/// One joke record as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawJoke {
    id: i64,
    joke: String,
    #[serde(default)]
    categories: Vec<String>,
}

impl BatchPayload {
    /// Convert a decoded payload into domain jokes, preserving payload order.
    ///
    /// # Errors
    ///
    /// `FetchError::Contract` when the payload type is not `"success"`.
    pub(crate) fn into_jokes(self) -> Result<Vec<Joke>, FetchError> {
        if self.payload_type != PAYLOAD_TYPE_SUCCESS {
            return Err(FetchError::Contract {
                payload_type: self.payload_type,
            });
        }
        Ok(self.value.into_iter().map(RawJoke::into_joke).collect())
    }
}

impl RawJoke {
    fn into_joke(self) -> Joke {
        let mut joke = Joke::new(decode_quot(&self.joke), self.id);
        for tag in &self.categories {
            joke = joke.with_category(tag);
        }
        joke
    }
}

/// Replace every literal `&quot;` entity with a quotation mark.
///
/// The source API escapes only this one entity; everything else comes through
/// verbatim.
fn decode_quot(raw: &str) -> String {
    raw.replace("&quot;", "\"")
}

#[cfg(test)]
mod tests {
    use super::{BatchPayload, decode_quot};
    use crate::error::FetchError;
    use jokebox_types::Joke;
    use pretty_assertions::assert_eq;

    fn parse(body: &str) -> BatchPayload {
        serde_json::from_str(body).expect("payload should deserialize")
    }

    #[test]
    fn decodes_quot_entities_at_each_occurrence() {
        assert_eq!(decode_quot("He said &quot;hi&quot;."), "He said \"hi\".");
        assert_eq!(decode_quot("no entities here"), "no entities here");
        assert_eq!(decode_quot(""), "");
    }

    #[test]
    fn maps_known_categories_to_flags() {
        let payload = parse(
            r#"{"type":"success","value":[
                {"id":1,"joke":"a","categories":["nerdy"]},
                {"id":2,"joke":"b","categories":["explicit","nerdy"]},
                {"id":3,"joke":"c","categories":[]}
            ]}"#,
        );

        let jokes = payload.into_jokes().unwrap();
        assert!(jokes[0].is_nerdy() && !jokes[0].is_explicit());
        assert!(jokes[1].is_nerdy() && jokes[1].is_explicit());
        assert!(!jokes[2].is_nerdy() && !jokes[2].is_explicit());
    }

    #[test]
    fn ignores_unrecognized_categories() {
        let payload = parse(
            r#"{"type":"success","value":[
                {"id":1,"joke":"a","categories":["political","nerdy"]}
            ]}"#,
        );

        let jokes = payload.into_jokes().unwrap();
        assert!(jokes[0].is_nerdy());
        assert!(!jokes[0].is_explicit());
    }

    #[test]
    fn preserves_payload_order() {
        let payload = parse(
            r#"{"type":"success","value":[
                {"id":5,"joke":"e","categories":[]},
                {"id":3,"joke":"c","categories":[]},
                {"id":9,"joke":"i","categories":[]}
            ]}"#,
        );

        let ids: Vec<i64> = payload.into_jokes().unwrap().iter().map(Joke::id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn non_success_type_is_a_contract_error() {
        let payload = parse(r#"{"type":"fail","value":[]}"#);

        let err = payload.into_jokes().unwrap_err();
        assert!(matches!(
            err,
            FetchError::Contract { payload_type } if payload_type == "fail"
        ));
    }

    #[test]
    fn missing_categories_field_defaults_to_empty() {
        let payload = parse(r#"{"type":"success","value":[{"id":1,"joke":"a"}]}"#);

        let jokes = payload.into_jokes().unwrap();
        assert!(!jokes[0].is_nerdy() && !jokes[0].is_explicit());
    }

    #[test]
    fn spec_scenario_payload_decodes_as_expected() {
        let payload = parse(
            r#"{"type":"success","value":[
                {"id":1,"joke":"A &quot;test&quot;.","categories":["nerdy"]},
                {"id":2,"joke":"B.","categories":[]}
            ]}"#,
        );

        let jokes = payload.into_jokes().unwrap();
        assert_eq!(jokes.len(), 2);
        assert_eq!(jokes[0].text(), "A \"test\".");
        assert_eq!(jokes[0].id(), 1);
        assert!(jokes[0].is_nerdy());
        assert_eq!(jokes[1].text(), "B.");
        assert_eq!(jokes[1].id(), 2);
    }
}
