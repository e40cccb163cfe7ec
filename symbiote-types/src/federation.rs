use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Federation {
    #[serde(alias = "id")]
    pub federation_id: String,
    #[serde(default)]
    pub platform_ids: Vec<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFederationRequest {
    pub id: String,
    pub platform1_id: String,
    pub platform2_id: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FederationList {
    Sequence(Vec<Federation>),
    Map(serde_json::Map<String, Value>),
}

/// Parses a `list_federations` body, which is either a JSON array or a JSON object keyed by federation id.
/// Object values are returned in document order.
pub fn parse_federation_list(body: &[u8]) -> Result<Vec<Federation>, serde_json::Error> {
    match serde_json::from_slice::<FederationList>(body)? {
        FederationList::Sequence(federations) => Ok(federations),
        FederationList::Map(map) => {
            map.into_iter()
                .map(|(_, value)| serde_json::from_value::<Federation>(value))
                .collect()
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn A_federation_list_should_be_parsed_from_an_array() -> Result<()> {
        let body = br#"[{"federationId":"f1","platformIds":["p1","p2"]}]"#;

        let federations = parse_federation_list(body).expect("Failed to parse federations");

        assert_that!(federations, eq(vec![Federation {
            federation_id: String::from("f1"),
            platform_ids: vec![String::from("p1"), String::from("p2")],
        }]));
        Ok(())
    }

    #[test]
    fn A_federation_list_should_be_parsed_from_a_map_in_document_order() -> Result<()> {
        let body = br#"{"zeta":{"federationId":"zeta","platformIds":[]},"alpha":{"id":"alpha","platformIds":["p1"]}}"#;

        let federations = parse_federation_list(body).expect("Failed to parse federations");

        let ids = federations.iter()
            .map(|federation| federation.federation_id.as_str())
            .collect::<Vec<_>>();
        assert_that!(ids, eq(vec!["zeta", "alpha"]));
        Ok(())
    }

    #[test]
    fn A_CreateFederationRequest_should_use_numbered_platform_fields() -> Result<()> {
        let request = CreateFederationRequest {
            id: String::from("f1"),
            platform1_id: String::from("p1"),
            platform2_id: String::from("p2"),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");

        assert_that!(json, eq(r#"{"id":"f1","platform1Id":"p1","platform2Id":"p2"}"#));
        Ok(())
    }

    #[test]
    fn A_malformed_federation_list_should_be_an_error() -> Result<()> {
        assert_that!(parse_federation_list(b"\"nope\"").is_err(), eq(true));
        Ok(())
    }
}
