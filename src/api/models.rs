use serde::Serialize;
use serde_json::Value;

use crate::error::SearchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<String>,
}

impl SearchRequest {
    /// Builds a request from raw form input. Fails when the trimmed username is empty.
    pub fn new(raw_username: &str, sites: Vec<String>) -> Result<Self, SearchError> {
        let username = raw_username.trim();
        if username.is_empty() {
            return Err(SearchError::EmptyUsername);
        }
        Ok(SearchRequest {
            username: username.to_string(),
            sites,
        })
    }
}

/// Status code and undecoded body, exactly as the transport received them.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A backend answer after shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReply {
    Found { links: Vec<String> },
    NoProfiles,
    Failed { status: u16, detail: Option<String> },
}

impl SearchReply {
    /// Decodes a raw reply. Only malformed JSON is an error; any unexpected shape
    /// collapses into `NoProfiles` or a `Failed` without detail.
    pub fn from_raw(raw: &RawReply) -> Result<Self, SearchError> {
        let body: Value = serde_json::from_slice(&raw.body)?;

        if !raw.is_success() {
            let detail = body
                .get("detail")
                .and_then(Value::as_str)
                .filter(|d| !d.is_empty())
                .map(str::to_string);
            return Ok(SearchReply::Failed {
                status: raw.status,
                detail,
            });
        }

        let links = match body.get("links") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>(),
            _ => None,
        };

        match links {
            Some(links) if !links.is_empty() => Ok(SearchReply::Found { links }),
            _ => Ok(SearchReply::NoProfiles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawReply {
        RawReply {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_request_trims_username() {
        let req = SearchRequest::new("  octocat \n", vec![]).unwrap();
        assert_eq!(req.username, "octocat");
    }

    #[test]
    fn test_request_rejects_blank_input() {
        assert_eq!(
            SearchRequest::new("", vec![]),
            Err(SearchError::EmptyUsername)
        );
        assert_eq!(
            SearchRequest::new(" \t\n ", vec![]),
            Err(SearchError::EmptyUsername)
        );
    }

    #[test]
    fn test_request_body_without_sites() {
        let req = SearchRequest::new("octocat", vec![]).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "octocat" }));
    }

    #[test]
    fn test_request_body_with_sites() {
        let req = SearchRequest::new("octocat", vec!["github".into(), "reddit".into()]).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "username": "octocat", "sites": ["github", "reddit"] })
        );
    }

    #[test]
    fn test_found_keeps_order_and_duplicates() {
        let reply =
            SearchReply::from_raw(&raw(200, r#"{"links":["https://b","https://a","https://b"]}"#))
                .unwrap();
        assert_eq!(
            reply,
            SearchReply::Found {
                links: vec![
                    "https://b".to_string(),
                    "https://a".to_string(),
                    "https://b".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_unexpected_success_shapes_mean_no_profiles() {
        for body in [
            r#"{"links":[]}"#,
            r#"{"username":"octocat"}"#,
            r#"{"links":"https://a"}"#,
            r#"{"links":["https://a", 3]}"#,
            r#"null"#,
            r#"[]"#,
        ] {
            assert_eq!(
                SearchReply::from_raw(&raw(200, body)).unwrap(),
                SearchReply::NoProfiles,
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_failure_with_detail() {
        let reply = SearchReply::from_raw(&raw(404, r#"{"detail":"User not found"}"#)).unwrap();
        assert_eq!(
            reply,
            SearchReply::Failed {
                status: 404,
                detail: Some("User not found".to_string())
            }
        );
    }

    #[test]
    fn test_failure_detail_must_be_a_string() {
        let reply =
            SearchReply::from_raw(&raw(422, r#"{"detail":[{"msg":"field required"}]}"#)).unwrap();
        assert_eq!(
            reply,
            SearchReply::Failed {
                status: 422,
                detail: None
            }
        );
    }

    #[test]
    fn test_failure_ignores_links() {
        let reply = SearchReply::from_raw(&raw(500, r#"{"links":["https://a"]}"#)).unwrap();
        assert_eq!(
            reply,
            SearchReply::Failed {
                status: 500,
                detail: None
            }
        );
    }

    #[test]
    fn test_malformed_json_is_transport_error() {
        let err = SearchReply::from_raw(&raw(200, "<html>bad gateway</html>")).unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }
}
