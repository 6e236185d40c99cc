use serde::Deserialize;

/// Envelope returned by `search.messages`.
#[derive(Debug, Deserialize)]
pub struct SearchMessagesResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub messages: Option<SearchMessages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMessages {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub paging: Paging,
    #[serde(default)]
    pub matches: Vec<SearchMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMessage {
    #[serde(default)]
    pub channel: MessageChannel,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub text: String,
    /// `"<seconds>.<micros>"`, kept as a string to preserve it exactly.
    #[serde(default)]
    pub ts: String,
    #[serde(default)]
    pub permalink: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageChannel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_response() {
        let body = r#"{
            "ok": true,
            "query": "tired from:alice",
            "messages": {
                "total": 41,
                "pagination": {"total_count": 41, "page": 1, "per_page": 20},
                "paging": {"count": 20, "total": 41, "page": 1, "pages": 3},
                "matches": [
                    {
                        "iid": "abc",
                        "team": "T1",
                        "channel": {"id": "C1", "name": "general", "is_private": false},
                        "type": "message",
                        "user": "U1",
                        "username": "alice",
                        "ts": "1625000000.123456",
                        "text": "so tired",
                        "permalink": "https://example.slack.com/archives/C1/p1625000000123456"
                    }
                ]
            }
        }"#;

        let resp: SearchMessagesResponse = serde_json::from_str(body).unwrap();
        assert!(resp.ok);
        let messages = resp.messages.unwrap();
        assert_eq!(messages.total, 41);
        assert_eq!(messages.paging.pages, 3);
        assert_eq!(messages.matches.len(), 1);
        let m = &messages.matches[0];
        assert_eq!(m.channel.name, "general");
        assert_eq!(m.ts, "1625000000.123456");
        assert_eq!(m.username, "alice");
    }

    #[test]
    fn test_decode_error_response() {
        let resp: SearchMessagesResponse =
            serde_json::from_str(r#"{"ok": false, "error": "not_allowed_token_type"}"#).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.error.as_deref(), Some("not_allowed_token_type"));
        assert!(resp.messages.is_none());
    }

    #[test]
    fn test_decode_empty_result() {
        let resp: SearchMessagesResponse = serde_json::from_str(
            r#"{"ok": true, "messages": {"total": 0, "paging": {"count": 20, "total": 0, "page": 1, "pages": 0}, "matches": []}}"#,
        )
        .unwrap();
        let messages = resp.messages.unwrap();
        assert_eq!(messages.paging.pages, 0);
        assert!(messages.matches.is_empty());
    }
}
