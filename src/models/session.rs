// file: src/models/session.rs
// description: single-use search session correlation token

/// Correlation token for one query: the client-generated random id sent to
/// the initialization endpoint, plus the session id the server issued in
/// response. Created per query, used once for the streaming call, then
/// dropped. Never persisted or reused.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub client_id: String,
    pub session_id: String,
}

impl SearchSession {
    pub fn new(client_id: String, session_id: String) -> Self {
        Self {
            client_id,
            session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_holds_both_identifiers() {
        let session = SearchSession::new("client-uuid".to_string(), "server-sid".to_string());
        assert_eq!(session.client_id, "client-uuid");
        assert_eq!(session.session_id, "server-sid");
    }
}
