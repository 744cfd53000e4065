use axum::extract::Query;
use axum::http::Uri;
use std::collections::HashMap;

/// Query variable that switches a request into POS mode.
pub const POS_QUERY_VAR: &str = "wcpos";

/// Resolved query variables of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryVars {
    vars: HashMap<String, String>,
}

impl QueryVars {
    /// Parses the query string of `uri`. A request for `pos_path` is
    /// rewritten to carry `wcpos=true`.
    pub fn from_uri(uri: &Uri, pos_path: &str) -> Self {
        let vars = Query::<HashMap<String, String>>::try_from_uri(uri)
            .map(|Query(vars)| vars)
            .unwrap_or_default();
        let mut query = Self { vars };

        let pos_path = pos_path.trim_end_matches('/');
        if !pos_path.is_empty() && uri.path().trim_end_matches('/') == pos_path {
            query.set(POS_QUERY_VAR, "true");
        }
        query
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Whether this request is for the POS application.
    pub fn is_pos_request(&self) -> bool {
        self.get(POS_QUERY_VAR) == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(uri: &str) -> QueryVars {
        QueryVars::from_uri(&uri.parse().unwrap(), "/pos")
    }

    #[test]
    fn literal_true_selects_pos() {
        assert!(vars("/?wcpos=true").is_pos_request());
        assert!(vars("/shop/?a=1&wcpos=true").is_pos_request());
    }

    #[test]
    fn other_values_do_not_select_pos() {
        assert!(!vars("/?wcpos=1").is_pos_request());
        assert!(!vars("/?wcpos=TRUE").is_pos_request());
        assert!(!vars("/?wcpos=").is_pos_request());
        assert!(!vars("/").is_pos_request());
    }

    #[test]
    fn pos_path_is_rewritten() {
        assert!(vars("/pos").is_pos_request());
        assert!(vars("/pos/").is_pos_request());
        assert!(!vars("/posters").is_pos_request());
    }

    #[test]
    fn rewrite_overrides_explicit_value() {
        assert!(vars("/pos?wcpos=false").is_pos_request());
    }

    #[test]
    fn empty_pos_path_disables_rewrite() {
        let q = QueryVars::from_uri(&"/".parse().unwrap(), "");
        assert!(!q.is_pos_request());
    }
}
