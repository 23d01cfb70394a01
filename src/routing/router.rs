//! Route decision logic.
//!
//! # Responsibilities
//! - Decide, per request URI, whether to forward upstream or redirect
//! - Build the absolute outbound URL / redirect Location
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins: update prefix, then server list, then redirect
//! - No regex; literal prefix and exact-path checks only

use axum::http::Uri;

use crate::config::UpstreamConfig;

/// Path prefix served from the update mirror host.
const UPDATE_PREFIX: &str = "/update";

/// The one path proxied from the primary domain itself.
const SERVER_LIST_PATH: &str = "/files/servers.txt";

/// What to do with an accepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Issue an outbound GET to this absolute URL and relay the response.
    Forward(String),
    /// Answer 301 Moved Permanently with this Location.
    Redirect(String),
}

/// The gateway's route table.
///
/// Holds the resolved upstream hosts; constructed once at startup and shared
/// read-only by every request task.
#[derive(Debug, Clone)]
pub struct RouteTable {
    scheme: String,
    primary_host: String,
    update_host: String,
}

impl RouteTable {
    pub fn new(upstream: &UpstreamConfig) -> Self {
        Self {
            scheme: upstream.scheme.clone(),
            primary_host: upstream.primary_domain.clone(),
            update_host: upstream.update_host(),
        }
    }

    /// Decide how to handle a request, first match wins.
    pub fn decide(&self, uri: &Uri) -> RouteDecision {
        let path = uri.path();

        if let Some(suffix) = path.strip_prefix(UPDATE_PREFIX) {
            // The stripped suffix may be empty ("/update") or start mid-segment
            // ("/updates"); either way the mirror URL needs a leading slash.
            let mut url = format!("{}://{}", self.scheme, self.update_host);
            if !suffix.starts_with('/') {
                url.push('/');
            }
            url.push_str(suffix);
            if let Some(query) = uri.query() {
                url.push('?');
                url.push_str(query);
            }
            return RouteDecision::Forward(url);
        }

        if path == SERVER_LIST_PATH {
            // Fixed target; any inbound query string is dropped.
            return RouteDecision::Forward(format!(
                "{}://{}{}",
                self.scheme, self.primary_host, SERVER_LIST_PATH
            ));
        }

        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        RouteDecision::Redirect(format!(
            "{}://{}{}",
            self.scheme, self.primary_host, path_and_query
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(&UpstreamConfig::default())
    }

    fn decide(path_and_query: &str) -> RouteDecision {
        table().decide(&path_and_query.parse::<Uri>().unwrap())
    }

    #[test]
    fn update_prefix_is_stripped() {
        assert_eq!(
            decide("/update/win/latest.zip"),
            RouteDecision::Forward("https://upd.puyovs.com/win/latest.zip".to_string())
        );
    }

    #[test]
    fn bare_update_path_targets_mirror_root() {
        assert_eq!(
            decide("/update"),
            RouteDecision::Forward("https://upd.puyovs.com/".to_string())
        );
    }

    #[test]
    fn update_prefix_match_is_literal() {
        // "/updates" matches the prefix; the leftover "s" becomes the first
        // path segment on the mirror.
        assert_eq!(
            decide("/updates"),
            RouteDecision::Forward("https://upd.puyovs.com/s".to_string())
        );
    }

    #[test]
    fn update_path_keeps_query_string() {
        assert_eq!(
            decide("/update/mac/latest.dmg?channel=beta"),
            RouteDecision::Forward(
                "https://upd.puyovs.com/mac/latest.dmg?channel=beta".to_string()
            )
        );
    }

    #[test]
    fn server_list_is_fetched_from_primary() {
        assert_eq!(
            decide("/files/servers.txt"),
            RouteDecision::Forward("https://puyovs.com/files/servers.txt".to_string())
        );
    }

    #[test]
    fn server_list_query_is_dropped() {
        assert_eq!(
            decide("/files/servers.txt?cache=no"),
            RouteDecision::Forward("https://puyovs.com/files/servers.txt".to_string())
        );
    }

    #[test]
    fn server_list_match_is_exact() {
        assert_eq!(
            decide("/files/servers.txt.bak"),
            RouteDecision::Redirect("https://puyovs.com/files/servers.txt.bak".to_string())
        );
    }

    #[test]
    fn unmatched_path_redirects_with_query() {
        assert_eq!(
            decide("/forum/thread/42?page=2"),
            RouteDecision::Redirect("https://puyovs.com/forum/thread/42?page=2".to_string())
        );
    }

    #[test]
    fn root_redirects_to_primary_root() {
        assert_eq!(
            decide("/"),
            RouteDecision::Redirect("https://puyovs.com/".to_string())
        );
    }

    #[test]
    fn scheme_and_hosts_come_from_config() {
        let upstream = UpstreamConfig {
            primary_domain: "127.0.0.1:9001".to_string(),
            update_host: Some("127.0.0.1:9002".to_string()),
            scheme: "http".to_string(),
            ..Default::default()
        };
        let table = RouteTable::new(&upstream);
        assert_eq!(
            table.decide(&"/update/a".parse::<Uri>().unwrap()),
            RouteDecision::Forward("http://127.0.0.1:9002/a".to_string())
        );
        assert_eq!(
            table.decide(&"/other".parse::<Uri>().unwrap()),
            RouteDecision::Redirect("http://127.0.0.1:9001/other".to_string())
        );
    }
}
