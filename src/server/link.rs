//! Canonical resource links for `Location` headers.

use url::{Position, Url};

/// Builds the self path of each resource from the configured application URL.
///
/// Only the path and query are returned, so a base of `http://host/codecamp` yields
/// `/codecamp/api/camps/ATL2020`. Key segments are percent-encoded.
#[derive(Clone, Debug)]
pub struct LinkGenerator {
    base: Url,
}

impl LinkGenerator {
    pub fn new(mut base: Url) -> Self {
        base.set_query(None);
        base.set_fragment(None);
        Self { base }
    }

    /// Path of a camp, or `None` when the moniker cannot form a path segment.
    pub fn camp(&self, moniker: &str) -> Option<String> {
        self.build(&["api", "camps", moniker], None)
    }

    pub fn speaker(&self, id: i32) -> Option<String> {
        self.build(&["api", "speakers", &id.to_string()], None)
    }

    /// Path of a talk, asking for the speaker to be included.
    pub fn talk(&self, moniker: &str, id: i32) -> Option<String> {
        self.build(
            &["api", "camps", moniker, "talks", &id.to_string()],
            Some(("includeSpeakers", "true")),
        )
    }

    fn build(&self, segments: &[&str], query: Option<(&str, &str)>) -> Option<String> {
        // Blank and dot segments would be dropped or collapsed by path normalization.
        if segments
            .iter()
            .any(|s| s.trim().is_empty() || *s == "." || *s == "..")
        {
            return None;
        }

        let mut url = self.base.clone();
        url.path_segments_mut().ok()?.pop_if_empty().extend(segments);

        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }

        Some(url[Position::BeforePath..].to_string())
    }
}
