//! Turns a username and a site template into the URLs a probe needs.

use investigo_core::catalog::USERNAME_PLACEHOLDER;
use investigo_core::SiteTemplate;

/// URLs for one (username, site) probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Profile URL reported to the user and compared by response-URL detection.
    pub canonical_url: String,
    /// URL actually fetched.
    pub probe_url: String,
}

/// Render both URLs for `username` against `site`.
///
/// The placeholder is substituted once, left to right. Malformed patterns are
/// passed through untouched; the HTTP layer reports them.
#[must_use]
pub fn build_target(username: &str, site: &SiteTemplate) -> ProbeTarget {
    let canonical_url = render(&site.url, username);
    let probe_url = match site.url_probe.as_deref() {
        Some(pattern) if !pattern.is_empty() => render(pattern, username),
        _ => canonical_url.clone(),
    };
    ProbeTarget {
        canonical_url,
        probe_url,
    }
}

fn render(pattern: &str, username: &str) -> String {
    pattern.replacen(USERNAME_PLACEHOLDER, username, 1)
}

#[cfg(test)]
mod tests {
    use investigo_core::DetectionStrategy;

    use super::*;

    fn site(url: &str) -> SiteTemplate {
        SiteTemplate::new("x", url, DetectionStrategy::StatusCode, "")
    }

    #[test]
    fn probe_url_defaults_to_canonical() {
        let target = build_target("bob", &site("https://x.com/{}"));
        assert_eq!(target.canonical_url, "https://x.com/bob");
        assert_eq!(target.probe_url, "https://x.com/bob");
    }

    #[test]
    fn probe_url_uses_probe_pattern_when_present() {
        let template =
            site("https://y.com/{}").with_probe_url("https://api.y.com/users?name={}");
        let target = build_target("alice", &template);
        assert_eq!(target.canonical_url, "https://y.com/alice");
        assert_eq!(target.probe_url, "https://api.y.com/users?name=alice");
    }

    #[test]
    fn empty_probe_pattern_falls_back() {
        let template = site("https://y.com/{}").with_probe_url("");
        let target = build_target("alice", &template);
        assert_eq!(target.probe_url, "https://y.com/alice");
    }

    #[test]
    fn only_first_placeholder_is_replaced() {
        let target = build_target("bob", &site("https://x.com/{}/{}"));
        assert_eq!(target.canonical_url, "https://x.com/bob/{}");
    }

    #[test]
    fn username_containing_placeholder_is_not_expanded_again() {
        let target = build_target("a{}b", &site("https://x.com/{}"));
        assert_eq!(target.canonical_url, "https://x.com/a{}b");
    }

    #[test]
    fn pattern_without_placeholder_is_unchanged() {
        let target = build_target("bob", &site("not a url"));
        assert_eq!(target.canonical_url, "not a url");
    }
}
