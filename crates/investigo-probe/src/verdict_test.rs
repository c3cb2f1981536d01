use super::*;

const CANONICAL: &str = "https://x.com/bob";

fn response(status: u16, final_url: &str, body: Option<&str>) -> ProbeResponse {
    ProbeResponse {
        status,
        final_url: final_url.to_string(),
        body: body.map(str::to_string),
    }
}

fn site(detection: DetectionStrategy, error_msg: &str) -> SiteTemplate {
    SiteTemplate::new("x", "https://x.com/{}", detection, error_msg)
}

// ---------------------------------------------------------------------------
// status window
// ---------------------------------------------------------------------------

#[test]
fn status_window_boundaries() {
    for code in [100, 101, 199, 200, 201, 204, 299, 300] {
        assert!(status_accepted(code), "{code} should be accepted");
    }
    for code in [301, 302, 399, 403, 404, 429, 500, 503] {
        assert!(!status_accepted(code), "{code} should be rejected");
    }
}

// ---------------------------------------------------------------------------
// StatusCode
// ---------------------------------------------------------------------------

#[test]
fn status_code_200_is_found_with_canonical_link() {
    let verdict = classify(
        &response(200, CANONICAL, None),
        &site(DetectionStrategy::StatusCode, ""),
        CANONICAL,
    );
    assert_eq!(verdict, Verdict::found("https://x.com/bob"));
}

#[test]
fn status_code_depends_only_on_status() {
    let template = site(DetectionStrategy::StatusCode, "User not found");
    let a = classify(
        &response(404, CANONICAL, Some("hello")),
        &template,
        CANONICAL,
    );
    let b = classify(
        &response(404, "https://elsewhere.example/", Some("User not found")),
        &template,
        CANONICAL,
    );
    assert_eq!(a, Verdict::not_found());
    assert_eq!(a, b);
}

#[test]
fn status_code_300_is_found_and_301_is_not() {
    let template = site(DetectionStrategy::StatusCode, "");
    assert!(classify(&response(300, CANONICAL, None), &template, CANONICAL).is_found());
    assert!(!classify(&response(301, CANONICAL, None), &template, CANONICAL).is_found());
}

// ---------------------------------------------------------------------------
// BodyMessage
// ---------------------------------------------------------------------------

#[test]
fn body_message_present_is_not_found() {
    let verdict = classify(
        &response(200, "https://y.com/bob", Some("<h1>User not found</h1>")),
        &site(DetectionStrategy::BodyMessage, "User not found"),
        "https://y.com/bob",
    );
    assert_eq!(
        verdict,
        Verdict::NotFound {
            message: "Not Found!".to_string()
        }
    );
}

#[test]
fn body_message_absent_is_found_regardless_of_status() {
    let verdict = classify(
        &response(404, "https://y.com/bob", Some("<h1>Profile of bob</h1>")),
        &site(DetectionStrategy::BodyMessage, "User not found"),
        "https://y.com/bob",
    );
    assert_eq!(verdict, Verdict::found("https://y.com/bob"));
}

#[test]
fn body_message_is_a_literal_substring_not_a_regex() {
    let template = site(DetectionStrategy::BodyMessage, "no user.*here");
    let literal = classify(
        &response(200, CANONICAL, Some("sorry, no user.*here")),
        &template,
        CANONICAL,
    );
    let regex_like = classify(
        &response(200, CANONICAL, Some("sorry, no user is here")),
        &template,
        CANONICAL,
    );
    assert!(!literal.is_found());
    assert!(regex_like.is_found());
}

#[test]
fn body_message_is_case_sensitive() {
    let verdict = classify(
        &response(200, CANONICAL, Some("user NOT FOUND")),
        &site(DetectionStrategy::BodyMessage, "User not found"),
        CANONICAL,
    );
    assert!(verdict.is_found());
}

// ---------------------------------------------------------------------------
// ResponseUrl
// ---------------------------------------------------------------------------

#[test]
fn response_url_matching_with_good_status_is_found() {
    let verdict = classify(
        &response(200, CANONICAL, None),
        &site(DetectionStrategy::ResponseUrl, ""),
        CANONICAL,
    );
    assert_eq!(verdict, Verdict::found(CANONICAL));
}

#[test]
fn response_url_redirected_elsewhere_is_not_found() {
    let verdict = classify(
        &response(200, "https://x.com/login", None),
        &site(DetectionStrategy::ResponseUrl, ""),
        CANONICAL,
    );
    assert_eq!(verdict, Verdict::not_found());
}

#[test]
fn response_url_matching_with_bad_status_is_not_found() {
    let verdict = classify(
        &response(404, CANONICAL, None),
        &site(DetectionStrategy::ResponseUrl, ""),
        CANONICAL,
    );
    assert_eq!(verdict, Verdict::not_found());
}

#[test]
fn response_url_without_path_matches_normalized_final_url() {
    let verdict = classify(
        &response(200, "https://x.com/?user=bob", None),
        &site(DetectionStrategy::ResponseUrl, ""),
        "https://x.com?user=bob",
    );
    assert_eq!(verdict, Verdict::found("https://x.com?user=bob"));
}

#[test]
fn response_url_ignores_host_case() {
    let verdict = classify(
        &response(200, "https://bob.example.com/", None),
        &site(DetectionStrategy::ResponseUrl, ""),
        "https://Bob.Example.com",
    );
    assert_eq!(verdict, Verdict::found("https://Bob.Example.com"));
}

#[test]
fn response_url_different_query_is_not_found() {
    let verdict = classify(
        &response(200, "https://x.com/?user=alice", None),
        &site(DetectionStrategy::ResponseUrl, ""),
        "https://x.com?user=bob",
    );
    assert_eq!(verdict, Verdict::not_found());
}

// ---------------------------------------------------------------------------
// Unsupported
// ---------------------------------------------------------------------------

#[test]
fn unsupported_strategy_is_an_error_verdict() {
    let verdict = classify(
        &response(200, CANONICAL, Some("anything")),
        &site(DetectionStrategy::Unsupported("bogus".to_string()), ""),
        CANONICAL,
    );
    assert_eq!(
        verdict,
        Verdict::Error {
            message: "unsupported error type".to_string()
        }
    );
}

#[test]
fn detail_returns_link_or_message() {
    assert_eq!(Verdict::found(CANONICAL).detail(), CANONICAL);
    assert_eq!(Verdict::not_found().detail(), "Not Found!");
    assert_eq!(Verdict::error("boom").detail(), "boom");
}
