use rstest::rstest;
use serde::{Deserialize, Serialize};
use urltemplate::{json, UrlTemplate};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct TemplatedUrlWrapper {
    url: Option<UrlTemplate>,
}

impl TemplatedUrlWrapper {
    fn new(raw: &str) -> Self {
        Self {
            url: UrlTemplate::from_raw_value(raw),
        }
    }
}

#[rstest]
#[case("https://website.com", "{\n  \"url\": \"https:\\/\\/website.com\"\n}")]
#[case("{scheme}://{host}.com", "{\n  \"url\": \"{scheme}:\\/\\/{host}.com\"\n}")]
fn encode(#[case] raw: &str, #[case] expected: &str) {
    let wrapper = TemplatedUrlWrapper::new(raw);

    assert_eq!(json::to_string_pretty(&wrapper).unwrap(), expected);
}

#[rstest]
#[case(r#"{ "url": "https://website.com" }"#, "https://website.com")]
#[case(r#"{ "url": "https:\/\/website.com" }"#, "https://website.com")]
#[case(r#"{ "url": "{scheme}://{host}.com" }"#, "{scheme}://{host}.com")]
#[case(r#"{ "url": "{scheme}:\/\/{host}.com" }"#, "{scheme}://{host}.com")]
fn decode(#[case] document: &str, #[case] raw: &str) {
    let wrapper: TemplatedUrlWrapper = serde_json::from_str(document).unwrap();

    assert_eq!(wrapper, TemplatedUrlWrapper::new(raw));
}

#[test]
fn round_trip() {
    let wrapper = TemplatedUrlWrapper::new("{scheme}://{host}.com/{path}?q={query}");

    let escaped = json::to_string(&wrapper).unwrap();
    let plain = serde_json::to_string(&wrapper).unwrap();

    assert_ne!(escaped, plain);
    assert_eq!(serde_json::from_str::<TemplatedUrlWrapper>(&escaped).unwrap(), wrapper);
    assert_eq!(serde_json::from_str::<TemplatedUrlWrapper>(&plain).unwrap(), wrapper);
}

#[test]
fn plain_encoder_keeps_slashes() {
    let wrapper = TemplatedUrlWrapper::new("{scheme}://{host}.com");

    assert_eq!(
        serde_json::to_string(&wrapper).unwrap(),
        r#"{"url":"{scheme}://{host}.com"}"#
    );
}

#[rstest]
#[case(r#"{ "url": null }"#)]
#[case(r#"{}"#)]
fn decode_absent(#[case] document: &str) {
    let wrapper: TemplatedUrlWrapper = serde_json::from_str(document).unwrap();

    assert_eq!(wrapper.url, None);
}

#[rstest]
#[case(
    "{scheme://website.com",
    "An opening brace with no closing brace was found. The portion of the URL following the opening brace was 'scheme://website.com'"
)]
#[case(
    "scheme}://website.com",
    "A closing brace with no opening brace was found. The portion of the URL preceeding the closing brace was 'scheme'"
)]
#[case(
    "{scheme}://website.com/{path{var}}",
    "An opening brace within another variable was found. The portion of the URL following the first opening brace up until the second opening brace was 'path'"
)]
#[case(
    "{{scheme}}://website.com/{path}",
    "An opening brace within another variable was found. The portion of the URL following the first opening brace up until the second opening brace was ''"
)]
fn decode_failure_carries_parse_message(#[case] raw: &str, #[case] message: &str) {
    let document = serde_json::json!({ "url": raw }).to_string();
    let error = serde_json::from_str::<TemplatedUrlWrapper>(&document).unwrap_err();

    assert!(error.is_data());
    // serde_json appends the position of the failing value.
    assert!(
        error.to_string().starts_with(message),
        "unexpected message: {error}"
    );
}

#[test]
fn decode_from_value() {
    let value = serde_json::json!({ "url": "https://website.com/{path}" });
    let wrapper: TemplatedUrlWrapper = serde_json::from_value(value).unwrap();
    let url = wrapper.url.unwrap();

    assert_eq!(url.variables().collect::<Vec<_>>(), ["path"]);
    assert_eq!(url.to_url(), None);
}
