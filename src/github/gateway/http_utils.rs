//! Shared HTTP utilities for gateway implementations.

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::extract_github_message;

    #[rstest]
    #[case::json_message(r#"{"message":"Not Found"}"#, Some("Not Found"))]
    #[case::json_without_message(r#"{"documentation_url":"x"}"#, None)]
    #[case::not_json("<html>bad gateway</html>", None)]
    fn extracts_message_field(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_github_message(body).as_deref(), expected);
    }
}
