//! Custom assertion macros
//!
//! Enhanced assertions for HTTP responses from `axum_test`.

/// Assert a response's status code and `message` field
#[macro_export]
macro_rules! assert_message {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status_code(),
            $status,
            "unexpected status, body: {}",
            response.text()
        );
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], $message, "unexpected body: {}", body);
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
