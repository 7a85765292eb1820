use axum::http::header::COOKIE;
use axum::http::HeaderMap;

pub const SESSION_COOKIE: &str = "groqchat_session";

/// The session id carried by the request's `Cookie` headers, if any.
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value binding the browser to `id` for the life of the browser session.
pub fn set_cookie_value(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; HttpOnly; SameSite=Strict; Path=/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_session_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; groqchat_session=abc-123; lang=en"),
        );

        assert_eq!(session_id(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        let mut headers = HeaderMap::new();
        assert!(session_id(&headers).is_none());

        headers.insert(COOKIE, HeaderValue::from_static("groqchat_session="));
        assert!(session_id(&headers).is_none());
    }

    #[test]
    fn set_cookie_is_http_only() {
        assert_eq!(
            set_cookie_value("abc"),
            "groqchat_session=abc; HttpOnly; SameSite=Strict; Path=/"
        );
    }
}
