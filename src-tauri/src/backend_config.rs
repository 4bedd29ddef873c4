use std::env;

use url::Url;

use crate::{DEFAULT_GAME_URL, GAME_URL_ENV};

/// The URL the backend serves the game on, honoring the development
/// override. The result always parses and carries a path.
pub(crate) fn resolve_game_url() -> String {
    normalize_game_url(
        &env::var(GAME_URL_ENV).unwrap_or_else(|_| DEFAULT_GAME_URL.to_string()),
        DEFAULT_GAME_URL,
    )
}

pub(crate) fn normalize_game_url(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    match Url::parse(trimmed) {
        Ok(mut parsed) => {
            if parsed.path().is_empty() {
                parsed.set_path("/");
            }
            parsed.to_string()
        }
        Err(_) => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_game_url;
    use crate::DEFAULT_GAME_URL;

    #[test]
    fn normalizing_keeps_a_well_formed_override() {
        assert_eq!(
            normalize_game_url("http://127.0.0.1:9000/play", DEFAULT_GAME_URL),
            "http://127.0.0.1:9000/play"
        );
    }

    #[test]
    fn normalizing_appends_the_root_path() {
        assert_eq!(
            normalize_game_url("http://localhost:8080", DEFAULT_GAME_URL),
            "http://localhost:8080/"
        );
    }

    #[test]
    fn blank_and_unparseable_overrides_fall_back() {
        assert_eq!(normalize_game_url("", DEFAULT_GAME_URL), DEFAULT_GAME_URL);
        assert_eq!(
            normalize_game_url("   ", DEFAULT_GAME_URL),
            DEFAULT_GAME_URL
        );
        assert_eq!(
            normalize_game_url("not a url", DEFAULT_GAME_URL),
            DEFAULT_GAME_URL
        );
    }
}
