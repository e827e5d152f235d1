//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default Gemini model when none is specified.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Sampling temperature for post generation. Low on purpose.
pub const TEMPERATURE: f32 = 0.3;

/// How many search results feed a single post.
pub const SEARCH_MAX_RESULTS: usize = 3;

/// Recency window passed to the search provider.
pub const SEARCH_TIME_RANGE: &str = "week";

/// Separator between formatted search results inside the prompt.
pub const RESULT_SEPARATOR: &str = "\n---\n";

/// Post text used when the model omits `linkedin_post`.
pub const DEFAULT_POST_TEXT: &str = "No post generated.";

/// Body of `GET /`.
pub const WELCOME_MESSAGE: &str =
    "Welcome! POST {\"topic\": \"...\"} to /generate-post to generate a post.";

/// Default per-request timeout for upstream HTTP clients, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Longest upstream body excerpt written to logs.
pub const LOG_BODY_LIMIT: usize = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!AUTHOR.is_empty());
        assert!(!HOMEPAGE.is_empty());
        assert!(!REPO.is_empty());
        assert!(!DEFAULT_MODEL.is_empty());
        assert!(!DEFAULT_POST_TEXT.is_empty());
    }

    #[test]
    fn consts_from_cargo_toml() {
        assert!(AUTHOR.contains("Assaf Sapir"));
        assert!(REPO.contains("github.com/assapir/newspost"));
    }

    #[test]
    fn search_is_capped_and_recent() {
        assert_eq!(SEARCH_MAX_RESULTS, 3);
        assert_eq!(SEARCH_TIME_RANGE, "week");
    }
}
