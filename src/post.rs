//! The post handed back to callers, with defaults applied.

use serde::Serialize;
use serde_json::Value;

use crate::consts::DEFAULT_POST_TEXT;
use crate::engine::parse::ModelOutput;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostResult {
    pub topic: String,
    pub news_sources: Vec<String>,
    pub linkedin_post: String,
    pub image_suggestion: Option<String>,
}

impl PostResult {
    /// Shape parsed model output into a post for `topic`. Absent or `null`
    /// keys get defaults; field types were already checked by
    /// [`parse_model_output`](crate::engine::parse::parse_model_output).
    /// Whatever topic the model may have echoed back is ignored.
    pub fn from_output(topic: &str, output: ModelOutput) -> Self {
        let text = |key: &str| output.get(key).and_then(Value::as_str).map(str::to_string);

        let news_sources = output
            .get("news_sources")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            topic: topic.to_string(),
            news_sources,
            linkedin_post: text("linkedin_post").unwrap_or_else(|| DEFAULT_POST_TEXT.to_string()),
            image_suggestion: text("image_suggestion"),
        }
    }
}
