use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::Engine;
use super::parse::{ModelOutput, parse_model_output};
use crate::consts::LOG_BODY_LIMIT;
use crate::error::{PipelineError, truncate_body};
use crate::events::{Event, EventBus, Stage};
use crate::model::LanguageModel;
use crate::prompts::post::{build_post_prompt, format_results};
use crate::search::SearchClient;

/// search → format → prompt → generate → parse, strictly in order.
/// The first failing step ends the run; there is no partial result.
pub struct PostPipeline {
    search: Arc<dyn SearchClient>,
    model: Arc<dyn LanguageModel>,
    events: EventBus,
}

impl PostPipeline {
    pub fn new(search: Arc<dyn SearchClient>, model: Arc<dyn LanguageModel>) -> Self {
        Self {
            search,
            model,
            events: EventBus::default(),
        }
    }

    /// Watch stage transitions of every subsequent run.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    fn enter(&self, topic: &str, stage: Stage) {
        debug!(%stage, topic, "pipeline stage");
        self.events.emit(Event::StageEntered {
            topic: topic.to_string(),
            stage,
        });
    }

    async fn execute(&self, topic: &str) -> Result<ModelOutput, (Stage, PipelineError)> {
        self.enter(topic, Stage::Searching);
        let results = self
            .search
            .search(topic)
            .await
            .map_err(|e| (Stage::Searching, e))?;

        self.enter(topic, Stage::Formatting);
        let formatted = format_results(&results);

        self.enter(topic, Stage::Prompting);
        let prompt = build_post_prompt(topic, &formatted);

        self.enter(topic, Stage::Generating);
        let generation = self
            .model
            .generate(&prompt)
            .await
            .map_err(|e| (Stage::Generating, e))?;

        self.enter(topic, Stage::Parsing);
        parse_model_output(&generation.text).map_err(|e| {
            warn!(
                raw = %truncate_body(&generation.text, LOG_BODY_LIMIT),
                "model output rejected"
            );
            (Stage::Parsing, e)
        })
    }
}

#[async_trait]
impl Engine for PostPipeline {
    async fn run(&self, topic: &str) -> Result<ModelOutput, PipelineError> {
        match self.execute(topic).await {
            Ok(output) => {
                self.events.emit(Event::Done {
                    topic: topic.to_string(),
                });
                Ok(output)
            }
            Err((stage, error)) => {
                debug!(%stage, %error, "pipeline failed");
                self.events.emit(Event::Failed {
                    topic: topic.to_string(),
                    stage,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }
}
