use async_trait::async_trait;
use std::sync::Arc;
use tutor_core::provider::Result;
use tutor_core::{
    Assistant, ChatRequest, ChatResponse, Config, Corpus, CorpusKind, CorpusRecord, CorpusStore,
    Provider, ProviderError,
};

pub const ANSWER: &str = "pandas is a Python library for tabular data analysis.";

/// Keyword embeddings plus a canned (or failing) chat completion. Like the
/// OpenAI embeddings endpoint, empty input strings are rejected.
pub struct StubProvider {
    pub fail_chat: bool,
}

const VOCABULARY: [&str; 4] = ["pandas", "data", "docker", "git"];

pub fn embed(text: &str) -> Vec<f32> {
    let text = text.to_lowercase();
    VOCABULARY
        .iter()
        .map(|word| if text.contains(word) { 1.0 } else { 0.0 })
        .collect()
}

#[async_trait]
impl Provider for StubProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        if self.fail_chat {
            return Err(ProviderError::Api("401 Unauthorized: invalid api key".to_string()));
        }
        Ok(ChatResponse {
            model: request.model,
            content: ANSWER.to_string(),
        })
    }

    async fn embed_batch(&self, inputs: &[&str], _model: &str) -> Result<Vec<Vec<f32>>> {
        if inputs.iter().any(|text| text.is_empty()) {
            return Err(ProviderError::Api("400 Bad Request: input cannot be empty".to_string()));
        }
        Ok(inputs.iter().map(|text| embed(text)).collect())
    }
}

fn corpus(kind: CorpusKind, records: Vec<CorpusRecord>) -> Corpus {
    let embeddings = records.iter().map(|r| embed(&r.content)).collect();
    Corpus::new(kind, records, embeddings).unwrap()
}

pub fn forum_store() -> CorpusStore {
    CorpusStore::new(
        corpus(
            CorpusKind::Course,
            vec![CorpusRecord::new("docker compose lets you run multi-container apps")],
        ),
        corpus(
            CorpusKind::Forum,
            vec![
                CorpusRecord::new("pandas is a data analysis library")
                    .with_link("https://forum/1", "pandas intro"),
                CorpusRecord::new("git push rejected").with_link("https://forum/2", "git help"),
            ],
        ),
    )
}

pub fn assistant(fail_chat: bool, store: CorpusStore) -> Arc<Assistant> {
    let provider = Arc::new(StubProvider { fail_chat });
    Arc::new(Assistant::with_store(Config::default(), provider, store))
}
