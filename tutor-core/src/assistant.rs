//! The question-answering pipeline and the state it runs on.
//!
//! An [`Assistant`] is built once at startup and is read-only afterwards.
//! Share it behind an `Arc`; every request borrows it immutably.
//!
//! ```text
//! question → embed → retrieve (course, forum) → prompt → LLM → links → response
//! ```

use crate::answer::{self, AnswerResponse, LinkSet, Query, Synthesizer};
use crate::config::Config;
use crate::corpus::CorpusStore;
use crate::provider::Provider;
use crate::rag::{Embedder, Retrieval, Retriever};
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable application context: both corpora plus the services used to
/// answer questions.
pub struct Assistant {
    store: CorpusStore,
    embedder: Embedder,
    retriever: Retriever,
    synthesizer: Synthesizer,
}

impl Assistant {
    /// Loads and embeds both corpora, then returns a ready assistant.
    ///
    /// This is the blocking startup phase; it completes before any request
    /// is served. Corpus problems are logged and leave that corpus empty.
    pub async fn build(config: Config, provider: Arc<dyn Provider>) -> Self {
        info!("Loading corpora and generating embeddings");
        let embedder = Embedder::new(provider.clone(), &config.embedding);
        let store = CorpusStore::load(&config.corpus, &embedder).await;
        info!(
            course = store.course().len(),
            forum = store.forum().len(),
            "Startup complete"
        );
        Self::with_store(config, provider, store)
    }

    /// Builds an assistant around an already-populated store.
    pub fn with_store(config: Config, provider: Arc<dyn Provider>, store: CorpusStore) -> Self {
        Self {
            embedder: Embedder::new(provider.clone(), &config.embedding),
            retriever: Retriever::new(config.retrieval),
            synthesizer: Synthesizer::new(provider, &config.llm),
            store,
        }
    }

    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    /// Answers one question.
    ///
    /// Returns an error only for an undecodable image, which is checked before
    /// any external call. Embedding or completion failures produce the
    /// fallback answer with the error-info link instead.
    pub async fn answer(&self, query: &Query) -> answer::Result<AnswerResponse> {
        let image = query.image();
        if let Some(payload) = image {
            let bytes = answer::decode_image(payload)?;
            // Images are accepted but not yet used for retrieval or prompting.
            info!(size = bytes.len(), "Received image data");
        }

        let mut links = LinkSet::new();
        let answer = match self.retrieve(&query.question).await {
            Ok(retrieval) => {
                links.extend(retrieval.forum_links());
                self.synthesizer.synthesize(&query.question, &retrieval, &mut links).await
            }
            Err(e) => answer::fallback(&mut links, &e),
        };
        debug!(links = links.len(), "Answer generated");

        Ok(answer::assemble(answer, links, image.is_some()))
    }

    /// Embeds `question` and ranks both corpora against it.
    ///
    /// A blank question matches nothing and is never sent to the embedding
    /// service, which rejects empty input.
    pub async fn retrieve(&self, question: &str) -> Result<Retrieval, crate::rag::EmbedderError> {
        if question.trim().is_empty() {
            debug!("Blank question; skipping retrieval");
            return Ok(Retrieval::default());
        }
        let query_embedding = self.embedder.embed(question).await?;
        Ok(self.retriever.retrieve(&self.store, &query_embedding))
    }
}
