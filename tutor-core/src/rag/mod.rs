//! Retrieval side of the RAG pipeline.
//!
//! # How It Works
//!
//! 1. **Indexing** (startup, see [`crate::corpus`]): every record is embedded
//!    once and kept in memory next to its embedding.
//! 2. **Retrieval** (per question): the question is embedded with the same
//!    [`Embedder`], scored against both corpora by cosine similarity, and the
//!    best few records above the relevance threshold are kept.
//! 3. **Generation** (see [`crate::answer`]): surviving records become the
//!    prompt context for the LLM.

mod embedder;
mod search;
mod types;

pub use embedder::{Embedder, EmbedderError};
pub use search::{cosine_similarity, search};
pub use types::{Retrieval, SearchResult};

use crate::config::RetrievalConfig;
use crate::corpus::CorpusStore;
use tracing::debug;

/// Selects relevant records from both corpora for a query embedding.
#[derive(Debug, Clone, Copy)]
pub struct Retriever {
    config: RetrievalConfig,
}

impl Retriever {
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    /// Ranks both corpora against `query_embedding`.
    ///
    /// Course content contributes at most `course_top_k` results and forum
    /// posts at most `forum_top_k`; nothing at or below the similarity
    /// threshold is returned.
    pub fn retrieve(&self, store: &CorpusStore, query_embedding: &[f32]) -> Retrieval {
        let threshold = self.config.similarity_threshold;
        let course = search(store.course(), query_embedding, self.config.course_top_k, threshold);
        let forum = search(store.forum(), query_embedding, self.config.forum_top_k, threshold);

        for (corpus, results) in [(store.course(), &course), (store.forum(), &forum)] {
            for result in results {
                debug!(corpus = %corpus.kind(), index = result.index, score = result.score, "Retrieved candidate");
            }
        }
        debug!(course = course.len(), forum = forum.len(), "Retrieval complete");

        Retrieval { course, forum }
    }
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new(RetrievalConfig::default())
    }
}
