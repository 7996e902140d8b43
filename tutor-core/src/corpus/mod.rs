//! In-memory corpus store.
//!
//! Holds the two knowledge sources (course content and forum posts) together
//! with one precomputed embedding per record. The store is built once at
//! startup and never mutated afterwards, so request handlers can read it
//! concurrently without locking.

mod loader;
mod types;

pub use loader::{load_records, parse_records, read_records, CorpusError};
pub use types::{CorpusKind, CorpusRecord};

use crate::config::CorpusConfig;
use crate::rag::Embedder;
use std::path::Path;
use tracing::{info, warn};

/// Records of one knowledge source paired 1:1 with their embeddings.
///
/// The pairing is checked on construction; there is no way to add or remove
/// a record afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    kind: CorpusKind,
    records: Vec<CorpusRecord>,
    embeddings: Vec<Vec<f32>>,
}

impl Corpus {
    pub fn new(
        kind: CorpusKind,
        records: Vec<CorpusRecord>,
        embeddings: Vec<Vec<f32>>,
    ) -> loader::Result<Self> {
        if records.len() != embeddings.len() {
            return Err(CorpusError::Misaligned {
                records: records.len(),
                embeddings: embeddings.len(),
            });
        }
        Ok(Self {
            kind,
            records,
            embeddings,
        })
    }

    pub fn empty(kind: CorpusKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            embeddings: Vec::new(),
        }
    }

    pub fn kind(&self) -> CorpusKind {
        self.kind
    }

    pub fn records(&self) -> &[CorpusRecord] {
        &self.records
    }

    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Both corpora used by the assistant.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    course: Corpus,
    forum: Corpus,
}

impl CorpusStore {
    pub fn new(course: Corpus, forum: Corpus) -> Self {
        Self { course, forum }
    }

    pub fn empty() -> Self {
        Self::new(Corpus::empty(CorpusKind::Course), Corpus::empty(CorpusKind::Forum))
    }

    /// Loads both corpus files and embeds every record.
    ///
    /// Never fails: a corpus that cannot be read, parsed, or embedded is
    /// logged and left empty, and the other corpus is unaffected.
    pub async fn load(config: &CorpusConfig, embedder: &Embedder) -> Self {
        let (course, forum) = tokio::join!(
            load_corpus(CorpusKind::Course, &config.course_path, embedder),
            load_corpus(CorpusKind::Forum, &config.forum_path, embedder),
        );
        Self::new(course, forum)
    }

    pub fn course(&self) -> &Corpus {
        &self.course
    }

    pub fn forum(&self) -> &Corpus {
        &self.forum
    }
}

async fn load_corpus(kind: CorpusKind, path: &Path, embedder: &Embedder) -> Corpus {
    let records = load_records(path, kind).await;
    if records.is_empty() {
        info!(corpus = %kind, "No records to embed");
        return Corpus::empty(kind);
    }

    let texts: Vec<&str> = records.iter().map(|r| r.content.as_str()).collect();
    let embeddings = match embedder.embed_batch(&texts).await {
        Ok(embeddings) => embeddings,
        Err(e) => {
            warn!(corpus = %kind, error = %e, "Embedding generation failed; corpus will be empty");
            return Corpus::empty(kind);
        }
    };

    match Corpus::new(kind, records, embeddings) {
        Ok(corpus) => {
            info!(corpus = %kind, count = corpus.len(), "Generated embeddings");
            corpus
        }
        Err(e) => {
            warn!(corpus = %kind, error = %e, "Embeddings do not line up with records; corpus will be empty");
            Corpus::empty(kind)
        }
    }
}
