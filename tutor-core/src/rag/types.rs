use crate::corpus::CorpusRecord;

/// A record that survived ranking, with its similarity score.
///
/// `index` is the record's position in its corpus.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub index: usize,
    pub score: f32,
    pub record: CorpusRecord,
}

/// Candidates retrieved for one question, each list best-first.
#[derive(Debug, Clone, Default)]
pub struct Retrieval {
    pub course: Vec<SearchResult>,
    pub forum: Vec<SearchResult>,
}

impl Retrieval {
    pub fn is_empty(&self) -> bool {
        self.course.is_empty() && self.forum.is_empty()
    }

    /// Content blocks in prompt order: course results, then forum results.
    pub fn contents(&self) -> impl Iterator<Item = &str> {
        self.course
            .iter()
            .chain(self.forum.iter())
            .map(|result| result.record.content.as_str())
    }

    /// `(url, title)` pairs of forum results that carry both.
    pub fn forum_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forum.iter().filter_map(|result| result.record.link())
    }
}
