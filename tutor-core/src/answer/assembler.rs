//! Response assembly: link collection and image validation.

use super::types::{AnswerResponse, Link};
use super::AnswerError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Placeholder link added when a question gets no supporting links.
pub const GENERAL_INFO_URL: &str = "https://example.com/general-info";
pub const GENERAL_INFO_TEXT: &str = "General course information";

/// Placeholder link added when the answer could not be generated.
pub const ERROR_INFO_URL: &str = "https://example.com/error-info";
pub const ERROR_INFO_TEXT: &str = "Error details";

/// Links for one response, unique by `(url, text)`, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    links: Vec<Link>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link unless an identical one is already present.
    pub fn insert(&mut self, link: Link) -> bool {
        if self.links.contains(&link) {
            return false;
        }
        self.links.push(link);
        true
    }

    pub fn extend<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (url, text) in pairs {
            self.insert(Link::new(url, text));
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn into_vec(self) -> Vec<Link> {
        self.links
    }
}

/// Decodes an image payload, returning its bytes.
///
/// Accepts standard base64, optionally wrapped in a `data:<mime>;base64,`
/// prefix and surrounding whitespace or line breaks.
pub fn decode_image(payload: &str) -> Result<Vec<u8>, AnswerError> {
    let payload = payload.trim();
    let encoded = match payload.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => payload,
    };
    let cleaned: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(cleaned)?)
}

/// Packages the final payload.
///
/// When no link was collected and the question came without an image, the
/// generic placeholder link is added.
pub fn assemble(answer: String, mut links: LinkSet, has_image: bool) -> AnswerResponse {
    if links.is_empty() && !has_image {
        links.insert(Link::new(GENERAL_INFO_URL, GENERAL_INFO_TEXT));
    }
    AnswerResponse {
        answer,
        links: links.into_vec(),
    }
}
