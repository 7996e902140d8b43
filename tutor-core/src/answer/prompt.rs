//! Fixed prompt texts and context assembly.

use crate::rag::Retrieval;

/// System message establishing the assistant's role.
pub const SYSTEM_MESSAGE: &str = "You are a helpful teaching assistant for a Data Science course.";

/// Context used when no record survives retrieval.
pub const NO_CONTEXT: &str = "No highly relevant information found in the knowledge base.";

/// Joins retrieved content (course first, then forum) with blank lines.
pub fn build_context(retrieval: &Retrieval) -> String {
    let context = retrieval.contents().collect::<Vec<_>>().join("\n\n");
    if context.is_empty() {
        NO_CONTEXT.to_string()
    } else {
        context
    }
}

/// Renders the user prompt for a question and its context block.
pub fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "You are a clever student who has joined IIT Madras' Online Degree in Data Science.\n\
         You are acting as a Virtual Teaching Assistant for the Tools in Data Science course.\n\
         Answer the following student question based ONLY on the provided context.\n\
         If the question cannot be answered from the context, state that you don't have enough information.\n\
         Be concise and helpful.\n\
         \n\
         Student Question: {question}\n\
         \n\
         Context:\n\
         {context}\n"
    )
}
