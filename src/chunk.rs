//! Document chunking
//!
//! Long policies are split into paragraph-aligned sections before
//! classification, so each section gets its own first-hit-per-practice pass.
//! Sizes are estimated from a fixed characters-per-token ratio.

use crate::classifier::PracticeClassifier;
use crate::config::ChunkConfig;
use crate::error::{Result, ScanError};
use crate::types::ClassificationRecord;

/// Characters per token used for size estimates
pub const CHARS_PER_TOKEN: usize = 4;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Section id assigned to the chunk at `index`
pub fn section_id(index: usize) -> String {
    format!("chunk_{}", index)
}

/// Split `text` into paragraph-aligned chunks of roughly
/// `min_tokens..max_tokens` tokens.
///
/// Paragraphs are accumulated while the chunk stays under the maximum. A
/// paragraph that would overflow closes the chunk if it already reached the
/// minimum; otherwise it is appended anyway and the chunk closes as soon as
/// it reaches the minimum.
pub fn chunk_text(text: &str, min_tokens: usize, max_tokens: usize) -> Vec<String> {
    let min_chars = min_tokens.saturating_mul(CHARS_PER_TOKEN);
    let max_chars = max_tokens.saturating_mul(CHARS_PER_TOKEN);

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    let paragraphs = text.split('\n').filter(|p| !p.trim().is_empty());

    for para in paragraphs {
        let para_chars = para.chars().count();

        if current_chars.saturating_add(para_chars) < max_chars {
            push_paragraph(&mut current, &mut current_chars, para, para_chars);
        } else if current_chars >= min_chars {
            chunks.push(current.trim().to_string());
            current.clear();
            current_chars = 0;
            push_paragraph(&mut current, &mut current_chars, para, para_chars);
        } else {
            push_paragraph(&mut current, &mut current_chars, para, para_chars);
            if current_chars >= min_chars {
                chunks.push(current.trim().to_string());
                current.clear();
                current_chars = 0;
            }
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

fn push_paragraph(current: &mut String, current_chars: &mut usize, para: &str, para_chars: usize) {
    current.push_str(para);
    current.push_str(PARAGRAPH_SEPARATOR);
    *current_chars += para_chars + PARAGRAPH_SEPARATOR.len();
}

/// Chunk a whole policy document and classify every section.
///
/// Records are concatenated in chunk order, each tagged `chunk_<index>`.
pub fn classify_document(
    classifier: &PracticeClassifier<'_>,
    text: &str,
    config: &ChunkConfig,
) -> Result<Vec<ClassificationRecord>> {
    let chunks = chunk_text(text, config.min_tokens, config.max_tokens);
    if chunks.is_empty() {
        return Err(ScanError::InvalidInput(
            "Document contains no text".to_string(),
        ));
    }

    tracing::debug!(sections = chunks.len(), "Document chunked");

    let mut records = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        records.extend(classifier.classify(chunk, &section_id(index))?);
    }
    Ok(records)
}
