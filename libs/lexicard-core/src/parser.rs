//! Line-based parser for card completions.
//!
//! # Format
//! ```text
//! take a break
//! We should take a break before the meeting.
//! short rest from work
//! take a quick break, need a break, lunch break
//! After two hours of study, I always take a break.
//! ```
//!
//! One field per line, no labels. Blank lines are ignored.

use crate::error::{ParseError, Result};
use crate::types::{clean_collocations, CardDraft};

/// Number of lines a card completion must contain.
pub const CARD_LINE_COUNT: usize = 5;

/// Split a completion into trimmed, non-empty lines, preserving order.
pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a collocations line on commas, dropping empty entries.
pub fn split_collocations(line: &str) -> Vec<String> {
    clean_collocations(line.split(','))
}

/// Remove one leading and one trailing quote mark.
pub fn strip_quotes(text: &str) -> &str {
    let text = text
        .strip_prefix('"')
        .or_else(|| text.strip_prefix('\''))
        .unwrap_or(text);
    text.strip_suffix('"')
        .or_else(|| text.strip_suffix('\''))
        .unwrap_or(text)
}

/// Map a raw completion onto card fields by position.
///
/// Line 1 echoes the caller's sentence and is discarded; the caller's
/// original sentence is kept verbatim on the card. Lines past the fifth are
/// ignored.
pub fn card_draft_from_completion(raw: &str) -> Result<CardDraft> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyCompletion);
    }

    let lines = parse_lines(raw);
    if lines.len() < CARD_LINE_COUNT {
        return Err(ParseError::IncompleteGeneration {
            line_count: lines.len(),
            raw: raw.to_string(),
        });
    }

    let lexical_item = strip_quotes(&lines[0]).trim();
    if lexical_item.is_empty() {
        return Err(ParseError::IncompleteGeneration {
            line_count: lines.len(),
            raw: raw.to_string(),
        });
    }

    Ok(CardDraft {
        lexical_item: lexical_item.to_string(),
        simple_definition: lines[2].clone(),
        collocations: split_collocations(&lines[3]),
        context_sentence: lines[4].clone(),
    })
}
