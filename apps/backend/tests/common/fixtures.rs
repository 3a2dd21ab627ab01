//! Canned completions and request bodies.

use serde_json::{json, Value};

/// A well-formed five line flashcard completion.
pub const CARD_COMPLETION: &str = "\"ephemeral\"\n\
The beauty of the sunset was ephemeral.\n\
Lasting for a very short time.\n\
ephemeral beauty, ephemeral nature, ephemeral moment\n\
Fame on social media is often ephemeral.";

/// Only two usable lines, too short for a card.
pub const SHORT_COMPLETION: &str = "ephemeral\nLasting a short time.";

pub const SIMPLIFY_COMPLETION: &str =
    "Here is a simplified version of the text:\n\nThe cat sat on the mat. It was happy.";

pub const STORY_COMPLETION: &str =
    "# \"The Lost Key\"\nMia could not find her key.\nShe looked under the bed.";

pub fn generate_request(word: &str, sentence: &str) -> Value {
    json!({
        "targetWord": word,
        "initialSentence": sentence,
    })
}
