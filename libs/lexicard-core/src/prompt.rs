//! Prompt templates sent to the completion service.

/// System message for chat-style backends.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates flashcard content for language learners.";

/// Build the card prompt for a target word in its sentence.
///
/// The answer must be five unlabelled lines so it can be parsed by position.
pub fn flashcard_prompt(target_word: &str, sentence: &str) -> String {
    format!(
        "Use the following inputs:
**Initial sentence:** [{sentence}]
**Target word:** [{target_word}]
Follow these steps to create the flashcard:
1. **Main phrase**: Extract the most common and natural word combination or structure with the target word from the initial sentence. Ensure that this phrase is directly presented without omissions.
2. **Original sentence**: Repeat the initial sentence exactly as given.
3. **Explanation**: Provide the meaning of the target word in up to 5 words, making it as simple as possible.
4. **High-Frequency Collocations (HFC)**: Provide 3 high-frequency collocations using the target word in the same meaning as the explanation, separated by commas.
5. **Contextual sentence**: Create a simple sentence using the main phrase in a clear and easy-to-understand way.
**Output format:**
Main phrase
Original sentence
Explanation (up to 5 words)
3 high-frequency collocations
Contextual sentence
Provide the information in this sequence, one item per line, without including labels like \"Main phrase:\" or \"Explanation:\". Just give the direct content in the specified order."
    )
}

/// Build the simplification prompt.
pub fn simplify_prompt(text: &str) -> String {
    format!(
        "Your task is to simplify the given text. Follow these rules strictly:

1. Use simpler vocabulary
2. Reduce the length by approximately 50%
3. Simplify the grammar
4. Maintain the main ideas and key information

IMPORTANT: Your output must contain ONLY the simplified text. Do not include any introductory phrases, explanations, or metadata. Start directly with the simplified content.

Input:
{text}

Simplified text:"
    )
}

/// Build the short-story prompt over saved phrases.
pub fn story_prompt(phrases: &[String]) -> String {
    format!(
        "Create a short story using the following phrases: {}. The story should be cohesive, engaging, and no longer than 30 words. The short story must have a title no longer than 3 words. Put the title on the first line and the story on the following lines. Output should contain only the title and the story without any additional info.",
        phrases.join(", ")
    )
}
