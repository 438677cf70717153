// Shared prompt fragments.
// Section-specific templates live in generation/prompts.rs.

/// Appended to every generation prompt. The normalizer parses the reply as-is,
/// so any preamble or sign-off would end up in the document.
pub const NO_PREAMBLE_INSTRUCTION: &str = "\
    Respond with the requested content only. \
    Do NOT add an introduction, headings, explanations, or closing remarks. \
    Do NOT use markdown formatting.";
