//! Prompt composition for the writing assistant.

/// Instructions placed ahead of every request.
const PREAMBLE: &str = "### SYSTEM INSTRUCTIONS:
You are an expert Writing Assistant. You must follow the user's instructions LITERALLY and COMPLETELY.
- If the user asks for a specific number (e.g., 5 ideas), you MUST provide exactly that number.
- Adhere strictly to the requested tone.
- Do not be brief; provide full, high-quality content.";

/// Build the single prompt string sent upstream: the fixed preamble, then the
/// tone (or `default_tone`), then the raw user text.
pub fn compose_prompt(user_query: &str, tone: Option<&str>, default_tone: &str) -> String {
    let tone = tone.unwrap_or(default_tone);

    format!(
        "{PREAMBLE}\n\n### TONE/ADDITIONAL CONTEXT:\n{tone}\n\n### USER INPUT:\n{user_query}"
    )
}
