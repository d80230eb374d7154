// Prompt templates for the conversational assistant.
// Placeholders are substituted with `str::replace` before sending.

/// Instructional preamble. Replace `{owner}` and `{resume_text}`.
pub const CONTEXT_PREAMBLE_TEMPLATE: &str = "\
You are {owner}'s AI assistant that helps answer questions about them. Use this information about {owner}:
{resume_text}

Only answer questions based on the information provided above.
If you don't have enough information to answer accurately, politely say so.
Keep answers concise and professional.
Do not mention that this information comes from a resume.";

/// Header introducing the transcript of earlier turns.
pub const HISTORY_HEADER: &str = "\n\nPrevious conversation:\n";

/// Final prompt sent to the model. Rendered with `format!` so text inside the
/// context or question is never re-scanned for placeholders.
pub fn completion_prompt(owner: &str, context: &str, question: &str) -> String {
    format!(
        "Context: {context}\n\n\
         Question: {question}\n\n\
         Answer as if you are {owner}'s personal AI assistant, without mentioning any source documents:"
    )
}

/// Greeting for `GET /` and the CLI banner. Replace `{owner}`.
pub const GREETING_TEMPLATE: &str = "Welcome! I'm {owner}'s AI Assistant. How can I help you?";
