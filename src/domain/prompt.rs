//! Answer request composer.
//!
//! Builds the single instruction block sent to the generation service. The
//! composer is deterministic and performs no I/O; question and context are
//! interpolated verbatim, without any escaping.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, MarkTier};

/// Clause substituted when no context text is supplied.
pub const NO_CONTEXT_CLAUSE: &str =
    "No specific context provided. Use general academic knowledge.";

const PROMPT_TEMPLATE_NAME: &str = "answer_prompt";

const PROMPT_TEMPLATE: &str = r#"You are Examark, an advanced exam assistant.

Task: Generate an exam-style answer for the following question based on the provided context (if any) and general knowledge.

Context/Syllabus Material:
{{ context }}

Question: {{ question }}

Marks: {{ marks }}

Style Guide:
{{ style }}

Format: Markdown."#;

/// A composed answer request, ready for transport.
#[derive(Debug, Clone)]
pub struct PromptPayload {
    /// The question text as submitted (trimmed by the caller).
    pub question: String,
    /// Mark weight the answer is scoped to.
    pub marks: MarkTier,
    /// The full rendered instruction block.
    pub text: String,
}

/// Compose the outbound instruction block for a question.
///
/// Total over its inputs: empty question and empty context are both valid.
/// An empty context substitutes the general-knowledge clause; non-empty
/// context is embedded verbatim.
pub fn compose(question: &str, tier: MarkTier, context: &str) -> Result<PromptPayload, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(PROMPT_TEMPLATE_NAME, PROMPT_TEMPLATE)
        .map_err(|e| AppError::PromptRender(e.to_string()))?;

    let template = env
        .get_template(PROMPT_TEMPLATE_NAME)
        .map_err(|e| AppError::PromptRender(e.to_string()))?;

    let context_block = if context.is_empty() { NO_CONTEXT_CLAUSE } else { context };
    let text = template
        .render(context! {
            question => question,
            marks => tier.marks(),
            context => context_block,
            style => style_instruction(tier),
        })
        .map_err(|e| AppError::PromptRender(e.to_string()))?;

    Ok(PromptPayload { question: question.to_string(), marks: tier, text })
}

/// Fixed style instruction for a mark weight.
fn style_instruction(tier: MarkTier) -> &'static str {
    match tier {
        MarkTier::Two => {
            "Provide a concise definition or explanation. Maximum 3-4 sentences. \
             Focus on key terms. Do not use bullet points unless listing distinct items. \
             Keep it brief and accurate."
        }
        MarkTier::Five => {
            "Provide a structured explanation. Use a clear introduction, 3-5 bullet points \
             for key concepts, and a brief conclusion. Highlight important keywords in bold. \
             Total length should be moderate."
        }
        MarkTier::Eight => {
            "Provide a comprehensive, long-form answer suitable for an 8-mark exam question. \
             Organize into clear sections (Introduction, Core Concepts, Detailed Analysis, \
             Conclusion). You MUST include at least one relevant ASCII art diagram or chart \
             to illustrate the concept. Use headings and bold text for emphasis. The answer \
             should be detailed and cover multiple aspects of the topic."
        }
    }
}
