//! Fallback answer generation.
//!
//! Last resort of the provider chain: when no API key is configured or every
//! remote provider fails, a templated answer is produced locally so the
//! analysis pipeline always has text to work with.

use rand::Rng;
use tracing::info;

/// Question scaffolding stripped before the remaining text is treated as the
/// topic. Checked in order; the first match wins.
const QUESTION_PREFIXES: &[&str] = &[
    "what is the",
    "what are the",
    "what is",
    "what are",
    "how does the",
    "how does",
    "how do",
    "how can",
    "why is",
    "why do",
    "explain the",
    "explain",
    "describe the",
    "describe",
    "tell me about",
];

/// Produces canned answers when no remote provider is available.
pub struct FallbackAnswerer;

impl Default for FallbackAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackAnswerer {
    pub fn new() -> Self {
        Self
    }

    /// Generates a templated answer for the question.
    pub fn generate(&self, question: &str) -> String {
        self.generate_with_rng(question, &mut rand::thread_rng())
    }

    /// Same as [`generate`](Self::generate) with an injectable RNG, so tests
    /// can pin the template choice.
    pub fn generate_with_rng<R: Rng>(&self, question: &str, rng: &mut R) -> String {
        let topic = extract_topic(question);
        info!(topic = %topic, "generating fallback answer");

        match rng.gen_range(0..3) {
            0 => format!(
                "{topic} is a subject that can be understood from several angles. \
                 At its core, {topic} involves fundamental principles that shape how it works \
                 in practice. Researchers and practitioners have studied {topic} extensively, \
                 identifying the key mechanisms behind it and the conditions under which it \
                 applies. Understanding {topic} usually starts with its basic definitions \
                 before moving on to more advanced aspects. In everyday settings, {topic} \
                 shows up in many practical situations, which makes it a valuable area to \
                 explore further.",
                topic = topic
            ),
            1 => format!(
                "To understand {topic}, it helps to break the subject into smaller parts. \
                 First, consider what {topic} fundamentally is and why it matters. Second, \
                 look at how {topic} operates in real situations, including common examples \
                 and typical outcomes. Third, examine the factors that influence {topic}, \
                 since context often changes how it behaves. Taken together, these \
                 perspectives give a rounded picture of {topic} and provide a solid starting \
                 point for deeper study.",
                topic = topic
            ),
            _ => format!(
                "{topic} has attracted attention because of its practical importance and the \
                 questions it raises. A good way to approach {topic} is to start with the \
                 essentials: what it is, where it comes from, and what it is used for. From \
                 there, the details of {topic} become easier to follow, including the \
                 trade-offs and limitations involved. While experts continue to refine our \
                 understanding of {topic}, the core ideas are accessible and worth learning \
                 about.",
                topic = topic
            ),
        }
    }
}

/// Reduces a question to its topic: lowercase, trailing punctuation removed,
/// leading question scaffolding stripped. An empty remainder becomes
/// "this topic".
fn extract_topic(question: &str) -> String {
    let mut topic = question.trim().to_lowercase();

    while topic.ends_with('?') || topic.ends_with('.') || topic.ends_with('!') {
        topic.pop();
    }
    topic = topic.trim().to_string();

    for prefix in QUESTION_PREFIXES {
        if let Some(rest) = topic.strip_prefix(prefix) {
            if rest.starts_with(' ') || rest.is_empty() {
                topic = rest.trim().to_string();
                break;
            }
        }
    }

    if topic.is_empty() {
        "this topic".to_string()
    } else {
        topic
    }
}
