//! Novelty classifier - decides whether a check-in answer carries news.

use serde::{Deserialize, Serialize};

/// Answers that mean "nothing happened this week".
const NEGATIVE_RESPONSES: [&str; 4] = ["niente", "nulla", "no", "nothing"];

/// Outcome of classifying a check-in answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Novelty {
    News,
    NoNews,
}

impl Novelty {
    pub fn is_news(&self) -> bool {
        matches!(self, Novelty::News)
    }
}

/// Classify a check-in answer.
///
/// Blank text and a bare negative answer (any case, one optional trailing
/// period) are `NoNews`; everything else is `News`.
pub fn classify(response_text: &str) -> Novelty {
    let text = response_text.trim();
    if text.is_empty() {
        return Novelty::NoNews;
    }

    let word = text.strip_suffix('.').unwrap_or(text);
    if NEGATIVE_RESPONSES
        .iter()
        .any(|negative| word.eq_ignore_ascii_case(negative))
    {
        Novelty::NoNews
    } else {
        Novelty::News
    }
}
