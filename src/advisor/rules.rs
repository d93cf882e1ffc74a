//! Priority and category rules

use crate::task::Priority;

use super::model::{Category, Suggestion};

const URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "asap",
    "immediately",
    "critical",
    "emergency",
    "today",
    "now",
];

const IMPORTANT_KEYWORDS: &[&str] = &[
    "important",
    "meeting",
    "deadline",
    "presentation",
    "interview",
    "exam",
];

const WORK_KEYWORDS: &[&str] = &[
    "work",
    "project",
    "client",
    "boss",
    "meeting",
    "presentation",
    "report",
];

const PERSONAL_KEYWORDS: &[&str] = &[
    "doctor",
    "appointment",
    "family",
    "health",
    "exercise",
    "personal",
];

const SHOPPING_KEYWORDS: &[&str] = &[
    "buy", "shop", "purchase", "order", "grocery", "shopping",
];

const LEARNING_KEYWORDS: &[&str] = &[
    "learn", "study", "course", "read", "tutorial", "practice",
];

/// Scan texts longer than this read as "detailed".
const DETAIL_LENGTH_THRESHOLD: usize = 100;

/// Scan texts with more words than this read as "complex".
const COMPLEXITY_WORD_THRESHOLD: usize = 10;

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Suggest a priority and category for a task.
///
/// Pure and total: the same input always yields the same suggestion and
/// the function cannot fail. Matching is substring-based over the
/// lower-cased `title + " " + description` text, with no word
/// boundaries, so "nowhere" matches the urgent keyword "now".
pub fn analyze(title: &str, description: Option<&str>) -> Suggestion {
    let text = format!("{} {}", title, description.unwrap_or("")).to_lowercase();

    let (priority, reasoning) = if contains_any(&text, URGENT_KEYWORDS) {
        (
            Priority::High,
            "Contains urgent keywords indicating immediate action required.",
        )
    } else if contains_any(&text, IMPORTANT_KEYWORDS) {
        (
            Priority::High,
            "Contains important keywords suggesting high priority.",
        )
    } else if text.chars().count() > DETAIL_LENGTH_THRESHOLD {
        (
            Priority::Medium,
            "Detailed task description suggests moderate complexity and importance.",
        )
    } else if text.split_whitespace().count() > COMPLEXITY_WORD_THRESHOLD {
        (Priority::Medium, "Task complexity indicates medium priority.")
    } else {
        (Priority::Low, "Simple task that can be scheduled flexibly.")
    };

    let category = if contains_any(&text, WORK_KEYWORDS) {
        Category::Work
    } else if contains_any(&text, PERSONAL_KEYWORDS) {
        Category::Personal
    } else if contains_any(&text, SHOPPING_KEYWORDS) {
        Category::Shopping
    } else if contains_any(&text, LEARNING_KEYWORDS) {
        Category::Learning
    } else {
        Category::General
    };

    Suggestion {
        priority,
        reasoning: reasoning.to_string(),
        category,
    }
}
