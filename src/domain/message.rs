use std::sync::LazyLock;

use regex::Regex;

use crate::domain::change::DiffSummary;
use crate::domain::commit_type::CommitType;

/// Upper bound on paths listed in a fallback message.
pub const FALLBACK_FILE_LIMIT: usize = 5;

static CONVENTIONAL_COMMIT: LazyLock<Regex> = LazyLock::new(|| {
    let types = CommitType::ALL
        .iter()
        .map(CommitType::as_str)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^({types})(\([a-z0-9-]+\))?: .+$"))
        .expect("conventional commit pattern is valid")
});

pub fn is_conventional(message: &str) -> bool {
    CONVENTIONAL_COMMIT.is_match(message)
}

/// Returns `message` untouched when it already follows the conventional
/// commit grammar, otherwise rewrites it as `<type>: <description>` with the
/// type classified from `changes`.
pub fn enforce_conventional(message: &str, changes: &DiffSummary) -> String {
    if is_conventional(message) {
        return message.to_string();
    }

    let commit_type = CommitType::classify(changes);
    format!("{}: {}", commit_type.as_str(), describe(message))
}

fn describe(message: &str) -> String {
    let first_sentence = match message.find('.') {
        Some(idx) if idx > 0 => &message[..idx],
        _ => message,
    };
    lowercase_first(first_sentence.trim())
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Message used when the suggestion tool cannot produce one.
pub fn fallback_message(changes: &DiffSummary) -> String {
    let files = changes.changed_files();
    let listed = &files[..files.len().min(FALLBACK_FILE_LIMIT)];
    format!("chore: changes to {}", listed.join(", "))
}

pub fn build_prompt(changes: &DiffSummary) -> String {
    format!(
        "Generate a concise git commit message following conventional commit format \
         (type(scope): description) for these changes. Use types like feat, fix, docs, \
         style, refactor, test, chore. The changes are: {}",
        changes.as_str()
    )
}
