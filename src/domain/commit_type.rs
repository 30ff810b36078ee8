use crate::domain::change::DiffSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
    Perf,
    Ci,
    Build,
    Revert,
}

impl CommitType {
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Perf,
        CommitType::Ci,
        CommitType::Build,
        CommitType::Revert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Perf => "perf",
            CommitType::Ci => "ci",
            CommitType::Build => "build",
            CommitType::Revert => "revert",
        }
    }

    /// Picks a type from the staged changes using [`CLASSIFICATION_RULES`].
    pub fn classify(changes: &DiffSummary) -> Self {
        let lowered = changes.as_str().to_lowercase();
        CLASSIFICATION_RULES
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.commit_type)
            .unwrap_or(DEFAULT_COMMIT_TYPE)
    }
}

pub const DEFAULT_COMMIT_TYPE: CommitType = CommitType::Chore;

/// A keyword rule; matches when any keyword occurs in the lower-cased diff text.
#[derive(Debug)]
pub struct ClassificationRule {
    pub keywords: &'static [&'static str],
    pub commit_type: CommitType,
}

impl ClassificationRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Evaluated in order; the first matching rule wins.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["test", "_test.go"],
        commit_type: CommitType::Test,
    },
    ClassificationRule {
        keywords: &["fix", "bug"],
        commit_type: CommitType::Fix,
    },
    ClassificationRule {
        keywords: &["feat", "add", "new"],
        commit_type: CommitType::Feat,
    },
    ClassificationRule {
        keywords: &["doc", "readme"],
        commit_type: CommitType::Docs,
    },
    ClassificationRule {
        keywords: &["refactor"],
        commit_type: CommitType::Refactor,
    },
    ClassificationRule {
        keywords: &["style", "format"],
        commit_type: CommitType::Style,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> CommitType {
        CommitType::classify(&DiffSummary::new(raw))
    }

    #[test]
    fn empty_changes_default_to_chore() {
        assert_eq!(classify(""), CommitType::Chore);
    }

    #[test]
    fn fix_takes_priority_over_feat() {
        assert_eq!(classify("M\tsrc/feature.rs\nM\tsrc/fix_parser.rs\n"), CommitType::Fix);
    }

    #[test]
    fn test_files_win_over_everything() {
        assert_eq!(classify("A\tpkg/bugfix_test.go\n"), CommitType::Test);
    }

    #[test]
    fn spec_suffix_is_not_a_test_marker() {
        assert_eq!(classify("M\tsrc/app.spec.ts\n"), CommitType::Chore);
    }

    #[test]
    fn keyword_search_is_case_insensitive() {
        assert_eq!(classify("M\tREADME.md\n"), CommitType::Docs);
        assert_eq!(classify("M\tsrc/Refactor.rs\n"), CommitType::Refactor);
        assert_eq!(classify("M\t.rustfmt-Format.toml\n"), CommitType::Style);
    }

    #[test]
    fn unmatched_changes_fall_back_to_chore() {
        assert_eq!(classify("M\tCargo.lock\n"), CommitType::Chore);
    }

    #[test]
    fn rule_order_is_stable() {
        let order: Vec<_> = CLASSIFICATION_RULES
            .iter()
            .map(|rule| rule.commit_type)
            .collect();
        assert_eq!(
            order,
            vec![
                CommitType::Test,
                CommitType::Fix,
                CommitType::Feat,
                CommitType::Docs,
                CommitType::Refactor,
                CommitType::Style,
            ]
        );
    }
}
