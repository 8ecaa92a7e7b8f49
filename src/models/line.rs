use serde::Serialize;

/// Keyword class of a single line, which fixes its indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Feature,
    Tag,
    Section,
    Examples,
    TableRow,
    Step,
    Empty,
    Fallback,
}

/// Keyword rules in priority order; the first rule whose prefix matches wins
pub const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (Category::Feature, &["Feature:"]),
    (Category::Tag, &["@"]),
    (
        Category::Section,
        &["Scenario:", "Rule:", "Example:", "Background:"],
    ),
    (Category::Examples, &["Examples:"]),
    (Category::TableRow, &["|"]),
    (Category::Step, &["Given", "When", "Then", "And", "But", "*"]),
];

impl Category {
    /// Classify a line whose leading spaces and tabs are already removed
    pub fn classify(token: &str) -> Self {
        let matched = KEYWORD_RULES
            .iter()
            .find(|(_, prefixes)| prefixes.iter().any(|p| token.starts_with(*p)))
            .map(|(category, _)| *category);

        match matched {
            Some(category) => category,
            None if token.is_empty() => Category::Empty,
            None => Category::Fallback,
        }
    }

    /// Canonical indentation, `None` for categories that are not reindented
    pub fn indent(self) -> Option<&'static str> {
        match self {
            Category::Feature => Some(""),
            Category::Tag | Category::Section => Some("  "),
            Category::Examples | Category::Step => Some("    "),
            Category::TableRow => Some("      "),
            Category::Empty | Category::Fallback => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Feature => "feature",
            Category::Tag => "tag",
            Category::Section => "section",
            Category::Examples => "examples",
            Category::TableRow => "table_row",
            Category::Step => "step",
            Category::Empty => "empty",
            Category::Fallback => "fallback",
        }
    }
}

/// A line as emitted by the reindenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReindentedLine {
    pub category: Category,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(Category::classify("Feature: Login"), Category::Feature);
        assert_eq!(Category::classify("@smoke @slow"), Category::Tag);
        assert_eq!(Category::classify("Scenario: ok"), Category::Section);
        assert_eq!(Category::classify("Rule: r"), Category::Section);
        assert_eq!(Category::classify("Background:"), Category::Section);
        assert_eq!(Category::classify("Examples:"), Category::Examples);
        assert_eq!(Category::classify("| a | b |"), Category::TableRow);
        assert_eq!(Category::classify("* something"), Category::Step);
        assert_eq!(Category::classify("But not this"), Category::Step);
        assert_eq!(Category::classify(""), Category::Empty);
        assert_eq!(Category::classify("# comment"), Category::Fallback);
    }

    #[test]
    fn test_example_is_section_but_examples_is_not() {
        // "Examples:" does not start with "Example:" so it falls through to its own rule
        assert_eq!(Category::classify("Example: one"), Category::Section);
        assert_eq!(Category::classify("Examples: many"), Category::Examples);
    }

    #[test]
    fn test_prefix_match_not_word_match() {
        assert_eq!(Category::classify("Andrew says hi"), Category::Step);
        assert_eq!(Category::classify("Scenario Outline: x"), Category::Fallback);
    }

    #[test]
    fn test_indent_table() {
        assert_eq!(Category::Feature.indent(), Some(""));
        assert_eq!(Category::Tag.indent(), Some("  "));
        assert_eq!(Category::Section.indent(), Some("  "));
        assert_eq!(Category::Examples.indent(), Some("    "));
        assert_eq!(Category::Step.indent(), Some("    "));
        assert_eq!(Category::TableRow.indent(), Some("      "));
        assert_eq!(Category::Fallback.indent(), None);
    }
}
