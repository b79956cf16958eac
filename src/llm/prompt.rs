//! System prompt sent alongside the staged diff.

use crate::domain::Language;

const TEMPLATE: &str = "Write a commit message for this diff following Conventional Commits specification.
ALWAYS wrap the entire commit message between ``` delimiters.
Do NOT use scopes.
EACH line must not exceed 72 characters.
Write the commit message in {language} language without any accents.
If there are multiple modifications in different contexts, write the body using a list format.
Otherwise, use a regular paragraph format that ends with a period.
If the body is a list, DO NOT add a period at the end of each list item, as in the following example:
```
feat: add a new feature

- Add a new feature
- Fix a bug
```";

pub fn build_system_prompt(language: Language) -> String {
    TEMPLATE.replace("{language}", language.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_language() {
        let prompt = build_system_prompt(Language::PtBr);
        assert!(prompt.contains("in Portuguese (Brazil) language without any accents"));
        assert!(!prompt.contains("{language}"));
    }

    #[test]
    fn test_prompt_rules() {
        let prompt = build_system_prompt(Language::EnUs);
        assert!(prompt.starts_with("Write a commit message for this diff"));
        assert!(prompt.contains("between ``` delimiters"));
        assert!(prompt.contains("Do NOT use scopes."));
        assert!(prompt.contains("72 characters"));
        assert!(prompt.ends_with("- Fix a bug\n```"));
    }
}
