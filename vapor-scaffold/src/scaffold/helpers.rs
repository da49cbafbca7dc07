//! Template helper functions for code generation
//!
//! Naming conventions shared by every composer. The conventions are fixed:
//! identifiers use the entity name verbatim, paths and schema names use the
//! lower-cased name, and pluralization appends a literal `s`.

use std::fmt::Write;

/// Naming and layout helpers for the composers
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Lower-case form used for variables, route segments and view directories
    ///
    /// # Examples
    ///
    /// ```
    /// # use vapor_scaffold::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_lower("Post"), "post");
    /// assert_eq!(TemplateHelpers::to_lower("UserProfile"), "userprofile");
    /// ```
    #[must_use]
    pub fn to_lower(input: &str) -> String {
        input.to_lowercase()
    }

    /// Naive plural: lower-case and append `s`
    ///
    /// No irregular forms are handled, so `Category` becomes `categorys`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vapor_scaffold::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("Post"), "posts");
    /// assert_eq!(TemplateHelpers::pluralize("Category"), "categorys");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        format!("{}s", Self::to_lower(input))
    }

    /// Route path for the collection (`/posts`)
    #[must_use]
    pub fn to_route_path(input: &str) -> String {
        format!("/{}", Self::pluralize(input))
    }

    /// Capitalize every whitespace-separated word: first letter upper-case,
    /// the rest lower-case
    ///
    /// # Examples
    ///
    /// ```
    /// # use vapor_scaffold::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::capitalize("title"), "Title");
    /// assert_eq!(TemplateHelpers::capitalize("publishedAt"), "Publishedat");
    /// ```
    #[must_use]
    pub fn capitalize(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut at_word_start = true;
        for c in input.chars() {
            if c.is_whitespace() {
                out.push(c);
                at_word_start = true;
            } else if at_word_start {
                out.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        }
        out
    }

    /// Join fragments, one per line, each continuation line prefixed with
    /// `indent` spaces
    ///
    /// The first fragment carries no indentation; the caller places it after
    /// the indentation already present in the surrounding block.
    #[must_use]
    pub fn join_lines(fragments: &[String], indent: usize) -> String {
        let separator = format!("\n{}", " ".repeat(indent));
        fragments.join(&separator)
    }

    /// Render fragments as continuation lines: each one starts on a new line
    /// indented by `indent` spaces
    ///
    /// Empty input yields an empty string, so a block with no fields leaves
    /// no trace in the surrounding document.
    #[must_use]
    pub fn continuation_lines(fragments: &[String], indent: usize) -> String {
        let pad = " ".repeat(indent);
        fragments.iter().fold(String::new(), |mut out, fragment| {
            let _ = write!(out, "\n{pad}{fragment}");
            out
        })
    }
}
