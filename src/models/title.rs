use crate::error::{CoverError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured fantasy title. `article` is `"A"`, `"An"`, or a single space
/// for nouns drawn from the plural pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub noun: String,
    pub article: String,
    pub element1: String,
    pub element2: String,
}

/// The three clauses drawn on a cover: noun phrase, first and second element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleClauses {
    pub noun: String,
    pub element1: String,
    pub element2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    pub first: String,
    pub middle_initial: String,
    pub last: String,
}

impl TitleSpec {
    pub fn display_title(&self) -> String {
        format!(
            "{} {} of {} and {}",
            self.article, self.noun, self.element1, self.element2
        )
        .trim()
        .to_string()
    }

    pub fn noun_clause(&self) -> String {
        format!("{} {}", self.article, self.noun).trim().to_string()
    }

    pub fn clauses(&self) -> TitleClauses {
        TitleClauses {
            noun: self.noun_clause(),
            element1: self.element1.clone(),
            element2: self.element2.clone(),
        }
    }
}

impl fmt::Display for TitleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_title())
    }
}

impl TitleClauses {
    /// Recovers the clauses from a display title by splitting on the first
    /// `" of "` and the first `" and "` after it.
    pub fn parse(title: &str) -> Result<Self> {
        let (noun, elements) = title
            .split_once(" of ")
            .ok_or_else(|| CoverError::MalformedTitle(format!("no \" of \" in '{}'", title)))?;
        let (element1, element2) = elements
            .split_once(" and ")
            .ok_or_else(|| CoverError::MalformedTitle(format!("no \" and \" in '{}'", title)))?;

        let clauses = TitleClauses {
            noun: noun.trim().to_string(),
            element1: element1.trim().to_string(),
            element2: element2.trim().to_string(),
        };

        if clauses.noun.is_empty() || clauses.element1.is_empty() || clauses.element2.is_empty() {
            return Err(CoverError::MalformedTitle(format!(
                "empty clause in '{}'",
                title
            )));
        }

        Ok(clauses)
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}. {}", self.first, self.middle_initial, self.last)
    }
}
