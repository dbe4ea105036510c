//! Random fantasy titles and author names.
//!
//! Word lists are plain data handed to the generator together with the random
//! source, so a seeded `StdRng` reproduces the same title.

pub mod words;

use crate::error::{CoverError, Result};
use crate::models::{AuthorName, TitleSpec};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Article used for nouns drawn from the plural pool.
pub const PLURAL_ARTICLE: &str = " ";

#[derive(Debug, Clone)]
pub struct WordPools {
    singular_nouns: Vec<String>,
    plural_nouns: Vec<String>,
    elements: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AuthorPools {
    first_names: Vec<String>,
    middle_initials: Vec<String>,
    last_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TitleGenerator {
    words: WordPools,
    authors: AuthorPools,
}

impl WordPools {
    /// Validates and trims the pools. Entries may repeat; repeats weight the
    /// draw. Entries containing `" of "` or `" and "` are rejected because the
    /// display title must split back into its clauses.
    pub fn new<S: AsRef<str>>(
        singular_nouns: &[S],
        plural_nouns: &[S],
        elements: &[S],
    ) -> Result<Self> {
        let pools = WordPools {
            singular_nouns: sanitize_pool("singular nouns", singular_nouns, true)?,
            plural_nouns: sanitize_pool("plural nouns", plural_nouns, true)?,
            elements: sanitize_pool("elements", elements, false)?,
        };

        if pools.singular_nouns.is_empty() && pools.plural_nouns.is_empty() {
            return Err(CoverError::ConfigError("noun pools are empty".into()));
        }

        let first = &pools.elements[0];
        if pools.elements.iter().all(|element| element == first) {
            return Err(CoverError::ConfigError(
                "elements pool needs at least two distinct entries".into(),
            ));
        }

        Ok(pools)
    }

    pub fn builtin() -> Self {
        WordPools {
            singular_nouns: to_owned_pool(words::SINGULAR_NOUNS),
            plural_nouns: to_owned_pool(words::PLURAL_NOUNS),
            elements: to_owned_pool(words::ELEMENTS),
        }
    }

    pub fn singular_nouns(&self) -> &[String] {
        &self.singular_nouns
    }

    pub fn plural_nouns(&self) -> &[String] {
        &self.plural_nouns
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

impl Default for WordPools {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AuthorPools {
    pub fn new<S: AsRef<str>>(
        first_names: &[S],
        middle_initials: &[S],
        last_names: &[S],
    ) -> Result<Self> {
        Ok(AuthorPools {
            first_names: sanitize_pool("first names", first_names, false)?,
            middle_initials: sanitize_pool("middle initials", middle_initials, false)?,
            last_names: sanitize_pool("last names", last_names, false)?,
        })
    }

    pub fn builtin() -> Self {
        AuthorPools {
            first_names: to_owned_pool(words::FIRST_NAMES),
            middle_initials: to_owned_pool(words::MIDDLE_INITIALS),
            last_names: to_owned_pool(words::LAST_NAMES),
        }
    }
}

impl Default for AuthorPools {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TitleGenerator {
    pub fn new(words: WordPools, authors: AuthorPools) -> Self {
        Self { words, authors }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(TitleSpec, AuthorName)> {
        let title = generate_title(&self.words, rng)?;
        let author = generate_author(&self.authors, rng)?;
        log::debug!("Generated title '{}' by {}", title, author);
        Ok((title, author))
    }
}

impl Default for TitleGenerator {
    fn default() -> Self {
        Self::new(WordPools::builtin(), AuthorPools::builtin())
    }
}

/// Draws a noun from singular ++ plural, picks its article, then two distinct
/// elements.
pub fn generate_title<R: Rng + ?Sized>(pools: &WordPools, rng: &mut R) -> Result<TitleSpec> {
    let total = pools.singular_nouns.len() + pools.plural_nouns.len();
    if total == 0 {
        return Err(CoverError::ConfigError("noun pools are empty".into()));
    }

    let index = rng.gen_range(0..total);
    let (noun, is_plural) = if index < pools.singular_nouns.len() {
        (&pools.singular_nouns[index], false)
    } else {
        (&pools.plural_nouns[index - pools.singular_nouns.len()], true)
    };

    let element1 = choose(&pools.elements, "elements", rng)?.clone();
    let remaining: Vec<&String> = pools
        .elements
        .iter()
        .filter(|element| **element != element1)
        .collect();
    if remaining.is_empty() {
        return Err(CoverError::ConfigError(
            "elements pool needs at least two distinct entries".into(),
        ));
    }
    let element2 = remaining[rng.gen_range(0..remaining.len())].clone();

    Ok(TitleSpec {
        article: article_for(noun, is_plural).to_string(),
        noun: noun.clone(),
        element1,
        element2,
    })
}

pub fn generate_author<R: Rng + ?Sized>(pools: &AuthorPools, rng: &mut R) -> Result<AuthorName> {
    Ok(AuthorName {
        first: choose(&pools.first_names, "first names", rng)?.clone(),
        middle_initial: choose(&pools.middle_initials, "middle initials", rng)?.clone(),
        last: choose(&pools.last_names, "last names", rng)?.clone(),
    })
}

/// Seeded when `TITLE_SEED` is set, so a run can be replayed.
pub fn title_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn article_for(noun: &str, is_plural: bool) -> &'static str {
    if is_plural {
        return PLURAL_ARTICLE;
    }
    match noun.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A' | 'E' | 'I' | 'O' | 'U') => "An",
        _ => "A",
    }
}

fn choose<'a, R: Rng + ?Sized>(pool: &'a [String], name: &str, rng: &mut R) -> Result<&'a String> {
    if pool.is_empty() {
        return Err(CoverError::ConfigError(format!("{} pool is empty", name)));
    }
    Ok(&pool[rng.gen_range(0..pool.len())])
}

fn sanitize_pool<S: AsRef<str>>(name: &str, entries: &[S], allow_empty: bool) -> Result<Vec<String>> {
    if entries.is_empty() && !allow_empty {
        return Err(CoverError::ConfigError(format!("{} pool is empty", name)));
    }

    entries
        .iter()
        .map(|entry| {
            let word = entry.as_ref().trim();
            if word.is_empty() {
                return Err(CoverError::ConfigError(format!(
                    "{} pool contains a blank entry",
                    name
                )));
            }
            let padded = format!(" {} ", word);
            if padded.contains(" of ") || padded.contains(" and ") {
                return Err(CoverError::ConfigError(format!(
                    "{} entry '{}' contains a title separator",
                    name, word
                )));
            }
            Ok(word.to_string())
        })
        .collect()
}

fn to_owned_pool(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}
