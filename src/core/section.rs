//! Section ids, the ordered section list, and position math.
//!
//! Positions are vertical offsets of the whole section stack in percent of
//! the viewport height.  At rest the stack sits at `index * -100` for the
//! active section.

use std::fmt;

use thiserror::Error;

use super::gesture::Direction;

/// Suffix that maps a hash fragment (`about`) to a section id (`about-id`).
pub const ID_SUFFIX: &str = "-id";

/// Ids of the site's sections, in stacking order.
pub const SITE_SECTION_IDS: &[&str] = &["landing-id", "about-id", "skills-id", "contact-id"];

/// A section's unique id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `"about"` → `about-id`.
    pub fn from_hash(hash: &str) -> Self {
        Self(format!("{hash}{ID_SUFFIX}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash fragment for this id (`about-id` → `"about"`).
    pub fn hash(&self) -> &str {
        self.0.strip_suffix(ID_SUFFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("section list is empty")]
    Empty,
    #[error("duplicate section id `{0}`")]
    Duplicate(String),
}

/// The fixed, ordered list of sections.  Built once at startup.
#[derive(Debug, Clone)]
pub struct SectionList {
    ids: Vec<SectionId>,
}

impl SectionList {
    pub fn new<I, S>(ids: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<SectionId> = Vec::new();
        for id in ids {
            let id = SectionId::new(id);
            if list.contains(&id) {
                return Err(SectionError::Duplicate(id.0));
            }
            list.push(id);
        }
        if list.is_empty() {
            return Err(SectionError::Empty);
        }
        Ok(Self { ids: list })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.ids.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SectionId> {
        self.ids.get(index)
    }

    pub fn first(&self) -> &SectionId {
        &self.ids[0]
    }

    pub fn last(&self) -> &SectionId {
        &self.ids[self.ids.len() - 1]
    }

    pub fn index_of(&self, id: &SectionId) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Rest position for `target`; see [`target_position`].
    pub fn target_position(&self, target: &SectionId) -> i32 {
        target_position(&self.ids, target)
    }

    /// The neighbour of `current` in `direction`.
    ///
    /// Falls back to the first section when `current` is unknown or the
    /// step would leave the list.
    pub fn step(&self, current: &SectionId, direction: Direction) -> SectionId {
        self.index_of(current)
            .and_then(|i| i.checked_add_signed(direction.offset()))
            .and_then(|i| self.ids.get(i))
            .unwrap_or_else(|| self.first())
            .clone()
    }
}

/// Rest position of the stack when `target` is shown.
///
/// `0` when `target` is the first id *or* is not in the list at all;
/// otherwise `index * -100`.
pub fn target_position(ids: &[SectionId], target: &SectionId) -> i32 {
    match ids.iter().position(|id| id == target) {
        Some(index) if index > 0 => index as i32 * -100,
        _ => 0,
    }
}

/// Recover the stack position (percent) from an applied translation.
///
/// `translation` and `height` are in the same unit (rows on a terminal,
/// pixels in a browser).  Works mid-animation, which is what lets a new
/// transition start from wherever the previous one left the stack.
pub fn current_position(translation: f64, height: f64) -> i32 {
    if height <= 0.0 {
        return 0;
    }
    (translation / height * 100.0).round() as i32
}
