use std::fmt;

use crate::scoring::{Course, CourseScorer};
use crate::transcript::{aggregate, TranscriptSummary};

pub const DEFAULT_CREDIT_HOURS: f64 = 3.0;
pub const DEFAULT_LETTER: &str = "A";

/// Stable handle for a worksheet entry. Never reused within one worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How the grade for an entry is given.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryInput {
    Grade {
        letter: String,
    },
    Marks {
        mids: f64,
        final_marks: f64,
        sectional: f64,
    },
}

/// One in-progress course row.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseEntry {
    id: EntryId,
    pub name: String,
    pub credit_hours: f64,
    pub input: EntryInput,
}

impl CourseEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn score(&self, scorer: &CourseScorer) -> Course {
        match &self.input {
            EntryInput::Grade { letter } => {
                scorer.score_by_grade(&self.name, self.credit_hours, letter)
            }
            EntryInput::Marks {
                mids,
                final_marks,
                sectional,
            } => scorer.score_by_marks(&self.name, self.credit_hours, *mids, *final_marks, *sectional),
        }
    }
}

/// Ordered list of course entries addressed by [`EntryId`] rather than position,
/// so removing or reordering rows never re-keys the others.
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    entries: Vec<CourseEntry>,
    next_id: u64,
}

impl Worksheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id.
    pub fn push(&mut self, name: impl Into<String>, credit_hours: f64, input: EntryInput) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(CourseEntry {
            id,
            name: name.into(),
            credit_hours,
            input,
        });
        id
    }

    /// Append a blank row: no name, 3 credit hours, grade A.
    pub fn push_default(&mut self) -> EntryId {
        self.push(
            String::new(),
            DEFAULT_CREDIT_HOURS,
            EntryInput::Grade {
                letter: DEFAULT_LETTER.to_string(),
            },
        )
    }

    pub fn get(&self, id: EntryId) -> Option<&CourseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut CourseEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Current 0-based position of an entry.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn remove(&mut self, id: EntryId) -> Option<CourseEntry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    pub fn remove_last(&mut self) -> Option<CourseEntry> {
        self.entries.pop()
    }

    /// Move an entry to `index`, clamped to the last position.
    /// Returns false if the id is unknown.
    pub fn move_to(&mut self, id: EntryId, index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let entry = self.entries.remove(from);
        let to = index.min(self.entries.len());
        self.entries.insert(to, entry);
        true
    }

    /// Drop every entry. Ids handed out before stay retired.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseEntry> {
        self.entries.iter()
    }

    /// Positional placeholder label, "Course N" (1-based).
    pub fn label(&self, id: EntryId) -> Option<String> {
        self.position(id).map(|i| format!("Course {}", i + 1))
    }

    /// The entry's name, or its positional label when the name is blank.
    pub fn display_name(&self, id: EntryId) -> Option<String> {
        let entry = self.get(id)?;
        if entry.is_named() {
            Some(entry.name.trim().to_string())
        } else {
            self.label(id)
        }
    }

    /// Score every entry in order, blank names included.
    pub fn score_all(&self, scorer: &CourseScorer) -> Vec<Course> {
        self.entries.iter().map(|e| e.score(scorer)).collect()
    }

    /// Score every entry and aggregate the named ones.
    pub fn transcript(&self, scorer: &CourseScorer) -> TranscriptSummary {
        aggregate(self.score_all(scorer))
    }
}
