//! Survey respondent records
//!
//! A data row holds exactly seven comma-separated fields in the order
//! `fear, greatest, impact, past, encounter, overcome, embarrassed`.

use crate::error::{Result, SurveyError};
use std::fmt;

/// Number of fields in every data row
pub const FIELD_COUNT: usize = 7;

/// Fear value that defers to the greatest-fear field
pub const OTHER_FEAR: &str = "Other";

/// Yes/no survey answer
///
/// Only the exact literal `Yes` counts as [`Answer::Yes`]; `yes`, `YES`
/// and everything else read as [`Answer::No`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn from_field(field: &str) -> Self {
        if field == "Yes" {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }
}

/// One survey respondent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    index: usize,
    fear: String,
    greatest: String,
    impact: i32,
    past: Answer,
    encounter: i32,
    overcome: Answer,
    embarrassed: Answer,
}

impl Subject {
    /// Parse one data row
    ///
    /// `index` is the 1-based row position with the header excluded.
    pub fn parse(index: usize, line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_COUNT {
            return Err(SurveyError::MalformedRecord {
                row: index,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }

        Ok(Self {
            index,
            fear: fields[0].to_string(),
            greatest: fields[1].to_string(),
            impact: parse_rating(index, "impact", fields[2])?,
            past: Answer::from_field(fields[3]),
            encounter: parse_rating(index, "encounter", fields[4])?,
            overcome: Answer::from_field(fields[5]),
            embarrassed: Answer::from_field(fields[6]),
        })
    }

    /// Fear used for grouping: `greatest` when `fear` is "Other"
    pub fn effective_fear(&self) -> &str {
        if self.fear == OTHER_FEAR {
            &self.greatest
        } else {
            &self.fear
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fear(&self) -> &str {
        &self.fear
    }

    pub fn greatest(&self) -> &str {
        &self.greatest
    }

    pub fn impact(&self) -> i32 {
        self.impact
    }

    pub fn past(&self) -> bool {
        self.past.is_yes()
    }

    pub fn encounter(&self) -> i32 {
        self.encounter
    }

    pub fn overcome(&self) -> bool {
        self.overcome.is_yes()
    }

    pub fn embarrassed(&self) -> bool {
        self.embarrassed.is_yes()
    }
}

fn parse_rating(row: usize, name: &str, field: &str) -> Result<i32> {
    field.parse::<i32>().map_err(|_| SurveyError::MalformedRecord {
        row,
        reason: format!("{} '{}' is not an integer", name, field),
    })
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Info for subject {}", self.index)?;
        writeln!(f, "  Fear        : {}", self.fear)?;
        writeln!(f, "  Greatest    : {}", self.greatest)?;
        writeln!(f, "  Impact      : {}", self.impact)?;
        writeln!(f, "  Past        : {}", self.past())?;
        writeln!(f, "  Encounter   : {}", self.encounter)?;
        writeln!(f, "  Overcome    : {}", self.overcome())?;
        write!(f, "  Embarrassed : {}", self.embarrassed())
    }
}
