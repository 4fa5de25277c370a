//! Overcome-success percentages per retained fear

use crate::catalog::FearCatalog;
use crate::error::{Result, SurveyError};
use crate::subject::Subject;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Success figures for one fear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEntry {
    /// Effective fear label
    pub fear: String,
    /// Subjects whose effective fear is this label
    pub total: usize,
    /// Of those, subjects who overcame it
    pub overcome: usize,
    /// `100 * overcome / total`
    pub success_percent: f64,
}

/// Success percentages in catalog order, one entry per catalog label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuccessTable {
    entries: Vec<SuccessEntry>,
}

impl SuccessTable {
    /// Compute the table for every label in `catalog`
    ///
    /// A label with no matching subjects is an error rather than NaN.
    pub fn compute(catalog: &FearCatalog, subjects: &[Subject]) -> Result<Self> {
        let entries = catalog
            .iter()
            .map(|fear| compute_entry(fear, subjects))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Success percentage for a label, if it is in the table
    pub fn get(&self, fear: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.fear == fear)
            .map(|entry| entry.success_percent)
    }

    pub fn entries(&self) -> &[SuccessEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compute_entry(fear: &str, subjects: &[Subject]) -> Result<SuccessEntry> {
    let (total, overcome) = subjects
        .iter()
        .filter(|subject| subject.effective_fear() == fear)
        .fold((0usize, 0usize), |(total, overcome), subject| {
            (total + 1, overcome + usize::from(subject.overcome()))
        });

    if total == 0 {
        return Err(SurveyError::NoMatchingSubjects(fear.to_string()));
    }

    let success_percent = 100.0 * overcome as f64 / total as f64;
    debug!("{}: {}/{} overcome ({:.2}%)", fear, overcome, total, success_percent);

    Ok(SuccessEntry {
        fear: fear.to_string(),
        total,
        overcome,
        success_percent,
    })
}
