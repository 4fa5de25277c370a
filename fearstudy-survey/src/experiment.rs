//! Run context for one pass through the survey pipeline
//!
//! Load → catalog → filter → success table → render. The subjects and the
//! catalog live in an [`Experiment`] owned by the caller, so each stage can
//! be exercised on its own.

use crate::catalog::FearCatalog;
use crate::error::Result;
use crate::filter::{apply_filter, FilterMode};
use crate::interaction::Interaction;
use crate::loader::load_dataset;
use crate::report::SuccessReport;
use crate::subject::Subject;
use crate::success::SuccessTable;
use std::path::{Path, PathBuf};
use tracing::info;

/// Subjects and fear catalog for a single run
#[derive(Debug, Clone)]
pub struct Experiment {
    dataset: PathBuf,
    subjects: Vec<Subject>,
    catalog: FearCatalog,
    filter_mode: Option<FilterMode>,
}

impl Experiment {
    /// Load the dataset and derive the fear catalog
    pub fn load(dataset: &Path) -> Result<Self> {
        let subjects = load_dataset(dataset)?;
        Ok(Self::from_subjects(dataset.to_path_buf(), subjects))
    }

    /// Build a context from already loaded subjects
    pub fn from_subjects(dataset: PathBuf, subjects: Vec<Subject>) -> Self {
        let catalog = FearCatalog::from_subjects(&subjects);
        info!(
            "{} distinct fears across {} subjects",
            catalog.len(),
            subjects.len()
        );

        Self {
            dataset,
            subjects,
            catalog,
            filter_mode: None,
        }
    }

    pub fn dataset(&self) -> &Path {
        &self.dataset
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn catalog(&self) -> &FearCatalog {
        &self.catalog
    }

    pub fn filter_mode(&self) -> Option<FilterMode> {
        self.filter_mode
    }

    /// Replace the catalog with its filtered version
    ///
    /// On error the catalog is left untouched.
    pub fn filter(&mut self, positions: &[usize], mode: FilterMode) -> Result<()> {
        self.catalog = apply_filter(&self.catalog, positions, mode)?;
        self.filter_mode = Some(mode);
        info!("{} fears retained after filtering", self.catalog.len());
        Ok(())
    }

    /// Compute success percentages for the current catalog
    pub fn success_table(&self) -> Result<SuccessTable> {
        SuccessTable::compute(&self.catalog, &self.subjects)
    }

    /// Package a computed table with this run's metadata
    pub fn report(&self, table: SuccessTable) -> SuccessReport {
        SuccessReport::new(
            self.dataset.clone(),
            self.subjects.len(),
            self.filter_mode,
            table,
        )
    }
}

/// Run the whole pipeline against a dataset file
///
/// Selection errors are resolved inside the interaction by re-prompting;
/// any error reaching this function aborts the run.
pub fn run<I: Interaction>(dataset: &Path, interaction: &mut I) -> Result<SuccessReport> {
    let mut experiment = Experiment::load(dataset)?;

    let mode = interaction.request_filter_mode()?;
    let positions = interaction.request_selected_indices(experiment.catalog())?;
    experiment.filter(&positions, mode)?;

    let table = experiment.success_table()?;
    interaction.render_results(&table)?;

    Ok(experiment.report(table))
}
