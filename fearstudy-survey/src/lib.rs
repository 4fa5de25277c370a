//! fearstudy-survey library - fear survey analysis
//!
//! Loads a survey CSV, derives the distinct fears reported, lets an operator
//! include or exclude fears, and reports how many subjects overcame each one.

pub mod catalog;
pub mod error;
pub mod experiment;
pub mod filter;
pub mod interaction;
pub mod loader;
pub mod report;
pub mod subject;
pub mod success;

pub use catalog::FearCatalog;
pub use error::{Result, SurveyError};
pub use experiment::{run, Experiment};
pub use filter::FilterMode;
pub use interaction::{Interaction, TerminalInteraction};
pub use report::SuccessReport;
pub use subject::Subject;
pub use success::SuccessTable;
