//! Integration tests for the survey pipeline
//!
//! Tests cover:
//! - Loading a dataset file from disk
//! - Interactive filtering through scripted terminal input
//! - Rendered result lines and JSON export
//! - Fatal errors (unreadable source, malformed rows, bad interaction output)

use fearstudy_survey::filter::FilterMode;
use fearstudy_survey::{
    run, FearCatalog, Interaction, Result, SuccessReport, SuccessTable, SurveyError,
    TerminalInteraction,
};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

const SURVEY: &str = "\
Fear,Greatest,Impact,Past,Encounter,Overcome,Embarrassed
Spiders,,3,Yes,2,Yes,No
Heights,,2,No,4,No,No
Other,Public Speaking,5,Yes,1,Yes,Yes
Spiders,,1,No,1,No,No
Heights,,4,Yes,3,Yes,No
Other,Public Speaking,2,No,2,No,Yes
Flying,,3,No,1,yes,No
";

/// Test helper: Write a dataset into a temp dir
fn write_dataset(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("FearStudy.csv");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Test helper: Terminal interaction fed from a script, no screen clearing
fn scripted(input: &str) -> TerminalInteraction<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalInteraction::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
        .with_clear_screen(false)
}

/// Test helper: Result lines printed after the final selection prompt
///
/// Scripted input is not echoed, so the first result shares a line with
/// the prompt that preceded it.
fn result_lines(output: &str) -> Vec<&str> {
    const SELECTION_PROMPT: &str = "Select fears with comma between them : ";
    let results = output
        .rfind(SELECTION_PROMPT)
        .map(|at| &output[at + SELECTION_PROMPT.len()..])
        .unwrap_or(output);
    results.lines().collect()
}

#[test]
fn test_exclude_nothing_reports_every_fear() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = scripted("0\n\n");

    let report = run(&path, &mut interaction).unwrap();
    assert_eq!(report.subject_count, 7);
    assert_eq!(report.filter_mode, Some(FilterMode::ExcludeSelected));

    let output = String::from_utf8(interaction.into_output()).unwrap();
    assert_eq!(
        result_lines(&output),
        [
            "Fear, Overcome Success = Spiders , 50.00%",
            "Fear, Overcome Success = Heights , 50.00%",
            "Fear, Overcome Success = Public Speaking , 50.00%",
            "Fear, Overcome Success = Flying , 0.00%",
        ]
    );
}

#[test]
fn test_include_only_in_listed_order() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = scripted("1\n2,0\n");

    let report = run(&path, &mut interaction).unwrap();
    let fears: Vec<&str> = report
        .entries
        .entries()
        .iter()
        .map(|entry| entry.fear.as_str())
        .collect();
    assert_eq!(fears, ["Public Speaking", "Spiders"]);
}

#[test]
fn test_exclude_selected_positions() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = scripted("0\n1,3\n");

    let report = run(&path, &mut interaction).unwrap();
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries.get("Spiders"), Some(50.0));
    assert_eq!(report.entries.get("Public Speaking"), Some(50.0));
    assert_eq!(report.entries.get("Heights"), None);
}

#[test]
fn test_invalid_answers_reprompt_then_succeed() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = scripted("yes\n3\n1\n4\n0,x\n3\n");

    let report = run(&path, &mut interaction).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries.get("Flying"), Some(0.0));

    let output = String::from_utf8(interaction.into_output()).unwrap();
    assert_eq!(output.matches("Select a filter mode : ").count(), 3);
    assert_eq!(output.matches("Select fears with comma between them : ").count(), 3);
}

#[test]
fn test_padded_selection_reprompts() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = scripted("1\n+1\n01\n1\n");

    let report = run(&path, &mut interaction).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries.get("Heights"), Some(50.0));

    let output = String::from_utf8(interaction.into_output()).unwrap();
    assert_eq!(output.matches("Select fears with comma between them : ").count(), 3);
    assert_eq!(
        result_lines(&output),
        ["Fear, Overcome Success = Heights , 50.00%"]
    );
}

#[test]
fn test_input_closed_aborts_run() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = scripted("1\n");

    let result = run(&path, &mut interaction);
    assert!(matches!(result, Err(SurveyError::InputClosed)));
}

#[test]
fn test_missing_dataset_is_source_unreadable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.csv");
    let mut interaction = scripted("0\n\n");

    let result = run(&path, &mut interaction);
    assert!(matches!(result, Err(SurveyError::SourceUnreadable { .. })));

    // Nothing was asked
    assert!(interaction.into_output().is_empty());
}

#[test]
fn test_malformed_row_aborts_before_prompting() {
    let content = "\
Fear,Greatest,Impact,Past,Encounter,Overcome,Embarrassed
Spiders,,3,Yes,2,Yes,No
Heights,,2,No,4,No
Flying,,3,No,1,Yes,No
";
    let (_dir, path) = write_dataset(content);
    let mut interaction = scripted("0\n\n");

    let result = run(&path, &mut interaction);
    assert!(matches!(result, Err(SurveyError::MalformedRecord { row: 2, .. })));
    assert!(interaction.into_output().is_empty());
}

#[test]
fn test_export_report_round_trip() {
    let (dir, path) = write_dataset(SURVEY);
    let mut interaction = scripted("1\n0\n");

    let report = run(&path, &mut interaction).unwrap();
    let export_path = dir.path().join("results.json");
    report.export_json(&export_path).unwrap();

    let imported = SuccessReport::import_json(&export_path).unwrap();
    assert_eq!(imported.dataset, path);
    assert_eq!(imported.entries.get("Spiders"), Some(50.0));
}

/// Interaction that answers from fixed values, for exercising the trait seam
struct FixedInteraction {
    mode: FilterMode,
    positions: Vec<usize>,
    rendered: Option<SuccessTable>,
}

impl Interaction for FixedInteraction {
    fn request_filter_mode(&mut self) -> Result<FilterMode> {
        Ok(self.mode)
    }

    fn request_selected_indices(&mut self, _catalog: &FearCatalog) -> Result<Vec<usize>> {
        Ok(self.positions.clone())
    }

    fn render_results(&mut self, table: &SuccessTable) -> Result<()> {
        self.rendered = Some(table.clone());
        Ok(())
    }
}

#[test]
fn test_custom_interaction_receives_table() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = FixedInteraction {
        mode: FilterMode::IncludeOnly,
        positions: vec![0, 1, 2, 3],
        rendered: None,
    };

    let report = run(&path, &mut interaction).unwrap();
    let rendered = interaction.rendered.unwrap();
    assert_eq!(rendered, report.entries);
    assert_eq!(rendered.len(), 4);
}

#[test]
fn test_out_of_range_from_interaction_is_fatal() {
    let (_dir, path) = write_dataset(SURVEY);
    let mut interaction = FixedInteraction {
        mode: FilterMode::ExcludeSelected,
        positions: vec![10],
        rendered: None,
    };

    let result = run(&path, &mut interaction);
    assert!(matches!(
        result,
        Err(SurveyError::SelectionOutOfRange { position: 10, len: 4 })
    ));
    assert!(interaction.rendered.is_none());
}
