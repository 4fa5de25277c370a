//! Operator interaction
//!
//! The pipeline asks an [`Interaction`] for the filter mode and selection and
//! hands it the final table. [`TerminalInteraction`] is the interactive
//! implementation; it is generic over its input and output so it can be
//! driven by scripted input.

use crate::catalog::FearCatalog;
use crate::error::{Result, SurveyError};
use crate::filter::{parse_selection, FilterMode};
use crate::report::CliFormatter;
use crate::success::SuccessTable;
use std::io::{BufRead, Write};
use tracing::warn;

/// ANSI clear screen + cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Source of filter choices and sink for results
pub trait Interaction {
    /// Ask for the filter mode until a valid one is given
    fn request_filter_mode(&mut self) -> Result<FilterMode>;

    /// Ask for catalog positions until every one is valid
    ///
    /// An empty answer is an empty selection.
    fn request_selected_indices(&mut self, catalog: &FearCatalog) -> Result<Vec<usize>>;

    /// Display the final success table
    fn render_results(&mut self, table: &SuccessTable) -> Result<()>;
}

/// Line-oriented prompts over a reader and writer
pub struct TerminalInteraction<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Enable or disable clearing the screen after each answered prompt
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Give back the output, e.g. to inspect a scripted session
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SurveyError::InputClosed);
        }

        if self.clear_screen {
            self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        }

        let answer = line.strip_suffix('\n').unwrap_or(line.as_str());
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn request_filter_mode(&mut self) -> Result<FilterMode> {
        let text = CliFormatter::format_mode_prompt();
        loop {
            let answer = self.prompt(&text)?;
            match FilterMode::from_choice(&answer) {
                Some(mode) => return Ok(mode),
                None => warn!("Invalid filter mode '{}', asking again", answer),
            }
        }
    }

    fn request_selected_indices(&mut self, catalog: &FearCatalog) -> Result<Vec<usize>> {
        let text = CliFormatter::format_selection_prompt(catalog);
        loop {
            let answer = self.prompt(&text)?;
            match parse_selection(&answer, catalog.len()) {
                Ok(positions) => return Ok(positions),
                Err(e) if e.is_recoverable() => warn!("{}, asking again", e),
                Err(e) => return Err(e),
            }
        }
    }

    fn render_results(&mut self, table: &SuccessTable) -> Result<()> {
        self.output
            .write_all(CliFormatter::format_results(table).as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
