//! Line-oriented [`Shell`] for interactive terminals.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use chanmap_core::{Choice, ProgressUpdate, Shell};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const PROGRESS_TEMPLATE: &str = "{spinner} {pos} rows sent [{elapsed}]";

/// Prompts on `output` and reads answers line by line from `input`.
///
/// A blank answer or end of input cancels the prompt.
pub struct TerminalShell<R, W> {
    input: R,
    output: W,
    progress: Option<ProgressBar>,
    draw_progress: bool,
}

impl TerminalShell<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            progress: None,
            draw_progress: true,
        }
    }

    /// Track progress without drawing a bar.
    #[must_use]
    pub fn without_progress_bar(mut self) -> Self {
        self.draw_progress = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text} ")?;
        self.output.flush()?;
        Ok(self.read_line()?.filter(|answer| !answer.is_empty()))
    }

    fn progress_bar(&mut self) -> &ProgressBar {
        let draw_progress = self.draw_progress;
        self.progress.get_or_insert_with(|| {
            let target = if draw_progress {
                ProgressDrawTarget::stderr()
            } else {
                ProgressDrawTarget::hidden()
            };
            let bar = ProgressBar::with_draw_target(None, target);
            bar.set_style(
                ProgressStyle::with_template(PROGRESS_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        })
    }
}

impl<R: BufRead, W: Write> Shell for TerminalShell<R, W> {
    fn present_choice(
        &mut self,
        title: &str,
        text: &str,
        choices: &[Choice],
    ) -> io::Result<Option<String>> {
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{}", choice_table(choices))?;
        loop {
            let Some(answer) = self.prompt(&format!("{text} [1-{}, blank to cancel]", choices.len()))?
            else {
                return Ok(None);
            };
            if let Some(choice) = pick(choices, &answer) {
                return Ok(Some(choice.value.clone()));
            }
            writeln!(self.output, "`{answer}` is not one of the listed choices.")?;
        }
    }

    fn show_message(&mut self, title: &str, text: &str) -> io::Result<()> {
        writeln!(self.output, "{title}: {text}")
    }

    fn request_text(&mut self, title: &str, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{title}")?;
        self.prompt(text)
    }

    fn show_progress(&mut self, update: ProgressUpdate) -> io::Result<()> {
        match update {
            ProgressUpdate::Advanced { processed } => {
                let bar = self.progress_bar();
                bar.set_position(processed as u64);
                bar.tick();
            }
            ProgressUpdate::Finished { processed } => {
                if let Some(bar) = self.progress.take() {
                    bar.finish_and_clear();
                }
                writeln!(self.output, "Sent {processed} mapping rows.")?;
            }
        }
        Ok(())
    }
}

/// Match an answer by 1-based position or by exact value.
fn pick<'a>(choices: &'a [Choice], answer: &str) -> Option<&'a Choice> {
    match answer.parse::<usize>() {
        Ok(position) if position >= 1 => choices.get(position - 1),
        _ => choices.iter().find(|choice| choice.value == answer),
    }
}

fn choice_table(choices: &[Choice]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .force_no_tty()
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Provider").add_attribute(Attribute::Bold),
        ]);
    for (position, choice) in choices.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1).set_alignment(CellAlignment::Right),
            Cell::new(&choice.label),
        ]);
    }
    table
}
