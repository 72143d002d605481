use std::fmt;

use super::clipboard::{Clipboard, copy_quietly};
use super::grading::{Choice, Grader, Outcome};
use super::payload::parse_payload;
use super::prompt::{build_prompt, question_input};
use super::view::View;
use super::{Backend, extract_text_or_empty};
use crate::config::Difficulty;

pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// User-facing notices. None of them change session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyQuestion,
    Busy,
    NoSelection,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Notice::EmptyQuestion => "Please paste a question first.",
            Notice::Busy => "Still generating, please wait.",
            Notice::NoSelection => "Please select an answer first.",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Answer,
    Similar,
    Mcq,
}

// Clears the busy flag when dropped, so a cancelled generate cannot leave it set.
struct BusyGuard<'a>(&'a mut bool);

impl<'a> BusyGuard<'a> {
    fn hold(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// One user's front-end state: the question being asked, what the panels
/// show, and grading for the current MCQ.
#[derive(Debug, Default)]
pub struct Session {
    pub question: String,
    pub difficulty: Difficulty,
    busy: bool,
    view: View,
    grader: Grader,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn grader(&self) -> &Grader {
        &self.grader
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Build the prompt, make one backend call and render the result.
    /// Transport failures are rendered as a failure view, never returned.
    pub async fn generate(&mut self, backend: &dyn Backend) -> Result<(), Notice> {
        let Some(question) = question_input(&self.question) else {
            return Err(Notice::EmptyQuestion);
        };
        if self.busy {
            return Err(Notice::Busy);
        }
        let prompt = build_prompt(question, self.difficulty);

        let guard = BusyGuard::hold(&mut self.busy);
        let result = backend.generate(&prompt).await;
        drop(guard);

        match result {
            Ok(data) => {
                let payload = parse_payload(&extract_text_or_empty(&data));
                self.view = View::render(&payload);
                self.grader = Grader::new(payload.mcq.as_ref().and_then(|m| m.answer.as_deref()));
            }
            Err(e) => {
                tracing::error!(error = %e, "generate failed");
                self.view = View::failure(FAILURE_MESSAGE);
                self.grader = Grader::default();
            }
        }
        Ok(())
    }

    pub fn select(&mut self, choice: Choice) {
        self.grader.select(choice);
    }

    pub fn submit(&mut self) -> Result<Outcome, Notice> {
        self.grader.submit().ok_or(Notice::NoSelection)
    }

    pub fn toggle_solution(&mut self) -> bool {
        self.grader.toggle_solution()
    }

    pub fn copy(&self, panel: Panel, clipboard: &mut dyn Clipboard) {
        let text = match panel {
            Panel::Answer => self.view.answer.copy_text(),
            Panel::Similar => self.view.similar.copy_text(),
            Panel::Mcq => self.view.mcq.copy_text(),
        };
        copy_quietly(clipboard, &text);
    }

    /// Back to the initial empty state; difficulty is a setting and stays.
    pub fn clear(&mut self) {
        *self = Self::new(self.difficulty);
    }
}
