use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = String;

    // user input, so case does not matter here
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            other => Err(format!("'{other}' is not one of A, B, C, D")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Unanswered,
    Submitted(Outcome),
}

/// Grading state for the current MCQ.
///
/// The solution starts locked and hidden for every new question; only a
/// submission unlocks it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grader {
    correct: String,
    selected: Option<Choice>,
    status: Status,
    solution_unlocked: bool,
    solution_visible: bool,
}

impl Grader {
    pub fn new(correct: Option<&str>) -> Self {
        Self {
            correct: correct.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn select(&mut self, choice: Choice) {
        self.selected = Some(choice);
    }

    pub fn selected(&self) -> Option<Choice> {
        self.selected
    }

    /// `None` when nothing is selected; state is left untouched then.
    pub fn submit(&mut self) -> Option<Outcome> {
        let choice = self.selected?;
        let outcome = if choice.as_str() == self.correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.status = Status::Submitted(outcome);
        self.solution_unlocked = true;
        Some(outcome)
    }

    /// Flip solution visibility. No effect while locked.
    pub fn toggle_solution(&mut self) -> bool {
        if self.solution_unlocked {
            self.solution_visible = !self.solution_visible;
        }
        self.solution_visible
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn solution_unlocked(&self) -> bool {
        self.solution_unlocked
    }

    pub fn solution_visible(&self) -> bool {
        self.solution_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_without_selection_changes_nothing() {
        let mut g = Grader::new(Some("B"));
        let before = g.clone();
        assert_eq!(g.submit(), None);
        assert_eq!(g, before);
        assert!(!g.toggle_solution());
    }

    #[test]
    fn correct_and_incorrect() {
        let mut g = Grader::new(Some("B"));
        g.select(Choice::B);
        assert_eq!(g.submit(), Some(Outcome::Correct));
        assert_eq!(g.status(), Status::Submitted(Outcome::Correct));

        let mut g = Grader::new(Some("B"));
        g.select(Choice::C);
        assert_eq!(g.submit(), Some(Outcome::Incorrect));
        assert!(g.solution_unlocked());
    }

    #[test]
    fn match_is_exact() {
        let mut g = Grader::new(Some("b"));
        g.select(Choice::B);
        assert_eq!(g.submit(), Some(Outcome::Incorrect));

        let mut g = Grader::new(None);
        g.select(Choice::A);
        assert_eq!(g.submit(), Some(Outcome::Incorrect));
    }

    #[test]
    fn solution_toggles_only_after_submit() {
        let mut g = Grader::new(Some("A"));
        assert!(!g.toggle_solution());
        g.select(Choice::D);
        g.submit();
        assert!(g.toggle_solution());
        assert!(!g.toggle_solution());
    }

    #[test]
    fn choice_parsing() {
        assert_eq!("c".parse::<Choice>(), Ok(Choice::C));
        assert!("E".parse::<Choice>().is_err());
    }
}
