use crate::models::{GeneratedPayload, Mcq, Similar};

pub const OPTION_PLACEHOLDER: &str = "—";
pub const LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerPanel {
    pub text: String,
}

impl AnswerPanel {
    pub fn render(answer: Option<&str>) -> Self {
        Self {
            text: answer.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn copy_text(&self) -> String {
        self.text.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarPanel {
    pub items: Vec<String>,
}

impl SimilarPanel {
    pub fn render(similar: Option<&Similar>) -> Self {
        let items = match similar {
            Some(Similar::Many(list)) => list.clone(),
            Some(Similar::One(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
            _ => Vec::new(),
        };
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn copy_text(&self) -> String {
        self.items.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct McqPanel {
    pub question: String,
    pub options: [String; 4],
    pub answer_line: String,
    pub explanation_line: String,
}

impl Default for McqPanel {
    fn default() -> Self {
        Self {
            question: String::new(),
            options: LETTERS.map(|_| OPTION_PLACEHOLDER.to_string()),
            answer_line: String::new(),
            explanation_line: String::new(),
        }
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl McqPanel {
    pub fn render(mcq: Option<&Mcq>) -> Self {
        let Some(mcq) = mcq else {
            return Self::default();
        };
        let opts = mcq.options.clone().unwrap_or_default();
        let options = [&opts.a, &opts.b, &opts.c, &opts.d]
            .map(|o| non_empty(o).unwrap_or(OPTION_PLACEHOLDER).to_string());

        Self {
            question: mcq.question.clone().unwrap_or_default(),
            options,
            answer_line: non_empty(&mcq.answer)
                .map(|a| format!("Answer: {a}"))
                .unwrap_or_default(),
            explanation_line: non_empty(&mcq.explanation)
                .map(|e| format!("Explanation: {e}"))
                .unwrap_or_default(),
        }
    }

    /// Question, four lettered options, answer line and explanation line,
    /// one per line.
    pub fn copy_text(&self) -> String {
        let mut lines = vec![self.question.clone()];
        for (letter, option) in LETTERS.iter().zip(&self.options) {
            lines.push(format!("{letter}) {option}"));
        }
        lines.push(self.answer_line.clone());
        lines.push(self.explanation_line.clone());
        lines.join("\n")
    }
}

/// Everything the three panels currently show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub visible: bool,
    pub answer: AnswerPanel,
    pub similar: SimilarPanel,
    pub mcq: McqPanel,
}

impl View {
    pub fn render(payload: &GeneratedPayload) -> Self {
        Self {
            visible: true,
            answer: AnswerPanel::render(payload.answer.as_deref()),
            similar: SimilarPanel::render(payload.similar.as_ref()),
            mcq: McqPanel::render(payload.mcq.as_ref()),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            visible: true,
            answer: AnswerPanel::render(Some(message)),
            ..Self::default()
        }
    }
}
