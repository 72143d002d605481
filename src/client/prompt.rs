use crate::config::Difficulty;

/// Trimmed question text, or `None` when there is nothing to send.
pub fn question_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Instruction sent upstream. It asks for bare JSON with exactly the keys
/// `answer`, `similar` and `mcq`; the reply is still treated as untrusted.
pub fn build_prompt(question: &str, difficulty: Difficulty) -> String {
    format!(
        r#"
You are PatternAI: an expert assistant. For the user's question, return STRICT JSON with three keys:
1) "answer": a crisp, correct explanation/answer to the user's original question (max ~10 lines).
2) "similar": a string (or an array of at most 2 strings) with a new practice question in the same pattern, slightly harder than the original.
3) "mcq": a single, slightly {difficulty} MCQ based on the same pattern with fields:
   {{ "question": string, "options": {{ "A": string, "B": string, "C": string, "D": string }}, "answer": "A|B|C|D", "explanation": string }}.

Do NOT include any markdown code fences. Output only valid JSON.

User Question:
{question}
"#
    )
}
