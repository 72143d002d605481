use console::style;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::Backend;
use super::clipboard::SystemClipboard;
use super::grading::{Choice, Outcome};
use super::session::{Panel, Session};
use super::view::{LETTERS, View};
use crate::config::Difficulty;

const HELP: &str = "\
Type a question and press Enter to generate.
  /pick <A|B|C|D>      choose an MCQ option
  /submit              grade the chosen option
  /solution            show or hide the solution (after submitting)
  /copy <answer|similar|mcq>
  /difficulty <easy|medium|hard>
  /clear               reset everything
  /help, /quit";

enum Action {
    Generate(String),
    Pick(Choice),
    Submit,
    Solution,
    Copy(Panel),
    Difficulty(Difficulty),
    Clear,
    Help,
    Quit,
}

fn parse_action(line: &str) -> Result<Action, String> {
    let Some(command) = line.strip_prefix('/') else {
        return Ok(Action::Generate(line.to_string()));
    };
    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let arg = words.next().unwrap_or_default();
    match name {
        "pick" => arg.parse().map(Action::Pick),
        "submit" => Ok(Action::Submit),
        "solution" => Ok(Action::Solution),
        "copy" => match arg {
            "answer" => Ok(Action::Copy(Panel::Answer)),
            "similar" => Ok(Action::Copy(Panel::Similar)),
            "mcq" => Ok(Action::Copy(Panel::Mcq)),
            other => Err(format!("unknown panel '{other}'")),
        },
        "difficulty" => <Difficulty as clap::ValueEnum>::from_str(arg, true).map(Action::Difficulty),
        "clear" => Ok(Action::Clear),
        "help" => Ok(Action::Help),
        "quit" | "exit" => Ok(Action::Quit),
        other => Err(format!("unknown command '/{other}'")),
    }
}

fn print_view(view: &View) {
    if !view.visible {
        return;
    }
    println!("\n{}", style("Answer").bold().cyan());
    if view.answer.is_empty() {
        println!("{}", style("(no answer)").dim());
    } else {
        println!("{}", view.answer.text);
    }

    println!("\n{}", style("Similar questions").bold().cyan());
    if view.similar.is_empty() {
        println!("{}", style("(none)").dim());
    }
    for (i, q) in view.similar.items.iter().enumerate() {
        println!("{}. {}", i + 1, q);
    }

    println!("\n{}", style("Practice MCQ").bold().cyan());
    println!("{}", view.mcq.question);
    for (letter, option) in LETTERS.iter().zip(&view.mcq.options) {
        println!("  {letter}) {option}");
    }
    println!();
}

fn print_solution(view: &View) {
    println!("{}", style(&view.mcq.answer_line).green());
    println!("{}", view.mcq.explanation_line);
}

/// Interactive loop for `patternai ask`.
pub async fn run(backend: &dyn Backend, difficulty: Difficulty) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new(difficulty);
    let mut clipboard = SystemClipboard::default();

    println!("{}", style("PatternAI").bold());
    println!("{HELP}\n");

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            tracing::debug!(error = %e, "history entry not recorded");
        }

        let action = match parse_action(line.trim()) {
            Ok(action) => action,
            Err(msg) => {
                println!("{}", style(msg).yellow());
                continue;
            }
        };

        match action {
            Action::Generate(question) => {
                session.question = question;
                println!("{}", style(format!("Generating ({})...", session.difficulty)).dim());
                match session.generate(backend).await {
                    Ok(()) => print_view(session.view()),
                    Err(notice) => println!("{}", style(notice).yellow()),
                }
            }
            Action::Pick(choice) => {
                session.select(choice);
                println!("Selected {choice}");
            }
            Action::Submit => match session.submit() {
                Ok(Outcome::Correct) => println!("{}", style("Correct!").green().bold()),
                Ok(Outcome::Incorrect) => println!(
                    "{}",
                    style("Incorrect! Try again or view the solution.").red().bold()
                ),
                Err(notice) => println!("{}", style(notice).yellow()),
            },
            Action::Solution => {
                if !session.grader().solution_unlocked() {
                    println!("{}", style("Submit an answer to unlock the solution.").dim());
                } else if session.toggle_solution() {
                    print_solution(session.view());
                } else {
                    println!("{}", style("Solution hidden.").dim());
                }
            }
            Action::Copy(panel) => {
                session.copy(panel, &mut clipboard);
                println!("{}", style("Copied.").dim());
            }
            Action::Difficulty(d) => {
                session.difficulty = d;
                println!("Difficulty set to {d}");
            }
            Action::Clear => {
                session.clear();
                println!("{}", style("Cleared.").dim());
            }
            Action::Help => println!("{HELP}"),
            Action::Quit => break,
        }
    }
    Ok(())
}
