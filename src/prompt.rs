//! The interactive prompt service: an explicit question schema, a runner that
//! walks it, and the terminal transport.
//!
//! A flow is an ordered list of [`Question`] descriptors. Each descriptor may
//! carry a `when` predicate evaluated against an immutable snapshot of the
//! answers collected so far; questions whose predicate declines are skipped
//! and leave no answer behind. The runner owns validation (re-ask until the
//! validator accepts) and filters (applied once, after acceptance), so any
//! [`Prompter`] implementation stays a dumb transport.
//!
//! The terminal implementation is generic over its reader/writer pair; the
//! binary wires it to stdio, tests feed it cursors.

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::ScaffoldError;

/// One prompt step in a flow.
pub struct Question {
    /// Key the answer is stored under.
    pub name: &'static str,
    pub message: String,
    pub kind: QuestionKind,
    /// Ask only when the predicate accepts the answers collected so far.
    pub when: Option<fn(&Answers) -> bool>,
}

pub enum QuestionKind {
    /// Free text with optional default, validator and filter.
    Input {
        default: Option<DefaultValue>,
        validate: Option<fn(&str) -> Result<(), String>>,
        filter: Option<fn(&str) -> String>,
    },
    /// Yes/no.
    Confirm { default: bool },
    /// Zero or more of a fixed choice list.
    MultiSelect { choices: Vec<Choice> },
    /// Exactly one of a fixed choice list.
    Select { choices: Vec<&'static str> },
}

/// Default for an input question: fixed up front, or derived from earlier
/// answers at ask time (the dock-button title defaults from the app name).
pub enum DefaultValue {
    Fixed(String),
    FromAnswers(fn(&Answers) -> Option<String>),
}

impl DefaultValue {
    fn resolve(&self, answers: &Answers) -> Option<String> {
        match self {
            DefaultValue::Fixed(value) => Some(value.clone()),
            DefaultValue::FromAnswers(derive) => derive(answers),
        }
    }
}

/// A selectable entry in a [`QuestionKind::MultiSelect`].
pub struct Choice {
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Flag(bool),
    Many(Vec<String>),
    One(String),
}

/// Immutable-snapshot view of the answers collected so far, keyed by question
/// name. `when` predicates and derived defaults read from this.
#[derive(Debug, Clone, Default)]
pub struct Answers(BTreeMap<&'static str, Answer>);

impl Answers {
    pub fn insert(&mut self, name: &'static str, answer: Answer) {
        self.0.insert(name, answer);
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(Answer::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.0.get(name) {
            Some(Answer::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn many(&self, name: &str) -> Option<&[String]> {
        match self.0.get(name) {
            Some(Answer::Many(values)) => Some(values),
            _ => None,
        }
    }

    pub fn one(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(Answer::One(value)) => Some(value),
            _ => None,
        }
    }
}

/// Raw prompt transport. Implementations only move strings; the schema
/// runner applies defaults resolution, validation and filtering.
pub trait Prompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, ScaffoldError>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, ScaffoldError>;

    fn multi_select(
        &mut self,
        message: &str,
        choices: &[Choice],
    ) -> Result<Vec<String>, ScaffoldError>;

    fn select(&mut self, message: &str, choices: &[&'static str])
    -> Result<String, ScaffoldError>;

    /// Report a rejected answer before the question is asked again.
    fn reject(&mut self, _reason: &str) -> Result<(), ScaffoldError> {
        Ok(())
    }
}

/// Walk a question list in order, collecting answers. Each question sees the
/// snapshot of everything answered before it.
pub fn run_schema(
    questions: &[Question],
    prompter: &mut dyn Prompter,
) -> Result<Answers, ScaffoldError> {
    let mut answers = Answers::default();
    for question in questions {
        if let Some(when) = question.when
            && !when(&answers)
        {
            continue;
        }
        let answer = ask(question, &answers, prompter)?;
        answers.insert(question.name, answer);
    }
    Ok(answers)
}

fn ask(
    question: &Question,
    answers: &Answers,
    prompter: &mut dyn Prompter,
) -> Result<Answer, ScaffoldError> {
    match &question.kind {
        QuestionKind::Input {
            default,
            validate,
            filter,
        } => {
            let default = default.as_ref().and_then(|d| d.resolve(answers));
            loop {
                let raw = prompter.input(&question.message, default.as_deref())?;
                if let Some(validate) = validate
                    && let Err(reason) = validate(&raw)
                {
                    prompter.reject(&reason)?;
                    continue;
                }
                let value = match filter {
                    Some(filter) => filter(&raw),
                    None => raw,
                };
                return Ok(Answer::Text(value));
            }
        }
        QuestionKind::Confirm { default } => {
            Ok(Answer::Flag(prompter.confirm(&question.message, *default)?))
        }
        QuestionKind::MultiSelect { choices } => Ok(Answer::Many(
            prompter.multi_select(&question.message, choices)?,
        )),
        QuestionKind::Select { choices } => {
            Ok(Answer::One(prompter.select(&question.message, choices)?))
        }
    }
}

/// Line-oriented prompter over any reader/writer pair.
pub struct TerminalPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        TerminalPrompter {
            reader: BufReader::new(io::stdin()),
            writer: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        TerminalPrompter { reader, writer }
    }

    fn read_line(&mut self) -> Result<String, ScaffoldError> {
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(ScaffoldError::PromptIo)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), ScaffoldError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(ScaffoldError::PromptIo)
    }

    fn write_choices(&mut self, labels: &[String]) -> Result<(), ScaffoldError> {
        for (i, label) in labels.iter().enumerate() {
            self.write(&format!("  {}) {label}\n", i + 1))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, ScaffoldError> {
        match default {
            Some(default) if !default.is_empty() => {
                self.write(&format!("{message} ({default}): "))?;
            }
            _ => self.write(&format!("{message}: "))?,
        }
        let line = self.read_line()?;
        if line.is_empty() {
            return Ok(default.unwrap_or("").to_string());
        }
        Ok(line)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, ScaffoldError> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            self.write(&format!("{message} [{hint}]: "))?;
            let line = self.read_line()?;
            match line.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        choices: &[Choice],
    ) -> Result<Vec<String>, ScaffoldError> {
        self.write(&format!("{message}\n"))?;
        let labels: Vec<String> = choices
            .iter()
            .map(|c| format!("[{}] {}", if c.checked { "x" } else { " " }, c.label))
            .collect();
        self.write_choices(&labels)?;
        self.write("Numbers separated by spaces, Enter keeps the checked entries: ")?;
        let line = self.read_line()?;

        if line.trim().is_empty() {
            return Ok(choices
                .iter()
                .filter(|c| c.checked)
                .map(|c| c.label.to_string())
                .collect());
        }

        let picked: Vec<usize> = line
            .split_whitespace()
            .filter_map(|token| token.parse::<usize>().ok())
            .collect();
        Ok(choices
            .iter()
            .enumerate()
            .filter(|(i, _)| picked.contains(&(i + 1)))
            .map(|(_, c)| c.label.to_string())
            .collect())
    }

    fn select(
        &mut self,
        message: &str,
        choices: &[&'static str],
    ) -> Result<String, ScaffoldError> {
        self.write(&format!("{message}\n"))?;
        let labels: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        self.write_choices(&labels)?;
        loop {
            self.write(&format!("Choice 1-{} (Enter for 1): ", choices.len()))?;
            let line = self.read_line()?;
            if line.trim().is_empty() {
                return Ok(choices[0].to_string());
            }
            if let Ok(index) = line.trim().parse::<usize>()
                && (1..=choices.len()).contains(&index)
            {
                return Ok(choices[index - 1].to_string());
            }
        }
    }

    fn reject(&mut self, reason: &str) -> Result<(), ScaffoldError> {
        self.write(&format!("{reason}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: &TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.writer.clone()).unwrap()
    }

    #[test]
    fn input_returns_typed_line() {
        let mut t = terminal("MyApp\n");
        assert_eq!(t.input("App name", None).unwrap(), "MyApp");
    }

    #[test]
    fn input_empty_line_takes_default() {
        let mut t = terminal("\n");
        assert_eq!(t.input("Version", Some("0.1.0.0")).unwrap(), "0.1.0.0");
    }

    #[test]
    fn input_empty_line_without_default_is_empty() {
        let mut t = terminal("\n");
        assert_eq!(t.input("Description", None).unwrap(), "");
    }

    #[test]
    fn input_shows_default_in_prompt() {
        let mut t = terminal("\n");
        t.input("Version", Some("0.1.0.0")).unwrap();
        assert!(output(&t).contains("Version (0.1.0.0): "));
    }

    #[test]
    fn confirm_parses_yes_no_and_default() {
        assert!(terminal("y\n").confirm("Continue?", false).unwrap());
        assert!(terminal("yes\n").confirm("Continue?", false).unwrap());
        assert!(!terminal("no\n").confirm("Continue?", true).unwrap());
        assert!(!terminal("\n").confirm("Continue?", false).unwrap());
        assert!(terminal("\n").confirm("Continue?", true).unwrap());
    }

    #[test]
    fn confirm_reasks_on_garbage() {
        let mut t = terminal("maybe\ny\n");
        assert!(t.confirm("Continue?", false).unwrap());
    }

    #[test]
    fn multi_select_empty_keeps_checked() {
        let choices = vec![
            Choice {
                label: "resizable",
                checked: true,
            },
            Choice {
                label: "desktop_only",
                checked: false,
            },
            Choice {
                label: "disable_restore_animation",
                checked: true,
            },
        ];
        let mut t = terminal("\n");
        let picked = t.multi_select("select options:", &choices).unwrap();
        assert_eq!(picked, vec!["resizable", "disable_restore_animation"]);
    }

    #[test]
    fn multi_select_numbers_pick_choices() {
        let choices = vec![
            Choice {
                label: "resizable",
                checked: true,
            },
            Choice {
                label: "desktop_only",
                checked: false,
            },
        ];
        let mut t = terminal("2\n");
        let picked = t.multi_select("select options:", &choices).unwrap();
        assert_eq!(picked, vec!["desktop_only"]);
    }

    #[test]
    fn multi_select_ignores_out_of_range() {
        let choices = vec![Choice {
            label: "resizable",
            checked: false,
        }];
        let mut t = terminal("1 9\n");
        let picked = t.multi_select("select options:", &choices).unwrap();
        assert_eq!(picked, vec!["resizable"]);
    }

    #[test]
    fn select_by_number_and_default() {
        let choices = ["app", "overlay", "stream-only", "browser-window"];
        assert_eq!(terminal("2\n").select("preset", &choices).unwrap(), "overlay");
        assert_eq!(terminal("\n").select("preset", &choices).unwrap(), "app");
    }

    #[test]
    fn select_reasks_until_valid() {
        let choices = ["app", "overlay"];
        let mut t = terminal("7\nx\n2\n");
        assert_eq!(t.select("preset", &choices).unwrap(), "overlay");
    }

    // -- schema runner ------------------------------------------------------

    fn required(input: &str) -> Result<(), String> {
        if input.is_empty() {
            Err("Mandatory".into())
        } else {
            Ok(())
        }
    }

    fn shorten(input: &str) -> String {
        input.chars().take(3).collect()
    }

    #[test]
    fn runner_validates_and_reasks() {
        let questions = vec![Question {
            name: "name",
            message: "App name".into(),
            kind: QuestionKind::Input {
                default: None,
                validate: Some(required),
                filter: None,
            },
            when: None,
        }];
        // First line fails validation, second passes.
        let mut t = terminal("\nMyApp\n");
        let answers = run_schema(&questions, &mut t).unwrap();
        assert_eq!(answers.text("name"), Some("MyApp"));
        assert!(output(&t).contains("Mandatory"));
    }

    #[test]
    fn runner_applies_filter_after_acceptance() {
        let questions = vec![Question {
            name: "title",
            message: "Title".into(),
            kind: QuestionKind::Input {
                default: None,
                validate: None,
                filter: Some(shorten),
            },
            when: None,
        }];
        let answers = run_schema(&questions, &mut terminal("abcdef\n")).unwrap();
        assert_eq!(answers.text("title"), Some("abc"));
    }

    #[test]
    fn runner_skips_declined_when() {
        fn never(_: &Answers) -> bool {
            false
        }
        let questions = vec![Question {
            name: "hidden",
            message: "Hidden".into(),
            kind: QuestionKind::Input {
                default: None,
                validate: None,
                filter: None,
            },
            when: Some(never),
        }];
        let answers = run_schema(&questions, &mut terminal("")).unwrap();
        assert_eq!(answers.text("hidden"), None);
    }

    #[test]
    fn runner_when_sees_prior_answers() {
        fn if_agreed(answers: &Answers) -> bool {
            answers.flag("gate") == Some(true)
        }
        let questions = vec![
            Question {
                name: "gate",
                message: "Proceed?".into(),
                kind: QuestionKind::Confirm { default: false },
                when: None,
            },
            Question {
                name: "detail",
                message: "Detail".into(),
                kind: QuestionKind::Input {
                    default: None,
                    validate: None,
                    filter: None,
                },
                when: Some(if_agreed),
            },
        ];
        let answers = run_schema(&questions, &mut terminal("y\nvalue\n")).unwrap();
        assert_eq!(answers.text("detail"), Some("value"));

        let answers = run_schema(&questions, &mut terminal("n\n")).unwrap();
        assert_eq!(answers.text("detail"), None);
    }

    #[test]
    fn runner_resolves_derived_default() {
        fn from_name(answers: &Answers) -> Option<String> {
            answers.text("name").map(|n| n.to_uppercase())
        }
        let questions = vec![
            Question {
                name: "name",
                message: "Name".into(),
                kind: QuestionKind::Input {
                    default: None,
                    validate: None,
                    filter: None,
                },
                when: None,
            },
            Question {
                name: "title",
                message: "Title".into(),
                kind: QuestionKind::Input {
                    default: Some(DefaultValue::FromAnswers(from_name)),
                    validate: None,
                    filter: None,
                },
                when: None,
            },
        ];
        // Second line empty: the derived default applies.
        let answers = run_schema(&questions, &mut terminal("app\n\n")).unwrap();
        assert_eq!(answers.text("title"), Some("APP"));
    }
}
