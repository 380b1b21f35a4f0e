#[cfg(test)]
pub mod test {
    use std::collections::VecDeque;

    use crate::error::ScaffoldError;
    use crate::prompt::{Choice, Prompter};

    /// One pre-scripted reply for the [`ScriptedPrompter`].
    #[derive(Debug, Clone)]
    pub enum Reply {
        Text(&'static str),
        /// Take whatever default the runner passed in (an empty line at the
        /// terminal).
        UseDefault,
        Flag(bool),
        Many(Vec<&'static str>),
        /// Keep the pre-checked entries of a multi-select.
        KeepChecked,
        One(&'static str),
    }

    /// A [`Prompter`] that replays a fixed reply list and records every
    /// question message it was asked, so tests can assert on both the
    /// produced answers and the questions that were (or were not) reached.
    pub struct ScriptedPrompter {
        replies: VecDeque<Reply>,
        pub asked: Vec<String>,
        pub rejections: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(replies: Vec<Reply>) -> Self {
            ScriptedPrompter {
                replies: replies.into(),
                asked: Vec::new(),
                rejections: Vec::new(),
            }
        }

        pub fn was_asked(&self, message_part: &str) -> bool {
            self.asked.iter().any(|m| m.contains(message_part))
        }

        fn next(&mut self, message: &str) -> Result<Reply, ScaffoldError> {
            self.asked.push(message.to_string());
            self.replies
                .pop_front()
                .ok_or_else(|| ScaffoldError::AnswersExhausted(message.to_string()))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(
            &mut self,
            message: &str,
            default: Option<&str>,
        ) -> Result<String, ScaffoldError> {
            match self.next(message)? {
                Reply::Text(value) => Ok(value.to_string()),
                Reply::UseDefault => Ok(default.unwrap_or("").to_string()),
                other => panic!("script expected a text reply for '{message}', got {other:?}"),
            }
        }

        fn confirm(&mut self, message: &str, default: bool) -> Result<bool, ScaffoldError> {
            match self.next(message)? {
                Reply::Flag(value) => Ok(value),
                Reply::UseDefault => Ok(default),
                other => panic!("script expected a flag reply for '{message}', got {other:?}"),
            }
        }

        fn multi_select(
            &mut self,
            message: &str,
            choices: &[Choice],
        ) -> Result<Vec<String>, ScaffoldError> {
            match self.next(message)? {
                Reply::Many(labels) => Ok(labels.into_iter().map(str::to_string).collect()),
                Reply::KeepChecked => Ok(choices
                    .iter()
                    .filter(|c| c.checked)
                    .map(|c| c.label.to_string())
                    .collect()),
                other => panic!("script expected a selection reply for '{message}', got {other:?}"),
            }
        }

        fn select(
            &mut self,
            message: &str,
            _choices: &[&'static str],
        ) -> Result<String, ScaffoldError> {
            match self.next(message)? {
                Reply::One(label) => Ok(label.to_string()),
                other => panic!("script expected a choice reply for '{message}', got {other:?}"),
            }
        }

        fn reject(&mut self, reason: &str) -> Result<(), ScaffoldError> {
            self.rejections.push(reason.to_string());
            Ok(())
        }
    }

    /// Replies for a fresh `app` run taking every default: metadata prompts,
    /// the declined permission gate, then the composed Start window taking
    /// its defaults with the `app` preset.
    pub fn app_run_defaults(name: &'static str, author: &'static str) -> Vec<Reply> {
        vec![
            Reply::Text(name),
            Reply::Text(author),
            Reply::UseDefault, // version
            Reply::UseDefault, // description
            Reply::UseDefault, // dock button title
            Reply::UseDefault, // minimum overwolf version
            Reply::Flag(false), // permission gate
            // composed Start window
            Reply::KeepChecked, // options
            Reply::UseDefault,  // top
            Reply::UseDefault,  // left
            Reply::UseDefault,  // width
            Reply::UseDefault,  // height
            Reply::One("app"),  // preset
        ]
    }

    /// Replies for a standalone `window` run with no geometry.
    pub fn window_run_defaults(preset: &'static str) -> Vec<Reply> {
        vec![
            Reply::KeepChecked,
            Reply::UseDefault,
            Reply::UseDefault,
            Reply::UseDefault,
            Reply::UseDefault,
            Reply::One(preset),
        ]
    }
}
