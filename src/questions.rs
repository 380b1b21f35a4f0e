//! The question schemas for both flows, plus the extraction of typed answer
//! sets from the collected [`Answers`].
//!
//! Defaults follow the overwrite policy: when a parsed manifest already
//! exists, every prompt defaults to the corresponding existing value and the
//! hard-coded fallbacks only apply on first creation (or when the existing
//! field is empty).

use crate::manifest::{Meta, Permission};
use crate::meta::{
    DEFAULT_MINIMUM_OVERWOLF_VERSION, DEFAULT_VERSION, DESCRIPTION_MAX, DOCK_TITLE_MAX,
    MetaAnswers, truncate,
};
use crate::prompt::{Answers, Choice, DefaultValue, Question, QuestionKind};
use crate::window::{Preset, WindowAnswers, WindowOption};

// -- app flow ---------------------------------------------------------------

fn require_app_name(input: &str) -> Result<(), String> {
    if input.is_empty() {
        Err("App name is mandatory".into())
    } else {
        Ok(())
    }
}

fn require_author(input: &str) -> Result<(), String> {
    if input.is_empty() {
        Err("Author is mandatory".into())
    } else {
        Ok(())
    }
}

fn filter_description(input: &str) -> String {
    truncate(input, DESCRIPTION_MAX)
}

fn filter_dock_title(input: &str) -> String {
    truncate(input, DOCK_TITLE_MAX)
}

fn dock_title_from_name(answers: &Answers) -> Option<String> {
    answers.text("name").map(|name| truncate(name, DOCK_TITLE_MAX))
}

fn wants_permissions(answers: &Answers) -> bool {
    answers.flag("set_permissions") == Some(true)
}

/// A non-empty existing value wins over the built-in fallback.
fn existing_or(existing: Option<&str>, fallback: &str) -> DefaultValue {
    match existing {
        Some(value) if !value.is_empty() => DefaultValue::Fixed(value.to_string()),
        _ => DefaultValue::Fixed(fallback.to_string()),
    }
}

fn existing_only(existing: Option<&str>) -> Option<DefaultValue> {
    match existing {
        Some(value) if !value.is_empty() => Some(DefaultValue::Fixed(value.to_string())),
        _ => None,
    }
}

/// The app initializer's question list: metadata, then the permission gate
/// and picker. `existing` is the meta section of a previously parsed
/// manifest, if any.
pub fn app_questions(existing: Option<&Meta>) -> Vec<Question> {
    let name = existing.map(|m| m.name.as_str());
    let author = existing.map(|m| m.author.as_str());
    let version = existing.map(|m| m.version.as_str());
    let description = existing.map(|m| m.description.as_str());
    let dock_title = existing.map(|m| m.dock_button_title.as_str());
    let min_version = existing.map(|m| m.minimum_overwolf_version.as_str());

    vec![
        Question {
            name: "name",
            message: "App name".into(),
            kind: QuestionKind::Input {
                default: existing_only(name),
                validate: Some(require_app_name),
                filter: None,
            },
            when: None,
        },
        Question {
            name: "author",
            message: "Author".into(),
            kind: QuestionKind::Input {
                default: existing_only(author),
                validate: Some(require_author),
                filter: None,
            },
            when: None,
        },
        Question {
            name: "version",
            message: "Version".into(),
            kind: QuestionKind::Input {
                default: Some(existing_or(version, DEFAULT_VERSION)),
                validate: None,
                filter: None,
            },
            when: None,
        },
        Question {
            name: "description",
            message: "Description [180 chars]".into(),
            kind: QuestionKind::Input {
                default: existing_only(description),
                validate: None,
                filter: Some(filter_description),
            },
            when: None,
        },
        Question {
            name: "dock_button_title",
            message: "Title for dock-button [18 chars]".into(),
            kind: QuestionKind::Input {
                default: Some(match existing_only(dock_title) {
                    Some(value) => value,
                    None => DefaultValue::FromAnswers(dock_title_from_name),
                }),
                validate: None,
                filter: Some(filter_dock_title),
            },
            when: None,
        },
        Question {
            name: "minimum_overwolf_version",
            message: "Minimum Overwolf Version".into(),
            kind: QuestionKind::Input {
                default: Some(existing_or(min_version, DEFAULT_MINIMUM_OVERWOLF_VERSION)),
                validate: None,
                filter: None,
            },
            when: None,
        },
        Question {
            name: "set_permissions",
            message: "Set Permissions for your App?".into(),
            kind: QuestionKind::Confirm { default: false },
            when: None,
        },
        Question {
            name: "permissions",
            message: "Permissions you need".into(),
            kind: QuestionKind::MultiSelect {
                choices: Permission::ALL
                    .into_iter()
                    .map(|p| Choice {
                        label: p.label(),
                        checked: false,
                    })
                    .collect(),
            },
            when: Some(wants_permissions),
        },
    ]
}

/// Typed view of the collected app answers.
pub fn meta_answers(answers: &Answers) -> MetaAnswers {
    let text = |name: &str| answers.text(name).unwrap_or("").to_string();
    MetaAnswers {
        name: text("name"),
        author: text("author"),
        version: text("version"),
        description: text("description"),
        dock_button_title: text("dock_button_title"),
        minimum_overwolf_version: text("minimum_overwolf_version"),
    }
}

/// `None` when the permission picker was skipped at the gate.
pub fn permission_answers(answers: &Answers) -> Option<&[String]> {
    answers.many("permissions")
}

// -- window flow ------------------------------------------------------------

fn validate_pixels(input: &str) -> Result<(), String> {
    if input.trim().is_empty() || input.trim().parse::<u32>().is_ok() {
        Ok(())
    } else {
        Err("Enter a whole number of pixels, or leave empty to skip".into())
    }
}

fn resizable_selected(answers: &Answers) -> bool {
    answers
        .many("options")
        .is_some_and(|options| options.iter().any(|o| o == "resizable"))
}

fn positive_answer(answers: &Answers, name: &str) -> bool {
    answers
        .text(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .is_some_and(|value| value > 0)
}

fn wants_width_bounds(answers: &Answers) -> bool {
    resizable_selected(answers) && positive_answer(answers, "width")
}

fn wants_height_bounds(answers: &Answers) -> bool {
    resizable_selected(answers) && positive_answer(answers, "height")
}

fn pixel_question(name: &'static str, message: &str, when: Option<fn(&Answers) -> bool>) -> Question {
    Question {
        name,
        message: message.into(),
        kind: QuestionKind::Input {
            default: None,
            validate: Some(validate_pixels),
            filter: None,
        },
        when,
    }
}

/// The window initializer's question list. Min/max bounds are only solicited
/// when resizing is selected and the base dimension parses positive.
pub fn window_questions() -> Vec<Question> {
    vec![
        Question {
            name: "options",
            message: "select options:".into(),
            kind: QuestionKind::MultiSelect {
                choices: WindowOption::ALL
                    .into_iter()
                    .map(|o| Choice {
                        label: o.label(),
                        checked: o.default_checked(),
                    })
                    .collect(),
            },
            when: None,
        },
        pixel_question("top", "Startposition from top in pixel (leave empty to skip)", None),
        pixel_question("left", "Startposition from left in pixel (leave empty to skip)", None),
        pixel_question("width", "Width in pixel (leave empty to skip)", None),
        pixel_question(
            "min_width",
            "min width in pixel (leave empty to skip)",
            Some(wants_width_bounds),
        ),
        pixel_question(
            "max_width",
            "max width in pixel (leave empty to skip)",
            Some(wants_width_bounds),
        ),
        pixel_question("height", "Height in pixel (leave empty to skip)", None),
        pixel_question(
            "min_height",
            "min height in pixel (leave empty to skip)",
            Some(wants_height_bounds),
        ),
        pixel_question(
            "max_height",
            "max height in pixel (leave empty to skip)",
            Some(wants_height_bounds),
        ),
        Question {
            name: "preset",
            message: "Select a window-preset".into(),
            kind: QuestionKind::Select {
                choices: Preset::ALL.into_iter().map(Preset::label).collect(),
            },
            when: None,
        },
    ]
}

/// Typed view of the collected window answers. The transparency answer is
/// carried through unpopulated; see the minimize-button rule in the deriver.
pub fn window_answers(answers: &Answers) -> WindowAnswers {
    let pixels = |name: &str| {
        answers
            .text(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse::<u32>().ok())
    };

    let options = answers
        .many("options")
        .unwrap_or(&[])
        .iter()
        .filter_map(|label| WindowOption::from_label(label))
        .collect();

    let preset = answers
        .one("preset")
        .and_then(Preset::from_label)
        .unwrap_or(Preset::App);

    WindowAnswers {
        preset,
        options,
        top: pixels("top"),
        left: pixels("left"),
        width: pixels("width"),
        min_width: pixels("min_width"),
        max_width: pixels("max_width"),
        height: pixels("height"),
        min_height: pixels("min_height"),
        max_height: pixels("max_height"),
        transparent: answers.flag("transparent"),
    }
}
