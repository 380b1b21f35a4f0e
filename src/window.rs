//! Window configuration derivation: the preset/option decision table and the
//! optional geometry sub-records.
//!
//! Every behavior flag is a pure function of the selected [`Preset`] and the
//! set of [`WindowOption`] toggles; geometry answers are already parsed
//! upstream and only land in the document when present. No I/O happens here.

use serde::{Deserialize, Serialize};

use crate::manifest::{Position, Size, WindowConfig};
use crate::naming;

/// Behavior template a window starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    App,
    Overlay,
    StreamOnly,
    BrowserWindow,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::App,
        Preset::Overlay,
        Preset::StreamOnly,
        Preset::BrowserWindow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preset::App => "app",
            Preset::Overlay => "overlay",
            Preset::StreamOnly => "stream-only",
            Preset::BrowserWindow => "browser-window",
        }
    }

    pub fn from_label(label: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Independently toggled window options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowOption {
    Resizable,
    DesktopOnly,
    DisableRestoreAnimation,
    GrabKeyboardFocus,
}

impl WindowOption {
    pub const ALL: [WindowOption; 4] = [
        WindowOption::Resizable,
        WindowOption::DesktopOnly,
        WindowOption::DisableRestoreAnimation,
        WindowOption::GrabKeyboardFocus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WindowOption::Resizable => "resizable",
            WindowOption::DesktopOnly => "desktop_only",
            WindowOption::DisableRestoreAnimation => "disable_restore_animation",
            WindowOption::GrabKeyboardFocus => "grab_keyboard_focus",
        }
    }

    pub fn from_label(label: &str) -> Option<WindowOption> {
        WindowOption::ALL.into_iter().find(|o| o.label() == label)
    }

    /// Whether the option is pre-checked in the picker.
    pub fn default_checked(self) -> bool {
        matches!(
            self,
            WindowOption::Resizable | WindowOption::DisableRestoreAnimation
        )
    }
}

/// The window-level answer set, parsed from the prompt answers.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAnswers {
    pub preset: Preset,
    pub options: Vec<WindowOption>,
    pub top: Option<u32>,
    pub left: Option<u32>,
    pub width: Option<u32>,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub height: Option<u32>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    /// No question collects this; it exists because the minimize-button rule
    /// reads the transparency *answer*, not the derived flag.
    pub transparent: Option<bool>,
}

impl WindowAnswers {
    pub fn new(preset: Preset, options: Vec<WindowOption>) -> Self {
        WindowAnswers {
            preset,
            options,
            top: None,
            left: None,
            width: None,
            min_width: None,
            max_width: None,
            height: None,
            min_height: None,
            max_height: None,
            transparent: None,
        }
    }

    fn has(&self, option: WindowOption) -> bool {
        self.options.contains(&option)
    }
}

/// Markup file path recorded in the manifest for a window key, matching where
/// the write phase puts the file.
pub fn markup_path(key: &str) -> String {
    format!("windows/{}/{}.html", naming::camel_stem(key), key)
}

/// The decision table: derive a full window record from the answer set.
pub fn derive_window(key: &str, answers: &WindowAnswers) -> WindowConfig {
    let preset = answers.preset;
    WindowConfig {
        file: markup_path(key),
        show_in_taskbar: matches!(preset, Preset::BrowserWindow | Preset::App),
        transparent: preset != Preset::BrowserWindow,
        resizable: answers.has(WindowOption::Resizable),
        // Reads the raw transparency answer rather than the derived flag.
        // Nothing populates that answer, so the minimize button stays on for
        // every preset.
        show_minimize: !answers.transparent.unwrap_or(false),
        clickthrough: preset == Preset::Overlay,
        show_only_on_stream: preset == Preset::StreamOnly,
        ignore_keyboard_events: matches!(preset, Preset::Overlay | Preset::StreamOnly),
        in_game_only: preset == Preset::Overlay,
        desktop_only: answers.has(WindowOption::DesktopOnly),
        disable_restore_animation: answers.has(WindowOption::DisableRestoreAnimation),
        grab_keyboard_focus: answers.has(WindowOption::GrabKeyboardFocus),
        size: size_record(answers.width, answers.height),
        min_size: size_record(answers.min_width, answers.min_height),
        max_size: size_record(answers.max_width, answers.max_height),
        start_position: position_record(answers.left, answers.top),
        topmost: preset == Preset::Overlay,
        extra: serde_json::Map::new(),
    }
}

/// A size sub-record is present only when at least one side was answered.
fn size_record(width: Option<u32>, height: Option<u32>) -> Option<Size> {
    if width.is_none() && height.is_none() {
        return None;
    }
    Some(Size { width, height })
}

fn position_record(left: Option<u32>, top: Option<u32>) -> Option<Position> {
    if left.is_none() && top.is_none() {
        return None;
    }
    Some(Position { left, top })
}
