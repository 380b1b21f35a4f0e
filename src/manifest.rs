//! Serde model of `manifest.json`, the single document both generators
//! compose.
//!
//! The model is deliberately lenient on input and exact on output: every
//! section carries a `#[serde(flatten)]` map so fields this tool does not
//! derive (dependency lists, plugin blocks, anything added by hand) survive a
//! load → modify → save round-trip untouched. Creation-time constants live
//! here next to the structs they populate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project-relative location of the configuration document.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Manifest schema revision understood by the Overwolf client.
pub const MANIFEST_VERSION: u64 = 1;

/// The only extension type the platform currently ships.
pub const APP_TYPE: &str = "WebApp";

/// Window opened when the app launches; also the window the app initializer
/// scaffolds by default.
pub const START_WINDOW: &str = "Start";

pub const ICON_PATH: &str = "assets/img/icon_hover.png";
pub const ICON_GRAY_PATH: &str = "assets/img/icon_inactive.png";

/// The root configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_manifest_version")]
    pub manifest_version: u64,

    #[serde(rename = "type", default = "default_app_type")]
    pub app_type: String,

    #[serde(default)]
    pub meta: Meta,

    /// Absent (not empty) when the user never went through the permission
    /// prompt, matching what the platform expects from hand-written manifests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,

    #[serde(default)]
    pub dependencies: Vec<Value>,

    #[serde(default)]
    pub data: AppData,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_manifest_version() -> u64 {
    MANIFEST_VERSION
}

fn default_app_type() -> String {
    APP_TYPE.to_string()
}

impl Manifest {
    /// A freshly created document: derived meta and permissions on top of the
    /// creation-time defaults, with an empty window map.
    pub fn new(meta: Meta, permissions: Option<Vec<Permission>>) -> Self {
        Manifest {
            manifest_version: MANIFEST_VERSION,
            app_type: APP_TYPE.to_string(),
            meta,
            permissions,
            dependencies: Vec::new(),
            data: AppData {
                start_window: START_WINDOW.to_string(),
                ..AppData::default()
            },
            extra: Map::new(),
        }
    }
}

/// App-level metadata. Wire names follow the platform's manifest format,
/// which mixes kebab-case and snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub version: String,

    #[serde(rename = "minimum-overwolf-version", default)]
    pub minimum_overwolf_version: String,

    #[serde(rename = "access-name", default)]
    pub access_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub dock_button_title: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub icon_gray: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `data` section: the window map plus auxiliary blocks this tool only
/// writes creation defaults for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub windows: BTreeMap<String, WindowConfig>,

    #[serde(default)]
    pub start_window: String,

    #[serde(default)]
    pub externally_connectable: ExternallyConnectable,

    #[serde(default)]
    pub plugins: Vec<Value>,

    #[serde(default)]
    pub hotkeys: Map<String, Value>,

    #[serde(default)]
    pub content_scripts: Vec<Value>,

    #[serde(default)]
    pub launch_events: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternallyConnectable {
    #[serde(default)]
    pub matches: Vec<String>,
}

/// One window's derived configuration. Created whole by the window
/// initializer; never partially updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Markup file the window loads, relative to the project root.
    #[serde(default)]
    pub file: String,

    #[serde(default)]
    pub show_in_taskbar: bool,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub resizable: bool,
    #[serde(default)]
    pub show_minimize: bool,
    #[serde(default)]
    pub clickthrough: bool,
    #[serde(default)]
    pub show_only_on_stream: bool,
    #[serde(default)]
    pub ignore_keyboard_events: bool,
    #[serde(default)]
    pub in_game_only: bool,
    #[serde(default)]
    pub desktop_only: bool,
    #[serde(default)]
    pub disable_restore_animation: bool,
    #[serde(default)]
    pub grab_keyboard_focus: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_position: Option<Position>,

    #[serde(default)]
    pub topmost: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Width/height pair where each side is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Left/top pair where each side is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
}

/// The fixed set of capabilities an app can declare. Serialized exactly as
/// the platform spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    Camera,
    Microphone,
    Logging,
    Extensions,
    Streaming,
    DesktopStreaming,
    Profile,
    Clipboard,
    Hotkeys,
    Media,
    GameInfo,
    GameControl,
    FileSystem,
}

impl Permission {
    pub const ALL: [Permission; 13] = [
        Permission::Camera,
        Permission::Microphone,
        Permission::Logging,
        Permission::Extensions,
        Permission::Streaming,
        Permission::DesktopStreaming,
        Permission::Profile,
        Permission::Clipboard,
        Permission::Hotkeys,
        Permission::Media,
        Permission::GameInfo,
        Permission::GameControl,
        Permission::FileSystem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Permission::Camera => "Camera",
            Permission::Microphone => "Microphone",
            Permission::Logging => "Logging",
            Permission::Extensions => "Extensions",
            Permission::Streaming => "Streaming",
            Permission::DesktopStreaming => "DesktopStreaming",
            Permission::Profile => "Profile",
            Permission::Clipboard => "Clipboard",
            Permission::Hotkeys => "Hotkeys",
            Permission::Media => "Media",
            Permission::GameInfo => "GameInfo",
            Permission::GameControl => "GameControl",
            Permission::FileSystem => "FileSystem",
        }
    }

    pub fn from_label(label: &str) -> Option<Permission> {
        Permission::ALL.into_iter().find(|p| p.label() == label)
    }
}
