//! Window-key derivation: a human-entered display name becomes the stable
//! identifier used as the manifest window key and as the basis for generated
//! file names.
//!
//! Two forms are derived from the same word split:
//!
//! - [`window_key`] — start case with whitespace removed (`"my window"` →
//!   `"MyWindow"`). Used as the map key and the markup file stem.
//! - [`camel_stem`] — camel case (`"my window"` → `"myWindow"`). Used for the
//!   per-window directory and the script/style file stems.
//!
//! Deriving a key from an already-normalized name yields the same key, so
//! re-running the generator with a key instead of a display name is safe.

/// Split a name into words on separators (anything non-alphanumeric), on
/// lower-to-upper case boundaries, on letter/digit boundaries, and at the end
/// of an acronym run (`"HTMLOverlay"` → `["HTML", "Overlay"]`).
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // A non-empty `current` means the previous char was alphanumeric too.
        if !current.is_empty() {
            let prev = chars[i - 1];
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || prev.is_ascii_digit() != c.is_ascii_digit()
                || acronym_end;
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The manifest window key: every word capitalized, no separators.
pub fn window_key(display_name: &str) -> String {
    words(display_name)
        .iter()
        .map(|w| capitalize_first(w))
        .collect()
}

/// The file stem for a window's script/style files and directory: first word
/// lowercased, subsequent words capitalized.
pub fn camel_stem(display_name: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(display_name).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            out.push_str(&capitalize_first(&lower));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word_capitalized() {
        assert_eq!(window_key("start"), "Start");
    }

    #[test]
    fn spaces_removed() {
        assert_eq!(window_key("my window"), "MyWindow");
    }

    #[test]
    fn collapsed_whitespace_and_separators() {
        assert_eq!(window_key("  main   overlay "), "MainOverlay");
        assert_eq!(window_key("main-overlay_hud"), "MainOverlayHud");
    }

    #[test]
    fn camel_input_split_on_case_boundary() {
        assert_eq!(window_key("myWindow"), "MyWindow");
    }

    #[test]
    fn key_derivation_is_idempotent() {
        for name in ["MyWindow", "Start", "MainOverlayHud", "Area51"] {
            assert_eq!(window_key(name), name);
            assert_eq!(window_key(&window_key(name)), window_key(name));
        }
    }

    #[test]
    fn acronym_run_kept_as_one_word() {
        assert_eq!(window_key("HUDOverlay"), "HUDOverlay");
        assert_eq!(window_key("HUD overlay"), "HUDOverlay");
    }

    #[test]
    fn digits_split_from_letters() {
        assert_eq!(window_key("area51"), "Area51");
        assert_eq!(camel_stem("area51"), "area51");
    }

    #[test]
    fn camel_stem_of_key() {
        assert_eq!(camel_stem("MyWindow"), "myWindow");
        assert_eq!(camel_stem("Start"), "start");
        assert_eq!(camel_stem("my window"), "myWindow");
    }

    #[test]
    fn camel_stem_lowercases_acronyms() {
        assert_eq!(camel_stem("HUD overlay"), "hudOverlay");
    }

    #[test]
    fn empty_name_yields_empty_key() {
        assert_eq!(window_key(""), "");
        assert_eq!(camel_stem("   "), "");
    }
}
