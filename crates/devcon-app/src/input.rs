//! Maps stdin lines to console key events.

use anyhow::{Result, bail};
use devcon_terminal::{Key, KeyEvent};

const DIRECTIVE: char = '\\';
const TAB_SUFFIX: &str = "\\tab";

/// Translate one stdin line into the key presses it stands for.
pub fn line_to_keys(line: &str) -> Result<Vec<KeyEvent>> {
    if let Some(rest) = line.strip_prefix(DIRECTIVE) {
        return rest
            .split_whitespace()
            .map(|word| key_by_name(word.trim_start_matches(DIRECTIVE)).map(KeyEvent::new))
            .collect();
    }

    let (text, last) = match line.strip_suffix(TAB_SUFFIX) {
        Some(text) => (text, Key::Tab),
        None => (line, Key::Enter),
    };
    let mut keys: Vec<KeyEvent> = text.chars().map(|c| KeyEvent::new(Key::Char(c))).collect();
    keys.push(KeyEvent::new(last));
    Ok(keys)
}

fn key_by_name(name: &str) -> Result<Key> {
    Ok(match name {
        "up" => Key::Up,
        "down" => Key::Down,
        "tab" => Key::Tab,
        "toggle" => Key::Backquote,
        "bs" => Key::Backspace,
        "enter" => Key::Enter,
        other => bail!("unknown key '\\{other}' (up, down, tab, toggle, bs, enter)"),
    })
}
