use lazy_static::lazy_static;
use regex::Regex;

/// Separator between segments of type and footer lines
pub const BULLET: &str = " • ";

lazy_static! {
    static ref BOLD_TAG: Regex = Regex::new(r"<b>(.*?)</b>").unwrap();
    static ref ITALIC_TAG: Regex = Regex::new(r"<i>(.*?)</i>").unwrap();
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest: `"TGT"` -> `"Tgt"`, `"DEMON_HUNTER"` -> `"Demon_Hunter"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub fn join_bullets<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(BULLET)
}

/// Converts HearthstoneJSON card text to Discord markdown.
///
/// Drops `[x]` layout markers and `$` spell-damage markers, flattens newlines,
/// and maps `<b>`/`<i>` to `**`/`_`. Tags are matched non-greedily in one pass,
/// nested tags are not handled.
pub fn format_card_text(text: &str) -> String {
    let text = text.replace("[x]", "").replace('\n', " ").replace('$', "");
    let text = BOLD_TAG.replace_all(&text, "**${1}**");
    ITALIC_TAG.replace_all(&text, "_${1}_").into_owned()
}
