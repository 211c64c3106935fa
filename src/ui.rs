// Presentation layer: turns API records into the lines printed on the
// terminal. The formatting functions are pure (records in, lines out) so
// the command handlers decide where the lines go; only `terminal_width`
// and `spinner` touch the terminal.

use crate::config::FALLBACK_WIDTH;
use crate::models::{Ayah, Hadith, HadithBook, Surah, Tafsir};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("markup tag pattern is valid"));

/// Current terminal width in columns, or `FALLBACK_WIDTH` when stdout is
/// not attached to a terminal.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => FALLBACK_WIDTH,
    }
}

/// A spinner on stderr shown while a request is in flight. indicatif
/// hides it when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// A full-width separator line.
pub fn rule(width: usize) -> String {
    "-".repeat(width.max(1))
}

/// Remove inline HTML tags such as `<i>` and `<br>` from API text.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

pub fn surah_list(surahs: &[Surah]) -> Vec<String> {
    surahs
        .iter()
        .map(|s| {
            format!(
                "{}. {} ({}) - {} Ayat",
                s.number, s.arabic_name, s.latin_name, s.verse_count
            )
        })
        .collect()
}

/// Labeled surah fields; with `with_audio`, one line per reciter link.
pub fn surah_detail(surah: &Surah, with_audio: bool) -> Vec<String> {
    let mut lines = vec![
        format!("Surah: {} ({})", surah.arabic_name, surah.latin_name),
        format!("Verses: {}", surah.verse_count),
        format!("Revealed in: {}", surah.revelation_place),
        format!("Meaning: {}", surah.meaning),
        format!("Description: {}", strip_markup(&surah.description)),
    ];
    if with_audio {
        lines.push(String::new());
        lines.push("Audio:".to_string());
        if surah.audio.is_empty() {
            lines.push("  No recitations available".to_string());
        }
        for (reciter, url) in &surah.audio {
            lines.push(format!("  Reciter {reciter}: {url}"));
        }
    }
    lines
}

/// Arabic and transliteration blocks for `ayat`, then the translations.
pub fn ayat(surah: &Surah, ayat: &[&Ayah], width: usize) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} {}:1-{} ({})",
            surah.latin_name, surah.number, surah.verse_count, surah.arabic_name
        ),
        String::new(),
    ];
    for ayah in ayat {
        lines.push(format!(" “{}”", ayah.arabic));
        lines.push(format!("{} ({})", ayah.latin, ayah.number));
        lines.push(String::new());
    }
    lines.push("Translation:".to_string());
    for ayah in ayat {
        lines.push(format!("{}. {}", ayah.number, ayah.translation));
        lines.push(rule(width));
    }
    lines
}

pub fn tafsir(tafsir: &Tafsir) -> Vec<String> {
    let mut lines = vec![format!(
        "Tafsir for Surah {} ({}):",
        tafsir.arabic_name, tafsir.latin_name
    )];
    lines.extend(
        tafsir
            .entries
            .iter()
            .map(|entry| format!("Ayat {} - {}", entry.ayat, entry.text)),
    );
    lines
}

pub fn hadith_books(books: &[HadithBook]) -> Vec<String> {
    books
        .iter()
        .enumerate()
        .map(|(idx, book)| {
            format!(
                "{}. {} | 1 - {} ({})",
                idx + 1,
                book.name,
                book.available,
                book.id
            )
        })
        .collect()
}

/// A single hadith framed by rules.
pub fn hadith(hadith: &Hadith, width: usize) -> Vec<String> {
    let mut lines = vec![rule(width), String::new()];
    lines.extend(hadith_block(hadith));
    lines.push(String::new());
    lines.push(rule(width));
    lines
}

/// Consecutive hadiths, each followed by a rule.
pub fn hadith_range(hadiths: &[Hadith], width: usize) -> Vec<String> {
    let mut lines = vec![rule(width), String::new()];
    for h in hadiths {
        lines.extend(hadith_block(h));
        lines.push(String::new());
        lines.push(rule(width));
        lines.push(String::new());
    }
    lines
}

fn hadith_block(hadith: &Hadith) -> [String; 3] {
    [
        format!("“{}”", hadith.arabic),
        String::new(),
        format!(
            " “{}” - {} ({})",
            hadith.translation, hadith.book_name, hadith.number
        ),
    ]
}
