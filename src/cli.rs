//! Command tree and handlers.
//!
//! Each leaf of the clap tree maps to one handler. Handlers validate
//! their input before touching the network, run a single API call and
//! write the presenter's lines to `out`. Problems the user can fix (bad
//! surah number, malformed range, API refusals) are printed and the
//! handler returns `Ok`; only transport and I/O failures bubble up.

use crate::api::ApiClient;
use crate::config::{HADITH_RANGE_LIMIT, SURAH_COUNT};
use crate::error::{SurahNumberError, TransportError};
use crate::models::{ApiFailure, Ayah};
use crate::range::{self, HadithRange};
use crate::ui;
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn, LevelFilter};
use std::io::Write;

pub const AYAT_NOT_AVAILABLE: &str = "Ayat not available for the given filter";
pub const HADITH_NUMBER_REQUIRED: &str = "A hadith number is required unless --range is given";

#[derive(Parser, Debug)]
#[command(
    name = "alquran",
    version,
    about = "Read Quran surahs, tafsir and hadith collections from the terminal"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Surahs of the Quran
    Surah {
        #[command(subcommand)]
        action: SurahCommands,
    },
    /// Hadith collections
    #[command(visible_alias = "hadith")]
    Hadits {
        #[command(subcommand)]
        action: HaditsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SurahCommands {
    /// List every surah with its verse count
    #[command(alias = "daftar-surah")]
    List,
    /// Show the name, meaning and description of a surah
    #[command(alias = "detail-surah")]
    Detail {
        /// Surah number (1-114)
        number: u32,
        /// Also list the full-surah recitation links
        #[arg(long)]
        audio: bool,
    },
    /// Print the ayat of a surah with transliteration and translation
    #[command(alias = "isi-surah")]
    Ayat {
        /// Surah number (1-114)
        number: u32,
        /// Only show these ayat, e.g. --ayat 5, --ayat 2-5 or --ayat 1,3-5
        #[arg(long, value_name = "RANGE")]
        ayat: Option<String>,
    },
    /// Print the tafsir of every ayah in a surah
    #[command(alias = "tafsir-surah")]
    Tafsir {
        /// Surah number (1-114)
        number: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum HaditsCommands {
    /// List the hadith collections and how many hadiths each holds
    #[command(alias = "daftar-hadits")]
    List,
    /// Show one hadith, or a range of hadiths, from a collection
    #[command(visible_alias = "show", alias = "lihat-hadits")]
    Lihat {
        /// Collection id as shown by `hadits list`, e.g. bukhari
        book: String,
        /// Hadith number within the collection
        number: Option<u32>,
        /// Range of hadith numbers, e.g. --range 1-3 (takes precedence over NUMBER)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,
    },
}

/// Check that `number` names one of the 114 surahs.
pub fn validate_surah_number(number: u32) -> Result<u32, SurahNumberError> {
    match number {
        0 => Err(SurahNumberError::Zero),
        n if n > SURAH_COUNT => Err(SurahNumberError::TooLarge(n)),
        n => Ok(n),
    }
}

/// Dispatch a parsed command. `width` sizes the separator rules.
pub fn run(command: Commands, api: &ApiClient, out: &mut dyn Write, width: usize) -> Result<()> {
    match command {
        Commands::Surah { action } => match action {
            SurahCommands::List => surah_list(api, out),
            SurahCommands::Detail { number, audio } => surah_detail(api, out, number, audio),
            SurahCommands::Ayat { number, ayat } => {
                surah_ayat(api, out, width, number, ayat.as_deref())
            }
            SurahCommands::Tafsir { number } => surah_tafsir(api, out, number),
        },
        Commands::Hadits { action } => match action {
            HaditsCommands::List => hadith_books(api, out),
            HaditsCommands::Lihat {
                book,
                number,
                range,
            } => hadith_lookup(api, out, width, &book, number, range.as_deref()),
        },
    }
}

fn hadith_lookup(
    api: &ApiClient,
    out: &mut dyn Write,
    width: usize,
    book: &str,
    number: Option<u32>,
    range: Option<&str>,
) -> Result<()> {
    match range {
        Some(raw) => {
            if let Some(number) = number {
                warn!("Ignoring hadith number {number}; --range {raw} takes precedence");
            }
            hadith_range(api, out, width, book, raw)
        }
        None => match number {
            Some(number) => hadith_single(api, out, width, book, number),
            None => {
                writeln!(out, "{HADITH_NUMBER_REQUIRED}")?;
                Ok(())
            }
        },
    }
}

fn surah_list(api: &ApiClient, out: &mut dyn Write) -> Result<()> {
    info!("Listing surahs");
    match fetch("Fetching surah list...", || api.surah_list())?.into_data() {
        Ok(surahs) => emit(out, &ui::surah_list(&surahs)),
        Err(failure) => report(out, &failure),
    }
}

fn surah_detail(api: &ApiClient, out: &mut dyn Write, number: u32, audio: bool) -> Result<()> {
    let Some(number) = checked_surah(out, number)? else {
        return Ok(());
    };
    info!("Showing details of surah {number}");
    match fetch("Fetching surah...", || api.surah(number))?.into_data() {
        Ok(surah) => emit(out, &ui::surah_detail(&surah, audio)),
        Err(failure) => report(out, &failure),
    }
}

fn surah_ayat(
    api: &ApiClient,
    out: &mut dyn Write,
    width: usize,
    number: u32,
    filter: Option<&str>,
) -> Result<()> {
    let Some(number) = checked_surah(out, number)? else {
        return Ok(());
    };
    let selection = match filter.map(range::parse_selection).transpose() {
        Ok(selection) => selection,
        Err(err) => {
            writeln!(out, "Invalid ayat filter: {err}")?;
            return Ok(());
        }
    };
    info!("Reading surah {number} (filter: {filter:?})");

    let surah = match fetch("Fetching ayat...", || api.surah(number))?.into_data() {
        Ok(surah) => surah,
        Err(failure) => return report(out, &failure),
    };
    let picked: Vec<&Ayah> = match &selection {
        Some(selection) => surah.select_ayat(selection),
        None => surah.ayat.iter().collect(),
    };
    if picked.is_empty() {
        writeln!(out, "{AYAT_NOT_AVAILABLE}")?;
        return Ok(());
    }
    emit(out, &ui::ayat(&surah, &picked, width))
}

fn surah_tafsir(api: &ApiClient, out: &mut dyn Write, number: u32) -> Result<()> {
    let Some(number) = checked_surah(out, number)? else {
        return Ok(());
    };
    info!("Showing tafsir of surah {number}");
    match fetch("Fetching tafsir...", || api.tafsir(number))?.into_data() {
        Ok(tafsir) => emit(out, &ui::tafsir(&tafsir)),
        Err(failure) => report(out, &failure),
    }
}

fn hadith_books(api: &ApiClient, out: &mut dyn Write) -> Result<()> {
    info!("Listing hadith books");
    match fetch("Fetching hadith books...", || api.hadith_books())?.into_data() {
        Ok(books) => emit(out, &ui::hadith_books(&books)),
        Err(failure) => report(out, &failure),
    }
}

fn hadith_single(
    api: &ApiClient,
    out: &mut dyn Write,
    width: usize,
    book: &str,
    number: u32,
) -> Result<()> {
    info!("Showing hadith {book} {number}");
    match fetch("Fetching hadith...", || api.hadith(book, number))?.into_data() {
        Ok(hadith) => emit(out, &ui::hadith(&hadith, width)),
        Err(failure) => report(out, &failure),
    }
}

fn hadith_range(
    api: &ApiClient,
    out: &mut dyn Write,
    width: usize,
    book: &str,
    raw: &str,
) -> Result<()> {
    let range: HadithRange = match raw.parse() {
        Ok(range) => range,
        Err(err) => {
            writeln!(out, "Invalid range pattern: {err}")?;
            return Ok(());
        }
    };
    info!("Showing hadiths {book} {range}");

    let envelope = fetch("Fetching hadiths...", || api.hadith_range(book, range))?;
    if envelope.code == 400 && envelope.is_failure() {
        writeln!(
            out,
            "Cannot fetch more than {HADITH_RANGE_LIMIT} hadiths at once (performance limit)"
        )?;
        return Ok(());
    }
    match envelope.into_data() {
        Ok(page) if page.hadiths.is_empty() => {
            writeln!(out, "No hadiths found in {} for range {range}", page.book_name)?;
            Ok(())
        }
        Ok(page) => emit(out, &ui::hadith_range(&page.hadiths, width)),
        Err(failure) => report(out, &failure),
    }
}

fn checked_surah(out: &mut dyn Write, number: u32) -> Result<Option<u32>> {
    match validate_surah_number(number) {
        Ok(number) => Ok(Some(number)),
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(None)
        }
    }
}

fn fetch<T>(
    message: &str,
    request: impl FnOnce() -> Result<T, TransportError>,
) -> Result<T, TransportError> {
    let spinner = ui::spinner(message);
    let result = request();
    spinner.finish_and_clear();
    result
}

fn report(out: &mut dyn Write, failure: &ApiFailure) -> Result<()> {
    warn!("API refused the request with code {}", failure.code);
    writeln!(out, "{}", failure.message)?;
    Ok(())
}

fn emit(out: &mut dyn Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_every_surah_number() {
        for n in 1..=SURAH_COUNT {
            assert_eq!(validate_surah_number(n), Ok(n));
        }
    }

    #[test]
    fn rejects_out_of_range_surahs() {
        assert_eq!(validate_surah_number(0), Err(SurahNumberError::Zero));
        assert_eq!(
            validate_surah_number(115),
            Err(SurahNumberError::TooLarge(115))
        );
        assert_eq!(
            SurahNumberError::TooLarge(200).to_string(),
            "The Quran only contains 114 surahs"
        );
    }

    #[test]
    fn parses_ayat_filter() {
        let cli = Cli::try_parse_from(["alquran", "surah", "ayat", "1", "--ayat", "2-4"]).unwrap();
        match cli.command {
            Commands::Surah {
                action: SurahCommands::Ayat { number, ayat },
            } => {
                assert_eq!(number, 1);
                assert_eq!(ayat.as_deref(), Some("2-4"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn hadith_lookup_number_is_optional() {
        let cli = Cli::try_parse_from(["alquran", "hadits", "lihat", "bukhari", "--range", "1-3"])
            .unwrap();
        match cli.command {
            Commands::Hadits {
                action: HaditsCommands::Lihat { book, number, range },
            } => {
                assert_eq!(book, "bukhari");
                assert_eq!(number, None);
                assert_eq!(range.as_deref(), Some("1-3"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn legacy_command_names_still_work() {
        assert!(Cli::try_parse_from(["alquran", "surah", "daftar-surah"]).is_ok());
        assert!(Cli::try_parse_from(["alquran", "surah", "isi-surah", "2"]).is_ok());
        assert!(Cli::try_parse_from(["alquran", "hadith", "show", "muslim", "3"]).is_ok());
        assert!(Cli::try_parse_from(["alquran", "hadits", "lihat-hadits", "muslim", "3"]).is_ok());
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        let cli = Cli::try_parse_from(["alquran", "-vv", "surah", "list"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        let quiet = Cli::try_parse_from(["alquran", "surah", "list"]).unwrap();
        assert_eq!(quiet.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn negative_surah_number_is_a_usage_error() {
        assert!(Cli::try_parse_from(["alquran", "surah", "detail", "-1"]).is_err());
    }
}
