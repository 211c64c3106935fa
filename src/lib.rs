// Library root
// -----------
// The binary (`main.rs`) only parses arguments and wires these modules
// together, which keeps every piece reachable from the integration tests.
//
// Module responsibilities:
// - `api`: blocking HTTP calls to the Quran and hadith APIs.
// - `models`: typed records and the API response envelope.
// - `range`: parsing of `--ayat` selections and hadith `--range` spans.
// - `ui`: formats records into terminal lines.
// - `cli`: clap command tree and the handler behind each command.
// - `config`, `error`: constants and error types shared by the above.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod range;
pub mod ui;
