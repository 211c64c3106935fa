// Typed records for the Quran and hadith API payloads.
//
// Field names follow the Rust side; serde renames map them onto the
// Indonesian JSON keys used by equran.id and the hadith API. Optional
// payload parts (audio links, descriptions, the `ayat` array that only
// the detail endpoint returns) default when absent; everything else is
// required and a missing field fails decoding.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// The `{ code, message, error, data }` wrapper both APIs put around
/// every response.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    pub error: bool,
    pub data: Option<T>,
}

/// What an API said when it refused a request (unknown surah, hadith not
/// found, range too large).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub code: u16,
    pub message: String,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    error: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a response body. `status` is the HTTP status, used when the
    /// body carries no `code` of its own. `data` is only decoded into `T`
    /// when the envelope reports success; failed responses often carry
    /// `{}` or a partial object there.
    pub fn from_json(body: &str, status: u16) -> Result<Self, serde_json::Error> {
        let raw: RawEnvelope = serde_json::from_str(body)?;
        let code = raw.code.unwrap_or(status);
        let failed = raw.error || !(200..300).contains(&code);
        let data = match raw.data {
            Some(value) if !failed => Some(serde_json::from_value(value)?),
            _ => None,
        };
        Ok(Envelope {
            code,
            message: raw.message,
            error: raw.error,
            data,
        })
    }
}

impl<T> Envelope<T> {
    pub fn is_failure(&self) -> bool {
        self.error || !(200..300).contains(&self.code)
    }

    /// Split the envelope into its payload or the API's own failure report.
    pub fn into_data(self) -> Result<T, ApiFailure> {
        if self.is_failure() {
            return Err(ApiFailure {
                code: self.code,
                message: self.message,
            });
        }
        let code = self.code;
        self.data.ok_or_else(|| ApiFailure {
            code,
            message: "The API returned no data".to_string(),
        })
    }
}

/// A surah as returned by `/surat` (without `ayat`) and `/surat/{n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Surah {
    #[serde(rename = "nomor")]
    pub number: u32,
    #[serde(rename = "nama")]
    pub arabic_name: String,
    #[serde(rename = "namaLatin")]
    pub latin_name: String,
    #[serde(rename = "jumlahAyat")]
    pub verse_count: u32,
    #[serde(rename = "tempatTurun")]
    pub revelation_place: String,
    #[serde(rename = "arti")]
    pub meaning: String,
    #[serde(rename = "deskripsi", default)]
    pub description: String,
    /// Full-surah recitations keyed by reciter id ("01", "02", ...).
    #[serde(rename = "audioFull", default)]
    pub audio: BTreeMap<String, String>,
    #[serde(default)]
    pub ayat: Vec<Ayah>,
}

impl Surah {
    /// Ayat whose numbers are in `selection`, in ascending order.
    pub fn select_ayat(&self, selection: &BTreeSet<u32>) -> Vec<&Ayah> {
        let mut picked: Vec<&Ayah> = self
            .ayat
            .iter()
            .filter(|ayah| selection.contains(&ayah.number))
            .collect();
        picked.sort_by_key(|ayah| ayah.number);
        picked
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ayah {
    #[serde(rename = "nomorAyat")]
    pub number: u32,
    #[serde(rename = "teksArab")]
    pub arabic: String,
    #[serde(rename = "teksLatin")]
    pub latin: String,
    #[serde(rename = "teksIndonesia")]
    pub translation: String,
    #[serde(default)]
    pub audio: BTreeMap<String, String>,
}

/// Payload of `/tafsir/{n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Tafsir {
    #[serde(rename = "nomor")]
    pub number: u32,
    #[serde(rename = "nama")]
    pub arabic_name: String,
    #[serde(rename = "namaLatin")]
    pub latin_name: String,
    #[serde(rename = "jumlahAyat", default)]
    pub verse_count: u32,
    #[serde(rename = "tafsir")]
    pub entries: Vec<TafsirEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TafsirEntry {
    pub ayat: u32,
    #[serde(rename = "teks")]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HadithBook {
    pub id: String,
    pub name: String,
    pub available: u32,
}

/// One hadith together with the book it belongs to.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "SingleHadithPayload")]
pub struct Hadith {
    pub book_id: String,
    pub book_name: String,
    pub number: u32,
    pub arabic: String,
    pub translation: String,
}

/// A ranged hadith listing (`/books/{id}?range=a-b`).
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "HadithRangePayload")]
pub struct HadithPage {
    pub book_id: String,
    pub book_name: String,
    pub available: u32,
    pub requested: u32,
    pub hadiths: Vec<Hadith>,
}

#[derive(Deserialize)]
struct HadithContents {
    number: u32,
    arab: String,
    /// Indonesian translation; the API calls it `id`.
    id: String,
}

#[derive(Deserialize)]
struct SingleHadithPayload {
    id: String,
    name: String,
    contents: HadithContents,
}

#[derive(Deserialize)]
struct HadithRangePayload {
    id: String,
    name: String,
    #[serde(default)]
    available: u32,
    #[serde(default)]
    requested: u32,
    hadiths: Vec<HadithContents>,
}

impl Hadith {
    fn from_contents(book_id: &str, book_name: &str, contents: HadithContents) -> Self {
        Hadith {
            book_id: book_id.to_string(),
            book_name: book_name.to_string(),
            number: contents.number,
            arabic: contents.arab,
            translation: contents.id,
        }
    }
}

impl From<SingleHadithPayload> for Hadith {
    fn from(payload: SingleHadithPayload) -> Self {
        Hadith::from_contents(&payload.id, &payload.name, payload.contents)
    }
}

impl From<HadithRangePayload> for HadithPage {
    fn from(payload: HadithRangePayload) -> Self {
        let hadiths = payload
            .hadiths
            .into_iter()
            .map(|contents| Hadith::from_contents(&payload.id, &payload.name, contents))
            .collect();
        HadithPage {
            book_id: payload.id,
            book_name: payload.name,
            available: payload.available,
            requested: payload.requested,
            hadiths,
        }
    }
}
