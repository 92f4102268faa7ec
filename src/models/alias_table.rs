use crate::types::{CanonicalKey, CanonicalKeyRef, RawName, RawNameRef};
use crate::utils::normalize_county_name;
use crate::Error;
use csv::ReaderBuilder;
use log::debug;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

/// Immutable mapping from a known-mismatched county name to the name the geometry source
/// uses for it.
///
/// Entries are keyed by the canonical key of the alias, so lookups are insensitive to
/// case, punctuation and administrative suffixes (an alias for `"LASALLE"` also catches
/// `"LaSalle Parish"`). The replacement is kept raw and normalized on resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AliasTable {
    aliases: HashMap<CanonicalKey, RawName>,
}

impl AliasTable {
    /// Creates an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(alias, replacement)` pairs. If two aliases normalize to the
    /// same key, the first one is kept.
    pub fn from_pairs<I, A, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, R)>,
        A: AsRef<str>,
        R: Into<RawName>,
    {
        let mut aliases = HashMap::new();

        for (alias, replacement) in pairs {
            let key = normalize_county_name(alias.as_ref());

            if aliases.contains_key(&key) {
                debug!("Ignoring duplicate alias for key '{}'", key);
                continue;
            }

            aliases.insert(key, replacement.into());
        }

        AliasTable { aliases }
    }

    /// Parses a CSV document with `Alias` and `Canonical` header columns.
    pub fn from_csv_string(csv: &str) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let alias_position = headers
            .iter()
            .position(|h| h == "Alias")
            .ok_or_else(|| Error::ParserError("Missing 'Alias' column".to_string()))?;
        let canonical_position = headers
            .iter()
            .position(|h| h == "Canonical")
            .ok_or_else(|| Error::ParserError("Missing 'Canonical' column".to_string()))?;

        let mut pairs = Vec::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let alias = record
                .get(alias_position)
                .ok_or_else(|| Error::ParserError("Missing 'Alias' field".to_string()))?;
            let canonical = record
                .get(canonical_position)
                .ok_or_else(|| Error::ParserError("Missing 'Canonical' field".to_string()))?;

            pairs.push((alias.to_string(), canonical.to_string()));
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Reads and parses an alias CSV file from disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let csv = std::fs::read_to_string(path)?;
        Self::from_csv_string(&csv)
    }

    /// Returns the raw replacement name registered for an already-normalized key.
    pub fn get(&self, key: &CanonicalKeyRef) -> Option<&RawNameRef> {
        self.aliases.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
