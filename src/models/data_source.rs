use crate::constants::{COUNTY_CO2_URL, GEO_URL};
use crate::Error;
use flate2::read::GzDecoder;
use log::{debug, info};
use std::io::Read;
use std::path::PathBuf;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Where an input document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// The us-atlas county topology.
    pub fn default_geometry() -> Self {
        DataSource::Url(GEO_URL.to_string())
    }

    /// The county CO2 dataset.
    pub fn default_emissions() -> Self {
        DataSource::Url(COUNTY_CO2_URL.to_string())
    }

    /// Loads the raw payload, decompressing it if it is gzipped.
    pub fn load_bytes(&self) -> Result<Vec<u8>, Error> {
        let bytes = match self {
            DataSource::Url(url) => {
                info!("Fetching {}", url);
                let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
                response.bytes()?.to_vec()
            }
            DataSource::Path(path) => {
                info!("Reading {}", path.display());
                std::fs::read(path)?
            }
        };

        if bytes.starts_with(&GZIP_MAGIC) {
            debug!("Decompressing gzipped payload ({} bytes)", bytes.len());
            let mut decoder = GzDecoder::new(bytes.as_slice());
            let mut decompressed = Vec::new();
            decoder.read_to_end(&mut decompressed)?;
            return Ok(decompressed);
        }

        Ok(bytes)
    }

    pub fn load_string(&self) -> Result<String, Error> {
        let bytes = self.load_bytes()?;

        String::from_utf8(bytes)
            .map_err(|e| Error::ParserError(format!("Source is not valid UTF-8: {}", e)))
    }

    /// Loads both sources concurrently and returns once both have finished.
    ///
    /// Either failure is fatal; the first source's error is reported when both fail.
    pub fn fetch_both(first: &DataSource, second: &DataSource) -> Result<(String, String), Error> {
        std::thread::scope(|scope| {
            let first_handle = scope.spawn(|| first.load_string());
            let second_handle = scope.spawn(|| second.load_string());

            let first_result = first_handle
                .join()
                .map_err(|_| Error::Other("Loader thread panicked".to_string()))?;
            let second_result = second_handle
                .join()
                .map_err(|_| Error::Other("Loader thread panicked".to_string()))?;

            Ok((first_result?, second_result?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "carbon-choropleth-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_plain_file() {
        let path = temp_file("plain.json", b"[]");

        assert_eq!(DataSource::Path(path).load_string().unwrap(), "[]");
    }

    #[test]
    fn test_reads_gzipped_file() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"{\"ok\": true}").unwrap();
        let path = temp_file("gzipped.json.gz", &encoder.finish().unwrap());

        assert_eq!(
            DataSource::Path(path).load_string().unwrap(),
            "{\"ok\": true}"
        );
    }

    #[test]
    fn test_fetch_both_waits_for_both() {
        let first = DataSource::Path(temp_file("first.json", b"1"));
        let second = DataSource::Path(temp_file("second.json", b"2"));

        let (a, b) = DataSource::fetch_both(&first, &second).unwrap();

        assert_eq!((a.as_str(), b.as_str()), ("1", "2"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let missing = DataSource::Path(PathBuf::from("/nonexistent/carbon-choropleth.json"));
        let present = DataSource::Path(temp_file("present.json", b"[]"));

        assert!(matches!(
            DataSource::fetch_both(&present, &missing),
            Err(Error::IoError(_))
        ));
    }
}
