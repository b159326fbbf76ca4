//! Dataset loading
//!
//! Fetches the CSV from a URL (or reads it from disk) and types every field.

use reqwest::Client;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{DataError, DataResult};
use super::frame::{Cell, Dataset};

/// Default dataset: Gapminder 2007
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/gapminder2007.csv";

/// Where the dataset comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// Anything starting with http:// or https:// is a URL, the rest is a path
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the dataset from its source
pub async fn load(source: &DataSource, timeout: Duration) -> DataResult<Dataset> {
    let dataset = match source {
        DataSource::Url(url) => fetch(url, timeout).await?,
        DataSource::File(path) => {
            let content = tokio::fs::read(path).await?;
            parse_csv(content.as_slice())?
        }
    };

    tracing::info!(
        source = %source,
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "Dataset loaded"
    );

    Ok(dataset)
}

async fn fetch(url: &str, timeout: Duration) -> DataResult<Dataset> {
    let client = Client::builder().timeout(timeout).build()?;

    tracing::debug!(url = %url, "Fetching dataset");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await?;
    parse_csv(body.as_ref())
}

/// Parse CSV text with a header row into a `Dataset`
pub fn parse_csv<R: Read>(reader: R) -> DataResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(DataError::Empty);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::parse).collect());
    }

    Dataset::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "country,continent,year,lifeExp,pop,gdpPercap
Afghanistan,Asia,2007,43.828,31889923,974.5803384
Albania,Europe,2007,76.423,3600523,5937.029526
Algeria,Africa,2007,72.301,33333216,6223.367465";

    #[test]
    fn test_parse_csv() {
        let ds = parse_csv(CSV.as_bytes()).unwrap();

        assert_eq!(
            ds.columns(),
            &["country", "continent", "year", "lifeExp", "pop", "gdpPercap"]
        );
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.rows()[0][0], Cell::Text("Afghanistan".to_string()));
        assert_eq!(ds.rows()[2][3], Cell::Number(72.301));
    }

    #[test]
    fn test_parse_ragged_csv() {
        let csv = "a,b,c\n1,2,3\n4,5";
        let result = parse_csv(csv.as_bytes());
        assert!(matches!(result, Err(DataError::RaggedRow { row: 2, .. })));
    }

    #[test]
    fn test_parse_empty_csv() {
        assert!(matches!(parse_csv("".as_bytes()), Err(DataError::Empty)));
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(
            DataSource::parse(DEFAULT_DATA_URL),
            DataSource::Url(DEFAULT_DATA_URL.to_string())
        );
        assert_eq!(
            DataSource::parse("data/gapminder.csv"),
            DataSource::File(PathBuf::from("data/gapminder.csv"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let source = DataSource::File(file.path().to_path_buf());
        let ds = load(&source, Duration::from_secs(5)).await.unwrap();
        assert_eq!(ds.len(), 3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let source = DataSource::File(PathBuf::from("/nonexistent/gapminder.csv"));
        let result = load(&source, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
