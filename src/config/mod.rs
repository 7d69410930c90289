//! Configuration for population loading.

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Entity kind assigned when the population file has no kind column
pub const DEFAULT_KIND: &str = "person";

/// Configuration for reading a population register into a store
#[derive(Debug, Clone)]
pub struct PopulationConfig {
    /// Column holding the personal identification number
    pub pnr_column: String,
    /// Column holding the gender code (string or integer)
    pub gender_column: String,
    /// Column holding the birth date (Date32)
    pub birth_date_column: String,
    /// Column holding the father's PNR
    pub father_column: String,
    /// Column holding the mother's PNR
    pub mother_column: String,
    /// Column holding the entity kind
    pub kind_column: String,
    /// Kind used when the kind column is missing or null
    pub default_kind: String,
    /// Rows per record batch
    pub batch_size: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            pnr_column: "PNR".to_string(),
            gender_column: "KOEN".to_string(),
            birth_date_column: "FOED_DAG".to_string(),
            father_column: "FAR_ID".to_string(),
            mother_column: "MOR_ID".to_string(),
            kind_column: "KIND".to_string(),
            default_kind: DEFAULT_KIND.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl PopulationConfig {
    /// Default configuration with the batch size overridden by `KINSHIP_BATCH_SIZE`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            batch_size: get_batch_size().unwrap_or(DEFAULT_BATCH_SIZE),
            ..Self::default()
        }
    }
}

/// Helper function to get batch size from environment
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var("KINSHIP_BATCH_SIZE")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|size| *size > 0)
}
