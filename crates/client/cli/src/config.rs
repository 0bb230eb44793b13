use std::path::PathBuf;

/// Client configuration sourced from environment variables.
///
/// - `TILEVALE_SCALE`: tile size multiplier for the map view (1..=4)
/// - `TILEVALE_SCENARIO`: path to a scenario RON file replacing the built-in
///   courtyard
/// - `TILEVALE_LOG_DIR`: directory for the log file and state dumps
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub scale: u16,
    pub scenario: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl CliConfig {
    pub const DEFAULT_SCALE: u16 = 2;

    pub fn from_env() -> Self {
        let scale = std::env::var("TILEVALE_SCALE")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .map(|scale| scale.clamp(1, 4))
            .unwrap_or(Self::DEFAULT_SCALE);

        let scenario = std::env::var("TILEVALE_SCENARIO").ok().map(PathBuf::from);

        let log_dir = std::env::var("TILEVALE_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            scale,
            scenario,
            log_dir,
        }
    }
}
