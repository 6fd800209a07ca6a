pub mod api;
pub mod config;
pub mod metrics;
pub mod replay;
pub mod search;
pub mod testing;

pub use api::{
    AlgoId, AlgoRecord, AlgoRef, ApiClient, ApiError, HttpApiClient, MatchId, MatchRecord, Season,
    SeasonMetrics,
};
pub use config::{
    load_config, load_config_from_str, validate_config, ApiConfig, Config, ConfigError,
    SearchConfig,
};
pub use search::{IdResolver, SearchOutcome};
