// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod exporter;
pub mod gateway;
pub mod models;
pub mod utils;

pub use config::{Config, DisplayConfig, FetchConfig, FetchOrder, GatewayConfig};
pub use controller::{
    DocumentFetcher, FetchOutcome, FetchStats, QueryController, QueryOutcome, UploadController,
    UploadOutcome,
};
pub use display::{
    CollectingResultList, ConsoleNotifier, ConsoleResultList, Notifier, RecordingNotifier,
    ResultList,
};
pub use error::{Result, SearchError};
pub use exporter::{JsonExporter, QueryExport};
pub use gateway::{HttpGateway, RequestOptions, SearchGateway};
pub use models::{DocumentText, SearchHit, SearchQuery, UploadPayload, UploadReceipt};
pub use utils::{OperationTimer, PerformanceMetrics, Validator};
