pub mod client;
pub mod fetch_utils;
pub mod http_client;
pub mod status;
pub mod urls;

// Re-export client types
pub use client::{AuthCredential, ClientConfig, EspnClient, player_card_filter};
// Re-export request building utilities
pub use fetch_utils::{ParamValue, QueryParams, ResponseShape, header_map, unwrap_single};
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export status interpretation
pub use status::{ActiveEndpoint, ResponseStatus, classify_status};
// Re-export URL utilities
pub use urls::{EndpointSet, LeagueUrlForm, Sport};
