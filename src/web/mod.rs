mod api_routes;
mod errors;
mod server;

pub use api_routes::{routes, AppState, FetchTweetsResponse};
pub use errors::ApiError;
pub use server::WebServer;
