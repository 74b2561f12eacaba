use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use log::info;
use super::api_routes::{routes, AppState};

pub struct WebServer {
    state: AppState,
    address: String,
    static_dir: PathBuf,
}

impl WebServer {
    pub fn new(state: AppState, address: impl Into<String>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            state,
            address: address.into(),
            static_dir: static_dir.into(),
        }
    }

    pub async fn run(
        &self,
        shutdown_signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.address.parse()?;
        let routes = routes(self.state.clone(), self.static_dir.clone());

        let (bound, server) = warp::serve(routes).try_bind_with_graceful_shutdown(addr, shutdown_signal)?;
        info!("Serving on http://{} (static files from {:?})", bound, self.static_dir);

        tokio::spawn(server).await?;

        info!("Web server has shut down.");
        Ok(())
    }
}
