//! Server configuration.
//!
//! Every option is a command-line flag with an environment fallback, so the
//! service runs unchanged from a shell or a container.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, warn};

/// Landing page compiled into the binary.
pub const DEFAULT_INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Clone, Parser)]
#[command(name = "ppv-serve")]
#[command(about = "Serve peak particle velocity predictions over HTTP")]
pub struct ServerConfig {
    /// XGBoost JSON model artifact.
    #[arg(long, env = "PPV_MODEL_PATH", default_value = "hybrid_model.json")]
    pub model_path: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "PPV_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// HTML file served at `/` instead of the built-in page.
    #[arg(long, env = "PPV_INDEX_HTML")]
    pub index_html: Option<PathBuf>,
}

impl ServerConfig {
    /// Landing page contents.
    ///
    /// An override that cannot be read falls back to the built-in page.
    pub fn load_index_html(&self) -> Arc<str> {
        let Some(path) = &self.index_html else {
            return Arc::from(DEFAULT_INDEX_HTML);
        };
        match std::fs::read_to_string(path) {
            Ok(html) => {
                debug!(path = %path.display(), "using landing page override");
                Arc::from(html)
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read landing page, using built-in page"
                );
                Arc::from(DEFAULT_INDEX_HTML)
            }
        }
    }
}
