use crate::error::CliResult;

use campus_client::{ApiClient, FailureHandler, RequestPipeline};
use campus_config::Config;
use campus_nav::{AuthGuard, Guard, NavigationGate, Router, TenantGuard, TenantResolver};
use campus_session::{AuthApi, FileCredentialStore, SessionStore};

use std::sync::Arc;

/// Composition root: one session, one router, one client, shared by
/// every command.
pub struct AppContext {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub router: Arc<Router>,
    pub client: ApiClient,
}

impl AppContext {
    /// Load and validate configuration, applying the CLI's overrides.
    pub fn load_config(server_override: Option<String>) -> CliResult<Config> {
        let mut config = Config::load()?;
        if let Some(url) = server_override {
            config.api.base_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Wire the whole pipeline from a validated config.
    pub fn new(config: Config) -> CliResult<Self> {
        let creds = FileCredentialStore::open(config.credentials_path()?)?;
        let session = Arc::new(SessionStore::new(
            Box::new(creds),
            AuthApi::new(&config.api.base_url),
        ));

        let router = Arc::new(Router::new());
        let pipeline = RequestPipeline::standard(
            &config.api.prefix,
            &config.api.base_url,
            &config.api.tenant_header,
            Arc::clone(&session),
            TenantResolver::new(Arc::clone(&router)),
        );
        let failures = FailureHandler::new(Arc::clone(&session), Arc::clone(&router));
        let client = ApiClient::new(pipeline, failures);

        Ok(Self {
            config,
            session,
            router,
            client,
        })
    }

    pub fn gate(&self) -> NavigationGate {
        NavigationGate::new(Arc::clone(&self.router))
    }

    /// The guard chain protected routes run through.
    pub fn guards(&self) -> Vec<Arc<dyn Guard>> {
        vec![
            Arc::new(AuthGuard::new(Arc::clone(&self.session))),
            Arc::new(TenantGuard::new(Arc::clone(&self.session))),
        ]
    }
}
