//! The mock API facade
//!
//! [`MockApi`] is the sole interface boundary the rest of an application is
//! expected to call. Operations are grouped by capability: unauthenticated
//! login plus the student, faculty, and admin groups. Every operation takes
//! a plain parameter value and returns a simulator-wrapped result, and every
//! statistic in a payload has passed through the aggregation engine rather
//! than leaking raw store internals.
//!
//! The facade holds only read-only state, so any number of concurrent calls
//! may be in flight; each re-derives its data from the store with its own
//! random draws.

pub mod admin;
pub mod auth;
pub mod error;
pub mod faculty;
pub mod logging;
pub mod request;
pub mod session;
pub mod student;

pub use admin::AdminApi;
pub use auth::{Credentials, LoginResponse, DEMO_PASSWORD};
pub use error::{ApiError, ApiResult, FailurePayload};
pub use faculty::FacultyApi;
pub use logging::LoggingConfig;
pub use request::{RequestSimulator, RequestWeight};
pub use session::{ActiveSession, SessionError, SessionStore};
pub use student::StudentApi;

use tracing::info;

use crate::store::EntityStore;
use crate::types::{ConfigValidationError, ServiceConfig};

/// Facade over the mock attendance service
#[derive(Debug)]
pub struct MockApi {
    store: EntityStore,
    config: ServiceConfig,
    simulator: RequestSimulator,
}

impl MockApi {
    /// Create a facade over the given store, validating the configuration
    pub fn new(store: EntityStore, config: ServiceConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        let simulator = RequestSimulator::from_config(&config);
        info!(
            students = store.students().len(),
            courses = store.courses().len(),
            latency = simulator.is_enabled(),
            "mock api initialized"
        );
        Ok(Self { store, config, simulator })
    }

    /// Create a facade over the demo fixture with default configuration
    pub fn demo() -> Self {
        Self {
            store: EntityStore::demo(),
            config: ServiceConfig::default(),
            simulator: RequestSimulator::new(),
        }
    }

    /// The underlying entity store
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// The active configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Authenticate a credential triple
    ///
    /// Succeeds only when a seeded user matches the (email, role) pair and
    /// the password equals the fixed demo literal.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let outcome = auth::verify_credentials(&self.store, credentials).map(|user| {
            LoginResponse {
                success: true,
                user: user.clone(),
                token: auth::mint_token(&user.id),
                message: "Login successful".to_string(),
            }
        });
        self.simulator.run(RequestWeight::Auth, outcome).await
    }

    /// Student capability group
    pub fn student(&self) -> StudentApi<'_> {
        StudentApi { store: &self.store, config: &self.config, simulator: &self.simulator }
    }

    /// Faculty capability group
    pub fn faculty(&self) -> FacultyApi<'_> {
        FacultyApi { store: &self.store, config: &self.config, simulator: &self.simulator }
    }

    /// Admin capability group
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { store: &self.store, config: &self.config, simulator: &self.simulator }
    }
}
