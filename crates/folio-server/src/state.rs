use std::sync::Arc;

use folio_store::{ContentStore, StaticContentStore};
use folio_types::Profile;
use folio_validate::ContactValidator;

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub profile: Arc<Profile>,
    pub validator: Arc<ContactValidator>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, profile: Profile, validator: ContactValidator) -> Self {
        Self {
            store,
            profile: Arc::new(profile),
            validator: Arc::new(validator),
        }
    }

    /// Build state from configuration, using the built-in content.
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        let store = StaticContentStore::embedded()?;
        let validator = ContactValidator::standard(config.validation.clone())?;
        Ok(Self::new(Arc::new(store), config.profile.clone(), validator))
    }
}
