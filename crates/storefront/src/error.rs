//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for event handlers. Each variant maps
//! to the message shown to the shopper through [`AppError::user_message`];
//! storage-class failures are captured to Sentry before being reported.

use jacare_core::PriceError;
use thiserror::Error;

use crate::cart::PersistError;
use crate::config::ConfigError;
use crate::page::ContactError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A product card carried an unparseable price.
    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    /// The contact form failed validation.
    #[error("Contact form error: {0}")]
    Contact(#[from] ContactError),

    /// Local storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be persisted or restored.
    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this failure is ours rather than the shopper's input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Persist(_) | Self::Config(_) | Self::Internal(_)
        )
    }

    /// Message shown to the shopper. Internal details are never exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Price(_) => "Não foi possível ler o preço deste produto.".to_string(),
            Self::Contact(ContactError::MissingFields(_)) => {
                "Por favor, preencha todos os campos!".to_string()
            }
            Self::Contact(ContactError::InvalidEmail(_)) => {
                "Por favor, informe um e-mail válido!".to_string()
            }
            Self::Storage(_) | Self::Persist(_) | Self::Config(_) | Self::Internal(_) => {
                "Algo deu errado. Tente novamente.".to_string()
            }
        }
    }

    /// Log the error, capturing internal failures to Sentry.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Event error"
            );
        } else {
            tracing::warn!(error = %self, "Rejected input");
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for shopper actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
