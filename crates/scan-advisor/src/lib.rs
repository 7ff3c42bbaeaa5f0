//! # scan-advisor
//!
//! Optional language-model collaborator for SymptoScan.
//!
//! Three capabilities sit behind the [`Advisor`] trait: ranking a free-text
//! description against the disease table, expanding a recommendation for a
//! confirmed disease, and summarizing the conversation. [`OpenAiAdvisor`]
//! talks to an OpenAI-compatible chat completions endpoint;
//! [`ConfiguredAdvisor`] picks it or the offline variant from config.
//!
//! Callers treat [`AdvisorError::is_unavailable`] errors as "use the local
//! path instead".

mod error;
mod http;
mod openai;
mod prompt;
mod table;

pub use error::AdvisorError;
pub use openai::OpenAiAdvisor;
pub use table::parse_row_indices;

use std::future::Future;

use scan_config::AdvisorConfig;

pub trait Advisor: Send + Sync {
    /// Whether calls can succeed at all. Offline advisors return `false`.
    fn is_available(&self) -> bool;

    /// Rank `query` against the disease table rendered as CSV.
    ///
    /// Returns zero-based catalog row indices, best first.
    fn rank_diseases(
        &self,
        diseases_csv: &str,
        query: &str,
    ) -> impl Future<Output = Result<Vec<usize>, AdvisorError>> + Send;

    /// Expanded recommendation text for a confirmed disease.
    fn recommend(
        &self,
        disease_name: &str,
    ) -> impl Future<Output = Result<String, AdvisorError>> + Send;

    /// Summary of the recent user and assistant messages.
    fn summarize(
        &self,
        user_threads: &[String],
        bot_threads: &[String],
    ) -> impl Future<Output = Result<String, AdvisorError>> + Send;
}

/// The advisor selected by configuration.
#[derive(Debug, Clone, Default)]
pub enum ConfiguredAdvisor {
    Remote(OpenAiAdvisor),
    #[default]
    Offline,
}

impl ConfiguredAdvisor {
    /// Remote when an API key is set, offline otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Http`] if a configured client cannot be built.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        if !config.is_configured() {
            tracing::debug!("no advisor API key; running offline");
            return Ok(Self::Offline);
        }
        Ok(Self::Remote(OpenAiAdvisor::new(config.clone())?))
    }
}

impl Advisor for ConfiguredAdvisor {
    fn is_available(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    async fn rank_diseases(
        &self,
        diseases_csv: &str,
        query: &str,
    ) -> Result<Vec<usize>, AdvisorError> {
        match self {
            Self::Remote(advisor) => advisor.rank_diseases(diseases_csv, query).await,
            Self::Offline => Err(AdvisorError::NotConfigured),
        }
    }

    async fn recommend(&self, disease_name: &str) -> Result<String, AdvisorError> {
        match self {
            Self::Remote(advisor) => advisor.recommend(disease_name).await,
            Self::Offline => Err(AdvisorError::NotConfigured),
        }
    }

    async fn summarize(
        &self,
        user_threads: &[String],
        bot_threads: &[String],
    ) -> Result<String, AdvisorError> {
        match self {
            Self::Remote(advisor) => advisor.summarize(user_threads, bot_threads).await,
            Self::Offline => Err(AdvisorError::NotConfigured),
        }
    }
}
