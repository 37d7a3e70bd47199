use crate::models::{GitHubStats, HackathonStats, UserProfile};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Appwrite API client
///
/// Handles all communication with the Appwrite backend:
/// - Fetching user profiles
/// - Fetching per-user hackathon and GitHub statistics
/// - Querying the candidate pool (profiles looking for a team)
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: AppwriteCollections,
}

/// Collection IDs in Appwrite
#[derive(Debug, Clone)]
pub struct AppwriteCollections {
    pub user_profiles: String,
    pub hackathon_stats: String,
    pub github_stats: String,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: AppwriteCollections,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            collection
        )
    }

    async fn list_documents(&self, collection: &str, queries: &[String]) -> Result<Vec<Value>, AppwriteError> {
        let queries_json = serde_json::to_string(queries)
            .map_err(|e| AppwriteError::InvalidResponse(e.to_string()))?;
        let encoded_queries = urlencoding::encode(&queries_json).into_owned();

        let url = format!("{}?query={}", self.collection_url(collection), encoded_queries);

        tracing::debug!("Listing documents from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppwriteError::ApiError(format!(
                "Failed to list documents in {}: {}",
                collection,
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| AppwriteError::InvalidResponse("Missing documents array".into()))?;

        Ok(documents.clone())
    }

    /// Get a single profile by user ID
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, AppwriteError> {
        let queries = vec![format!("equal(\"userId\", \"{}\")", user_id)];
        let documents = self.list_documents(&self.collections.user_profiles, &queries).await?;

        let doc = documents
            .first()
            .ok_or_else(|| AppwriteError::NotFound(format!("Profile not found for user {}", user_id)))?;

        let data = doc.get("data").unwrap_or(doc);

        serde_json::from_value(data.clone())
            .map_err(|e| AppwriteError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Get hackathon statistics for a user, None if no record exists
    pub async fn get_hackathon_stats(
        &self,
        user_id: &str,
    ) -> Result<Option<HackathonStats>, AppwriteError> {
        let queries = vec![format!("equal(\"userId\", \"{}\")", user_id)];
        let documents = self.list_documents(&self.collections.hackathon_stats, &queries).await?;

        match documents.first() {
            Some(doc) => {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).map(Some).map_err(|e| {
                    AppwriteError::InvalidResponse(format!("Failed to parse hackathon stats: {}", e))
                })
            }
            None => Ok(None),
        }
    }

    /// Get GitHub statistics for a user, None if no record exists
    pub async fn get_github_stats(
        &self,
        user_id: &str,
    ) -> Result<Option<GitHubStats>, AppwriteError> {
        let queries = vec![format!("equal(\"userId\", \"{}\")", user_id)];
        let documents = self.list_documents(&self.collections.github_stats, &queries).await?;

        match documents.first() {
            Some(doc) => {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).map(Some).map_err(|e| {
                    AppwriteError::InvalidResponse(format!("Failed to parse GitHub stats: {}", e))
                })
            }
            None => Ok(None),
        }
    }

    /// Query candidate profiles looking for a team
    pub async fn query_candidates(
        &self,
        user_id: &str,
        exclude_ids: &[String],
        limit: usize,
    ) -> Result<Vec<UserProfile>, AppwriteError> {
        let mut queries = vec![
            "equal(\"lookingForTeam\", true)".to_string(),
            format!("notEqual(\"userId\", \"{}\")", user_id),
            format!("limit({})", limit),
        ];

        for id in exclude_ids {
            queries.push(format!("notEqual(\"userId\", \"{}\")", id));
        }

        let documents = self.list_documents(&self.collections.user_profiles, &queries).await?;

        let profiles: Vec<UserProfile> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).ok()
            })
            .filter(|p: &UserProfile| p.user_id != user_id && !exclude_ids.contains(&p.user_id))
            .collect();

        tracing::debug!("Queried {} candidate profiles", profiles.len());

        Ok(profiles)
    }

    /// Batch-fetch hackathon statistics keyed by user ID
    pub async fn list_hackathon_stats(
        &self,
        user_ids: &[String],
    ) -> Result<HashMap<String, HackathonStats>, AppwriteError> {
        self.list_stats_by_user(&self.collections.hackathon_stats, user_ids, |stats: &HackathonStats| {
            stats.user_id.clone()
        })
        .await
    }

    /// Batch-fetch GitHub statistics keyed by user ID
    pub async fn list_github_stats(
        &self,
        user_ids: &[String],
    ) -> Result<HashMap<String, GitHubStats>, AppwriteError> {
        self.list_stats_by_user(&self.collections.github_stats, user_ids, |stats: &GitHubStats| {
            stats.user_id.clone()
        })
        .await
    }

    async fn list_stats_by_user<T, F>(
        &self,
        collection: &str,
        user_ids: &[String],
        key_of: F,
    ) -> Result<HashMap<String, T>, AppwriteError>
    where
        T: serde::de::DeserializeOwned,
        F: Fn(&T) -> String,
    {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let id_filter = user_ids
            .iter()
            .map(|id| format!("\"{}\"", id))
            .collect::<Vec<_>>()
            .join(",");
        let queries = vec![
            format!("in(\"userId\", [{}])", id_filter),
            format!("limit({})", user_ids.len()),
        ];

        let documents = self.list_documents(collection, &queries).await?;

        let stats = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value::<T>(data.clone()).ok()
            })
            .map(|record| (key_of(&record), record))
            .collect();

        Ok(stats)
    }
}
