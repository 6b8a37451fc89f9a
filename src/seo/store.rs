//! SeoStore trait definition and the fixture-backed implementation
//!
//! Handlers only see the trait, so a database-backed store can replace the
//! fixtures without touching the API layer.

use super::fixtures;
use super::models::{Activity, Entity, Project};
use anyhow::Result;
use async_trait::async_trait;

/// Read access to analysis records
#[async_trait]
pub trait SeoStore: Send + Sync {
    /// List tracked projects, in display order
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// List recent analysis activities, newest first
    async fn list_activities(&self) -> Result<Vec<Activity>>;

    /// List content entities
    async fn list_entities(&self) -> Result<Vec<Entity>>;
}

/// Store that answers every read with the same canned records.
#[derive(Debug, Default, Clone)]
pub struct FixtureStore;

impl FixtureStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SeoStore for FixtureStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(fixtures::projects())
    }

    async fn list_activities(&self) -> Result<Vec<Activity>> {
        Ok(fixtures::activities())
    }

    async fn list_entities(&self) -> Result<Vec<Entity>> {
        Ok(fixtures::entities())
    }
}
