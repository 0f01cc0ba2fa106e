//! RSVP Repository

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::RsvpRecord;
use shared::models::{Rsvp, RsvpCreate};

const TABLE: &str = "rsvp";

#[derive(Clone)]
pub struct RsvpRepository {
    base: BaseRepository,
}

impl RsvpRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert one submission and return the persisted row
    ///
    /// Single atomic single-row write: either the full record exists
    /// afterwards with a generated id and timestamp, or nothing does.
    pub async fn create(&self, data: RsvpCreate) -> RepoResult<Rsvp> {
        let record = RsvpRecord::from_submission(data);
        let created: Option<RsvpRecord> = self.base.db().create(TABLE).content(record).await?;
        created
            .map(Rsvp::from)
            .ok_or_else(|| RepoError::Database("Failed to create rsvp".to_string()))
    }

    /// Find one RSVP by id ("rsvp:<key>" or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Rsvp>> {
        let key = id.strip_prefix("rsvp:").unwrap_or(id);
        let record_id = RecordId::from_table_key(TABLE, key);
        let record: Option<RsvpRecord> = self.base.db().select(record_id).await?;
        Ok(record.map(Rsvp::from))
    }

    /// All RSVPs ordered by insertion time (used by tests)
    pub async fn find_all(&self) -> RepoResult<Vec<Rsvp>> {
        let records: Vec<RsvpRecord> = self
            .base
            .db()
            .query("SELECT * FROM rsvp ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Rsvp::from).collect())
    }
}
