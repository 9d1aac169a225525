//! Membership & Stats Registry
//!
//! Per-member profiles and derived rankings. Members register on first
//! interaction and are never deleted; the display name captured at
//! registration never changes afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ClubError, Result};
use crate::state::{ClubState, Member};

/// Member profile together with derived membership duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberStats {
    pub member: Member,

    /// Whole days since registration
    pub days_member: i64,
}

impl ClubState {
    /// Register a member on first sight, or return the existing record
    ///
    /// The display name is only captured on creation; later sightings with
    /// a different name leave the stored record unchanged.
    pub fn ensure_member(&mut self, id: &str, name: &str, now: DateTime<Utc>) -> Member {
        if let Some(existing) = self.member(id) {
            return existing.clone();
        }

        let member = Member {
            id: id.to_string(),
            name: name.to_string(),
            books_read: 0,
            participations: 0,
            joined_at: now,
        };

        self.members.push(member.clone());
        tracing::info!(id, name, total = self.members.len(), "member registered");
        member
    }

    /// Statistics for a registered member
    pub fn stats_for(&self, id: &str, now: DateTime<Utc>) -> Result<MemberStats> {
        let member = self
            .member(id)
            .cloned()
            .ok_or_else(|| ClubError::NotFound(format!("member {} is not registered", id)))?;

        let days_member = now.signed_duration_since(member.joined_at).num_days();
        Ok(MemberStats {
            member,
            days_member,
        })
    }

    /// Members ranked by books read, descending
    ///
    /// The sort is stable, so ties keep registration order. Truncated to
    /// `limit` entries.
    pub fn ranking(&self, limit: usize) -> Vec<Member> {
        let mut ranked = self.members.clone();
        ranked.sort_by(|a, b| b.books_read.cmp(&a.books_read));
        ranked.truncate(limit);
        ranked
    }
}
