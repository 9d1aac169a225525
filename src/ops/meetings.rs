//! Meeting Scheduler
//!
//! Holds at most one upcoming meeting and the set of members who confirmed
//! attendance. Scheduling a new meeting discards the previous one together
//! with its confirmations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ClubError, Result};
use crate::state::{ClubState, Meeting};

/// Outcome of an attendance confirmation
///
/// Re-confirming is a no-op on the set, but callers must be able to tell
/// the two cases apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Confirmation {
    /// First confirmation by this name
    New { total: usize },

    /// The name was already in the confirmation set
    AlreadyConfirmed { total: usize },
}

/// Meeting together with derived time-to-meeting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingView {
    pub meeting: Meeting,

    /// Whole days until the meeting, floored; negative once it has passed
    pub days_until: i64,
}

impl ClubState {
    /// Schedule the club meeting
    ///
    /// Replaces any existing meeting and clears its confirmations. Past
    /// dates are accepted; the core does not judge the calendar.
    pub fn schedule_meeting(&mut self, when: DateTime<Utc>) -> Meeting {
        let meeting = Meeting::new(when);
        self.meeting = Some(meeting.clone());

        tracing::info!(scheduled_for = %when, "meeting scheduled");
        meeting
    }

    /// Confirm attendance for the scheduled meeting
    ///
    /// Idempotent on the confirmation set; the second confirmation by the
    /// same name reports [`Confirmation::AlreadyConfirmed`].
    pub fn confirm_attendance(&mut self, member_name: &str) -> Result<Confirmation> {
        let meeting = self.meeting.as_mut().ok_or(ClubError::NoMeeting)?;

        if meeting.confirmations.iter().any(|name| name == member_name) {
            return Ok(Confirmation::AlreadyConfirmed {
                total: meeting.confirmations.len(),
            });
        }

        meeting.confirmations.push(member_name.to_string());
        tracing::debug!(name = member_name, total = meeting.confirmations.len(), "attendance confirmed");
        Ok(Confirmation::New {
            total: meeting.confirmations.len(),
        })
    }

    /// Describe the scheduled meeting with its derived countdown
    ///
    /// Floors rather than truncates, so a meeting a few hours past already
    /// reads as a day behind.
    pub fn meeting_view(&self, now: DateTime<Utc>) -> Result<MeetingView> {
        let meeting = self.meeting.clone().ok_or(ClubError::NoMeeting)?;
        let seconds = meeting.scheduled_for.signed_duration_since(now).num_seconds();
        let days_until = seconds.div_euclid(86_400);

        Ok(MeetingView {
            meeting,
            days_until,
        })
    }
}
