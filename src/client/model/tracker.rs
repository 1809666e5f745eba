//! Live session tracker state machine.
//!
//! ```text
//!  idle ──submit──▶ searching ──guild lookup active──▶ tracking ◀─┐
//!   ▲                  │                                   │      │ poll active
//!   │                  └─guild lookup idle─▶ user lookup ──┤──────┘
//!   │                                            │         │
//!   └──── not found / network failure ◀──────────┘         │
//!   └──── session ended ◀──────────────────────────────────┘
//! ```
//!
//! The page drives the requests; this type only decides what each answer
//! means. Answers that no longer match the current state (a new search was
//! submitted, or the session already ended) are dropped.

use crate::{client::model::error::ApiError, model::player::PlayerSessionDto};

pub const NOT_FOUND_MESSAGE: &str = "No active music session found for this ID.";
pub const NETWORK_MESSAGE: &str = "Failed to connect to the backend server.";
pub const SESSION_ENDED_MESSAGE: &str = "Music session ended.";

/// Backend lookup the page should issue next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// `/api/player/{id}`
    Guild(String),
    /// `/api/user-player/{id}`
    User(String),
}

impl Lookup {
    pub fn id(&self) -> &str {
        match self {
            Lookup::Guild(id) | Lookup::User(id) => id,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrackerState {
    Idle { error: Option<String> },
    Searching { query: String },
    Tracking { query: String, session: PlayerSessionDto },
}

impl Default for TrackerState {
    fn default() -> Self {
        TrackerState::Idle { error: None }
    }
}

impl TrackerState {
    /// Starts a search. Blank queries are ignored.
    ///
    /// # Returns
    /// - `Some(Lookup::Guild)` - The first lookup to issue
    /// - `None` - Nothing to do
    pub fn submit(&mut self, query: &str) -> Option<Lookup> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        *self = TrackerState::Searching {
            query: query.to_string(),
        };
        Some(Lookup::Guild(query.to_string()))
    }

    /// Applies the answer to a search lookup.
    ///
    /// A guild answer that is neither connected nor playing (or an HTTP error
    /// status) falls through to the user lookup, which alone then decides.
    /// A transport failure ends the search.
    ///
    /// # Returns
    /// - `Some(Lookup::User)` - The follow-up lookup to issue
    /// - `None` - The search is settled, or the answer was stale
    pub fn on_lookup(
        &mut self,
        lookup: &Lookup,
        result: Result<PlayerSessionDto, ApiError>,
    ) -> Option<Lookup> {
        let query = match self {
            TrackerState::Searching { query } if query.as_str() == lookup.id() => query.clone(),
            _ => return None,
        };

        match (lookup, result) {
            (_, Err(err)) if err.is_network() => {
                *self = TrackerState::Idle {
                    error: Some(NETWORK_MESSAGE.to_string()),
                };
                None
            }
            // The guild answer counts only when the bot sits in voice there.
            (Lookup::Guild(_), Ok(session)) if session.is_connected || session.is_playing => {
                *self = TrackerState::Tracking { query, session };
                None
            }
            (Lookup::Guild(_), _) => Some(Lookup::User(query)),
            (Lookup::User(_), Ok(session)) if session.is_active() => {
                *self = TrackerState::Tracking { query, session };
                None
            }
            (Lookup::User(_), _) => {
                *self = TrackerState::Idle {
                    error: Some(NOT_FOUND_MESSAGE.to_string()),
                };
                None
            }
        }
    }

    /// Guild id to re-poll while tracking: the session's own guild, or the
    /// original query when the backend did not report one.
    pub fn poll_target(&self) -> Option<String> {
        match self {
            TrackerState::Tracking { query, session } => Some(
                session
                    .guild_id
                    .clone()
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| query.clone()),
            ),
            _ => None,
        }
    }

    /// Applies the answer to a re-poll of `target`.
    ///
    /// An active session replaces the tracked one wholesale; an inactive one
    /// (or an HTTP error status) ends tracking with a visible message. Transport
    /// failures are ignored until the next poll.
    pub fn on_poll(&mut self, target: &str, result: Result<PlayerSessionDto, ApiError>) {
        if self.poll_target().as_deref() != Some(target) {
            return;
        }

        match result {
            Ok(fresh) if fresh.is_active() => {
                if let TrackerState::Tracking { session, .. } = self {
                    *session = fresh;
                }
            }
            Err(err) if err.is_network() => (),
            _ => {
                *self = TrackerState::Idle {
                    error: Some(SESSION_ENDED_MESSAGE.to_string()),
                };
            }
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, TrackerState::Searching { .. })
    }

    pub fn session(&self) -> Option<&PlayerSessionDto> {
        match self {
            TrackerState::Tracking { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TrackerState::Idle { error } => error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::CurrentTrackDto;

    fn active(guild_id: Option<&str>, title: &str) -> PlayerSessionDto {
        PlayerSessionDto {
            is_connected: true,
            is_playing: true,
            current_track: Some(CurrentTrackDto {
                title: title.to_string(),
                author: "Artist".to_string(),
                thumbnail: None,
                duration: 180_000,
            }),
            guild_id: guild_id.map(str::to_string),
            ..Default::default()
        }
    }

    fn http_error(status: u64) -> ApiError {
        ApiError {
            status,
            message: "error".to_string(),
        }
    }

    #[test]
    fn blank_query_is_ignored() {
        let mut state = TrackerState::default();

        assert_eq!(state.submit("   "), None);
        assert_eq!(state, TrackerState::default());
    }

    #[test]
    fn guild_hit_starts_tracking() {
        let mut state = TrackerState::default();
        let lookup = state.submit(" 42 ").unwrap();
        assert_eq!(lookup, Lookup::Guild("42".to_string()));
        assert!(state.is_searching());

        let next = state.on_lookup(&lookup, Ok(active(Some("42"), "Song")));

        assert_eq!(next, None);
        assert_eq!(state.session().unwrap().guild_id.as_deref(), Some("42"));
    }

    /// Tests the guild-then-user lookup order.
    ///
    /// Expected: inactive guild answer asks for the user lookup, whose hit tracks
    #[test]
    fn falls_back_to_user_lookup() {
        let mut state = TrackerState::default();
        let guild = state.submit("7").unwrap();

        let user = state
            .on_lookup(&guild, Ok(PlayerSessionDto::default()))
            .unwrap();
        assert_eq!(user, Lookup::User("7".to_string()));
        assert!(state.is_searching());

        state.on_lookup(&user, Ok(active(Some("99"), "Song")));
        assert_eq!(state.poll_target().as_deref(), Some("99"));
    }

    /// Tests a guild answer that still reports a track while idle.
    ///
    /// Expected: the user lookup runs and its answer decides
    #[test]
    fn idle_guild_with_track_falls_back_to_user() {
        let mut state = TrackerState::default();
        let guild = state.submit("7").unwrap();
        let mut stale = active(Some("7"), "Leftover");
        stale.is_connected = false;
        stale.is_playing = false;

        let next = state.on_lookup(&guild, Ok(stale.clone()));
        assert_eq!(next, Some(Lookup::User("7".to_string())));
        assert!(state.is_searching());

        // A user answer carrying only a track is still an active session.
        let user = next.unwrap();
        state.on_lookup(&user, Ok(stale.clone()));
        assert_eq!(state.session(), Some(&stale));
    }

    #[test]
    fn guild_http_error_still_tries_user() {
        let mut state = TrackerState::default();
        let guild = state.submit("7").unwrap();

        let next = state.on_lookup(&guild, Err(http_error(404)));

        assert_eq!(next, Some(Lookup::User("7".to_string())));
    }

    /// Tests a query matching neither a guild nor a user.
    ///
    /// Expected: idle with the not-found message, never tracking
    #[test]
    fn unmatched_query_ends_idle_with_error() {
        let mut state = TrackerState::default();
        let guild = state.submit("unknown").unwrap();
        let user = state
            .on_lookup(&guild, Ok(PlayerSessionDto::default()))
            .unwrap();

        state.on_lookup(&user, Err(http_error(404)));

        assert_eq!(state.error(), Some(NOT_FOUND_MESSAGE));
        assert!(state.session().is_none());
    }

    #[test]
    fn network_failure_ends_search() {
        let mut state = TrackerState::default();
        let guild = state.submit("7").unwrap();

        let next = state.on_lookup(&guild, Err(ApiError::network("offline")));

        assert_eq!(next, None);
        assert_eq!(state.error(), Some(NETWORK_MESSAGE));
    }

    #[test]
    fn stale_lookup_answer_is_dropped() {
        let mut state = TrackerState::default();
        let old = state.submit("1").unwrap();
        state.submit("2");

        let next = state.on_lookup(&old, Ok(active(Some("1"), "Old")));

        assert_eq!(next, None);
        assert_eq!(
            state,
            TrackerState::Searching {
                query: "2".to_string()
            }
        );
    }

    #[test]
    fn poll_falls_back_to_query() {
        let mut state = TrackerState::default();
        let lookup = state.submit("55").unwrap();
        state.on_lookup(&lookup, Ok(active(None, "Song")));

        assert_eq!(state.poll_target().as_deref(), Some("55"));
    }

    #[test]
    fn poll_replaces_session_wholesale() {
        let mut state = TrackerState::default();
        let lookup = state.submit("42").unwrap();
        state.on_lookup(&lookup, Ok(active(Some("42"), "First")));

        let mut fresh = active(Some("42"), "Second");
        fresh.volume = 80;
        state.on_poll("42", Ok(fresh.clone()));

        assert_eq!(state.session(), Some(&fresh));
    }

    /// Tests a poll that finds the session gone.
    ///
    /// Expected: idle with the session-ended message, not a zeroed session
    #[test]
    fn ended_session_is_reported() {
        let mut state = TrackerState::default();
        let lookup = state.submit("42").unwrap();
        state.on_lookup(&lookup, Ok(active(Some("42"), "Song")));

        state.on_poll("42", Ok(PlayerSessionDto::default()));

        assert_eq!(state.error(), Some(SESSION_ENDED_MESSAGE));
        assert!(state.session().is_none());
    }

    #[test]
    fn poll_network_failure_keeps_tracking() {
        let mut state = TrackerState::default();
        let lookup = state.submit("42").unwrap();
        let session = active(Some("42"), "Song");
        state.on_lookup(&lookup, Ok(session.clone()));

        state.on_poll("42", Err(ApiError::network("offline")));

        assert_eq!(state.session(), Some(&session));
    }

    #[test]
    fn poll_for_other_target_is_dropped() {
        let mut state = TrackerState::default();
        state.on_poll("42", Ok(PlayerSessionDto::default()));
        assert_eq!(state, TrackerState::default());

        let lookup = state.submit("42").unwrap();
        state.on_lookup(&lookup, Ok(active(Some("42"), "Song")));
        state.on_poll("43", Ok(PlayerSessionDto::default()));
        assert!(state.session().is_some());
    }
}
