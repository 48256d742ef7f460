//! Frame-state bookkeeping driven by session lifecycle events.
//!
//! Purely event-driven: nothing here talks to the transport. The host feeds
//! [`SessionEvent`]s in; resolution tasks read the current frame out exactly
//! once, at the start of an attempt, so a frame change mid-flight cannot
//! tear a resolution between two frames.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, trace};

use crate::session::SessionEvent;
use crate::types::{FrameId, SessionId};

/// Tracks which stack frame is current for one debug session.
///
/// One tracker exists per active session and is never shared across
/// sessions. The interior mutex is uncontended in a cooperative
/// single-threaded host and merely keeps the tracker `Send + Sync` for
/// multi-threaded ones.
#[derive(Debug, Default)]
pub struct FrameTracker
{
    current: Mutex<Option<FrameId>>,
}

impl FrameTracker
{
    /// Tracker with no current frame.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Frame selected by the user or the last stop, if any.
    #[must_use]
    pub fn current_frame(&self) -> Option<FrameId>
    {
        *self.lock()
    }

    /// The target stopped; the backend's topmost frame (if reported) becomes
    /// current.
    pub fn on_stopped(&self, top_frame: Option<FrameId>)
    {
        trace!(?top_frame, "target stopped");
        *self.lock() = top_frame;
    }

    /// The user selected a frame.
    pub fn on_frame_selected(&self, frame: FrameId)
    {
        trace!(%frame, "frame selected");
        *self.lock() = Some(frame);
    }

    /// The target resumed; a running target has no current frame.
    pub fn on_resumed(&self)
    {
        trace!("target resumed, clearing current frame");
        *self.lock() = None;
    }

    /// Apply one lifecycle event. `Started` and `Exited` concern the
    /// tracker's own lifetime and are handled by [`SessionTrackers`].
    pub fn handle_event(&self, event: &SessionEvent)
    {
        match event {
            SessionEvent::Stopped { top_frame } => self.on_stopped(*top_frame),
            SessionEvent::FrameSelected(frame) => self.on_frame_selected(*frame),
            SessionEvent::Resumed => self.on_resumed(),
            SessionEvent::Started | SessionEvent::Exited => {}
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<FrameId>>
    {
        self.current.lock().expect("frame state lock poisoned")
    }
}

/// Routes lifecycle events to per-session frame trackers.
///
/// Mirrors the session lifetime exactly: a tracker is created on `Started`,
/// updated while the session lives, and dropped on `Exited`. Events for
/// sessions this map has never seen are ignored.
#[derive(Debug, Default)]
pub struct SessionTrackers
{
    sessions: Mutex<HashMap<SessionId, Arc<FrameTracker>>>,
}

impl SessionTrackers
{
    /// Empty tracker map.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Apply one lifecycle event for `session`.
    pub fn handle_event(&self, session: &SessionId, event: &SessionEvent)
    {
        match event {
            SessionEvent::Started => {
                debug!(%session, "session started, tracking frame state");
                self.lock().insert(session.clone(), Arc::new(FrameTracker::new()));
            }
            SessionEvent::Exited => {
                debug!(%session, "session exited, dropping frame state");
                self.lock().remove(session);
            }
            other => match self.tracker(session) {
                Some(tracker) => tracker.handle_event(other),
                None => debug!(%session, ?other, "event for untracked session ignored"),
            },
        }
    }

    /// Frame tracker for `session`, if the session is live.
    #[must_use]
    pub fn tracker(&self, session: &SessionId) -> Option<Arc<FrameTracker>>
    {
        self.lock().get(session).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, Arc<FrameTracker>>>
    {
        self.sessions.lock().expect("session map lock poisoned")
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_tracker_starts_with_no_frame()
    {
        let tracker = FrameTracker::new();
        assert_eq!(tracker.current_frame(), None);
    }

    #[test]
    fn test_stop_with_top_frame_sets_current()
    {
        let tracker = FrameTracker::new();
        tracker.on_stopped(Some(FrameId(7)));
        assert_eq!(tracker.current_frame(), Some(FrameId(7)));
    }

    #[test]
    fn test_stop_without_top_frame_clears_current()
    {
        let tracker = FrameTracker::new();
        tracker.on_frame_selected(FrameId(2));
        tracker.on_stopped(None);
        assert_eq!(tracker.current_frame(), None);
    }

    #[test]
    fn test_frame_selection_overrides_stop_frame()
    {
        let tracker = FrameTracker::new();
        tracker.on_stopped(Some(FrameId(0)));
        tracker.on_frame_selected(FrameId(3));
        assert_eq!(tracker.current_frame(), Some(FrameId(3)));
    }

    #[test]
    fn test_resume_clears_current_frame()
    {
        let tracker = FrameTracker::new();
        tracker.on_frame_selected(FrameId(3));
        tracker.on_resumed();
        assert_eq!(tracker.current_frame(), None);
    }

    #[test]
    fn test_session_map_tracks_lifecycle()
    {
        let trackers = SessionTrackers::new();
        let session = SessionId::new("s1");

        assert!(trackers.tracker(&session).is_none());

        trackers.handle_event(&session, &SessionEvent::Started);
        trackers.handle_event(&session, &SessionEvent::Stopped { top_frame: Some(FrameId(1)) });
        let tracker = trackers.tracker(&session).expect("session is tracked");
        assert_eq!(tracker.current_frame(), Some(FrameId(1)));

        trackers.handle_event(&session, &SessionEvent::Exited);
        assert!(trackers.tracker(&session).is_none());
    }

    #[test]
    fn test_sessions_do_not_share_frame_state()
    {
        let trackers = SessionTrackers::new();
        let first = SessionId::new("s1");
        let second = SessionId::new("s2");

        trackers.handle_event(&first, &SessionEvent::Started);
        trackers.handle_event(&second, &SessionEvent::Started);
        trackers.handle_event(&first, &SessionEvent::FrameSelected(FrameId(1)));
        trackers.handle_event(&second, &SessionEvent::FrameSelected(FrameId(9)));

        assert_eq!(trackers.tracker(&first).expect("live").current_frame(), Some(FrameId(1)));
        assert_eq!(trackers.tracker(&second).expect("live").current_frame(), Some(FrameId(9)));
    }

    #[test]
    fn test_event_for_untracked_session_is_ignored()
    {
        let trackers = SessionTrackers::new();
        let session = SessionId::new("ghost");
        // Must not create a tracker as a side effect.
        trackers.handle_event(&session, &SessionEvent::FrameSelected(FrameId(1)));
        assert!(trackers.tracker(&session).is_none());
    }
}
