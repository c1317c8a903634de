//! Frame scheduling capability injected into the playback engine.
//!
//! The engine never sleeps or spawns. After each tick that keeps playing it
//! asks the host for exactly one callback after the next display refresh.
//! Every request is tagged with the play session that made it, so a host
//! that delivers a frame late (or fails to honour a cancellation) cannot
//! drive a session that has since been paused or restarted.

/// Identifies one Play-to-stop run of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionId(u64);

impl SessionId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Host handle for a pending frame request, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// A pending frame as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pub handle: FrameHandle,
    pub session: SessionId,
}

/// "Call me back after the next refresh", abstracted over the host.
pub trait FrameScheduler {
    /// Requests one tick for `session` after the next frame.
    fn request_frame(&mut self, session: SessionId) -> FrameHandle;

    /// Best-effort cancellation of a previously requested frame.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler for hosts that run their own frame loop.
///
/// Requests accumulate until the host drains them with
/// [`FrameQueue::take_pending`] on its next frame and feeds each one back to
/// the session's `tick`.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_handle: u64,
    pending: Vec<FrameRequest>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every request made since the last drain.
    pub fn take_pending(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[FrameRequest] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, session: SessionId) -> FrameHandle {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending.push(FrameRequest { handle, session });
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|request| request.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_increases() {
        let first = SessionId::default();
        let second = first.next();
        assert!(second > first);
        assert_ne!(second, second.next());
    }

    #[test]
    fn test_frame_queue_hands_out_unique_handles() {
        let mut queue = FrameQueue::new();
        let session = SessionId::default();
        let a = queue.request_frame(session);
        let b = queue.request_frame(session);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_frame_queue_cancel_removes_request() {
        let mut queue = FrameQueue::new();
        let session = SessionId::default();
        let a = queue.request_frame(session);
        let b = queue.request_frame(session);
        queue.cancel_frame(a);
        assert_eq!(queue.pending(), &[FrameRequest { handle: b, session }]);
    }

    #[test]
    fn test_frame_queue_take_pending_drains() {
        let mut queue = FrameQueue::new();
        queue.request_frame(SessionId::default());
        assert_eq!(queue.take_pending().len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_unknown_handle_is_ignored() {
        let mut queue = FrameQueue::new();
        queue.request_frame(SessionId::default());
        queue.cancel_frame(FrameHandle(999));
        assert_eq!(queue.len(), 1);
    }
}
