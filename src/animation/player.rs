//! Timer-driven playback over a frame sequence.

use std::time::Duration;

use log::debug;

use crate::model::FrameStore;
use crate::schema::PlaybackSettings;

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

/// Identifies one chain of scheduled ticks. Goes stale on `stop()` or a
/// new `play()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn id(self) -> u64 {
        self.0
    }

    pub fn from_id(id: u64) -> Self {
        Self(id)
    }
}

/// First tick to schedule after `play()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTicket {
    pub handle: TickHandle,
    pub delay: Duration,
}

/// What the driver should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule the next tick with the same handle after this delay.
    Continue(Duration),
    /// Last frame shown without looping; playback is idle.
    Finished,
    /// The handle was stale; nothing was shown.
    Cancelled,
}

/// Idle/Playing state machine. The timer itself lives with the caller:
/// it waits out each returned delay and calls [`PlaybackScheduler::tick`].
///
/// Usage:
/// ```ignore
/// let ticket = scheduler.play(&mut store, &settings);
/// let mut delay = ticket.delay;
/// loop {
///     sleep(delay);
///     match scheduler.tick(ticket.handle, &mut store, &settings, |s| draw(s)) {
///         TickOutcome::Continue(next) => delay = next,
///         _ => break,
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct PlaybackScheduler {
    state: PlaybackState,
    generation: u64,
}

impl PlaybackScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Cancel any running chain, rewind to the first frame, and start a
    /// new chain.
    pub fn play<P: PlaybackSettings + ?Sized>(
        &mut self,
        store: &mut FrameStore,
        settings: &P,
    ) -> PlaybackTicket {
        self.stop();
        self.state = PlaybackState::Playing;
        store.first_frame();

        let handle = TickHandle(self.generation);
        debug!(
            "playback {} started over {} frames",
            handle.0,
            store.frame_count()
        );
        PlaybackTicket {
            handle,
            delay: settings.delay(),
        }
    }

    /// Invalidate every outstanding handle. Returns whether playback was running.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.state = PlaybackState::Idle;
        self.generation = self.generation.wrapping_add(1);
        if was_playing {
            debug!("playback stopped");
        }
        was_playing
    }

    /// Show the frame at the cursor through `show`, then advance.
    ///
    /// Delay and loop flag are read from `settings` on every call.
    pub fn tick<P, F>(
        &mut self,
        handle: TickHandle,
        store: &mut FrameStore,
        settings: &P,
        show: F,
    ) -> TickOutcome
    where
        P: PlaybackSettings + ?Sized,
        F: FnOnce(&FrameStore),
    {
        if !self.is_playing() || handle.0 != self.generation {
            return TickOutcome::Cancelled;
        }

        show(store);

        if !store.is_last() {
            store.next_frame();
            TickOutcome::Continue(settings.delay())
        } else if settings.looping() {
            store.first_frame();
            TickOutcome::Continue(settings.delay())
        } else {
            self.state = PlaybackState::Idle;
            debug!("playback {} finished", handle.0);
            TickOutcome::Finished
        }
    }
}
