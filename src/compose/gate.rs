use std::borrow::Cow;

/// Input events forwarded from the external windowing layer.
///
/// Only the gesture kinds the audio gate cares about are distinguished;
/// everything else maps to [`GestureEvent::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    PointerClick,
    TouchStart,
    PointerMove,
    Other,
}

impl GestureEvent {
    /// Whether this gesture counts as a deliberate user interaction for
    /// audio-unlock purposes.
    #[inline]
    #[must_use]
    pub fn qualifies(self) -> bool {
        matches!(self, Self::PointerClick | Self::TouchStart)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// One-shot audio unlock gate.
///
/// Playback platforms refuse to start audio before a user gesture, so the
/// gate stays [`GateState::Locked`] until the first qualifying gesture and
/// never re-locks. [`AudioGate::notify`] returns `true` exactly once, on the
/// transition; callers start playback on that edge and ignore every later
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioGate {
    state: GateState,
}

impl Default for AudioGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioGate {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GateState::Locked,
        }
    }

    /// Feeds a gesture into the gate. Returns `true` only on the
    /// locked-to-unlocked transition.
    pub fn notify(&mut self, event: GestureEvent) -> bool {
        if self.state == GateState::Locked && event.qualifies() {
            self.state = GateState::Unlocked;
            log::debug!("audio gate unlocked by {event:?}");
            return true;
        }
        false
    }

    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == GateState::Unlocked
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }
}

/// Description of a positional audio track attached to the scene.
///
/// Decoding and playback happen in the external audio layer; this is the
/// typed configuration it receives once the gate opens.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    /// Source location, resolved by the audio backend.
    pub url: Cow<'static, str>,
    pub looped: bool,
    /// Start playing as soon as the gate opens.
    pub autoplay: bool,
    /// Reference distance for positional volume falloff, in world units.
    pub falloff_distance: f32,
}

impl AudioTrack {
    #[must_use]
    pub fn new(url: impl Into<Cow<'static, str>>) -> Self {
        Self {
            url: url.into(),
            looped: true,
            autoplay: true,
            falloff_distance: 10.0,
        }
    }

    #[must_use]
    pub fn once(mut self) -> Self {
        self.looped = false;
        self
    }

    #[must_use]
    pub fn with_falloff_distance(mut self, distance: f32) -> Self {
        self.falloff_distance = distance;
        self
    }
}
