//! Embedded video player seam.
//!
//! ARCHITECTURE
//! ============
//! The controller talks to the player only through `PlayerFactory` and
//! `VideoSession`. The browser build plugs in the YouTube iframe API adapter;
//! every other build uses `DetachedPlayerFactory`, and tests use recording
//! fakes.


#[cfg(feature = "csr")]
pub mod youtube;

use std::cell::RefCell;
use std::collections::VecDeque;

use serde::Serialize;

use crate::config::PageConfig;
use crate::error::PageError;

/// Player construction options, serialised in the shape the iframe API takes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub height: String,
    pub width: String,
    pub video_id: String,
}

impl PlayerRequest {
    /// Build a request for `video_id`, rejecting empty identifiers.
    pub fn new(video_id: &str, config: &PageConfig) -> Result<Self, PageError> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(PageError::InvalidVideoId(video_id.to_owned()));
        }
        Ok(Self {
            height: config.player_height.to_string(),
            width: config.player_width.to_string(),
            video_id: video_id.to_owned(),
        })
    }
}

/// Player state codes reported by `onStateChange`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
    Unknown(i32),
}

impl PlayerState {
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Unstarted,
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::Cued,
            other => Self::Unknown(other),
        }
    }
}

/// Callbacks raised by the player after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    Ready,
    StateChange(PlayerState),
}

/// Ordered delivery of player callbacks to a consumer bound after the fact.
///
/// The factory is built before the page handle that consumes its events, so
/// events raised before `bind` are queued and replayed in order. After `bind`
/// every event is delivered immediately; none are coalesced.
#[derive(Default)]
pub struct EventRelay {
    target: RefCell<Option<Box<dyn Fn(PlayerEvent)>>>,
    pending: RefCell<VecDeque<PlayerEvent>>,
}

impl EventRelay {
    pub fn dispatch(&self, event: PlayerEvent) {
        match self.target.borrow().as_ref() {
            Some(target) => target(event),
            None => self.pending.borrow_mut().push_back(event),
        }
    }

    /// Route events to `target`, first replaying anything queued.
    pub fn bind(&self, target: impl Fn(PlayerEvent) + 'static) {
        let queued: Vec<PlayerEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in queued {
            target(event);
        }
        *self.target.borrow_mut() = Some(Box::new(target));
    }
}

/// A live embedded player bound to one video.
pub trait VideoSession {
    fn video_id(&self) -> &str;
    fn set_volume(&mut self, volume: u8);
    fn set_playback_quality(&mut self, quality: &str);
    fn play(&mut self);
    /// Tear down the player and release its resources.
    fn destroy(self);
}

/// Creates player sessions.
pub trait PlayerFactory {
    type Session: VideoSession;

    fn create(&mut self, request: &PlayerRequest) -> Result<Self::Session, PageError>;
}

/// Factory for builds without a browser (native tests and tooling).
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedPlayerFactory;

/// Never constructed; exists so `DetachedPlayerFactory` has a session type.
#[derive(Debug)]
pub enum DetachedSession {}

impl VideoSession for DetachedSession {
    fn video_id(&self) -> &str {
        match *self {}
    }

    fn set_volume(&mut self, _volume: u8) {
        match *self {}
    }

    fn set_playback_quality(&mut self, _quality: &str) {
        match *self {}
    }

    fn play(&mut self) {
        match *self {}
    }

    fn destroy(self) {
        match self {}
    }
}

impl PlayerFactory for DetachedPlayerFactory {
    type Session = DetachedSession;

    fn create(&mut self, request: &PlayerRequest) -> Result<Self::Session, PageError> {
        Err(PageError::PlayerUnavailable(format!(
            "no browser to embed video {}",
            request.video_id
        )))
    }
}
