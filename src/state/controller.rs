//! View-state controller: the single owner of page widget state.
//!
//! DESIGN
//! ======
//! Flags change only through the operations below, and the rendered styles are
//! derived from the resulting `PageView`, so state and page cannot drift. The
//! controller also owns the one embedded video session; opening the modal
//! again releases the previous session before creating the next.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::player::{PlayerEvent, PlayerFactory, PlayerRequest, PlayerState, VideoSession};
use crate::state::view::{PageView, SkillFocus, SkillTransition, toggle_skill_focus};

pub struct ViewStateController<F: PlayerFactory> {
    config: PageConfig,
    factory: F,
    view: PageView,
    skill_count: usize,
    session: Option<F::Session>,
}

impl<F: PlayerFactory> ViewStateController<F> {
    pub fn new(config: PageConfig, factory: F, skill_count: usize) -> Self {
        Self { config, factory, view: PageView::default(), skill_count, session: None }
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        self.view
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Show the modal and embed `video_id`.
    ///
    /// An already active session is destroyed first. If the player cannot be
    /// created the modal stays open without a session and the error is
    /// returned.
    pub fn open_video_modal(&mut self, video_id: &str) -> Result<(), PageError> {
        let request = PlayerRequest::new(video_id, &self.config)?;
        self.view.state.modal_open = true;
        if let Some(previous) = self.release_session() {
            log::debug!("view: replacing video {previous}");
        }

        let session = self.factory.create(&request)?;
        log::debug!("view: video modal open, video {}", request.video_id);
        self.session = Some(session);
        self.view.state.video_modal_open = true;
        Ok(())
    }

    /// Hide the modal and release the session. Safe to call with no session.
    pub fn close_video_modal(&mut self) {
        self.view.state = self.view.state.with_video_modal(false);
        match self.release_session() {
            Some(video_id) => log::debug!("view: video modal closed, video {video_id}"),
            None => log::debug!("view: close requested with no active video session"),
        }
    }

    pub fn toggle_readmore(&mut self) -> bool {
        self.view.state = self.view.state.with_readmore_toggled();
        self.view.state.readmore_expanded
    }

    /// Mobile-only: show panel `index` full width, or fold the row back.
    pub fn toggle_mobile_skill(&mut self, index: usize, viewport_width: f64) -> Result<SkillTransition, PageError> {
        if index >= self.skill_count {
            return Err(PageError::SkillIndexOutOfRange { index, len: self.skill_count });
        }
        let mobile = self.config.is_mobile_width(viewport_width);
        let (focus, transition) = toggle_skill_focus(self.view.skills, index, mobile);
        self.set_skill_focus(focus);
        if transition != SkillTransition::Ignored {
            log::debug!("view: mobile skill {transition:?}");
        }
        Ok(transition)
    }

    /// Route a callback from the embedded player.
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        let volume = self.config.player_volume;
        let quality = self.config.playback_quality.clone();
        let Some(session) = self.session.as_mut() else {
            log::debug!("view: player event {event:?} with no active session");
            return;
        };
        match event {
            PlayerEvent::Ready => {
                session.set_volume(volume);
                session.set_playback_quality(&quality);
                session.play();
            }
            PlayerEvent::StateChange(PlayerState::Buffering) => {
                session.set_playback_quality(&quality);
            }
            PlayerEvent::StateChange(_) => {}
        }
    }

    fn set_skill_focus(&mut self, focus: SkillFocus) {
        self.view.skills = focus;
        self.view.state.mobile_skills_expanded = focus.is_expanded();
    }

    /// Destroy the active session, returning the video it was bound to.
    fn release_session(&mut self) -> Option<String> {
        self.view.state.video_modal_open = false;
        let session = self.session.take()?;
        let video_id = session.video_id().to_owned();
        session.destroy();
        Some(video_id)
    }
}
