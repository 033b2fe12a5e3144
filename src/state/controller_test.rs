use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::state::view::ViewState;
use crate::util::visual::{SkillLook, modal_style, property, readmore_label, skill_box_style};

// =============================================================
// Recording player fake
// =============================================================

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Create(String),
    Volume(String, u8),
    Quality(String, String),
    Play(String),
    Destroy(String),
}

#[derive(Clone, Default)]
struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
    live: Rc<RefCell<usize>>,
    fail_next: Rc<RefCell<bool>>,
}

impl Recorder {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn live(&self) -> usize {
        *self.live.borrow()
    }
}

struct FakeSession {
    video_id: String,
    rec: Recorder,
}

impl VideoSession for FakeSession {
    fn video_id(&self) -> &str {
        &self.video_id
    }

    fn set_volume(&mut self, volume: u8) {
        self.rec.calls.borrow_mut().push(Call::Volume(self.video_id.clone(), volume));
    }

    fn set_playback_quality(&mut self, quality: &str) {
        self.rec
            .calls
            .borrow_mut()
            .push(Call::Quality(self.video_id.clone(), quality.to_owned()));
    }

    fn play(&mut self) {
        self.rec.calls.borrow_mut().push(Call::Play(self.video_id.clone()));
    }

    fn destroy(self) {
        *self.rec.live.borrow_mut() -= 1;
        self.rec.calls.borrow_mut().push(Call::Destroy(self.video_id));
    }
}

struct FakeFactory {
    rec: Recorder,
}

impl PlayerFactory for FakeFactory {
    type Session = FakeSession;

    fn create(&mut self, request: &PlayerRequest) -> Result<FakeSession, PageError> {
        if self.rec.fail_next.replace(false) {
            return Err(PageError::PlayerUnavailable("YT not loaded".into()));
        }
        *self.rec.live.borrow_mut() += 1;
        self.rec.calls.borrow_mut().push(Call::Create(request.video_id.clone()));
        Ok(FakeSession { video_id: request.video_id.clone(), rec: self.rec.clone() })
    }
}

const SKILLS: usize = 5;

fn controller() -> (ViewStateController<FakeFactory>, Recorder) {
    let rec = Recorder::default();
    let ctl = ViewStateController::new(PageConfig::default(), FakeFactory { rec: rec.clone() }, SKILLS);
    (ctl, rec)
}

fn modal_visible(ctl: &ViewStateController<FakeFactory>) -> bool {
    property(modal_style(ctl.view().state.modal_open), "display") == Some("flex")
}

fn box_size(ctl: &ViewStateController<FakeFactory>, index: usize) -> (Option<&'static str>, Option<&'static str>) {
    let decls = skill_box_style(ctl.view().skill_look(index));
    (property(decls, "width"), property(decls, "height"))
}

// =============================================================
// Video modal
// =============================================================

#[test]
fn open_creates_session_and_shows_modal() {
    let (mut ctl, rec) = controller();
    ctl.open_video_modal("abc123").expect("open");

    assert!(ctl.view().state.modal_open);
    assert!(ctl.view().state.video_modal_open);
    assert!(modal_visible(&ctl));
    assert_eq!(ctl.session.as_ref().map(VideoSession::video_id), Some("abc123"));
    assert_eq!(rec.calls(), vec![Call::Create("abc123".into())]);
}

#[test]
fn ready_applies_volume_quality_and_plays() {
    let (mut ctl, rec) = controller();
    ctl.open_video_modal("abc123").expect("open");
    ctl.handle_player_event(PlayerEvent::Ready);

    assert_eq!(
        rec.calls(),
        vec![
            Call::Create("abc123".into()),
            Call::Volume("abc123".into(), 10),
            Call::Quality("abc123".into(), "hd720".into()),
            Call::Play("abc123".into()),
        ]
    );
}

#[test]
fn open_then_close_scenario() {
    let (mut ctl, rec) = controller();
    ctl.open_video_modal("abc123").expect("open");
    ctl.handle_player_event(PlayerEvent::Ready);
    ctl.close_video_modal();

    assert!(!ctl.view().state.modal_open);
    assert!(!ctl.view().state.video_modal_open);
    assert!(!modal_visible(&ctl));
    assert!(ctl.session.is_none());
    assert_eq!(rec.live(), 0);
    assert_eq!(rec.calls().last(), Some(&Call::Destroy("abc123".into())));
}

#[test]
fn close_without_session_is_noop() {
    let (mut ctl, rec) = controller();
    ctl.close_video_modal();
    ctl.close_video_modal();

    assert_eq!(ctl.view().state, ViewState::default());
    assert!(rec.calls().is_empty());
}

#[test]
fn reopen_destroys_previous_session_first() {
    let (mut ctl, rec) = controller();
    ctl.open_video_modal("first").expect("open first");
    ctl.open_video_modal("second").expect("open second");

    assert_eq!(rec.live(), 1);
    assert_eq!(ctl.session.as_ref().map(VideoSession::video_id), Some("second"));
    assert_eq!(
        rec.calls(),
        vec![
            Call::Create("first".into()),
            Call::Destroy("first".into()),
            Call::Create("second".into()),
        ]
    );
}

#[test]
fn no_leak_across_open_close_sequences() {
    let (mut ctl, rec) = controller();
    let script: &[Option<&str>] = &[Some("a"), Some("b"), None, None, Some("c"), Some("d"), Some("e"), None];
    for step in script {
        match step {
            Some(id) => ctl.open_video_modal(id).expect("open"),
            None => {
                ctl.close_video_modal();
                assert_eq!(rec.live(), 0);
                assert!(ctl.session.is_none());
                assert_eq!(ctl.view().state.modal_open, modal_visible(&ctl));
            }
        }
        assert!(rec.live() <= 1);
    }
}

#[test]
fn buffering_reasserts_quality() {
    let (mut ctl, rec) = controller();
    ctl.open_video_modal("abc123").expect("open");
    ctl.handle_player_event(PlayerEvent::StateChange(PlayerState::Buffering));
    ctl.handle_player_event(PlayerEvent::StateChange(PlayerState::Playing));

    assert_eq!(
        rec.calls(),
        vec![Call::Create("abc123".into()), Call::Quality("abc123".into(), "hd720".into())]
    );
}

#[test]
fn player_event_without_session_is_ignored() {
    let (mut ctl, rec) = controller();
    ctl.handle_player_event(PlayerEvent::Ready);
    assert!(rec.calls().is_empty());
}

#[test]
fn open_with_empty_id_changes_nothing() {
    let (mut ctl, rec) = controller();
    let err = ctl.open_video_modal("").expect_err("empty id");
    assert!(matches!(err, PageError::InvalidVideoId(_)));
    assert_eq!(ctl.view().state, ViewState::default());
    assert!(rec.calls().is_empty());
}

#[test]
fn failed_player_creation_leaves_modal_open_without_session() {
    let (mut ctl, rec) = controller();
    *rec.fail_next.borrow_mut() = true;
    let err = ctl.open_video_modal("abc123").expect_err("player missing");

    assert!(matches!(err, PageError::PlayerUnavailable(_)));
    assert!(ctl.view().state.modal_open);
    assert!(!ctl.view().state.video_modal_open);
    assert!(ctl.session.is_none());

    ctl.close_video_modal();
    assert!(!modal_visible(&ctl));
}

#[test]
fn custom_volume_is_used_on_ready() {
    let rec = Recorder::default();
    let config = PageConfig { player_volume: 42, ..PageConfig::default() };
    let mut ctl = ViewStateController::new(config, FakeFactory { rec: rec.clone() }, SKILLS);
    ctl.open_video_modal("abc123").expect("open");
    ctl.handle_player_event(PlayerEvent::Ready);
    assert!(rec.calls().contains(&Call::Volume("abc123".into(), 42)));
}

// =============================================================
// Readmore
// =============================================================

#[test]
fn toggle_readmore_twice_round_trips() {
    let (mut ctl, _) = controller();
    let before = ctl.view().state;
    let label_before = readmore_label(before.readmore_expanded);

    assert!(ctl.toggle_readmore());
    assert_ne!(readmore_label(ctl.view().state.readmore_expanded), label_before);
    assert!(!ctl.toggle_readmore());

    assert_eq!(ctl.view().state, before);
    assert_eq!(readmore_label(ctl.view().state.readmore_expanded), label_before);
    assert_eq!(label_before.text, "스킬 더보기");
}

#[test]
fn toggle_readmore_does_not_touch_modal() {
    let (mut ctl, _) = controller();
    ctl.open_video_modal("abc123").expect("open");
    ctl.toggle_readmore();
    assert!(ctl.view().state.modal_open);
    assert!(ctl.session.is_some());
}

// =============================================================
// Mobile skills
// =============================================================

#[test]
fn mobile_toggle_expands_one_and_hides_rest() {
    let (mut ctl, _) = controller();
    let transition = ctl.toggle_mobile_skill(1, 400.0).expect("in range");

    assert_eq!(transition, SkillTransition::Expanded(1));
    assert!(ctl.view().state.mobile_skills_expanded);
    assert_eq!(box_size(&ctl, 1), (Some("100vw"), Some("70vw")));
    for i in (0..SKILLS).filter(|&i| i != 1) {
        assert_eq!(ctl.view().skill_look(i), SkillLook::Hidden);
        assert_eq!(box_size(&ctl, i), (Some("0px"), Some("0px")));
    }
}

#[test]
fn mobile_toggle_twice_returns_all_to_minimal_size() {
    let (mut ctl, _) = controller();
    ctl.toggle_mobile_skill(2, 400.0).expect("in range");
    let transition = ctl.toggle_mobile_skill(2, 400.0).expect("in range");

    assert_eq!(transition, SkillTransition::Collapsed(2));
    assert!(!ctl.view().state.mobile_skills_expanded);
    for i in 0..SKILLS {
        assert_eq!(box_size(&ctl, i), (Some("55px"), Some("55px")));
    }
}

#[test]
fn desktop_toggle_changes_nothing() {
    let (mut ctl, _) = controller();
    let before = ctl.view();
    for _ in 0..5 {
        let transition = ctl.toggle_mobile_skill(3, 800.0).expect("in range");
        assert_eq!(transition, SkillTransition::Ignored);
    }
    assert_eq!(ctl.view(), before);
    for i in 0..SKILLS {
        assert_eq!(box_size(&ctl, i), (None, None));
    }
}

#[test]
fn desktop_toggle_keeps_mobile_expansion() {
    let (mut ctl, _) = controller();
    ctl.toggle_mobile_skill(0, 400.0).expect("in range");
    ctl.toggle_mobile_skill(0, 800.0).expect("in range");
    assert!(ctl.view().state.mobile_skills_expanded);
    assert_eq!(ctl.view().skill_look(0), SkillLook::Expanded);
}

#[test]
fn second_index_collapses_shared_flag() {
    let (mut ctl, _) = controller();
    ctl.toggle_mobile_skill(0, 400.0).expect("in range");
    ctl.toggle_mobile_skill(4, 400.0).expect("in range");

    assert!(!ctl.view().state.mobile_skills_expanded);
    for i in 0..SKILLS {
        assert_eq!(ctl.view().skill_look(i), SkillLook::Collapsed);
    }
}

#[test]
fn out_of_range_index_is_rejected() {
    let (mut ctl, _) = controller();
    let err = ctl.toggle_mobile_skill(SKILLS, 400.0).expect_err("out of range");
    assert_eq!(err, PageError::SkillIndexOutOfRange { index: SKILLS, len: SKILLS });
    assert_eq!(ctl.view(), PageView::default());
}
