//! YouTube iframe API adapter.
//!
//! Expects `index.html` to have loaded `https://www.youtube.com/iframe_api`,
//! which defines the `YT` global. Players are built with
//! `new YT.Player(mountId, { height, width, videoId, events })` and driven
//! through reflection so no bindings have to be generated for the API.

use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use super::{PlayerEvent, PlayerFactory, PlayerRequest, PlayerState, VideoSession};
use crate::error::PageError;

type EventClosure = Closure<dyn FnMut(JsValue)>;

pub struct YoutubeFactory {
    mount_id: String,
    on_event: Rc<dyn Fn(PlayerEvent)>,
}

impl YoutubeFactory {
    pub fn new(mount_id: impl Into<String>, on_event: impl Fn(PlayerEvent) + 'static) -> Self {
        Self { mount_id: mount_id.into(), on_event: Rc::new(on_event) }
    }

    fn require_mount(&self) -> Result<(), PageError> {
        let found = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.mount_id))
            .is_some();
        if found {
            Ok(())
        } else {
            Err(PageError::missing_region(format!("#{}", self.mount_id)))
        }
    }

    fn event_closures(&self) -> (EventClosure, EventClosure) {
        let ready_sink = Rc::clone(&self.on_event);
        let on_ready = Closure::wrap(Box::new(move |_event: JsValue| {
            ready_sink(PlayerEvent::Ready);
        }) as Box<dyn FnMut(JsValue)>);

        let state_sink = Rc::clone(&self.on_event);
        let on_state_change = Closure::wrap(Box::new(move |event: JsValue| {
            match state_code(&event) {
                Some(code) => state_sink(PlayerEvent::StateChange(PlayerState::from_code(code))),
                None => log::warn!("youtube: state change without numeric data"),
            }
        }) as Box<dyn FnMut(JsValue)>);

        (on_ready, on_state_change)
    }
}

impl PlayerFactory for YoutubeFactory {
    type Session = YoutubeSession;

    fn create(&mut self, request: &PlayerRequest) -> Result<YoutubeSession, PageError> {
        self.require_mount()?;
        let ctor = player_constructor()?;

        let json = serde_json::to_string(request)
            .map_err(|e| PageError::PlayerUnavailable(format!("player options: {e}")))?;
        let options = js_sys::JSON::parse(&json).map_err(js_error)?;

        let (on_ready, on_state_change) = self.event_closures();
        let events = Object::new();
        set(&events, "onReady", on_ready.as_ref())?;
        set(&events, "onStateChange", on_state_change.as_ref())?;
        set(&options, "events", &events)?;

        let args = Array::of2(&JsValue::from_str(&self.mount_id), &options);
        let player = Reflect::construct(&ctor, &args).map_err(js_error)?;
        log::info!("youtube: player created for {}", request.video_id);

        Ok(YoutubeSession {
            video_id: request.video_id.clone(),
            player,
            _on_ready: on_ready,
            _on_state_change: on_state_change,
        })
    }
}

/// A constructed `YT.Player`. The event closures live as long as the player.
pub struct YoutubeSession {
    video_id: String,
    player: JsValue,
    _on_ready: EventClosure,
    _on_state_change: EventClosure,
}

impl YoutubeSession {
    fn call(&self, method: &str, args: &[JsValue]) {
        let result = Reflect::get(&self.player, &JsValue::from_str(method))
            .and_then(|f| f.dyn_into::<Function>())
            .and_then(|f| f.apply(&self.player, &args.iter().collect::<Array>()));
        if let Err(err) = result {
            log::warn!("youtube: {method} failed for {}: {err:?}", self.video_id);
        }
    }
}

impl VideoSession for YoutubeSession {
    fn video_id(&self) -> &str {
        &self.video_id
    }

    fn set_volume(&mut self, volume: u8) {
        self.call("setVolume", &[JsValue::from(f64::from(volume))]);
    }

    fn set_playback_quality(&mut self, quality: &str) {
        self.call("setPlaybackQuality", &[JsValue::from_str(quality)]);
    }

    fn play(&mut self) {
        self.call("playVideo", &[]);
    }

    fn destroy(self) {
        self.call("destroy", &[]);
        log::info!("youtube: player destroyed for {}", self.video_id);
    }
}

fn player_constructor() -> Result<Function, PageError> {
    let yt = Reflect::get(&js_sys::global(), &JsValue::from_str("YT")).map_err(js_error)?;
    if yt.is_undefined() || yt.is_null() {
        return Err(PageError::PlayerUnavailable("YT iframe API not loaded".into()));
    }
    Reflect::get(&yt, &JsValue::from_str("Player"))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| PageError::PlayerUnavailable("YT.Player is not a constructor".into()))
}

#[allow(clippy::cast_possible_truncation)]
fn state_code(event: &JsValue) -> Option<i32> {
    let data = Reflect::get(event, &JsValue::from_str("data")).unwrap_or(JsValue::UNDEFINED);
    data.as_f64().map(|code| code as i32)
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), PageError> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(js_error)?;
    Ok(())
}

fn js_error(err: JsValue) -> PageError {
    PageError::PlayerUnavailable(format!("{err:?}"))
}
