//! Root application component and the shared page handle.

use leptos::prelude::*;
use std::rc::Rc;

use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::{project_list::ProjectList, skills_panel::SkillsPanel, video_modal::VideoModal};
use crate::config::PageConfig;
use crate::content::SKILLS;
use crate::player::{EventRelay, PlayerEvent};
use crate::state::controller::ViewStateController;
use crate::state::view::PageView;
use crate::util::viewport;

#[cfg(feature = "csr")]
pub type PageFactory = crate::player::youtube::YoutubeFactory;
#[cfg(not(feature = "csr"))]
pub type PageFactory = crate::player::DetachedPlayerFactory;

pub type PageController = ViewStateController<PageFactory>;

/// Context handle pairing the controller with the signal the page renders from.
///
/// Every operation goes through the controller and then republishes its
/// `PageView`, so components never see a half-applied transition.
#[derive(Clone, Copy)]
pub struct PageHandle {
    controller: StoredValue<PageController, LocalStorage>,
    view: RwSignal<PageView>,
}

impl PageHandle {
    pub fn new(controller: PageController) -> Self {
        let view = RwSignal::new(controller.view());
        Self { controller: StoredValue::new_local(controller), view }
    }

    /// Current view; tracked when read inside a reactive closure.
    pub fn view(&self) -> PageView {
        self.view.get()
    }

    /// Current view without subscribing; for event handlers.
    pub fn view_untracked(&self) -> PageView {
        self.view.get_untracked()
    }

    pub fn player_mount_id(&self) -> String {
        self.controller.with_value(|c| c.config().player_mount_id.clone())
    }

    pub fn open_video(&self, video_id: &str) {
        if let Some(Err(err)) = self.apply(|c| c.open_video_modal(video_id)) {
            log::error!("page: cannot open video {video_id}: {err}");
        }
    }

    pub fn close_video(&self) {
        self.apply(PageController::close_video_modal);
    }

    pub fn toggle_readmore(&self) {
        self.apply(PageController::toggle_readmore);
    }

    pub fn toggle_skill(&self, index: usize) {
        let width = viewport::width_or_desktop(viewport::inner_width());
        if let Some(Err(err)) = self.apply(|c| c.toggle_mobile_skill(index, width)) {
            log::warn!("page: skill toggle rejected: {err}");
        }
    }

    pub fn handle_player_event(&self, event: PlayerEvent) {
        self.apply(|c| c.handle_player_event(event));
    }

    fn apply<R>(&self, op: impl FnOnce(&mut PageController) -> R) -> Option<R> {
        let (out, view) = self.controller.try_update_value(|c| {
            let out = op(c);
            (out, c.view())
        })?;
        self.view.set(view);
        Some(out)
    }
}

#[cfg(feature = "csr")]
fn page_factory(config: &PageConfig, relay: &Rc<EventRelay>) -> PageFactory {
    let relay = Rc::clone(relay);
    crate::player::youtube::YoutubeFactory::new(config.player_mount_id.clone(), move |event| {
        relay.dispatch(event);
    })
}

#[cfg(not(feature = "csr"))]
fn page_factory(_config: &PageConfig, _relay: &Rc<EventRelay>) -> PageFactory {
    crate::player::DetachedPlayerFactory
}

/// Root application component.
///
/// Provides the page handle and renders the portfolio sections.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PageConfig::default();
    let relay = Rc::new(EventRelay::default());
    let factory = page_factory(&config, &relay);
    let page = PageHandle::new(ViewStateController::new(config, factory, SKILLS.len()));
    provide_context(page);

    // Player callbacks arrive outside the click handlers; each one goes
    // straight back through the controller.
    relay.bind(move |event| page.handle_player_event(event));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio-page.css"/>
        <Title text="Portfolio"/>

        <header class="header">
            <h1 class="header_title">"Portfolio"</h1>
        </header>
        <section class="section">
            <SkillsPanel/>
            <ProjectList/>
        </section>
        <footer class="footer"></footer>
        <VideoModal/>
    }
}
