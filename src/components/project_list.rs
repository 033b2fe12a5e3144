//! Project cards; projects with a demo video open it in the modal.

use leptos::prelude::*;

use crate::app::PageHandle;
use crate::content::PROJECTS;

#[component]
pub fn ProjectList() -> impl IntoView {
    let page = expect_context::<PageHandle>();

    view! {
        <article class="project_container">
            {PROJECTS
                .iter()
                .map(|project| {
                    let demo = project.demo_video().map(|video_id| {
                        view! {
                            <button class="project_demo" on:click=move |_| page.open_video(video_id)>
                                "영상 보기"
                            </button>
                        }
                    });
                    view! {
                        <div class="project_card">
                            <img class="project_img" src=project.img alt=project.title/>
                            <div class="project_intro">
                                <h3>{project.title}</h3>
                                <p>{project.intro}</p>
                                {demo}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </article>
    }
}
