//! Skills section: skill boxes with the mobile single-panel viewer, and the
//! "read more" control.

use leptos::prelude::*;

use crate::app::PageHandle;
use crate::content::{SKILLS, Skill};
use crate::util::visual::{
    readmore_label, skill_box_style, skill_img_style, skill_text_style, skill_title_style, to_inline,
};

#[component]
pub fn SkillsPanel() -> impl IntoView {
    let page = expect_context::<PageHandle>();

    let label = move || {
        let label = readmore_label(page.view().state.readmore_expanded);
        view! {
            {label.text}
            {label.indicator.map(|glyph| view! { " " <span class="skills_readmore_plus">{glyph}</span> })}
        }
    };

    view! {
        <article class="skills_container">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(index, skill)| view! { <SkillBox index=index skill=*skill/> })
                .collect_view()}
            <button class="skills_readmore" on:click=move |_| page.toggle_readmore()>
                {label}
            </button>
        </article>
    }
}

#[component]
fn SkillBox(index: usize, skill: Skill) -> impl IntoView {
    let page = expect_context::<PageHandle>();
    let look = move || page.view().skill_look(index);

    view! {
        <div class="skills_skillbox" style=move || to_inline(skill_box_style(look())) on:click=move |_| page.toggle_skill(index)>
            <img class="skills_img" src=skill.img alt=skill.title style=move || to_inline(skill_img_style(look()))/>
            <div class="skills_title" style=move || to_inline(skill_title_style(look()))>
                {skill.title}
            </div>
            <div class="skills_text" style=move || to_inline(skill_text_style(look()))>
                {skill.text}
            </div>
        </div>
    }
}
