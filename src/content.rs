//! Static page content: skill panels and project cards.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub title: &'static str,
    pub text: &'static str,
    pub img: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub intro: &'static str,
    pub img: &'static str,
    /// Demo video shown in the modal, if the project has one.
    pub video_id: Option<&'static str>,
}

impl Project {
    /// Demo video id to open in the modal; blank ids count as none.
    #[must_use]
    pub fn demo_video(&self) -> Option<&'static str> {
        self.video_id.map(str::trim).filter(|id| !id.is_empty())
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { title: "Java", text: "Spring MVC and JPA backends", img: "/img/skills/java.png" },
    Skill { title: "JavaScript", text: "Vanilla DOM scripting and jQuery", img: "/img/skills/javascript.png" },
    Skill { title: "HTML5", text: "Semantic markup and accessibility", img: "/img/skills/html5.png" },
    Skill { title: "CSS3", text: "Responsive layouts and transitions", img: "/img/skills/css3.png" },
    Skill { title: "MySQL", text: "Schema design and query tuning", img: "/img/skills/mysql.png" },
    Skill { title: "Git", text: "Branching workflows and code review", img: "/img/skills/git.png" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio",
        intro: "This page: scroll animations, a video modal and a mobile skill viewer.",
        img: "/img/projects/portfolio.png",
        video_id: None,
    },
    Project {
        title: "Board",
        intro: "Community board with authentication, paging and comments.",
        img: "/img/projects/board.png",
        video_id: Some("Ks-_Mh1QhMc"),
    },
    Project {
        title: "Shop",
        intro: "Shopping mall with cart, orders and an admin console.",
        img: "/img/projects/shop.png",
        video_id: Some("aqz-KE-bpKQ"),
    },
];

