//! Declarative widget styling.
//!
//! DESIGN
//! ======
//! Every widget's inline style is a pure function of its view state. The
//! components render `to_inline(&decls)` into `style=""`, so a flag and the
//! region it gates can never drift apart.

#[cfg(test)]
#[path = "visual_test.rs"]
mod visual_test;

/// One inline CSS property assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: &'static str,
}

const fn decl(property: &'static str, value: &'static str) -> StyleDecl {
    StyleDecl { property, value }
}

/// Visual configuration of one mobile skill panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillLook {
    /// Page-load look: stylesheet only, no inline overrides.
    #[default]
    Resting,
    /// The single panel shown full width on mobile.
    Expanded,
    /// Any other panel while one is expanded.
    Hidden,
    /// Every panel after the expanded one was folded back.
    Collapsed,
}

const MODAL_OPEN: &[StyleDecl] = &[decl("display", "flex")];
const MODAL_CLOSED: &[StyleDecl] = &[decl("display", "none")];

const BOX_EXPANDED: &[StyleDecl] = &[decl("width", "100vw"), decl("height", "70vw")];
const BOX_HIDDEN: &[StyleDecl] = &[
    decl("width", "0px"),
    decl("height", "0px"),
    decl("margin", "0px"),
    decl("margin-bottom", "0px"),
];
const BOX_COLLAPSED: &[StyleDecl] = &[
    decl("width", "55px"),
    decl("height", "55px"),
    decl("margin", "10px"),
    decl("margin-bottom", "15px"),
];

const IMG_EXPANDED: &[StyleDecl] = &[decl("opacity", "0.2")];
const IMG_COLLAPSED: &[StyleDecl] = &[decl("opacity", "1")];

const TEXT_EXPANDED: &[StyleDecl] = &[decl("font-size", "1.1em"), decl("opacity", "1")];
const TITLE_EXPANDED: &[StyleDecl] = &[decl("font-size", "1.4em"), decl("opacity", "1")];
const LABEL_COLLAPSED: &[StyleDecl] = &[decl("font-size", "0px"), decl("opacity", "0")];

/// Modal region: flex when open, removed from layout when closed.
#[must_use]
pub fn modal_style(open: bool) -> &'static [StyleDecl] {
    if open { MODAL_OPEN } else { MODAL_CLOSED }
}

/// Outer skill box.
#[must_use]
pub fn skill_box_style(look: SkillLook) -> &'static [StyleDecl] {
    match look {
        SkillLook::Resting => &[],
        SkillLook::Expanded => BOX_EXPANDED,
        SkillLook::Hidden => BOX_HIDDEN,
        SkillLook::Collapsed => BOX_COLLAPSED,
    }
}

/// Skill icon inside the box.
#[must_use]
pub fn skill_img_style(look: SkillLook) -> &'static [StyleDecl] {
    match look {
        SkillLook::Resting | SkillLook::Hidden => &[],
        SkillLook::Expanded => IMG_EXPANDED,
        SkillLook::Collapsed => IMG_COLLAPSED,
    }
}

/// Skill description text.
#[must_use]
pub fn skill_text_style(look: SkillLook) -> &'static [StyleDecl] {
    match look {
        SkillLook::Resting | SkillLook::Hidden => &[],
        SkillLook::Expanded => TEXT_EXPANDED,
        SkillLook::Collapsed => LABEL_COLLAPSED,
    }
}

/// Skill title.
#[must_use]
pub fn skill_title_style(look: SkillLook) -> &'static [StyleDecl] {
    match look {
        SkillLook::Resting | SkillLook::Hidden => &[],
        SkillLook::Expanded => TITLE_EXPANDED,
        SkillLook::Collapsed => LABEL_COLLAPSED,
    }
}

/// Text and indicator glyph of the skills "read more" control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadmoreLabel {
    pub text: &'static str,
    pub indicator: Option<&'static str>,
}

#[must_use]
pub fn readmore_label(expanded: bool) -> ReadmoreLabel {
    if expanded {
        ReadmoreLabel { text: "스킬 접기", indicator: Some("↑") }
    } else {
        ReadmoreLabel { text: "스킬 더보기", indicator: None }
    }
}

/// Render declarations as a `style` attribute value.
#[must_use]
pub fn to_inline(decls: &[StyleDecl]) -> String {
    decls
        .iter()
        .map(|d| format!("{}: {};", d.property, d.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up a single property in a declaration list.
#[cfg(test)]
pub(crate) fn property<'a>(decls: &'a [StyleDecl], name: &str) -> Option<&'a str> {
    decls.iter().rev().find(|d| d.property == name).map(|d| d.value)
}
