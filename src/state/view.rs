//! Widget visibility flags and their pure transitions.
//!
//! DESIGN
//! ======
//! Each flag gates exactly one region. Transitions take a `ViewState` by value
//! and return the next one; the controller owns the only live copy.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::util::visual::SkillLook;

/// Visibility flags for the page widgets. All `false` at page load.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub modal_open: bool,
    pub video_modal_open: bool,
    pub readmore_expanded: bool,
    pub mobile_skills_expanded: bool,
}

impl ViewState {
    #[must_use]
    pub fn with_video_modal(self, open: bool) -> Self {
        Self { modal_open: open, video_modal_open: open, ..self }
    }

    #[must_use]
    pub fn with_readmore_toggled(self) -> Self {
        Self { readmore_expanded: !self.readmore_expanded, ..self }
    }
}

/// Which mobile skill panel, if any, is currently shown full width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillFocus {
    /// No mobile toggle has happened since page load.
    #[default]
    Untouched,
    Expanded(usize),
    /// A panel was expanded and then folded back.
    Collapsed,
}

impl SkillFocus {
    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded(_))
    }

    /// Look of panel `index` under this focus.
    #[must_use]
    pub fn look(self, index: usize) -> SkillLook {
        match self {
            Self::Untouched => SkillLook::Resting,
            Self::Expanded(active) if active == index => SkillLook::Expanded,
            Self::Expanded(_) => SkillLook::Hidden,
            Self::Collapsed => SkillLook::Collapsed,
        }
    }
}

/// Outcome of a mobile skill toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillTransition {
    Expanded(usize),
    Collapsed(usize),
    /// Viewport at or above the mobile breakpoint.
    Ignored,
}

/// Next focus for a toggle on panel `index`.
///
/// One shared flag covers every panel: when any panel is expanded, a toggle
/// on any index folds the whole row back.
#[must_use]
pub fn toggle_skill_focus(focus: SkillFocus, index: usize, mobile: bool) -> (SkillFocus, SkillTransition) {
    if !mobile {
        return (focus, SkillTransition::Ignored);
    }
    if focus.is_expanded() {
        (SkillFocus::Collapsed, SkillTransition::Collapsed(index))
    } else {
        (SkillFocus::Expanded(index), SkillTransition::Expanded(index))
    }
}

/// Everything the page renders from: the flags plus the active skill panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageView {
    pub state: ViewState,
    pub skills: SkillFocus,
}

impl PageView {
    #[must_use]
    pub fn skill_look(&self, index: usize) -> SkillLook {
        self.skills.look(index)
    }
}
