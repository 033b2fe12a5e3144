//! Startup check for the page regions the controller drives.
//!
//! Markup changes that drop a region are reported once, at mount, with the
//! selector that went missing, instead of surfacing later as a dead click.

#[cfg(test)]
#[path = "regions_test.rs"]
mod regions_test;

use crate::error::PageError;

/// Selectors that must resolve after the page is mounted.
pub const REQUIRED_REGIONS: &[&str] = &[
    ".modal",
    ".skills_container",
    ".skills_skillbox",
    ".skills_readmore",
    ".project_container",
];

/// First selector in `required` that `present` rejects, as an error.
pub fn check_regions(present: impl Fn(&str) -> bool, required: &[&str]) -> Result<(), PageError> {
    match required.iter().find(|selector| !present(**selector)) {
        Some(selector) => Err(PageError::missing_region(*selector)),
        None => Ok(()),
    }
}

/// Check `REQUIRED_REGIONS` plus the player mount against the live document.
#[cfg(feature = "csr")]
pub fn check_document(player_mount_id: &str) -> Result<(), PageError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PageError::missing_region("document"))?;
    let present = |selector: &str| matches!(document.query_selector(selector), Ok(Some(_)));
    check_regions(present, REQUIRED_REGIONS)?;
    let mount = format!("#{player_mount_id}");
    check_regions(present, &[mount.as_str()])
}
