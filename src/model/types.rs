//! Core type definitions for the page

/// Which mini-player variant is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Desktop,
    Mobile,
}

/// Element ids of one mini-player surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceIds {
    pub root: &'static str,
    pub play: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub track: &'static str,
    pub progress: &'static str,
    pub open: &'static str,
}

pub const DESKTOP_IDS: SurfaceIds = SurfaceIds {
    root: "desktop-music-widget",
    play: "desktop-mw-play",
    prev: "desktop-mw-prev",
    next: "desktop-mw-next",
    track: "desktop-mw-track",
    progress: "desktop-mw-progress-bar",
    open: "desktop-mw-open",
};

pub const MOBILE_IDS: SurfaceIds = SurfaceIds {
    root: "mobile-music-widget",
    play: "mobile-mw-play",
    prev: "mobile-mw-prev",
    next: "mobile-mw-next",
    track: "mobile-mw-track",
    progress: "mobile-mw-progress-bar",
    open: "mobile-mw-open",
};

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Desktop, Surface::Mobile];

    /// Desktop from `breakpoint` logical pixels upward, mobile below it.
    pub fn for_viewport(width: u32, breakpoint: u32) -> Self {
        if width >= breakpoint {
            Surface::Desktop
        } else {
            Surface::Mobile
        }
    }

    pub fn ids(self) -> &'static SurfaceIds {
        match self {
            Surface::Desktop => &DESKTOP_IDS,
            Surface::Mobile => &MOBILE_IDS,
        }
    }

    /// Fixed width in pixels of the title container
    pub fn container_width(self) -> u32 {
        match self {
            Surface::Desktop => 170,
            Surface::Mobile => 150,
        }
    }
}

/// Content panels of the profile page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    About,
    Experiences,
    Projects,
    Skills,
    Photos,
    Following,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::About,
        Tab::Experiences,
        Tab::Projects,
        Tab::Skills,
        Tab::Photos,
        Tab::Following,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tab::About => "about",
            Tab::Experiences => "experiences",
            Tab::Projects => "projects",
            Tab::Skills => "skills",
            Tab::Photos => "photos",
            Tab::Following => "following",
        }
    }

    pub fn content_id(self) -> &'static str {
        match self {
            Tab::About => "about-content",
            Tab::Experiences => "experiences-content",
            Tab::Projects => "projects-content",
            Tab::Skills => "skills-content",
            Tab::Photos => "photos-content",
            Tab::Following => "following-content",
        }
    }

    /// Tab buttons that highlight when this panel is shown.
    /// "following" only exists in the top bar, never in the sidebar.
    pub fn tab_ids(self) -> &'static [&'static str] {
        match self {
            Tab::About => &["about-tab", "sidebar-about-tab"],
            Tab::Experiences => &["experiences-tab", "sidebar-experiences-tab"],
            Tab::Projects => &["projects-tab", "sidebar-projects-tab"],
            Tab::Skills => &["skills-tab", "sidebar-skills-tab"],
            Tab::Photos => &["photos-tab", "sidebar-photos-tab"],
            Tab::Following => &["following-tab"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_for_desktop() {
        assert_eq!(Surface::for_viewport(769, 769), Surface::Desktop);
        assert_eq!(Surface::for_viewport(768, 769), Surface::Mobile);
        assert_eq!(Surface::for_viewport(500, 769), Surface::Mobile);
        assert_eq!(Surface::for_viewport(1920, 769), Surface::Desktop);
    }

    #[test]
    fn surfaces_have_distinct_element_ids() {
        let desktop = Surface::Desktop.ids();
        let mobile = Surface::Mobile.ids();
        assert_ne!(desktop.play, mobile.play);
        assert_ne!(desktop.progress, mobile.progress);
        assert_eq!(Surface::Desktop.container_width(), 170);
        assert_eq!(Surface::Mobile.container_width(), 150);
    }

    #[test]
    fn following_has_no_sidebar_button() {
        assert_eq!(Tab::Following.tab_ids(), &["following-tab"]);
    }
}
