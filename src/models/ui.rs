//! Page-local selection state. Each page owns one of these for as long as it
//! is mounted; nothing here outlives a navigation.

use std::time::Duration;

/// Tabs of a JavaScript lesson page
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LessonTab {
    #[default]
    Learn,
    Practice,
}

impl LessonTab {
    pub const ALL: [LessonTab; 2] = [Self::Learn, Self::Practice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Learn => "learn",
            Self::Practice => "practice",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Learn => "Learn",
            Self::Practice => "Practice",
        }
    }
}

impl std::str::FromStr for LessonTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "learn" => Ok(Self::Learn),
            "practice" => Ok(Self::Practice),
            _ => Err(format!("invalid lesson tab: {}", s)),
        }
    }
}

/// Tabs of a Python lesson page
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PythonLessonTab {
    #[default]
    Content,
    Video,
    Exercises,
}

impl PythonLessonTab {
    pub const ALL: [PythonLessonTab; 3] = [Self::Content, Self::Video, Self::Exercises];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Video => "video",
            Self::Exercises => "exercises",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Content => "Content",
            Self::Video => "Video",
            Self::Exercises => "Exercises",
        }
    }
}

impl std::str::FromStr for PythonLessonTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "video" => Ok(Self::Video),
            "exercises" => Ok(Self::Exercises),
            _ => Err(format!("invalid python lesson tab: {}", s)),
        }
    }
}

/// Admin sidebar visibility
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum SidebarState {
    #[default]
    Open,
    Closed,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        *self == Self::Open
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl std::str::FromStr for SidebarState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("invalid sidebar state: {}", s)),
        }
    }
}

/// Hero slideshow position. `current` is always below `len` (or zero for an
/// empty slideshow).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Carousel {
    current: usize,
    len: usize,
    playing: bool,
}

impl Carousel {
    pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);

    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            playing: true,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Timer tick; only moves while playing.
    pub fn tick(&mut self) {
        if self.playing {
            self.next();
        }
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }
}

/// Download dialog of a project page
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum DownloadModal {
    #[default]
    Closed,
    Open { project_id: u32 },
}

impl DownloadModal {
    pub fn project_id(&self) -> Option<u32> {
        match self {
            Self::Closed => None,
            Self::Open { project_id } => Some(*project_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_both_directions() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_carousel_tick_respects_pause() {
        let mut c = Carousel::new(3);
        c.tick();
        assert_eq!(c.current(), 1);

        c.toggle_playing();
        c.tick();
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_carousel_empty_never_moves() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.go_to(4);
        assert_eq!(c.current(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn test_carousel_go_to_ignores_out_of_range() {
        let mut c = Carousel::new(2);
        c.go_to(1);
        c.go_to(7);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_tabs_parse_from_query_values() {
        assert_eq!("practice".parse::<LessonTab>(), Ok(LessonTab::Practice));
        assert_eq!("Video".parse::<PythonLessonTab>(), Ok(PythonLessonTab::Video));
        assert!("challenge".parse::<LessonTab>().is_err());
    }

    #[test]
    fn test_sidebar_toggle() {
        let s = SidebarState::default();
        assert!(s.is_open());
        assert_eq!(s.toggled(), SidebarState::Closed);
        assert_eq!(s.toggled().toggled(), SidebarState::Open);
    }

    #[test]
    fn test_download_modal_project_id() {
        assert_eq!(DownloadModal::Closed.project_id(), None);
        assert_eq!(DownloadModal::Open { project_id: 4 }.project_id(), Some(4));
    }
}
