use crate::models::{Difficulty, Project};

// Guided projects; these have no downloadable source.
pub(in crate::catalog) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Task Manager",
        description: "Build a command-line task manager using Python's built-in modules",
        difficulty: Difficulty::Beginner,
        category: None,
        duration: Some("1-2 weeks"),
        features: &[],
        technologies: &["Python"],
        concepts: &["File I/O", "Data Structures", "Command Line Interface"],
        source_url: None,
        icon: "📋",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 2,
        title: "Weather App",
        description: "Create a weather application that fetches real-time data from an API",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: Some("2-3 weeks"),
        features: &[],
        technologies: &["Python", "Requests"],
        concepts: &["API Integration", "JSON Parsing", "Data Visualization"],
        source_url: None,
        icon: "🌤️",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 3,
        title: "Web Scraper",
        description: "Develop a web scraper to collect and analyze data from websites",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: Some("2-3 weeks"),
        features: &[],
        technologies: &["Python", "BeautifulSoup", "Requests"],
        concepts: &["BeautifulSoup", "Requests", "Data Analysis"],
        source_url: None,
        icon: "🕷️",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 4,
        title: "Chat Application",
        description: "Build a real-time chat application using Python and WebSocket",
        difficulty: Difficulty::Advanced,
        category: None,
        duration: Some("3-4 weeks"),
        features: &[],
        technologies: &["Python", "asyncio", "WebSocket"],
        concepts: &["WebSocket", "Asyncio", "Database Integration"],
        source_url: None,
        icon: "💬",
        complexity: None,
        download_codes: &[],
    },
];
