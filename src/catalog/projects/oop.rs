use crate::models::{Difficulty, Project};

// Grouped by implementation language, carried in `category`. Walkthroughs only, no source.
pub(in crate::catalog) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "University Management System",
        description: "Complete system for managing university departments, faculty, students, and courses.",
        difficulty: Difficulty::Advanced,
        category: Some("Java"),
        duration: None,
        features: &[
            "Student enrollment",
            "Course registration",
            "Faculty management",
            "Grade tracking",
            "Department administration",
        ],
        technologies: &["Java", "Spring Framework", "Hibernate", "MySQL", "Maven"],
        concepts: &["Inheritance", "Polymorphism", "Encapsulation", "Abstraction"],
        source_url: None,
        icon: "🎓",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 2,
        title: "E-Commerce Platform",
        description: "Object-oriented implementation of an online shopping system.",
        difficulty: Difficulty::Advanced,
        category: Some("C++"),
        duration: None,
        features: &[
            "Product catalog",
            "Shopping cart",
            "User accounts",
            "Order processing",
            "Payment integration",
        ],
        technologies: &["C++"],
        concepts: &[
            "Class hierarchy",
            "Interface design",
            "Design patterns",
            "SOLID principles",
        ],
        source_url: None,
        icon: "🛍️",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 3,
        title: "Social Media Network",
        description: "Social networking platform with user interactions and content sharing.",
        difficulty: Difficulty::Intermediate,
        category: Some("Python"),
        duration: None,
        features: &[
            "User profiles",
            "Friend connections",
            "Post sharing",
            "News feed",
            "Notifications",
        ],
        technologies: &["Python"],
        concepts: &[
            "Object composition",
            "Method overriding",
            "Abstract classes",
            "Interfaces",
        ],
        source_url: None,
        icon: "🌐",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 4,
        title: "Game Engine Framework",
        description: "Basic game engine demonstrating OOP principles in game development.",
        difficulty: Difficulty::Advanced,
        category: Some("C++"),
        duration: None,
        features: &[
            "Entity system",
            "Physics engine",
            "Resource management",
            "Event handling",
            "Rendering system",
        ],
        technologies: &["C++"],
        concepts: &[
            "Component systems",
            "Factory pattern",
            "Observer pattern",
            "Singleton pattern",
        ],
        source_url: None,
        icon: "🎮",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 5,
        title: "Smart Home System",
        description: "IoT-based smart home automation system using OOP principles.",
        difficulty: Difficulty::Intermediate,
        category: Some("Java"),
        duration: None,
        features: &[
            "Device management",
            "Automation rules",
            "Sensor integration",
            "Remote control",
            "Energy monitoring",
        ],
        technologies: &["Java", "Spring Framework", "MQTT", "MongoDB", "WebSocket"],
        concepts: &[
            "Interface segregation",
            "Dependency injection",
            "Event-driven design",
            "Strategy pattern",
        ],
        source_url: None,
        icon: "🏠",
        complexity: None,
        download_codes: &[],
    },
];
