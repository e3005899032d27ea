use crate::models::{Course, CourseUnit, Slide, Track};

pub(super) static COURSES: &[Course] = &[
    Course {
        track: Track::JavaScript,
        title: "JavaScript",
        tagline: "Master Modern JavaScript",
        image: "https://images.unsplash.com/photo-1579468118864-1b9ea3c0db4a?ixlib=rb-4.0.3",
        slides: &[
            Slide {
                image: "https://images.unsplash.com/photo-1579468118864-1b9ea3c0db4a?ixlib=rb-4.0.3",
                title: "Master Modern JavaScript",
                description: "Learn JavaScript from fundamentals to advanced concepts with modern ES6+ features",
            },
            Slide {
                image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?ixlib=rb-4.0.3",
                title: "Full-Stack Development",
                description: "Build dynamic web applications with Node.js, React, and modern frameworks",
            },
            Slide {
                image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3",
                title: "Real-World Projects",
                description: "Create professional applications using modern JavaScript technologies",
            },
        ],
        units: &[
            CourseUnit {
                title: "JavaScript Basics",
                topics: &["Variables & Data Types", "Objects and Arrays", "Functions & Scope", "Control Flow & Loops"],
                duration: "4 weeks",
                icon: "🟨",
            },
            CourseUnit {
                title: "The Browser",
                topics: &["DOM Manipulation", "Event Handling", "Forms", "Browser Developer Tools"],
                duration: "3 weeks",
                icon: "🌐",
            },
            CourseUnit {
                title: "Asynchronous JavaScript",
                topics: &["Callbacks and Promises", "Async/Await", "Fetch API", "Error Handling"],
                duration: "3 weeks",
                icon: "⚡",
            },
        ],
    },
    Course {
        track: Track::Python,
        title: "Python",
        tagline: "Learn Python Programming",
        image: "https://images.unsplash.com/photo-1526379879527-8559ecfcaec0?ixlib=rb-4.0.3",
        slides: &[
            Slide {
                image: "https://images.unsplash.com/photo-1526379095098-d400fd0bf935?ixlib=rb-4.0.3&auto=format&fit=crop&w=2074&q=80",
                title: "Learn Python Programming",
                description: "Master the fundamentals of Python programming language",
            },
            Slide {
                image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
                title: "Build Real Projects",
                description: "Create practical applications and solve real-world problems",
            },
            Slide {
                image: "https://images.unsplash.com/photo-1527474305487-b87b222841cc?ixlib=rb-4.0.3&auto=format&fit=crop&w=1974&q=80",
                title: "Data Science & AI",
                description: "Explore data analysis, machine learning, and artificial intelligence",
            },
        ],
        units: &[
            CourseUnit {
                title: "Python Fundamentals",
                topics: &["Variables & Data Types", "Control Flow", "Functions", "Object-Oriented Programming"],
                duration: "4 weeks",
                icon: "🐍",
            },
            CourseUnit {
                title: "Advanced Python",
                topics: &["Decorators", "Generators", "Context Managers", "Metaclasses"],
                duration: "4 weeks",
                icon: "⚡",
            },
            CourseUnit {
                title: "Python Libraries",
                topics: &["NumPy", "Pandas", "Matplotlib", "Scikit-learn"],
                duration: "4 weeks",
                icon: "📚",
            },
            CourseUnit {
                title: "Projects & Applications",
                topics: &["Web Scraping", "API Development", "Data Analysis", "Machine Learning"],
                duration: "4 weeks",
                icon: "🚀",
            },
        ],
    },
    Course {
        track: Track::Java,
        title: "Java",
        tagline: "Java Development",
        image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?ixlib=rb-4.0.3",
        slides: &[
            Slide {
                image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
                title: "Master Java Programming",
                description: "Learn enterprise-grade Java development from basics to advanced concepts",
            },
            Slide {
                image: "https://images.unsplash.com/photo-1571171637578-41bc2dd41cd2?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
                title: "Enterprise Development",
                description: "Build scalable applications using Spring Boot and Microservices",
            },
            Slide {
                image: "https://images.unsplash.com/photo-1623479322729-28b25c16b011?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
                title: "Android Development",
                description: "Create modern Android applications with Java and Android SDK",
            },
        ],
        units: &[
            CourseUnit {
                title: "Java Fundamentals",
                topics: &["OOP Concepts", "Data Types & Variables", "Control Flow", "Collections"],
                duration: "4 weeks",
                icon: "☕",
            },
            CourseUnit {
                title: "Advanced Java",
                topics: &["Multithreading", "Generics", "Stream API", "Lambda Expressions"],
                duration: "6 weeks",
                icon: "⚡",
            },
            CourseUnit {
                title: "Enterprise Java",
                topics: &["Spring Boot", "Hibernate", "RESTful APIs", "Microservices"],
                duration: "8 weeks",
                icon: "🏢",
            },
            CourseUnit {
                title: "Android Development",
                topics: &["Android SDK", "UI Design", "Data Storage", "APIs Integration"],
                duration: "6 weeks",
                icon: "📱",
            },
        ],
    },
    // The C++ track page has no hero slideshow.
    Course {
        track: Track::Cpp,
        title: "C++",
        tagline: "Systems Programming with C++",
        image: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?ixlib=rb-4.0.3",
        slides: &[],
        units: &[
            CourseUnit {
                title: "Introduction to C++",
                topics: &["Getting Started with C++", "Basic Syntax and Structure", "Control Flow"],
                duration: "3h 15m",
                icon: "🚀",
            },
            CourseUnit {
                title: "Object-Oriented Programming",
                topics: &["Classes and Objects", "Inheritance", "Polymorphism"],
                duration: "3h 45m",
                icon: "🧱",
            },
            CourseUnit {
                title: "Advanced C++ Concepts",
                topics: &["Templates", "Exception Handling", "STL"],
                duration: "3h 45m",
                icon: "⚙️",
            },
        ],
    },
];
