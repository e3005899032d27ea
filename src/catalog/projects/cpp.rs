use crate::models::{Difficulty, Project};

pub(in crate::catalog) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Library Management System",
        description: "A comprehensive C++ library management system utilizing Object-Oriented Programming principles. Features include book cataloging, member management, lending operations, and fine calculations.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Book catalog with search and filter capabilities",
            "Member registration and profile management",
            "Book lending and return system with due date tracking",
            "Fine calculation based on overdue days",
            "Book reservation system",
        ],
        technologies: &["C++", "File Handling", "OOP", "Data Structures", "STL Containers"],
        concepts: &[
            "Classes and Objects",
            "Inheritance and Polymorphism",
            "File I/O Operations",
            "Vector and Map Containers",
            "Exception Handling",
        ],
        source_url: Some("/c++/library-management.cpp"),
        icon: "📚",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 2,
        title: "Bank Management System",
        description: "A robust C++ banking solution that handles account management, transactions, and statement generation. Implements secure transaction handling, account validation, and maintains detailed transaction history.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Account creation with validation",
            "Multiple account types (Savings, Current, Fixed Deposit)",
            "Secure transaction processing",
            "Transaction history tracking",
            "Interest calculation for different account types",
        ],
        technologies: &["C++", "File Handling", "OOP", "Data Structures", "STL Algorithms"],
        concepts: &[
            "Class Inheritance Hierarchy",
            "Function Overloading",
            "File Stream Operations",
            "Template Classes",
            "Smart Pointers",
        ],
        source_url: Some("/c++/bank-system.cpp"),
        icon: "🏦",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 3,
        title: "Student Grade Management",
        description: "An intuitive C++ grade management system designed for educational institutions. Features comprehensive grade tracking, GPA calculation, and detailed academic performance analysis.",
        difficulty: Difficulty::Beginner,
        category: None,
        duration: None,
        features: &[
            "Student record management with validation",
            "Multiple subject grade entry and modification",
            "Automated GPA and CGPA calculation",
            "Performance analytics and statistics",
            "Semester-wise progress tracking",
        ],
        technologies: &["C++", "Arrays", "Basic File I/O", "STL Vectors", "Algorithms"],
        concepts: &[
            "Basic Classes",
            "Array Operations",
            "File Handling Basics",
            "Sorting Algorithms",
            "Input Validation",
        ],
        source_url: Some("/c++/grade-management.cpp"),
        icon: "📝",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 4,
        title: "Hospital Management System",
        description: "A comprehensive C++ healthcare management system for hospitals and clinics. Manages patient records, doctor schedules, appointments, and billing.",
        difficulty: Difficulty::Advanced,
        category: None,
        duration: None,
        features: &[
            "Patient registration and medical history",
            "Doctor scheduling and availability management",
            "Appointment booking with priority handling",
            "Emergency case management",
            "Automated billing system",
        ],
        technologies: &["C++", "OOP", "Data Structures", "File Handling", "STL Containers"],
        concepts: &[
            "Advanced Class Hierarchies",
            "Priority Queues",
            "Multi-threading",
            "Database Integration",
            "Security Implementation",
        ],
        source_url: Some("/c++/hospital-management.cpp"),
        icon: "🏥",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 5,
        title: "Inventory Management System",
        description: "A sophisticated C++ inventory tracking system for retail and warehouse management. Features real-time stock updates, automated reordering, and comprehensive reporting.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Product catalog management",
            "Stock level tracking and alerts",
            "Automated purchase order generation",
            "Supplier management system",
            "Multiple warehouse support",
        ],
        technologies: &["C++", "Data Structures", "File Handling", "STL", "Algorithms"],
        concepts: &[
            "Binary Search Trees",
            "Hash Tables",
            "Template Programming",
            "Smart Pointers",
            "Design Patterns",
        ],
        source_url: None,
        icon: "📦",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 6,
        title: "Prison Management System",
        description: "A secure C++ prison management system for correctional facilities. Manages inmate records, staff scheduling, cell assignments, and visitor tracking.",
        difficulty: Difficulty::Advanced,
        category: None,
        duration: None,
        features: &[
            "Inmate record management with biometrics",
            "Cell block and assignment management",
            "Staff scheduling and duty rotation",
            "Visitor registration and tracking",
            "Incident reporting system",
        ],
        technologies: &["C++", "Advanced OOP", "Security Algorithms", "File Systems", "STL"],
        concepts: &[
            "Secure Data Handling",
            "Access Control Systems",
            "Complex Data Structures",
            "Multi-level Authentication",
            "Audit Logging",
        ],
        source_url: Some("/c++/prison-management.cpp"),
        icon: "🏢",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 7,
        title: "Unit Converter Application",
        description: "A versatile C++ unit conversion system supporting multiple measurement types. Features an extensible architecture for adding new unit types and conversion formulas.",
        difficulty: Difficulty::Beginner,
        category: None,
        duration: None,
        features: &[
            "Multiple measurement type support",
            "Bi-directional conversion",
            "Custom unit definition capability",
            "Conversion history tracking",
            "Precision control options",
        ],
        technologies: &["C++", "Math Libraries", "STL", "Basic OOP"],
        concepts: &[
            "Function Templates",
            "Operator Overloading",
            "Precision Handling",
            "Error Checking",
            "User Input Validation",
        ],
        source_url: Some("/c++/unit-converter.cpp"),
        icon: "🔄",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 8,
        title: "Learning Management System",
        description: "A comprehensive C++ e-learning platform for managing courses, student progress, and educational resources. Features include course management, student tracking, and assessment tools.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Course content management",
            "Student enrollment system",
            "Progress tracking",
            "Quiz and assessment tools",
            "Assignment submission system",
        ],
        technologies: &["C++", "Data Structures", "File I/O", "Content Management"],
        concepts: &[
            "Object-Oriented Design",
            "Content Organization",
            "User Management",
            "Progress Tracking",
            "Assessment Systems",
        ],
        source_url: Some("/c++/learning-management.cpp"),
        icon: "📚",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 9,
        title: "Temperature Converter",
        description: "A versatile C++ temperature conversion utility supporting multiple temperature scales. Features precise calculations and comprehensive input validation.",
        difficulty: Difficulty::Beginner,
        category: None,
        duration: None,
        features: &[
            "Multiple temperature scale support",
            "Precise conversion calculations",
            "Input validation",
            "Conversion history",
            "Batch conversion capability",
        ],
        technologies: &["C++", "Mathematical Operations", "Input Handling"],
        concepts: &[
            "Numerical Computation",
            "Input Validation",
            "Error Handling",
            "Unit Conversion",
            "User Interface Design",
        ],
        source_url: Some("/c++/temperature-converter.cpp"),
        icon: "🌡️",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 10,
        title: "PDF Store Management",
        description: "A sophisticated C++ digital bookstore management system with features for handling PDF books, user accounts, and purchases.",
        difficulty: Difficulty::Advanced,
        category: None,
        duration: None,
        features: &[
            "Digital book catalog management",
            "User registration and authentication",
            "Book purchase and download system",
            "Rating and review functionality",
            "Download history tracking",
        ],
        technologies: &["C++", "File I/O", "STL Containers", "User Authentication"],
        concepts: &[
            "Classes and Objects",
            "File Handling",
            "Data Structures",
            "User Authentication",
            "Transaction Management",
        ],
        source_url: Some("/c++/pdf-store.cpp"),
        icon: "📱",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 11,
        title: "Airline Reservation System",
        description: "A feature-rich C++ airline booking system with flight management, reservation handling, and passenger services.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Flight scheduling and management",
            "Seat reservation system",
            "Passenger information management",
            "Fare calculation and pricing",
            "Cancellation management",
        ],
        technologies: &["C++", "Data Structures", "File I/O", "Booking Algorithms"],
        concepts: &[
            "Object-Oriented Design",
            "Scheduling Systems",
            "Database Management",
            "Pricing Algorithms",
            "Reservation Handling",
        ],
        source_url: Some("/c++/airline-reservation.cpp"),
        icon: "✈️",
        complexity: None,
        download_codes: &[],
    },
];
