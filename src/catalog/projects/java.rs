use crate::models::{Difficulty, Project};

pub(in crate::catalog) static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Advanced E-Commerce Platform",
        description: "A comprehensive Java-based e-commerce system using Spring Boot and Microservices architecture. Features include product management, user authentication, shopping cart, order processing, and payment integration.",
        difficulty: Difficulty::Advanced,
        category: None,
        duration: None,
        features: &[
            "Microservices Architecture",
            "RESTful API Implementation",
            "JWT Authentication",
            "Payment Gateway Integration",
            "Order Management System",
            "Shopping Cart Management",
        ],
        technologies: &["Java", "Spring Boot", "Spring Security", "JPA/Hibernate", "MySQL", "Redis"],
        concepts: &["Microservices", "REST APIs", "Database Design", "Security", "Caching"],
        source_url: None,
        icon: "🛍️",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 2,
        title: "Hospital Management System",
        description: "An enterprise-level hospital management system built with Java EE. Manages patient records, appointments, medical staff, and hospital resources with a focus on security and efficiency.",
        difficulty: Difficulty::Advanced,
        category: None,
        duration: None,
        features: &[
            "Patient Record Management",
            "Appointment Scheduling",
            "Doctor Management",
            "Pharmacy Integration",
            "Billing System",
            "Medical History Tracking",
        ],
        technologies: &["Java EE", "JSP", "Servlets", "JDBC", "Oracle Database"],
        concepts: &[
            "Enterprise Architecture",
            "Database Management",
            "Session Handling",
            "Transaction Management",
            "Security Implementation",
        ],
        source_url: None,
        icon: "🏥",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 3,
        title: "Smart Banking Application",
        description: "A secure banking application with features for account management, transactions, and financial analysis. Implements advanced security measures and real-time transaction processing.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Account Management",
            "Fund Transfer",
            "Transaction History",
            "Bill Payments",
            "Loan Management",
            "Financial Reports",
        ],
        technologies: &["Java", "Spring Framework", "Hibernate", "PostgreSQL", "Spring Security"],
        concepts: &[
            "Financial Systems",
            "Security Protocols",
            "Transaction Processing",
            "Data Encryption",
            "Audit Logging",
        ],
        source_url: None,
        icon: "🏦",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 4,
        title: "Learning Management System",
        description: "An educational platform built with Java and Spring Boot, featuring course management, student progress tracking, and interactive learning tools.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Course Management",
            "Student Enrollment",
            "Assignment Submission",
            "Progress Tracking",
            "Discussion Forums",
            "Virtual Classroom",
        ],
        technologies: &["Java", "Spring Boot", "Thymeleaf", "MongoDB", "WebSocket"],
        concepts: &[
            "Educational Software",
            "Content Management",
            "Real-time Communication",
            "Document Management",
            "User Tracking",
        ],
        source_url: None,
        icon: "📚",
        complexity: None,
        download_codes: &[],
    },
    Project {
        id: 5,
        title: "Inventory Control System",
        description: "A real-time inventory management system with features for stock tracking, supplier management, and automated ordering using Java and modern frameworks.",
        difficulty: Difficulty::Intermediate,
        category: None,
        duration: None,
        features: &[
            "Stock Management",
            "Supplier Management",
            "Order Processing",
            "Warehouse Management",
            "Barcode Integration",
            "Analytics Dashboard",
        ],
        technologies: &["Java", "Spring Boot", "JPA", "MySQL", "Apache POI"],
        concepts: &[
            "Inventory Control",
            "Supply Chain",
            "Report Generation",
            "Data Analysis",
            "Process Automation",
        ],
        source_url: None,
        icon: "📦",
        complexity: None,
        download_codes: &[],
    },
];
