use crate::models::{CodeSample, ProjectCatalog, ProjectDetail};

pub(in crate::catalog) static DETAILS: &[ProjectDetail] = &[
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 1,
        overview: "The Library Management System is a robust C++ application designed to streamline library operations and enhance user experience. It demonstrates advanced object-oriented programming concepts while providing practical functionality for library staff and members.",
        highlights: &[
            "Data Structure Design: custom classes for Books, Members, and Transactions",
            "Database Management: file-based storage with indexing for quick retrieval",
            "Search Algorithms: efficient search using binary search trees",
            "Security: user authentication and role-based access control",
        ],
        implementation: &[CodeSample {
            title: "Class Structure",
            code: r#"class Book {
    private:
        string isbn;
        string title;
        string author;
        bool isAvailable;
        vector<string> reservations;

    public:
        Book(string isbn, string title, string author);
        bool checkOut(string memberId);
        void returnBook();
        void addReservation(string memberId);
};"#,
        }],
        requirements: &[
            "C++17 or later",
            "STL library",
            "File system support",
            "Basic understanding of OOP concepts",
            "Knowledge of data structures",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++17 library-management.cpp -o library_system",
            "Create a data directory for database files",
            "Run the executable: ./library_system",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 2,
        overview: "The Bank Management System is a comprehensive C++ application designed to handle banking operations securely and efficiently.",
        highlights: &[
            "Account Management: Savings, Current and Fixed Deposit accounts",
            "Transaction Processing: deposits, withdrawals, and transfers",
            "Data Security: encrypted, secure data storage",
            "Audit Trail: detailed logs of all transactions",
        ],
        implementation: &[CodeSample {
            title: "Account Class Hierarchy",
            code: r#"class Account {
protected:
    string accountNumber;
    string holderName;
    double balance;
    vector<string> transactions;

public:
    virtual bool withdraw(double amount);
    virtual void deposit(double amount);
    virtual void displayBalance();
};

class SavingsAccount : public Account {
private:
    double interestRate;

public:
    void calculateInterest();
};"#,
        }],
        requirements: &[
            "C++17 or later",
            "STL library",
            "Basic understanding of OOP concepts",
            "Knowledge of banking operations",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++17 bank-system.cpp -o bank_system",
            "Run the executable: ./bank_system",
            "Create an admin account for system management",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 3,
        overview: "The Student Grade Management System helps educational institutions manage student grades and academic performance, with detailed analytics and reporting.",
        highlights: &[
            "Grade Calculation: automated GPA and CGPA calculation",
            "Performance Tracking: semester-wise progress monitoring",
            "Statistical Analysis: grade distribution and performance metrics",
            "Report Generation: detailed academic transcripts",
        ],
        implementation: &[CodeSample {
            title: "Student Class",
            code: r#"class Student {
private:
    string id;
    string name;
    map<string, double> grades;
    double gpa;

public:
    void addGrade(string course, double grade);
    void calculateGPA();
    void displayTranscript();
};"#,
        }],
        requirements: &[
            "C++11 or later",
            "STL library",
            "Basic understanding of GPA calculation",
            "File system support",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++11 grade-management.cpp -o grade_system",
            "Run the executable: ./grade_system",
            "Start entering grades",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 4,
        overview: "The Hospital Management System streamlines healthcare facility operations, applying database management and scheduling to a medical context.",
        highlights: &[
            "Patient Management: complete electronic health records",
            "Appointment System: efficient scheduling and tracking",
            "Staff Management: doctor and nurse scheduling",
            "Department Organization: specialized unit management",
        ],
        implementation: &[CodeSample {
            title: "Patient Management",
            code: r#"class Patient {
private:
    string id;
    string name;
    int age;
    string bloodGroup;
    vector<string> medicalHistory;
    vector<string> prescriptions;
    vector<Appointment> appointments;

public:
    void addMedicalRecord(const string& record);
    void addPrescription(const string& medicine, const string& dosage);
    void scheduleAppointment(const Appointment& apt);
    vector<Appointment> getUpcomingAppointments() const;
};"#,
        }],
        requirements: &[
            "C++17 or later",
            "STL library",
            "File system support",
            "Knowledge of scheduling algorithms",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++17 hospital-management.cpp -o hospital_system",
            "Initialize the patient database",
            "Configure doctor schedules",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 6,
        overview: "The Prison Management System handles prison administration end to end, with a focus on record keeping and security management.",
        highlights: &[
            "Inmate Management: complete inmate records with behavior tracking",
            "Staff Management: staff records and duty assignments",
            "Visitor System: visitor registration and visit tracking",
            "Cell Management: cell block and assignment system",
        ],
        implementation: &[CodeSample {
            title: "Inmate Management",
            code: r#"class Inmate {
private:
    string id;
    string name;
    string crime;
    string sentence;
    string cellBlock;
    int cellNumber;
    vector<string> behaviorRecords;
    bool isReleased;

public:
    void assignCell(const string& block, int number);
    void addBehaviorRecord(const string& record);
    void release();
};"#,
        }],
        requirements: &[
            "C++17 or later",
            "STL library",
            "File system support",
            "Knowledge of record management",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++17 prison-management.cpp -o prison_system",
            "Configure security clearance levels",
            "Initialize the cell block system",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 7,
        overview: "The Unit Converter converts between units of measurement and shows a modular, extensible design.",
        highlights: &[
            "Multiple Unit Types: length, weight, volume and more",
            "Custom Unit Support: user-defined unit definitions",
            "Conversion Chain: multi-step conversion handling",
        ],
        implementation: &[CodeSample {
            title: "Unit Conversion System",
            code: r#"class UnitConverter {
private:
    map<string, map<string, double>> conversionFactors;

public:
    void addConversionFactor(const string& from, const string& to, double factor) {
        conversionFactors[from][to] = factor;
        conversionFactors[to][from] = 1.0 / factor;
    }

    double convert(double value, const string& from, const string& to) {
        if (from == to) return value;
        if (conversionFactors[from].find(to) != conversionFactors[from].end()) {
            return value * conversionFactors[from][to];
        }
        throw runtime_error("Conversion not supported");
    }
};"#,
        }],
        requirements: &["C++11 or later", "STL library", "Basic math knowledge"],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++11 unit-converter.cpp -o unit_conv",
            "Run the executable: ./unit_conv",
            "Select a measurement type and enter values",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 8,
        overview: "The Learning Management System supports online education with course content management and student progress tracking.",
        highlights: &[
            "Course Management: course creation and organization",
            "Student Progress: detailed learning path tracking",
            "Assessment System: quiz and assignment management",
        ],
        implementation: &[CodeSample {
            title: "Course Management",
            code: r#"class Course {
private:
    string id;
    string title;
    vector<Module> modules;
    vector<string> enrolledStudents;
    map<string, vector<Assessment>> assessments;

public:
    void addModule(const Module& module);
    void enrollStudent(const string& studentId);
    void addAssessment(const string& moduleId, const Assessment& assessment);
};"#,
        }],
        requirements: &[
            "C++17 or later",
            "STL library",
            "File system support",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++17 learning-management.cpp -o lms",
            "Run the executable: ./lms",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 9,
        overview: "The Temperature Converter converts between temperature scales with precise numerical calculations and input validation.",
        highlights: &[
            "Multiple Scale Support: Celsius, Fahrenheit, Kelvin",
            "Precision Handling: accurate floating-point calculations",
            "Input Validation: nothing below absolute zero is accepted",
            "History Tracking: conversion history management",
        ],
        implementation: &[CodeSample {
            title: "Input Validation",
            code: r#"class InputValidator {
private:
    const double MIN_ABSOLUTE_TEMP = -273.15; // Celsius

public:
    bool isValidTemperature(double temp, string scale) {
        if (scale == "C") return temp >= MIN_ABSOLUTE_TEMP;
        if (scale == "F") return temp >= (MIN_ABSOLUTE_TEMP * 9.0/5.0 + 32);
        if (scale == "K") return temp >= 0;
        return false;
    }
};"#,
        }],
        requirements: &["C++11 or later", "Basic understanding of temperature scales"],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++11 temperature-converter.cpp -o temp_conv",
            "Run the executable: ./temp_conv",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 10,
        overview: "The PDF Store Management System handles digital book sales and distribution, combining file handling with user management.",
        highlights: &[
            "Book Management: digital book catalog with metadata",
            "User System: accounts with balance and purchase history",
            "Review System: rating and review functionality",
            "Download Tracking: monitors and manages book downloads",
        ],
        implementation: &[],
        requirements: &[
            "C++17 or later",
            "STL library",
            "File system support",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++17 pdf-store.cpp -o pdf_store",
            "Create a data directory for book files",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Cpp,
        id: 11,
        overview: "The Airline Reservation System manages flight bookings and airline operations, built around booking and scheduling logic.",
        highlights: &[
            "Flight Management: flight scheduling and tracking",
            "Reservation System: booking and seat allocation",
            "Passenger Management: detailed passenger records",
            "Fare Calculation: pricing by seat class",
        ],
        implementation: &[CodeSample {
            title: "Flight Management",
            code: r#"class Flight {
private:
    string flightNumber;
    string origin;
    string destination;
    int totalSeats;
    map<string, Seat> seatMap;
    vector<string> passengerList;

public:
    bool checkAvailability(const string& seatClass) const;
    double calculateFare(const string& seatClass) const;
    bool reserveSeat(const string& seatNumber, const string& passengerId);
};"#,
        }],
        requirements: &[
            "C++17 or later",
            "STL library",
            "File system support",
        ],
        setup: &[
            "Download the source file",
            "Compile using g++ -std=c++17 airline-reservation.cpp -o airline_system",
            "Run the executable: ./airline_system",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Oop,
        id: 1,
        overview: "The University Management System puts OOP principles to work on the relationships between the entities of an educational institution.",
        highlights: &[
            "Class Hierarchy: an inheritance structure for the different kinds of users",
            "Polymorphism: dynamic dispatch for the different user roles",
            "Encapsulation: data integrity through access control",
            "Association: relationships between students, courses, and faculty",
        ],
        implementation: &[CodeSample {
            title: "Class Hierarchy",
            code: r#"abstract class Person {
    protected String id;
    protected String name;
    protected String email;

    public abstract void displayInfo();
}

class Student extends Person {
    private List<Course> enrolledCourses;
    private double gpa;

    @Override
    public void displayInfo() { /* ... */ }
}

class Faculty extends Person {
    private List<Course> teachingCourses;
    private String department;

    @Override
    public void displayInfo() { /* ... */ }
}"#,
        }],
        requirements: &[
            "Java Development Kit (JDK) 11 or later",
            "Spring Framework 5.x",
            "MySQL Database",
            "Maven for dependency management",
        ],
        setup: &[
            "Import as a Maven project in your IDE",
            "Configure application.properties with database credentials",
            "Run mvn clean install",
            "Execute the main application class",
        ],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Oop,
        id: 2,
        overview: "The E-Commerce Platform applies OOP principles to a business domain, with a focus on scalability and maintainability.",
        highlights: &[
            "Product Management: hierarchical categorization of products",
            "Shopping Cart: thread-safe cart operations",
            "Order Processing: state pattern for the order lifecycle",
            "Payment Integration: strategy pattern for payment methods",
        ],
        implementation: &[],
        requirements: &[],
        setup: &[],
    },
    ProjectDetail {
        catalog: ProjectCatalog::Oop,
        id: 5,
        overview: "The Smart Home System applies OOP to IoT and home automation: a framework for managing smart devices and automation scenarios.",
        highlights: &[
            "Device Management: abstract factory for device types",
            "Automation Rules: observer pattern for device state changes",
            "Scheduling: command pattern for scheduled actions",
            "Monitoring: decorator pattern for device monitoring",
        ],
        implementation: &[CodeSample {
            title: "Device Interface",
            code: r#"interface Device {
    void turnOn();
    void turnOff();
    boolean isOn();
    String getStatus();
}

class LightDevice implements Device {
    private String name;
    private boolean status;
    private int brightness;

    @Override
    public void turnOn() { status = true; }

    @Override
    public void turnOff() { status = false; }
}"#,
        }],
        requirements: &[
            "Java Development Kit (JDK) 11 or later",
            "Spring Framework",
            "MQTT Broker",
            "MongoDB Database",
        ],
        setup: &[
            "Configure MQTT broker settings",
            "Set up the MongoDB database",
            "Configure application properties",
            "Run the application and connect devices",
        ],
    },
];
