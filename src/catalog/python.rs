use crate::models::{PythonLesson, QuizQuestion};

pub(super) static LESSONS: &[PythonLesson] = &[
    PythonLesson {
        id: "python-basics",
        title: "Python Basics",
        content: "# Introduction to Python
Python is a high-level, interpreted programming language that emphasizes code readability.

## Key Concepts
- Variables and Data Types
- Control Flow
- Functions
- Object-Oriented Programming",
        video_url: "https://www.youtube.com/embed/rfscVS0vtbw",
        questions: &[QuizQuestion {
            id: 1,
            question: "What is the output of print('Hello ' + 'World')?",
            options: &["Hello World", "HelloWorld", "Error", "None of the above"],
            correct_answer: 0,
        }],
    },
    PythonLesson {
        id: "data-structures",
        title: "Data Structures in Python",
        content: "# Python Data Structures
Learn about fundamental data structures in Python.

## Topics Covered
- Lists
- Tuples
- Dictionaries
- Sets",
        video_url: "https://www.youtube.com/embed/R-HLU9Fl5ug",
        questions: &[QuizQuestion {
            id: 1,
            question: "Which of these is mutable?",
            options: &["Tuple", "List", "String", "None of the above"],
            correct_answer: 1,
        }],
    },
];
