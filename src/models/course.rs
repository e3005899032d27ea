use serde::Serialize;

use super::Track;

/// Landing information for one track
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub track: Track,
    pub title: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub slides: &'static [Slide],
    pub units: &'static [CourseUnit],
}

#[derive(Debug, Clone, Serialize)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A block of the curriculum overview shown on a track page
#[derive(Debug, Clone, Serialize)]
pub struct CourseUnit {
    pub title: &'static str,
    pub topics: &'static [&'static str],
    pub duration: &'static str,
    pub icon: &'static str,
}

/// An ordered unit of a course with its own lesson page
#[derive(Debug, Clone, Serialize)]
pub struct CourseModule {
    pub title: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
    pub video_url: &'static str,
    pub duration: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub slug: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub samples: &'static [CodeSample],
    pub exercises: &'static [LessonExercise],
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeSample {
    pub title: &'static str,
    pub code: &'static str,
}

/// A practice prompt with a static solution; nothing is executed.
#[derive(Debug, Clone, Serialize)]
pub struct LessonExercise {
    pub title: &'static str,
    pub prompt: &'static str,
    pub template: &'static str,
    pub solution: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PythonLesson {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub video_url: &'static str,
    pub questions: &'static [QuizQuestion],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [&'static str],
    #[serde(skip)]
    pub correct_answer: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}
