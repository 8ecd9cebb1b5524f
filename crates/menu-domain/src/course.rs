//! Course
//!
//! The three fixed menu categories and the home-screen filter over them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Menu category a dish belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Course {
    Breakfast,
    /// Default course for new dishes
    #[default]
    Mains,
    Desserts,
}

/// Raised when a course label is not one of the fixed courses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course: {0:?}")]
pub struct UnknownCourse(pub String);

impl Course {
    /// All courses in display order
    pub const ALL: [Course; 3] = [Course::Breakfast, Course::Mains, Course::Desserts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Breakfast => "Breakfast",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }

    /// Position in `Course::ALL`
    pub fn index(&self) -> usize {
        match self {
            Course::Breakfast => 0,
            Course::Mains => 1,
            Course::Desserts => 2,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Breakfast" => Ok(Course::Breakfast),
            "Mains" => Ok(Course::Mains),
            "Desserts" => Ok(Course::Desserts),
            other => Err(UnknownCourse(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Course {
    type Error = UnknownCourse;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Course {
    type Error = UnknownCourse;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Course> for &'static str {
    fn from(course: Course) -> Self {
        course.as_str()
    }
}

/// Home-screen tab: every course, or a single one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// Tabs in display order
    pub const TABS: [CourseFilter; 4] = [
        CourseFilter::All,
        CourseFilter::Only(Course::Breakfast),
        CourseFilter::Only(Course::Mains),
        CourseFilter::Only(Course::Desserts),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All",
            CourseFilter::Only(course) => course.as_str(),
        }
    }

    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(only) => *only == course,
        }
    }
}
