//! The payload produced by a successful lookup.

use std::fmt;

use crate::course::CourseRecord;

/// A borrowed view of one course, ready to be presented: number, name, and the non-empty
/// prerequisite entries in the order they were stored.
///
/// # Examples
///
/// ```
/// use course_planner::{CourseIndex, CourseRecord};
///
/// let mut index = CourseIndex::new();
/// index.insert(CourseRecord::new("CS201", "Data Structures", ["CS101"])).unwrap();
///
/// let detail = index.describe("CS201").unwrap();
/// assert_eq!(detail.prerequisite_count(), 1);
/// assert_eq!(
///     detail.to_string(),
///     "CS201, Data Structures\nPrerequisite(s) needed (1): CS101",
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetail<'a> {
    number: &'a str,
    name: &'a str,
    prerequisites: Vec<&'a str>,
}

impl<'a> CourseDetail<'a> {
    pub(crate) fn new(course: &'a CourseRecord) -> Self {
        Self {
            number: course.number(),
            name: course.name(),
            prerequisites: course
                .prerequisites()
                .iter()
                .map(String::as_str)
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// The course number.
    pub fn number(&self) -> &'a str {
        self.number
    }

    /// The course name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Non-empty prerequisite numbers, in stored order.
    pub fn prerequisites(&self) -> &[&'a str] {
        &self.prerequisites
    }

    /// How many non-empty prerequisites the course lists.
    pub fn prerequisite_count(&self) -> usize {
        self.prerequisites.len()
    }

    /// Whether the course lists any prerequisite at all.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

impl fmt::Display for CourseDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.number, self.name)?;
        if self.prerequisites.is_empty() {
            return write!(f, "No prerequisites required for this course.");
        }

        write!(
            f,
            "Prerequisite(s) needed ({}): {}",
            self.prerequisites.len(),
            self.prerequisites.join(", ")
        )
    }
}
