//! The value stored in a [`CourseIndex`][crate::index::CourseIndex].

/// A single course: its identifying number, its display name, and the numbers of the courses
/// that must be taken before it.
///
/// A `CourseRecord` is immutable once built. Prerequisites are kept exactly as given, in the
/// order given, and are not checked against any other record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseRecord {
    number: String,
    name: String,
    prerequisites: Vec<String>,
}

impl CourseRecord {
    /// Builds a record from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::CourseRecord;
    ///
    /// let course = CourseRecord::new("CS201", "Data Structures", ["CS101"]);
    ///
    /// assert_eq!(course.number(), "CS201");
    /// assert_eq!(course.prerequisites(), ["CS101"]);
    /// ```
    pub fn new<N, M, I, P>(number: N, name: M, prerequisites: I) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    /// The course number. This is the key the index orders by.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The course name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every prerequisite entry as stored, including empty ones.
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }
}
