//! An unbalanced Binary Search Tree of courses keyed by course number.
//!
//! Keys are compared ordinally (byte by byte), so `"CS050" < "CS101" < "CS201"` and
//! `"Z" < "a"`. A key that compares equal to an existing one is routed right, which means
//! duplicates are stored and enumerated but only the earliest one is reachable by lookup.
//!
//! # Examples
//!
//! ```
//! use course_planner::{CourseIndex, CourseRecord, IndexError};
//!
//! let mut index = CourseIndex::new();
//!
//! // Nothing in here yet.
//! assert!(index.find("CS101").is_none());
//!
//! index.insert(CourseRecord::new("CS101", "Intro to CS", Vec::<String>::new())).unwrap();
//! index.insert(CourseRecord::new("CS201", "Data Structures", ["CS101"])).unwrap();
//! index.insert(CourseRecord::new("CS050", "Pre-CS", Vec::<String>::new())).unwrap();
//!
//! // Enumeration is sorted regardless of insertion order.
//! let numbers: Vec<_> = index.iter().map(|c| c.number()).collect();
//! assert_eq!(numbers, ["CS050", "CS101", "CS201"]);
//!
//! assert_eq!(index.describe("CS201").unwrap().prerequisites(), ["CS101"]);
//! assert_eq!(
//!     index.describe("CS999"),
//!     Err(IndexError::KeyNotFound("CS999".to_owned()))
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::course::CourseRecord;
use crate::detail::CourseDetail;
use crate::error::{IndexError, IndexResult};

type Link = Option<Box<Node>>;

struct Node {
    course: CourseRecord,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(course: CourseRecord) -> Box<Self> {
        Box::new(Self {
            course,
            left: None,
            right: None,
        })
    }

    fn key(&self) -> &str {
        self.course.number()
    }
}

/// The ordered course index. Owns every node; nodes are only ever freed all at once, either
/// by [`CourseIndex::clear`] or when the index is dropped.
#[derive(Default)]
pub struct CourseIndex {
    root: Link,
    len: usize,
}

impl CourseIndex {
    /// Generates a new, empty `CourseIndex`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of courses stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted since creation or the last [`clear`][Self::clear].
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a course. It lands left of any node whose key is strictly greater than its own
    /// and right of everything else, so equal keys go right.
    ///
    /// Exactly one node is allocated; existing nodes only ever gain a child.
    ///
    /// # Errors
    ///
    /// [`IndexError::InvalidRecord`] if the course number is empty. The index is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::{CourseIndex, CourseRecord};
    ///
    /// let mut index = CourseIndex::new();
    ///
    /// index.insert(CourseRecord::new("CS101", "Intro to CS", ["MATH100"])).unwrap();
    /// assert_eq!(index.find("CS101").map(|c| c.name()), Some("Intro to CS"));
    ///
    /// assert!(index.insert(CourseRecord::new("", "Nameless", ["CS101"])).is_err());
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn insert(&mut self, course: CourseRecord) -> IndexResult<()> {
        if course.number().is_empty() {
            return Err(IndexError::InvalidRecord(format!(
                "course number is empty (name: {:?})",
                course.name()
            )));
        }

        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if node.key() > course.number() {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        debug!(number = course.number(), depth, "inserting course");
        *slot = Some(Node::new_boxed(course));
        self.len += 1;
        Ok(())
    }

    /// Potentially finds the course with the given number. If several courses share the
    /// number, the one inserted first is returned.
    pub fn find(&self, number: &str) -> Option<&CourseRecord> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            trace!(number, visited = node.key(), "descending");
            current = match number.cmp(node.key()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Looks a course up and returns what's needed to present it.
    ///
    /// # Errors
    ///
    /// [`IndexError::KeyNotFound`], once, when the search runs off the bottom of the tree.
    pub fn describe(&self, number: &str) -> IndexResult<CourseDetail<'_>> {
        match self.find(number) {
            Some(course) => Ok(CourseDetail::new(course)),
            None => {
                debug!(number, "course not found");
                Err(IndexError::KeyNotFound(number.to_owned()))
            }
        }
    }

    /// Iterates over every course in ascending course-number order. Courses with equal numbers
    /// come out in the order they were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::{CourseIndex, CourseRecord};
    ///
    /// let mut index = CourseIndex::new();
    /// for number in ["MATH201", "CS300", "CS101"] {
    ///     index.insert(CourseRecord::new(number, "", Vec::<String>::new())).unwrap();
    /// }
    ///
    /// let numbers: Vec<_> = index.iter().map(|c| c.number()).collect();
    /// assert_eq!(numbers, ["CS101", "CS300", "MATH201"]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Tears the whole tree down and returns how many courses were freed. The index is empty
    /// and usable afterwards.
    pub fn clear(&mut self) -> usize {
        let freed = self.teardown(|_| {});
        debug!(freed, "index cleared");
        freed
    }

    /// Frees every node post-order: a node's left subtree, then its right subtree, then the
    /// node itself. `on_free` sees each course just before its node is released.
    ///
    /// Children are detached before their parent is dropped, so dropping a node never recurses
    /// and arbitrarily deep (degenerate) trees are fine.
    fn teardown(&mut self, mut on_free: impl FnMut(&CourseRecord)) -> usize {
        let mut freed = 0;
        let mut stack: Vec<(Box<Node>, bool)> = Vec::new();
        stack.extend(self.root.take().map(|n| (n, false)));

        while let Some((mut node, children_done)) = stack.pop() {
            if children_done {
                trace!(number = node.key(), "freeing node");
                on_free(&node.course);
                drop(node);
                freed += 1;
                continue;
            }

            let left = node.left.take();
            let right = node.right.take();
            stack.push((node, true));
            // Pushed right first so the left subtree is popped (and fully freed) first.
            stack.extend(right.map(|n| (n, false)));
            stack.extend(left.map(|n| (n, false)));
        }

        self.len = 0;
        freed
    }
}

impl Drop for CourseIndex {
    fn drop(&mut self) {
        self.teardown(|_| {});
    }
}

impl fmt::Debug for CourseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a CourseIndex {
    type Item = &'a CourseRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<CourseRecord> for CourseIndex {
    /// Inserts each course in turn. Courses with an empty number are skipped; use
    /// [`CourseIndex::insert`] to observe the rejection.
    fn extend<I: IntoIterator<Item = CourseRecord>>(&mut self, iter: I) {
        for course in iter {
            if let Err(e) = self.insert(course) {
                debug!(error = %e, "skipping course");
            }
        }
    }
}

impl FromIterator<CourseRecord> for CourseIndex {
    fn from_iter<I: IntoIterator<Item = CourseRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

/// In-order iterator over a [`CourseIndex`]. Holds the path of nodes whose left subtree has
/// been entered but which haven't been yielded yet.
pub struct Iter<'a> {
    pending: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CourseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.course)
    }
}

impl FusedIterator for Iter<'_> {}
