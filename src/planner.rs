//! The interactive menu that drives a [`CourseIndex`].
//!
//! A session reads one answer per line from its input and writes prompts and results to its
//! output, so it runs just as well against a terminal as against in-memory buffers.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::PlannerError;
use crate::index::CourseIndex;
use crate::loader;

const MENU: &str = "  1. Load Data Structures
  2. Print Course List
  3. Print Course
  9. Exit
What would you like to do? ";

/// A menu selection.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Choice {
    Load,
    PrintList,
    PrintCourse,
    Exit,
    Invalid(String),
}

impl Choice {
    fn parse(answer: &str) -> Self {
        match answer {
            "1" => Self::Load,
            "2" => Self::PrintList,
            "3" => Self::PrintCourse,
            "9" => Self::Exit,
            other => Self::Invalid(other.to_owned()),
        }
    }
}

/// Whether the session keeps going after handling a choice.
enum Flow {
    Continue,
    Quit,
}

/// One interactive planner session.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use course_planner::planner::Planner;
///
/// let mut planner = Planner::new(Cursor::new("2\n9\n"), Vec::new());
/// planner.run().unwrap();
///
/// let output = String::from_utf8(planner.into_output()).unwrap();
/// assert!(output.contains("Please load the courses first."));
/// assert!(output.contains("Thank you for using the course planner!"));
/// ```
pub struct Planner<R, W> {
    input: R,
    output: W,
    index: Option<CourseIndex>,
    csv_path: Option<PathBuf>,
    course_id: Option<String>,
}

impl<R: BufRead, W: Write> Planner<R, W> {
    /// A session with nothing loaded that reads answers from `input` and writes to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            index: None,
            csv_path: None,
            course_id: None,
        }
    }

    /// The course file used by the next load instead of prompting for one.
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    /// The course used by the next "Print Course" instead of prompting for one.
    pub fn with_course_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// The currently loaded index, if any load has succeeded.
    pub fn index(&self) -> Option<&CourseIndex> {
        self.index.as_ref()
    }

    /// Gives back the output sink, e.g. to inspect what a session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// [`PlannerError::Io`] if reading input or writing output fails. Problems with the course
    /// data itself are reported to the user and don't end the session.
    pub fn run(&mut self) -> Result<(), PlannerError> {
        writeln!(self.output, "\nWelcome to the course planner!\n")?;

        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                debug!("input ended");
                return Ok(());
            };

            let choice = Choice::parse(&answer);
            debug!(?choice, "menu choice");
            let flow = match choice {
                Choice::Load => self.load()?,
                Choice::PrintList => self.print_list()?,
                Choice::PrintCourse => self.print_course()?,
                Choice::Exit => {
                    writeln!(self.output, "\nThank you for using the course planner!")?;
                    Flow::Quit
                }
                Choice::Invalid(answer) => {
                    writeln!(self.output, "{} is not a valid option\n", answer)?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    fn load(&mut self) -> Result<Flow, PlannerError> {
        let path = match self.csv_path.take() {
            Some(path) => path,
            None => {
                write!(self.output, "Enter the path of the course file to load: ")?;
                self.output.flush()?;
                match self.read_answer()? {
                    Some(path) => PathBuf::from(path),
                    None => return Ok(Flow::Quit),
                }
            }
        };

        let mut index = CourseIndex::new();
        match loader::load_file(&path, &mut index) {
            Ok(count) => {
                info!(count, path = %path.display(), "replacing course index");
                self.index = Some(index);
                writeln!(self.output, "Courses have been loaded.\n")?;
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                writeln!(self.output, "ERROR {}\n", e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn print_list(&mut self) -> Result<Flow, PlannerError> {
        let Some(index) = &self.index else {
            writeln!(self.output, "Please load the courses first.\n")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Here is a sample schedule:")?;
        for course in index {
            writeln!(self.output, "{}, {}", course.number(), course.name())?;
        }
        writeln!(self.output)?;

        Ok(Flow::Continue)
    }

    fn print_course(&mut self) -> Result<Flow, PlannerError> {
        if self.index.is_none() {
            writeln!(self.output, "Please load the courses first.\n")?;
            return Ok(Flow::Continue);
        }

        let course_id = match self.course_id.take() {
            Some(id) => id,
            None => {
                write!(self.output, "\nWhat course do you want to know about? ")?;
                self.output.flush()?;
                match self.read_answer()? {
                    Some(id) => id,
                    None => return Ok(Flow::Quit),
                }
            }
        };
        let course_id = course_id.to_uppercase();

        if let Some(index) = &self.index {
            match index.describe(&course_id) {
                Ok(detail) => writeln!(self.output, "\n{}\n", detail)?,
                Err(e) => writeln!(self.output, "{}\n", e)?,
            }
        }

        Ok(Flow::Continue)
    }

    /// Next non-blank line of input, trimmed. `None` once the input is exhausted.
    fn read_answer(&mut self) -> Result<Option<String>, PlannerError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_owned()));
            }
        }
    }
}
