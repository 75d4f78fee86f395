use std::sync::Once;

use quickcheck::{Arbitrary, Gen};
use tracing_subscriber::EnvFilter;

mod index;

static LOGGING: Once = Once::new();

/// Installs a test-writer subscriber once, honouring `RUST_LOG` (default `warn`).
pub(crate) fn init_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A non-empty course number drawn from a small pool so that duplicates and shared prefixes
/// show up often. Levels aren't zero padded, so ordinal order differs from numeric order
/// (`"CS10" < "CS2"`).
#[derive(Clone, Debug)]
pub(crate) struct CourseNumber(pub(crate) String);

impl Arbitrary for CourseNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let dept = g.choose(&["CS", "CSCI", "MATH", "cs", "Z"]).unwrap();
        let level = u8::arbitrary(g) % 32;
        Self(format!("{}{}", dept, level))
    }
}

/// An enum for the various kinds of "things" to do to
/// the course index in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op {
    /// Insert a course with this number
    Insert(CourseNumber),
    /// Look the number up
    Lookup(CourseNumber),
    /// Compare enumeration against the model
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(CourseNumber::arbitrary(g)),
            1 => Op::Lookup(CourseNumber::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
