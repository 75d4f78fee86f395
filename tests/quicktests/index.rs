use course_planner::{CourseIndex, CourseRecord, IndexError};
use quickcheck_macros::quickcheck;

use crate::{init_logging, CourseNumber, Op};

/// Each course gets a name unique to its insertion so duplicates can be told apart.
fn course(number: &str, nth: usize) -> CourseRecord {
    CourseRecord::new(number, format!("course #{}", nth), Vec::<String>::new())
}

fn build(numbers: &[CourseNumber]) -> CourseIndex {
    let mut index = CourseIndex::new();
    for (nth, CourseNumber(number)) in numbers.iter().enumerate() {
        index.insert(course(number, nth)).unwrap();
    }
    index
}

/// What enumeration should yield: every inserted course, sorted by number, equal numbers
/// left in insertion order (a stable sort).
fn expected_order(inserted: &[(String, String)]) -> Vec<(String, String)> {
    let mut sorted = inserted.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
}

fn enumerated(index: &CourseIndex) -> Vec<(String, String)> {
    index
        .iter()
        .map(|c| (c.number().to_owned(), c.name().to_owned()))
        .collect()
}

/// Applies a set of operations to an index and to a plain list of what was inserted, checking
/// each lookup and enumeration against the list as it goes.
fn do_ops(ops: &[Op]) -> bool {
    let mut index = CourseIndex::new();
    let mut inserted: Vec<(String, String)> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(CourseNumber(number)) => {
                let course = course(number, inserted.len());
                inserted.push((number.clone(), course.name().to_owned()));
                if index.insert(course).is_err() {
                    return false;
                }
            }
            Op::Lookup(CourseNumber(number)) => {
                // The earliest insert with this number is the one a lookup reaches.
                let expected = inserted.iter().find(|(n, _)| n == number);
                let found = index.describe(number);
                let consistent = match (expected, &found) {
                    (Some((_, name)), Ok(detail)) => detail.name() == name,
                    (None, Err(IndexError::KeyNotFound(missing))) => missing == number,
                    _ => false,
                };
                if !consistent {
                    return false;
                }
            }
            Op::Iter => {
                if enumerated(&index) != expected_order(&inserted) {
                    return false;
                }
            }
        }
    }

    index.len() == inserted.len() && enumerated(&index) == expected_order(&inserted)
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    init_logging();
    do_ops(&ops)
}

#[quickcheck]
fn enumeration_is_sorted(numbers: Vec<CourseNumber>) -> bool {
    let index = build(&numbers);
    let keys: Vec<_> = index.iter().map(CourseRecord::number).collect();

    keys.len() == numbers.len() && keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn enumeration_is_repeatable(numbers: Vec<CourseNumber>) -> bool {
    let index = build(&numbers);

    enumerated(&index) == enumerated(&index)
}

#[quickcheck]
fn contains(numbers: Vec<CourseNumber>) -> bool {
    let index = build(&numbers);

    numbers.iter().enumerate().all(|(nth, CourseNumber(number))| {
        let first = numbers.iter().position(|CourseNumber(n)| n == number);
        let shadowed = first != Some(nth);
        shadowed || index.describe(number).map(|d| d.name().to_owned()) == Ok(format!("course #{}", nth))
    })
}

#[quickcheck]
fn contains_not(numbers: Vec<CourseNumber>, nots: Vec<CourseNumber>) -> bool {
    let index = build(&numbers);

    nots.iter()
        .filter(|CourseNumber(n)| numbers.iter().all(|CourseNumber(m)| m != n))
        .all(|CourseNumber(n)| index.describe(n) == Err(IndexError::KeyNotFound(n.clone())))
}

#[quickcheck]
fn empty_numbers_are_rejected(numbers: Vec<CourseNumber>) -> bool {
    let mut index = build(&numbers);
    let before = enumerated(&index);

    let rejected = matches!(
        index.insert(course("", 0)),
        Err(IndexError::InvalidRecord(_))
    );

    rejected && enumerated(&index) == before
}

#[quickcheck]
fn clear_frees_everything(numbers: Vec<CourseNumber>) -> bool {
    let mut index = build(&numbers);

    index.clear() == numbers.len() && index.is_empty() && index.iter().next().is_none()
}
