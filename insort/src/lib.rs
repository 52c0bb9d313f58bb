//! # insort
//!
//! Insertion sort via an ordered linked list, as a library and a tiny CLI.
//! Integers are inserted one at a time into a list kept in ascending order,
//! then the list is traversed once to print the sorted sequence.
//!
//! ## Modules
//!
//! - [`linked`]: the list as a uniquely-owned `Box` chain with iterative drop
//! - [`indexed`]: the same list over an index arena, with fallible insertion
//! - [`output`]: the space-terminated output line format
//!
//! Two realizations of one structure are kept on purpose: the owned chain
//! shows teardown by ownership, the arena shows teardown by dropping the
//! backing store plus an allocation-failure path that is an error value
//! rather than an abort.
//!
//! ## Example
//!
//! ```
//! assert_eq!(insort::sorted_line(["3", "1", "2"])?, "1 2 3 \n");
//! assert_eq!(insort::sorted_line::<_, &str>([])?, "\n");
//! # Ok::<(), insort_common::AllocError>(())
//! ```

pub mod indexed;
pub mod linked;
pub mod output;

pub use indexed::ArenaSortedList;
pub use insort_common::AllocError;
pub use linked::SortedList;

use insort_common::numeric::try_leading_i64;

/// Parses each argument as a leading-prefix integer, inserts it into a
/// sorted list, and renders the final line.
///
/// Arguments are processed in order; malformed ones parse as `0` (see
/// [`insort_common::numeric`]), with a `warn`-level log line so the quirk is
/// visible on stderr. On allocation failure the error propagates, the
/// partially-built list is dropped (releasing every node), and nothing is
/// rendered.
///
/// # Example
///
/// ```
/// let rendered = insort::sorted_line(["5", "5", "1"])?;
/// assert_eq!(rendered, "1 5 5 \n");
/// # Ok::<(), insort_common::AllocError>(())
/// ```
pub fn sorted_line<I, A>(args: I) -> Result<String, AllocError>
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    let mut list = ArenaSortedList::new();
    for arg in args {
        let arg = arg.as_ref();
        let value = match try_leading_i64(arg) {
            Some(value) => value,
            None => {
                // atoi behavior, kept on purpose: junk counts as zero.
                log::warn!("argument {arg:?} has no leading integer, using 0");
                0
            }
        };
        log::debug!("inserting {value} (from {arg:?})");
        list.try_insert(value)?;
    }
    Ok(output::line(list.iter()))
}

#[cfg(test)]
mod tests {
    use super::sorted_line;

    #[test]
    fn test_no_arguments_prints_bare_newline() {
        assert_eq!(sorted_line::<_, &str>([]).unwrap(), "\n");
    }

    #[test]
    fn test_arguments_come_out_sorted() {
        assert_eq!(sorted_line(["3", "1", "2"]).unwrap(), "1 2 3 \n");
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(sorted_line(["5", "5", "1"]).unwrap(), "1 5 5 \n");
    }

    #[test]
    fn test_negative_arguments() {
        assert_eq!(sorted_line(["-2", "0", "-5"]).unwrap(), "-5 -2 0 \n");
    }

    #[test]
    fn test_non_numeric_argument_becomes_zero() {
        assert_eq!(sorted_line(["abc"]).unwrap(), "0 \n");
        assert_eq!(sorted_line(["abc", "-1", "xyz"]).unwrap(), "-1 0 0 \n");
    }

    #[test]
    fn test_mixed_prefix_arguments() {
        assert_eq!(sorted_line(["12abc", "  4", "+3"]).unwrap(), "3 4 12 \n");
    }

    #[test]
    fn test_line_is_sorted_permutation_of_parsed_input() {
        let args = ["10", "-4", "0", "10", "3", "junk", "-4"];
        let rendered = sorted_line(args).unwrap();

        let mut parsed: Vec<i64> = args
            .iter()
            .map(|a| insort_common::numeric::leading_i64(a))
            .collect();
        parsed.sort();
        assert_eq!(rendered, super::output::line(parsed));
    }
}
