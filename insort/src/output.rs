//! # Line Rendering
//!
//! The single source of truth for the program's output format: every value's
//! decimal form followed by one space, then a trailing newline. An empty
//! sequence renders as just the newline.

use std::fmt::Display;

/// Renders `values` as one space-terminated line.
///
/// # Example
///
/// ```
/// use insort::output::line;
///
/// assert_eq!(line([1, 2, 3]), "1 2 3 \n");
/// assert_eq!(line::<i64>([]), "\n");
/// ```
pub fn line<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    let mut rendered = String::new();
    for value in values {
        rendered.push_str(&value.to_string());
        rendered.push(' ');
    }
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::line;

    #[test]
    fn test_values_are_space_terminated() {
        assert_eq!(line([1, 2, 3]), "1 2 3 \n");
        assert_eq!(line([42]), "42 \n");
    }

    #[test]
    fn test_empty_sequence_is_just_a_newline() {
        assert_eq!(line::<i64>([]), "\n");
    }

    #[test]
    fn test_negative_values_render_with_sign() {
        assert_eq!(line([-5, -2, 0]), "-5 -2 0 \n");
    }

    #[test]
    fn test_borrowed_values_render_the_same() {
        let values = vec![7_i64, 8];
        assert_eq!(line(values.iter()), "7 8 \n");
    }
}
