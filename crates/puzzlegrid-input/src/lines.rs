//! Ordered collections of input lines.

use std::{io::BufRead, ops::Index, slice};

use rayon::prelude::*;

use crate::InputError;

/// An ordered, read-only collection of text lines.
///
/// `Lines` is the entry point of the parsing pipeline: it is built once from
/// already-split strings, raw text or a reader, and then segmented or
/// converted into rasters and grids. Operations that derive new collections
/// (such as [`Lines::split_by_blank_line`]) never modify the original.
///
/// A line is *blank* if it is empty after trimming whitespace.
///
/// # Examples
///
/// ```
/// use puzzlegrid_input::Lines;
///
/// let lines = Lines::from_text("a\nb\n\nc\n");
/// assert_eq!(lines.len(), 4);
///
/// let sections = lines.split_by_blank_line();
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].lines(), ["a", "b"]);
/// assert_eq!(sections[1].lines(), ["c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Lines {
    lines: Vec<String>,
}

impl Lines {
    /// Creates a collection from already-split lines.
    ///
    /// The lines are copied, so later changes to the caller's data do not
    /// affect the collection.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits raw text on `\n` or `\r\n` line endings.
    ///
    /// A trailing line ending does not produce an extra empty line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Reads every line from `reader`.
    ///
    /// The reader is drained to the end before the collection is returned and
    /// is dropped on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] if reading fails. No partially-read
    /// collection is returned in that case.
    pub fn from_reader<R>(reader: R) -> Result<Self, InputError>
    where
        R: BufRead,
    {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.inspect_err(|err| {
                log::debug!("read failed after {} lines: {err}", lines.len());
            })?;
            log::trace!("read line {}: {} bytes", lines.len(), line.len());
            lines.push(line);
        }
        log::debug!("read {} lines", lines.len());
        Ok(Self { lines })
    }

    /// Returns the lines as a read-only slice.
    #[must_use]
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns an iterator over the lines.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Returns a parallel iterator over the lines.
    #[inline]
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, String> {
        self.lines.par_iter()
    }

    /// Returns the number of lines.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no lines.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the collection and returns the lines.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> Vec<String> {
        self.lines
    }

    /// Splits the collection into sections separated by blank lines.
    ///
    /// Every maximal run of blank lines acts as one separator. Blank lines
    /// never appear in the result, and leading or trailing runs do not
    /// produce empty sections.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlegrid_input::Lines;
    ///
    /// let lines = Lines::from_lines(["a", "b", "", "c", "", "", "d"]);
    /// let sections = lines.split_by_blank_line();
    /// assert_eq!(sections.len(), 3);
    /// assert_eq!(sections[0].lines(), ["a", "b"]);
    /// assert_eq!(sections[1].lines(), ["c"]);
    /// assert_eq!(sections[2].lines(), ["d"]);
    /// ```
    #[must_use]
    pub fn split_by_blank_line(&self) -> Vec<Lines> {
        let mut sections = Vec::new();
        let mut current = Vec::new();

        for line in &self.lines {
            if is_blank(line) {
                if !current.is_empty() {
                    sections.push(Self {
                        lines: std::mem::take(&mut current),
                    });
                }
            } else {
                current.push(line.clone());
            }
        }

        if !current.is_empty() {
            sections.push(Self { lines: current });
        }

        log::debug!(
            "split {} lines into {} sections",
            self.lines.len(),
            sections.len()
        );
        sections
    }

    /// Concatenates all lines without a separator.
    ///
    /// Line boundaries are lost; this is meant for inputs where only the
    /// character content matters.
    #[must_use]
    pub fn joined(&self) -> String {
        self.lines.concat()
    }
}

/// Returns `true` if `line` contains only whitespace.
#[must_use]
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

impl From<&str> for Lines {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<Vec<String>> for Lines {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl FromIterator<String> for Lines {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Lines {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lines {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Lines {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_lines_copies_input() {
        let mut source = vec!["a".to_owned(), "b".to_owned()];
        let lines = Lines::from_lines(source.clone());
        source.push("c".to_owned());
        assert_eq!(lines.lines(), ["a", "b"]);
        assert_eq!(&lines[1], "b");
    }

    #[test]
    fn test_std_conversions() {
        let from_text = Lines::from("a\nb");
        let from_vec = Lines::from(vec!["a".to_owned(), "b".to_owned()]);
        let collected = ["a", "b"].map(str::to_owned).into_iter().collect::<Lines>();
        assert_eq!(from_text, from_vec);
        assert_eq!(from_vec, collected);
        assert_eq!(collected.into_inner(), ["a", "b"]);
        assert_eq!((&from_text).into_iter().count(), 2);
    }

    #[test]
    fn test_from_text_handles_line_endings() {
        let lines = Lines::from_text("ab\r\ncd\nef\n");
        assert_eq!(lines.lines(), ["ab", "cd", "ef"]);
        assert!(Lines::from_text("").is_empty());
    }

    #[test]
    fn test_from_reader_drains_source() {
        let lines = Lines::from_reader(Cursor::new("x\n\ny\n")).unwrap();
        assert_eq!(lines.lines(), ["x", "", "y"]);
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk on fire"));
            }
            self.served = true;
            let data = b"first\nsec";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_from_reader_reports_io_failure() {
        let reader = BufReader::new(FailingReader { served: false });
        let err = Lines::from_reader(reader).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_split_by_blank_line_scenario() {
        let lines = Lines::from_lines(["a", "b", "", "c", "", "", "d"]);
        let sections = lines.split_by_blank_line();
        let sections = sections
            .iter()
            .map(|section| section.lines().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(sections, [vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn test_split_ignores_leading_and_trailing_blank_runs() {
        let lines = Lines::from_lines(["", "  ", "a", "\t", "b", "", ""]);
        let sections = lines.split_by_blank_line();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].lines(), ["a"]);
        assert_eq!(sections[1].lines(), ["b"]);

        assert!(Lines::from_lines(["", " "]).split_by_blank_line().is_empty());
        assert!(Lines::default().split_by_blank_line().is_empty());
    }

    #[test]
    fn test_split_keeps_original_intact() {
        let lines = Lines::from_lines(["a", "", "b"]);
        let _ = lines.split_by_blank_line();
        assert_eq!(lines.lines(), ["a", "", "b"]);
    }

    #[test]
    fn test_joined_drops_line_boundaries() {
        let lines = Lines::from_lines(["mul(2,", "3)", "", "do()"]);
        assert_eq!(lines.joined(), "mul(2,3)do()");
        assert_eq!(Lines::default().joined(), "");
    }

    #[test]
    fn test_parallel_iteration_sees_every_line() {
        let lines = Lines::from_lines(["1", "22", "333"]);
        let total: usize = lines.par_iter().map(String::len).sum();
        assert_eq!(total, 6);
        assert_eq!(lines.iter().count(), 3);
    }

    proptest! {
        #[test]
        fn prop_split_then_concat_keeps_non_blank_lines(
            lines in proptest::collection::vec(
                prop_oneof![Just(String::new()), Just(" ".to_owned()), "[a-z]{1,4}"],
                0..20,
            )
        ) {
            let input = Lines::from_lines(lines.clone());
            let rejoined = input
                .split_by_blank_line()
                .into_iter()
                .flatten()
                .collect::<Vec<_>>();
            let expected = lines
                .into_iter()
                .filter(|line| !is_blank(line))
                .collect::<Vec<_>>();
            prop_assert_eq!(rejoined, expected);
        }

        #[test]
        fn prop_sections_are_never_empty(
            lines in proptest::collection::vec(prop_oneof![Just(""), Just("x")], 0..20)
        ) {
            let sections = Lines::from_lines(lines).split_by_blank_line();
            prop_assert!(sections.iter().all(|section| !section.is_empty()));
        }
    }
}
