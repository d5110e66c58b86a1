use strview_lib::constants::NPOS;
use strview_lib::view::StrView;

/// Iterator over the lines of a view as sub-views of the same storage.
///
/// The newline terminator is not part of a line. A trailing newline yields a
/// final empty line, matching the byte content exactly.
pub struct Lines<'a> {
    rest: StrView<'a>,
    done: bool,
}

impl<'a> Lines<'a> {
    pub fn over(view: StrView<'a>) -> Lines<'a> {
        Lines {
            rest: view,
            done: false,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = StrView<'a>;

    fn next(&mut self) -> Option<StrView<'a>> {
        if self.done {
            return None;
        }
        let pos = self.rest.find_byte(b'\n', 0);
        if pos == NPOS {
            self.done = true;
            return Some(self.rest);
        }
        let line = self.rest.substr(0, pos).expect("line bounds");
        self.rest.remove_prefix(pos + 1);
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines_without_copying() {
        let content = b"one\ntwo\nthree";
        let view = StrView::from(&content[..]);
        let lines: Vec<StrView> = Lines::over(view).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_bytes(), b"one");
        assert_eq!(lines[1].as_bytes(), b"two");
        assert_eq!(lines[2].as_bytes(), b"three");
        assert_eq!(lines[1].as_ptr(), view.as_ptr().wrapping_add(4));
    }

    #[test]
    fn trailing_newline_yields_a_final_empty_line() {
        let view = StrView::from("one\n");
        let lines: Vec<StrView> = Lines::over(view).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn empty_input_is_a_single_empty_line() {
        let lines: Vec<StrView> = Lines::over(StrView::new()).collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }
}
