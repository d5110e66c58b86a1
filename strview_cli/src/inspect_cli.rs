use crate::lines::Lines;
use clap::ArgMatches;
use log::{debug, LevelFilter};
use std::fs;
use strview_lib::constants::NPOS;
use strview_lib::view::StrView;

const WHITESPACE: &[u8] = b" \t\r";
const COMMENT_MARKER: u8 = b'#';

pub fn inspect_main(matches: ArgMatches) {
    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder().filter_level(log_level).init();

    let path = matches.value_of("file").expect("file not specified");
    let content = fs::read(path).expect("could not read file");
    let file_view = StrView::from(&content);

    let mut total = 0u64;
    let mut blank = 0u64;
    let mut comments = 0u64;
    let mut longest = StrView::new();
    let mut longest_number = 0usize;

    for (number, line) in Lines::over(file_view).enumerate() {
        total += 1;
        let trimmed = trim(line);
        debug!(
            "line {}: {} bytes, {} after trim, hash {:#x}",
            number + 1,
            line.len(),
            trimmed.len(),
            trimmed.hash_value()
        );
        if trimmed.is_empty() {
            blank += 1;
        } else if trimmed.starts_with_byte(COMMENT_MARKER) {
            comments += 1;
        }
        if line.len() > longest.len() {
            longest = line;
            longest_number = number + 1;
        }
    }

    println!(
        "{}: {} bytes, {} line(s) ({} blank, {} comment)",
        path,
        file_view.len(),
        total,
        blank,
        comments
    );
    if !longest.is_empty() {
        println!(
            "longest line {} ({} bytes): {}",
            longest_number,
            longest.len(),
            longest
        );
    }
}

/// strip leading and trailing whitespace, the result aliases the input
fn trim(line: StrView) -> StrView {
    let mut line = line;
    let start = line.find_first_not_of(WHITESPACE, 0);
    if start == NPOS {
        return StrView::new();
    }
    line.remove_prefix(start);
    while !line.is_empty() && StrView::from(WHITESPACE).contains_byte(line.back()) {
        line.remove_suffix(1);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_both_ends() {
        assert_eq!(trim(StrView::from("  hello\t")).as_bytes(), b"hello");
        assert_eq!(trim(StrView::from("hello")).as_bytes(), b"hello");
    }

    #[test]
    fn trim_of_pure_whitespace_is_empty() {
        assert!(trim(StrView::from(" \t\r")).is_empty());
        assert!(trim(StrView::new()).is_empty());
    }

    #[test]
    fn trimmed_line_aliases_the_input() {
        let line = StrView::from("  value  ");
        let trimmed = trim(line);
        assert_eq!(trimmed.as_ptr(), line.as_ptr().wrapping_add(2));
    }
}
