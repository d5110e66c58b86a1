pub mod constants;
pub mod error;
pub mod view;

#[cfg(test)]
mod tests {
    use crate::constants::NPOS;
    use crate::view::StrView;

    #[test]
    fn find_then_substr_yields_the_needle() {
        let sv = StrView::from("hello world");
        let pos = sv.find("world", 0);
        assert_ne!(pos, NPOS);
        assert_eq!(sv.substr(pos, 5).unwrap(), StrView::from("world"));
    }
}
