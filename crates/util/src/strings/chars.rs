/// Number of chars (Unicode scalar values) in `s`.
///
/// # Examples
///
/// ```
/// use text_ot_util::strings::char_len;
///
/// assert_eq!(char_len("abc"), 3);
/// assert_eq!(char_len("héllo"), 5);
/// ```
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `pos`.
///
/// `pos == char_len(s)` maps to `s.len()`; anything further is `None`.
pub fn byte_offset(s: &str, pos: usize) -> Option<usize> {
    s.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()))
        .nth(pos)
}

fn clamped_offset(s: &str, pos: usize) -> usize {
    byte_offset(s, pos).unwrap_or(s.len())
}

/// Chars `[start, end)` of `s`. Both bounds are clamped to the string and an
/// inverted range yields `""`.
///
/// # Examples
///
/// ```
/// use text_ot_util::strings::char_slice;
///
/// assert_eq!(char_slice("héllo", 1, 3), "él");
/// assert_eq!(char_slice("abc", 2, 10), "c");
/// assert_eq!(char_slice("abc", 5, 7), "");
/// ```
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let from = clamped_offset(s, start);
    let to = clamped_offset(s, end.max(start));
    &s[from..to]
}

/// Everything from char `start` to the end of `s`.
pub fn char_tail(s: &str, start: usize) -> &str {
    &s[clamped_offset(s, start)..]
}

/// Splits `s` before char `pos` (clamped).
pub fn char_split(s: &str, pos: usize) -> (&str, &str) {
    s.split_at(clamped_offset(s, pos))
}

/// Returns `s` with `insert` spliced in before char `pos` (clamped).
///
/// # Examples
///
/// ```
/// use text_ot_util::strings::char_inject;
///
/// assert_eq!(char_inject("foo", 2, "bar"), "fobaro");
/// ```
pub fn char_inject(s: &str, pos: usize, insert: &str) -> String {
    let (head, tail) = char_split(s, pos);
    let mut out = String::with_capacity(s.len() + insert.len());
    out.push_str(head);
    out.push_str(insert);
    out.push_str(tail);
    out
}

/// Returns `s` without chars `[pos, pos + len)` (clamped).
pub fn char_remove(s: &str, pos: usize, len: usize) -> String {
    let from = clamped_offset(s, pos);
    let to = clamped_offset(s, pos.saturating_add(len));
    let mut out = String::with_capacity(s.len() - (to - from));
    out.push_str(&s[..from]);
    out.push_str(&s[to..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn byte_offset_handles_multibyte() {
        let s = "aé😀b";
        assert_eq!(byte_offset(s, 0), Some(0));
        assert_eq!(byte_offset(s, 1), Some(1));
        assert_eq!(byte_offset(s, 2), Some(3));
        assert_eq!(byte_offset(s, 3), Some(7));
        assert_eq!(byte_offset(s, 4), Some(8));
        assert_eq!(byte_offset(s, 5), None);
    }

    #[test]
    fn slice_and_tail() {
        assert_eq!(char_slice("aé😀b", 1, 3), "é😀");
        assert_eq!(char_slice("abc", 2, 1), "");
        assert_eq!(char_tail("aé😀b", 2), "😀b");
        assert_eq!(char_tail("abc", 9), "");
    }

    #[test]
    fn remove_middle() {
        assert_eq!(char_remove("foo123bar", 3, 3), "foobar");
        assert_eq!(char_remove("é😀b", 1, 1), "éb");
        assert_eq!(char_remove("abc", 2, 10), "ab");
    }

    proptest! {
        #[test]
        fn inject_then_remove_restores(s in "\\PC{0,12}", ins in "\\PC{0,6}", pos in 0usize..16) {
            let pos = pos.min(char_len(&s));
            let injected = char_inject(&s, pos, &ins);
            prop_assert_eq!(char_len(&injected), char_len(&s) + char_len(&ins));
            prop_assert_eq!(char_slice(&injected, pos, pos + char_len(&ins)), ins.as_str());
            prop_assert_eq!(char_remove(&injected, pos, char_len(&ins)), s);
        }

        #[test]
        fn split_concatenates_back(s in "\\PC{0,12}", pos in 0usize..16) {
            let (head, tail) = char_split(&s, pos);
            prop_assert_eq!(format!("{head}{tail}"), s.clone());
            prop_assert_eq!(char_len(head), pos.min(char_len(&s)));
        }
    }
}
