use proptest::prelude::*;
use veil_core::Text;

proptest! {
    #[test]
    fn char_and_byte_offsets_agree_with_std(s in "\\PC{0,64}") {
        let text = Text::new(&s);
        prop_assert_eq!(text.char_len(), s.chars().count());

        for (char_idx, (byte_idx, _)) in s.char_indices().enumerate() {
            prop_assert_eq!(text.byte_offset(char_idx), Some(byte_idx));
            prop_assert_eq!(text.char_offset(byte_idx), Some(char_idx));
        }
        prop_assert_eq!(text.byte_offset(text.char_len()), Some(s.len()));
        prop_assert_eq!(text.byte_offset(text.char_len() + 1), None);
    }

    #[test]
    fn slices_match_char_iteration(s in "\\PC{0,64}", a in 0usize..70, b in 0usize..70) {
        let text = Text::new(&s);
        let (start, end) = (a.min(b), a.max(b));
        let expected: Option<String> = if end <= text.char_len() {
            Some(s.chars().skip(start).take(end - start).collect())
        } else {
            None
        };
        prop_assert_eq!(text.slice(start, end).map(str::to_string), expected);
    }
}

#[test]
fn regex_style_byte_ranges_map_to_chars() {
    let s = "Zoë: zoe@exemple.fr";
    let text = Text::new(s);
    let byte_start = s.find("zoe@").unwrap();
    assert_eq!(text.char_range(byte_start, s.len()), Some((5, 19)));
    // Inside the two-byte 'ë'.
    assert_eq!(text.char_offset(3), None);
}
