use crate::models::{EmoticonKind, Segment, TextStyle};

fn emoticon_at(bytes: &[u8], index: usize) -> Option<EmoticonKind> {
    match bytes.get(index..index + 2)? {
        b":)" => Some(EmoticonKind::Happy),
        b":(" => Some(EmoticonKind::Sad),
        _ => None,
    }
}

/// Split message content into bold body text and emoticons.
///
/// `:)` and `:(` are recognized anywhere, scanning left to right without
/// overlap. Empty text runs are dropped, so concatenating the
/// [`Segment::source_text`] of the result gives back `content`.
pub fn tokenize_content(content: &str) -> Vec<Segment> {
    let bytes = content.as_bytes();
    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut index = 0;

    // Both emoticons are ASCII, so every match sits on a char boundary
    while index < bytes.len() {
        match emoticon_at(bytes, index) {
            Some(kind) => {
                push_text(&mut segments, &content[run_start..index]);
                segments.push(Segment::emoticon(kind));
                index += 2;
                run_start = index;
            }
            None => index += 1,
        }
    }
    push_text(&mut segments, &content[run_start..]);

    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::text(text, TextStyle::BoldBody));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(segments: &[Segment]) -> String {
        segments.iter().map(Segment::source_text).collect()
    }

    fn body(text: &str) -> Segment {
        Segment::text(text, TextStyle::BoldBody)
    }

    #[test]
    fn test_plain_text_is_one_segment() {
        assert_eq!(tokenize_content("Hello there"), vec![body("Hello there")]);
    }

    #[test]
    fn test_empty_content_has_no_segments() {
        assert!(tokenize_content("").is_empty());
    }

    #[test]
    fn test_emoticons_between_text() {
        let segments = tokenize_content("Hello :) How are you :(");
        assert_eq!(
            segments,
            vec![
                body("Hello "),
                Segment::emoticon(EmoticonKind::Happy),
                body(" How are you "),
                Segment::emoticon(EmoticonKind::Sad),
            ]
        );
    }

    #[test]
    fn test_adjacent_emoticons_have_no_empty_text() {
        let segments = tokenize_content(":):(:)");
        assert_eq!(
            segments,
            vec![
                Segment::emoticon(EmoticonKind::Happy),
                Segment::emoticon(EmoticonKind::Sad),
                Segment::emoticon(EmoticonKind::Happy),
            ]
        );
    }

    #[test]
    fn test_no_word_boundary_needed() {
        let segments = tokenize_content("smile:)wide");
        assert_eq!(
            segments,
            vec![body("smile"), Segment::emoticon(EmoticonKind::Happy), body("wide")]
        );
    }

    #[test]
    fn test_extra_colons_stay_text() {
        assert_eq!(
            tokenize_content("::)"),
            vec![body(":"), Segment::emoticon(EmoticonKind::Happy)]
        );
        assert_eq!(
            tokenize_content(":)("),
            vec![Segment::emoticon(EmoticonKind::Happy), body("(")]
        );
        assert_eq!(tokenize_content("a:b:"), vec![body("a:b:")]);
    }

    #[test]
    fn test_multibyte_text_around_emoticons() {
        let segments = tokenize_content("café:(日本");
        assert_eq!(
            segments,
            vec![body("café"), Segment::emoticon(EmoticonKind::Sad), body("日本")]
        );
    }

    #[test]
    fn test_round_trip_reconstructs_content() {
        let samples = [
            "",
            ":)",
            "Hello :) there",
            "Great :(",
            "::)):((",
            " leading and trailing ",
            "emoji 😀 :) mix :( 🎉",
            ":",
            "(:",
        ];
        for sample in samples {
            assert_eq!(rebuild(&tokenize_content(sample)), sample, "{sample:?}");
        }
    }
}
