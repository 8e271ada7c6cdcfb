//! Paragraph segmentation.
//!
//! Honors explicit paragraph breaks when the text already has them;
//! otherwise groups sentences into chunks of up to three.

use super::text::split_sentences;

/// Sentences per synthesized paragraph.
const SENTENCES_PER_PARAGRAPH: usize = 3;

pub struct ParagraphSegmenter;

impl Default for ParagraphSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParagraphSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Splits `text` into paragraphs.
    ///
    /// Preference order: existing double-newline breaks, then single-newline
    /// breaks (only when they yield more than one segment), then synthesized
    /// groups of up to three sentences. Short texts (three sentences or
    /// fewer) come back as a single paragraph.
    pub fn segment(&self, text: &str) -> Vec<String> {
        if text.contains("\n\n") {
            let paragraphs: Vec<String> = text
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            if !paragraphs.is_empty() {
                return paragraphs;
            }
        }

        if text.contains('\n') {
            let paragraphs: Vec<String> = text
                .split('\n')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            if paragraphs.len() > 1 {
                return paragraphs;
            }
        }

        let sentences: Vec<&str> = split_sentences(text.trim())
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();

        if sentences.len() <= SENTENCES_PER_PARAGRAPH {
            return vec![text.to_string()];
        }

        sentences
            .chunks(SENTENCES_PER_PARAGRAPH)
            .map(|chunk| chunk.join(" "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_newline_breaks_win() {
        let segmenter = ParagraphSegmenter::new();

        let text = "First paragraph here.\n\n  Second paragraph here.  \n\nThird one.";
        let paragraphs = segmenter.segment(text);

        assert_eq!(
            paragraphs,
            vec![
                "First paragraph here.",
                "Second paragraph here.",
                "Third one."
            ]
        );
    }

    #[test]
    fn test_single_newlines_used_when_present() {
        let segmenter = ParagraphSegmenter::new();

        let text = "Line one stands alone.\nLine two stands alone.\nLine three stands alone.";
        let paragraphs = segmenter.segment(text);

        assert_eq!(paragraphs.len(), 3);
    }

    #[test]
    fn test_short_text_single_paragraph() {
        let segmenter = ParagraphSegmenter::new();

        let text = "One sentence. Two sentences. Three sentences.";
        assert_eq!(segmenter.segment(text), vec![text.to_string()]);
    }

    #[test]
    fn test_ten_sentences_chunked_3_3_3_1() {
        let segmenter = ParagraphSegmenter::new();

        let text = (1..=10)
            .map(|i| format!("This is sentence number {}.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let paragraphs = segmenter.segment(&text);

        assert_eq!(paragraphs.len(), 4);
        let sizes: Vec<usize> = paragraphs
            .iter()
            .map(|p| p.matches('.').count())
            .collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
    }

    #[test]
    fn test_chunks_preserve_sentence_order() {
        let segmenter = ParagraphSegmenter::new();

        let text = "Alpha first. Beta second. Gamma third. Delta fourth. Epsilon fifth.";
        let paragraphs = segmenter.segment(text);

        assert_eq!(paragraphs[0], "Alpha first. Beta second. Gamma third.");
        assert_eq!(paragraphs[1], "Delta fourth. Epsilon fifth.");
    }

    #[test]
    fn test_whitespace_only_segments_dropped() {
        let segmenter = ParagraphSegmenter::new();

        let text = "Real content here.\n\n   \n\nMore real content.";
        let paragraphs = segmenter.segment(text);

        assert_eq!(paragraphs, vec!["Real content here.", "More real content."]);
    }
}
