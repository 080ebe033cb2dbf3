use crate::core::data::page_rect::PageRect;
use crate::core::data::text_line::{Glyph, TextLine};

/// Upper bound on highlighted hits per search.
pub const MAX_SEARCH_HITS: usize = 128;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Token {
    Letter(char),
    Whitespace,
}

fn tokenize(needle: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (i, word) in needle.split_whitespace().enumerate() {
        if i > 0 {
            tokens.push(Token::Whitespace);
        }
        tokens.extend(word.chars().map(Token::Letter));
    }

    tokens
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Returns the end (exclusive) of a match starting at `start`.
fn match_at(glyphs: &[Glyph], start: usize, tokens: &[Token]) -> Option<usize> {
    let mut index = start;

    for token in tokens {
        match *token {
            Token::Letter(letter) => {
                let glyph = glyphs.get(index)?;
                if !same_letter(glyph.ch, letter) {
                    return None;
                }
                index += 1;
            }
            Token::Whitespace => {
                let run_start = index;
                while glyphs.get(index).is_some_and(|glyph| glyph.ch.is_whitespace()) {
                    index += 1;
                }
                if index == run_start {
                    return None;
                }
            }
        }
    }

    Some(index)
}

/// Finds `needle` in extracted text lines, ignoring case.
///
/// Whitespace in the needle matches any run of whitespace on the page and
/// leading or trailing whitespace is ignored. Matches do not span lines and
/// do not overlap. Each hit spans the matched glyphs horizontally and the
/// whole line vertically.
#[must_use]
pub fn search_text(lines: &[TextLine], needle: &str, max_hits: usize) -> Vec<PageRect> {
    let tokens = tokenize(needle);
    let mut hits = Vec::new();

    if tokens.is_empty() {
        return hits;
    }

    for line in lines {
        let glyphs = &line.glyphs;
        let mut start = 0;

        while start < glyphs.len() {
            if hits.len() >= max_hits {
                return hits;
            }

            match match_at(glyphs, start, &tokens) {
                Some(end) => {
                    hits.push(PageRect::new(
                        glyphs[start].x0,
                        line.bounds.y0,
                        glyphs[end - 1].x1,
                        line.bounds.y1,
                    ));
                    start = end;
                }
                None => start += 1,
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monospaced line: each glyph is 10pt wide starting at x = 0.
    fn line(text: &str, y0: f32) -> TextLine {
        let glyphs: Vec<Glyph> = text
            .chars()
            .enumerate()
            .map(|(i, ch)| Glyph {
                ch,
                x0: i as f32 * 10.0,
                x1: (i + 1) as f32 * 10.0,
            })
            .collect();

        TextLine {
            bounds: PageRect::new(0.0, y0, glyphs.len() as f32 * 10.0, y0 + 12.0),
            glyphs,
        }
    }

    #[test]
    fn finds_word_and_spans_its_glyphs() {
        let lines = vec![line("hello world", 100.0)];

        let hits = search_text(&lines, "world", MAX_SEARCH_HITS);

        assert_eq!(hits, vec![PageRect::new(60.0, 100.0, 110.0, 112.0)]);
    }

    #[test]
    fn search_ignores_case() {
        let lines = vec![line("Rust and RUST and rust", 0.0)];

        let hits = search_text(&lines, "rUsT", MAX_SEARCH_HITS);

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[1].x0, 90.0);
    }

    #[test]
    fn hits_are_reported_in_reading_order_across_lines() {
        let lines = vec![line("a cat", 0.0), line("no match", 20.0), line("cat cat", 40.0)];

        let hits = search_text(&lines, "cat", MAX_SEARCH_HITS);

        let rows: Vec<f32> = hits.iter().map(|hit| hit.y0).collect();
        assert_eq!(rows, vec![0.0, 40.0, 40.0]);
    }

    #[test]
    fn needle_whitespace_matches_any_run() {
        let lines = vec![line("page   layout", 0.0)];

        let hits = search_text(&lines, "  page layout ", MAX_SEARCH_HITS);

        assert_eq!(hits, vec![PageRect::new(0.0, 0.0, 130.0, 12.0)]);
        assert!(search_text(&[line("pagelayout", 0.0)], "page layout", MAX_SEARCH_HITS).is_empty());
    }

    #[test]
    fn matches_do_not_overlap() {
        let lines = vec![line("aaaa", 0.0)];

        let hits = search_text(&lines, "aa", MAX_SEARCH_HITS);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].x0, 20.0);
    }

    #[test]
    fn empty_needle_has_no_hits() {
        let lines = vec![line("anything", 0.0)];

        assert!(search_text(&lines, "", MAX_SEARCH_HITS).is_empty());
        assert!(search_text(&lines, "   ", MAX_SEARCH_HITS).is_empty());
    }

    #[test]
    fn hit_count_is_capped() {
        let text = "x ".repeat(200);
        let lines = vec![line(&text, 0.0)];

        assert_eq!(search_text(&lines, "x", MAX_SEARCH_HITS).len(), MAX_SEARCH_HITS);
        assert_eq!(search_text(&lines, "x", 3).len(), 3);
    }

    #[test]
    fn match_cannot_run_past_line_end() {
        let lines = vec![line("abc", 0.0), line("def", 20.0)];

        assert!(search_text(&lines, "cd", MAX_SEARCH_HITS).is_empty());
    }
}
