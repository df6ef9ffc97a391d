//! The line-oriented board file format.
//!
//! ```text
//! img/food.png Food
//! >img/fries.png french fries
//! >img/melon.png watermelon
//! img/clothes.png Clothing
//! >img/shirt.png collared shirt
//! ```
//!
//! A category line is `<image> <name>`. Each following `>` line is an item of
//! that category: `><image> <words...>`.

use board_store::{Board, ITEM_MARKER};

use crate::config::ExtraTokens;
use crate::diagnostics::DiagnosticSink;
use crate::error::{BoardError, Result};

/// Parse board file contents.
///
/// Any malformed line aborts the whole parse; no partial board is returned.
pub fn parse(input: &str, extra_tokens: ExtraTokens, sink: &dyn DiagnosticSink) -> Result<Board> {
    let mut board = Board::new();
    let mut current: Option<String> = None;
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if let Some(image) = tokens[0].strip_prefix(ITEM_MARKER) {
            let Some(category) = current.as_deref() else {
                return Err(format_error(line_no, "item line appears before any category line"));
            };
            if image.is_empty() {
                return Err(format_error(line_no, "item line is missing its image location"));
            }
            if tokens.len() < 2 {
                return Err(format_error(
                    line_no,
                    format!("item {image} has no text; expected '>{image} <words...>'"),
                ));
            }

            let text = tokens[1..].join(" ");
            board
                .add_item(category, image, &text)
                .map_err(|rejection| format_error(line_no, rejection.to_string()))?;
        } else {
            if tokens.len() < 2 {
                return Err(format_error(
                    line_no,
                    format!("category {} has no name; expected '<image> <name>'", tokens[0]),
                ));
            }
            if tokens.len() > 2 {
                match extra_tokens {
                    ExtraTokens::Reject => {
                        return Err(format_error(
                            line_no,
                            format!(
                                "category line has {} fields; expected '<image> <name>'",
                                tokens.len()
                            ),
                        ));
                    }
                    ExtraTokens::Ignore => sink.warn(format!(
                        "line {line_no}: ignoring extra tokens after category name {}",
                        tokens[1]
                    )),
                }
            }

            board
                .add_category(tokens[0], tokens[1])
                .map_err(|rejection| format_error(line_no, rejection.to_string()))?;
            current = Some(tokens[1].to_string());
        }
    }

    Ok(board)
}

/// Render a board in file format, categories in home-page order each followed
/// by its items.
pub fn render(board: &Board) -> String {
    let mut out = String::new();

    for (image, name) in board.home().iter() {
        out.push_str(&format!("{image} {name}\n"));
        if let Some(category) = board.category(name) {
            for (item_image, text) in category.iter() {
                out.push_str(&format!("{ITEM_MARKER}{item_image} {text}\n"));
            }
        }
    }

    out
}

fn format_error(line: usize, reason: impl Into<String>) -> BoardError {
    BoardError::Format {
        line,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use proptest::prelude::*;

    const SAMPLE: &str = "img/food.png Food
>img/fries.png french fries
>img/melon.png watermelon
img/clothes.png Clothing
>img/shirt.png collared shirt
";

    fn parse_strict(input: &str) -> Result<Board> {
        parse(input, ExtraTokens::Reject, &MemorySink::new())
    }

    #[test]
    fn test_parse_sample() {
        let board = parse_strict(SAMPLE).unwrap();

        assert_eq!(board.home().images(), vec!["img/food.png", "img/clothes.png"]);
        let food = board.category("Food").unwrap();
        assert_eq!(food.images(), vec!["img/fries.png", "img/melon.png"]);
        assert_eq!(food.text("img/fries.png"), Some("french fries"));
        assert_eq!(
            board.category("Clothing").unwrap().text("img/shirt.png"),
            Some("collared shirt")
        );
    }

    #[test]
    fn test_render_matches_sample() {
        let board = parse_strict(SAMPLE).unwrap();
        assert_eq!(render(&board), SAMPLE);
    }

    #[test]
    fn test_empty_category_and_empty_file() {
        let board = parse_strict("img/toys.png Toys\n").unwrap();
        assert!(board.category("Toys").unwrap().is_empty());

        let empty = parse_strict("").unwrap();
        assert!(empty.is_empty());
        assert_eq!(render(&empty), "");
    }

    #[test]
    fn test_blank_lines_and_crlf_are_tolerated() {
        let board = parse_strict("img/food.png Food\r\n\r\n>img/fries.png french fries\r\n").unwrap();
        assert_eq!(
            board.category("Food").unwrap().text("img/fries.png"),
            Some("french fries")
        );
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let board = parse_strict("\u{feff}img/food.png Food\n>img/fries.png french fries\n").unwrap();

        assert_eq!(board.category_for_image("img/food.png"), Some("Food"));
        assert_eq!(board.home().images(), vec!["img/food.png"]);
        assert_eq!(render(&board), "img/food.png Food\n>img/fries.png french fries\n");
    }

    #[test]
    fn test_single_token_line_is_format_error() {
        let err = parse_strict("img/food.png Food\n>img/fries.png\n").unwrap_err();
        assert!(matches!(err, BoardError::Format { line: 2, .. }));

        let err = parse_strict("img/food.png\n").unwrap_err();
        assert!(matches!(err, BoardError::Format { line: 1, .. }));
    }

    #[test]
    fn test_item_before_category_is_format_error() {
        let err = parse_strict(">img/fries.png french fries\n").unwrap_err();
        match err {
            BoardError::Format { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("before any category"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bare_marker_is_format_error() {
        let err = parse_strict("img/food.png Food\n> fries\n").unwrap_err();
        assert!(matches!(err, BoardError::Format { line: 2, .. }));
    }

    #[test]
    fn test_extra_category_tokens_rejected_by_default() {
        let err = parse_strict("img/food.png Food and drink\n").unwrap_err();
        assert!(matches!(err, BoardError::Format { line: 1, .. }));
    }

    #[test]
    fn test_extra_category_tokens_ignored_with_warning() {
        let sink = MemorySink::new();
        let board = parse("img/food.png Food and drink\n", ExtraTokens::Ignore, &sink).unwrap();

        assert_eq!(board.category_for_image("img/food.png"), Some("Food"));
        assert!(sink.contains("line 1"));
    }

    #[test]
    fn test_duplicates_in_file_are_format_errors() {
        let err = parse_strict("a.png Food\na.png Drinks\n").unwrap_err();
        assert!(matches!(err, BoardError::Format { line: 2, .. }));

        let err = parse_strict("a.png Food\n>b.png bread\n>b.png bun\n").unwrap_err();
        assert!(matches!(err, BoardError::Format { line: 3, .. }));

        let err = parse_strict("a.png Food\n>a.png food\n").unwrap_err();
        assert!(matches!(err, BoardError::Format { line: 2, .. }));
    }

    #[test]
    fn test_paths_normalized_and_words_rejoined() {
        let board = parse_strict("img\\food.png Food\n>img//fries.png   french\tfries\n").unwrap();

        assert_eq!(render(&board), "img/food.png Food\n>img/fries.png french fries\n");
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        let item = ("[a-z]{1,6}\\.png", "[a-z]{1,5}( [a-z]{1,5}){0,2}");
        let category = ("[a-z]{1,6}/[a-z]{1,4}\\.png", "[A-Z][a-z]{0,6}", prop::collection::vec(item, 0..5));
        prop::collection::vec(category, 0..5).prop_map(|categories| {
            let mut board = Board::new();
            for (image, name, items) in categories {
                if board.add_category(&image, &name).is_err() {
                    continue;
                }
                for (item_image, text) in items {
                    let _ = board.add_item(&name, &item_image, &text);
                }
            }
            board
        })
    }

    proptest! {
        #[test]
        fn render_then_parse_round_trips(board in arb_board()) {
            let reparsed = parse_strict(&render(&board)).unwrap();
            prop_assert_eq!(reparsed, board);
        }
    }
}
