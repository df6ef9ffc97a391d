//! File persistence - reading a board from disk and writing it back.

mod format;

pub use format::*;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use board_store::Board;

use crate::config::BoardConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::{BoardError, Result};

/// Load a board file.
///
/// A missing file is [`BoardError::SourceNotFound`]; any other read failure is
/// [`BoardError::Io`]; a malformed line is [`BoardError::Format`]. Nothing is
/// returned on failure.
pub fn load(path: &Path, config: &BoardConfig, sink: &dyn DiagnosticSink) -> Result<Board> {
    let input = fs::read_to_string(path).map_err(|e| {
        let err = BoardError::from_io(path, e);
        sink.error(err.to_string());
        err
    })?;

    let board = parse(&input, config.extra_category_tokens, sink).map_err(|err| {
        sink.error(format!("{}: {err}", path.display()));
        err
    })?;

    sink.info(format!(
        "loaded {} categories and {} items from {}",
        board.category_count(),
        board.item_count(),
        path.display()
    ));
    Ok(board)
}

/// Write a board file.
///
/// With `atomic_save` the contents go to a sibling temporary file that is then
/// renamed over `path`, so a failed save leaves the previous file intact.
pub fn save(path: &Path, board: &Board, config: &BoardConfig, sink: &dyn DiagnosticSink) -> Result<()> {
    let contents = render(board);

    let result = if config.atomic_save {
        write_atomic(path, &contents)
    } else {
        fs::write(path, &contents).map_err(|e| BoardError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    };

    match &result {
        Ok(()) => sink.info(format!(
            "saved {} categories to {}",
            board.category_count(),
            path.display()
        )),
        Err(err) => sink.error(err.to_string()),
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = temp_path(path);

    let result = (|| {
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, path)
    })();

    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(BoardError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
