//! Board navigation - the click-driven state machine a UI layer polls.
//!
//! The board is either on the home page or inside one category:
//! 1. **Home**: selecting a category image enters that category and speaks its name
//! 2. **Category**: selecting an item image speaks its text
//! 3. **Reset**: always returns to the home page
//!
//! Only the buttons of the current page are consulted; a category image is not
//! recognized from inside a category.

mod page;

pub use page::*;

use std::path::Path;
use std::sync::Arc;

use board_store::{normalize_image_loc, Board};

use crate::config::BoardConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{BoardError, Result};
use crate::persistence;
use crate::resources::ImageResources;
use crate::view::{Button, PageView};

/// A loaded board plus the navigation cursor.
///
/// All operations are synchronous. Hosts that call in from several threads must
/// serialize access (e.g. behind a single mutex).
pub struct BoardState {
    board: Board,
    page: Page,
    config: BoardConfig,
    resources: Box<dyn ImageResources>,
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardState")
            .field("board", &self.board)
            .field("page", &self.page)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BoardState {
    /// Wrap a board with the default configuration, starting on the home page.
    pub fn new(board: Board) -> Self {
        Self::with_config(board, BoardConfig::default())
    }

    /// Wrap a board, checking images as `config` describes.
    pub fn with_config(board: Board, config: BoardConfig) -> Self {
        Self {
            board,
            page: Page::Home,
            resources: config.image_resources(),
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the image checker.
    pub fn with_resources(mut self, resources: impl ImageResources + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Load a board file, reporting through the `tracing` sink.
    pub fn open(path: &Path, config: BoardConfig) -> Result<Self> {
        Self::open_with_sink(path, config, Arc::new(TracingSink))
    }

    /// Load a board file, reporting through `sink`.
    pub fn open_with_sink(path: &Path, config: BoardConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        let board = persistence::load(path, &config, sink.as_ref())?;
        Ok(Self::with_config(board, config).with_sink(sink))
    }

    /// Write the board to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        persistence::save(path, &self.board, &self.config, self.sink.as_ref())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Handle a click on `image_loc`.
    ///
    /// On the home page a category image enters that category and returns its
    /// name. Otherwise the image is looked up among the current page's buttons;
    /// an unknown image yields [`Selection::NoText`] rather than an error.
    pub fn select(&mut self, image_loc: &str) -> Selection {
        let image = normalize_image_loc(image_loc);

        let selection = match &self.page {
            Page::Home => match self.board.category_for_image(&image) {
                Some(name) => Selection::EnteredCategory(name.to_string()),
                None => Selection::NoText { image },
            },
            Page::Category(name) => match self.board.category(name).and_then(|c| c.text(&image)) {
                Some(text) => Selection::Spoken(text.to_string()),
                None => Selection::NoText { image },
            },
        };

        match &selection {
            Selection::EnteredCategory(name) => self.page = Page::Category(name.clone()),
            Selection::NoText { .. } => self.sink.warn(format!(
                "{selection} on page {:?}",
                self.page.name()
            )),
            Selection::Spoken(_) => {}
        }
        selection
    }

    /// Image locations on the current page, in display order.
    pub fn current_images(&self) -> Vec<String> {
        match &self.page {
            Page::Home => self.board.home().images(),
            Page::Category(name) => self
                .board
                .category(name)
                .map(|c| c.images())
                .unwrap_or_default(),
        }
    }

    /// Return to the home page.
    pub fn reset(&mut self) {
        self.page = Page::Home;
    }

    /// Current category name, `""` on the home page.
    pub fn current_category_name(&self) -> &str {
        self.page.name()
    }

    /// Check if `image_loc` is a category button on the home page.
    pub fn is_category_image(&self, image_loc: &str) -> bool {
        let image = normalize_image_loc(image_loc);
        if self.board.category_for_image(&image).is_some() {
            return true;
        }

        if self.board.category_holding_item(&image).is_none() {
            self.sink
                .warn(format!("{image} is not a category or an item on this board"));
        }
        false
    }

    /// Add a button to the current page.
    ///
    /// On the home page this creates a category named `text`; inside a category it
    /// adds an item speaking `text`. The image must exist and must not clash with
    /// an existing button. On error nothing changes.
    pub fn add(&mut self, image_loc: &str, text: &str) -> Result<()> {
        let result = self.try_add(image_loc, text);
        if let Err(err) = &result {
            self.sink.warn(err.to_string());
        }
        result
    }

    fn try_add(&mut self, image_loc: &str, text: &str) -> Result<()> {
        let image = normalize_image_loc(image_loc);

        if let Err(path) = self.resources.check(&image) {
            return Err(BoardError::InvalidResource { image, path });
        }

        match &self.page {
            Page::Home => self.board.add_category(&image, text)?,
            Page::Category(name) => self.board.add_item(name, &image, text)?,
        }

        self.sink.info(format!(
            "added {image} to page {:?}",
            self.page.name()
        ));
        Ok(())
    }

    /// Snapshot of the current page for a UI layer.
    pub fn page_view(&self) -> PageView {
        let buttons = match &self.page {
            Page::Home => self
                .board
                .home()
                .iter()
                .map(|(image, name)| Button::new(image, name, true))
                .collect(),
            Page::Category(name) => self
                .board
                .category(name)
                .map(|category| {
                    category
                        .iter()
                        .map(|(image, text)| Button::new(image, text, false))
                        .collect()
                })
                .unwrap_or_default(),
        };

        PageView {
            category: self.page.name().to_string(),
            buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Level, MemorySink};
    use crate::persistence;
    use crate::resources::{AnyImage, FsResources};
    use board_store::Rejection;
    use std::fs;

    const SAMPLE: &str = "img/food.png Food
>img/fries.png french fries
>img/melon.png watermelon
img/clothes.png Clothing
>img/shirt.png collared shirt
";

    fn sample_state() -> (BoardState, MemorySink) {
        let sink = MemorySink::new();
        let board = persistence::parse(SAMPLE, Default::default(), &sink).unwrap();
        let state = BoardState::new(board)
            .with_resources(AnyImage)
            .with_sink(Arc::new(sink.clone()));
        (state, sink)
    }

    #[test]
    fn test_scenario_walkthrough() {
        let (mut state, _) = sample_state();

        assert_eq!(state.current_images(), vec!["img/food.png", "img/clothes.png"]);
        assert_eq!(state.current_category_name(), "");

        assert_eq!(state.select("img/food.png").to_string(), "Food");
        assert_eq!(state.current_category_name(), "Food");
        assert_eq!(state.current_images(), vec!["img/fries.png", "img/melon.png"]);

        assert_eq!(
            state.select("img/fries.png"),
            Selection::Spoken("french fries".into())
        );

        state.reset();
        assert_eq!(state.current_category_name(), "");
        assert_eq!(
            state.select("img/clothes.png"),
            Selection::EnteredCategory("Clothing".into())
        );
        assert_eq!(state.current_images(), vec!["img/shirt.png"]);
    }

    #[test]
    fn test_category_image_not_recognized_inside_category() {
        let (mut state, sink) = sample_state();
        state.select("img/food.png");

        let selection = state.select("img/clothes.png");

        assert!(matches!(selection, Selection::NoText { .. }));
        assert_eq!(state.current_category_name(), "Food");
        assert!(sink.contains("no text associated with img/clothes.png"));
    }

    #[test]
    fn test_unknown_image_at_home() {
        let (mut state, _) = sample_state();

        let selection = state.select("img/fries.png");

        assert_eq!(
            selection,
            Selection::NoText {
                image: "img/fries.png".into()
            }
        );
        assert!(state.page().is_home());
    }

    #[test]
    fn test_select_normalizes_paths() {
        let (mut state, _) = sample_state();
        assert_eq!(state.select("img\\food.png").to_string(), "Food");
        assert_eq!(state.select("img//melon.png").to_string(), "watermelon");
    }

    #[test]
    fn test_is_category_image() {
        let (state, sink) = sample_state();

        assert!(state.is_category_image("img/food.png"));
        assert!(!state.is_category_image("img/fries.png"));
        assert!(sink.is_empty());

        assert!(!state.is_category_image("img/unknown.png"));
        assert!(sink.contains("img/unknown.png"));
    }

    #[test]
    fn test_add_category_at_home() {
        let (mut state, _) = sample_state();

        state.add("img/toys.png", "Toys").unwrap();

        assert_eq!(
            state.current_images(),
            vec!["img/food.png", "img/clothes.png", "img/toys.png"]
        );
        assert_eq!(state.select("img/toys.png").to_string(), "Toys");
        assert!(state.current_images().is_empty());
    }

    #[test]
    fn test_add_category_trims_typed_name() {
        let (mut state, _) = sample_state();

        state.add("img/toys.png", "Toys\n").unwrap();

        assert_eq!(
            state.select("img/toys.png"),
            Selection::EnteredCategory("Toys".into())
        );
        assert_eq!(state.current_category_name(), "Toys");
    }

    #[test]
    fn test_add_item_in_category() {
        let (mut state, _) = sample_state();
        state.select("img/food.png");

        state.add("img\\cake.png", "birthday  cake").unwrap();

        assert_eq!(
            state.current_images(),
            vec!["img/fries.png", "img/melon.png", "img/cake.png"]
        );
        assert_eq!(state.select("img/cake.png").to_string(), "birthday cake");
    }

    #[test]
    fn test_duplicate_category_image_rejected() {
        let (mut state, sink) = sample_state();
        let before = state.board().clone();

        let err = state.add("img/food.png", "Drinks").unwrap_err();

        assert!(matches!(err, BoardError::DuplicateImage(Rejection::CategoryImage { .. })));
        assert!(err.is_recoverable());
        assert_eq!(state.board(), &before);
        assert_eq!(state.board().category_for_image("img/food.png"), Some("Food"));
        assert_eq!(sink.messages_at(Level::Warn).len(), 1);
    }

    #[test]
    fn test_item_with_parent_image_rejected() {
        let (mut state, _) = sample_state();
        state.select("img/food.png");

        let err = state.add("img/food.png", "food").unwrap_err();

        assert!(matches!(err, BoardError::DuplicateImage(Rejection::ParentImage { .. })));
        assert_eq!(state.current_images().len(), 2);
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let (mut state, _) = sample_state();
        state.select("img/food.png");

        let err = state.add("img/melon.png", "melon").unwrap_err();

        assert!(matches!(err, BoardError::DuplicateImage(Rejection::ItemImage { .. })));
        assert_eq!(state.select("img/melon.png").to_string(), "watermelon");
    }

    #[test]
    fn test_duplicate_category_name_rejected() {
        let (mut state, _) = sample_state();

        let err = state.add("img/plate.png", "Food").unwrap_err();

        assert!(matches!(err, BoardError::InvalidEntry(Rejection::DuplicateCategory { .. })));
    }

    #[test]
    fn test_missing_image_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("img/toys.png"), b"png").unwrap();
        let (state, _) = sample_state();
        let mut state = state.with_resources(FsResources::rooted_at(dir.path()));

        let err = state.add("img/dolls.png", "Dolls").unwrap_err();
        assert!(matches!(err, BoardError::InvalidResource { .. }));
        assert!(err.to_string().contains("img/dolls.png"));
        assert_eq!(state.board().category_count(), 2);

        state.add("img\\toys.png", "Toys").unwrap();
        assert!(state.board().category("Toys").is_some());
    }

    #[test]
    fn test_page_view() {
        let (mut state, _) = sample_state();

        let home = state.page_view();
        assert_eq!(home.category, "");
        assert_eq!(home.buttons.len(), 2);
        assert!(home.buttons.iter().all(|b| b.opens_category));

        state.select("img/clothes.png");
        let clothing = state.page_view();
        assert_eq!(clothing.category, "Clothing");
        assert_eq!(
            clothing.buttons,
            vec![Button::new("img/shirt.png", "collared shirt", false)]
        );
    }

    #[test]
    fn test_open_add_save_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.txt");
        fs::write(&path, SAMPLE).unwrap();
        let config = BoardConfig {
            check_images: false,
            ..Default::default()
        };
        let sink = MemorySink::new();

        let mut state = BoardState::open_with_sink(&path, config.clone(), Arc::new(sink.clone())).unwrap();
        state.add("img/toys.png", "Toys").unwrap();
        state.select("img/toys.png");
        state.add("img/ball.png", "red ball").unwrap();
        state.save(&path).unwrap();

        let mut reopened = BoardState::open(&path, config).unwrap();
        assert_eq!(reopened.board(), state.board());
        reopened.select("img/toys.png");
        assert_eq!(reopened.select("img/ball.png").to_string(), "red ball");
        assert!(sink.contains("saved 3 categories"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardState::open(&dir.path().join("nope.txt"), BoardConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
