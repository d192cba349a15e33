//! Console presentation layer. Rendering only, no game logic.

mod game_view;

pub use game_view::GameView;
