mod board_view;
mod view_state;

pub use board_view::BoardView;
pub use view_state::BoardViewState;
