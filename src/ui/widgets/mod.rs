pub mod month_grid;
pub mod share_bar;

pub use month_grid::MonthGrid;
pub use share_bar::ShareBar;
