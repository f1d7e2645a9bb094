pub mod adult;
pub mod child;
pub mod youth;
