// Element-wise math functions
pub mod exp;
