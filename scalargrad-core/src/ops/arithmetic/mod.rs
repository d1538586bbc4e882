// Foundational arithmetic operations on graph nodes
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;
