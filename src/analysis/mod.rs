pub mod benchmark;
pub mod catalog;
pub mod normalize;
pub mod projection;
pub mod rating;
pub mod role;
