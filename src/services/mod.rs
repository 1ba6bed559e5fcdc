pub mod catalog;
pub mod composer;
pub mod generation;
pub mod moods;
pub mod recommend;
