pub mod base;
pub mod features;
pub mod manager;
pub mod marker;
pub mod quests;
pub mod vector;
