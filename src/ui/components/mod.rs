pub mod feedback;
pub mod field;
pub mod header;
pub mod modal;
pub mod notice;
pub mod page;
pub mod playlist;
pub mod sections;
