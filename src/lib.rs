pub mod config;
pub mod event;
pub mod form;
pub mod lightbox;
pub mod notice;
pub mod playlist;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod util;
