pub mod audio;
pub mod catalog;
pub mod event;
pub mod http;
pub mod ui;
pub mod util;

#[cfg(test)]
pub mod test_support;
