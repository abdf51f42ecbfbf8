mod listener;
pub mod pointer;

pub use listener::EventListener;
