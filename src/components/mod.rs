mod greeting;
mod panels;
mod shell;

pub use greeting::GreetingView;
pub use shell::Shell;
