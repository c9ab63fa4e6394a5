use colored::{ColoredString, Colorize};
use std::fmt::Arguments;

pub enum Tag {
    Success,
    Info,
    Error,
}

impl Tag {
    fn label(&self) -> ColoredString {
        match self {
            Tag::Success => "[SUCCESS]".green(),
            Tag::Info => "   [INFO]".cyan(),
            Tag::Error => "  [ERROR]".red(),
        }
        .bold()
    }
}

/// Prints a tagged status line. Errors go to stderr, everything else to stdout.
pub fn print_tagged(tag: Tag, message: Arguments<'_>) {
    match tag {
        Tag::Error => eprintln!("{} {message}", tag.label()),
        _ => println!("{} {message}", tag.label()),
    }
}

#[macro_export]
macro_rules! success_message {
    ($($arg:tt)*) => {
        $crate::utils::print_tagged($crate::utils::Tag::Success, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info_message {
    ($($arg:tt)*) => {
        $crate::utils::print_tagged($crate::utils::Tag::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_message {
    ($($arg:tt)*) => {
        $crate::utils::print_tagged($crate::utils::Tag::Error, format_args!($($arg)*))
    };
}
