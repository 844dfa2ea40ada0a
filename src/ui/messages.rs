use ansi_term::Colour::{Blue, Cyan, Green, Red};
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Blue.bold().paint("ℹ️"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint("✅"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint("❌ Error!"), msg);
}

/// URL of a request about to be sent
pub fn request_line<T: fmt::Display>(url: T) {
    println!("{} {}", Cyan.paint("→"), url);
}
