// Wed Jan 15 2026 - Alex

pub mod banner;
pub mod progress;

pub use banner::Banner;
pub use progress::ProgressManager;

use colored::Colorize;

pub fn print_info(message: &str) {
    println!("{} {}", "[*]".blue(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", "[+]".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[!]".red(), message);
}
