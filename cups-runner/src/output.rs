use colored::Colorize;

pub const NUMBER_DASHES: usize = 80;

pub fn print_header(title: &str) {
    let side = NUMBER_DASHES.saturating_sub(title.len() + 2);
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    println!(
        "{} {} {}",
        "-".repeat(side / 2).red().bold(),
        title.bold(),
        "-".repeat(side - side / 2).red().bold()
    );
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_input(labels: &str) {
    println!("- {} {}", "Starting cups:".bold(), labels);
}
