use std::io;

use colored::Colorize;

const BANNER: &str = "DeCoders";
const TAGLINE: &str = "Выберите клиента для персональной диагностики финансового профиля";

pub fn display() -> io::Result<()> {
    println!("{}", BANNER.cyan().bold());
    println!("{}", "─".repeat(TAGLINE.chars().count()).dimmed());
    println!("{}", TAGLINE.dimmed());
    println!();
    Ok(())
}
