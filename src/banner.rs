// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
             _                          _
  __ _ _   _(_)_____ __ _ _ __ __ _  __| | ___ _ __
 / _` | | | | |_  / _` | '__/ _` |/ _` |/ _ \ '__|
| (_| | |_| | |/ / (_| | | | (_| | (_| |  __/ |
 \__, |\__,_|_/___\__, |_|  \__,_|\__,_|\___|_|
    |_|           |___/

    Answer evaluation for quiz apps
"#;
    println!("{}", banner);
}
