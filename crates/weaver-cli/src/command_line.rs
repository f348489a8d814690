//! Separating weaver's own options from the build command

/// Separates weaver options from build tokens
pub const SEPARATOR: &str = "--";

/// Split the process argument vector into option arguments and build tokens.
///
/// Everything before the first `--` (program name included) goes to the option
/// parser; everything after it is the build command. Without a separator every
/// argument after the program name is a build token.
pub fn split_command_line(argv: &[String]) -> (&[String], &[String]) {
    match argv.iter().position(|arg| arg == SEPARATOR) {
        Some(index) => (&argv[..index], &argv[index + 1..]),
        None => argv.split_at(argv.len().min(1)),
    }
}
