//! Unit tests mirroring the `src/` layout, plus the binary entry point

mod spatial;

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use patternspot::io::cli::Cli;

    // Tests the command definition used by the binary is well formed
    // Verified by giving two arguments the same short flag
    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
        assert_eq!(Cli::command().get_name(), "patternspot");
    }
}
