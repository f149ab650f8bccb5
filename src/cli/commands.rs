// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and print it
    Generate {
        /// Password length (5-25)
        #[arg(short, long)]
        length: Option<usize>,

        /// Include uppercase letters (A-Z)
        #[arg(long, overrides_with = "no_uppercase")]
        uppercase: bool,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Include numbers (0-9)
        #[arg(long, overrides_with = "no_numbers")]
        numbers: bool,

        /// Exclude numbers
        #[arg(long)]
        no_numbers: bool,

        /// Include special characters (e.g. !@#$%)
        #[arg(long, overrides_with = "no_special")]
        special: bool,

        /// Exclude special characters
        #[arg(long)]
        no_special: bool,

        /// Copy the generated password to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
