use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(
    name = "passmeter",
    version,
    about = "Password generator with an entropy-based strength meter",
    long_about = "Generates random passwords from letters, digits and !@#$%^&*() and rates \
                  them as very weak, weak, medium or strong. Run without arguments for the \
                  interactive menu."
)]
pub struct CliFlags {
    /// Characters per password; anything but a positive integer means 12
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Leave out a-z and A-Z
    #[arg(long)]
    pub no_letters: bool,

    /// Leave out 0-9
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out !@#$%^&*()
    #[arg(long)]
    pub no_special: bool,

    /// Also copy the password(s) to the clipboard
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Rate PASSWORD instead of generating; `-` reads it from stdin
    #[arg(short, long, value_name = "PASSWORD", allow_hyphen_values = true)]
    pub assess: Option<String>,

    /// Start from the saved settings file
    #[arg(short, long)]
    pub saved: bool,

    /// Print passwords only
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passmeter").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn short_and_long_flags() {
        let flags = parse(&["-l", "20", "-n", "3", "--no-special", "-b", "-q"]);
        assert_eq!(flags.length.as_deref(), Some("20"));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_special);
        assert!(!flags.no_digits);
        assert!(flags.clipboard);
        assert!(flags.quiet);
    }

    #[test]
    fn length_accepts_garbage_for_fallback() {
        assert_eq!(parse(&["-l", "-5"]).length.as_deref(), Some("-5"));
        assert_eq!(parse(&["--length", "abc"]).length.as_deref(), Some("abc"));
    }

    #[test]
    fn assess_accepts_dash() {
        assert_eq!(parse(&["-a", "-"]).assess.as_deref(), Some("-"));
        assert_eq!(parse(&["--assess", "-x-"]).assess.as_deref(), Some("-x-"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(CliFlags::try_parse_from(["passmeter", "--hex"]).is_err());
    }
}
