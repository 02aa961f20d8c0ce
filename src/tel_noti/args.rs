use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "tel_noti",
    bin_name = "tel_noti",
    disable_help_flag = true,
    disable_version_flag = true
)]
#[command(about = "Send a Telegram message to yourself", long_about = None)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub words: Vec<OsString>,
}

impl Cli {
    /// Parse raw process arguments, program name first.
    ///
    /// An extra `--` goes in right after the program name so clap stops
    /// looking for options there. Everything the user typed, a leading `--`
    /// included, then lands in `words`.
    pub fn parse_raw<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(escape_words(args))
    }

    /// Words as message text. Bytes that are not UTF-8 become U+FFFD.
    pub fn text_words(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| w.to_string_lossy().into_owned())
            .collect()
    }
}

fn escape_words<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut escaped: Vec<OsString> = args.next().into_iter().collect();
    escaped.push(OsString::from("--"));
    escaped.extend(args);
    escaped
}
