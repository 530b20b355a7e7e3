use clap::Parser;

/// Command-line flags.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "slm", version, about = "Switch library manager")]
pub struct Args {
    /// Front end for this run (`console` or `gui`), overriding the saved
    /// preference without changing it.
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,
}

impl Args {
    /// Whether `--mode` was passed at all, even with an empty value.
    pub fn mode_is_set(&self) -> bool {
        self.mode.is_some()
    }
}
