use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "emoquiz", version, about = "Emotional self-assessment questionnaire")]
pub struct Cli {
    /// YAML file with blocks, scale and countries [default: built-in content]
    #[arg(long, value_name = "path")]
    pub content: Option<String>,

    /// Dial code of the country preselected on the contact screen
    #[arg(long, value_name = "code")]
    pub country: Option<String>,

    /// Write logs to this file [default: data dir/emoquiz.log]
    #[arg(long, value_name = "path")]
    pub log_file: Option<String>,

    /// Validate the content, print a summary and exit
    #[arg(long)]
    pub check: bool,
}
