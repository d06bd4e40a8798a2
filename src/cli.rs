use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
recasava version ";
const AFTER_STRING: &str = indoc::indoc! {"

   ──────────────────────────────────
   convert dual-indexed Casava and Basespace .fastq(.gz) files into
   single-indexed Casava naming and read identifiers

   file names (N in {A,C,G,T}, X a digit):
     Basespace:            samp_SX_LXXX_RX_XXX.fastq(.gz)
     dual-index Casava:    samp_NNNNNN-NNNNNN_LXXX_RX_XXX.fastq(.gz)
     single-index Casava:  samp_NNNNNN_LXXX_RX_XXX.fastq(.gz)

   run on a directory holding the files of a single FOFN only: files
   sharing a first index collapse onto the same name and overwrite
   each other."
};

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    styles = STYLES
)]
pub struct Cli {
    /// keep the original files. by default they are deleted once converted to save disk space
    #[arg(short, long, action)]
    pub keep: bool,

    /// the directory containing the files to fix. it is expected to hold .fastq(.gz) files
    /// and/or Sample_XX directories; all other entries are ignored
    #[arg(short, long, default_value = ".")]
    pub input: String,

    /// verbose. without this flag, only warnings are shown
    #[arg(short, long, action)]
    pub verbose: bool,

    /// rewrite files that are already single-indexed Casava, normalising their read
    /// identifiers in place
    #[arg(short, long, action)]
    pub force: bool,

    /// write a JSON summary of the run to this file
    #[arg(long)]
    pub summary: Option<String>,
}
