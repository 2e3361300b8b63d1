use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct MatrixArgs {
    /// Tab separated marker matrix, optionally gzipped. Use - for stdin
    pub file: PathBuf,

    /// Output file, - for stdout
    #[cfg_attr(feature = "clap", arg(short = 'o', long, default_value_os_t = PathBuf::from("-"), value_hint = clap::ValueHint::FilePath))]
    pub output: PathBuf,

    /// The first row is a title row and is passed through as is
    #[cfg_attr(feature = "clap", arg(long))]
    pub header: bool,

    /// Symbol written for missing genotypes
    #[cfg_attr(feature = "clap", arg(short = 'm', long, default_value_t = String::from("-")))]
    pub missing_symbol: String,

    /// Order scaffolds naturally (scf2 before scf10) instead of lexically
    #[cfg_attr(feature = "clap", arg(long))]
    pub natural_sort: bool,

    /// Write a JSON summary of the executed passes
    #[cfg_attr(feature = "clap", arg(long))]
    pub report: Option<PathBuf>,
}

impl Default for MatrixArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            output: PathBuf::from("-"),
            header: false,
            missing_symbol: String::from("-"),
            natural_sort: false,
            report: None,
        }
    }
}
