#[derive(Debug)]
pub enum BintkError {
    MarkerNameError(String),
    GenotypeCodeError((String, String)),
    RowShapeError((u64, usize, usize)),
    WindowSizeError,
    MinEvidenceError(usize),
    MissingSymbolError(String),
}

impl std::fmt::Display for BintkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkerNameError(name) => write!(
                f,
                "Failed to parse marker name: {name:?}. Expected scaffold_start or scaffold_start:width:count"
            ),
            Self::GenotypeCodeError((marker, code)) => write!(
                f,
                "Unrecognized genotype code {code:?} for marker {marker:?}. Allowed codes are a, b, h (any case) and -, u, ., .., -- for missing"
            ),
            Self::RowShapeError((line, found, expected)) => write!(
                f,
                "Row {line} has {found} columns while the matrix has {expected}. All markers need a genotype for every sample"
            ),
            Self::WindowSizeError => write!(f, "Window size needs to be at least one"),
            Self::MinEvidenceError(min) => write!(
                f,
                "Minimum evidence needs to be at least 2, got {min}"
            ),
            Self::MissingSymbolError(symbol) => write!(
                f,
                "Missing symbol {symbol:?} would not be read back as missing. Use one of -, u, ., .., --"
            ),
        }
    }
}
