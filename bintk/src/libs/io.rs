use std::io::{self, Write};
use std::path::PathBuf;

use color_eyre::eyre::{ensure, eyre, OptionExt, WrapErr};
use color_eyre::Result;
use csv::{QuoteStyle, Reader, ReaderBuilder, StringRecord, Writer, WriterBuilder};

use crate::args::MatrixArgs;
use crate::error::BintkError::RowShapeError;
use crate::structs::{Marker, MarkerMatrix, PassStats};
use crate::utils::{parse_genotype, parse_marker_name};

// Row lengths are checked by the loader so that the title row can differ
pub fn get_tsv_reader<R: io::Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

pub fn get_tsv_writer<W: io::Write>(output: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .double_quote(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output)
}

pub fn get_input(filename: Option<PathBuf>) -> Result<Box<dyn io::Read>> {
    let input: Box<dyn io::Read> = match filename {
        Some(name) => match name.to_str() {
            Some("-") => niffler::get_reader(Box::new(io::stdin()))?.0,
            Some(name) => match niffler::from_path(name) {
                Ok(x) => x.0,
                Err(err) => return Err(eyre!("failed to open \"{name}\": {err}")),
            },
            None => return Err(eyre!("Unknown I/O error")),
        },
        None => niffler::get_reader(Box::new(io::stdin()))?.0,
    };
    Ok(input)
}

pub fn get_output(filename: Option<PathBuf>) -> Result<Box<dyn io::Write>> {
    let output: Box<dyn io::Write> = match filename {
        Some(name) => match name.to_str() {
            Some("-") => Box::new(io::stdout()),
            Some(name) => Box::new(
                match std::fs::File::options()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(name)
                {
                    Ok(x) => io::BufWriter::new(x),
                    Err(err) => return Err(eyre!("failed to open \"{name}\": {err}"))?,
                },
            ),
            None => return Err(eyre!("Unknown I/O error")),
        },
        None => Box::new(io::stdout()),
    };
    Ok(output)
}

pub fn parse_marker(record: &StringRecord) -> Result<Marker> {
    let mut fields = record.iter();

    let name = fields.next().ok_or_eyre("Encountered a row without a marker name")?.trim();
    let (scaffold, start, width, source_count) = parse_marker_name(name)?;

    let genotypes = fields
        .map(|code| parse_genotype(name, code.trim()))
        .collect::<Result<Vec<_>>>()?;

    Ok(Marker::new(scaffold, start, width, source_count, genotypes))
}

/// Read a marker matrix. With `has_header` the first row is kept aside as the title row.
pub fn read_marker_matrix<R: io::Read>(input: R, has_header: bool) -> Result<MarkerMatrix> {
    let mut rdr = get_tsv_reader(input);
    let mut records = rdr.records();

    let header = match has_header {
        true => records
            .next()
            .transpose()?
            .map(|record| record.iter().map(String::from).collect()),
        false => None,
    };

    let mut matrix = MarkerMatrix::new(header);
    let mut ncolumns = None;

    for line in records {
        let record = line?;
        let expected = *ncolumns.get_or_insert(record.len());
        let line_number = record.position().map_or(0, csv::Position::line);

        ensure!(
            record.len() == expected,
            RowShapeError((line_number, record.len(), expected))
        );

        let marker = parse_marker(&record)?;
        let (scaffold, start) = (marker.scaffold.clone(), marker.start);

        if matrix.insert(marker).is_some() {
            tracing::warn!(
                "Scaffold {scaffold} has multiple markers starting at {start}, keeping the one on line {line_number}"
            );
        }
    }

    tracing::info!(
        "Read {} markers on {} scaffolds for {} samples",
        matrix.nmarkers(),
        matrix.nscaffolds(),
        matrix.nsamples()
    );

    Ok(matrix)
}

pub fn read_marker_matrix_file(args: &MatrixArgs) -> Result<MarkerMatrix> {
    let input = get_input(Some(args.file.clone()))?;
    read_marker_matrix(input, args.header).wrap_err(eyre!("Error reading {:?}", args.file))
}

pub fn write_marker_matrix<W: io::Write>(
    matrix: &MarkerMatrix,
    writer: &mut Writer<W>,
    missing_symbol: &str,
    natural_sort: bool,
) -> Result<()> {
    if let Some(header) = matrix.header() {
        writer.write_record(header)?;
    }

    for scaffold in matrix.scaffold_names(natural_sort) {
        for marker in matrix.scaffold(scaffold) {
            let name = marker.name();
            let record = std::iter::once(name.as_str()).chain(
                marker
                    .genotypes
                    .iter()
                    .map(|gt| gt.code(missing_symbol)),
            );
            writer.write_record(record)?;
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn write_marker_matrix_file(matrix: &MarkerMatrix, args: &MatrixArgs) -> Result<()> {
    let mut writer = get_tsv_writer(get_output(Some(args.output.clone()))?);
    write_marker_matrix(matrix, &mut writer, &args.missing_symbol, args.natural_sort)
}

pub fn write_report(stats: &[PassStats], path: PathBuf) -> Result<()> {
    let mut output = get_output(Some(path))?;
    serde_json::to_writer_pretty(&mut output, stats)?;
    output.flush()?;
    Ok(())
}
