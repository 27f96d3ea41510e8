//! Core converter functionality
//!
//! This module contains the LineConverter struct and its builder.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::converter::literal::convert_line;
use crate::converter::ConversionMode;
use crate::errors::{file_operation_error, Result};

/// Converts hexadecimal lines into decimal lines
///
/// Each input line is converted on its own and written in input order, so
/// the output always has as many lines as the input that was read.
#[derive(Debug, Clone, Default)]
pub struct LineConverter {
    /// How each line is interpreted
    mode: ConversionMode,
}

/// Outcome of a successful file conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub lines: usize,
    pub mode: ConversionMode,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted {} line{} ({}) from {} to {}",
            self.lines,
            if self.lines == 1 { "" } else { "s" },
            self.mode,
            self.input.display(),
            self.output.display()
        )
    }
}

impl LineConverter {
    /// Creates a new LineConverterBuilder
    pub fn builder() -> LineConverterBuilder {
        LineConverterBuilder::new()
    }

    /// Gets the conversion mode
    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Convert every line of `reader` into `writer`
    ///
    /// Stops at the first line that fails to parse. Lines converted before
    /// it have already been handed to `writer`.
    ///
    /// # Returns
    /// * `Result<usize>` - The number of lines written
    pub fn convert<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<usize> {
        self.convert_stream(reader, writer, Path::new("<input>"), Path::new("<output>"))
    }

    /// Convert the file at `input` and write the result to `output`
    ///
    /// The output file is created or truncated. The input is never modified.
    ///
    /// # Errors
    /// Returns an error if either file cannot be opened, if reading or
    /// writing fails, or if a line is not a valid hexadecimal literal.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionSummary> {
        debug!("Opening {} for reading", input.display());
        let source =
            File::open(input).map_err(|e| file_operation_error(e, input.to_path_buf(), "open"))?;

        debug!("Creating {}", output.display());
        let target = File::create(output)
            .map_err(|e| file_operation_error(e, output.to_path_buf(), "create"))?;

        let mut writer = BufWriter::new(target);
        let lines = self.convert_stream(BufReader::new(source), &mut writer, input, output)?;

        writer
            .flush()
            .map_err(|e| file_operation_error(e, output.to_path_buf(), "flush"))?;

        Ok(ConversionSummary {
            lines,
            mode: self.mode,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        })
    }

    fn convert_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        input: &Path,
        output: &Path,
    ) -> Result<usize> {
        let mut written = 0;

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|e| file_operation_error(e, input.to_path_buf(), "read"))?;

            let rendered = convert_line(&line, self.mode).map_err(|e| e.at_line(number))?;
            trace!("line {number}: {} -> {rendered}", line.trim());

            writeln!(writer, "{rendered}")
                .map_err(|e| file_operation_error(e, output.to_path_buf(), "write"))?;
            written += 1;
        }

        Ok(written)
    }
}

/// Builder for creating LineConverter instances
#[derive(Debug, Clone, Default)]
pub struct LineConverterBuilder {
    mode: ConversionMode,
}

impl LineConverterBuilder {
    /// Creates a new LineConverterBuilder with the integer mode
    pub fn new() -> LineConverterBuilder {
        LineConverterBuilder::default()
    }

    /// Sets the conversion mode
    pub fn mode(mut self, mode: ConversionMode) -> LineConverterBuilder {
        self.mode = mode;
        self
    }

    /// Builds the LineConverter instance
    pub fn build(self) -> LineConverter {
        LineConverter { mode: self.mode }
    }
}
