use super::AccessMapAppError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AccessMapAppError> {
    let file = File::open(path).map_err(|e| AccessMapAppError::ReadError {
        path: path.to_owned(),
        message: e.to_string(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| AccessMapAppError::ReadError {
        path: path.to_owned(),
        message: format!("invalid JSON: {e}"),
    })
}

/// writes pretty JSON to the file, or to stdout when no file is given.
pub fn write_json(
    value: &serde_json::Value,
    output_file: Option<&Path>,
) -> Result<(), AccessMapAppError> {
    let out_path = output_file.unwrap_or(Path::new("<stdout>"));
    let to_write_error = |message: String| AccessMapAppError::WriteError {
        path: out_path.to_owned(),
        message,
    };
    let mut writer: Box<dyn Write> = match output_file {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| to_write_error(e.to_string()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout())),
    };
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| to_write_error(e.to_string()))?;
    writeln!(writer).map_err(|e| to_write_error(e.to_string()))?;
    writer.flush().map_err(|e| to_write_error(e.to_string()))
}
