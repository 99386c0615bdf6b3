use crate::domain::model::ProductFormSnapshot;
use crate::domain::ports::Persistence;
use crate::utils::error::{CoopError, Result};
use crate::utils::validation::validate_path;
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::io::Write;

/// Reads a product snapshot from inline JSON or from a file.
pub fn load_product_snapshot(
    json: Option<&str>,
    file: Option<&str>,
) -> Result<ProductFormSnapshot> {
    let content = match (json, file) {
        (Some(json), _) => json.to_string(),
        (None, Some(path)) => {
            validate_path("file", path)?;
            fs::read_to_string(path)?
        }
        (None, None) => {
            return Err(CoopError::MissingFieldError {
                field: "--json or --file".to_string(),
            })
        }
    };
    Ok(serde_json::from_str(&content)?)
}

/// Writes each accepted payload as one JSON line.
pub struct JsonLinesOutput<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> JsonLinesOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write, P: Serialize> Persistence<P> for JsonLinesOutput<W> {
    fn persist(&self, payload: P) -> Result<()> {
        let line = serde_json::to_string(&payload)?;
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
