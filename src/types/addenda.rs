//! Addenda records attached to an Entry Detail record
//!
//! An addenda is a 94-character record tagged `7` that follows its entry. Its
//! type code (columns 2-3) decides which of three closed kinds it is:
//! - `05` forward remittance detail, any number per entry
//! - `98` notification of change, one per entry
//! - `99` return, one per entry
//!
//! Only the kind matters to the entry. The addenda's own columns are kept as
//! the raw record text and rendered back unchanged.

use crate::format::RECORD_LENGTH;
use crate::types::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record type tag for addenda records
pub const ADDENDA_RECORD_TYPE: &str = "7";

/// Category of an entry, mirroring the kind of addenda attached to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    /// Sent to the receiving institution
    #[default]
    Forward,
    /// Returned to the originating institution
    Return,
    /// Notification of change sent back to the originating institution
    #[serde(rename = "NOC")]
    Noc,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Forward => "Forward",
            Category::Return => "Return",
            Category::Noc => "NOC",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw addenda record text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddendaRecord {
    line: String,
}

impl AddendaRecord {
    /// The record as it appeared on the wire
    pub fn as_str(&self) -> &str {
        &self.line
    }
}

/// An addenda record, discriminated by kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Addenda {
    /// Type `05` forward remittance detail
    Forward(AddendaRecord),
    /// Type `98` notification of change
    #[serde(rename = "NOC")]
    Noc(AddendaRecord),
    /// Type `99` return
    Return(AddendaRecord),
}

impl Addenda {
    /// Parse an addenda record, picking its kind from the type code
    ///
    /// Only the first 94 characters are kept. Fails if the line is short, is not
    /// tagged `7`, or carries an unknown type code.
    pub fn parse(line: &str) -> Result<Self, FieldError> {
        if line.len() < RECORD_LENGTH {
            return Err(FieldError::invalid_record_length(line, RECORD_LENGTH));
        }
        let record = line
            .get(..RECORD_LENGTH)
            .filter(|r| r.is_ascii())
            .ok_or_else(|| FieldError::invalid_character_set("record", line))?;

        if &record[0..1] != ADDENDA_RECORD_TYPE {
            return Err(FieldError::wrong_record_type(
                &record[0..1],
                ADDENDA_RECORD_TYPE,
            ));
        }

        let raw = AddendaRecord {
            line: record.to_string(),
        };
        match &record[1..3] {
            "05" => Ok(Addenda::Forward(raw)),
            "98" => Ok(Addenda::Noc(raw)),
            "99" => Ok(Addenda::Return(raw)),
            other => Err(FieldError::invalid_enum("typeCode", other)),
        }
    }

    /// The entry category this kind of addenda implies
    pub fn kind(&self) -> Category {
        match self {
            Addenda::Forward(_) => Category::Forward,
            Addenda::Noc(_) => Category::Noc,
            Addenda::Return(_) => Category::Return,
        }
    }

    /// Two digit type code
    pub fn type_code(&self) -> &'static str {
        match self {
            Addenda::Forward(_) => "05",
            Addenda::Noc(_) => "98",
            Addenda::Return(_) => "99",
        }
    }

    /// The record text, exactly as parsed
    pub fn render(&self) -> &str {
        match self {
            Addenda::Forward(raw) | Addenda::Noc(raw) | Addenda::Return(raw) => raw.as_str(),
        }
    }
}
