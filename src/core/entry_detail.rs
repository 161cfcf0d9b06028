//! Entry Detail record
//!
//! The Entry Detail record (record type `6`) carries a single credit or debit
//! to one receiver account. It is a 94-character line laid out as:
//!
//! | Columns | Field                     | Format                  |
//! |---------|---------------------------|-------------------------|
//! | 1       | record type               | always `6`              |
//! | 2-3     | transaction code          | numeric                 |
//! | 4-11    | RDFI identification       | routing number, 8 chars |
//! | 12      | check digit               | 1 digit                 |
//! | 13-29   | DFI account number        | alphanumeric, 17        |
//! | 30-39   | amount (cents)            | numeric, 10             |
//! | 40-54   | identification number     | alphanumeric, 15        |
//! | 55-76   | individual name           | alphanumeric, 22        |
//! | 77-78   | discretionary data        | alphanumeric, 2         |
//! | 79      | addenda record indicator  | numeric, 1              |
//! | 80-94   | trace number              | numeric, 15             |
//!
//! Parsing is purely mechanical. All semantic checks live in
//! [`EntryDetail::validate`], which stops at the first failure.

use crate::format::{
    calculate_check_digit, is_alphanumeric, is_transaction_code, pad_routing,
    parse_alphanumeric, parse_numeric, push_alphanumeric, push_numeric, render_alphanumeric,
    render_numeric, split_routing_number, FieldPresence, RECORD_LENGTH,
};
use crate::types::{Addenda, Category, Direction, FieldError};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;
use tracing::debug;

/// Record type tag for Entry Detail records
pub const ENTRY_DETAIL_RECORD_TYPE: &str = "6";

const RECORD_TYPE: Range<usize> = 0..1;
const TRANSACTION_CODE: Range<usize> = 1..3;
const RDFI_IDENTIFICATION: Range<usize> = 3..11;
const CHECK_DIGIT: Range<usize> = 11..12;
const DFI_ACCOUNT_NUMBER: Range<usize> = 12..29;
const AMOUNT: Range<usize> = 29..39;
const IDENTIFICATION_NUMBER: Range<usize> = 39..54;
const INDIVIDUAL_NAME: Range<usize> = 54..76;
const DISCRETIONARY_DATA: Range<usize> = 76..78;
const ADDENDA_RECORD_INDICATOR: Range<usize> = 78..79;
const TRACE_NUMBER: Range<usize> = 79..94;

const TRANSACTION_CODE_WIDTH: usize = 2;
/// Width of the RDFI identification, i.e. a routing number without its check digit
pub const RDFI_IDENTIFICATION_WIDTH: usize = 8;
const DFI_ACCOUNT_NUMBER_WIDTH: usize = 17;
const AMOUNT_WIDTH: usize = 10;
const IDENTIFICATION_NUMBER_WIDTH: usize = 15;
const INDIVIDUAL_NAME_WIDTH: usize = 22;
const DISCRETIONARY_DATA_WIDTH: usize = 2;
const ADDENDA_RECORD_INDICATOR_WIDTH: usize = 1;
const TRACE_NUMBER_WIDTH: usize = 15;
const TRACE_SEQUENCE_WIDTH: usize = 7;

/// A single credit or debit entry
///
/// Build one with [`EntryDetail::new`] and the setters, or read one from a line
/// with [`EntryDetail::parse`]. The addenda list is only changed through
/// [`EntryDetail::add_addenda`]; the category is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetail {
    /// Client defined reference, not part of the record text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip, default = "default_record_type")]
    record_type: String,

    /// Transaction code, one of 22, 23, 27, 28, 32, 33, 37, 38
    pub transaction_code: u8,

    /// Receiving institution routing number without the check digit
    #[serde(rename = "RDFIIdentification")]
    pub rdfi_identification: String,

    /// Last digit of the receiving institution routing number
    pub check_digit: String,

    /// Receiver account number, space padded and never zero padded
    #[serde(rename = "DFIAccountNumber")]
    pub dfi_account_number: String,

    /// Amount in cents
    pub amount: u64,

    /// Originator's own identification for this entry
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identification_number: String,

    /// Receiver name, usually the name on the account
    pub individual_name: String,

    /// Two characters for the originator's own use. WEB entries carry the
    /// payment type code here instead.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub discretionary_data: String,

    /// 1 when addenda records follow the entry, 0 otherwise
    #[serde(default)]
    pub addenda_record_indicator: u8,

    /// Originator routing prefix (8 digits) followed by a 7 digit sequence
    #[serde(default)]
    pub trace_number: u64,

    /// Attached addenda; the entry's category follows the last one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) addendum: Vec<Addenda>,
}

fn default_record_type() -> String {
    ENTRY_DETAIL_RECORD_TYPE.to_string()
}

impl Default for EntryDetail {
    fn default() -> Self {
        EntryDetail {
            id: String::new(),
            record_type: default_record_type(),
            transaction_code: 0,
            rdfi_identification: String::new(),
            check_digit: String::new(),
            dfi_account_number: String::new(),
            amount: 0,
            identification_number: String::new(),
            individual_name: String::new(),
            discretionary_data: String::new(),
            addenda_record_indicator: 0,
            trace_number: 0,
            addendum: Vec::new(),
        }
    }
}

impl EntryDetail {
    /// Create an empty Forward entry tagged with record type `6`
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an entry from a fixed-width line
    ///
    /// Only the first 94 characters are read. Text columns are taken as they
    /// are, numeric columns must hold digits (spaces count as padding). No
    /// format rules are checked here; call [`validate`](Self::validate) for that.
    ///
    /// # Errors
    ///
    /// - `InvalidRecordLength` if the line is shorter than 94 characters
    /// - `InvalidCharacterSet` if the record is not ASCII
    /// - `MalformedNumericField` if a numeric column has non-digit content
    pub fn parse(line: &str) -> Result<Self, FieldError> {
        if line.len() < RECORD_LENGTH {
            return Err(FieldError::invalid_record_length(line, RECORD_LENGTH));
        }
        let record = line
            .get(..RECORD_LENGTH)
            .filter(|r| r.is_ascii())
            .ok_or_else(|| FieldError::invalid_character_set("record", line))?;

        let entry = EntryDetail {
            id: String::new(),
            record_type: parse_alphanumeric(&record[RECORD_TYPE]),
            transaction_code: numeric_column(record, TRANSACTION_CODE, "transactionCode")?,
            rdfi_identification: record[RDFI_IDENTIFICATION].trim().to_string(),
            check_digit: record[CHECK_DIGIT].trim().to_string(),
            dfi_account_number: parse_alphanumeric(&record[DFI_ACCOUNT_NUMBER]),
            amount: numeric_column(record, AMOUNT, "amount")?,
            identification_number: parse_alphanumeric(&record[IDENTIFICATION_NUMBER]),
            individual_name: parse_alphanumeric(&record[INDIVIDUAL_NAME]),
            discretionary_data: parse_alphanumeric(&record[DISCRETIONARY_DATA]),
            addenda_record_indicator: numeric_column(
                record,
                ADDENDA_RECORD_INDICATOR,
                "addendaRecordIndicator",
            )?,
            trace_number: numeric_column(record, TRACE_NUMBER, "traceNumber")?,
            addendum: Vec::new(),
        };

        debug!(
            trace_number = entry.trace_number,
            transaction_code = entry.transaction_code,
            "parsed entry detail record"
        );
        Ok(entry)
    }

    /// Write the entry as a 94-character line
    ///
    /// Alphanumeric values wider than their column are cut to fit.
    ///
    /// # Errors
    ///
    /// `FieldOverflow` if a numeric value has more digits than its column.
    pub fn render(&self) -> Result<String, FieldError> {
        let mut out = String::with_capacity(RECORD_LENGTH);
        push_alphanumeric(&mut out, &self.record_type, RECORD_TYPE.len());
        push_numeric(
            &mut out,
            u64::from(self.transaction_code),
            TRANSACTION_CODE_WIDTH,
        )
        .map_err(|e| e.for_field("transactionCode"))?;
        out.push_str(&self.rdfi_identification_field());
        push_alphanumeric(&mut out, &self.check_digit, CHECK_DIGIT.len());
        push_alphanumeric(&mut out, &self.dfi_account_number, DFI_ACCOUNT_NUMBER_WIDTH);
        push_numeric(&mut out, self.amount, AMOUNT_WIDTH).map_err(|e| e.for_field("amount"))?;
        push_alphanumeric(
            &mut out,
            &self.identification_number,
            IDENTIFICATION_NUMBER_WIDTH,
        );
        push_alphanumeric(&mut out, &self.individual_name, INDIVIDUAL_NAME_WIDTH);
        push_alphanumeric(&mut out, &self.discretionary_data, DISCRETIONARY_DATA_WIDTH);
        push_numeric(
            &mut out,
            u64::from(self.addenda_record_indicator),
            ADDENDA_RECORD_INDICATOR_WIDTH,
        )
        .map_err(|e| e.for_field("addendaRecordIndicator"))?;
        push_numeric(&mut out, self.trace_number, TRACE_NUMBER_WIDTH)
            .map_err(|e| e.for_field("traceNumber"))?;
        Ok(out)
    }

    /// Check the entry against the format rules
    ///
    /// Checks run in this order and the first failure is returned:
    /// 1. Mandatory fields are not at their defaults
    /// 2. Record type is `6`
    /// 3. Transaction code is a legal code
    /// 4. Text fields use the allowed character set
    /// 5. Check digit matches the RDFI identification
    pub fn validate(&self) -> Result<(), FieldError> {
        self.field_inclusion()?;

        if self.record_type != ENTRY_DETAIL_RECORD_TYPE {
            return Err(FieldError::wrong_record_type(
                self.record_type.as_str(),
                ENTRY_DETAIL_RECORD_TYPE,
            ));
        }

        if !is_transaction_code(self.transaction_code) {
            return Err(FieldError::invalid_enum(
                "transactionCode",
                self.transaction_code.to_string(),
            ));
        }

        let text_fields = [
            ("DFIAccountNumber", &self.dfi_account_number),
            ("identificationNumber", &self.identification_number),
            ("individualName", &self.individual_name),
            ("discretionaryData", &self.discretionary_data),
        ];
        for (name, value) in text_fields {
            if !is_alphanumeric(value) {
                return Err(FieldError::invalid_character_set(name, value.as_str()));
            }
        }

        let identifier = self.rdfi_identification_field();
        let expected = calculate_check_digit(&identifier).ok_or_else(|| {
            FieldError::malformed_numeric("RDFIIdentification", identifier.as_str())
        })?;
        let actual = match self.check_digit.as_bytes() {
            [digit] if digit.is_ascii_digit() => digit - b'0',
            _ => {
                return Err(FieldError::malformed_numeric(
                    "checkDigit",
                    self.check_digit.as_str(),
                ))
            }
        };
        if actual != expected {
            return Err(FieldError::check_digit_mismatch(
                self.check_digit.as_str(),
                expected,
            ));
        }

        Ok(())
    }

    /// Mandatory fields must not hold their zero / empty defaults
    fn field_inclusion(&self) -> Result<(), FieldError> {
        if !self.record_type.is_present() {
            return Err(FieldError::missing_required(
                "recordType",
                self.record_type.as_str(),
            ));
        }
        if !self.transaction_code.is_present() {
            return Err(FieldError::missing_required(
                "transactionCode",
                self.transaction_code.to_string(),
            ));
        }
        if !self.rdfi_identification.is_present() {
            return Err(FieldError::missing_required(
                "RDFIIdentification",
                self.rdfi_identification_field(),
            ));
        }
        if !self.dfi_account_number.is_present() {
            return Err(FieldError::missing_required(
                "DFIAccountNumber",
                self.dfi_account_number.as_str(),
            ));
        }
        if !self.individual_name.is_present() {
            return Err(FieldError::missing_required(
                "individualName",
                self.individual_name.as_str(),
            ));
        }
        if !self.trace_number.is_present() {
            return Err(FieldError::missing_required(
                "traceNumber",
                self.trace_number.to_string(),
            ));
        }
        Ok(())
    }

    /// Record type tag, `6` unless a parsed line said otherwise
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// Forward, Return or NOC, following the addenda attached
    ///
    /// Return and NOC addenda clear the list when attached, so the last addenda
    /// is always the one attached most recently.
    pub fn category(&self) -> Category {
        self.addendum.last().map_or(Category::Forward, Addenda::kind)
    }

    /// Addenda attached to this entry, in order
    pub fn addendum(&self) -> &[Addenda] {
        &self.addendum
    }

    /// Split a 9 digit routing number into identification and check digit
    ///
    /// Short input is zero filled on the left first. The check digit is not
    /// verified until [`validate`](Self::validate).
    pub fn set_routing_number(&mut self, routing_number: &str) -> &mut Self {
        let (identification, check_digit) =
            split_routing_number(routing_number, RDFI_IDENTIFICATION_WIDTH);
        self.rdfi_identification = identification;
        self.check_digit = check_digit;
        self
    }

    /// Build the trace number from the originator routing prefix and a sequence number
    ///
    /// The prefix is zero filled (or cut) to 8 digits and the sequence zero
    /// filled to 7.
    ///
    /// # Errors
    ///
    /// - `FieldOverflow` if the sequence has more than 7 digits
    /// - `MalformedNumericField` if the prefix is not numeric
    pub fn set_trace_number(
        &mut self,
        odfi_identification: &str,
        sequence: u64,
    ) -> Result<(), FieldError> {
        let mut trace = pad_routing(odfi_identification, RDFI_IDENTIFICATION_WIDTH);
        push_numeric(&mut trace, sequence, TRACE_SEQUENCE_WIDTH)
            .map_err(|e| e.for_field("traceNumber"))?;
        self.trace_number = parse_numeric(&trace).map_err(|e| e.for_field("traceNumber"))?;
        Ok(())
    }

    /// Credit or debit, from the transaction code
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_transaction_code(self.transaction_code)
    }

    /// "C" for a credit, "D" for a debit, empty for an unknown code
    pub fn credit_or_debit(&self) -> &'static str {
        self.direction().map_or("", |d| d.as_str())
    }

    /// Store the payment type code used by WEB entries
    ///
    /// "R" (recurring) in any case or padding becomes "R"; anything else becomes "S" (single).
    pub fn set_payment_type(&mut self, payment_type: &str) {
        self.discretionary_data = canonical_payment_type(payment_type).to_string();
    }

    /// Payment type implied by the current discretionary data
    ///
    /// Does not touch the stored value.
    pub fn payment_type(&self) -> &'static str {
        canonical_payment_type(&self.discretionary_data)
    }

    /// Payment type, rewriting the discretionary data into its canonical form
    ///
    /// For callers that set `discretionary_data` directly and rely on reads to
    /// normalise it.
    pub fn payment_type_field(&mut self) -> &str {
        self.discretionary_data = self.payment_type().to_string();
        &self.discretionary_data
    }

    /// RDFI identification zero filled to 8 characters
    pub fn rdfi_identification_field(&self) -> String {
        pad_routing(&self.rdfi_identification, RDFI_IDENTIFICATION_WIDTH)
    }

    /// Account number space padded to 17 characters
    pub fn dfi_account_number_field(&self) -> String {
        render_alphanumeric(&self.dfi_account_number, DFI_ACCOUNT_NUMBER_WIDTH)
    }

    /// Amount zero filled to 10 digits
    pub fn amount_field(&self) -> Result<String, FieldError> {
        render_numeric(self.amount, AMOUNT_WIDTH).map_err(|e| e.for_field("amount"))
    }

    /// Identification number space padded to 15 characters
    pub fn identification_number_field(&self) -> String {
        render_alphanumeric(&self.identification_number, IDENTIFICATION_NUMBER_WIDTH)
    }

    /// Individual name space padded to 22 characters
    pub fn individual_name_field(&self) -> String {
        render_alphanumeric(&self.individual_name, INDIVIDUAL_NAME_WIDTH)
    }

    /// CCD entries carry the receiving company in the individual name column
    pub fn receiving_company_field(&self) -> String {
        self.individual_name_field()
    }

    /// Set the receiving company of a CCD entry
    pub fn set_receiving_company(&mut self, company: &str) {
        self.individual_name = company.to_string();
    }

    /// Discretionary data space padded to 2 characters
    pub fn discretionary_data_field(&self) -> String {
        render_alphanumeric(&self.discretionary_data, DISCRETIONARY_DATA_WIDTH)
    }

    /// Trace number zero filled to 15 digits
    pub fn trace_number_field(&self) -> Result<String, FieldError> {
        render_numeric(self.trace_number, TRACE_NUMBER_WIDTH)
            .map_err(|e| e.for_field("traceNumber"))
    }
}

impl FromStr for EntryDetail {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn numeric_column<T: TryFrom<u64>>(
    record: &str,
    range: Range<usize>,
    field_name: &str,
) -> Result<T, FieldError> {
    let text = &record[range];
    let value = parse_numeric(text).map_err(|e| e.for_field(field_name))?;
    T::try_from(value).map_err(|_| FieldError::malformed_numeric(field_name, text))
}

fn canonical_payment_type(raw: &str) -> &'static str {
    if raw.trim().eq_ignore_ascii_case("R") {
        "R"
    } else {
        "S"
    }
}
