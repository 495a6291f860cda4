//! Arrow column to worksheet cell mapping
//!
//! Integers and floats become numbers, Date32 becomes a formatted Excel
//! date, strings stay strings. Null cells are left blank. Any other type is
//! written as its Arrow display string.

use arrow::array::{
    Array, ArrayRef, BooleanArray, Date32Array, Float64Array, Int32Array, Int64Array,
    LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use chrono::Datelike;
use rust_xlsxwriter::{ExcelDateTime, Format, Worksheet, XlsxError};

use crate::error::Result;
use crate::utils::arrow::{arrow_date_to_naive_date, downcast_array};

/// Worksheet row of the `index`-th data row, below the header
pub fn data_row(index: usize) -> Result<u32> {
    index
        .checked_add(1)
        .and_then(|row| u32::try_from(row).ok())
        .ok_or_else(|| XlsxError::RowColumnLimitError.into())
}

/// Excel date for an Arrow Date32 value
pub fn excel_date(days_since_epoch: i32) -> Result<ExcelDateTime> {
    let date = arrow_date_to_naive_date(days_since_epoch);
    let year = u16::try_from(date.year()).map_err(|_| XlsxError::DateTimeRangeError(date.to_string()))?;
    Ok(ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)?)
}

/// Write every value of `array` into column `col`, starting below the header
pub fn write_column(
    sheet: &mut Worksheet,
    col: u16,
    name: &str,
    array: &ArrayRef,
    date_format: &Format,
) -> Result<()> {
    match array.data_type() {
        DataType::Int64 => {
            let values = downcast_array::<Int64Array>(array, name, "Int64")?;
            for (i, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    sheet.write_number(data_row(i)?, col, v as f64)?;
                }
            }
        }
        DataType::Int32 => {
            let values = downcast_array::<Int32Array>(array, name, "Int32")?;
            for (i, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    sheet.write_number(data_row(i)?, col, v)?;
                }
            }
        }
        DataType::Float64 => {
            let values = downcast_array::<Float64Array>(array, name, "Float64")?;
            for (i, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    sheet.write_number(data_row(i)?, col, v)?;
                }
            }
        }
        DataType::Utf8 => {
            let values = downcast_array::<StringArray>(array, name, "Utf8")?;
            for (i, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    sheet.write_string(data_row(i)?, col, v)?;
                }
            }
        }
        DataType::LargeUtf8 => {
            let values = downcast_array::<LargeStringArray>(array, name, "LargeUtf8")?;
            for (i, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    sheet.write_string(data_row(i)?, col, v)?;
                }
            }
        }
        DataType::Date32 => {
            let values = downcast_array::<Date32Array>(array, name, "Date32")?;
            for (i, value) in values.iter().enumerate() {
                if let Some(days) = value {
                    let date = excel_date(days)?;
                    sheet.write_datetime_with_format(data_row(i)?, col, &date, date_format)?;
                }
            }
        }
        DataType::Boolean => {
            let values = downcast_array::<BooleanArray>(array, name, "Boolean")?;
            for (i, value) in values.iter().enumerate() {
                if let Some(v) = value {
                    sheet.write_boolean(data_row(i)?, col, v)?;
                }
            }
        }
        _ => {
            let formatter = ArrayFormatter::try_new(array.as_ref(), &FormatOptions::default())?;
            for i in 0..array.len() {
                if array.is_valid(i) {
                    sheet.write_string(data_row(i)?, col, formatter.value(i).to_string())?;
                }
            }
        }
    }
    Ok(())
}
