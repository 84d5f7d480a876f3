//! Row materialization.
//!
//! Turns a sparse, named row into the complete positional value array
//! for one grid row, aligned to column letters.

use std::collections::HashMap;

use gridlink_core::Row;

use crate::cell::CellValue;
use crate::error::{GSheetsError, Result};
use crate::fields::Field;
use crate::letters::{index_from_letters, letters};

/// Convert a row into the full list of cell values for its grid row.
///
/// `column_map` maps field names to column letters; fields missing from
/// it (or from `columns`) are dropped. Positions with no mapped field
/// hold [`CellValue::Null`]:
///
/// ```
/// use std::collections::HashMap;
/// use gridlink_core::{Row, Value};
/// use gridlink_gsheets::{values_from_row, CellValue, Field};
///
/// let columns = HashMap::from([
///     ("country".to_string(), Field::for_kind("string")),
///     ("cnt".to_string(), Field::for_kind("number")),
/// ]);
/// let column_map = HashMap::from([
///     ("country".to_string(), "A".to_string()),
///     ("cnt".to_string(), "C".to_string()),
/// ]);
/// let mut row = Row::new();
/// row.insert("country".to_string(), Value::from("BR"));
/// row.insert("cnt".to_string(), Value::Int(10));
///
/// let values = values_from_row(&row, &columns, &column_map).unwrap();
/// assert_eq!(
///     values,
///     vec![CellValue::from("BR"), CellValue::Null, CellValue::Int(10)]
/// );
/// ```
///
/// The output length is always `max mapped column index + 1` and the
/// order is ascending column index, independent of the iteration order
/// of the row or the maps.
pub fn values_from_row(
    row: &Row,
    columns: &HashMap<String, Field>,
    column_map: &HashMap<String, String>,
) -> Result<Vec<CellValue>> {
    if column_map.is_empty() {
        return Err(GSheetsError::EmptyColumnMap);
    }

    // Invert the map, letter -> field name. A letter claimed twice makes
    // cell placement ambiguous, so it fails instead of overwriting.
    let mut fields_by_letter: HashMap<&str, &str> = HashMap::with_capacity(column_map.len());
    let mut width = 0;
    for (field, letter) in column_map {
        if let Some(previous) = fields_by_letter.insert(letter.as_str(), field.as_str()) {
            let (first, second) = if previous < field.as_str() {
                (previous, field.as_str())
            } else {
                (field.as_str(), previous)
            };
            return Err(GSheetsError::DuplicateColumnLetter {
                letter: letter.clone(),
                first: first.to_string(),
                second: second.to_string(),
            });
        }
        width = width.max(index_from_letters(letter)? + 1);
    }

    let mut values = Vec::with_capacity(width);
    for letter in letters(width) {
        let cell = fields_by_letter
            .get(letter.as_str())
            .and_then(|field| row.get(*field).map(|value| (*field, value)))
            .and_then(|(field, value)| columns.get(field).map(|column| (column, value)));
        match cell {
            Some((column, value)) => values.push(column.unformatted(value)?),
            None => values.push(CellValue::Null),
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlink_core::Value;

    fn columns() -> HashMap<String, Field> {
        HashMap::from([
            ("country".to_string(), Field::for_kind("string")),
            ("cnt".to_string(), Field::for_kind("number")),
        ])
    }

    #[test]
    fn test_gap_filling() {
        let column_map = HashMap::from([
            ("country".to_string(), "A".to_string()),
            ("cnt".to_string(), "C".to_string()),
        ]);
        let mut row = Row::new();
        row.insert("country".to_string(), Value::from("BR"));
        row.insert("cnt".to_string(), Value::Int(10));

        let values = values_from_row(&row, &columns(), &column_map).unwrap();
        assert_eq!(
            values,
            vec![CellValue::from("BR"), CellValue::Null, CellValue::Int(10)]
        );
    }

    #[test]
    fn test_order_independent_of_insertion() {
        let column_map = HashMap::from([
            ("cnt".to_string(), "A".to_string()),
            ("country".to_string(), "B".to_string()),
        ]);
        // reversed insertion order relative to the columns
        let mut row = Row::new();
        row.insert("country".to_string(), Value::from("BR"));
        row.insert("cnt".to_string(), Value::Int(10));

        let values = values_from_row(&row, &columns(), &column_map).unwrap();
        assert_eq!(values, vec![CellValue::Int(10), CellValue::from("BR")]);
    }

    #[test]
    fn test_unmapped_fields_dropped() {
        let column_map = HashMap::from([("country".to_string(), "A".to_string())]);
        let mut row = Row::new();
        row.insert("country".to_string(), Value::from("BR"));
        row.insert("cnt".to_string(), Value::Int(10));

        let values = values_from_row(&row, &columns(), &column_map).unwrap();
        assert_eq!(values, vec![CellValue::from("BR")]);
    }

    #[test]
    fn test_mapped_field_missing_from_row() {
        let column_map = HashMap::from([
            ("country".to_string(), "A".to_string()),
            ("cnt".to_string(), "B".to_string()),
        ]);
        let mut row = Row::new();
        row.insert("cnt".to_string(), Value::Int(10));

        let values = values_from_row(&row, &columns(), &column_map).unwrap();
        assert_eq!(values, vec![CellValue::Null, CellValue::Int(10)]);
    }

    #[test]
    fn test_null_value_becomes_blank_cell() {
        let column_map = HashMap::from([
            ("country".to_string(), "A".to_string()),
            ("cnt".to_string(), "B".to_string()),
        ]);
        let mut row = Row::new();
        row.insert("country".to_string(), Value::Null);
        row.insert("cnt".to_string(), Value::Int(10));

        let values = values_from_row(&row, &columns(), &column_map).unwrap();
        assert_eq!(
            values,
            vec![CellValue::String(String::new()), CellValue::Int(10)]
        );
    }

    #[test]
    fn test_empty_column_map() {
        let row = Row::new();
        assert!(matches!(
            values_from_row(&row, &columns(), &HashMap::new()),
            Err(GSheetsError::EmptyColumnMap)
        ));
    }

    #[test]
    fn test_duplicate_letter() {
        let column_map = HashMap::from([
            ("country".to_string(), "A".to_string()),
            ("cnt".to_string(), "A".to_string()),
        ]);
        let row = Row::new();
        let err = values_from_row(&row, &columns(), &column_map).unwrap_err();
        assert!(matches!(
            err,
            GSheetsError::DuplicateColumnLetter { letter, first, second }
                if letter == "A" && first == "cnt" && second == "country"
        ));
    }

    #[test]
    fn test_width_beyond_z() {
        // "AB" (index 27) sets the width, not the lexicographic maximum "Z"
        let columns = HashMap::from([
            ("a".to_string(), Field::for_kind("number")),
            ("b".to_string(), Field::for_kind("number")),
        ]);
        let column_map = HashMap::from([
            ("a".to_string(), "Z".to_string()),
            ("b".to_string(), "AB".to_string()),
        ]);
        let mut row = Row::new();
        row.insert("a".to_string(), Value::Int(1));
        row.insert("b".to_string(), Value::Int(2));

        let values = values_from_row(&row, &columns, &column_map).unwrap();
        assert_eq!(values.len(), 28);
        assert_eq!(values[25], CellValue::Int(1));
        assert_eq!(values[26], CellValue::Null);
        assert_eq!(values[27], CellValue::Int(2));
    }
}
