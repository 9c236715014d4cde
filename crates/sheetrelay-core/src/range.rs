use crate::error::RangeError;

/// Convert a 1-based column index to its letter label (1 -> "A", 26 -> "Z",
/// 27 -> "AA"). Column labels are bijective base-26: there is no zero digit.
pub fn column_letter(index: u32) -> Result<String, RangeError> {
    if index == 0 {
        return Err(RangeError::InvalidArgument(
            "column index must be at least 1".to_string(),
        ));
    }

    let mut label = String::new();
    let mut n = index;

    while n > 0 {
        n -= 1;
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }

    Ok(label)
}

/// Convert a column letter label back to its 1-based index ("A" -> 1).
pub fn column_index(label: &str) -> Result<u32, RangeError> {
    if label.is_empty() {
        return Err(RangeError::InvalidArgument(
            "column label must not be empty".to_string(),
        ));
    }

    let mut index: u32 = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(RangeError::InvalidArgument(format!(
                "invalid character {:?} in column label",
                c
            )));
        }
        index = index * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    Ok(index)
}

/// Build the A1 range covering a sheet's full grid, e.g. rows=5, cols=3 on
/// "Sheet1" gives "Sheet1!A1:C5".
pub fn grid_range(title: &str, rows: u32, cols: u32) -> Result<String, RangeError> {
    if rows == 0 || cols == 0 {
        return Err(RangeError::InvalidArgument(format!(
            "grid must be at least 1x1, got {}x{}",
            rows, cols
        )));
    }

    Ok(format!("{}!A1:{}{}", title, column_letter(cols)?, rows))
}
