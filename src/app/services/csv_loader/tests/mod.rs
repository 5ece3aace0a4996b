//! Test utilities for CSV loader testing

use std::io::Write;
use tempfile::NamedTempFile;


/// Helper to create a small contact list with a bundle column
pub fn create_test_contacts_csv() -> String {
    "name,phone,bundle\n\
     Amina,0712345678,20\n\
     Brian,254722000111,5\n\
     Chebet,12345,bad\n\
     Dennis,2.54733123456E+11,10\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
