const SPREADSHEET_EXTENSIONS: &[&str] = &[".xlsx", ".xls", ".csv"];
const SPREADSHEET_MIME_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "text/csv",
];

/// File acceptance predicate for the upload areas.
///
/// A file passes when either its MIME type or its extension is listed.
/// Rejected files are filtered out silently; parsing the accepted ones is an
/// external concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPolicy {
    extensions: Vec<&'static str>,
    mime_types: Vec<&'static str>,
}

impl AcceptPolicy {
    /// Excel and CSV uploads (forecast data files).
    pub fn spreadsheets() -> Self {
        Self {
            extensions: SPREADSHEET_EXTENSIONS.to_vec(),
            mime_types: SPREADSHEET_MIME_TYPES.to_vec(),
        }
    }

    /// Master-data variant that additionally takes JSON exports.
    pub fn spreadsheets_and_json() -> Self {
        let mut policy = Self::spreadsheets();
        policy.extensions.push(".json");
        policy.mime_types.push("application/json");
        policy
    }

    pub fn accepts(&self, file_name: &str, mime_type: &str) -> bool {
        if !mime_type.is_empty() && self.mime_types.contains(&mime_type) {
            return true;
        }
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext))
    }

    /// Keep only the accepted entries; unsupported files drop out without an
    /// error.
    pub fn filter_accepted<T, F>(&self, files: Vec<T>, describe: F) -> Vec<T>
    where
        F: Fn(&T) -> (String, String),
    {
        files
            .into_iter()
            .filter(|file| {
                let (name, mime) = describe(file);
                self.accepts(&name, &mime)
            })
            .collect()
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attr(&self) -> String {
        self.extensions.join(",")
    }
}

/// Human-readable size for the uploaded-file rows, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];
    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    // Two decimals with trailing zeros trimmed, matching toFixed(2) + parseFloat.
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_by_extension_case_insensitive() {
        let policy = AcceptPolicy::spreadsheets();
        assert!(policy.accepts("data.xlsx", ""));
        assert!(policy.accepts("DATA.XLSX", ""));
        assert!(policy.accepts("report.xls", ""));
        assert!(policy.accepts("rows.csv", ""));
        assert!(!policy.accepts("notes.txt", ""));
        assert!(!policy.accepts("archive.zip", "application/zip"));
    }

    #[test]
    fn accepts_by_mime_type_with_odd_name() {
        let policy = AcceptPolicy::spreadsheets();
        assert!(policy.accepts("export.bin", "text/csv"));
        assert!(policy.accepts(
            "export",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ));
    }

    #[test]
    fn json_only_in_the_master_variant() {
        assert!(!AcceptPolicy::spreadsheets().accepts("skus.json", "application/json"));
        assert!(AcceptPolicy::spreadsheets_and_json().accepts("skus.json", ""));
    }

    #[test]
    fn rejected_files_are_dropped_silently() {
        let policy = AcceptPolicy::spreadsheets();
        let files = vec![
            ("good.csv".to_string(), "text/csv".to_string()),
            ("bad.exe".to_string(), String::new()),
            ("also_good.xlsx".to_string(), String::new()),
        ];
        let kept = policy.filter_accepted(files, |(name, mime)| (name.clone(), mime.clone()));
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn accept_attr_lists_extensions() {
        assert_eq!(AcceptPolicy::spreadsheets().accept_attr(), ".xlsx,.xls,.csv");
        assert_eq!(
            AcceptPolicy::spreadsheets_and_json().accept_attr(),
            ".xlsx,.xls,.csv,.json"
        );
    }

    #[test]
    fn file_size_formatting() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }
}
