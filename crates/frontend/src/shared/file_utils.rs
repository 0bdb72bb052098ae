use web_sys::FileList;

/// Collects a browser `FileList` into a plain vector.
pub fn files_from_list(list: Option<FileList>) -> Vec<web_sys::File> {
    let mut files = Vec::new();
    if let Some(list) = list {
        for i in 0..list.length() {
            if let Some(file) = list.item(i) {
                files.push(file);
            }
        }
    }
    files
}
