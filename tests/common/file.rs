use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Write `files_count` files with random names and distinct random content
pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<FileSpec> {
    use fake::{Fake, faker::lorem::en::Words};

    (0..files_count)
        .map(|i| {
            let file_path = dir.join(format!("file_{i}.txt"));
            // the index keeps content unique, so tag every file with its number
            let file_content = format!("{i} {}", Words(5..10).fake::<Vec<String>>().join(" "));

            let file_spec = FileSpec::new(file_path, file_content);
            write_file(file_spec.clone());

            file_spec
        })
        .collect::<Vec<_>>()
}

/// Read the staged `(path, hash)` pairs straight from the index file
pub fn read_index(dir: &Path) -> Vec<(String, String)> {
    let content = std::fs::read_to_string(dir.join(".gitLite").join("index"))
        .unwrap_or_else(|e| panic!("Failed to read index: {}", e));
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&content).unwrap_or_else(|e| panic!("Corrupt index: {}", e));

    entries
        .iter()
        .map(|entry| {
            (
                entry["path"].as_str().unwrap_or_default().to_string(),
                entry["hash"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

/// Number of objects in the object store
pub fn count_objects(dir: &Path) -> usize {
    std::fs::read_dir(dir.join(".gitLite").join("objects"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}
