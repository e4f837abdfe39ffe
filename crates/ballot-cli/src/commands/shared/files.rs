use std::path::Path;

use anyhow::Context;
use ballot_core::requests::FileUpload;

/// Read a local file into an upload, guessing its content type from the extension.
pub async fn read_upload(path: &Path) -> anyhow::Result<FileUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();

    let upload = FileUpload::new(file_name, bytes);
    Ok(match content_type_for(path) {
        Some(content_type) => upload.with_content_type(content_type),
        None => upload,
    })
}

pub async fn read_text(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "csv" => Some("text/csv"),
        _ => None,
    }
}
