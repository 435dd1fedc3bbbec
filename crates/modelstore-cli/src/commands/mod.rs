//! CLI commands implementation

use anyhow::{Context, Result};
use modelstore_client::{ModelPayload, ModelStorageClient, Transport};
use modelstore_core::ModelId;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

/// Print the file name of a model
pub async fn lookup<T: Transport>(client: &ModelStorageClient<T>, id: ModelId) -> Result<()> {
    let filename = client
        .lookup(id)
        .await
        .with_context(|| format!("Failed to look up model {}", id))?;
    println!("{}", filename);
    Ok(())
}

/// List all models
pub async fn list<T: Transport>(client: &ModelStorageClient<T>, json: bool) -> Result<()> {
    let models = client
        .list_records()
        .await
        .context("Failed to list models")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else if models.is_empty() {
        println!("No models found");
    } else {
        println!("{:<10} {}", "ID", "FILENAME");
        println!("{}", "-".repeat(40));
        for model in models {
            println!("{:<10} {}", model.id, model.filename);
        }
    }

    Ok(())
}

/// Upload a model file
pub async fn upload<T: Transport>(
    client: &ModelStorageClient<T>,
    path: PathBuf,
    name: Option<String>,
) -> Result<()> {
    let name = upload_name(&path, name)?;

    let payload = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("Failed to read standard input")?;
        ModelPayload::Bytes(buf)
    } else {
        let file = tokio::fs::File::open(&path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        ModelPayload::File(file)
    };

    info!(name = %name, "Uploading model");
    client
        .upload(&name, payload)
        .await
        .with_context(|| format!("Failed to upload '{}'", name))?;
    println!("Model '{}' uploaded", name);

    Ok(())
}

/// Helper to pick the stored file name for an upload
fn upload_name(path: &Path, name: Option<String>) -> Result<String> {
    if let Some(name) = name {
        return Ok(name);
    }
    if path.as_os_str() == "-" {
        anyhow::bail!("--name is required when uploading from standard input");
    }
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("Cannot derive a file name from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_name_defaults_to_file_name() {
        let name = upload_name(Path::new("/tmp/models/resnet.onnx"), None).unwrap();
        assert_eq!(name, "resnet.onnx");
    }

    #[test]
    fn test_upload_name_explicit() {
        let name = upload_name(Path::new("weights.bin"), Some("m.bin".to_string())).unwrap();
        assert_eq!(name, "m.bin");
    }

    #[test]
    fn test_upload_name_stdin_requires_name() {
        assert!(upload_name(Path::new("-"), None).is_err());
        assert_eq!(
            upload_name(Path::new("-"), Some("s.bin".to_string())).unwrap(),
            "s.bin"
        );
    }
}
