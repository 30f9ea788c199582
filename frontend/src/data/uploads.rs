//! Image upload into object storage.

use uuid::Uuid;

use crate::data::gateway::{self, GatewayError};
use crate::toast;

/// Uploads `file` into `bucket` (optionally under `folder`) and returns the
/// public URL of the stored object.
///
/// The stored name is randomized, keeping only the original extension, so
/// repeated uploads never overwrite each other. Failures toast and re-raise
/// like every other gateway operation.
pub async fn upload_image(
    file: &web_sys::File,
    bucket: &str,
    folder: Option<&str>,
) -> Result<String, GatewayError> {
    let path = object_path(&file.name(), folder);
    match gateway::upload(bucket, &path, file).await {
        Ok(()) => {
            let url = gateway::public_url(bucket, &path);
            toast::success("Upload concluído!", "A imagem foi enviada com sucesso.");
            Ok(url)
        }
        Err(err) => {
            toast::error("Erro no upload", &err.to_string());
            Err(err)
        }
    }
}

/// Randomized object path preserving the original file extension.
fn object_path(original_name: &str, folder: Option<&str>) -> String {
    let stem = Uuid::new_v4().simple().to_string();
    let file_name = match original_name.rsplit_once('.') {
        Some((prefix, ext)) if !prefix.is_empty() && !ext.is_empty() => {
            format!("{}.{}", stem, ext.to_ascii_lowercase())
        }
        _ => stem,
    };
    match folder {
        Some(folder) => format!("{}/{}", folder, file_name),
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_preserves_extension_and_folder() {
        let path = object_path("Foto de Perfil.JPG", Some("avatars"));
        let (folder, file) = path.split_once('/').unwrap();
        assert_eq!(folder, "avatars");
        assert!(file.ends_with(".jpg"));
        assert!(file.len() > ".jpg".len() + 8);
    }

    #[test]
    fn extensionless_names_get_bare_random_stem() {
        let path = object_path("arquivo", None);
        assert!(!path.contains('.'));
        assert!(!path.contains('/'));
    }

    #[test]
    fn two_uploads_of_the_same_name_differ() {
        assert_ne!(object_path("a.png", None), object_path("a.png", None));
    }
}
