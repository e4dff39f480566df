//! Static file serving for the `/app/` routes.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, error};

use crate::response::{ContentType, Response};
use crate::status::Status;

const INDEX: &str = "index.html";

/// A directory whose files are served read-only.
#[derive(Debug, Clone)]
pub struct StaticDir {
    root: PathBuf,
}

impl StaticDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Serves `rel`, a path relative to the root as taken from the URL.
    ///
    /// An empty path or a directory serves its `index.html`. Anything that
    /// could escape the root answers 404, as does a missing file.
    pub async fn serve(&self, rel: &str) -> Response {
        let Some(mut path) = self.resolve(rel) else {
            debug!(path = rel, "rejected static path");
            return Response::status(Status::NotFound);
        };

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => path.push(INDEX),
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Response::status(Status::NotFound),
            Err(e) => {
                error!(path = %path.display(), "static metadata failed: {e}");
                return Response::status(Status::InternalServerError);
            }
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                Response::builder().bytes(ContentType::from_extension(ext), bytes)
            }
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
                Response::status(Status::NotFound)
            }
            Err(e) => {
                error!(path = %path.display(), "static read failed: {e}");
                Response::status(Status::InternalServerError)
            }
        }
    }

    /// Joins `rel` onto the root, refusing `..`, absolute paths, and
    /// backslashes.
    fn resolve(&self, rel: &str) -> Option<PathBuf> {
        if rel.contains('\\') {
            return None;
        }
        let mut path = self.root.clone();
        for component in Path::new(rel).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> (tempfile::TempDir, StaticDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
        let files = StaticDir::new(dir.path());
        (dir, files)
    }

    #[tokio::test]
    async fn empty_path_serves_index() {
        let (_dir, files) = site();
        let res = files.serve("").await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("text/html; charset=utf-8"));
        assert_eq!(res.body(), b"<h1>Welcome to Chirpy</h1>");
    }

    #[tokio::test]
    async fn serves_nested_asset_with_type() {
        let (_dir, files) = site();
        let res = files.serve("assets/logo.png").await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("image/png"));
    }

    #[tokio::test]
    async fn directory_without_index_is_404() {
        let (_dir, files) = site();
        assert_eq!(files.serve("assets/").await.status_code(), 404);
    }

    #[tokio::test]
    async fn missing_and_escaping_paths_are_404() {
        let (_dir, files) = site();
        assert_eq!(files.serve("nope.css").await.status_code(), 404);
        assert_eq!(files.serve("../etc/passwd").await.status_code(), 404);
        assert_eq!(files.serve("assets/../../x").await.status_code(), 404);
        assert_eq!(files.serve("..\\x").await.status_code(), 404);
    }
}
