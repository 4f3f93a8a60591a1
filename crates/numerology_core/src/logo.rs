//! User logo replacement.

use crate::config::AppConfig;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const SUPPORTED_LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug)]
pub enum LogoError {
    UnsupportedFormat(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for LogoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(path) => write!(
                f,
                "unsupported logo file `{}`; expected png|jpg|jpeg",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "logo copy from `{}` failed: {source}", path.display())
            }
        }
    }
}

impl Error for LogoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::UnsupportedFormat(_) => None,
        }
    }
}

/// Copies `source` over the user logo and returns the new logo path.
///
/// The image content is not decoded; only the extension is checked.
pub fn set_user_logo(config: &AppConfig, source: &Path) -> Result<PathBuf, LogoError> {
    let supported = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_LOGO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);
    if !supported {
        return Err(LogoError::UnsupportedFormat(source.to_path_buf()));
    }

    std::fs::create_dir_all(&config.data_dir).map_err(|err| LogoError::Io {
        path: config.data_dir.clone(),
        source: err,
    })?;

    let target = config.user_logo_path();
    std::fs::copy(source, &target).map_err(|err| LogoError::Io {
        path: source.to_path_buf(),
        source: err,
    })?;

    info!("event=logo_set module=logo status=ok");
    Ok(target)
}
