//! Directory scanning for the demo host.

use lightbox_types::MediaItem;
use shared::media::IMAGE_EXTENSIONS;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv", "m4v", "ogv"];

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("failed to read directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("scan task failed: {0}")]
    Task(String),
}

/// Directory to scan for `path` and the item to open first, if `path` is a file.
pub fn media_dir(path: &Path) -> Option<(PathBuf, Option<String>)> {
    if path.is_file() {
        let selected = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string);
        path.parent().map(|par| (par.to_path_buf(), selected))
    } else if path.is_dir() {
        Some((path.to_path_buf(), None))
    } else {
        None
    }
}

pub async fn scan_dir(dir: &Path, include_hidden: bool) -> Result<Vec<MediaItem>, ScanError> {
    let dir = dir.to_path_buf();

    spawn_blocking(move || scan_dir_sync(&dir, include_hidden))
        .await
        .map_err(|e| ScanError::Task(e.to_string()))?
}

/// List supported media in `dir`, in natural name order. Ids are file names.
pub fn scan_dir_sync(dir: &Path, include_hidden: bool) -> Result<Vec<MediaItem>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            if !include_hidden
                && let Some(name) = path.file_name().and_then(|name| name.to_str())
                && name.starts_with('.')
            {
                return false;
            }
            is_supported_media(path)
        })
        .collect();

    paths.sort_by(|a, b| human_sort(file_name(a), file_name(b)));

    let items: Vec<MediaItem> = paths
        .iter()
        .filter_map(|path| {
            let id = path.file_name()?.to_str()?.to_string();
            let source = path.to_str()?.to_string();
            let thumb = if is_video(path) {
                String::new()
            } else {
                source.clone()
            };
            Some(MediaItem::new(id, source, thumb))
        })
        .collect();

    tracing::debug!(dir = %dir.display(), count = items.len(), "scanned media directory");

    Ok(items)
}

pub fn is_supported_media(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()) || VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn is_video(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or("")
}

/// Natural order: digit runs compare by value, everything else
/// case-insensitively.
pub fn human_sort(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        let (ac, bc) = match (a_chars.peek(), b_chars.peek()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => (*ac, *bc),
        };

        let ordering = if ac.is_ascii_digit() && bc.is_ascii_digit() {
            let a_num = take_number(&mut a_chars);
            let b_num = take_number(&mut b_chars);
            a_num.cmp(&b_num)
        } else {
            a_chars.next();
            b_chars.next();
            ac.to_lowercase().cmp(bc.to_lowercase())
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
        chars.next();
    }
    value
}
