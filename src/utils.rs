//! Shared helpers for configuration paths and URLs.

use std::path::PathBuf;

use anyhow::Result;

/// Gets the cross-platform knowledge file path.
///
/// Returns the path as `{data_dir}/lore/knowledge.json` where `data_dir` is:
/// - Linux: `~/.local/share`
/// - macOS: `~/Library/Application Support`
/// - Windows: `C:\Users\<user>\AppData\Roaming`
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined.
pub fn knowledge_path() -> Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;

    Ok(data_dir.join("lore").join("knowledge.json"))
}

/// Rewrites a Google Slides link so it opens in preview mode: the path from
/// the first `/edit` segment onward becomes `/preview`.
///
/// Strings that do not parse as URLs pass through unchanged.
pub fn slides_preview_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(mut parsed) => {
            if let Some(position) = parsed.path().find("/edit") {
                let path = format!("{}/preview", &parsed.path()[..position]);
                parsed.set_path(&path);
            }
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_path_points_into_app_data_dir() {
        let path = knowledge_path().unwrap();
        assert!(path.to_string_lossy().contains("lore"));
        assert!(path.to_string_lossy().ends_with("knowledge.json"));
    }

    #[test]
    fn slides_preview_url_rewrites_edit_suffix() {
        let url = "https://docs.google.com/presentation/d/ABC123/edit?usp=sharing";
        assert_eq!(
            slides_preview_url(url),
            "https://docs.google.com/presentation/d/ABC123/preview?usp=sharing"
        );
    }

    #[test]
    fn slides_preview_url_leaves_other_paths_alone() {
        let url = "https://docs.google.com/presentation/d/ABC123/preview";
        assert_eq!(slides_preview_url(url), url);
    }

    #[test]
    fn slides_preview_url_passes_through_malformed_input() {
        assert_eq!(slides_preview_url("not a url"), "not a url");
    }
}
