//! CLI arguments

use crate::config::{HarvestConfig, DEFAULT_PAGE_SIZE, DEFAULT_USER_ID, LIKES_ENDPOINT};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Collect, and optionally download, the images of your liked posts on X (Twitter)
#[derive(Parser, Debug)]
#[command(name = "likes-harvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raw 'Cookie' header. If not passed, reads cookies from your browsers.
    #[arg(short, long)]
    pub cookies: Option<String>,

    /// 'x-csrf-token' copied from your browser network tab
    #[arg(long)]
    pub token: String,

    /// Download the extracted images after saving their URLs
    #[arg(long)]
    pub download: bool,

    /// Directory for data.json and downloaded images (default: current directory)
    #[arg(long, value_parser = dir_path)]
    pub path: Option<PathBuf>,

    /// Account whose likes are collected
    #[arg(long, default_value = DEFAULT_USER_ID)]
    pub user_id: String,

    /// Entries requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// GraphQL endpoint of the Likes timeline
    #[arg(long, default_value = LIKES_ENDPOINT, hide = true)]
    pub endpoint: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration, writing into `default_dir` when `--path` is absent
    pub fn to_config(&self, default_dir: &Path) -> HarvestConfig {
        let mut config = HarvestConfig::new(self.token.as_str())
            .with_endpoint(self.endpoint.as_str())
            .with_user_id(self.user_id.as_str())
            .with_page_size(self.count)
            .with_output_dir(self.path.clone().unwrap_or_else(|| default_dir.to_path_buf()))
            .with_download(self.download);

        if let Some(cookies) = &self.cookies {
            config = config.with_cookies(cookies.as_str());
        }
        config
    }
}

/// Accept only paths naming an existing directory
pub fn dir_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err("The path provided is not a directory.".to_string())
    }
}
