//! Provider configuration
//!
//! Which editor build to read history from, where its configuration lives, and
//! which executable opens a result. Everything has a sensible default, so
//! `ProviderConfig::default()` targets the stock editor under the user's config dir.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};

use crate::utils::get_config_dir;

const STORE_SUBPATH: [&str; 3] = ["User", "globalStorage", "state.vscdb"];

/// Editor builds that share the same history store layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFlavor {
    #[default]
    Code,
    CodeInsiders,
    CodeOss,
    VsCodium,
}

impl EditorFlavor {
    pub const ALL: [EditorFlavor; 4] =
        [EditorFlavor::Code, EditorFlavor::CodeInsiders, EditorFlavor::CodeOss, EditorFlavor::VsCodium];

    /// Directory name under the user config dir
    pub fn config_dir_name(self) -> &'static str {
        match self {
            EditorFlavor::Code => "Code",
            EditorFlavor::CodeInsiders => "Code - Insiders",
            EditorFlavor::CodeOss => "Code - OSS",
            EditorFlavor::VsCodium => "VSCodium",
        }
    }

    /// Executable name, also used as the themed icon name
    pub fn executable(self) -> &'static str {
        match self {
            EditorFlavor::Code => "code",
            EditorFlavor::CodeInsiders => "code-insiders",
            EditorFlavor::CodeOss => "code-oss",
            EditorFlavor::VsCodium => "codium",
        }
    }
}

impl fmt::Display for EditorFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

impl FromStr for EditorFlavor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "code" | "vscode" => Ok(EditorFlavor::Code),
            "code-insiders" | "insiders" => Ok(EditorFlavor::CodeInsiders),
            "code-oss" | "oss" => Ok(EditorFlavor::CodeOss),
            "codium" | "vscodium" => Ok(EditorFlavor::VsCodium),
            _ => bail!(
                "Unknown editor '{}' (expected one of: code, code-insiders, code-oss, codium)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub editor: EditorFlavor,
    /// Overrides the platform config dir (the parent of `Code/`)
    pub config_dir: Option<PathBuf>,
    /// Overrides the executable launched on activation
    pub command: Option<String>,
}

impl ProviderConfig {
    pub fn new(editor: EditorFlavor) -> Self {
        Self { editor, ..Self::default() }
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// `<config-dir>/<Editor>/User/globalStorage/state.vscdb`
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config dir cannot be determined.
    pub fn store_path(&self) -> Result<PathBuf> {
        let base = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => get_config_dir()?,
        };

        let mut path = base.join(self.editor.config_dir_name());
        path.extend(STORE_SUBPATH);
        Ok(path)
    }

    pub fn launch_command(&self) -> &str {
        self.command.as_deref().unwrap_or(self.editor.executable())
    }

    pub fn icon_name(&self) -> &'static str {
        self.editor.executable()
    }
}
