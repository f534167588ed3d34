//! Init command implementation
//!
//! Handles the `coverwise init` command which creates a configuration file
//! plus sample portfolio fixtures to analyze.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile};
use crate::fmt::{BULB, CHECKMARK, CLIPBOARD, SPARKLES};
use crate::infra::{FileSystem, RealFileSystem};
use crate::store::json::{POLICIES_FILE, PROFILE_FILE};

const SAMPLE_POLICIES: &str = r#"[
  {
    "id": "POL-1001",
    "status": "active",
    "premium": 12000,
    "insurer": "HDFC ERGO",
    "startDate": "2023-06-15",
    "ncb": 25,
    "asset": { "type": "car" },
    "coverageAmount": 450000
  },
  {
    "id": "POL-1002",
    "status": "active",
    "premium": 18000,
    "insurer": "ICICI Lombard",
    "startDate": "2024-11-01",
    "asset": { "type": "health" },
    "coverageAmount": 1000000
  },
  {
    "id": "POL-1003",
    "status": "active",
    "premium": 4000,
    "insurer": "HDFC ERGO",
    "startDate": "2022-03-20",
    "ncb": 35,
    "asset": { "type": "bike" },
    "coverageAmount": 90000
  },
  {
    "id": "POL-1004",
    "status": "expired",
    "premium": 9000,
    "insurer": "Bajaj Allianz",
    "startDate": "2021-08-10",
    "asset": { "type": "travel" },
    "coverageAmount": 2500000
  }
]
"#;

const SAMPLE_PROFILE: &str = r#"{
  "preferredBudget": 45000
}
"#;

/// Initialize coverwise configuration and sample fixtures
///
/// Creates `.coverwise.toml` plus a fixtures directory with a small sample
/// portfolio, leaving existing files untouched.
///
/// # Examples
///
/// ```no_run
/// use coverwise::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    println!(
        "{} {} Initializing coverwise",
        SPARKLES,
        style("coverwise init").bold()
    );
    println!();

    let project_root = env::current_dir()?;
    let fs = RealFileSystem;

    // Config file, unless one already exists
    if config::ConfigLoader::exists(&project_root) {
        println!(
            "{} Config file already exists: {}",
            style("⚠️").yellow(),
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
    } else {
        let config = ConfigFile::default();
        config::ConfigLoader::save(&config, &project_root)?;
        println!(
            "{} Created {}",
            CHECKMARK,
            style(config::CONFIG_FILE_NAME).cyan().bold()
        );
    }

    // Sample fixtures, unless the directory already has them
    let config = config::ConfigLoader::load(&project_root)?;
    let fixtures_dir = project_root.join(&config.fixtures_dir);
    fs.create_dir_all(&fixtures_dir)?;
    write_sample(&fs, &fixtures_dir.join(POLICIES_FILE), SAMPLE_POLICIES)?;
    write_sample(&fs, &fixtures_dir.join(PROFILE_FILE), SAMPLE_PROFILE)?;

    println!();
    println!("{}  Next Steps:", BULB);
    println!(
        "   1. Put your portfolio into {}/{}",
        config.fixtures_dir, POLICIES_FILE
    );
    println!(
        "   2. Run {} to see your stacked discounts",
        style("coverwise savings").cyan()
    );
    println!(
        "   3. Run {} for coverage recommendations",
        style("coverwise recommend").cyan()
    );

    Ok(())
}

fn write_sample<FS: FileSystem>(fs: &FS, path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        println!(
            "{} Keeping existing {}",
            CLIPBOARD,
            style(path.display()).cyan()
        );
        return Ok(());
    }

    fs.write(path, contents)?;
    println!("{} Created {}", CHECKMARK, style(path.display()).cyan().bold());
    Ok(())
}
