#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const DEFINITIONS_DIR: &str = "internal/indexer/definitions";

pub const ALPHA_DEFINITION: &str = "---\nname: Alpha\nidentifier: alpha\ndescription: Alpha is a \
                                    private tracker\nsupports:\n  - irc\n  - rss\nirc:\n  parse:\n    \
                                    lines:\n      - vars:\n          - torrentName\n          - \
                                    freeleech\n";

pub const GENERIC_DEFINITION: &str = "---\nname: Generic RSS\nidentifier: generic\ndescription: \
                                      Any RSS feed\nsupports:\n  - rss\n";

pub fn idxdoc_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("idxdoc"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("IDXDOC_LOG");
	cmd
}

pub fn write_definitions(root: &Path) -> std::io::Result<()> {
	let dir = root.join(DEFINITIONS_DIR);
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("alpha.yaml"), ALPHA_DEFINITION)?;
	std::fs::write(dir.join("generic.yaml"), GENERIC_DEFINITION)?;
	Ok(())
}
