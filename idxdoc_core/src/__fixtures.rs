use std::path::Path;

use crate::IndexerRecord;

pub const BTN_DEFINITION: &str = r##"---
name: BroadcasTheNet
identifier: btn
description: BroadcasTheNet (BTN) is a private torrent tracker focused on TV shows.
language: en-us
urls:
  - https://broadcasthe.net/
privacy: private
protocol: torrent
supports:
  - irc
  - rss
source: custom

irc:
  network: BroadcasTheNet
  server: irc.broadcasthenet.net
  port: 6697
  channels:
    - "#BTN-Announce"

  parse:
    type: multi
    lines:
      - test:
          - "NOW BROADCASTING! [ Lost S06E07 720p WEB-DL DD 5.1 H.264 - LP ]"
        pattern: ^NOW BROADCASTING! (.*)
        vars:
          - torrentName
          - freeleech
"##;

pub const PTP_DEFINITION: &str = r##"---
name: PassThePopcorn
identifier: ptp
description: PassThePopcorn (PTP) is a private torrent tracker for MOVIES
language: en-us
urls:
  - https://passthepopcorn.me/
privacy: private
protocol: torrent
supports:
  - IRC
source: gazelle

irc:
  network: PassThePopcorn
  parse:
    type: single
    lines:
      - pattern: '(.*) \[(.*)\] by (.*) \[(.*)\] - (.*)'
        vars:
          - torrentName
          - freeleechPercent
"##;

pub const GENERIC_DEFINITION: &str = r##"---
name: Generic Newznab
identifier: newznab
description: Generic Newznab
language: en-us
privacy: private
protocol: usenet
supports:
  - rss
source: newznab
"##;

pub const NO_DESCRIPTION_DEFINITION: &str = "---\nname: Quiet\nidentifier: quiet\nsupports:\n  \
                                             - irc\n";

pub fn record(name: &str) -> IndexerRecord {
	IndexerRecord {
		name: name.to_string(),
		..IndexerRecord::default()
	}
}

pub fn names(records: &[IndexerRecord]) -> Vec<&str> {
	records.iter().map(|record| record.name.as_str()).collect()
}

pub fn write_definitions(dir: &Path) -> std::io::Result<()> {
	std::fs::create_dir_all(dir)?;
	std::fs::write(dir.join("btn.yaml"), BTN_DEFINITION)?;
	std::fs::write(dir.join("ptp.yaml"), PTP_DEFINITION)?;
	std::fs::write(dir.join("newznab.yaml"), GENERIC_DEFINITION)?;
	std::fs::write(dir.join("quiet.yaml"), NO_DESCRIPTION_DEFINITION)?;
	Ok(())
}
