//! Journal scanning: find the most recent event of a given kind.
//!
//! Journal files rotate, so "most recent" means: in the newest file that
//! has any match, the last matching line. Older files are only consulted
//! when every newer file has no match at all.

use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};

use tracing::{trace, warn};

use crate::model::{Event, JournalEntry, Loadout, Location, Statistics};

use super::{LogDir, LogDirError, Result, UnreadableJournal};

/// A file named `Journal.<12 digits>.<2 digits>.log`.
///
/// Ordering follows the name: the 12-digit stamp, then the part number.
/// That ordering is chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct JournalFile {
    stamp: u64,
    part: u8,
    name: String,
}

impl JournalFile {
    /// Parse a file name, returning `None` for anything that isn't a journal.
    pub fn parse(name: &str) -> Option<Self> {
        let rest = name.strip_prefix("Journal.")?.strip_suffix(".log")?;
        let (stamp, part) = rest.split_once('.')?;
        if !is_digits(stamp, 12) || !is_digits(part, 2) {
            return None;
        }
        Some(Self {
            stamp: stamp.parse().ok()?,
            part: part.parse().ok()?,
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

impl LogDir {
    /// Lists journal files in the log directory, oldest first.
    pub fn journal_files(&self) -> Result<Vec<JournalFile>> {
        let entries = fs::read_dir(&self.root).map_err(|source| LogDirError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut files: Vec<JournalFile> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                JournalFile::parse(entry.file_name().to_str()?)
            })
            .collect();
        files.sort();
        Ok(files)
    }

    /// Finds the most recent journal entry accepted by `matches`.
    ///
    /// Fails with [`LogDirError::NotFound`] if no journal file has a match.
    pub fn find_latest(&self, matches: impl Fn(&JournalEntry) -> bool) -> Result<JournalEntry> {
        self.scan(matches)?
            .ok_or(LogDirError::NotFound("matching event"))
    }

    /// Name of the star system from the latest `FSDJump` or `Location`.
    pub fn latest_star_system(&self) -> Result<String> {
        let entry = self
            .scan(|e| e.event.star_system().is_some())?
            .ok_or(LogDirError::NotFound("star system"))?;
        Ok(entry.event.star_system().unwrap_or_default().to_string())
    }

    /// Name of the station from the latest `Docked` or `Undocked`.
    ///
    /// Empty when the latest of the two is `Undocked`.
    pub fn latest_station(&self) -> Result<String> {
        let entry = self
            .scan(|e| e.event.station().is_some())?
            .ok_or(LogDirError::NotFound("station"))?;
        Ok(entry.event.station().unwrap_or_default().to_string())
    }

    /// The latest `Loadout` event.
    pub fn latest_loadout(&self) -> Result<Loadout> {
        match self.scan(|e| matches!(e.event, Event::Loadout(_)))? {
            Some(JournalEntry {
                event: Event::Loadout(loadout),
                ..
            }) => Ok(*loadout),
            _ => Err(LogDirError::NotFound("loadout")),
        }
    }

    /// The latest `Statistics` event.
    pub fn latest_statistics(&self) -> Result<Statistics> {
        match self.scan(|e| matches!(e.event, Event::Statistics(_)))? {
            Some(JournalEntry {
                event: Event::Statistics(stats),
                ..
            }) => Ok(*stats),
            _ => Err(LogDirError::NotFound("statistics")),
        }
    }

    /// Current system and station.
    ///
    /// Both parts are looked up independently and both must succeed.
    pub fn location(&self) -> Result<Location> {
        Ok(Location {
            system: self.latest_star_system()?,
            station: self.latest_station()?,
        })
    }

    /// Newest-first scan. Stops at the first file with any match.
    fn scan(&self, matches: impl Fn(&JournalEntry) -> bool) -> Result<Option<JournalEntry>> {
        for file in self.journal_files()?.iter().rev() {
            let path = self.root.join(file.name());
            match last_match(&path, &matches) {
                Ok(Some(entry)) => return Ok(Some(entry)),
                Ok(None) => {}
                Err(source) => match self.unreadable {
                    UnreadableJournal::Abort => return Err(LogDirError::Io { path, source }),
                    UnreadableJournal::Skip => {
                        warn!(path = %path.display(), error = %source, "skipping unreadable journal");
                    }
                },
            }
        }
        Ok(None)
    }
}

/// Reads every line of one journal and returns the last accepted entry.
///
/// Lines that don't parse (half-written, unknown shape, not UTF-8) are
/// skipped.
fn last_match(
    path: &Path,
    matches: &impl Fn(&JournalEntry) -> bool,
) -> io::Result<Option<JournalEntry>> {
    let reader = io::BufReader::new(fs::File::open(path)?);
    let mut latest = None;
    for (number, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<JournalEntry>(&line) {
            Ok(entry) if matches(&entry) => latest = Some(entry),
            Ok(_) => {}
            Err(e) => {
                trace!(path = %path.display(), line = number + 1, error = %e, "skipping line");
            }
        }
    }
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;


    use tempfile::TempDir;

    const FIRST: &str = "Journal.180311195000.01.log";
    const SECOND: &str = "Journal.180311195000.02.log";

    fn test_dir() -> (TempDir, LogDir) {
        let dir = TempDir::new().unwrap();
        let logdir = LogDir::new(dir.path());
        (dir, logdir)
    }

    fn write_journal(dir: &TempDir, name: &str, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn jump(timestamp: &str, system: &str) -> String {
        format!(r#"{{"timestamp":"{timestamp}","event":"FSDJump","StarSystem":"{system}"}}"#)
    }

    // ── File names ──

    #[test]
    fn parses_journal_file_names() {
        assert!(JournalFile::parse("Journal.180311195000.01.log").is_some());
        assert!(JournalFile::parse("Journal.18031119500.01.log").is_none());
        assert!(JournalFile::parse("Journal.180311195000.1.log").is_none());
        assert!(JournalFile::parse("Journal.180311195000.01.txt").is_none());
        assert!(JournalFile::parse("Journal.2024-01-05T101010.01.log").is_none());
        assert!(JournalFile::parse("Status.json").is_none());
        assert!(JournalFile::parse("Journal.18031119500a.01.log").is_none());
    }

    #[test]
    fn journal_files_are_sorted_and_filtered() {
        let (dir, logdir) = test_dir();
        for name in [SECOND, "Journal.170101000000.01.log", FIRST, "Status.json", "Cargo.json"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = logdir.journal_files().unwrap();
        let names: Vec<&str> = files.iter().map(JournalFile::name).collect();
        assert_eq!(names, ["Journal.170101000000.01.log", FIRST, SECOND]);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let logdir = LogDir::new("/nonexistent/path/that/should/not/exist");
        assert!(matches!(
            logdir.latest_star_system().unwrap_err(),
            LogDirError::Io { .. }
        ));
    }

    // ── Selection ──

    #[test]
    fn newest_file_wins_over_content_timestamps() {
        let (dir, logdir) = test_dir();
        write_journal(&dir, FIRST, &[&jump("2030-01-01T00:00:00Z", "Older File")]);
        write_journal(&dir, SECOND, &[&jump("2018-03-11T19:56:15Z", "Newer File")]);

        assert_eq!(logdir.latest_star_system().unwrap(), "Newer File");
    }

    #[test]
    fn last_match_within_a_file_wins() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                &jump("2018-03-11T19:56:15Z", "Sol"),
                &jump("2018-03-11T20:06:15Z", "Alpha Centauri"),
                r#"{"timestamp":"2018-03-11T20:10:00Z","event":"Music","MusicTrack":"Exploration"}"#,
            ],
        );

        assert_eq!(logdir.latest_star_system().unwrap(), "Alpha Centauri");
    }

    #[test]
    fn falls_back_to_older_file_without_matches() {
        let (dir, logdir) = test_dir();
        write_journal(&dir, FIRST, &[&jump("2018-03-11T19:56:15Z", "Sol")]);
        write_journal(
            &dir,
            SECOND,
            &[r#"{"timestamp":"2018-03-11T21:00:00Z","event":"Fileheader","part":2}"#],
        );

        assert_eq!(logdir.latest_star_system().unwrap(), "Sol");
    }

    #[test]
    fn location_event_counts_as_star_system() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                &jump("2018-03-11T19:56:15Z", "Sol"),
                r#"{"timestamp":"2018-03-11T21:00:00Z","event":"Location","Docked":true,"StationName":"Jameson Memorial","StarSystem":"Shinrarta Dezhra"}"#,
            ],
        );

        assert_eq!(logdir.latest_star_system().unwrap(), "Shinrarta Dezhra");
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                &jump("2018-03-11T19:56:15Z", "Sol"),
                "not json at all",
                r#"{"timestamp":"2018-03-11T20:00:00Z","event":"FSDJump"}"#,
                "",
                r#"{"timestamp":"2018-03-11T20:01:00Z","event":"FSDJump","StarSy"#,
            ],
        );
        fs::OpenOptions::new()
            .append(true)
            .open(dir.path().join(FIRST))
            .and_then(|mut f| io::Write::write_all(&mut f, &[0xFF, 0xFE, b'\n']))
            .unwrap();

        assert_eq!(logdir.latest_star_system().unwrap(), "Sol");
    }

    #[test]
    fn no_match_anywhere_is_not_found() {
        let (dir, logdir) = test_dir();
        write_journal(&dir, FIRST, &[&jump("2018-03-11T19:56:15Z", "Sol")]);

        let err = logdir.latest_station().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_directory_is_not_found() {
        let (_dir, logdir) = test_dir();
        assert!(logdir.latest_star_system().unwrap_err().is_not_found());
        assert!(logdir.find_latest(|_| true).unwrap_err().is_not_found());
    }

    #[test]
    fn find_latest_accepts_any_predicate() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                r#"{"timestamp":"2018-03-11T20:00:00Z","event":"Music","MusicTrack":"A"}"#,
                &jump("2018-03-11T20:01:00Z", "Sol"),
                r#"{"timestamp":"2018-03-11T20:02:00Z","event":"Music","MusicTrack":"B"}"#,
            ],
        );

        let entry = logdir
            .find_latest(|e| matches!(e.event, Event::Other))
            .unwrap();
        assert_eq!(entry.timestamp.to_string(), "2018-03-11T20:02:00Z");
    }

    // ── Station ──

    #[test]
    fn undocked_clears_station() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                r#"{"timestamp":"2018-03-11T20:01:02Z","event":"Docked","StationName":"Abraham Lincoln","StarSystem":"Sol"}"#,
                r#"{"timestamp":"2018-03-11T20:11:02Z","event":"Undocked","StationName":"Abraham Lincoln"}"#,
            ],
        );

        assert_eq!(logdir.latest_station().unwrap(), "");
    }

    #[test]
    fn docked_reports_station_name() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                r#"{"timestamp":"2018-03-11T19:01:02Z","event":"Undocked","StationName":"Galileo"}"#,
                r#"{"timestamp":"2018-03-11T20:01:02Z","event":"Docked","StationName":"Abraham Lincoln","StarSystem":"Sol"}"#,
            ],
        );

        assert_eq!(logdir.latest_station().unwrap(), "Abraham Lincoln");
    }

    #[test]
    fn location_combines_system_and_station() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                r#"{"timestamp":"2018-03-11T19:01:02Z","event":"Docked","StationName":"Abraham Lincoln","StarSystem":"Sol"}"#,
            ],
        );
        write_journal(&dir, SECOND, &[&jump("2018-03-11T21:00:00Z", "Barnard's Star")]);

        let location = logdir.location().unwrap();
        assert_eq!(location.system, "Barnard's Star");
        assert_eq!(location.station, "Abraham Lincoln");
    }

    // ── Payload queries ──

    #[test]
    fn latest_loadout_and_statistics() {
        let (dir, logdir) = test_dir();
        write_journal(
            &dir,
            FIRST,
            &[
                r#"{"timestamp":"2018-03-11T19:00:00Z","event":"Statistics","Bank_Account":{"Current_Wealth":10}}"#,
                r#"{"timestamp":"2018-03-11T19:00:01Z","event":"Loadout","Ship":"sidewinder","ShipName":"Old"}"#,
                r#"{"timestamp":"2018-03-11T19:30:00Z","event":"Loadout","Ship":"asp","ShipName":"New"}"#,
            ],
        );

        assert_eq!(logdir.latest_loadout().unwrap().ship_name, "New");
        assert_eq!(
            logdir.latest_statistics().unwrap().bank_account.current_wealth,
            10
        );
    }

    // ── Unreadable files ──

    /// Newest journal name taken by a directory: opens, but every read
    /// fails, whoever runs the test.
    fn unreadable_newest(dir: &TempDir) {
        write_journal(dir, FIRST, &[&jump("2018-03-11T19:56:15Z", "Sol")]);
        fs::create_dir(dir.path().join(SECOND)).unwrap();
    }

    #[test]
    fn unreadable_journal_aborts_by_default() {
        let (dir, logdir) = test_dir();
        unreadable_newest(&dir);

        let err = logdir.latest_star_system().unwrap_err();
        assert!(matches!(
            err,
            LogDirError::Io { ref path, .. } if path == &dir.path().join(SECOND)
        ));
    }

    #[test]
    fn unreadable_journal_can_be_skipped() {
        let (dir, logdir) = test_dir();
        let logdir = logdir.with_unreadable(UnreadableJournal::Skip);
        unreadable_newest(&dir);

        assert_eq!(logdir.latest_star_system().unwrap(), "Sol");
    }
}
