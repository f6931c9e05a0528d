//! Platform service traits and desktop implementation.

use chrono::{DateTime, Datelike, Local, NaiveDate, Offset, TimeZone, Timelike};
use retroterm_types::error::{Result, TermError};
use retroterm_types::slot::SoundSlot;

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A broken-down wall-clock instant in some local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    /// 1-12.
    pub month: u8,
    /// 1-31.
    pub day: u8,
    /// 0-23.
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 0 = Sunday.
    pub weekday: u8,
    /// Offset of the local zone from UTC, in minutes east.
    pub utc_offset_minutes: i32,
}

impl Timestamp {
    /// Build a UTC timestamp from calendar fields, deriving the weekday.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday: day_of_week(year, month, day),
            utc_offset_minutes: 0,
        }
    }

    /// Same wall-clock fields, reinterpreted in a zone `minutes` east of UTC.
    pub fn with_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Break down a `chrono` date-time in its own zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            weekday: dt.weekday().num_days_from_sunday() as u8,
            utc_offset_minutes: dt.offset().fix().local_minus_utc() / 60,
        }
    }
}

/// Abstraction over the wall clock.
pub trait TimeService {
    /// Current local wall-clock time.
    fn now(&self) -> Result<Timestamp>;
}

/// Clock frozen at a single instant, for tests and reproducible demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl TimeService for FixedClock {
    fn now(&self) -> Result<Timestamp> {
        Ok(self.0)
    }
}

// ---------------------------------------------------------------------------
// Audio cue service
// ---------------------------------------------------------------------------

/// Capability to play the short keystroke cue of a slot.
///
/// Implementations may fail (asset missing, device busy); callers treat
/// every failure as non-fatal.
pub trait CueService {
    /// Play the cue for `slot` from the start.
    fn play(&mut self, slot: SoundSlot) -> Result<()>;

    /// Load the asset for `slot` ahead of its first `play`.
    fn prepare(&mut self, _slot: SoundSlot) -> Result<()> {
        Ok(())
    }
}

/// Cue service that plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCue;

impl CueService for NullCue {
    fn play(&mut self, _slot: SoundSlot) -> Result<()> {
        Ok(())
    }
}

/// Desktop cue service that records playback in the log.
///
/// Mirrors a preloading audio element: a slot must be prepared before it
/// can play, and playing an unprepared slot reports an error.
#[derive(Debug, Clone)]
pub struct LogCue {
    assets: Vec<String>,
    prepared: Option<SoundSlot>,
}

impl LogCue {
    /// Create a cue service over one asset path per slot.
    pub fn new(assets: Vec<String>) -> Self {
        Self {
            assets,
            prepared: None,
        }
    }

    fn asset(&self, slot: SoundSlot) -> Result<&str> {
        self.assets
            .get(slot.index())
            .map(String::as_str)
            .ok_or_else(|| TermError::Audio(format!("no asset for sound slot {slot}")))
    }
}

impl CueService for LogCue {
    fn play(&mut self, slot: SoundSlot) -> Result<()> {
        if self.prepared != Some(slot) {
            return Err(TermError::Audio(format!("sound slot {slot} not loaded")));
        }
        let asset = self.asset(slot)?;
        log::debug!("cue: {asset}");
        Ok(())
    }

    fn prepare(&mut self, slot: SoundSlot) -> Result<()> {
        let asset = self.asset(slot)?;
        log::debug!("preloading cue {slot}: {asset}");
        self.prepared = Some(slot);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation reading the local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<Timestamp> {
        Ok(Timestamp::from_datetime(&Local::now()))
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Day of week (0 = Sunday) for a Gregorian date. Dates that do not exist
/// on the calendar map to Sunday.
pub(crate) fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .map_or(0, |d| d.weekday().num_days_from_sunday() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use retroterm_types::config::TerminalConfig;

    fn slot(n: u8) -> SoundSlot {
        SoundSlot::new(n).unwrap()
    }

    fn assets() -> Vec<String> {
        (1..=4).map(|n| format!("/keyboard-sound-{n}.mp3")).collect()
    }

    // ---- Timestamp ----

    #[test]
    fn weekday_of_known_dates() {
        // 2024-03-07 was a Thursday.
        assert_eq!(Timestamp::new(2024, 3, 7, 0, 0, 0).weekday, 4);
        // 1970-01-01 was a Thursday.
        assert_eq!(Timestamp::new(1970, 1, 1, 0, 0, 0).weekday, 4);
        // 2000-02-29 was a Tuesday.
        assert_eq!(Timestamp::new(2000, 2, 29, 0, 0, 0).weekday, 2);
        // 2023-01-01 was a Sunday.
        assert_eq!(Timestamp::new(2023, 1, 1, 0, 0, 0).weekday, 0);
    }

    #[test]
    fn impossible_date_does_not_panic() {
        assert_eq!(Timestamp::new(2024, 2, 30, 0, 0, 0).weekday, 0);
        assert_eq!(Timestamp::new(2024, 13, 1, 0, 0, 0).weekday, 0);
        assert_eq!(Timestamp::new(2024, 0, 0, 0, 0, 0).weekday, 0);
    }

    #[test]
    fn from_datetime_utc() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
            .and_utc();
        assert_eq!(Timestamp::from_datetime(&dt), Timestamp::new(2024, 3, 7, 14, 5, 9));
    }

    #[test]
    fn from_datetime_keeps_local_fields_and_offset() {
        let zone = FixedOffset::east_opt(-5 * 3600).unwrap();
        let dt = Utc
            .with_ymd_and_hms(2024, 3, 7, 2, 0, 0)
            .unwrap()
            .with_timezone(&zone);
        let ts = Timestamp::from_datetime(&dt);
        assert_eq!(ts.day, 6);
        assert_eq!(ts.hour, 21);
        assert_eq!(ts.weekday, 3);
        assert_eq!(ts.utc_offset_minutes, -300);
    }

    // ---- Time services ----

    #[test]
    fn fixed_clock_returns_its_instant() {
        let ts = Timestamp::new(2024, 3, 7, 14, 5, 9).with_offset(60);
        let clock = FixedClock(ts);
        assert_eq!(clock.now().unwrap(), ts);
        assert_eq!(clock.now().unwrap(), ts);
    }

    #[test]
    fn desktop_clock_is_plausible() {
        let ts = DesktopPlatform::new().now().unwrap();
        assert!(ts.year >= 2024);
        assert!((1..=12).contains(&ts.month));
        assert!((1..=31).contains(&ts.day));
        assert!(ts.hour < 24);
        assert!(ts.weekday < 7);
    }

    // ---- Cue services ----

    #[test]
    fn null_cue_always_succeeds() {
        let mut cue = NullCue;
        assert!(cue.play(slot(1)).is_ok());
        assert!(cue.prepare(slot(4)).is_ok());
    }

    #[test]
    fn log_cue_requires_prepare() {
        let mut cue = LogCue::new(assets());
        assert!(cue.play(slot(1)).is_err());
        cue.prepare(slot(1)).unwrap();
        assert!(cue.play(slot(1)).is_ok());
    }

    #[test]
    fn log_cue_prepare_switches_slot() {
        let mut cue = LogCue::new(assets());
        cue.prepare(slot(2)).unwrap();
        cue.prepare(slot(3)).unwrap();
        assert!(cue.play(slot(2)).is_err());
        assert!(cue.play(slot(3)).is_ok());
    }

    #[test]
    fn log_cue_over_unvalidated_config_reports_errors() {
        let config = TerminalConfig {
            cue_assets: Vec::new(),
            ..TerminalConfig::default()
        };
        let mut cue = LogCue::new(config.cue_assets);
        for n in 1..=4 {
            match cue.prepare(slot(n)) {
                Err(TermError::Audio(msg)) => assert!(msg.contains("no asset")),
                other => panic!("expected audio error, got {other:?}"),
            }
            assert!(cue.play(slot(n)).is_err());
        }
    }

    #[test]
    fn log_cue_missing_asset() {
        let mut cue = LogCue::new(vec!["only-one.mp3".to_string()]);
        let err = cue.prepare(slot(2)).unwrap_err();
        assert!(format!("{err}").contains("no asset"));
    }
}
