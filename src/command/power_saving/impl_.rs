use super::responses::PowerSavingSettings;
use crate::command::strip_prefix;
use heapless::String;

impl PowerSavingSettings {
    /// Parses `+CPSMS: <mode>[,[<rau>],[<gprs_ready>],[<tau>],[<active>]]`.
    pub fn from_slice(resp: &[u8]) -> Option<Self> {
        let line = core::str::from_utf8(strip_prefix(resp)).ok()?;
        let line = line.lines().next()?.trim();

        let mut fields = line.split(',');
        let enabled = match fields.next()?.trim() {
            "0" => false,
            "1" => true,
            _ => return None,
        };

        let mut timer = |n: usize| -> Option<Option<String<8>>> {
            match fields.nth(n) {
                None => Some(None),
                Some(f) => {
                    let f = f.trim().trim_matches('"');
                    if f.is_empty() {
                        Some(None)
                    } else {
                        String::try_from(f).ok().map(Some)
                    }
                }
            }
        };

        // Skip the requested RAU and GPRS ready timers
        let tau = timer(2)?;
        let active = timer(0)?;

        Some(Self {
            enabled,
            tau,
            active,
        })
    }
}
