use super::responses::{Statistics, STATISTICS_LEN};
use super::types::{Band, NetworkRegistrationStat, StatisticsType};
use heapless::Vec;

impl NetworkRegistrationStat {
    #[must_use]
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered | Self::RegisteredRoaming)
    }
}

impl Statistics {
    /// Copies a raw report. `None` if it is empty or does not fit.
    pub fn from_slice(kind: StatisticsType, data: &[u8]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        Some(Self {
            kind,
            data: Vec::<u8, STATISTICS_LEN>::from_slice(data).ok()?,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Looks up a numeric entry by its label, e.g. `"Signal power"`.
    ///
    /// Understands both report layouts of the SARA-N2 firmware:
    /// `NUESTATS: "RADIO","Signal power",-795` and `Signal power:-795`.
    pub fn value(&self, label: &str) -> Option<i32> {
        let text = core::str::from_utf8(&self.data).ok()?;

        text.lines().find_map(|line| {
            let line = line.trim();
            let line = line.strip_prefix("NUESTATS:").unwrap_or(line).trim_start();

            let mut fields = line.split(',');
            let first = fields.next()?;
            if let Some(v) = first.strip_prefix(label).and_then(|r| r.strip_prefix(':')) {
                return v.trim().parse().ok();
            }

            let name = fields.next()?;
            if name.trim_matches('"') != label {
                return None;
            }
            fields.next()?.trim().parse().ok()
        })
    }

    pub fn earfcn(&self) -> Option<u32> {
        self.value("EARFCN").and_then(|v| u32::try_from(v).ok())
    }

    pub fn band(&self) -> Option<Band> {
        self.earfcn().and_then(Band::from_earfcn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::network_service::responses::{
        EPSNetworkRegistrationStatus, SignallingConnectionStatus,
    };
    use crate::command::network_service::types::SignallingConnectionMode;
    use atat::serde_at::de::from_str;

    const RADIO: &[u8] = b"NUESTATS: \"RADIO\",\"Signal power\",-795\r\n\
NUESTATS: \"RADIO\",\"Total power\",-699\r\n\
NUESTATS: \"RADIO\",\"TX power\",-1\r\n\
NUESTATS: \"RADIO\",\"EARFCN\",3597\r\n\
NUESTATS: \"RADIO\",\"SNR\",104";

    #[test]
    fn statistics_lookup() {
        let stats = Statistics::from_slice(StatisticsType::Radio, RADIO).unwrap();
        assert_eq!(stats.value("Signal power"), Some(-795));
        assert_eq!(stats.value("TX power"), Some(-1));
        assert_eq!(stats.value("SNR"), Some(104));
        assert_eq!(stats.value("ECL"), None);
        assert_eq!(stats.earfcn(), Some(3597));
        assert_eq!(stats.band(), Some(Band::B8));
    }

    #[test]
    fn statistics_lookup_legacy_layout() {
        let stats = Statistics::from_slice(
            StatisticsType::All,
            b"Signal power:-905\r\nTotal power:-802\r\nEARFCN:6300\r\n",
        )
        .unwrap();
        assert_eq!(stats.value("Signal power"), Some(-905));
        assert_eq!(stats.band(), Some(Band::B20));
    }

    #[test]
    fn statistics_rejects_empty_and_oversized() {
        assert!(Statistics::from_slice(StatisticsType::Cell, b"").is_none());
        let big = [b'a'; STATISTICS_LEN + 1];
        assert!(Statistics::from_slice(StatisticsType::All, &big).is_none());
    }

    #[test]
    fn band_ranges() {
        assert_eq!(Band::from_earfcn(3449), None);
        assert_eq!(Band::from_earfcn(3450), Some(Band::B8));
        assert_eq!(Band::from_earfcn(3799), Some(Band::B8));
        assert_eq!(Band::from_earfcn(6150), Some(Band::B20));
        assert_eq!(Band::from_earfcn(6449), Some(Band::B20));
        assert_eq!(Band::from_earfcn(6450), None);
    }

    #[test]
    fn deserialize_signalling_connection() {
        assert_eq!(
            from_str("+CSCON: 0,1\r\n"),
            Ok(SignallingConnectionStatus {
                n: 0,
                mode: SignallingConnectionMode::Connected,
            })
        );
    }

    #[test]
    fn deserialize_eps_registration() {
        let status: EPSNetworkRegistrationStatus = from_str("+CEREG: 0,5").unwrap();
        assert_eq!(status.stat, NetworkRegistrationStat::RegisteredRoaming);
        assert!(status.stat.is_registered());
        assert_eq!(status.tac, None);
    }
}
