//! Low power timer codec
//!
//! Converts between a `(unit, multiplier)` pair and the 8 bit field used by
//! 3GPP TS 24.008 for the periodic TAU timer (T3412, table 10.5.163a) and the
//! active timer (T3324, table 10.5.163). Bits 8..6 carry the unit code, bits
//! 5..1 the multiplier. On the AT interface the field travels as an 8
//! character string of `'0'`/`'1'`, most significant bit first.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use heapless::String;

use crate::error::Error;

/// Largest multiplier that fits in the 5 bit value field.
pub const MAX_MULTIPLIER: u8 = 0b1_1111;

const UNIT_SHIFT: u8 = 5;
const DEACTIVATED_CODE: u8 = 0b111;

/// Which of the two independent power saving timers a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerFamily {
    /// Periodic tracking area update timer (T3412 extended)
    Tau,
    /// Active time (T3324)
    Active,
}

/// Timer units across both families.
///
/// Not every unit exists in every family, and a unit present in both may use
/// a different code in each. See [`TimerUnit::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerUnit {
    Hours320,
    Hours10,
    Hours1,
    Minutes10,
    Minutes6,
    Minutes1,
    Seconds30,
    Seconds2,
    /// The timer is switched off
    Deactivated,
}

const TAU_UNITS: [(TimerUnit, u8); 8] = [
    (TimerUnit::Hours320, 0b110),
    (TimerUnit::Hours10, 0b010),
    (TimerUnit::Hours1, 0b001),
    (TimerUnit::Minutes10, 0b000),
    (TimerUnit::Minutes1, 0b101),
    (TimerUnit::Seconds30, 0b100),
    (TimerUnit::Seconds2, 0b011),
    (TimerUnit::Deactivated, DEACTIVATED_CODE),
];

const ACTIVE_UNITS: [(TimerUnit, u8); 4] = [
    (TimerUnit::Minutes6, 0b010),
    (TimerUnit::Minutes1, 0b001),
    (TimerUnit::Seconds2, 0b000),
    (TimerUnit::Deactivated, DEACTIVATED_CODE),
];

impl TimerFamily {
    fn units(self) -> &'static [(TimerUnit, u8)] {
        match self {
            Self::Tau => &TAU_UNITS,
            Self::Active => &ACTIVE_UNITS,
        }
    }

    /// Unit encoded by the 3 bit `code` in this family.
    pub fn unit(self, code: u8) -> Result<TimerUnit, Error> {
        self.units()
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(u, _)| *u)
            .ok_or(Error::InvalidUnitValue)
    }
}

impl TimerUnit {
    /// 3 bit code of this unit in `family`.
    pub fn code(self, family: TimerFamily) -> Result<u8, Error> {
        family
            .units()
            .iter()
            .find(|(u, _)| *u == self)
            .map(|(_, c)| *c)
            .ok_or(Error::InvalidUnitValue)
    }

    fn step(self) -> Option<Duration> {
        let secs = match self {
            Self::Hours320 => 320 * 3600,
            Self::Hours10 => 10 * 3600,
            Self::Hours1 => 3600,
            Self::Minutes10 => 600,
            Self::Minutes6 => 360,
            Self::Minutes1 => 60,
            Self::Seconds30 => 30,
            Self::Seconds2 => 2,
            Self::Deactivated => return None,
        };
        Some(Duration::from_secs(secs))
    }
}

/// The raw 8 bit timer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binary8(pub u8);

impl Binary8 {
    pub fn unit_code(self) -> u8 {
        self.0 >> UNIT_SHIFT
    }

    pub fn multiplier(self) -> u8 {
        self.0 & MAX_MULTIPLIER
    }

    /// ASCII rendering, one `'0'`/`'1'` per bit, most significant bit first.
    pub fn to_ascii(self) -> [u8; 8] {
        let mut out = [b'0'; 8];
        for (i, c) in out[..3].iter_mut().enumerate() {
            if self.unit_code() & (0b100 >> i) != 0 {
                *c = b'1';
            }
        }
        // The masked multiplier never exceeds the 5 bit range
        if let Ok(bits) = multiplier_to_binary(self.multiplier()) {
            out[3..].copy_from_slice(&bits);
        }
        out
    }

    pub fn to_ascii_string(self) -> String<8> {
        let mut s = String::new();
        for c in self.to_ascii() {
            // Capacity is exactly 8
            s.push(c as char).ok();
        }
        s
    }
}

impl fmt::Display for Binary8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

impl FromStr for Binary8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 {
            return Err(Error::InvalidBinary);
        }
        parse_bits(s.as_bytes()).map(Binary8)
    }
}

fn parse_bits(bits: &[u8]) -> Result<u8, Error> {
    bits.iter().try_fold(0u8, |acc, c| match c {
        b'0' => Ok(acc << 1),
        b'1' => Ok((acc << 1) | 1),
        _ => Err(Error::InvalidBinary),
    })
}

/// Fixed width 5 bit expansion of `multiplier`, most significant bit first.
pub fn multiplier_to_binary(multiplier: u8) -> Result<[u8; 5], Error> {
    if multiplier > MAX_MULTIPLIER {
        return Err(Error::ExceedsMaxValue);
    }

    let mut out = [b'0'; 5];
    for (i, c) in out.iter_mut().enumerate() {
        if multiplier & (0x10 >> i) != 0 {
            *c = b'1';
        }
    }
    Ok(out)
}

/// A validated timer setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerValue {
    family: TimerFamily,
    unit: TimerUnit,
    multiplier: u8,
}

impl TimerValue {
    pub fn new(family: TimerFamily, unit: TimerUnit, multiplier: u8) -> Result<Self, Error> {
        if multiplier > MAX_MULTIPLIER {
            return Err(Error::ExceedsMaxValue);
        }
        unit.code(family)?;

        Ok(Self {
            family,
            unit,
            multiplier,
        })
    }

    /// A switched off timer of `family`.
    pub fn deactivated(family: TimerFamily) -> Self {
        Self {
            family,
            unit: TimerUnit::Deactivated,
            multiplier: 0,
        }
    }

    pub fn family(&self) -> TimerFamily {
        self.family
    }

    pub fn unit(&self) -> TimerUnit {
        self.unit
    }

    pub fn multiplier(&self) -> u8 {
        self.multiplier
    }

    pub fn is_deactivated(&self) -> bool {
        self.unit == TimerUnit::Deactivated
    }

    /// Interval this setting requests from the network, `None` when the
    /// timer is deactivated.
    pub fn duration(&self) -> Option<Duration> {
        self.unit
            .step()
            .map(|step| step * u32::from(self.multiplier))
    }

    pub fn encode(&self) -> Binary8 {
        // Validated on construction
        let code = self.unit.code(self.family).unwrap_or(DEACTIVATED_CODE);
        Binary8((code << UNIT_SHIFT) | self.multiplier)
    }

    pub fn decode(family: TimerFamily, raw: Binary8) -> Result<Self, Error> {
        let unit = family.unit(raw.unit_code())?;
        Ok(Self {
            family,
            unit,
            multiplier: raw.multiplier(),
        })
    }
}

/// Encodes `(unit, multiplier)` for `family`.
pub fn encode(family: TimerFamily, unit: TimerUnit, multiplier: u8) -> Result<Binary8, Error> {
    TimerValue::new(family, unit, multiplier).map(|v| v.encode())
}

/// Decodes the raw field into a timer value of `family`.
pub fn decode(family: TimerFamily, raw: Binary8) -> Result<TimerValue, Error> {
    TimerValue::decode(family, raw)
}

/// Decodes the ASCII form as reported by the modem.
///
/// The unit field is checked before the multiplier bits.
pub fn decode_str(family: TimerFamily, s: &str) -> Result<TimerValue, Error> {
    let bits = s.as_bytes();
    if bits.len() != 8 {
        return Err(Error::InvalidBinary);
    }

    let unit = family.unit(parse_bits(&bits[..3])?)?;
    let multiplier = parse_bits(&bits[3..])?;

    Ok(TimerValue {
        family,
        unit,
        multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_UNITS: [TimerUnit; 9] = [
        TimerUnit::Hours320,
        TimerUnit::Hours10,
        TimerUnit::Hours1,
        TimerUnit::Minutes10,
        TimerUnit::Minutes6,
        TimerUnit::Minutes1,
        TimerUnit::Seconds30,
        TimerUnit::Seconds2,
        TimerUnit::Deactivated,
    ];

    #[test]
    fn encode_tau_one_hour() {
        let raw = encode(TimerFamily::Tau, TimerUnit::Hours1, 5).unwrap();
        assert_eq!(raw, Binary8(0b0010_0101));
        assert_eq!(raw.to_ascii_string(), String::<8>::try_from("00100101").unwrap());
        assert_eq!(&raw.to_ascii(), b"00100101");
    }

    #[test]
    fn encode_active_deactivated() {
        let raw = encode(TimerFamily::Active, TimerUnit::Deactivated, 0).unwrap();
        assert_eq!(&raw.to_ascii(), b"11100000");
    }

    #[test]
    fn decode_tau_320_hours() {
        let value = decode_str(TimerFamily::Tau, "11000011").unwrap();
        assert_eq!(value.unit(), TimerUnit::Hours320);
        assert_eq!(value.multiplier(), 3);
    }

    #[test]
    fn decode_undefined_active_unit() {
        assert_eq!(
            decode_str(TimerFamily::Active, "101xxxxx"),
            Err(Error::InvalidUnitValue)
        );
        assert_eq!(
            decode(TimerFamily::Active, Binary8(0b1010_0000)),
            Err(Error::InvalidUnitValue)
        );
    }

    #[test]
    fn decode_malformed() {
        assert_eq!(
            decode_str(TimerFamily::Tau, "0010010"),
            Err(Error::InvalidBinary)
        );
        assert_eq!(
            decode_str(TimerFamily::Tau, "001x0101"),
            Err(Error::InvalidBinary)
        );
        assert_eq!("0012010".parse::<Binary8>(), Err(Error::InvalidBinary));
    }

    #[test]
    fn round_trip_every_unit_and_multiplier() {
        for family in [TimerFamily::Tau, TimerFamily::Active] {
            for unit in ALL_UNITS {
                if unit.code(family).is_err() {
                    continue;
                }
                for multiplier in 0..=MAX_MULTIPLIER {
                    let raw = encode(family, unit, multiplier).unwrap();
                    let value = decode(family, raw).unwrap();
                    assert_eq!((value.unit(), value.multiplier()), (unit, multiplier));

                    let ascii = raw.to_ascii_string();
                    assert_eq!(decode_str(family, &ascii), Ok(value));
                }
            }
        }
    }

    #[test]
    fn multiplier_out_of_range() {
        for family in [TimerFamily::Tau, TimerFamily::Active] {
            for unit in ALL_UNITS {
                for multiplier in [32, 33, 100, u8::MAX] {
                    assert_eq!(
                        encode(family, unit, multiplier),
                        Err(Error::ExceedsMaxValue)
                    );
                }
            }
        }
    }

    #[test]
    fn unit_not_in_family() {
        assert_eq!(
            encode(TimerFamily::Tau, TimerUnit::Minutes6, 1),
            Err(Error::InvalidUnitValue)
        );
        for unit in [
            TimerUnit::Hours320,
            TimerUnit::Hours10,
            TimerUnit::Hours1,
            TimerUnit::Minutes10,
            TimerUnit::Seconds30,
        ] {
            assert_eq!(
                encode(TimerFamily::Active, unit, 1),
                Err(Error::InvalidUnitValue)
            );
        }
    }

    #[test]
    fn shared_units_use_family_codes() {
        assert_eq!(TimerUnit::Minutes1.code(TimerFamily::Tau), Ok(0b101));
        assert_eq!(TimerUnit::Minutes1.code(TimerFamily::Active), Ok(0b001));
        assert_eq!(TimerUnit::Seconds2.code(TimerFamily::Tau), Ok(0b011));
        assert_eq!(TimerUnit::Seconds2.code(TimerFamily::Active), Ok(0b000));
        assert_eq!(TimerFamily::Tau.unit(0b000), Ok(TimerUnit::Minutes10));
        assert_eq!(TimerFamily::Active.unit(0b000), Ok(TimerUnit::Seconds2));
    }

    #[test]
    fn multiplier_expansion() {
        assert_eq!(multiplier_to_binary(0), Ok(*b"00000"));
        assert_eq!(multiplier_to_binary(5), Ok(*b"00101"));
        assert_eq!(multiplier_to_binary(31), Ok(*b"11111"));
        assert_eq!(multiplier_to_binary(32), Err(Error::ExceedsMaxValue));
    }

    #[test]
    fn durations() {
        let tau = TimerValue::new(TimerFamily::Tau, TimerUnit::Hours10, 3).unwrap();
        assert_eq!(tau.duration(), Some(Duration::from_secs(30 * 3600)));

        let active = TimerValue::new(TimerFamily::Active, TimerUnit::Minutes6, 2).unwrap();
        assert_eq!(active.duration(), Some(Duration::from_secs(720)));

        let off = TimerValue::deactivated(TimerFamily::Active);
        assert!(off.is_deactivated());
        assert_eq!(off.duration(), None);
        assert_eq!(off.encode(), Binary8(0b1110_0000));
    }

    #[test]
    fn display_matches_ascii() {
        let raw = Binary8(0b0100_0011);
        let mut s = String::<8>::new();
        core::fmt::write(&mut s, format_args!("{}", raw)).unwrap();
        assert_eq!(s, raw.to_ascii_string());
    }

    #[test]
    fn ascii_is_unit_then_multiplier_bits() {
        for byte in 0..=u8::MAX {
            let raw = Binary8(byte);
            let ascii = raw.to_ascii();
            let unit = multiplier_to_binary(raw.unit_code()).unwrap();
            assert_eq!(ascii[..3], unit[2..]);
            assert_eq!(ascii[3..], multiplier_to_binary(raw.multiplier()).unwrap()[..]);
            assert_eq!(
                core::str::from_utf8(&ascii).unwrap().parse::<Binary8>(),
                Ok(raw)
            );
        }
    }
}
