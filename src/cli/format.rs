//! Output formatting for CLI display.

use serialport::{SerialPortInfo, SerialPortType};

use flightlog::model::StatusFlags;

/// One flag name per line; every flag with a marker when `all` is set.
pub(super) fn format_flags(flags: StatusFlags, all: bool) -> String {
    if all {
        return flags
            .states()
            .map(|(name, set)| format!("[{}] {name}", if set { 'x' } else { ' ' }))
            .collect::<Vec<_>>()
            .join("\n");
    }
    flags.names().collect::<Vec<_>>().join("\n")
}

pub(super) fn describe_port(port: &SerialPortInfo) -> String {
    let kind = match &port.port_type {
        SerialPortType::UsbPort(usb) => {
            let mut s = format!("usb {:04x}:{:04x}", usb.vid, usb.pid);
            if let Some(product) = &usb.product {
                s.push(' ');
                s.push_str(product);
            }
            s
        }
        SerialPortType::PciPort => "pci".to_string(),
        SerialPortType::BluetoothPort => "bluetooth".to_string(),
        SerialPortType::Unknown => "unknown".to_string(),
    };
    format!("{}  [{kind}]", port.port_name)
}

/// Parse a raw status word, decimal or `0x`-prefixed hex.
pub(super) fn parse_word(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid status word '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use serialport::UsbPortInfo;

    #[test]
    fn lists_set_flags() {
        let flags = StatusFlags::DOCKED | StatusFlags::LANDING_GEAR_DOWN;
        assert_eq!(format_flags(flags, false), "DOCKED\nLANDING_GEAR_DOWN");
        assert_eq!(format_flags(StatusFlags::empty(), false), "");
    }

    #[test]
    fn lists_all_flags_with_markers() {
        let out = format_flags(StatusFlags::SHIELDS_UP, true);
        assert_eq!(out.lines().count(), 32);
        assert!(out.contains("[x] SHIELDS_UP"));
        assert!(out.contains("[ ] DOCKED"));
    }

    #[test]
    fn parses_decimal_and_hex_words() {
        assert_eq!(parse_word("553713677"), Ok(553_713_677));
        assert_eq!(parse_word("0x01000008"), Ok(0x0100_0008));
        assert!(parse_word("-1").is_err());
        assert!(parse_word("0xZZ").is_err());
    }

    #[test]
    fn describes_usb_port() {
        let port = SerialPortInfo {
            port_name: "/dev/ttyACM0".into(),
            port_type: SerialPortType::UsbPort(UsbPortInfo {
                vid: 0x2341,
                pid: 0x0043,
                serial_number: None,
                manufacturer: None,
                product: Some("Arduino Uno".into()),
            }),
        };
        assert_eq!(describe_port(&port), "/dev/ttyACM0  [usb 2341:0043 Arduino Uno]");
    }
}
