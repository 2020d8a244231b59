//! EMVCo PIX BR Code payload builder
//!
//! Builds the static "copia e cola" payload presented to customers. The
//! format is tag/length/value triplets closed by a CRC16-CCITT(FALSE)
//! checksum, per the Banco Central BR Code manual.

/// CRC16-CCITT(FALSE): poly 0x1021, init 0xFFFF, no reflection
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    const POLY: u16 = 0x1021;
    let mut crc: u16 = 0xFFFF;
    for &b in data {
        crc ^= (b as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// One EMV tag-length-value field. Lengths are byte counts, two digits.
fn emv_field(tag: &str, value: &str) -> String {
    format!("{tag}{:02}{value}", value.len())
}

/// Truncate to at most `max` bytes without splitting a char
fn clamp(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Format integer cents as the EMV decimal amount ("70.00")
pub fn format_amount(amount_cents: i64) -> String {
    format!("{}.{:02}", amount_cents / 100, amount_cents % 100)
}

/// Build a static PIX BR Code payload.
///
/// `key` is the merchant PIX key, `merchant_name`/`merchant_city` are clamped
/// to the EMV limits (25/15 bytes), `txid` to 25 bytes.
pub fn build_brcode(
    key: &str,
    merchant_name: &str,
    merchant_city: &str,
    amount_cents: i64,
    txid: &str,
) -> String {
    let merchant_account = emv_field(
        "26",
        &format!(
            "{}{}",
            emv_field("00", "BR.GOV.BCB.PIX"),
            emv_field("01", key)
        ),
    );
    let additional_data = emv_field("62", &emv_field("05", clamp(txid, 25)));

    let mut payload = String::new();
    payload.push_str(&emv_field("00", "01")); // payload format indicator
    payload.push_str(&emv_field("01", "12")); // point of initiation: dynamic
    payload.push_str(&merchant_account);
    payload.push_str(&emv_field("52", "0000")); // merchant category
    payload.push_str(&emv_field("53", "986")); // currency: BRL
    payload.push_str(&emv_field("54", &format_amount(amount_cents)));
    payload.push_str(&emv_field("58", "BR"));
    payload.push_str(&emv_field("59", clamp(merchant_name, 25)));
    payload.push_str(&emv_field("60", clamp(merchant_city, 15)));
    payload.push_str(&additional_data);
    payload.push_str("6304"); // CRC tag + length, checksum covers it

    let crc = crc16_ccitt(payload.as_bytes());
    format!("{payload}{crc:04X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc16_matches_reference_vector() {
        // CRC-16/CCITT-FALSE check value
        assert_eq!(crc16_ccitt(b"123456789"), 0x29B1);
    }

    #[test]
    fn amount_formatting() {
        assert_eq!(format_amount(7000), "70.00");
        assert_eq!(format_amount(7005), "70.05");
        assert_eq!(format_amount(99), "0.99");
    }

    #[test]
    fn payload_structure() {
        let code = build_brcode("+5518997053664", "Disk Mensagem", "CIDADE", 7000, "DM000042");
        assert!(code.starts_with("000201"));
        assert!(code.contains("BR.GOV.BCB.PIX"));
        assert!(code.contains("+5518997053664"));
        assert!(code.contains("5303986"));
        assert!(code.contains("540570.00"));
        assert!(code.contains("DM000042"));
    }

    #[test]
    fn payload_checksum_verifies() {
        let code = build_brcode("chave@pix.example", "Disk Mensagem", "CIDADE", 12345, "DM1");
        let (body, crc_hex) = code.split_at(code.len() - 4);
        let expected = crc16_ccitt(body.as_bytes());
        assert_eq!(crc_hex, format!("{expected:04X}"));
    }

    #[test]
    fn payload_is_deterministic() {
        let a = build_brcode("key", "Name", "City", 100, "DM9");
        let b = build_brcode("key", "Name", "City", 100, "DM9");
        assert_eq!(a, b);
    }

    #[test]
    fn long_fields_are_clamped() {
        let long_name = "N".repeat(60);
        let code = build_brcode("key", &long_name, "City", 100, "DM9");
        assert!(!code.contains(&long_name));
        assert!(code.contains(&"N".repeat(25)));
    }
}
