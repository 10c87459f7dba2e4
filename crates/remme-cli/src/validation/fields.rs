//! Single-value validators
//!
//! Each validator takes the raw command-line value and returns the
//! normalized value or the message shown to the user.

use once_cell::sync::Lazy;
use regex::Regex;

use remme_sdk::types::family;
use remme_sdk::Bet;

const ADDRESS_LEN: usize = 70;
const PUBLIC_KEY_LEN: usize = 66;
const PRIVATE_KEY_LEN: usize = 64;
const HEADER_SIGNATURE_LEN: usize = 128;
const SWAP_ID_LEN: usize = 64;

static DOMAIN_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$",
    )
    .expect("domain name pattern compiles")
});

/// Kinds of header signature identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Batch header signature
    Batch,
    /// Block header signature
    Block,
    /// Transaction header signature
    Transaction,
}

impl IdentifierKind {
    fn name(self) -> &'static str {
        match self {
            IdentifierKind::Batch => "batch",
            IdentifierKind::Block => "block",
            IdentifierKind::Transaction => "transaction",
        }
    }
}

/// How a list of identifiers is separated on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `a, b, c`
    Comma,
    /// `a b c`
    Whitespace,
}

/// Outcome of a limit check that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Reported against the `limit` field
    Field(String),
    /// Reported for the request as a whole
    Request(String),
}

fn is_lower_hex(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Account or state address: 70 lowercase hex characters
pub fn address(raw: &str) -> Result<String, String> {
    if is_lower_hex(raw, ADDRESS_LEN) {
        Ok(raw.to_string())
    } else {
        Err(format!("The following address `{}` is invalid.", raw))
    }
}

/// Compressed public key: 66 lowercase hex characters
pub fn public_key(raw: &str) -> Result<String, String> {
    if is_lower_hex(raw, PUBLIC_KEY_LEN) {
        Ok(raw.to_string())
    } else {
        Err(format!("The following public key `{}` is invalid.", raw))
    }
}

/// Private key: 64 lowercase hex characters. The value is never echoed.
pub fn private_key(raw: &str) -> Result<String, String> {
    if is_lower_hex(raw, PRIVATE_KEY_LEN) {
        Ok(raw.to_string())
    } else {
        Err("The following private key is invalid.".to_string())
    }
}

/// Batch, block or transaction identifier: 128 lowercase hex characters
pub fn identifier(kind: IdentifierKind, raw: &str) -> Result<String, String> {
    if is_lower_hex(raw, HEADER_SIGNATURE_LEN) {
        Ok(raw.to_string())
    } else {
        Err(format!(
            "The following {} identifier `{}` is invalid.",
            kind.name(),
            raw
        ))
    }
}

/// List of identifiers; stops at the first invalid one
///
/// Every piece must be an identifier, so empty pieces and an empty list
/// are rejected.
pub fn identifiers(
    kind: IdentifierKind,
    delimiter: Delimiter,
    raw: &str,
) -> Result<Vec<String>, String> {
    let pieces: Vec<&str> = match delimiter {
        Delimiter::Comma => raw.split(',').map(str::trim).collect(),
        Delimiter::Whitespace => raw.split_whitespace().collect(),
    };

    if pieces.is_empty() {
        return identifier(kind, raw.trim()).map(|id| vec![id]);
    }

    pieces
        .into_iter()
        .map(|piece| identifier(kind, piece))
        .collect()
}

/// Atomic swap identifier: 64 lowercase hex characters
pub fn swap_id(raw: &str) -> Result<String, String> {
    if is_lower_hex(raw, SWAP_ID_LEN) {
        Ok(raw.to_string())
    } else {
        Err(format!("The following swap identifier `{}` is invalid.", raw))
    }
}

/// Node host without protocol
pub fn node_url(raw: &str) -> Result<String, String> {
    let value = raw.trim();

    if value == "localhost" || value == "127.0.0.1" {
        return Ok(value.to_string());
    }

    // `http` also covers `https`
    if value.contains("http") {
        return Err(format!(
            "Pass the following node URL `{}` without protocol (http, https, etc.).",
            raw
        ));
    }

    if DOMAIN_NAME.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!("The following node URL `{}` is invalid.", raw))
    }
}

/// Page size: an integer literal greater than zero
pub fn limit(raw: &str) -> Result<u64, LimitError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| LimitError::Request("Invalid limit count.".to_string()))?;

    if value <= 0 {
        return Err(LimitError::Field("Limit must be greater than 0.".to_string()));
    }

    Ok(value as u64)
}

/// Token amount: an integer literal greater than zero
pub fn amount(raw: &str) -> Result<u64, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("The following amount `{}` is invalid.", raw))?;

    if value <= 0 {
        return Err("Amount must be greater than 0.".to_string());
    }

    Ok(value as u64)
}

/// Transaction family name
pub fn family_name(raw: &str) -> Result<String, String> {
    if family::ALL.contains(&raw) {
        Ok(raw.to_string())
    } else {
        Err(format!("The following family name `{}` is invalid.", raw))
    }
}

/// Masternode bet: `min`, `max` or a positive amount
pub fn bet(raw: &str) -> Result<Bet, String> {
    let value = raw.trim();

    if value.eq_ignore_ascii_case("min") {
        return Ok(Bet::Min);
    }
    if value.eq_ignore_ascii_case("max") {
        return Ok(Bet::Max);
    }

    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("The following bet `{}` is invalid.", raw));
    }

    // A well-formed integer outside the i64 range is still a number
    let amount = match value.parse::<i64>() {
        Ok(amount) if amount > 0 => amount,
        _ => {
            return Err(format!(
                "The following bet `{}` is not supported to be set as masternode betting behavior.",
                raw
            ))
        }
    };

    Ok(Bet::Fixed(amount as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(len: usize) -> String {
        "0123456789abcdef".chars().cycle().take(len).collect()
    }

    #[test]
    fn test_address() {
        let valid = hex_of(70);
        assert_eq!(address(&valid), Ok(valid.clone()));

        let invalid: [&str; 5] = ["short", "", &hex_of(69), &hex_of(71), &valid.to_uppercase()];
        for bad in invalid {
            assert_eq!(
                address(bad),
                Err(format!("The following address `{}` is invalid.", bad))
            );
        }
        assert!(address(&format!("{}g", hex_of(69))).is_err());
    }

    #[test]
    fn test_keys() {
        assert!(public_key(&hex_of(66)).is_ok());
        assert!(public_key(&hex_of(64)).is_err());
        assert!(private_key(&hex_of(64)).is_ok());
        assert!(private_key(&hex_of(66)).is_err());
    }

    #[test]
    fn test_private_key_message_hides_value() {
        let secret = "my_secret_key_data_here";
        let message = private_key(secret).unwrap_err();
        assert!(!message.contains(secret));
    }

    #[test]
    fn test_identifier() {
        assert!(identifier(IdentifierKind::Batch, &hex_of(128)).is_ok());
        assert_eq!(
            identifier(IdentifierKind::Block, "abc"),
            Err("The following block identifier `abc` is invalid.".to_string())
        );
    }

    #[test]
    fn test_identifiers_comma() {
        let a = hex_of(128);
        let b = "f".repeat(128);
        let raw = format!(" {} ,{}, ", a, b);
        assert_eq!(
            identifiers(IdentifierKind::Transaction, Delimiter::Comma, &raw),
            Ok(vec![a, b])
        );
    }

    #[test]
    fn test_identifiers_whitespace() {
        let a = hex_of(128);
        let raw = format!("{}\n  {}", a, a);
        assert_eq!(
            identifiers(IdentifierKind::Batch, Delimiter::Whitespace, &raw).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_identifiers_fail_fast() {
        let raw = format!("{} first second", hex_of(128));
        assert_eq!(
            identifiers(IdentifierKind::Batch, Delimiter::Whitespace, &raw),
            Err("The following batch identifier `first` is invalid.".to_string())
        );
    }

    #[test]
    fn test_identifiers_reject_empty_pieces() {
        let a = hex_of(128);
        for raw in ["", ",", " , ", &format!("{},,{}", a, a) as &str] {
            assert_eq!(
                identifiers(IdentifierKind::Transaction, Delimiter::Comma, raw),
                Err("The following transaction identifier `` is invalid.".to_string())
            );
        }
        for raw in ["", "   "] {
            assert_eq!(
                identifiers(IdentifierKind::Batch, Delimiter::Whitespace, raw),
                Err("The following batch identifier `` is invalid.".to_string())
            );
        }
    }

    #[test]
    fn test_node_url_defaults_short_circuit() {
        assert_eq!(node_url("localhost"), Ok("localhost".to_string()));
        assert_eq!(node_url("127.0.0.1"), Ok("127.0.0.1".to_string()));
    }

    #[test]
    fn test_node_url_surrounding_whitespace() {
        assert_eq!(node_url("  localhost "), Ok("localhost".to_string()));
        assert_eq!(
            node_url(" node-genesis-testnet.remme.io\n"),
            Ok("node-genesis-testnet.remme.io".to_string())
        );
        assert_eq!(
            node_url(" node "),
            Err("The following node URL ` node ` is invalid.".to_string())
        );
    }

    #[test]
    fn test_node_url_protocol() {
        for raw in ["http://x.com", "https://node.remme.io", "httpnode.com", "http://localhost"] {
            assert_eq!(
                node_url(raw),
                Err(format!(
                    "Pass the following node URL `{}` without protocol (http, https, etc.).",
                    raw
                ))
            );
        }
    }

    #[test]
    fn test_node_url_domain() {
        assert!(node_url("node-genesis-testnet.remme.io").is_ok());
        assert!(node_url("159.89.104.9").is_ok());

        for raw in ["node", "-node.io", "node-.io", "node..io", "node.io:8080", "node io.com", ""] {
            assert_eq!(
                node_url(raw),
                Err(format!("The following node URL `{}` is invalid.", raw))
            );
        }
        assert!(node_url(&format!("{}.io", "a".repeat(64))).is_err());
        assert!(node_url(&format!("{}.io", "a".repeat(63))).is_ok());
    }

    #[test]
    fn test_limit() {
        assert_eq!(limit("10"), Ok(10));
        for raw in ["0", "-5"] {
            assert_eq!(
                limit(raw),
                Err(LimitError::Field("Limit must be greater than 0.".to_string()))
            );
        }
        assert_eq!(
            limit("99999999999999999999999"),
            Err(LimitError::Request("Invalid limit count.".to_string()))
        );
    }

    #[test]
    fn test_amount() {
        assert_eq!(amount("1"), Ok(1));
        assert_eq!(amount("0"), Err("Amount must be greater than 0.".to_string()));
        assert_eq!(amount("-3"), Err("Amount must be greater than 0.".to_string()));
        assert_eq!(
            amount("99999999999999999999"),
            Err("The following amount `99999999999999999999` is invalid.".to_string())
        );
    }

    #[test]
    fn test_family_name() {
        assert!(family_name("account").is_ok());
        assert!(family_name("node_account").is_ok());
        assert_eq!(
            family_name("coffee"),
            Err("The following family name `coffee` is invalid.".to_string())
        );
    }

    #[test]
    fn test_bet() {
        assert_eq!(bet("min"), Ok(Bet::Min));
        assert_eq!(bet("MAX"), Ok(Bet::Max));
        assert_eq!(bet("Max"), Ok(Bet::Max));
        assert_eq!(bet("25"), Ok(Bet::Fixed(25)));
        assert_eq!(bet("lots"), Err("The following bet `lots` is invalid.".to_string()));
        assert_eq!(
            bet("0"),
            Err("The following bet `0` is not supported to be set as masternode betting behavior."
                .to_string())
        );
        assert!(bet("-4").unwrap_err().contains("not supported"));
        assert_eq!(bet("1.5"), Err("The following bet `1.5` is invalid.".to_string()));
        assert_eq!(bet("-"), Err("The following bet `-` is invalid.".to_string()));
    }

    #[test]
    fn test_bet_out_of_range() {
        for raw in ["99999999999999999999", "-99999999999999999999"] {
            assert_eq!(
                bet(raw),
                Err(format!(
                    "The following bet `{}` is not supported to be set as masternode betting behavior.",
                    raw
                ))
            );
        }
    }
}
