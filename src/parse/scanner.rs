//! Character scanner for dotted-quad input.
//!
//! Walks the text once, collecting four numeric sections and an optional
//! `/mask` part. Nothing here panics: every malformed input becomes an
//! [`IpError::Validation`] carrying a message fit for the user.

use crate::error::IpError;

const SECTIONS: usize = 4;

/// Scan a plain `a.b.c.d` address; a `/mask` part is an error.
pub fn scan_ipv4(input: &str) -> Result<[u8; 4], IpError> {
    let text = input.trim();
    match scan_quad(text)? {
        (octets, None) => {
            log::trace!("scan_ipv4({text}) -> {octets:?}");
            Ok(octets)
        }
        (_, Some(_)) => Err(IpError::validation(format!(
            "IPv4 address should not contain mask part: '{text}'"
        ))),
    }
}

/// Scan `a.b.c.d/n` notation; the mask part is mandatory.
pub fn scan_cidr(input: &str) -> Result<([u8; 4], u8), IpError> {
    let text = input.trim();
    let (octets, mask_text) = scan_quad(text)?;
    let mask_text = mask_text.ok_or_else(|| {
        IpError::validation(format!("CIDR should contain mask part: '{text}'"))
    })?;
    let mask = scan_mask(mask_text, text)?;
    log::trace!("scan_cidr({text}) -> {octets:?}/{mask}");
    Ok((octets, mask))
}

/// Four sections of `text` plus whatever follows the first `/`.
fn scan_quad(text: &str) -> Result<([u8; 4], Option<&str>), IpError> {
    if text.is_empty() {
        return Err(IpError::validation("IP address should not be empty"));
    }

    let mut octets = [0u8; SECTIONS];
    let mut section = 0usize;
    // Value of the section being read, None until a digit is seen.
    let mut current: Option<u32> = None;
    let mut mask_text: Option<&str> = None;

    for (pos, ch) in text.char_indices() {
        match ch {
            '0'..='9' => {
                let digit = ch as u32 - '0' as u32;
                let value = current.unwrap_or(0) * 10 + digit;
                if value > 255 {
                    return Err(IpError::validation(format!(
                        "IP section {} should be in range 0-255 in '{text}'",
                        section + 1
                    )));
                }
                current = Some(value);
            }
            '.' => {
                let value = current.take().ok_or_else(|| {
                    IpError::validation(format!(
                        "IP section {} should not be empty in '{text}'",
                        section + 1
                    ))
                })?;
                if section + 1 >= SECTIONS {
                    return Err(too_many_sections(text));
                }
                octets[section] = value as u8;
                section += 1;
            }
            '/' => {
                mask_text = Some(&text[pos + 1..]);
                break;
            }
            other => {
                return Err(IpError::validation(format!(
                    "IP address contains invalid character '{other}' in '{text}'"
                )));
            }
        }
    }

    let value = current.ok_or_else(|| {
        IpError::validation(format!(
            "IP section {} should not be empty in '{text}'",
            section + 1
        ))
    })?;
    if section + 1 != SECTIONS {
        return Err(IpError::validation(format!(
            "IP address should contain {SECTIONS} sections, found {} in '{text}'",
            section + 1
        )));
    }
    octets[section] = value as u8;

    Ok((octets, mask_text))
}

fn too_many_sections(text: &str) -> IpError {
    IpError::validation(format!(
        "IP address should contain {SECTIONS} sections in '{text}'"
    ))
}

/// Mask part of a CIDR, digits only and within 1-32.
fn scan_mask(mask: &str, text: &str) -> Result<u8, IpError> {
    if mask.is_empty() {
        return Err(IpError::validation(format!(
            "Mask part should not be empty in '{text}'"
        )));
    }
    let mut value: u32 = 0;
    for ch in mask.chars() {
        let digit = ch.to_digit(10).ok_or_else(|| {
            IpError::validation(format!(
                "Mask part contains invalid character '{ch}' in '{text}'"
            ))
        })?;
        value = value * 10 + digit;
        if value > 32 {
            break;
        }
    }
    if !(1..=32).contains(&value) {
        return Err(IpError::validation(format!(
            "Mask {mask} should be in range 1-32 in '{text}'"
        )));
    }
    Ok(value as u8)
}
