//! Shared key generation for storage backends.
//!
//! Key format: `payments/{registration_id}.{ext}`.

/// Generate the storage key for a payment proof.
///
/// All backends must use this format for consistency.
pub fn payment_proof_key(registration_id: &str, extension: &str) -> String {
    format!("payments/{}.{}", registration_id, extension)
}

/// Extract a safe file extension from an uploaded filename.
///
/// Lowercased and restricted to ASCII alphanumerics; anything else (missing
/// extension, traversal attempts, exotic characters) falls back to `bin`.
pub fn file_extension(filename: &str) -> String {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let ext: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if ext.is_empty() {
        "bin".to_string()
    } else {
        ext
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_uses_payments_namespace() {
        assert_eq!(
            payment_proof_key("REG-1733500000000-ab12cd", "png"),
            "payments/REG-1733500000000-ab12cd.png"
        );
    }

    #[test]
    fn extension_is_sanitized() {
        assert_eq!(file_extension("proof.PNG"), "png");
        assert_eq!(file_extension("screenshot.jpeg"), "jpeg");
        assert_eq!(file_extension("noext"), "bin");
        assert_eq!(file_extension("../../etc/passwd"), "bin");
        assert_eq!(file_extension("weird.p/n..g"), "g");
    }
}
