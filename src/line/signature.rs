use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

/// Verifies the `x-line-signature` header: base64 of HMAC-SHA256 over the
/// raw request body, keyed with the channel secret. Comparison is
/// constant-time. The body must not be trusted before this passes.
pub fn verify(channel_secret: &str, signature: &str, body: &[u8]) -> AppResult<()> {
    let expected = STANDARD
        .decode(signature)
        .map_err(|_| AppError::InvalidSignature)?;

    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .map_err(|_| AppError::InvalidSignature)?;
    mac.update(body);
    mac.verify_slice(&expected)
        .map_err(|_| AppError::InvalidSignature)
}

/// Computes the signature a sender would attach for the given body.
pub fn sign(channel_secret: &str, body: &[u8]) -> AppResult<String> {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .map_err(|_| AppError::InvalidSignature)?;
    mac.update(body);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
