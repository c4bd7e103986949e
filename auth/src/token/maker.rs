use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::aead::AeadCore;
use chacha20poly1305::aead::KeyInit;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::aead::Payload as AeadPayload;
use chacha20poly1305::XChaCha20Poly1305;
use chacha20poly1305::XNonce;
use chrono::Duration;
use chrono::Utc;

use super::errors::TokenError;
use super::payload::Payload;

/// Version header prefixed to every token, also bound as associated data.
const TOKEN_HEADER: &str = "v1.local.";

/// XChaCha20 nonce size (24 bytes / 192 bits).
const NONCE_SIZE: usize = 24;

/// Required symmetric key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Issues and verifies symmetric encrypted tokens.
///
/// The payload is serialized to JSON and sealed with XChaCha20-Poly1305, so
/// token contents are both confidential and tamper-evident. Token layout:
/// `v1.local.<base64url(nonce || ciphertext)>`.
pub struct TokenMaker {
    cipher: XChaCha20Poly1305,
}

impl TokenMaker {
    /// Create a new token maker from a symmetric key.
    ///
    /// # Arguments
    /// * `symmetric_key` - Secret key, exactly 32 bytes
    ///
    /// # Errors
    /// * `InvalidKeySize` - Key is not 32 bytes long
    pub fn new(symmetric_key: &[u8]) -> Result<Self, TokenError> {
        if symmetric_key.len() != KEY_SIZE {
            return Err(TokenError::InvalidKeySize {
                expected: KEY_SIZE,
                actual: symmetric_key.len(),
            });
        }

        let cipher = XChaCha20Poly1305::new_from_slice(symmetric_key).map_err(|_| {
            TokenError::InvalidKeySize {
                expected: KEY_SIZE,
                actual: symmetric_key.len(),
            }
        })?;

        Ok(Self { cipher })
    }

    /// Issue a token for `subject` valid for `duration`.
    ///
    /// # Returns
    /// Token material and the payload embedded in it
    ///
    /// # Errors
    /// * `EncodingFailed` - Payload could not be serialized or sealed
    pub fn create_token(
        &self,
        subject: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(subject, duration)?;

        let plaintext = serde_json::to_vec(&payload)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(
                &nonce,
                AeadPayload {
                    msg: &plaintext,
                    aad: TOKEN_HEADER.as_bytes(),
                },
            )
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let mut combined = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        combined.extend_from_slice(&nonce);
        combined.extend_from_slice(&ciphertext);

        let token = format!("{}{}", TOKEN_HEADER, URL_SAFE_NO_PAD.encode(&combined));

        Ok((token, payload))
    }

    /// Decrypt and authenticate a token.
    ///
    /// # Returns
    /// The payload exactly as it was issued
    ///
    /// # Errors
    /// * `InvalidToken` - Wrong header, bad encoding, failed authentication or malformed payload
    /// * `ExpiredToken` - Payload expiry is at or before the current time
    pub fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        let encoded = token
            .strip_prefix(TOKEN_HEADER)
            .ok_or_else(|| TokenError::InvalidToken("unsupported token header".to_string()))?;

        let combined = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?;

        if combined.len() <= NONCE_SIZE {
            return Err(TokenError::InvalidToken("token too short".to_string()));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_SIZE);
        let plaintext = self
            .cipher
            .decrypt(
                XNonce::from_slice(nonce_bytes),
                AeadPayload {
                    msg: ciphertext,
                    aad: TOKEN_HEADER.as_bytes(),
                },
            )
            .map_err(|_| TokenError::InvalidToken("authentication failed".to_string()))?;

        let payload: Payload = serde_json::from_slice(&plaintext)
            .map_err(|e| TokenError::InvalidToken(format!("malformed payload: {}", e)))?;

        if payload.is_expired(Utc::now()) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(payload)
    }
}
