// Passphrase sealing for hidden messages: AES-256-GCM, key = SHA-256(salt || passphrase).
// Sealed form: PREFIX + base64(version + iv + ciphertext), no whitespace, so it
// passes through message normalization untouched.

use aead::generic_array::GenericArray;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
};
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

const PREFIX: &str = "swl1:";
const VERSION: u8 = 1;
const KEY_SALT: &[u8] = b"swatchline-seal-v1";
const IV_LEN: usize = 12;
const TAG_LEN: usize = 16;

fn derive_key(passphrase: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(KEY_SALT);
    hasher.update(passphrase.as_bytes());
    hasher.finalize().into()
}

fn cipher(passphrase: &str) -> Result<Aes256Gcm> {
    Aes256Gcm::new_from_slice(&derive_key(passphrase)).map_err(|e| Error::Seal(e.to_string()))
}

/// Encrypts `plaintext` into a printable token.
pub fn seal(plaintext: &str, passphrase: &str) -> Result<String> {
    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);
    let nonce = GenericArray::from_slice(&iv);
    let ciphertext = cipher(passphrase)?
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| Error::Seal(e.to_string()))?;
    let mut raw = Vec::with_capacity(1 + IV_LEN + ciphertext.len());
    raw.push(VERSION);
    raw.extend_from_slice(&iv);
    raw.extend_from_slice(&ciphertext);
    Ok(format!(
        "{PREFIX}{}",
        base64::engine::general_purpose::STANDARD.encode(raw)
    ))
}

/// Decrypts a token produced by [`seal`].
pub fn open(sealed: &str, passphrase: &str) -> Result<String> {
    let body = sealed
        .trim()
        .strip_prefix(PREFIX)
        .ok_or_else(|| Error::Seal("not a sealed message".to_string()))?;
    let raw = base64::engine::general_purpose::STANDARD
        .decode(body)
        .map_err(|e| Error::Seal(e.to_string()))?;
    if raw.len() < 1 + IV_LEN + TAG_LEN {
        return Err(Error::Seal("sealed message too short".to_string()));
    }
    if raw[0] != VERSION {
        return Err(Error::Seal(format!("unsupported seal version {}", raw[0])));
    }
    let nonce = GenericArray::from_slice(&raw[1..1 + IV_LEN]);
    let plain = cipher(passphrase)?
        .decrypt(nonce, &raw[1 + IV_LEN..])
        .map_err(|_| Error::Seal("decryption failed (wrong passphrase?)".to_string()))?;
    String::from_utf8(plain).map_err(|e| Error::Seal(e.to_string()))
}

/// True if `text` looks like a sealed token.
pub fn is_sealed(text: &str) -> bool {
    text.trim_start().starts_with(PREFIX)
}
