//! Request signing for the hosted asset provider.
//!
//! The provider authenticates API calls with
//! `SHA1("<k1>=<v1>&<k2>=<v2>..." + api_secret)`, where parameters are sorted
//! by key. Signed uploads go straight from the browser to the provider, so
//! the server only ever computes signatures and never handles file bytes.

use sha1::{Digest, Sha1};

/// Sign a set of request parameters with the provider secret.
///
/// Parameters are sorted by key and joined as `k=v` pairs separated by `&`
/// before the secret is appended. Returns the lowercase hex SHA-1 digest.
pub fn sign_params(params: &[(&str, &str)], secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Signature authorizing a direct upload at `timestamp` (unix seconds).
pub fn upload_signature(timestamp: i64, secret: &str) -> String {
    let timestamp = timestamp.to_string();
    sign_params(&[("timestamp", timestamp.as_str())], secret)
}
