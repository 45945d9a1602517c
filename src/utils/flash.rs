// Notices de redirect signées
//
// Pas de session côté serveur : la notice voyage dans la query string du
// redirect, signée en HMAC-SHA256 avec la clé secrète de l'application.
// Une signature invalide fait simplement disparaître la notice.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
    pub sig: Option<String>,
}

/// Construit la query string `notice=<base64url>&sig=<hex>` pour un redirect
pub fn to_query(message: &str, secret: &str) -> String {
    format!(
        "notice={}&sig={}",
        URL_SAFE_NO_PAD.encode(message),
        sign(message, secret)
    )
}

/// Rend le message si la signature vérifie, None sinon
pub fn verify(query: &NoticeQuery, secret: &str) -> Option<String> {
    let encoded = query.notice.as_ref()?;
    let sig = query.sig.as_ref()?;

    let raw = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    let message = String::from_utf8(raw).ok()?;
    let sig_bytes = hex::decode(sig).ok()?;

    // comparaison en temps constant via Mac::verify_slice
    mac(&message, secret).verify_slice(&sig_bytes).ok()?;
    Some(message)
}

fn sign(message: &str, secret: &str) -> String {
    hex::encode(mac(message, secret).finalize().into_bytes())
}

fn mac(message: &str, secret: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message.as_bytes());
    mac
}
