use std::collections::HashSet;

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The id of the user
    pub sub: String,
    pub role: String,
    /// Expiry time as Unix timestamp
    pub exp: usize,
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Tokens signed with a random key are invalidated on restart.
    fn random() -> Self {
        let secret = BASE64.encode(rand::random::<[u8; 32]>());
        Self::new(&secret)
    }
}

pub struct JwtState {
    key: Key,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(secret: Option<&str>, time_valid: Duration) -> Self {
        let key = match secret {
            Some(secret) if !secret.is_empty() => Key::new(secret),
            _ => {
                log::warn!("No JWT secret configured, using a random one");
                Key::random()
            }
        };
        Self {
            key,
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, user_id: &str, role: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp,
        };
        Ok(encode(&Header::default(), &claims, &self.key.encoding_key)?)
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        Ok(self.decode(token)?.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens();
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_invalid_tokens(&self) {
        let mut blacklist = self.lock();
        let invalid_tokens = blacklist
            .iter()
            .filter(|token| self.decode(token).is_err())
            .cloned()
            .collect::<Vec<_>>();
        for token in invalid_tokens {
            blacklist.remove(&token);
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}
