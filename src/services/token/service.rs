//! Main token service implementation.

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{
    AccessClaims, Claims, RawClaims, RefreshClaims, TokenKind,
};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::RevocationRepository;

use super::config::TokenConfig;

/// Issues and validates the two token classes and consults the revocation
/// registry before honoring a refresh token.
pub struct TokenService<R: RevocationRepository> {
    revocations: Arc<R>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: RevocationRepository> TokenService<R> {
    pub fn new(revocations: Arc<R>, config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        // Issuer is checked manually so a class mismatch is reported as
        // WrongIssuer rather than a generic decode failure.
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            revocations,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token for `user_id`, expiring in one hour.
    pub fn issue_access(&self, user_id: u32, email: &str) -> DomainResult<String> {
        let claims = AccessClaims::new(user_id, email.to_string());
        self.encode_raw(&RawClaims::from(&claims))
    }

    /// Issues a refresh token for `user_id`, expiring in sixty days.
    pub fn issue_refresh(&self, user_id: u32) -> DomainResult<String> {
        let claims = RefreshClaims::new(user_id);
        self.encode_raw(&RawClaims::from(&claims))
    }

    /// Verifies signature and expiry, then checks the issuer tag against the
    /// expected token class. Returns the class-specific claims variant.
    pub fn decode(&self, raw: &str, expected: TokenKind) -> DomainResult<Claims> {
        match expected {
            TokenKind::Access => self.authenticate_access(raw).map(Claims::Access),
            TokenKind::Refresh => self.decode_refresh(raw).map(Claims::Refresh),
        }
    }

    /// Authenticates a caller-supplied access token.
    pub fn authenticate_access(&self, raw: &str) -> DomainResult<AccessClaims> {
        let raw_claims = self.decode_raw(raw, TokenKind::Access)?;
        let user_id = parse_subject(&raw_claims)?;
        let email = raw_claims
            .email
            .ok_or(TokenError::MissingClaim { claim: "email" })?;
        Ok(AccessClaims {
            user_id,
            email,
            issued_at: raw_claims.iat,
            expires_at: raw_claims.exp,
        })
    }

    fn decode_refresh(&self, raw: &str) -> DomainResult<RefreshClaims> {
        let raw_claims = self.decode_raw(raw, TokenKind::Refresh)?;
        let user_id = parse_subject(&raw_claims)?;
        Ok(RefreshClaims {
            user_id,
            issued_at: raw_claims.iat,
            expires_at: raw_claims.exp,
        })
    }

    /// Verifies a refresh token and consults the revocation registry.
    ///
    /// Revocation matches on the raw signed string, so a newer refresh token
    /// for the same user is unaffected by revoking an older one.
    pub async fn verify_refresh(&self, raw: &str) -> DomainResult<RefreshClaims> {
        let claims = self.decode_refresh(raw)?;
        if self.revocations.is_revoked(raw).await? {
            return Err(TokenError::Revoked.into());
        }
        Ok(claims)
    }

    fn decode_raw(&self, raw: &str, expected: TokenKind) -> DomainResult<RawClaims> {
        let data = decode::<RawClaims>(raw, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Unsigned,
            })?;
        let raw_claims = data.claims;
        if raw_claims.iss != expected.issuer() {
            return Err(TokenError::WrongIssuer {
                expected: expected.issuer().to_string(),
                actual: raw_claims.iss,
            }
            .into());
        }
        Ok(raw_claims)
    }

    /// Registers a refresh token in the revocation registry. The token must
    /// validate as refresh-class first; revoking is idempotent.
    pub async fn revoke(&self, raw: &str) -> DomainResult<()> {
        self.decode(raw, TokenKind::Refresh)?;
        self.revocations.revoke(raw).await
    }

    fn encode_raw(&self, claims: &RawClaims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::SigningFailed.into())
    }
}

fn parse_subject(raw_claims: &RawClaims) -> Result<u32, TokenError> {
    raw_claims
        .sub
        .parse()
        .map_err(|_| TokenError::MissingClaim { claim: "sub" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::token::{ACCESS_ISSUER, REFRESH_ISSUER};
    use crate::errors::DomainError;
    use crate::repositories::MockRevocationRepository;
    use chrono::Utc;

    fn service() -> TokenService<MockRevocationRepository> {
        TokenService::new(
            Arc::new(MockRevocationRepository::new()),
            TokenConfig::new("test-secret"),
        )
    }

    #[tokio::test]
    async fn access_token_round_trips() {
        let service = service();
        let raw = service.issue_access(1, "a@b.com").unwrap();
        let claims = service.authenticate_access(&raw).unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.expires_at - claims.issued_at, 3600);
    }

    #[tokio::test]
    async fn refresh_token_round_trips() {
        let service = service();
        let raw = service.issue_refresh(7).unwrap();
        let claims = service.verify_refresh(&raw).await.unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.expires_at - claims.issued_at, 60 * 24 * 3600);
    }

    #[tokio::test]
    async fn cross_class_validation_fails_with_wrong_issuer() {
        let service = service();
        let access = service.issue_access(1, "a@b.com").unwrap();
        let refresh = service.issue_refresh(1).unwrap();

        let err = service.decode(&access, TokenKind::Refresh).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::WrongIssuer { ref expected, ref actual })
                if expected == REFRESH_ISSUER && actual == ACCESS_ISSUER
        ));

        let err = service.decode(&refresh, TokenKind::Access).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::WrongIssuer { ref expected, ref actual })
                if expected == ACCESS_ISSUER && actual == REFRESH_ISSUER
        ));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let service = service();
        let now = Utc::now().timestamp();
        let stale = RawClaims {
            iss: ACCESS_ISSUER.to_string(),
            sub: "1".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            email: Some("a@b.com".to_string()),
        };
        let raw = encode(
            &Header::new(Algorithm::HS256),
            &stale,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = service.decode(&raw, TokenKind::Access).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_unsigned() {
        let service = service();
        let other = TokenService::new(
            Arc::new(MockRevocationRepository::new()),
            TokenConfig::new("other-secret"),
        );
        let raw = other.issue_access(1, "a@b.com").unwrap();
        let err = service.decode(&raw, TokenKind::Access).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Unsigned)));
    }

    #[tokio::test]
    async fn garbage_string_is_unsigned() {
        let service = service();
        let err = service.decode("not.a.token", TokenKind::Access).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Unsigned)));
    }

    #[tokio::test]
    async fn revoked_refresh_token_is_rejected() {
        let service = service();
        let raw = service.issue_refresh(1).unwrap();
        service.revoke(&raw).await.unwrap();
        let err = service.verify_refresh(&raw).await.unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::Revoked)));
    }

    #[tokio::test]
    async fn revoking_one_token_leaves_others_live() {
        let service = service();
        let first = service.issue_refresh(1).unwrap();
        // Different iat makes a different signed string for the same user.
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
        let second = service.issue_refresh(1).unwrap();
        assert_ne!(first, second);

        service.revoke(&first).await.unwrap();
        assert!(service.verify_refresh(&first).await.is_err());
        service.verify_refresh(&second).await.unwrap();
    }

    #[tokio::test]
    async fn access_tokens_cannot_be_revoked() {
        let service = service();
        let raw = service.issue_access(1, "a@b.com").unwrap();
        let err = service.revoke(&raw).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::WrongIssuer { .. })
        ));
    }
}
