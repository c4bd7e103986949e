//! Authentication utilities library
//!
//! Provides the cryptographic building blocks of the account service:
//! - Password hashing (Argon2id)
//! - Encrypted, tamper-evident tokens (XChaCha20-Poly1305)
//! - Authentication coordination
//!
//! Services define their own ports and error mapping on top of these types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.compare("my_password", &hash).is_ok());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenMaker;
//! use chrono::Duration;
//!
//! let maker = TokenMaker::new(b"0123456789abcdef0123456789abcdef").unwrap();
//! let (token, payload) = maker.create_token("alice@example.com", Duration::minutes(15)).unwrap();
//! let verified = maker.verify_token(&token).unwrap();
//! assert_eq!(verified, payload);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"0123456789abcdef0123456789abcdef").unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! auth.verify_credentials("password123", &hash).unwrap();
//! let (token, _payload) = auth.issue_token("alice@example.com", Duration::hours(1)).unwrap();
//!
//! // Validate token
//! let payload = auth.validate_token(&token).unwrap();
//! assert_eq!(payload.subject, "alice@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Payload;
pub use token::TokenError;
pub use token::TokenMaker;
