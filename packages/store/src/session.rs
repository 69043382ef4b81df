//! Session backend seam.
//!
//! Sign-in and sign-out are shaped as async calls so a real identity provider
//! can slot in later. [`DemoSession`] resolves immediately with the configured
//! demo record.

use std::future::Future;

use crate::error::Result;
use crate::models::UserRecord;

/// Async interface for establishing and ending a session.
pub trait SessionBackend {
    fn sign_in(&self) -> impl Future<Output = Result<UserRecord>>;
    fn sign_out(&self) -> impl Future<Output = Result<()>>;
}

/// Backend that signs in a fixed record and never fails.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoSession {
    user: UserRecord,
}

impl DemoSession {
    pub fn new(user: UserRecord) -> Self {
        Self { user }
    }
}

impl SessionBackend for DemoSession {
    async fn sign_in(&self) -> Result<UserRecord> {
        Ok(self.user.clone())
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(())
    }
}
