//! Per-party state machine for the SM2 key exchange

use core::fmt;

use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::{check_roles, AgreementInfo, AgreementResult, Sm2KeyExchange};
use crate::error::{validate, Error, Result};
use gmcrypt_algorithms::ec::PrimeFieldCurve;
use gmcrypt_algorithms::sm2::KeyPair;
use gmcrypt_common::SecretVec;
use gmcrypt_params::traditional::sm2::SM2_KX_MAX_KEY_LEN;

/// Progress of one party through the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No ephemeral key yet
    Start,
    /// Ephemeral key drawn; public info can be sent and the peer's received
    Exchanged,
    /// Key and own tag computed; the peer's tag is still outstanding
    Derived,
    /// The peer's tag matched
    Verified,
}

impl SessionState {
    fn name(self) -> &'static str {
        match self {
            SessionState::Start => "Start",
            SessionState::Exchanged => "Exchanged",
            SessionState::Derived => "Derived",
            SessionState::Verified => "Verified",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One party's side of a single exchange
///
/// Either party may derive first. The first to derive sends its info
/// with the tag included, and the other side then checks it in
/// [`derive`](Self::derive). The first party checks the reply's tag with
/// [`confirm`](Self::confirm).
pub struct KeyExchangeSession<'a> {
    engine: Sm2KeyExchange<'a>,
    static_key: &'a KeyPair,
    is_initiator: bool,
    key_len: usize,
    ephemeral: Option<KeyPair>,
    result: Option<AgreementResult>,
    state: SessionState,
}

impl<'a> KeyExchangeSession<'a> {
    /// Open a session for the party owning `static_key`
    ///
    /// The static key must have an identity bound and `key_len` must lie in
    /// `1..=SM2_KX_MAX_KEY_LEN`.
    pub fn new(
        curve: &'a PrimeFieldCurve,
        static_key: &'a KeyPair,
        is_initiator: bool,
        key_len: usize,
    ) -> Result<Self> {
        validate::key(static_key.z().is_some(), "static", "no identity bound")?;
        if key_len == 0 || key_len > SM2_KX_MAX_KEY_LEN {
            return Err(gmcrypt_algorithms::Error::param(
                "key_len",
                "key length must be between 1 and SM2_KX_MAX_KEY_LEN",
            )
            .into());
        }
        Ok(KeyExchangeSession {
            engine: Sm2KeyExchange::new(curve),
            static_key,
            is_initiator,
            key_len,
            ephemeral: None,
            result: None,
            state: SessionState::Start,
        })
    }

    /// Draw the ephemeral key and return the info to send
    pub fn start<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<AgreementInfo> {
        self.require(SessionState::Start, "start")?;
        let ephemeral = KeyPair::generate(self.engine.curve(), rng)?;
        self.start_with_ephemeral(ephemeral)
    }

    /// Use a caller-supplied ephemeral key instead of drawing one
    pub fn start_with_ephemeral(&mut self, ephemeral: KeyPair) -> Result<AgreementInfo> {
        self.require(SessionState::Start, "start")?;
        self.ephemeral = Some(ephemeral);
        self.state = SessionState::Exchanged;
        self.public_info(false)
    }

    /// The info to send, with this party's tag when `include_tag` is set
    ///
    /// The tag is only available once the key has been derived.
    pub fn public_info(&self, include_tag: bool) -> Result<AgreementInfo> {
        let ephemeral = self.ephemeral.as_ref().ok_or(Error::InvalidState {
            operation: "public_info",
            state: self.state.name(),
        })?;
        let tag = if include_tag {
            let result = self.result.as_ref().ok_or(Error::InvalidState {
                operation: "public_info with tag",
                state: self.state.name(),
            })?;
            Some(*result.tag())
        } else {
            None
        };
        self.engine
            .public_info(self.static_key, ephemeral, self.is_initiator, self.key_len, tag)
    }

    /// Derive the key from the peer's info
    ///
    /// Moves to [`SessionState::Verified`] when the peer's info carried a
    /// matching tag and to [`SessionState::Derived`] when it carried none.
    pub fn derive(&mut self, peer: &AgreementInfo) -> Result<()> {
        self.require(SessionState::Exchanged, "derive")?;
        check_roles(self.is_initiator, peer, self.key_len)?;
        let ephemeral = self.ephemeral.as_ref().ok_or(Error::InvalidState {
            operation: "derive",
            state: self.state.name(),
        })?;

        let result = self.engine.agree(self.static_key, ephemeral, peer)?;
        self.state = if result.is_peer_confirmed() {
            SessionState::Verified
        } else {
            SessionState::Derived
        };
        debug!(initiator = self.is_initiator, state = %self.state, "key derived");
        self.result = Some(result);
        Ok(())
    }

    /// Check the tag the peer sent after this party derived first
    pub fn confirm(&mut self, peer_tag: &[u8]) -> Result<()> {
        self.require(SessionState::Derived, "confirm")?;
        let result = self.result.as_mut().ok_or(Error::InvalidState {
            operation: "confirm",
            state: SessionState::Derived.name(),
        })?;
        result.confirm(peer_tag)?;
        self.state = SessionState::Verified;
        Ok(())
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether this party is the initiator
    pub fn is_initiator(&self) -> bool {
        self.is_initiator
    }

    /// Requested key length in bytes
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// The derived key, once available
    pub fn shared_secret(&self) -> Option<&SecretVec> {
        self.result.as_ref().map(AgreementResult::shared_secret)
    }

    fn require(&self, expected: SessionState, operation: &'static str) -> Result<()> {
        validate::state(self.state == expected, operation, self.state.name())
    }
}

impl fmt::Debug for KeyExchangeSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyExchangeSession")
            .field("is_initiator", &self.is_initiator)
            .field("key_len", &self.key_len)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
